use serde::{Deserialize, Serialize};

/// Highlighted variants returned by MeiliSearch (`_formatted`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormattedFields {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
}

/// Search result
///
/// Deserializes both raw gateway hits and already-normalized results: every
/// field except `id` is optional on the wire. Legacy display fields (`name`,
/// `description`, `type`, `date`, ...) are filled by
/// [`crate::domain::services::normalize`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,

    // MeiliSearch document fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<String>,
    #[serde(rename = "_formatted", default, skip_serializing_if = "Option::is_none")]
    pub formatted: Option<FormattedFields>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    // Legacy compatibility fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl SearchResult {
    /// `name`, falling back to `title`
    pub fn display_title(&self) -> &str {
        non_empty(self.name.as_deref()).unwrap_or(self.title.as_str())
    }

    /// `description`, falling back to `summary`
    pub fn display_description(&self) -> &str {
        non_empty(self.description.as_deref()).unwrap_or(self.summary.as_str())
    }

    /// `type`, falling back to the raw MIME type
    pub fn display_type(&self) -> &str {
        non_empty(self.kind.as_deref())
            .or(self.mime_type.as_deref())
            .unwrap_or_default()
    }

    /// `date`, falling back to `uploadedAt`
    pub fn display_date(&self) -> &str {
        non_empty(self.date.as_deref())
            .or(self.uploaded_at.as_deref())
            .unwrap_or_default()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Indexable gateway document (shared with content-skimmer)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchDocument {
    pub id: String,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub entities: Vec<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    /// Overwritten with the caller's id before submission; the gateway
    /// enforces its own value.
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub uploaded_at: String,
    #[serde(default)]
    pub last_analyzed: String,

    // Trading portal extensions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<DocumentCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<DocumentPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tradeable_markets: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regulatory_tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentCategory {
    MarketAnalysis,
    TradeOpportunity,
    Research,
    Regulatory,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentPriority {
    High,
    Medium,
    Low,
}

/// Search request sent to `POST {gateway}/search`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    pub q: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<String>>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            q: query.into(),
            ..Default::default()
        }
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_page(mut self, limit: usize, offset: usize) -> Self {
        self.limit = Some(limit);
        self.offset = Some(offset);
        self
    }

    pub fn with_sort(mut self, sort: Vec<String>) -> Self {
        self.sort = Some(sort);
        self
    }
}

/// Gateway search response (MeiliSearch format)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: Vec<SearchResult>,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub processing_time_ms: u64,
    #[serde(default)]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub estimated_total_hits: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facet_distribution: Option<serde_json::Value>,
}

impl SearchResponse {
    /// More hits exist past this page
    pub fn has_more(&self) -> bool {
        self.offset + self.hits.len() < self.estimated_total_hits
    }
}
