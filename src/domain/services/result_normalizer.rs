//! Reconciles MeiliSearch hits with the legacy result display fields.
//!
//! The fallback rules live in one table (`LEGACY_FALLBACKS`) applied once
//! when a hit enters the system; components only read the filled fields.

use chrono::DateTime;

use crate::domain::models::SearchResult;
use crate::shared::logging::log_dropped_hit;

/// Legacy display fields and the canonical field each one falls back to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LegacyField {
    Name,
    Description,
    Type,
    Date,
}

impl LegacyField {
    fn canonical(self) -> &'static str {
        match self {
            LegacyField::Name => "title",
            LegacyField::Description => "summary",
            LegacyField::Type => "mimeType",
            LegacyField::Date => "uploadedAt",
        }
    }

    fn slot(self, result: &mut SearchResult) -> &mut Option<String> {
        match self {
            LegacyField::Name => &mut result.name,
            LegacyField::Description => &mut result.description,
            LegacyField::Type => &mut result.kind,
            LegacyField::Date => &mut result.date,
        }
    }

    fn source(self, result: &SearchResult) -> Option<String> {
        match self {
            LegacyField::Name => Some(result.title.clone()),
            LegacyField::Description => Some(result.summary.clone()),
            LegacyField::Type => result.mime_type.clone(),
            LegacyField::Date => result.uploaded_at.clone(),
        }
    }
}

const LEGACY_FALLBACKS: [LegacyField; 4] = [
    LegacyField::Name,
    LegacyField::Description,
    LegacyField::Type,
    LegacyField::Date,
];

/// Caller-supplied normalization options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizeOptions {
    /// Template for results without a url; `{id}` is replaced by the result id.
    pub url_template: Option<String>,
}

/// Fill every legacy field from its canonical source.
///
/// Pure and idempotent. `size`, `thumbnail` and `tags` have no backend source
/// and are left as supplied.
pub fn normalize(raw: SearchResult) -> SearchResult {
    normalize_with(raw, &NormalizeOptions::default())
}

pub fn normalize_with(mut raw: SearchResult, options: &NormalizeOptions) -> SearchResult {
    for field in LEGACY_FALLBACKS {
        let missing = field.slot(&mut raw).as_deref().is_none_or(str::is_empty);
        if !missing {
            continue;
        }
        if let Some(value) = field.source(&raw).filter(|v| !v.is_empty()) {
            tracing::trace!(legacy = ?field, canonical = field.canonical(), "Filled legacy field");
            *field.slot(&mut raw) = Some(value);
        }
    }

    if raw.url.as_deref().is_none_or(str::is_empty) {
        if let Some(template) = &options.url_template {
            raw.url = Some(template.replace("{id}", &raw.id));
        }
    }

    raw
}

/// Normalize a page of hits, dropping those without an id or a display title
pub fn normalize_hits(hits: Vec<SearchResult>, options: &NormalizeOptions) -> Vec<SearchResult> {
    hits.into_iter()
        .map(|hit| normalize_with(hit, options))
        .filter(|result| {
            if result.id.trim().is_empty() {
                log_dropped_hit(&result.id, "missing id");
                return false;
            }
            if result.display_title().trim().is_empty() {
                log_dropped_hit(&result.id, "missing title");
                return false;
            }
            true
        })
        .collect()
}

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human readable file size: `1536 -> "1.5 KB"`
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    // Integer floor(log1024(bytes)); float logs drift on exact powers of 1024.
    let mut unit = 0;
    let mut scale: u64 = 1;
    while unit + 1 < SIZE_UNITS.len() && bytes >= scale * 1024 {
        scale *= 1024;
        unit += 1;
    }

    let value = ((bytes as f64 / scale as f64) * 100.0).round() / 100.0;
    format!("{} {}", value, SIZE_UNITS[unit])
}

/// `Match: 87%`; zero or missing scores are not shown
pub fn score_label(score: Option<f64>) -> Option<String> {
    let score = score.filter(|s| *s > 0.0)?;
    let percent = (score.clamp(0.0, 1.0) * 100.0).round() as u32;
    Some(format!("Match: {percent}%"))
}

/// RFC 3339 timestamp as `YYYY-MM-DD`; anything else is returned as-is
pub fn display_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
