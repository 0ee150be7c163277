use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchServiceState {
    #[default]
    Connected,
    Disconnected,
    Loading,
}

impl SearchServiceState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchServiceState::Connected => "connected",
            SearchServiceState::Disconnected => "disconnected",
            SearchServiceState::Loading => "loading",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseState {
    #[default]
    Ready,
    Error,
    Loading,
}

impl DatabaseState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseState::Ready => "ready",
            DatabaseState::Error => "error",
            DatabaseState::Loading => "loading",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsState {
    #[default]
    Active,
    Inactive,
}

impl AnalyticsState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyticsState::Active => "active",
            AnalyticsState::Inactive => "inactive",
        }
    }
}

/// Extension point: any additional service with a free-form status string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomService {
    pub name: String,
    pub status: String,
    pub display_name: String,
}

/// Per-service connectivity signals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceStatusSnapshot {
    pub is_connected: bool,
    pub search_service: SearchServiceState,
    pub database: DatabaseState,
    pub analytics: AnalyticsState,
    pub custom_services: Vec<CustomService>,
}

impl Default for ServiceStatusSnapshot {
    fn default() -> Self {
        Self {
            is_connected: true,
            search_service: SearchServiceState::default(),
            database: DatabaseState::default(),
            analytics: AnalyticsState::default(),
            custom_services: Vec::new(),
        }
    }
}

/// Aggregate connectivity derived from a [`ServiceStatusSnapshot`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverallStatus {
    Offline,
    Loading,
    Error,
    Online,
}

impl OverallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallStatus::Offline => "Offline",
            OverallStatus::Loading => "Loading",
            OverallStatus::Error => "Error",
            OverallStatus::Online => "Online",
        }
    }

    /// CSS modifier, e.g. `search-status--online`
    pub fn css_modifier(&self) -> &'static str {
        match self {
            OverallStatus::Offline => "offline",
            OverallStatus::Loading => "loading",
            OverallStatus::Error => "error",
            OverallStatus::Online => "online",
        }
    }

    pub fn label(&self) -> String {
        format!("System {}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStatusKind {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
    Empty,
}

impl SearchStatusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchStatusKind::Idle => "idle",
            SearchStatusKind::Loading => "loading",
            SearchStatusKind::Success => "success",
            SearchStatusKind::Error => "error",
            SearchStatusKind::Empty => "empty",
        }
    }
}

/// Search lifecycle status shown in the banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStatus {
    #[serde(rename = "type")]
    pub kind: SearchStatusKind,
    pub message: String,
}

impl SearchStatus {
    pub fn new(kind: SearchStatusKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_defaults_match_component_defaults() {
        let snapshot: ServiceStatusSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.is_connected);
        assert_eq!(snapshot.search_service, SearchServiceState::Connected);
        assert_eq!(snapshot.database, DatabaseState::Ready);
        assert_eq!(snapshot.analytics, AnalyticsState::Active);
        assert!(snapshot.custom_services.is_empty());
    }

    #[test]
    fn test_snapshot_wire_format() {
        let snapshot: ServiceStatusSnapshot = serde_json::from_value(serde_json::json!({
            "isConnected": true,
            "searchService": "loading",
            "database": "error",
            "analytics": "inactive",
            "customServices": [{ "name": "ocr", "status": "degraded", "displayName": "OCR" }]
        }))
        .unwrap();
        assert_eq!(snapshot.search_service, SearchServiceState::Loading);
        assert_eq!(snapshot.database, DatabaseState::Error);
        assert_eq!(snapshot.custom_services[0].display_name, "OCR");
    }

    #[test]
    fn test_overall_label() {
        assert_eq!(OverallStatus::Online.label(), "System Online");
        assert_eq!(OverallStatus::Offline.css_modifier(), "offline");
    }
}
