use serde::{Deserialize, Serialize};

use super::status::{SearchServiceState, ServiceStatusSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Online,
    Offline,
    Error,
}

impl HealthState {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthState::Online => "online",
            HealthState::Offline => "offline",
            HealthState::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meilisearch_code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meilisearch_message: Option<String>,
}

/// Interpreted result of `GET {gateway}/health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealthStatus {
    pub gateway: HealthState,
    pub meilisearch: HealthState,
    pub timestamp: String,
    #[serde(default)]
    pub details: HealthDetails,
}

impl ServiceHealthStatus {
    /// Map probe results onto the status panel signals
    pub fn to_snapshot(&self) -> ServiceStatusSnapshot {
        let search_service = match (self.gateway, self.meilisearch) {
            (HealthState::Online, HealthState::Online) => SearchServiceState::Connected,
            _ => SearchServiceState::Disconnected,
        };

        ServiceStatusSnapshot {
            is_connected: self.gateway != HealthState::Offline,
            search_service,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn health(gateway: HealthState, meilisearch: HealthState) -> ServiceHealthStatus {
        ServiceHealthStatus {
            gateway,
            meilisearch,
            timestamp: "2025-01-01T00:00:00Z".to_string(),
            details: HealthDetails::default(),
        }
    }

    #[test]
    fn test_to_snapshot_online() {
        let snapshot = health(HealthState::Online, HealthState::Online).to_snapshot();
        assert!(snapshot.is_connected);
        assert_eq!(snapshot.search_service, SearchServiceState::Connected);
    }

    #[test]
    fn test_to_snapshot_meilisearch_down() {
        let snapshot = health(HealthState::Online, HealthState::Offline).to_snapshot();
        assert!(snapshot.is_connected);
        assert_eq!(snapshot.search_service, SearchServiceState::Disconnected);
    }

    #[test]
    fn test_to_snapshot_gateway_unreachable() {
        let snapshot = health(HealthState::Offline, HealthState::Offline).to_snapshot();
        assert!(!snapshot.is_connected);
    }
}
