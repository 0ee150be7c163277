use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use crate::domain::models::{HealthDetails, HealthState, ServiceHealthStatus};
use crate::shared::logging::{log_health_failure, log_health_result};

use super::search_gateway::SearchGatewayClient;

/// Probes the gateway `/health` endpoint
#[derive(Debug, Clone)]
pub struct HealthService {
    client: SearchGatewayClient,
}

impl HealthService {
    pub fn new(client: SearchGatewayClient) -> Self {
        Self { client }
    }

    /// Never fails: an unreachable gateway reports both services offline
    pub async fn check_health(&self) -> ServiceHealthStatus {
        match self.client.probe_health().await {
            Ok((status, body)) => {
                let health = interpret(status.as_u16(), status.is_success(), &body);
                log_health_result(health.gateway.as_str(), health.meilisearch.as_str());
                health
            }
            Err(e) => {
                let message = e.to_string();
                log_health_failure(&message);
                ServiceHealthStatus {
                    gateway: HealthState::Offline,
                    meilisearch: HealthState::Offline,
                    timestamp: now(),
                    details: HealthDetails {
                        gateway_message: Some(message),
                        meilisearch_message: Some("Cannot connect to gateway".to_string()),
                        ..Default::default()
                    },
                }
            }
        }
    }
}

fn interpret(code: u16, ok: bool, body: &Value) -> ServiceHealthStatus {
    let meili = body.get("meilisearch");
    let available = meili
        .and_then(|m| m.get("status"))
        .and_then(Value::as_str)
        == Some("available");

    ServiceHealthStatus {
        gateway: if ok { HealthState::Online } else { HealthState::Error },
        meilisearch: if available {
            HealthState::Online
        } else {
            HealthState::Offline
        },
        timestamp: body
            .get("timestamp")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .unwrap_or_else(now),
        details: HealthDetails {
            gateway_code: Some(code),
            meilisearch_code: meili.and_then(|m| m.get("code")).and_then(Value::as_i64),
            gateway_message: Some(if ok { "OK" } else { "Gateway Error" }.to_string()),
            meilisearch_message: Some(
                meili
                    .and_then(|m| m.get("message"))
                    .and_then(Value::as_str)
                    .filter(|m| !m.is_empty())
                    .unwrap_or("Unknown")
                    .to_string(),
            ),
        },
    }
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
