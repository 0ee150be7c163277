use dioxus::prelude::*;

use crate::domain::models::{SearchServiceState, ServiceStatusSnapshot};
use crate::shared::services::{HealthService, SearchGatewayClient};

/// Service snapshot fed by one health probe on mount
pub fn use_service_status(client: SearchGatewayClient) -> Signal<ServiceStatusSnapshot> {
    let mut snapshot = use_signal(|| ServiceStatusSnapshot {
        search_service: SearchServiceState::Loading,
        ..Default::default()
    });

    use_future(move || {
        let service = HealthService::new(client.clone());
        async move {
            let health = service.check_health().await;
            snapshot.set(health.to_snapshot());
        }
    });

    snapshot
}
