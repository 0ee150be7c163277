//! Structured logging for the Content Hub search toolkit
//!
//! Every event carries an `operation` field so gateway, persistence and
//! status traffic can be filtered independently.

/// Operation tags attached to log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    GatewayRequest,
    RecentSearches,
    SearchStatus,
    HealthProbe,
    Normalization,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::GatewayRequest => "gateway_request",
            LogOperation::RecentSearches => "recent_searches",
            LogOperation::SearchStatus => "search_status",
            LogOperation::HealthProbe => "health_probe",
            LogOperation::Normalization => "normalization",
        }
    }
}

/// Install the native `tracing` subscriber (INFO by default, `RUST_LOG` overrides)
#[cfg(not(target_arch = "wasm32"))]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}

/// Log an outgoing gateway request
pub fn log_gateway_request(method: &str, endpoint: &str) {
    tracing::debug!(
        operation = LogOperation::GatewayRequest.as_str(),
        method = method,
        endpoint = endpoint,
        "Sending gateway request"
    );
}

/// Log a completed search
pub fn log_search_completed(query: &str, hits: usize, processing_time_ms: u64) {
    tracing::info!(
        operation = LogOperation::GatewayRequest.as_str(),
        query = query,
        hit_count = hits,
        processing_time_ms = processing_time_ms,
        "Search completed"
    );
}

/// Log a gateway rejection
pub fn log_gateway_error(endpoint: &str, status: u16, message: &str) {
    tracing::error!(
        operation = LogOperation::GatewayRequest.as_str(),
        endpoint = endpoint,
        status = status,
        error = message,
        "Gateway request failed"
    );
}

/// Log a search response that arrived after a newer search started
pub fn log_stale_response(query: &str, sequence: u64, latest: u64) {
    tracing::debug!(
        operation = LogOperation::GatewayRequest.as_str(),
        query = query,
        sequence = sequence,
        latest_sequence = latest,
        "Discarded stale search response"
    );
}

/// Log a storage capability failure (recent searches stay in memory)
pub fn log_storage_failure(action: &str, key: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::RecentSearches.as_str(),
        action = action,
        storage_key = key,
        error = error,
        "Recent searches storage failure"
    );
}

/// Log recent searches loaded at startup
pub fn log_recent_searches_loaded(key: &str, count: usize) {
    tracing::debug!(
        operation = LogOperation::RecentSearches.as_str(),
        storage_key = key,
        count = count,
        "Loaded recent searches"
    );
}

/// Log a search status transition
pub fn log_status_transition(kind: &str, message: &str) {
    tracing::trace!(
        operation = LogOperation::SearchStatus.as_str(),
        status = kind,
        message = message,
        "Search status changed"
    );
}

/// Log a health probe outcome
pub fn log_health_result(gateway: &str, meilisearch: &str) {
    tracing::info!(
        operation = LogOperation::HealthProbe.as_str(),
        gateway = gateway,
        meilisearch = meilisearch,
        "Health check completed"
    );
}

/// Log a health probe that could not reach the gateway
pub fn log_health_failure(error: &str) {
    tracing::warn!(
        operation = LogOperation::HealthProbe.as_str(),
        error = error,
        "Health check failed"
    );
}

/// Log a search hit dropped during normalization
pub fn log_dropped_hit(id: &str, reason: &str) {
    tracing::warn!(
        operation = LogOperation::Normalization.as_str(),
        result_id = id,
        reason = reason,
        "Dropped search hit"
    );
}
