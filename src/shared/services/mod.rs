// Gateway-facing services
pub mod health_service;
pub mod search_gateway;

pub use health_service::HealthService;
pub use search_gateway::{equals_filter, filter_expression, SearchGatewayClient};
