// Public API exports
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

// Presentation layer
pub mod app;

pub use config::ContentHubConfig;
pub use shared::errors::{ContentHubError, Result, StorageError};
pub use shared::services::{HealthService, SearchGatewayClient};
