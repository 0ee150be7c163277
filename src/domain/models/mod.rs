// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod health;
pub mod search;
pub mod status;

pub use health::{HealthDetails, HealthState, ServiceHealthStatus};
pub use search::*;
pub use status::*;
