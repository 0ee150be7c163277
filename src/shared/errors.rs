use thiserror::Error;

/// Failures of an injected key/value storage capability.
///
/// Never surfaced to the user: the recent-search store logs and swallows them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum ContentHubError {
    /// Non-2xx response from the search gateway.
    #[error("MeiliSearch request failed: {status} - {message}")]
    Gateway { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ContentHubError {
    /// HTTP status of a gateway rejection, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ContentHubError::Gateway { status, .. } => Some(*status),
            ContentHubError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ContentHubError>;
