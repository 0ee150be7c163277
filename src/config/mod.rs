//! Explicit configuration passed to every Content Hub component at creation.

use serde::Deserialize;

use crate::shared::errors::{ContentHubError, Result};

pub const DEFAULT_GATEWAY_URL: &str = "https://search.tamyla.com";
pub const DEFAULT_STORAGE_KEY: &str = "content_access_recent_searches";
pub const DEFAULT_MAX_RECENT_SEARCHES: usize = 5;
pub const DEFAULT_SEARCH_LIMIT: usize = 20;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5000;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentHubConfig {
    pub gateway: GatewayConfig,
    pub recent_searches: RecentSearchConfig,
    pub status: SearchStatusConfig,
    pub results: ResultConfig,
}

/// Search gateway endpoint and credentials
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GatewayConfig {
    pub base_url: String,
    pub auth_token: String,
    /// Ignored on wasm32, where the browser owns request timeouts.
    pub request_timeout_ms: u64,
    pub default_limit: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GATEWAY_URL.to_string(),
            auth_token: String::new(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            default_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecentSearchConfig {
    pub storage_key: String,
    pub max_items: usize,
}

impl Default for RecentSearchConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            max_items: DEFAULT_MAX_RECENT_SEARCHES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchStatusConfig {
    pub idle_message: Option<String>,
    /// Delay before a success status falls back to idle; `None` disables it.
    pub auto_reset_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResultConfig {
    /// URL template for results without a url, e.g. `/content/{id}`.
    pub url_template: Option<String>,
}

impl ContentHubConfig {
    /// Parse a JSON document; missing sections fall back to defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ContentHubConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.gateway.base_url.trim().is_empty() {
            return Err(ContentHubError::Config("gateway.baseUrl is empty".into()));
        }
        if self.gateway.default_limit == 0 {
            return Err(ContentHubError::Config(
                "gateway.defaultLimit must be > 0".into(),
            ));
        }
        if self.recent_searches.storage_key.trim().is_empty() {
            return Err(ContentHubError::Config(
                "recentSearches.storageKey is empty".into(),
            ));
        }
        if self.recent_searches.max_items == 0 {
            return Err(ContentHubError::Config(
                "recentSearches.maxItems must be > 0".into(),
            ));
        }
        Ok(())
    }
}
