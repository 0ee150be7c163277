//! Bounded most-recently-used query history.
//!
//! The in-memory list is authoritative: storage failures are logged and never
//! reach the caller.

use std::future::Future;

use crate::config::RecentSearchConfig;
use crate::infrastructure::storage::KeyValueStorage;
use crate::shared::logging::{log_recent_searches_loaded, log_storage_failure};

pub struct RecentSearchStore<S: KeyValueStorage> {
    storage: S,
    storage_key: String,
    max_items: usize,
    searches: Vec<String>,
}

impl<S: KeyValueStorage> RecentSearchStore<S> {
    /// Load persisted history once, truncated to `max_items`
    pub fn load(storage: S, config: &RecentSearchConfig) -> Self {
        let max_items = config.max_items.max(1);
        let mut searches = match storage.get_item(&config.storage_key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(searches) => searches,
                Err(e) => {
                    log_storage_failure("parse", &config.storage_key, &e.to_string());
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                log_storage_failure("load", &config.storage_key, &e.to_string());
                Vec::new()
            }
        };
        searches.truncate(max_items);
        log_recent_searches_loaded(&config.storage_key, searches.len());

        Self {
            storage,
            storage_key: config.storage_key.clone(),
            max_items,
            searches,
        }
    }

    /// Most recent first
    pub fn searches(&self) -> &[String] {
        &self.searches
    }

    pub fn len(&self) -> usize {
        self.searches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.searches.is_empty()
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Move `query` (trimmed) to the front, dropping case-insensitive duplicates.
    /// Blank queries are ignored.
    pub fn add(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }

        let lowered = query.to_lowercase();
        self.searches.retain(|s| s.to_lowercase() != lowered);
        self.searches.insert(0, query.to_string());
        self.searches.truncate(self.max_items);
        self.persist();
    }

    /// Remove an exact (case-sensitive) entry
    pub fn remove(&mut self, query: &str) {
        self.searches.retain(|s| s != query);
        self.persist();
    }

    pub fn clear(&mut self) {
        self.searches.clear();
        if let Err(e) = self.storage.remove_item(&self.storage_key) {
            log_storage_failure("clear", &self.storage_key, &e.to_string());
        }
    }

    /// Re-run a past query, then move it to the top.
    ///
    /// The move happens whatever the search returned.
    pub async fn handle_click<F, Fut, T>(&mut self, query: &str, search: F) -> T
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = T>,
    {
        let outcome = search(query.to_string()).await;
        self.add(query);
        outcome
    }

    /// Entries to render when the list is capped at `max_display`
    pub fn visible(&self, max_display: Option<usize>) -> &[String] {
        visible_searches(&self.searches, max_display)
    }

    pub fn hidden_count(&self, max_display: Option<usize>) -> usize {
        hidden_search_count(self.searches.len(), max_display)
    }

    fn persist(&self) {
        let serialized = match serde_json::to_string(&self.searches) {
            Ok(json) => json,
            Err(e) => {
                log_storage_failure("serialize", &self.storage_key, &e.to_string());
                return;
            }
        };
        if let Err(e) = self.storage.set_item(&self.storage_key, &serialized) {
            log_storage_failure("save", &self.storage_key, &e.to_string());
        }
    }
}

pub fn visible_searches(searches: &[String], max_display: Option<usize>) -> &[String] {
    match max_display {
        Some(max) => &searches[..searches.len().min(max)],
        None => searches,
    }
}

/// Count behind the `+N more searches` footer
pub fn hidden_search_count(total: usize, max_display: Option<usize>) -> usize {
    match max_display {
        Some(max) => total.saturating_sub(max),
        None => 0,
    }
}
