use dioxus::prelude::*;

use crate::config::RecentSearchConfig;
use crate::domain::services::RecentSearchStore;
use crate::infrastructure::storage::{platform_storage, KeyValueStorage};

pub type DynStorage = Box<dyn KeyValueStorage>;

/// Recent searches backed by a [`RecentSearchStore`] held in a signal
#[derive(Clone, Copy)]
pub struct UseRecentSearchesReturn {
    pub store: Signal<RecentSearchStore<DynStorage>>,
}

impl UseRecentSearchesReturn {
    pub fn searches(&self) -> Vec<String> {
        self.store.read().searches().to_vec()
    }

    pub fn add(&mut self, query: &str) {
        self.store.write().add(query);
    }

    pub fn remove(&mut self, query: &str) {
        self.store.write().remove(query);
    }

    pub fn clear(&mut self) {
        self.store.write().clear();
    }
}

/// Recent searches persisted in the platform storage
pub fn use_recent_searches(config: RecentSearchConfig) -> UseRecentSearchesReturn {
    use_recent_searches_with(config, platform_storage)
}

/// Recent searches over caller-provided storage; `storage` runs once on mount
pub fn use_recent_searches_with(
    config: RecentSearchConfig,
    storage: impl FnOnce() -> DynStorage,
) -> UseRecentSearchesReturn {
    let store = use_signal(move || RecentSearchStore::load(storage(), &config));

    UseRecentSearchesReturn { store }
}
