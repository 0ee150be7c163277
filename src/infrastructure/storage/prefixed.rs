use super::KeyValueStorage;
use crate::shared::errors::StorageError;

pub const DEFAULT_KEY_PREFIX: &str = "tamyla_";

/// Namespaces every key of the wrapped storage
#[derive(Debug)]
pub struct PrefixedStorage<S> {
    inner: S,
    prefix: String,
}

impl<S: KeyValueStorage> PrefixedStorage<S> {
    pub fn new(inner: S, prefix: impl Into<String>) -> Self {
        Self {
            inner,
            prefix: prefix.into(),
        }
    }

    pub fn with_default_prefix(inner: S) -> Self {
        Self::new(inner, DEFAULT_KEY_PREFIX)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    fn key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

impl<S: KeyValueStorage> KeyValueStorage for PrefixedStorage<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(&self.key(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set_item(&self.key(key), value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove_item(&self.key(key))
    }
}
