//! Key/value storage capability used for client-side persistence.

pub mod memory;
pub mod prefixed;
#[cfg(target_arch = "wasm32")]
pub mod browser;

pub use memory::MemoryStorage;
pub use prefixed::PrefixedStorage;
#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStorage;

use std::rc::Rc;
use std::sync::Arc;

use crate::shared::errors::StorageError;

/// `localStorage`-shaped storage
///
/// Methods take `&self`; implementations use interior mutability.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Rc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Arc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

/// Default storage for the running platform: `localStorage` in the browser,
/// an in-memory map elsewhere. Keys carry the `tamyla_` prefix either way.
pub fn platform_storage() -> Box<dyn KeyValueStorage> {
    #[cfg(target_arch = "wasm32")]
    {
        match BrowserStorage::local() {
            Ok(storage) => return namespaced(storage),
            Err(e) => tracing::warn!("localStorage unavailable, using memory storage: {}", e),
        }
    }
    namespaced(MemoryStorage::new())
}

fn namespaced<S: KeyValueStorage + 'static>(inner: S) -> Box<dyn KeyValueStorage> {
    Box::new(PrefixedStorage::with_default_prefix(inner))
}
