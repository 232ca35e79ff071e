//! Browser Local Storage Backend
//!
//! Mirrors the store's collections into `window.localStorage`. When local
//! storage is disabled (private mode, sandboxed iframes) the site still
//! works for the session out of an in-memory map.

use luxecut::storage::{MemoryBackend, StorageBackend, StorageError, StorageResult};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// `StorageBackend` over `window.localStorage`
pub struct LocalStorageBackend {
    storage: Option<Storage>,
    fallback: MemoryBackend,
}

impl LocalStorageBackend {
    /// Attach to the window's local storage, or fall back to memory
    pub fn open() -> Self {
        match local_storage() {
            Ok(storage) => Self {
                storage: Some(storage),
                fallback: MemoryBackend::new(),
            },
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("Local storage unavailable, data will not persist: {}", e).into(),
                );
                Self::in_memory()
            }
        }
    }

    /// Session-only backend
    pub fn in_memory() -> Self {
        Self {
            storage: None,
            fallback: MemoryBackend::new(),
        }
    }

    /// Whether writes reach local storage
    pub fn is_persistent(&self) -> bool {
        self.storage.is_some()
    }
}

fn local_storage() -> StorageResult<Storage> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    window
        .local_storage()
        .map_err(js_error)?
        .ok_or(StorageError::Unavailable)
}

fn js_error(err: JsValue) -> StorageError {
    StorageError::Backend(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl StorageBackend for LocalStorageBackend {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        match &self.storage {
            Some(storage) => storage.get_item(key).map_err(js_error),
            None => self.fallback.get_item(key),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        match &self.storage {
            // Quota errors surface here
            Some(storage) => storage.set_item(key, value).map_err(js_error),
            None => self.fallback.set_item(key, value),
        }
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        match &self.storage {
            Some(storage) => storage.remove_item(key).map_err(js_error),
            None => self.fallback.remove_item(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luxecut::storage::{PersistedStore, SERVICES_KEY};

    #[test]
    fn test_in_memory_round_trip() {
        let mut backend = LocalStorageBackend::in_memory();
        assert!(!backend.is_persistent());

        backend.set_item("luxecut_test", "[1,2]").unwrap();
        assert_eq!(backend.get_item("luxecut_test").unwrap().as_deref(), Some("[1,2]"));

        backend.remove_item("luxecut_test").unwrap();
        assert!(backend.get_item("luxecut_test").unwrap().is_none());
    }

    #[test]
    fn test_store_seeds_session_backend() {
        let store = PersistedStore::open(LocalStorageBackend::in_memory());
        assert!(!store.services().is_empty());
        assert!(store.backend().get_item(SERVICES_KEY).unwrap().is_some());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use luxecut::storage::{PersistedStore, SERVICES_KEY};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage_survives_reopen() {
        let mut backend = LocalStorageBackend::open();
        assert!(backend.is_persistent());
        backend.remove_item(SERVICES_KEY).unwrap();

        let store = PersistedStore::open(backend);
        let seeded = store.services().len();
        store.close().unwrap();

        let reopened = PersistedStore::open(LocalStorageBackend::open());
        assert_eq!(reopened.services().len(), seeded);
    }
}
