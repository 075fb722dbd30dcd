//! Browser local storage as the record backend.

use common::storage::{JsonRepository, KeyValueBackend, Repository};
use common::workspace::Workspace;
use common::StorageError;
use gloo_storage::{LocalStorage, Storage};
use log::error;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageBackend;

impl KeyValueBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StorageError::Backend {
                key: key.to_string(),
                reason: e.as_string().unwrap_or_else(|| format!("{:?}", e)),
            })
    }
}

pub type BrowserWorkspace = Workspace<JsonRepository<LocalStorageBackend>>;

/// Creates any missing collection in local storage. Called once at start-up.
pub fn init() {
    if let Err(e) = JsonRepository::new(LocalStorageBackend).initialize() {
        error!("could not initialize local storage: {}", e);
    }
}

/// The workspace over local storage. Pages call this when they mount.
pub fn workspace() -> BrowserWorkspace {
    Workspace::new(JsonRepository::new(LocalStorageBackend))
}
