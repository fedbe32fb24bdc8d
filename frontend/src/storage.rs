use shared::{SnapshotStore, StorageError};

/// Snapshot store backed by the browser's `localStorage`
pub struct BrowserStore {
    storage: web_sys::Storage,
}

impl BrowserStore {
    /// Fails when the page has no window or storage access is blocked
    pub fn new() -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::NotAvailable("no window".to_string()))?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(StorageError::NotAvailable(
                "localStorage is disabled".to_string(),
            )),
            Err(e) => Err(StorageError::NotAvailable(format!("{:?}", e))),
        }
    }
}

impl SnapshotStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }
}
