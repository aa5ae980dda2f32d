use shared::storage::KeyValueStore;
use shared::SpinError;
use web_sys::{window, Storage};

/// `window.localStorage`, looked up on every access.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Option<Storage> {
        window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SpinError> {
        let storage = Self::storage()
            .ok_or_else(|| SpinError::Storage("localStorage is not available".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| SpinError::Storage(format!("{:?}", e)))
    }
}
