use std::collections::HashMap;

use crate::error::SpinError;
use crate::inventory::SessionState;

/// Synchronous string key-value store, e.g. `window.localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), SpinError>;
}

/// In-memory store used by tests and as a stand-in when no browser storage exists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SpinError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn encode_session(state: &SessionState) -> Result<String, SpinError> {
    serde_json::to_string(state).map_err(|e| SpinError::CorruptState(e.to_string()))
}

pub fn decode_session(raw: &str) -> Result<SessionState, SpinError> {
    serde_json::from_str(raw).map_err(|e| SpinError::CorruptState(e.to_string()))
}

/// Reads the session, falling back to an empty one when nothing usable is stored.
pub fn load_session<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> SessionState {
    match store.get(key) {
        None => SessionState::default(),
        Some(raw) => decode_session(&raw).unwrap_or_else(|e| {
            log::warn!("Discarding stored session under {}: {}", key, e);
            SessionState::default()
        }),
    }
}

pub fn save_session<S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    state: &SessionState,
) -> Result<(), SpinError> {
    let raw = encode_session(state)?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RewardItem;
    use crate::constants::STORAGE_KEY;
    use crate::inventory::SpinRecord;
    use chrono::Utc;

    #[test]
    fn test_round_trip() {
        let mut state = SessionState::default();
        let item = RewardItem::new("jackpot", "CHOOSE ANY!", 2.0, Some("#ffffff"));
        state.inventory.add(SpinRecord::new(&item, "reward", Utc::now()));
        state.special_task_complete = true;

        let mut store = MemoryStore::new();
        save_session(&mut store, STORAGE_KEY, &state).unwrap();
        assert_eq!(load_session(&store, STORAGE_KEY), state);
    }

    #[test]
    fn test_missing_or_corrupt_falls_back() {
        let store = MemoryStore::new();
        assert_eq!(load_session(&store, STORAGE_KEY), SessionState::default());

        for raw in ["{not json", "null", r#"{"inventory": 5}"#, r#"{"inventory": [{"label": "x"}]}"#] {
            let store = MemoryStore::with_entry(STORAGE_KEY, raw);
            assert_eq!(load_session(&store, STORAGE_KEY), SessionState::default(), "{}", raw);
            assert!(matches!(decode_session(raw), Err(SpinError::CorruptState(_))));
        }
    }
}
