//! Browser LocalStorage backend (wasm32 only)

use super::{STORAGE_KEY, Storage, decode_state, encode_state};
use crate::error::StorageError;
use crate::ledger::LedgerState;

/// Stores the ledger under a LocalStorage key
#[derive(Debug, Clone)]
pub struct LocalStorage {
    key: String,
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(STORAGE_KEY)
    }
}

impl LocalStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| StorageError::Unavailable("LocalStorage not available".to_string()))
    }
}

fn js_error(what: &str, err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Unavailable(format!("{what}: {err:?}"))
}

impl Storage for LocalStorage {
    fn load(&self) -> Result<Option<LedgerState>, StorageError> {
        let storage = Self::storage()?;
        let json = storage
            .get_item(&self.key)
            .map_err(|e| js_error("read failed", e))?;

        match json {
            Some(json) => {
                let state = decode_state(&json);
                if let Some(state) = &state {
                    log::info!("Loaded {} rounds", state.rounds.len());
                }
                Ok(state)
            }
            None => {
                log::info!("No saved scores found, starting fresh");
                Ok(None)
            }
        }
    }

    fn save(&mut self, state: &LedgerState) -> Result<(), StorageError> {
        let json = encode_state(state)?;
        Self::storage()?
            .set_item(&self.key, &json)
            .map_err(|e| js_error("write failed", e))?;
        log::info!("Scores saved ({} rounds)", state.rounds.len());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(&self.key)
            .map_err(|e| js_error("remove failed", e))
    }
}
