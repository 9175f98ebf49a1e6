//! Save/load of the ledger state
//!
//! Every backend stores the same JSON blob under the same key, so a state
//! written by one front end can be read by another:
//! - `MemoryStorage`: in-process, for tests and embedding
//! - `FileStorage`: a JSON file on native targets (tmp file, then rename)
//! - `LocalStorage`: browser LocalStorage on wasm32
//!
//! A missing or corrupt blob loads as `None`; only genuine read failures
//! are errors.

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

use crate::error::StorageError;
use crate::ledger::LedgerState;

/// Key the web and mobile front ends store the ledger under
pub const STORAGE_KEY: &str = "cambioScores";

/// Key-value persistence for a single `LedgerState`
pub trait Storage {
    /// Previously saved state, or `None` if nothing usable is stored
    fn load(&self) -> Result<Option<LedgerState>, StorageError>;

    /// Overwrite the stored state
    fn save(&mut self, state: &LedgerState) -> Result<(), StorageError>;

    /// Remove the stored state
    fn clear(&mut self) -> Result<(), StorageError>;
}

/// Decode a stored blob, treating corruption as "nothing stored"
pub(crate) fn decode_state(json: &str) -> Option<LedgerState> {
    match serde_json::from_str::<LedgerState>(json) {
        Ok(state) if state.is_valid() => Some(state),
        Ok(_) => {
            log::warn!("Stored ledger has a round outside any session, ignoring it");
            None
        }
        Err(e) => {
            log::warn!("Stored ledger is corrupt, ignoring it: {}", e);
            None
        }
    }
}

pub(crate) fn encode_state(state: &LedgerState) -> Result<String, StorageError> {
    Ok(serde_json::to_string(state)?)
}

/// Keeps the encoded blob in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    blob: Option<String>,
    saves: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing blob, as if a previous run had saved it
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
            saves: 0,
        }
    }

    /// Raw stored JSON
    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }

    /// Number of successful saves
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Option<LedgerState>, StorageError> {
        Ok(self.blob.as_deref().and_then(decode_state))
    }

    fn save(&mut self, state: &LedgerState) -> Result<(), StorageError> {
        self.blob = Some(encode_state(state)?);
        self.saves += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.blob = None;
        Ok(())
    }
}
