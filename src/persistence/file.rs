//! JSON file storage for native builds

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{Storage, decode_state, encode_state};
use crate::error::StorageError;
use crate::ledger::LedgerState;

/// Stores the ledger as a JSON file
///
/// Saves go to a sibling `.tmp` file that is then renamed over the target,
/// so an interrupted save never leaves a half-written ledger behind.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Storage for FileStorage {
    fn load(&self) -> Result<Option<LedgerState>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(json) => {
                let state = decode_state(&json);
                if let Some(state) = &state {
                    log::info!(
                        "Loaded {} rounds from {}",
                        state.rounds.len(),
                        self.path.display()
                    );
                }
                Ok(state)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No saved scores at {}, starting fresh", self.path.display());
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, state: &LedgerState) -> Result<(), StorageError> {
        let json = encode_state(state)?;
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let tmp = self.tmp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        log::info!(
            "Scores saved ({} rounds) to {}",
            state.rounds.len(),
            self.path.display()
        );
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
