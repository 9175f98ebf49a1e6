//! Tracker settings and preferences
//!
//! Kept apart from the score history and only ever read here: the page
//! writes the `cambioSettings` LocalStorage key on web, and native builds
//! take an optional JSON file.

use serde::{Deserialize, Serialize};

use crate::consts::{PLAYER_ONE, PLAYER_TWO};
use crate::ledger::AngerThresholds;

/// Display names and anger thresholds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Label for the first player (the `mike*` fields)
    pub mike_name: String,
    /// Label for the second player (the `preeta*` fields)
    pub preeta_name: String,
    pub anger: AngerThresholds,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mike_name: PLAYER_ONE.to_string(),
            preeta_name: PLAYER_TWO.to_string(),
            anger: AngerThresholds::default(),
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "cambioSettings";

    /// Keep thresholds ordered so `angry` is never reachable before `annoyed`
    pub fn normalized(mut self) -> Self {
        if self.anger.angry < self.anger.annoyed {
            log::warn!(
                "angry threshold {} below annoyed threshold {}, raising it",
                self.anger.angry,
                self.anger.annoyed
            );
            self.anger.angry = self.anger.annoyed;
        }
        self
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str::<Settings>(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings.normalized();
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from a JSON file, falling back to defaults when the
    /// file does not exist
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Result<Self, crate::error::StorageError> {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                let settings: Settings = serde_json::from_str(&json)?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings.normalized())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}
