//! Cambio Tracker - running scores for a two-player Cambio game
//!
//! Core modules:
//! - `ledger`: Rounds, session/overall totals, deltas and anger levels
//! - `codec`: CSV import/export shared with the web and mobile apps
//! - `persistence`: Save/load backends (memory, file, LocalStorage)
//! - `settings`: Player names and anger thresholds
//! - `tracker`: Ledger + storage, persisted after every change
//! - `web`: wasm-bindgen surface for the browser front end

pub mod codec;
pub mod error;
pub mod ledger;
pub mod persistence;
pub mod settings;
pub mod tracker;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::{CsvError, LedgerError, StorageError, TrackerError};
pub use ledger::{AngerLevel, AngerLevels, Ledger, LedgerState, Round, parse_score};
pub use persistence::{MemoryStorage, Storage};
pub use settings::Settings;
pub use tracker::{CsvExport, Scoreboard, Tracker};

/// Tracker configuration constants
pub mod consts {
    /// Session deficit at which the losing player looks annoyed
    pub const ANNOYED_THRESHOLD: u64 = 10;
    /// Session deficit at which the losing player looks angry
    pub const ANGRY_THRESHOLD: u64 = 20;

    /// Default player labels
    pub const PLAYER_ONE: &str = "Mike";
    pub const PLAYER_TWO: &str = "Preeta";
}
