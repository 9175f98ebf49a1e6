//! Application-level tracker
//!
//! Pairs a `Ledger` with a `Storage` backend: loads once on open, then
//! saves the full state after every successful mutation. A store that
//! cannot be read fails `open`, so it is never overwritten by a fresh
//! ledger. Confirmation
//! prompts and user-facing messages stay with the front end.

use serde::Serialize;

use crate::codec::{export_to_csv, generate_csv_filename, parse_csv};
use crate::error::TrackerError;
use crate::ledger::{AngerLevels, HistoryEntry, Ledger, OverallTotals, Round, SessionTotals};
use crate::persistence::Storage;
use crate::settings::Settings;

pub type Result<T> = std::result::Result<T, TrackerError>;

/// Every derived value a score screen shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scoreboard {
    pub current_session: u32,
    pub round_count: usize,
    pub session_totals: SessionTotals,
    pub overall_totals: OverallTotals,
    pub session_delta: i64,
    pub overall_delta: i64,
    pub session_delta_text: String,
    pub overall_delta_text: String,
    pub anger_levels: AngerLevels,
}

/// A CSV export ready to be written or offered for download
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}

/// A ledger that persists itself after each change
#[derive(Debug)]
pub struct Tracker<S: Storage> {
    ledger: Ledger,
    storage: S,
}

impl<S: Storage> Tracker<S> {
    /// Restore the saved ledger, or start empty if nothing usable is stored
    pub fn open(storage: S, settings: Settings) -> Result<Self> {
        let ledger = match storage.load()? {
            Some(state) => {
                let ledger = Ledger::from_state(state, settings)?;
                log::debug!("Restored {} rounds", ledger.rounds().len());
                ledger
            }
            None => Ledger::with_settings(settings),
        };
        Ok(Self { ledger, storage })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn add_round(&mut self, mike_score: i64, preeta_score: i64) -> Result<Round> {
        let round = self.ledger.add_round(mike_score, preeta_score)?;
        self.persist()?;
        Ok(round)
    }

    pub fn edit_round(&mut self, index: usize, mike_score: i64, preeta_score: i64) -> Result<()> {
        self.ledger.edit_round(index, mike_score, preeta_score)?;
        self.persist()
    }

    pub fn delete_round(&mut self, index: usize) -> Result<()> {
        self.ledger.delete_round(index)?;
        self.persist()
    }

    pub fn start_new_session(&mut self) -> Result<()> {
        self.ledger.start_new_session();
        self.persist()
    }

    pub fn clear_all_data(&mut self) -> Result<()> {
        self.ledger.clear_all_data();
        self.persist()
    }

    pub fn import_rounds(&mut self, rounds: Vec<Round>) -> Result<()> {
        self.ledger.import_rounds(rounds)?;
        self.persist()
    }

    /// Replace the ledger with the rounds in `content`
    ///
    /// Nothing changes unless the whole file parses. Returns the number of
    /// rounds imported.
    pub fn import_csv(&mut self, content: &str) -> Result<usize> {
        let rounds = parse_csv(content)?;
        let count = rounds.len();
        self.import_rounds(rounds)?;
        log::info!("Imported {} rounds from CSV", count);
        Ok(count)
    }

    /// Current rounds as CSV, or `None` when there are none
    pub fn export_csv(&self) -> Option<CsvExport> {
        export_to_csv(self.ledger.rounds()).map(|content| CsvExport {
            filename: generate_csv_filename(),
            content,
        })
    }

    pub fn history(&self) -> Vec<HistoryEntry> {
        self.ledger.history()
    }

    pub fn scoreboard(&self) -> Scoreboard {
        let ledger = &self.ledger;
        let session_delta = ledger.session_delta();
        let overall_delta = ledger.overall_delta();
        Scoreboard {
            current_session: ledger.current_session(),
            round_count: ledger.rounds().len(),
            session_totals: ledger.session_totals(),
            overall_totals: ledger.overall_totals(),
            session_delta,
            overall_delta,
            session_delta_text: ledger.format_delta(session_delta),
            overall_delta_text: ledger.format_delta(overall_delta),
            anger_levels: ledger.anger_levels(),
        }
    }

    fn persist(&mut self) -> Result<()> {
        self.storage.save(&self.ledger.state())?;
        Ok(())
    }
}
