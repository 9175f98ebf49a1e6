//! Round records and the persisted ledger state

use serde::{Deserialize, Serialize};

/// A single scored round for both players
///
/// The four `*_total` fields cache a running fold over the raw scores. They
/// are rewritten by the ledger after every edit or delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    /// Session this round belongs to (1-based)
    pub session: u32,
    pub mike_score: i64,
    pub preeta_score: i64,
    /// Mike's running total within `session`, including this round
    pub mike_session_total: i64,
    pub preeta_session_total: i64,
    /// Mike's running total across every round so far, including this one
    pub mike_overall_total: i64,
    pub preeta_overall_total: i64,
}

/// Highest session a round can belong to; `u32::MAX` is kept free so the
/// ledger can always move one past the last round's session
pub const LAST_SESSION: u32 = u32::MAX - 1;

impl Round {
    pub fn has_valid_session(&self) -> bool {
        (1..=LAST_SESSION).contains(&self.session)
    }

    pub fn session_totals(&self) -> SessionTotals {
        SessionTotals {
            mike_session_total: self.mike_session_total,
            preeta_session_total: self.preeta_session_total,
        }
    }

    pub fn overall_totals(&self) -> OverallTotals {
        OverallTotals {
            mike_overall_total: self.mike_overall_total,
            preeta_overall_total: self.preeta_overall_total,
        }
    }
}

/// Session-scoped totals for both players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTotals {
    pub mike_session_total: i64,
    pub preeta_session_total: i64,
}

impl SessionTotals {
    /// Mike minus Preeta, clamped to the `i64` range
    ///
    /// Totals at opposite ends of the range (only reachable with extreme
    /// scores or imported totals) report `i64::MAX` or `i64::MIN`.
    pub fn delta(&self) -> i64 {
        self.mike_session_total.saturating_sub(self.preeta_session_total)
    }
}

/// All-time totals for both players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallTotals {
    pub mike_overall_total: i64,
    pub preeta_overall_total: i64,
}

impl OverallTotals {
    /// Mike minus Preeta, clamped to the `i64` range like `SessionTotals::delta`
    pub fn delta(&self) -> i64 {
        self.mike_overall_total.saturating_sub(self.preeta_overall_total)
    }
}

/// A round as shown in a newest-first history list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Chronological position, usable with `edit_round`/`delete_round`
    pub index: usize,
    /// 1-based round number shown to players
    pub number: usize,
    pub round: Round,
}

fn default_session() -> u32 {
    1
}

/// The persisted unit: every round plus the session new rounds join
///
/// Field names match the `cambioScores` blob written by the web and mobile
/// front ends, so existing saves load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerState {
    #[serde(default)]
    pub rounds: Vec<Round>,
    #[serde(default = "default_session")]
    pub current_session: u32,
}

impl Default for LedgerState {
    fn default() -> Self {
        Self {
            rounds: Vec::new(),
            current_session: 1,
        }
    }
}

impl LedgerState {
    /// Every round must belong to a usable session
    pub fn is_valid(&self) -> bool {
        self.rounds.iter().all(Round::has_valid_session)
    }
}
