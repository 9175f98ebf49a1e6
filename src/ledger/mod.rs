//! Score ledger
//!
//! Owns the chronological list of rounds and the session new rounds join.
//! Every mutation except `import_rounds` leaves the cached totals equal to
//! a fresh fold over the raw scores. Nothing here performs I/O; callers
//! persist `state()` after each successful mutation.

pub mod anger;
pub mod round;

pub use anger::{AngerLevel, AngerLevels, AngerThresholds};
pub use round::{HistoryEntry, LAST_SESSION, LedgerState, OverallTotals, Round, SessionTotals};

use crate::error::{LedgerError, Result};
use crate::settings::Settings;

/// Parse a score typed by a player
///
/// Accepts an optionally signed integer surrounded by whitespace.
pub fn parse_score(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| LedgerError::InvalidScore {
            value: input.to_string(),
        })
}

/// Running totals for a two-player Cambio history
#[derive(Debug, Clone)]
pub struct Ledger {
    rounds: Vec<Round>,
    current_session: u32,
    settings: Settings,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Empty ledger on session 1 with default settings
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            rounds: Vec::new(),
            current_session: 1,
            settings,
        }
    }

    /// Restore a ledger from persisted state
    pub fn from_state(state: LedgerState, settings: Settings) -> Result<Self> {
        let mut ledger = Self::with_settings(settings);
        ledger.load_state(state)?;
        Ok(ledger)
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn current_session(&self) -> u32 {
        self.current_session
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Snapshot for persistence
    pub fn state(&self) -> LedgerState {
        LedgerState {
            rounds: self.rounds.clone(),
            current_session: self.current_session,
        }
    }

    /// Replace the ledger contents with persisted state
    ///
    /// Cached totals are taken as stored. A session counter of 0 is treated
    /// as missing. A round outside `1..=LAST_SESSION` is refused and the
    /// ledger is left as it was.
    pub fn load_state(&mut self, state: LedgerState) -> Result<()> {
        check_sessions(&state.rounds)?;
        self.rounds = state.rounds;
        self.current_session = state.current_session.clamp(1, LAST_SESSION);
        Ok(())
    }

    /// Append a round to the current session
    pub fn add_round(&mut self, mike_score: i64, preeta_score: i64) -> Result<Round> {
        let (session, overall) = match self.last_in_session(self.current_session) {
            Some(last) => (last.session_totals(), last.overall_totals()),
            // A fresh session inherits overall totals but starts its own at 0
            None => (
                SessionTotals::default(),
                self.rounds
                    .last()
                    .map(Round::overall_totals)
                    .unwrap_or_default(),
            ),
        };

        let index = self.rounds.len();
        let overflow = || LedgerError::TotalOverflow { index };
        let round = Round {
            session: self.current_session,
            mike_score,
            preeta_score,
            mike_session_total: session
                .mike_session_total
                .checked_add(mike_score)
                .ok_or_else(overflow)?,
            preeta_session_total: session
                .preeta_session_total
                .checked_add(preeta_score)
                .ok_or_else(overflow)?,
            mike_overall_total: overall
                .mike_overall_total
                .checked_add(mike_score)
                .ok_or_else(overflow)?,
            preeta_overall_total: overall
                .preeta_overall_total
                .checked_add(preeta_score)
                .ok_or_else(overflow)?,
        };

        self.rounds.push(round);
        log::debug!(
            "Added round {} in session {}: {} / {}",
            index + 1,
            round.session,
            mike_score,
            preeta_score
        );
        Ok(round)
    }

    /// Move new rounds into the next session; existing rounds are untouched
    pub fn start_new_session(&mut self) {
        self.current_session = (self.current_session + 1).min(LAST_SESSION);
        log::debug!("Started session {}", self.current_session);
    }

    /// Remove the round at `index` and recompute every total
    ///
    /// The current session always becomes one past the session of the new
    /// last round (or 1 when nothing is left), even when the deleted round
    /// came from an older session.
    pub fn delete_round(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;

        let mut rounds = self.rounds.clone();
        rounds.remove(index);
        fold_totals(&mut rounds)?;
        self.rounds = rounds;
        self.current_session = self.session_after_last();

        log::debug!(
            "Deleted round {}, current session now {}",
            index + 1,
            self.current_session
        );
        Ok(())
    }

    /// Overwrite the raw scores of the round at `index` and recompute every
    /// total. The round keeps its session.
    pub fn edit_round(
        &mut self,
        index: usize,
        new_mike_score: i64,
        new_preeta_score: i64,
    ) -> Result<()> {
        self.check_index(index)?;

        let mut rounds = self.rounds.clone();
        rounds[index].mike_score = new_mike_score;
        rounds[index].preeta_score = new_preeta_score;
        fold_totals(&mut rounds)?;
        self.rounds = rounds;

        log::debug!(
            "Edited round {}: {} / {}",
            index + 1,
            new_mike_score,
            new_preeta_score
        );
        Ok(())
    }

    /// Rebuild every cached total from the raw scores
    ///
    /// Mutations already do this; it is only needed to repair totals that
    /// came in through `import_rounds` or `load_state`.
    pub fn recalculate_all_totals(&mut self) -> Result<()> {
        let mut rounds = self.rounds.clone();
        fold_totals(&mut rounds)?;
        self.rounds = rounds;
        Ok(())
    }

    /// Totals of the latest round in the current session, or zeros
    pub fn session_totals(&self) -> SessionTotals {
        self.last_in_session(self.current_session)
            .map(Round::session_totals)
            .unwrap_or_default()
    }

    /// Totals of the latest round, or zeros
    pub fn overall_totals(&self) -> OverallTotals {
        self.rounds
            .last()
            .map(Round::overall_totals)
            .unwrap_or_default()
    }

    /// Positive when Mike is behind in the current session
    pub fn session_delta(&self) -> i64 {
        self.session_totals().delta()
    }

    /// Positive when Mike is behind overall
    pub fn overall_delta(&self) -> i64 {
        self.overall_totals().delta()
    }

    /// Render a delta as a lead size and the player who is behind
    ///
    /// Lower is better in Cambio, so only the magnitude and the trailing
    /// player are shown: `+7 (Mike)`, `+3 (Preeta)`, `0 (Tied)`.
    pub fn format_delta(&self, delta: i64) -> String {
        match delta.signum() {
            1 => format!("+{} ({})", delta, self.settings.mike_name),
            -1 => format!("+{} ({})", delta.unsigned_abs(), self.settings.preeta_name),
            _ => "0 (Tied)".to_string(),
        }
    }

    pub fn anger_levels(&self) -> AngerLevels {
        AngerLevels::from_delta(self.session_delta(), &self.settings.anger)
    }

    /// Newest-first copy of the rounds
    pub fn rounds_reversed(&self) -> Vec<Round> {
        self.rounds.iter().rev().copied().collect()
    }

    /// Newest-first rows with their chronological index and round number
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.rounds
            .iter()
            .enumerate()
            .rev()
            .map(|(index, round)| HistoryEntry {
                index,
                number: index + 1,
                round: *round,
            })
            .collect()
    }

    /// Drop every round and return to session 1
    pub fn clear_all_data(&mut self) {
        self.rounds.clear();
        self.current_session = 1;
        log::debug!("Cleared all rounds");
    }

    /// Replace every round with `rounds` as given
    ///
    /// Imported totals are trusted, not recomputed. New rounds go into the
    /// session after the last imported one, so every session must lie in
    /// `1..=LAST_SESSION` and the last round's must be below `LAST_SESSION`.
    /// Otherwise nothing is replaced.
    pub fn import_rounds(&mut self, rounds: Vec<Round>) -> Result<()> {
        check_sessions(&rounds)?;
        if rounds.last().is_some_and(|r| r.session == LAST_SESSION) {
            return Err(LedgerError::InvalidSession {
                index: rounds.len() - 1,
            });
        }
        self.rounds = rounds;
        self.current_session = self.session_after_last();
        log::debug!(
            "Imported {} rounds, current session now {}",
            self.rounds.len(),
            self.current_session
        );
        Ok(())
    }

    fn last_in_session(&self, session: u32) -> Option<&Round> {
        self.rounds.iter().rev().find(|r| r.session == session)
    }

    fn session_after_last(&self) -> u32 {
        self.rounds
            .last()
            .map_or(1, |r| (r.session + 1).min(LAST_SESSION))
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.rounds.len() {
            return Err(LedgerError::InvalidIndex {
                index,
                len: self.rounds.len(),
            });
        }
        Ok(())
    }
}

fn check_sessions(rounds: &[Round]) -> Result<()> {
    match rounds.iter().position(|r| !r.has_valid_session()) {
        Some(index) => Err(LedgerError::InvalidSession { index }),
        None => Ok(()),
    }
}

/// Rewrite the cached totals of `rounds` in place
///
/// Session boundaries come only from each round's `session` field.
fn fold_totals(rounds: &mut [Round]) -> Result<()> {
    let mut session: Option<u32> = None;
    let mut mike_session = 0i64;
    let mut preeta_session = 0i64;
    let mut mike_overall = 0i64;
    let mut preeta_overall = 0i64;

    for (index, round) in rounds.iter_mut().enumerate() {
        if session != Some(round.session) {
            session = Some(round.session);
            mike_session = 0;
            preeta_session = 0;
        }

        let overflow = || LedgerError::TotalOverflow { index };
        mike_session = mike_session.checked_add(round.mike_score).ok_or_else(overflow)?;
        preeta_session = preeta_session
            .checked_add(round.preeta_score)
            .ok_or_else(overflow)?;
        mike_overall = mike_overall.checked_add(round.mike_score).ok_or_else(overflow)?;
        preeta_overall = preeta_overall
            .checked_add(round.preeta_score)
            .ok_or_else(overflow)?;

        round.mike_session_total = mike_session;
        round.preeta_session_total = preeta_session;
        round.mike_overall_total = mike_overall;
        round.preeta_overall_total = preeta_overall;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_with(scores: &[(i64, i64)]) -> Ledger {
        let mut ledger = Ledger::new();
        for &(m, p) in scores {
            ledger.add_round(m, p).unwrap();
        }
        ledger
    }

    fn totals(round: &Round) -> (i64, i64, i64, i64) {
        (
            round.mike_session_total,
            round.preeta_session_total,
            round.mike_overall_total,
            round.preeta_overall_total,
        )
    }

    /// Every round's cached totals match a fold over the raw scores
    fn assert_consistent(rounds: &[Round]) {
        let mut prev: Option<&Round> = None;
        for round in rounds {
            let (ms, ps, mo, po) = match prev {
                Some(p) if p.session == round.session => totals(p),
                Some(p) => (0, 0, p.mike_overall_total, p.preeta_overall_total),
                None => (0, 0, 0, 0),
            };
            assert_eq!(round.mike_session_total, ms + round.mike_score);
            assert_eq!(round.preeta_session_total, ps + round.preeta_score);
            assert_eq!(round.mike_overall_total, mo + round.mike_score);
            assert_eq!(round.preeta_overall_total, po + round.preeta_score);
            prev = Some(round);
        }
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.current_session(), 1);
        assert_eq!(ledger.session_totals(), SessionTotals::default());
        assert_eq!(ledger.overall_totals(), OverallTotals::default());
        assert_eq!(ledger.session_delta(), 0);
    }

    #[test]
    fn test_basic_accumulation() {
        let ledger = ledger_with(&[(5, 3), (2, 7)]);
        let round = ledger.rounds()[1];
        assert_eq!(round.session, 1);
        assert_eq!(totals(&round), (7, 10, 7, 10));
        assert_eq!(ledger.session_delta(), -3);
        assert_eq!(ledger.overall_delta(), -3);
    }

    #[test]
    fn test_new_session_resets_session_totals() {
        let mut ledger = ledger_with(&[(5, 3), (2, 7)]);
        ledger.start_new_session();

        // Empty session reads as zeros, overall is unchanged
        assert_eq!(ledger.current_session(), 2);
        assert_eq!(ledger.session_totals(), SessionTotals::default());
        assert_eq!(ledger.overall_totals().mike_overall_total, 7);

        let round = ledger.add_round(1, 1).unwrap();
        assert_eq!(round.session, 2);
        assert_eq!(totals(&round), (1, 1, 8, 11));
        assert_consistent(ledger.rounds());
    }

    #[test]
    fn test_edit_recomputes_downstream() {
        let mut ledger = ledger_with(&[(5, 3), (2, 7), (1, 1)]);
        ledger.edit_round(0, 0, 0).unwrap();

        let rounds = ledger.rounds();
        assert_eq!(totals(&rounds[0]), (0, 0, 0, 0));
        assert_eq!(totals(&rounds[1]), (2, 7, 2, 7));
        assert_eq!(totals(&rounds[2]), (3, 8, 3, 8));
        assert_eq!(rounds[0].session, 1);
    }

    #[test]
    fn test_edit_keeps_session_boundaries() {
        let mut ledger = ledger_with(&[(5, 3)]);
        ledger.start_new_session();
        ledger.add_round(4, 4).unwrap();
        ledger.edit_round(0, 10, 0).unwrap();

        let rounds = ledger.rounds();
        assert_eq!(totals(&rounds[1]), (4, 4, 14, 4));
        assert_eq!(ledger.current_session(), 2);
        assert_consistent(rounds);
    }

    #[test]
    fn test_edit_invalid_index() {
        let mut ledger = ledger_with(&[(1, 2)]);
        let before = ledger.state();
        let err = ledger.edit_round(1, 0, 0).unwrap_err();
        assert_eq!(err, LedgerError::InvalidIndex { index: 1, len: 1 });
        assert_eq!(ledger.state(), before);
    }

    #[test]
    fn test_delete_advances_session() {
        let mut ledger = ledger_with(&[(5, 3), (2, 7)]);
        ledger.start_new_session();
        ledger.add_round(1, 1).unwrap();

        ledger.delete_round(2).unwrap();
        assert_eq!(ledger.rounds().len(), 2);
        assert_eq!(ledger.current_session(), 2);
        assert_eq!(ledger.session_totals(), SessionTotals::default());
    }

    #[test]
    fn test_delete_old_round_moves_to_next_session() {
        let mut ledger = ledger_with(&[(5, 3), (2, 7)]);
        ledger.delete_round(0).unwrap();

        // Still one session of rounds, but new rounds now start session 2
        assert_eq!(ledger.current_session(), 2);
        assert_eq!(totals(&ledger.rounds()[0]), (2, 7, 2, 7));
    }

    #[test]
    fn test_delete_last_round_resets_session() {
        let mut ledger = ledger_with(&[(5, 3)]);
        ledger.start_new_session();
        ledger.start_new_session();
        ledger.delete_round(0).unwrap();
        assert!(ledger.is_empty());
        assert_eq!(ledger.current_session(), 1);
    }

    #[test]
    fn test_delete_invalid_index() {
        let mut ledger = Ledger::new();
        assert_eq!(
            ledger.delete_round(0),
            Err(LedgerError::InvalidIndex { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_add_overflow_rejected() {
        let mut ledger = ledger_with(&[(i64::MAX, 0)]);
        let err = ledger.add_round(1, 0).unwrap_err();
        assert_eq!(err, LedgerError::TotalOverflow { index: 1 });
        assert_eq!(ledger.rounds().len(), 1);
    }

    #[test]
    fn test_edit_overflow_leaves_state() {
        let mut ledger = ledger_with(&[(i64::MAX, 0), (0, 0)]);
        let before = ledger.state();
        let err = ledger.edit_round(1, 1, 0).unwrap_err();
        assert_eq!(err, LedgerError::TotalOverflow { index: 1 });
        assert_eq!(ledger.state(), before);
    }

    #[test]
    fn test_negative_scores() {
        let ledger = ledger_with(&[(-5, 3), (2, -7)]);
        assert_eq!(totals(&ledger.rounds()[1]), (-3, -4, -3, -4));
        assert_eq!(ledger.session_delta(), 1);
    }

    #[test]
    fn test_format_delta() {
        let ledger = Ledger::new();
        assert_eq!(ledger.format_delta(7), "+7 (Mike)");
        assert_eq!(ledger.format_delta(-3), "+3 (Preeta)");
        assert_eq!(ledger.format_delta(0), "0 (Tied)");
    }

    #[test]
    fn test_format_delta_custom_names() {
        let ledger = Ledger::with_settings(Settings {
            mike_name: "Ann".to_string(),
            preeta_name: "Bob".to_string(),
            ..Default::default()
        });
        assert_eq!(ledger.format_delta(2), "+2 (Ann)");
        assert_eq!(ledger.format_delta(-2), "+2 (Bob)");
    }

    #[test]
    fn test_anger_from_session_only() {
        let mut ledger = ledger_with(&[(30, 0)]);
        assert_eq!(ledger.anger_levels().mike_anger, AngerLevel::Angry);

        // Overall delta is still 30 but the new session is tied
        ledger.start_new_session();
        assert_eq!(ledger.anger_levels(), AngerLevels::default());

        ledger.add_round(0, 12).unwrap();
        let levels = ledger.anger_levels();
        assert_eq!(levels.preeta_anger, AngerLevel::Annoyed);
        assert_eq!(levels.mike_anger, AngerLevel::Neutral);
    }

    #[test]
    fn test_rounds_reversed_does_not_mutate() {
        let ledger = ledger_with(&[(1, 0), (2, 0), (3, 0)]);
        let reversed = ledger.rounds_reversed();
        assert_eq!(reversed[0].mike_score, 3);
        assert_eq!(reversed[2].mike_score, 1);
        assert_eq!(ledger.rounds()[0].mike_score, 1);
    }

    #[test]
    fn test_history_maps_to_chronological_index() {
        let ledger = ledger_with(&[(1, 0), (2, 0), (3, 0)]);
        let history = ledger.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].index, 2);
        assert_eq!(history[0].number, 3);
        assert_eq!(history[0].round.mike_score, 3);
        assert_eq!(history[2].index, 0);
    }

    #[test]
    fn test_clear_all_data() {
        let mut ledger = ledger_with(&[(1, 2)]);
        ledger.start_new_session();
        ledger.clear_all_data();
        assert!(ledger.is_empty());
        assert_eq!(ledger.current_session(), 1);
    }

    #[test]
    fn test_import_trusts_totals() {
        let mut ledger = ledger_with(&[(9, 9)]);
        let bogus = Round {
            session: 3,
            mike_score: 1,
            preeta_score: 2,
            mike_session_total: 100,
            preeta_session_total: 200,
            mike_overall_total: 300,
            preeta_overall_total: 400,
        };
        ledger.import_rounds(vec![bogus]).unwrap();
        assert_eq!(ledger.rounds(), &[bogus]);
        assert_eq!(ledger.current_session(), 4);
        assert_eq!(ledger.overall_totals().mike_overall_total, 300);

        // The next recompute repairs them
        ledger.recalculate_all_totals().unwrap();
        assert_eq!(totals(&ledger.rounds()[0]), (1, 2, 1, 2));
    }

    #[test]
    fn test_import_empty_resets_session() {
        let mut ledger = ledger_with(&[(1, 1)]);
        ledger.start_new_session();
        ledger.import_rounds(Vec::new()).unwrap();
        assert!(ledger.is_empty());
        assert_eq!(ledger.current_session(), 1);
    }

    #[test]
    fn test_import_rejects_unusable_session() {
        let mut ledger = ledger_with(&[(4, 2)]);
        let before = ledger.state();
        let good = ledger.rounds()[0];

        for session in [0, LAST_SESSION, u32::MAX] {
            let bad = Round { session, ..good };
            let err = ledger.import_rounds(vec![good, bad]).unwrap_err();
            assert_eq!(err, LedgerError::InvalidSession { index: 1 });
            assert_eq!(ledger.state(), before);
        }
    }

    #[test]
    fn test_import_highest_session_moves_past_it() {
        let mut ledger = Ledger::new();
        let round = Round {
            session: LAST_SESSION - 1,
            mike_score: 1,
            preeta_score: 1,
            mike_session_total: 1,
            preeta_session_total: 1,
            mike_overall_total: 1,
            preeta_overall_total: 1,
        };
        ledger.import_rounds(vec![round]).unwrap();
        assert_eq!(ledger.current_session(), LAST_SESSION);

        let added = ledger.add_round(2, 2).unwrap();
        assert_eq!(added.session, LAST_SESSION);
        assert_eq!(ledger.session_totals().mike_session_total, 2);

        // No session past the last one; the saved state still loads
        ledger.start_new_session();
        assert_eq!(ledger.current_session(), LAST_SESSION);
        assert!(ledger.state().is_valid());
    }

    #[test]
    fn test_state_round_trip() {
        let mut ledger = ledger_with(&[(1, 2), (3, 4)]);
        ledger.start_new_session();
        let state = ledger.state();

        let mut restored = Ledger::new();
        restored.load_state(state.clone()).unwrap();
        assert_eq!(restored.state(), state);
        assert_eq!(restored.current_session(), 2);
    }

    #[test]
    fn test_load_state_zero_session() {
        let mut ledger = Ledger::new();
        ledger
            .load_state(LedgerState {
                rounds: Vec::new(),
                current_session: 0,
            })
            .unwrap();
        assert_eq!(ledger.current_session(), 1);
    }

    #[test]
    fn test_load_state_rejects_session_zero() {
        let mut ledger = ledger_with(&[(1, 1)]);
        let before = ledger.state();
        let mut state = before.clone();
        state.rounds[0].session = 0;

        assert_eq!(
            ledger.load_state(state.clone()),
            Err(LedgerError::InvalidSession { index: 0 })
        );
        assert_eq!(ledger.state(), before);
        assert!(Ledger::from_state(state, Settings::default()).is_err());
    }

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score("12"), Ok(12));
        assert_eq!(parse_score("  -4 "), Ok(-4));
        assert_eq!(parse_score("+3"), Ok(3));
        for bad in ["", "NaN", "1.5", "12abc", "abc"] {
            assert_eq!(
                parse_score(bad),
                Err(LedgerError::InvalidScore {
                    value: bad.to_string()
                })
            );
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Add(i64, i64),
            NewSession,
            Delete(usize),
            Edit(usize, i64, i64),
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                4 => (-50i64..50, -50i64..50).prop_map(|(m, p)| Op::Add(m, p)),
                1 => Just(Op::NewSession),
                1 => (0usize..20).prop_map(Op::Delete),
                1 => (0usize..20, -50i64..50, -50i64..50).prop_map(|(i, m, p)| Op::Edit(i, m, p)),
            ]
        }

        fn apply(ledger: &mut Ledger, op: &Op) {
            match *op {
                Op::Add(m, p) => {
                    ledger.add_round(m, p).unwrap();
                }
                Op::NewSession => ledger.start_new_session(),
                Op::Delete(i) => {
                    let _ = ledger.delete_round(i);
                }
                Op::Edit(i, m, p) => {
                    let _ = ledger.edit_round(i, m, p);
                }
            }
        }

        proptest! {
            #[test]
            fn totals_stay_consistent(ops in prop::collection::vec(op(), 0..40)) {
                let mut ledger = Ledger::new();
                for op in &ops {
                    apply(&mut ledger, op);
                    assert_consistent(ledger.rounds());
                }
            }

            #[test]
            fn recalculate_is_idempotent(ops in prop::collection::vec(op(), 0..40)) {
                let mut ledger = Ledger::new();
                for op in &ops {
                    apply(&mut ledger, op);
                }
                ledger.recalculate_all_totals().unwrap();
                let once = ledger.state();
                ledger.recalculate_all_totals().unwrap();
                prop_assert_eq!(ledger.state(), once);
            }

            #[test]
            fn reverse_twice_is_identity(scores in prop::collection::vec((-50i64..50, -50i64..50), 0..30)) {
                let ledger = ledger_with(&scores);
                let mut twice = ledger.rounds_reversed();
                twice.reverse();
                prop_assert_eq!(twice.as_slice(), ledger.rounds());
            }
        }
    }
}
