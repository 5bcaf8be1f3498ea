//! History consistency invariant: step `k` holds exactly `k` marks.

use super::super::GameState;
use super::Invariant;

/// Invariant: record `k` has exactly `k` occupied squares.
///
/// Only the start record lacks a move, and the displayed step is a
/// recorded one.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        if state.step() >= history.len() {
            return false;
        }

        history.iter().enumerate().all(|(step, record)| {
            record.squares().occupied() == step && record.placed().is_none() == (step == 0)
        })
    }

    fn description() -> &'static str {
        "Each history step holds one more mark than the previous"
    }
}
