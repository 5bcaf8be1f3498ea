//! Monotonic board invariant: squares never change once set.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: each record extends the previous one by exactly its move.
///
/// Once a square transitions from Empty to Occupied, it never changes in
/// later records of the same history.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().records().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let Some(pos) = after.placed() else {
                return false;
            };
            let Some(player) = after.squares().get(pos).player() else {
                return false;
            };
            before.squares().get(pos) == Square::Empty
                && before.squares().with_mark(pos, player) == *after.squares()
        })
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
