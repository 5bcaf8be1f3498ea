//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: players alternate turns, X first.
///
/// Record `k` was made by X when `k` is odd and by O when `k` is even,
/// and the player to move matches the parity of the displayed step.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let moves_alternate = state
            .history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, record)| record.player() == Some(Player::for_step(step - 1)));

        let counts_balanced = state.history().iter().enumerate().all(|(step, record)| {
            let board = record.squares();
            board.count(Player::X) == step.div_ceil(2) && board.count(Player::O) == step / 2
        });

        moves_alternate
            && counts_balanced
            && state.current_player() == Player::for_step(state.step())
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
