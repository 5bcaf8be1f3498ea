//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold for every reachable
//! [`GameState`](crate::GameState). Transitions check them in debug builds,
//! and they can be tested independently.

use derive_more::Display;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl std::error::Error for InvariantViolation {}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(
    results: impl IntoIterator<Item = (bool, &'static str)>,
) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = results
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect([
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect([
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

pub mod alternating_turn;
pub mod history_consistent;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// All tic-tac-toe invariants as a composable set.
pub type TicTacToeInvariants = (
    HistoryConsistentInvariant,
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{History, MoveRecord};
    use crate::{Board, GameState, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_empty_game() {
        assert!(TicTacToeInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let state = GameState::new()
            .apply_move(Position::TopLeft)
            .apply_move(Position::Center)
            .apply_move(Position::TopRight)
            .jump_to(1)
            .unwrap()
            .apply_move(Position::BottomRight);
        assert!(TicTacToeInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_step_beyond_history() {
        let state = GameState::from_parts(History::new(), 5);
        let violations = TicTacToeInvariants::check_all(&state).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(
                HistoryConsistentInvariant::description()
            )]
        );
    }

    #[test]
    fn test_invariant_set_reports_every_broken_invariant() {
        let first = MoveRecord::start().next(Position::Center, Player::X);
        let overwrite = MoveRecord::from_parts(
            Board::new().with_mark(Position::Center, Player::O),
            Some(Position::Center),
        );
        let history = History::from_records_unchecked(vec![MoveRecord::start(), first, overwrite]);
        let violations =
            TicTacToeInvariants::check_all(&GameState::from_parts(history, 2)).unwrap_err();

        let descriptions: Vec<_> = violations.iter().map(|v| v.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec![
                HistoryConsistentInvariant::description(),
                MonotonicBoardInvariant::description(),
                AlternatingTurnInvariant::description(),
            ]
        );
    }

    #[test]
    fn test_two_invariant_set_reports_failure() {
        type TwoInvariants = (HistoryConsistentInvariant, MonotonicBoardInvariant);
        let state = GameState::from_parts(History::new(), 1);
        assert_eq!(TwoInvariants::check_all(&state).map_err(|v| v.len()), Err(1));
    }
}
