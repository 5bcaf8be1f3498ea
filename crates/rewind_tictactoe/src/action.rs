//! First-class action types for tic-tac-toe.
//!
//! Commands are the user intents a presentation layer forwards to the
//! engine: place a mark, or travel to an earlier step. They can be logged
//! and replayed to rebuild a session.

use super::{Player, Position};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A user intent applied to a game.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Place the current player's mark.
    #[display("play {}", _0)]
    Play(Position),

    /// Show the board at an earlier step.
    #[display("jump to {}", _0)]
    JumpTo(usize),
}

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed board already has a winner.
    #[display("Game is already over: {} won", _0)]
    GameOver(Player),

    /// The raw cell index does not name a square.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for MoveError {}

/// Error returned when traveling to a step that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("Step {} is outside history of length {}", step, len)]
pub struct JumpError {
    /// Requested step.
    pub step: usize,
    /// History length at the time of the request.
    pub len: usize,
}

impl std::error::Error for JumpError {}

/// Result of forwarding a cell activation to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// The move was applied and the step advanced.
    Accepted,
    /// The move was ignored; state is unchanged.
    Ignored(MoveError),
}

impl MoveOutcome {
    /// Whether the move changed the game.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted)
    }
}
