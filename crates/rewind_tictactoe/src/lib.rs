//! Pure tic-tac-toe game logic with move history and time travel.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`], [`Board`], [`Position`]
//! - **Rules**: pure win and draw checks over a board ([`rules`])
//! - **History**: append-only board snapshots ([`History`], [`MoveRecord`])
//! - **Engine**: pure transitions over [`GameState`], plus the [`Game`]
//!   session that owns one state
//! - **View**: the [`GameView`] a presentation layer renders
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, Player, Position};
//!
//! let state = GameState::new()
//!     .apply_move(Position::TopLeft)
//!     .apply_move(Position::Center);
//! assert_eq!(state.current_player(), Player::X);
//!
//! // Travel back one move and branch: the old future is dropped.
//! let state = state.jump_to(1).unwrap().apply_move(Position::BottomRight);
//! assert_eq!(state.history().len(), 3);
//! assert_eq!(state.status(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{Command, JumpError, MoveError, MoveOutcome};
pub use engine::{Game, GameState, Outcome, Phase};
pub use history::{History, MoveRecord};
pub use position::{Coordinate, Position, PositionError};
pub use rules::check_winner;
pub use types::{Board, BoardParseError, Player, Square};
pub use view::{GameView, HistoryEntry};
