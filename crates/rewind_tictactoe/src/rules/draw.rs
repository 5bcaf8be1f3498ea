//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Position};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (no square left to play).
pub fn is_full(board: &Board) -> bool {
    Position::valid_moves(board).is_empty()
}

/// A full board with no winner.
#[instrument(skip(board), fields(board = %board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
