//! Read-only view model consumed by presentation layers.

use super::engine::{GameState, Phase};
use super::history::MoveRecord;
use super::position::Coordinate;
use super::types::{Player, Square};
use serde::Serialize;

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// Step this entry jumps to.
    pub step: usize,
    /// Button text: "Go to game start" or "Go to move #k".
    pub label: String,
    /// Row and column of the move that produced this step.
    pub coordinate: Option<Coordinate>,
    /// Whether this step is the one displayed.
    pub current: bool,
}

impl HistoryEntry {
    /// Label text for `step`.
    pub fn label_for(step: usize) -> String {
        if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", step)
        }
    }

    fn new(step: usize, record: &MoveRecord, current: bool) -> Self {
        Self {
            step,
            label: Self::label_for(step),
            coordinate: record.coordinate(),
            current,
        }
    }
}

/// Snapshot of everything a presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Squares of the displayed board, row-major.
    pub board: [Square; 9],
    /// "Winner: X" or "Next player: O".
    pub status: String,
    /// Player to move at the displayed step.
    pub current_player: Player,
    /// Winner on the displayed board.
    pub winner: Option<Player>,
    /// Phase of the displayed board.
    pub phase: Phase,
    /// Displayed step.
    pub step: usize,
    /// Move list, one entry per recorded step.
    pub entries: Vec<HistoryEntry>,
}

impl GameView {
    /// Builds the view of `state`.
    pub fn from_state(state: &GameState) -> Self {
        let entries = state
            .history()
            .iter()
            .enumerate()
            .map(|(step, record)| HistoryEntry::new(step, record, step == state.step()))
            .collect();

        Self {
            board: *state.board().squares(),
            status: state.status(),
            current_player: state.current_player(),
            winner: state.winner(),
            phase: state.phase(),
            step: state.step(),
            entries,
        }
    }
}
