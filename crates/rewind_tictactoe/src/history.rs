//! Move records and the append-only history of board snapshots.

use super::invariants::InvariantViolation;
use super::position::{Coordinate, Position};
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Immutable snapshot of the board after a move.
///
/// The first record of every history holds the empty board and no move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    squares: Board,
    placed: Option<Position>,
}

impl MoveRecord {
    /// Record for the empty starting board.
    pub fn start() -> Self {
        Self {
            squares: Board::new(),
            placed: None,
        }
    }

    /// Board after this record's move.
    pub fn squares(&self) -> &Board {
        &self.squares
    }

    /// Square filled by this record's move, `None` at game start.
    pub fn placed(&self) -> Option<Position> {
        self.placed
    }

    /// Row and column of this record's move, `None` at game start.
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.placed.map(Position::coordinate)
    }

    /// Player who made this record's move.
    pub fn player(&self) -> Option<Player> {
        self.placed
            .and_then(|pos| self.squares.get(pos).player())
    }

    /// Builds the record that follows this one when `player` takes `pos`.
    pub fn next(&self, pos: Position, player: Player) -> Self {
        Self {
            squares: self.squares.with_mark(pos, player),
            placed: Some(pos),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(squares: Board, placed: Option<Position>) -> Self {
        Self { squares, placed }
    }
}

/// Ordered board snapshots, one per step, starting from the empty board.
///
/// A history is never empty. Records are only ever appended; branching
/// from an earlier step keeps the shared prefix and drops the rest.
/// Deserializing rejects a history without the start record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedHistory")]
pub struct History {
    records: Vec<MoveRecord>,
}

#[derive(Deserialize)]
struct UncheckedHistory {
    records: Vec<MoveRecord>,
}

impl TryFrom<UncheckedHistory> for History {
    type Error = InvariantViolation;

    fn try_from(raw: UncheckedHistory) -> Result<Self, Self::Error> {
        match raw.records.first() {
            Some(first) if *first == MoveRecord::start() => Ok(Self {
                records: raw.records,
            }),
            _ => Err(InvariantViolation::new(
                "History must begin with the empty starting board",
            )),
        }
    }
}

impl History {
    /// History holding only the starting record.
    pub fn new() -> Self {
        Self {
            records: vec![MoveRecord::start()],
        }
    }

    /// Number of records (moves played plus one).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Never true: a history always holds the start record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `step`.
    pub fn get(&self, step: usize) -> Option<&MoveRecord> {
        self.records.get(step)
    }

    /// Most recent record.
    pub fn latest(&self) -> &MoveRecord {
        // records always holds the start record
        &self.records[self.records.len() - 1]
    }

    /// All records in step order.
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Iterates records in step order.
    pub fn iter(&self) -> std::slice::Iter<'_, MoveRecord> {
        self.records.iter()
    }

    /// Returns a new history that keeps records `0..=step` and appends `record`.
    ///
    /// Records after `step` are discarded. The receiver is not modified.
    #[instrument(skip(self, record), fields(len = self.records.len()))]
    pub fn branch(&self, step: usize, record: MoveRecord) -> Self {
        let keep = (step + 1).min(self.records.len());
        let dropped = self.records.len() - keep;
        if dropped > 0 {
            debug!(dropped, "Discarding future records");
        }

        let mut records = Vec::with_capacity(keep + 1);
        records.extend_from_slice(&self.records[..keep]);
        records.push(record);
        Self { records }
    }

    #[cfg(test)]
    pub(crate) fn from_records_unchecked(records: Vec<MoveRecord>) -> Self {
        Self { records }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a MoveRecord;
    type IntoIter = std::slice::Iter<'a, MoveRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history_has_start_record() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest(), &MoveRecord::start());
        assert_eq!(history.latest().coordinate(), None);
    }

    #[test]
    fn test_branch_truncates_and_appends() {
        let start = MoveRecord::start();
        let first = start.next(Position::TopLeft, Player::X);
        let second = first.next(Position::Center, Player::O);
        let history = History::new()
            .branch(0, first.clone())
            .branch(1, second);
        assert_eq!(history.len(), 3);

        let alternative = first.next(Position::BottomRight, Player::O);
        let branched = history.branch(1, alternative.clone());

        assert_eq!(branched.len(), 3);
        assert_eq!(branched.latest(), &alternative);
        // the source history is untouched
        assert_eq!(history.get(2).and_then(MoveRecord::placed), Some(Position::Center));
    }

    #[test]
    fn test_record_reports_move() {
        let record = MoveRecord::start().next(Position::MiddleRight, Player::X);
        assert_eq!(record.player(), Some(Player::X));
        assert_eq!(record.coordinate(), Some(Coordinate { row: 1, col: 2 }));
    }
}
