//! Game engine: pure state transitions over a time-travel history.
//!
//! [`GameState`] is plain data. Every transition takes `&self` and returns
//! the next state, so earlier states stay valid and can be compared, logged
//! or kept for undo. [`Game`] owns one state for a session and swaps it on
//! each event.

use super::action::{Command, JumpError, MoveError, MoveOutcome};
use super::history::{History, MoveRecord};
use super::invariants::{InvariantSet, InvariantViolation, TicTacToeInvariants};
use super::position::Position;
use super::rules;
use super::types::{Board, Player};
use super::view::GameView;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Whether the displayed board still accepts moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No winner and at least one empty square.
    InProgress,
    /// A line is complete or the board is full.
    Terminal,
}

/// Outcome of a finished board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Board filled with no line completed.
    Draw,
}

impl Outcome {
    /// Outcome of `board`, or `None` while moves remain and no line is complete.
    pub fn of(board: &Board) -> Option<Outcome> {
        match rules::check_winner(board) {
            Some(player) => Some(Outcome::Winner(player)),
            None if rules::is_draw(board) => Some(Outcome::Draw),
            None => None,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Complete game state: the history and the step being displayed.
///
/// The player to move is not stored. It follows from the parity of
/// `step`, so it can never disagree with the board. Deserialized states
/// are checked against [`TicTacToeInvariants`] and rejected if any fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedGameState")]
pub struct GameState {
    history: History,
    step: usize,
}

#[derive(Deserialize)]
struct UncheckedGameState {
    history: History,
    step: usize,
}

impl TryFrom<UncheckedGameState> for GameState {
    type Error = InvariantViolation;

    fn try_from(raw: UncheckedGameState) -> Result<Self, Self::Error> {
        let state = GameState {
            history: raw.history,
            step: raw.step,
        };
        TicTacToeInvariants::check_all(&state).map_err(|violations| {
            let descriptions: Vec<_> = violations.into_iter().map(|v| v.description).collect();
            InvariantViolation::new(descriptions.join("; "))
        })?;
        Ok(state)
    }
}

impl GameState {
    /// Creates a new game at the empty board.
    pub fn new() -> Self {
        Self {
            history: History::new(),
            step: 0,
        }
    }

    /// Returns the full move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the displayed record.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Record at the current step.
    pub fn current(&self) -> &MoveRecord {
        // step is kept within history by every transition
        &self.history.records()[self.step]
    }

    /// Board at the current step.
    pub fn board(&self) -> &Board {
        self.current().squares()
    }

    /// Player to move at the current step.
    pub fn current_player(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Winner on the displayed board, recomputed on every call.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self.board())
    }

    /// Outcome of the displayed board, if it is finished.
    pub fn outcome(&self) -> Option<Outcome> {
        Outcome::of(self.board())
    }

    /// Phase of the displayed board.
    pub fn phase(&self) -> Phase {
        if self.outcome().is_some() {
            Phase::Terminal
        } else {
            Phase::InProgress
        }
    }

    /// Status line for the displayed board.
    ///
    /// A full board without a winner still reads "Next player".
    pub fn status(&self) -> String {
        match self.winner() {
            Some(winner) => format!("Winner: {}", winner),
            None => format!("Next player: {}", self.current_player()),
        }
    }

    /// Places the current player's mark, reporting why a move is refused.
    ///
    /// On success the history is cut back to the current step before the
    /// new record is appended, and the step moves to the new record.
    #[instrument(skip(self), fields(step = self.step, player = %self.current_player()))]
    pub fn try_apply_move(&self, pos: Position) -> Result<GameState, MoveError> {
        if let Some(winner) = self.winner() {
            return Err(MoveError::GameOver(winner));
        }
        if !self.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let record = self.current().next(pos, self.current_player());
        let history = self.history.branch(self.step, record);
        let next = GameState {
            step: history.len() - 1,
            history,
        };

        debug_assert!(
            TicTacToeInvariants::check_all(&next).is_ok(),
            "Move broke game invariants"
        );
        debug!(step = next.step, "Move applied");
        Ok(next)
    }

    /// Places the current player's mark, ignoring invalid moves.
    ///
    /// An occupied square or a board that already has a winner leaves the
    /// state exactly as it was.
    pub fn apply_move(&self, pos: Position) -> GameState {
        self.try_apply_move(pos).unwrap_or_else(|err| {
            debug!(%err, "Move ignored");
            self.clone()
        })
    }

    /// Like [`try_apply_move`](Self::try_apply_move) for a raw cell index.
    pub fn try_apply_index(&self, index: usize) -> Result<GameState, MoveError> {
        let pos = Position::from_index(index).map_err(|_| MoveError::OutOfBounds(index))?;
        self.try_apply_move(pos)
    }

    /// Like [`apply_move`](Self::apply_move) for a raw cell index.
    ///
    /// Indices outside `0..9` are ignored like any other invalid move.
    pub fn apply_index(&self, index: usize) -> GameState {
        self.try_apply_index(index).unwrap_or_else(|err| {
            debug!(%err, "Move ignored");
            self.clone()
        })
    }

    /// Displays the board at `step` without changing history.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError`] if `step` is not a recorded step.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&self, step: usize) -> Result<GameState, JumpError> {
        if step >= self.history.len() {
            return Err(JumpError {
                step,
                len: self.history.len(),
            });
        }
        Ok(GameState {
            history: self.history.clone(),
            step,
        })
    }

    /// Applies one command.
    pub fn apply(&self, command: Command) -> Result<GameState, JumpError> {
        match command {
            Command::Play(pos) => Ok(self.apply_move(pos)),
            Command::JumpTo(step) => self.jump_to(step),
        }
    }

    /// Rebuilds a session by applying `commands` to a fresh game.
    ///
    /// Invalid moves are skipped as they would be interactively. An
    /// out-of-range jump stops the replay.
    #[instrument(skip(commands), fields(count = commands.len()))]
    pub fn replay(commands: &[Command]) -> Result<GameState, JumpError> {
        commands
            .iter()
            .try_fold(GameState::new(), |state, command| state.apply(*command))
    }

    /// Read-only snapshot for presentation.
    pub fn view(&self) -> GameView {
        GameView::from_state(self)
    }

    #[cfg(test)]
    pub(crate) fn from_parts(history: History, step: usize) -> Self {
        Self { history, step }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Tic-tac-toe session: owns the state and handles user events.
#[derive(Debug, Clone, Default)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new session at the empty board.
    #[instrument]
    pub fn new() -> Self {
        info!("Starting new game");
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Handles activation of cell `index`.
    #[instrument(skip(self), fields(step = self.state.step()))]
    pub fn handle_cell(&mut self, index: usize) -> MoveOutcome {
        match self.state.try_apply_index(index) {
            Ok(next) => {
                self.state = next;
                if let Some(outcome) = self.state.outcome() {
                    info!(
                        %outcome,
                        winner = ?outcome.winner(),
                        draw = outcome.is_draw(),
                        "Game finished"
                    );
                }
                MoveOutcome::Accepted
            }
            Err(err) => {
                debug!(%err, "Cell activation ignored");
                MoveOutcome::Ignored(err)
            }
        }
    }

    /// Handles selection of history entry `step`.
    #[instrument(skip(self), fields(from = self.state.step()))]
    pub fn handle_jump(&mut self, step: usize) -> Result<(), JumpError> {
        self.state = self.state.jump_to(step)?;
        Ok(())
    }

    /// Handles one command.
    pub fn handle(&mut self, command: Command) -> Result<MoveOutcome, JumpError> {
        match command {
            Command::Play(pos) => Ok(self.handle_cell(pos.to_index())),
            Command::JumpTo(step) => self.handle_jump(step).map(|()| MoveOutcome::Accepted),
        }
    }

    /// Read-only snapshot for presentation.
    pub fn view(&self) -> GameView {
        self.state.view()
    }
}

impl From<GameState> for Game {
    fn from(state: GameState) -> Self {
        Self { state }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_starts_with_x() {
        let state = GameState::new();
        assert_eq!(state.step(), 0);
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.phase(), Phase::InProgress);
        assert_eq!(state.status(), "Next player: X");
    }

    #[test]
    fn test_move_refused_reasons() {
        let state = GameState::new().apply_move(Position::Center);
        assert_eq!(
            state.try_apply_move(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(state.try_apply_index(9), Err(MoveError::OutOfBounds(9)));
    }

    #[test]
    fn test_jump_out_of_range_is_rejected() {
        let state = GameState::new().apply_move(Position::Center);
        assert_eq!(state.jump_to(2), Err(JumpError { step: 2, len: 2 }));
    }

    #[test]
    fn test_outcome_of_boards() {
        let won: Board = "XXXOO....".parse().unwrap();
        let drawn: Board = "XOXOXXOXO".parse().unwrap();
        let open: Board = "XO.......".parse().unwrap();

        assert_eq!(Outcome::of(&won), Some(Outcome::Winner(Player::X)));
        assert_eq!(Outcome::of(&won).and_then(|o| o.winner()), Some(Player::X));
        assert!(Outcome::of(&drawn).is_some_and(|o| o.is_draw()));
        assert_eq!(Outcome::of(&drawn).and_then(|o| o.winner()), None);
        assert_eq!(Outcome::of(&open), None);
    }

    #[test]
    fn test_session_reports_outcome() {
        let mut game = Game::new();
        assert!(game.handle_cell(4).is_accepted());
        assert_eq!(
            game.handle_cell(4),
            MoveOutcome::Ignored(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game.state().step(), 1);
        assert!(game.handle_jump(5).is_err());
        assert_eq!(game.state().step(), 1);
    }
}
