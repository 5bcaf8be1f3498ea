//! Text and JSON rendering of game views.

use crate::config::{Config, OutputFormat};
use rewind_tictactoe::{Board, GameView, Outcome, Player, Position, rules};
use serde::Serialize;

/// Renders a game view as plain text.
///
/// The current entry of the move list is marked with `>`. Coordinates are
/// printed column first.
pub fn render_text(view: &GameView, show_coordinates: bool) -> String {
    let mut out = Board::from_squares(view.board).grid();
    out.push_str("\n\n");
    out.push_str(&view.status);
    out.push('\n');

    for entry in &view.entries {
        let marker = if entry.current { '>' } else { ' ' };
        out.push_str(&format!("{} {}. {}", marker, entry.step, entry.label));
        if show_coordinates && let Some(coordinate) = entry.coordinate {
            out.push_str(&format!(" (col {}, row {})", coordinate.col, coordinate.row));
        }
        out.push('\n');
    }
    out
}

/// Renders a game view according to `config`.
pub fn render_view(view: &GameView, config: &Config) -> Result<String, serde_json::Error> {
    match config.format() {
        OutputFormat::Text => Ok(render_text(view, *config.show_coordinates())),
        OutputFormat::Json => serde_json::to_string_pretty(view),
    }
}

/// Evaluation of a standalone board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardReport {
    /// Winner, if any line is complete.
    pub winner: Option<Player>,
    /// The completed line.
    pub line: Option<[Position; 3]>,
    /// Board is full with no winner.
    pub draw: bool,
}

impl BoardReport {
    /// Evaluates `board`.
    pub fn new(board: &Board) -> Self {
        let outcome = Outcome::of(board);
        Self {
            winner: outcome.and_then(|o| o.winner()),
            line: rules::winning_line(board).map(|(_, line)| line),
            draw: outcome.is_some_and(|o| o.is_draw()),
        }
    }
}

/// Renders a board report according to `config`.
pub fn render_report(report: &BoardReport, config: &Config) -> Result<String, serde_json::Error> {
    match config.format() {
        OutputFormat::Json => serde_json::to_string_pretty(report),
        OutputFormat::Text => Ok(match (report.winner, report.line) {
            (Some(winner), Some(line)) => {
                let cells: Vec<_> = line.iter().map(|pos| pos.to_index().to_string()).collect();
                format!("Winner: {} ({})\n", winner, cells.join(", "))
            }
            _ if report.draw => "none (draw)\n".to_string(),
            _ => "none\n".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::GameState;

    #[test]
    fn test_render_text_marks_current_step() {
        let state = GameState::new()
            .apply_move(Position::Center)
            .apply_move(Position::TopLeft)
            .jump_to(1)
            .unwrap();
        let text = render_text(&state.view(), true);

        assert!(text.starts_with("0|1|2\n-+-+-\n3|X|5"));
        assert!(text.contains("Next player: O\n"));
        assert!(text.contains("  0. Go to game start\n"));
        assert!(text.contains("> 1. Go to move #1 (col 1, row 1)\n"));
        assert!(text.contains("  2. Go to move #2 (col 0, row 0)\n"));
    }

    #[test]
    fn test_render_text_without_coordinates() {
        let state = GameState::new().apply_move(Position::Center);
        let text = render_text(&state.view(), false);
        assert!(text.contains("> 1. Go to move #1\n"));
    }

    #[test]
    fn test_report_text() {
        let config = Config::default();
        let board: Board = "OXX.O.X.O".parse().unwrap();
        let text = render_report(&BoardReport::new(&board), &config).unwrap();
        assert_eq!(text, "Winner: O (0, 4, 8)\n");

        let board: Board = "XOXOXXOXO".parse().unwrap();
        let text = render_report(&BoardReport::new(&board), &config).unwrap();
        assert_eq!(text, "none (draw)\n");
    }

    #[test]
    fn test_board_report_fields() {
        let won = BoardReport::new(&"XXXOO....".parse().unwrap());
        assert_eq!(won.winner, Some(Player::X));
        assert_eq!(
            won.line,
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
        assert!(!won.draw);

        let drawn = BoardReport::new(&"XOXOXXOXO".parse().unwrap());
        assert_eq!((drawn.winner, drawn.line, drawn.draw), (None, None, true));

        let open = BoardReport::new(&"XO.......".parse().unwrap());
        assert_eq!((open.winner, open.draw), (None, false));
    }
}
