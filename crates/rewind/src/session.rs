//! Drives a game session from a list of commands.

use rewind_tictactoe::{Command, Game, JumpError, MoveOutcome};
use tracing::{info, instrument, warn};

/// Plays `commands` against a fresh game, like a user clicking through them.
///
/// Ignored moves are logged and skipped. A jump outside the recorded
/// history stops the session.
#[instrument(skip(commands), fields(count = commands.len()))]
pub fn play_commands(commands: &[Command]) -> Result<Game, JumpError> {
    let mut game = Game::new();
    for command in commands {
        match game.handle(*command)? {
            MoveOutcome::Accepted => info!(%command, step = game.state().step(), "Command applied"),
            MoveOutcome::Ignored(reason) => warn!(%command, %reason, "Move ignored"),
        }
    }
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::{Player, Position};

    #[test]
    fn test_play_commands_skips_ignored_moves() {
        let game = play_commands(&[
            Command::Play(Position::Center),
            Command::Play(Position::Center),
            Command::Play(Position::TopLeft),
        ])
        .unwrap();
        assert_eq!(game.state().step(), 2);
        assert_eq!(game.state().current_player(), Player::X);
    }

    #[test]
    fn test_play_commands_fails_on_bad_jump() {
        let err = play_commands(&[Command::JumpTo(3)]).unwrap_err();
        assert_eq!(err, JumpError { step: 3, len: 1 });
    }
}
