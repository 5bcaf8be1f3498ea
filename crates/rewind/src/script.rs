//! Parsing of command tokens and command scripts.

use derive_more::Display;
use rewind_tictactoe::{Command, Position};
use std::path::Path;
use tracing::{debug, instrument};

/// Error reading or parsing commands.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ScriptError {
    /// A token is neither a position nor a jump.
    #[display("Unrecognized command {:?} on line {}", token, line)]
    UnknownCommand {
        /// Offending token.
        token: String,
        /// 1-based line of the token.
        line: usize,
    },

    /// A command-line argument is neither a position nor a jump.
    #[display("Unrecognized command {:?} at argument {}", token, position)]
    UnknownArgument {
        /// Offending token.
        token: String,
        /// 1-based position among the command arguments.
        position: usize,
    },

    /// The script file could not be read.
    #[display("Failed to read script {}: {}", path, message)]
    Read {
        /// Script path.
        path: String,
        /// Underlying I/O error text.
        message: String,
    },
}

impl std::error::Error for ScriptError {}

/// Parses one command token.
///
/// Accepts a cell index (`0`-`8`), a position label (`center`,
/// `top-left`), or a jump (`@3`, `jump:3`, `jump=3`).
pub fn parse_command(token: &str) -> Option<Command> {
    let token = token.trim();
    let lower = token.to_lowercase();
    let jump = lower
        .strip_prefix('@')
        .or_else(|| lower.strip_prefix("jump:"))
        .or_else(|| lower.strip_prefix("jump="));
    if let Some(step) = jump {
        return step.parse().ok().map(Command::JumpTo);
    }

    Position::from_label_or_number(token).map(Command::Play)
}

/// Parses a list of command-line tokens.
#[instrument]
pub fn parse_tokens(tokens: &[String]) -> Result<Vec<Command>, ScriptError> {
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            parse_command(token).ok_or_else(|| ScriptError::UnknownArgument {
                token: token.clone(),
                position: index + 1,
            })
        })
        .collect()
}

/// Parses a script: commands separated by whitespace or commas, `#` comments.
#[instrument(skip(text))]
pub fn parse_script(text: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let content = line.split('#').next().unwrap_or_default();
        for token in content
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
        {
            let command = parse_command(token).ok_or_else(|| ScriptError::UnknownCommand {
                token: token.to_string(),
                line: index + 1,
            })?;
            commands.push(command);
        }
    }
    debug!(count = commands.len(), "Script parsed");
    Ok(commands)
}

/// Reads and parses a script file.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_script(path: impl AsRef<Path>) -> Result<Vec<Command>, ScriptError> {
    let text = std::fs::read_to_string(path.as_ref()).map_err(|e| ScriptError::Read {
        path: path.as_ref().display().to_string(),
        message: e.to_string(),
    })?;
    parse_script(&text)
}
