//! Rewind - command-line front end for the tic-tac-toe engine.
//!
//! The binary parses commands from the command line or a script file,
//! drives a [`rewind_tictactoe::Game`] through them, and prints the final
//! view as text or JSON.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod render;
mod script;
mod session;

pub use cli::{Cli, Command};
pub use config::{Config, ConfigError, DEFAULT_CONFIG_PATH, OutputFormat};
pub use render::{BoardReport, render_report, render_text, render_view};
pub use script::{ScriptError, load_script, parse_command, parse_script, parse_tokens};
pub use session::play_commands;
