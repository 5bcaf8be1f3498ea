//! Command-line interface for rewind.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Play tic-tac-toe from the command line, jumping back through history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (overrides the configuration file)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply commands to a new game and print the result
    ///
    /// A command is a cell index (0-8), a position label such as
    /// `center` or `top-left`, or a jump such as `@2` or `jump:2`.
    Play {
        /// Commands to apply, in order
        commands: Vec<String>,
    },

    /// Apply commands read from a script file, one or more per line
    Replay {
        /// Script file; `#` starts a comment
        script: PathBuf,
    },

    /// Report the winner of a board given as nine cells
    Winner {
        /// Cells in row-major order: `X`, `O`, and `.` or `-` for empty
        board: String,
    },
}
