//! Rewind - tic-tac-toe with time travel.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use rewind::{
    BoardReport, Cli, Command, Config, load_script, parse_tokens, play_commands, render_report,
    render_view,
};
use rewind_tictactoe::Board;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config = config.with_format(format);
    }

    initialize_tracing(&config);
    debug!(?config, "Configuration loaded");

    let output = match cli.command {
        Command::Play { commands } => run_play(&commands, &config)?,
        Command::Replay { script } => run_replay(&script, &config)?,
        Command::Winner { board } => run_winner(&board, &config)?,
    };
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Logs go to stderr so printed results stay machine-readable.
fn initialize_tracing(config: &Config) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Play commands given on the command line
#[instrument(skip(config))]
fn run_play(tokens: &[String], config: &Config) -> Result<String> {
    let commands = parse_tokens(tokens)?;
    let game = play_commands(&commands)?;
    info!(status = %game.state().status(), "Session finished");
    Ok(render_view(&game.view(), config)?)
}

/// Play commands from a script file
#[instrument(skip(config), fields(script = %script.display()))]
fn run_replay(script: &std::path::Path, config: &Config) -> Result<String> {
    let commands = load_script(script)?;
    let game = play_commands(&commands)
        .with_context(|| format!("Replay of {} failed", script.display()))?;
    info!(status = %game.state().status(), "Replay finished");
    Ok(render_view(&game.view(), config)?)
}

/// Evaluate a standalone board
#[instrument(skip(config))]
fn run_winner(board: &str, config: &Config) -> Result<String> {
    let board: Board = board.parse().context("Invalid board")?;
    Ok(render_report(&BoardReport::new(&board), config)?)
}
