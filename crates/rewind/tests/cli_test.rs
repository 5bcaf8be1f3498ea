//! Tests for the rewind front end: argument parsing, config and scripts.

use clap::Parser;
use rewind::{
    Cli, Command, Config, OutputFormat, ScriptError, load_script, parse_tokens, play_commands,
    render_view,
};
use std::io::Write;

#[test]
fn test_parse_play_arguments() {
    let cli = Cli::try_parse_from(["rewind", "--format", "json", "play", "0", "center", "@1"])
        .expect("valid arguments");
    assert_eq!(cli.format, Some(OutputFormat::Json));
    match cli.command {
        Command::Play { commands } => assert_eq!(commands, ["0", "center", "@1"]),
        other => panic!("Unexpected command: {:?}", other),
    }
}

#[test]
fn test_parse_winner_arguments() {
    let cli = Cli::try_parse_from(["rewind", "winner", "XXX.OO..."]).expect("valid arguments");
    assert!(matches!(cli.command, Command::Winner { board } if board == "XXX.OO..."));
    assert_eq!(cli.config, None);
}

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "format = \"json\"\nlog_filter = \"debug\"").unwrap();

    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(*config.format(), OutputFormat::Json);
    assert_eq!(config.log_filter(), "debug");
    assert!(*config.show_coordinates());
}

#[test]
fn test_explicit_missing_config_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(Some(dir.path().join("missing.toml").as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_replay_script_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# top row for X").unwrap();
    writeln!(file, "0 4 1").unwrap();
    writeln!(file, "5, 2").unwrap();

    let commands = load_script(file.path()).unwrap();
    let game = play_commands(&commands).unwrap();
    assert_eq!(game.state().status(), "Winner: X");

    let text = render_view(&game.view(), &Config::default()).unwrap();
    assert!(text.contains("Winner: X"));
    assert!(text.contains("> 5. Go to move #5 (col 2, row 0)"));
}

#[test]
fn test_missing_script_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_script(dir.path().join("nope.txt")).unwrap_err();
    assert!(matches!(err, ScriptError::Read { .. }));
}

#[test]
fn test_json_output_after_time_travel() {
    let tokens: Vec<String> = ["4", "0", "8", "@1", "2"].iter().map(|s| s.to_string()).collect();
    let commands = parse_tokens(&tokens).unwrap();
    let game = play_commands(&commands).unwrap();

    let config = Config::default().with_format(OutputFormat::Json);
    let json: serde_json::Value =
        serde_json::from_str(&render_view(&game.view(), &config).unwrap()).unwrap();

    assert_eq!(json["step"], 2);
    assert_eq!(json["entries"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["status"], "Next player: X");
}

#[test]
fn test_unknown_token_rejected() {
    let tokens = vec!["4".to_string(), "sideways".to_string()];
    assert!(matches!(
        parse_tokens(&tokens),
        Err(ScriptError::UnknownArgument { token, position: 2 }) if token == "sideways"
    ));
}
