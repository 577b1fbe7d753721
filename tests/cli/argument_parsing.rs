//! Core CLI argument parsing tests

use clap::Parser;
use msgqueue::app::cli::args::{Args, OutputFormat};
use std::path::PathBuf;

#[test]
fn test_scenario_path_is_positional() {
    let args = Args::try_parse_from(["msgqueue", "runs/basic.toml"]).unwrap();
    assert_eq!(args.scenario, PathBuf::from("runs/basic.toml"));
    assert_eq!(args.config_file, None);
    assert_eq!(args.output_format(), OutputFormat::Text);
}

#[test]
fn test_short_options() {
    let args = Args::try_parse_from([
        "msgqueue", "-c", "my.toml", "-H", "0", "-o", "json", "-l", "info", "-f", "out.log",
        "s.toml",
    ])
    .unwrap();

    assert_eq!(args.config_file, Some(PathBuf::from("my.toml")));
    assert_eq!(args.history_size, Some(0));
    assert_eq!(args.output_format(), OutputFormat::Json);
    assert_eq!(args.log_level.as_deref(), Some("info"));
    assert_eq!(args.log_file_path(), Some("out.log"));
}

#[test]
fn test_invalid_values_rejected() {
    assert!(Args::try_parse_from(["msgqueue", "-H", "-1", "s.toml"]).is_err());
    assert!(Args::try_parse_from(["msgqueue", "-o", "yaml", "s.toml"]).is_err());
    assert!(Args::try_parse_from(["msgqueue", "--log-format", "xml", "s.toml"]).is_err());
}

#[test]
fn test_version_flag() {
    let err = Args::try_parse_from(["msgqueue", "--version"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
}
