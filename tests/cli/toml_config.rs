//! CLI TOML configuration tests
//!
//! Tests for configuration file loading, value validation and CLI overrides.

use crate::common::write_temp_file;
use clap::Parser;
use msgqueue::app::cli::args::{Args, OutputFormat};
use msgqueue::app::cli::config::CONFIG_KEYS;
use toml::Table;

#[test]
fn test_config_fills_unset_options() {
    let (_dir, path) = write_temp_file(
        "msgqueue.toml",
        r#"
        history-size = 8
        output = "json"
        log-level = "debug"
        log-format = "json"
        no-color = true
        "#,
    );

    let mut args = Args::try_parse_from([
        "msgqueue",
        "--config-file",
        path.to_str().unwrap(),
        "s.toml",
    ])
    .unwrap();
    let loaded = args.load_config().unwrap();

    assert_eq!(loaded.as_deref(), Some(path.as_path()));
    assert_eq!(args.default_history_size, Some(8));
    assert_eq!(args.output_format(), OutputFormat::Json);
    assert_eq!(args.log_level.as_deref(), Some("debug"));
    assert_eq!(args.log_format.as_deref(), Some("json"));
    assert!(!args.use_color());
}

#[test]
fn test_cli_overrides_config() {
    let (_dir, path) = write_temp_file(
        "msgqueue.toml",
        "output = \"json\"\nlog-level = \"error\"\nno-color = true\n",
    );

    let mut args = Args::try_parse_from([
        "msgqueue",
        "-c",
        path.to_str().unwrap(),
        "-o",
        "text",
        "-l",
        "trace",
        "--color",
        "s.toml",
    ])
    .unwrap();
    args.load_config().unwrap();

    assert_eq!(args.output_format(), OutputFormat::Text);
    assert_eq!(args.log_level.as_deref(), Some("trace"));
    assert!(args.use_color());
}

#[test]
fn test_invalid_config_value_names_file() {
    let (_dir, path) = write_temp_file("bad.toml", "history-size = -2\n");

    let mut args = Args {
        config_file: Some(path),
        ..Args::default()
    };
    let message = args.load_config().unwrap_err().to_string();

    assert!(message.contains("bad.toml"));
    assert!(message.contains("history-size must not be negative"));
}

#[test]
fn test_every_documented_key_is_accepted() {
    let mut config = Table::new();
    config.insert("history-size".to_string(), toml::Value::Integer(1));
    config.insert("output".to_string(), toml::Value::String("text".to_string()));
    config.insert("log-level".to_string(), toml::Value::String("warn".to_string()));
    config.insert("log-format".to_string(), toml::Value::String("text".to_string()));
    config.insert("log-file".to_string(), toml::Value::String("none".to_string()));
    config.insert("color".to_string(), toml::Value::Boolean(false));
    config.insert("no-color".to_string(), toml::Value::Boolean(false));
    assert_eq!(config.len(), CONFIG_KEYS.len());

    let mut args = Args::default();
    Args::apply_toml_values(&mut args, &config).unwrap();
    assert_eq!(args.log_file_path(), None);
}
