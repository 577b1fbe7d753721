//! Core CLI arguments structure and basic functionality
//!
//! This module contains the Args struct definition and helpers resolving the
//! effective settings. Configuration file loading lives in `config`.

use crate::core::logging::{LOG_FORMATS, LOG_LEVELS};
use clap::{ArgAction, Parser, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// How the replay report is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

// Command-line options
//
// Every option except the scenario path may also come from the TOML
// configuration file; values given on the command line win.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "msgqueue")]
#[command(about = "Replay priority/type message queue scenarios")]
#[command(version, long_version = crate::core::version::long_version())]
pub struct Args {
    /// Scenario file (TOML) to replay
    #[arg(value_name = "SCENARIO")]
    pub scenario: PathBuf,

    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Number of popped messages kept in history (overrides the scenario)
    #[arg(short = 'H', long = "history-size", value_name = "COUNT")]
    pub history_size: Option<usize>,

    /// Report format
    #[arg(short = 'o', long = "output", value_name = "FORMAT", value_enum)]
    pub output: Option<OutputFormat>,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = LOG_LEVELS)]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", value_parser = LOG_FORMATS)]
    pub log_format: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Force colored output
    #[arg(long = "color", action = ArgAction::SetTrue, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    pub no_color: bool,

    /// History size from the configuration file, used when neither the
    /// command line nor the scenario sets one
    #[arg(skip)]
    pub default_history_size: Option<usize>,
}

impl Args {
    /// Effective report format
    pub fn output_format(&self) -> OutputFormat {
        self.output.unwrap_or_default()
    }

    /// Log file to write, with the magic value `none` disabling file logging
    pub fn log_file_path(&self) -> Option<&str> {
        self.log_file
            .as_deref()
            .and_then(|path| path.to_str())
            .filter(|path| !path.eq_ignore_ascii_case("none") && *path != "-")
    }

    /// Whether output should be colored
    ///
    /// `--no-color` wins over `--color`; without either flag color follows
    /// whether stdout is a terminal.
    pub fn use_color(&self) -> bool {
        if self.no_color {
            false
        } else if self.color {
            true
        } else {
            std::io::stdout().is_terminal()
        }
    }
}
