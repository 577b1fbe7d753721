//! Scenario files replayed against a message queue
//!
//! A scenario is a TOML document with an optional `history-size` and a list
//! of `[[step]]` tables, each naming an operation in its `op` key:
//!
//! ```toml
//! history-size = 10
//!
//! [[step]]
//! op = "insert"
//! priority = 5
//! type = 2
//! plays = 2
//! payload = "hello"
//!
//! [[step]]
//! op = "drain"
//! ```
//!
//! Numbers are kept as signed integers here so that out-of-range values are
//! reported as validation errors rather than TOML decoding failures.

use crate::app::error::{AppError, AppResult};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Scenario {
    /// History size requested by the scenario itself
    #[serde(default)]
    pub history_size: Option<i64>,

    #[serde(rename = "step", default)]
    pub steps: Vec<Step>,
}

/// One queue operation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case", deny_unknown_fields)]
pub enum Step {
    Insert {
        priority: i64,
        #[serde(rename = "type")]
        message_type: i64,
        #[serde(default = "default_plays")]
        plays: i64,
        #[serde(default)]
        capacity: i64,
        #[serde(default)]
        payload: serde_json::Value,
    },
    Pop {
        #[serde(default = "default_count")]
        count: i64,
    },
    /// Pop until the queue is empty
    Drain,
    Exist,
    History,
    Stats,
    Reset {
        #[serde(rename = "history-size", default)]
        history_size: Option<i64>,
    },
}

fn default_plays() -> i64 {
    1
}

fn default_count() -> i64 {
    1
}

impl Step {
    /// Operation name as written in the scenario
    pub fn op(&self) -> &'static str {
        match self {
            Step::Insert { .. } => "insert",
            Step::Pop { .. } => "pop",
            Step::Drain => "drain",
            Step::Exist => "exist",
            Step::History => "history",
            Step::Stats => "stats",
            Step::Reset { .. } => "reset",
        }
    }
}

impl Scenario {
    /// Parse a scenario from TOML text
    pub fn from_toml(source: &str) -> AppResult<Self> {
        Self::parse(source, None)
    }

    /// Read and parse a scenario file
    pub fn load(path: &Path) -> AppResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.display().to_string(),
            source,
        })?;
        log::debug!("Loaded scenario {} ({} bytes)", path.display(), source.len());
        Self::parse(&source, Some(path))
    }

    fn parse(source: &str, origin: Option<&Path>) -> AppResult<Self> {
        toml::from_str(source).map_err(|e| {
            let message = match origin {
                Some(path) => format!("Invalid scenario {}: {}", path.display(), e),
                None => format!("Invalid scenario: {}", e),
            };
            AppError::Scenario { message }
        })
    }
}
