//! TOML configuration file parsing and loading
//!
//! This module handles loading and parsing of TOML configuration files,
//! including default config file discovery and validation of config values.
//! Values already given on the command line are never overridden.

use crate::app::cli::args::{Args, OutputFormat};
use crate::app::error::{AppError, AppResult};
use crate::core::validation::{
    validate_log_format, validate_log_level, validate_size, ValidationError,
};
use clap::ValueEnum;
use std::path::{Path, PathBuf};

/// Keys understood in the configuration file
pub const CONFIG_KEYS: [&str; 7] = [
    "history-size",
    "output",
    "log-level",
    "log-format",
    "log-file",
    "color",
    "no-color",
];

impl Args {
    /// Default configuration file location, e.g. `~/.config/Msgqueue/msgqueue.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("Msgqueue").join("msgqueue.toml"))
    }

    /// Load the configuration file, if any, and merge it into these arguments
    ///
    /// An explicitly given file must exist; the default location is used
    /// only when present. Returns the path that was loaded.
    pub fn load_config(&mut self) -> AppResult<Option<PathBuf>> {
        let config_path = match &self.config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::Config {
                        message: format!(
                            "The specified configuration file does not exist: {}",
                            path.display()
                        ),
                    });
                }
                Some(path.clone())
            }
            None => Self::default_config_path().filter(|path| path.exists()),
        };

        let Some(path) = config_path else {
            return Ok(None);
        };

        let config = Self::read_config_file(&path)?;
        self.apply_toml_values(&config).map_err(|e| AppError::Config {
            message: format!(
                "Error in configuration file validation {}: {}",
                path.display(),
                e
            ),
        })?;
        Ok(Some(path))
    }

    fn read_config_file(path: &Path) -> AppResult<toml::Table> {
        let contents = std::fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str::<toml::Table>(&contents).map_err(|e| AppError::Config {
            message: format!("Error parsing configuration file {}: {}", path.display(), e),
        })
    }

    /// Apply TOML configuration values to Args
    pub fn apply_toml_values(&mut self, config: &toml::Table) -> Result<(), ValidationError> {
        if let Some(key) = config.keys().find(|key| !CONFIG_KEYS.contains(&key.as_str())) {
            return Err(ValidationError::new(format!(
                "Unknown configuration key '{}'",
                key
            )));
        }

        if let Some(value) = config.get("history-size") {
            let size = value.as_integer().ok_or_else(|| {
                ValidationError::new("history-size must be an integer")
            })?;
            self.default_history_size = Some(validate_size(size, "history-size")?);
        }

        if self.output.is_none() {
            if let Some(output) = Self::string_value(config, "output")? {
                let format = OutputFormat::from_str(output, true).map_err(|_| {
                    ValidationError::new(format!(
                        "Invalid output format '{}', expected text or json",
                        output
                    ))
                })?;
                self.output = Some(format);
            }
        }

        if self.log_level.is_none() {
            if let Some(level) = Self::string_value(config, "log-level")? {
                self.log_level = Some(validate_log_level(level)?);
            }
        }

        if self.log_format.is_none() {
            if let Some(format) = Self::string_value(config, "log-format")? {
                self.log_format = Some(validate_log_format(format)?);
            }
        }

        if self.log_file.is_none() {
            // "none" and "-" stay as given and disable file logging later
            if let Some(log_file) = Self::string_value(config, "log-file")? {
                self.log_file = Some(PathBuf::from(log_file));
            }
        }

        // Command-line color flags win over the file
        if !self.color && !self.no_color {
            if let Some(no_color) = Self::bool_value(config, "no-color")? {
                self.no_color = no_color;
            }
            if let Some(color) = Self::bool_value(config, "color")? {
                if !self.no_color {
                    self.color = color;
                }
            }
        }

        Ok(())
    }

    fn string_value<'a>(
        config: &'a toml::Table,
        key: &str,
    ) -> Result<Option<&'a str>, ValidationError> {
        match config.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(Some)
                .ok_or_else(|| ValidationError::new(format!("{} must be a string", key))),
        }
    }

    fn bool_value(config: &toml::Table, key: &str) -> Result<Option<bool>, ValidationError> {
        match config.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_bool()
                .map(Some)
                .ok_or_else(|| ValidationError::new(format!("{} must be true or false", key))),
        }
    }
}
