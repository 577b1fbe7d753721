//! Validation utilities for CLI arguments, configuration and scenario values

use crate::core::error_handling::ContextualError;
use crate::core::logging::{LOG_FORMATS, LOG_LEVELS};

/// A value that failed validation, with a message the user can act on
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl ContextualError for ValidationError {
    fn is_user_actionable(&self) -> bool {
        true
    }

    fn user_message(&self) -> Option<&str> {
        Some(&self.message)
    }
}

/// Validate a non-negative size such as a history size
pub fn validate_size(value: i64, field: &str) -> Result<usize, ValidationError> {
    usize::try_from(value)
        .map_err(|_| ValidationError::new(format!("{} must not be negative (got {})", field, value)))
}

/// Narrow an integer to `u32`, rejecting negatives and values that do not fit
///
/// Zero is accepted here; whether zero is meaningful is up to the caller.
pub fn validate_u32(value: i64, field: &str) -> Result<u32, ValidationError> {
    if value < 0 {
        return Err(ValidationError::new(format!(
            "{} must not be negative (got {})",
            field, value
        )));
    }
    u32::try_from(value).map_err(|_| {
        ValidationError::new(format!(
            "{} is too large (got {}, maximum {})",
            field,
            value,
            u32::MAX
        ))
    })
}

/// Validate a log level name
pub fn validate_log_level(level: &str) -> Result<String, ValidationError> {
    let lowered = level.to_lowercase();
    if LOG_LEVELS.contains(&lowered.as_str()) {
        Ok(lowered)
    } else {
        Err(ValidationError::new(format!(
            "Invalid log level '{}', expected one of: {}",
            level,
            LOG_LEVELS.join(", ")
        )))
    }
}

/// Validate a log format name
pub fn validate_log_format(format: &str) -> Result<String, ValidationError> {
    let lowered = format.to_lowercase();
    if LOG_FORMATS.contains(&lowered.as_str()) {
        Ok(lowered)
    } else {
        Err(ValidationError::new(format!(
            "Invalid log format '{}', expected one of: {}",
            format,
            LOG_FORMATS.join(", ")
        )))
    }
}
