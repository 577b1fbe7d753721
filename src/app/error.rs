//! Application error types

use crate::core::error_handling::ContextualError;
use crate::core::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Config { message: String },

    #[error("{message}")]
    Scenario { message: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logging setup failed: {message}")]
    Logging { message: String },

    #[error("Failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

impl ContextualError for AppError {
    fn is_user_actionable(&self) -> bool {
        matches!(
            self,
            AppError::Config { .. } | AppError::Scenario { .. } | AppError::Validation(_)
        )
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            AppError::Config { message } | AppError::Scenario { message } => Some(message.as_str()),
            AppError::Validation(error) => Some(error.message()),
            _ => None,
        }
    }
}

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;
