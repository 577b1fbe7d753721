//! Generic error handling utilities
//!
//! Provides unified error reporting that can work across different error types
//! while keeping user-facing output short.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// When `is_user_actionable()` returns `true`, `user_message()` should return
/// `Some(message)` with a helpful, actionable message. When it returns
/// `false`, `user_message()` should return `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if this error carries a specific message the user can act on
    ///
    /// Examples of user-actionable errors:
    /// - Invalid scenario steps or queue arguments
    /// - Configuration errors with clear fixes
    ///
    /// Examples of system errors:
    /// - IO failures
    /// - Logger startup failures
    fn is_user_actionable(&self) -> bool;

    /// Returns the specific user message if this is a user-actionable error
    fn user_message(&self) -> Option<&str>;
}

/// Log errors with appropriate detail level based on error specificity
///
/// User-actionable errors log their own message; system errors log the
/// operation context. Full details are always available at debug level.
///
/// # Examples
/// ```rust,no_run
/// # use msgqueue::core::error_handling::log_error_with_context;
/// # use msgqueue::app::error::AppError;
/// let error = AppError::Scenario {
///     message: "step 3: unknown op 'peek'".to_string(),
/// };
/// log_error_with_context(&error, "Scenario loading");
/// // Logs: "FATAL: step 3: unknown op 'peek'"
/// ```
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => log::error!("FATAL: {}", user_msg),
        _ => log::error!("FATAL: {}", operation_context),
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}

/// Message to print for `error` when logging may be switched off
pub fn user_facing_message<E: ContextualError + std::fmt::Display>(
    error: &E,
    operation_context: &str,
) -> String {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => user_msg.to_string(),
        _ => format!("{}: {}", operation_context, error),
    }
}
