//! Queue Error Types

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    #[error("Invalid argument: {field} must be greater than 0")]
    InvalidArgument { field: &'static str },
}

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;
