//! Public API for the queue system
//!
//! External modules should import from here rather than directly from internal modules.
//! See module documentation for complete usage examples and the pop ordering rules.

// Core queue components
pub use crate::queue::internal::{MessageQueue, DEFAULT_HISTORY_SIZE};
pub use crate::queue::shared::SharedMessageQueue;

// Message types and insertion parameters
pub use crate::queue::message::{Message, MessageSpec};

// History view
pub use crate::queue::history::History;

// Error handling
pub use crate::queue::error::{QueueError, QueueResult};

// Statistics
pub use crate::queue::types::QueueStats;
