//! Type definitions for the queue system
//!
//! This module contains the statistics snapshot reported by the queue.

use serde::Serialize;

/// Occupancy statistics for a message queue
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueueStats {
    /// Priority levels holding at least one message
    pub priority_levels: usize,
    /// Non-empty (priority, type) buckets
    pub type_buckets: usize,
    /// Messages waiting in the queue
    pub pending_messages: usize,
    /// Sum of remaining plays over all pending messages
    pub pending_plays: u64,
    /// Entries currently retained in history
    pub history_len: usize,
}
