//! Message Types for the Priority/Type Message Queue
//!
//! This module defines the message returned by the queue and the
//! [`MessageSpec`] value object describing how a new message is inserted.

use crate::queue::error::{QueueError, QueueResult};
use serde::Serialize;

/// A message held by (or popped from) the queue
///
/// `remaining_plays` counts how many more times the message will be returned
/// by [`pop`](crate::queue::MessageQueue::pop). Messages handed out by the
/// queue are copies: changing one never affects the queue.
///
/// # Example
///
/// ```rust
/// use msgqueue::queue::{MessageQueue, MessageSpec};
///
/// let mut queue = MessageQueue::new(10);
/// queue.insert(MessageSpec::new(5, 1).with_play_count(2), "banner").unwrap();
///
/// let first = queue.pop().unwrap();
/// assert_eq!(first.payload, "banner");
/// assert_eq!(first.remaining_plays, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message<P> {
    /// Priority level, higher is served first
    pub priority: u32,
    /// Message type within the priority level, higher is served first
    pub message_type: u32,
    /// Plays left after this one
    pub remaining_plays: u32,
    /// Application-defined payload, never inspected by the queue
    pub payload: P,
}

/// Insertion parameters for a single message
///
/// Priority and type are required. The play count defaults to 1 and the
/// capacity defaults to 0, meaning the (priority, type) bucket is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageSpec {
    pub priority: u32,
    pub message_type: u32,
    pub play_count: u32,
    pub capacity: usize,
}

impl MessageSpec {
    pub fn new(priority: u32, message_type: u32) -> Self {
        Self {
            priority,
            message_type,
            play_count: 1,
            capacity: 0,
        }
    }

    /// Number of times the message is popped before it is discarded
    pub fn with_play_count(mut self, play_count: u32) -> Self {
        self.play_count = play_count;
        self
    }

    /// Maximum number of messages kept in the (priority, type) bucket
    ///
    /// When the bucket is full the oldest messages are evicted to make room.
    /// Zero disables the limit.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Reject zero priority, type or play count
    pub fn validate(&self) -> QueueResult<()> {
        if self.priority == 0 {
            return Err(QueueError::InvalidArgument { field: "priority" });
        }
        if self.message_type == 0 {
            return Err(QueueError::InvalidArgument {
                field: "message_type",
            });
        }
        if self.play_count == 0 {
            return Err(QueueError::InvalidArgument {
                field: "play_count",
            });
        }
        Ok(())
    }

    pub(crate) fn into_message<P>(self, payload: P) -> Message<P> {
        Message {
            priority: self.priority,
            message_type: self.message_type,
            remaining_plays: self.play_count,
            payload,
        }
    }
}
