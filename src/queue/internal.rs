//! Internal MessageQueue implementation with priority/type round-robin ordering
//!
//! This module provides the core queue functionality with:
//! - Two-level bucket storage (priority, then type), both served highest first
//! - Per-bucket capacity limits with oldest-first eviction
//! - Repeatable messages that stay in place until their plays run out
//! - A cursor that round-robins across types and within each type
//! - A bounded history of popped messages

use crate::queue::bucket::BucketTable;
use crate::queue::cursor::Cursor;
use crate::queue::error::QueueResult;
use crate::queue::history::History;
use crate::queue::message::{Message, MessageSpec};
use crate::queue::types::QueueStats;

/// Default number of popped messages retained in history
pub const DEFAULT_HISTORY_SIZE: usize = 30;

/// Where the next pop will be taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Selection {
    priority: u32,
    message_type: u32,
    index: usize,
}

/// Deterministic scheduler for prioritized, typed, repeatable messages
///
/// Messages are served by descending priority; a lower priority is only
/// reached once every message above it has been fully consumed. Within a
/// priority the queue cycles through types from highest to lowest, taking one
/// message per visit, and within a type it cycles through the messages so a
/// repeatable message does not starve the ones queued behind it.
///
/// # Example
///
/// ```rust
/// use msgqueue::queue::{MessageQueue, MessageSpec};
///
/// let mut queue = MessageQueue::new(3);
/// queue.insert(MessageSpec::new(5, 2), "a").unwrap();
/// queue.insert(MessageSpec::new(5, 1), "b").unwrap();
/// queue.insert(MessageSpec::new(3, 9), "c").unwrap();
///
/// let order: Vec<&str> = std::iter::from_fn(|| queue.pop().map(|m| m.payload)).collect();
/// assert_eq!(order, vec!["a", "b", "c"]);
/// assert!(!queue.exist());
/// ```
#[derive(Debug, Clone)]
pub struct MessageQueue<P> {
    buckets: BucketTable<P>,
    cursor: Cursor,
    history: History<P>,
}

impl<P> MessageQueue<P> {
    /// Create an empty queue retaining up to `history_size` popped messages
    pub fn new(history_size: usize) -> Self {
        Self {
            buckets: BucketTable::new(),
            cursor: Cursor::default(),
            history: History::new(history_size),
        }
    }

    /// Discard all messages, history and cursor state
    pub fn reset(&mut self, history_size: usize) {
        log::debug!(
            "Resetting message queue (history size {} -> {})",
            self.history.capacity(),
            history_size
        );
        self.buckets.clear();
        self.cursor = Cursor::default();
        self.history = History::new(history_size);
    }

    /// Insert a message described by `spec`
    ///
    /// Fails without touching the queue when the priority, type or play count
    /// is zero. When the spec carries a capacity and the target bucket is
    /// full, the oldest messages of that bucket are evicted first.
    pub fn insert(&mut self, spec: MessageSpec, payload: P) -> QueueResult<()> {
        spec.validate()?;

        let bucket = self
            .buckets
            .priority_or_insert(spec.priority)
            .type_bucket_or_insert(spec.message_type);

        let evicted = bucket.make_room(spec.capacity);
        if evicted > 0 {
            log::debug!(
                "Evicted {} message(s) from bucket (priority {}, type {}) at capacity {}",
                evicted,
                spec.priority,
                spec.message_type,
                spec.capacity
            );
        }

        bucket.push(spec.into_message(payload));
        log::trace!(
            "Inserted message (priority {}, type {}, plays {}), bucket size {}",
            spec.priority,
            spec.message_type,
            spec.play_count,
            bucket.len()
        );
        Ok(())
    }

    /// Whether any message is waiting to be popped
    pub fn exist(&self) -> bool {
        self.buckets.has_messages()
    }

    /// Number of pending messages, regardless of their remaining plays
    pub fn len(&self) -> usize {
        self.buckets
            .iter()
            .flat_map(|priority| priority.type_buckets())
            .map(|bucket| bucket.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        !self.exist()
    }

    /// Maximum number of entries kept in history
    pub fn history_size(&self) -> usize {
        self.history.capacity()
    }

    /// Popped messages still retained, oldest first
    pub fn history(&self) -> &History<P> {
        &self.history
    }

    /// Snapshot of the queue's storage and history
    pub fn stats(&self) -> QueueStats {
        let mut stats = QueueStats {
            history_len: self.history.len(),
            ..QueueStats::default()
        };
        for priority in self.buckets.iter() {
            let mut occupied = false;
            for bucket in priority.candidates() {
                occupied = true;
                stats.type_buckets += 1;
                stats.pending_messages += bucket.len();
                stats.pending_plays += bucket
                    .messages()
                    .map(|message| u64::from(message.remaining_plays))
                    .sum::<u64>();
            }
            if occupied {
                stats.priority_levels += 1;
            }
        }
        stats
    }

    /// Decide which message the next pop returns without changing anything
    fn select(&self) -> Option<Selection> {
        let active = self.buckets.active()?;
        let priority = active.priority();
        let last_type = self.cursor.last_type_at(priority);

        let mut candidates = active.candidates();
        let first = candidates.next()?;
        // Continue below the last popped type, wrapping to the highest
        let chosen = std::iter::once(first)
            .chain(candidates)
            .find(|bucket| bucket.message_type() < last_type)
            .unwrap_or(first);

        let message_type = chosen.message_type();
        let index = self
            .cursor
            .resume_index(priority, message_type, chosen.len());

        log::trace!(
            "Selected priority {}, type {}, index {} (last priority {}, last type {})",
            priority,
            message_type,
            index,
            self.cursor.last_priority(),
            last_type
        );

        Some(Selection {
            priority,
            message_type,
            index,
        })
    }
}

impl<P: Clone> MessageQueue<P> {
    /// Pop the next message, or `None` when the queue is empty
    ///
    /// The returned message carries the plays left after this pop. A message
    /// with plays left stays where it is; one that reached zero is removed.
    /// A copy is appended to history.
    pub fn pop(&mut self) -> Option<Message<P>> {
        let selection = self.select()?;

        let bucket = self
            .buckets
            .get_mut(selection.priority)?
            .type_bucket_mut(selection.message_type)?;
        let message = bucket.get_mut(selection.index)?;

        message.remaining_plays -= 1;
        let exhausted = message.remaining_plays == 0;
        let popped = if exhausted {
            bucket.remove(selection.index)?
        } else {
            message.clone()
        };

        self.cursor.advance(
            selection.priority,
            selection.message_type,
            selection.index,
            exhausted,
        );

        log::debug!(
            "Popped message (priority {}, type {}, index {}), {} play(s) left",
            popped.priority,
            popped.message_type,
            selection.index,
            popped.remaining_plays
        );

        self.history.record(popped.clone());
        Some(popped)
    }
}

impl<P> Default for MessageQueue<P> {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_SIZE)
    }
}
