//! Priority/Type Message Queue Component
//!
//! A deterministic scheduler for prioritized, typed, repeatable messages with
//! a bounded history of what was popped.
//!
//! # Overview
//!
//! - **Priority first**: a lower priority is only served once every message
//!   above it has been fully consumed
//! - **Type round robin**: within a priority, one message per type per visit,
//!   moving from the highest type down and wrapping back to the top
//! - **Within-type resumption**: repeated visits to a type continue after the
//!   message consumed last instead of always taking the head
//! - **Repeat counts**: a message is returned `play_count` times before it is
//!   discarded
//! - **Capacity limits**: optional per-(priority, type) bound, evicting the
//!   oldest messages
//! - **History**: the last `history_size` popped messages are kept for
//!   inspection
//!
//! # Architecture
//!
//! ```text
//!  insert(spec, payload)                                pop()
//!        │                                                ▲
//!        ▼                                                │
//! ┌──────────────────────────────────────────────────┐    │
//! │ priority 9 │ type 4: [m1, m2]   type 2: [m3]     │────┤ active level
//! ├──────────────────────────────────────────────────┤    │
//! │ priority 5 │ type 7: [m4]                        │    │ (after 9 drains)
//! ├──────────────────────────────────────────────────┤    │
//! │ priority 1 │ type 3: [] (skipped)  type 1: [m5]  │    │
//! └──────────────────────────────────────────────────┘    │
//!   cursor: last priority, last type, resume index per type
//!   history: [.., .., ..] (oldest evicted first)
//! ```
//!
//! With the layout above pops return m1, m3, m2, m4, m5 (all single-play).
//!
//! # Example Usage
//!
//! ```rust
//! use msgqueue::queue::{MessageQueue, MessageSpec};
//!
//! let mut queue = MessageQueue::new(3);
//! queue.insert(MessageSpec::new(1, 1).with_play_count(2), "A").unwrap();
//! queue.insert(MessageSpec::new(1, 1).with_play_count(2), "B").unwrap();
//!
//! let order: Vec<&str> = std::iter::from_fn(|| queue.pop().map(|m| m.payload)).collect();
//! assert_eq!(order, vec!["A", "B", "A", "B"]);
//!
//! let history: Vec<&str> = queue.history().iter().map(|m| m.payload).collect();
//! assert_eq!(history, vec!["B", "A", "B"]);
//! ```

pub mod api;
mod bucket;
mod cursor;
mod error;
mod history;
mod internal;
mod message;
mod shared;
mod types;

pub use error::{QueueError, QueueResult};
pub use history::History;
pub use internal::{MessageQueue, DEFAULT_HISTORY_SIZE};
pub use message::{Message, MessageSpec};
pub use shared::SharedMessageQueue;
pub use types::QueueStats;

#[cfg(test)]
mod tests;
