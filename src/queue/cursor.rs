//! Pop cursor: where the previous pop left off
//!
//! The cursor remembers the priority and type of the last popped message and,
//! for every type visited at the current priority level, the position to
//! resume from. Resume positions are only meaningful while the active
//! priority stays the same, so entering a new priority level forgets them.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub(crate) struct Cursor {
    last_priority: u32,
    last_type: u32,
    /// First index eligible on the next visit of a type bucket
    resume_at: HashMap<u32, usize>,
}

impl Cursor {
    pub(crate) fn last_priority(&self) -> u32 {
        self.last_priority
    }

    /// Last popped type, or 0 when `priority` is not the level popped last
    pub(crate) fn last_type_at(&self, priority: u32) -> u32 {
        if priority == self.last_priority {
            self.last_type
        } else {
            0
        }
    }

    /// Index to dequeue from a bucket of `len` messages
    ///
    /// Continues after the last consumed index and wraps to the front once
    /// the end of the bucket is passed.
    pub(crate) fn resume_index(&self, priority: u32, message_type: u32, len: usize) -> usize {
        if priority != self.last_priority {
            return 0;
        }
        match self.resume_at.get(&message_type) {
            Some(&index) if index < len => index,
            _ => 0,
        }
    }

    /// Record a pop at `index`; `removed` tells whether the message left the bucket
    pub(crate) fn advance(&mut self, priority: u32, message_type: u32, index: usize, removed: bool) {
        if priority != self.last_priority {
            self.resume_at.clear();
        }
        self.last_priority = priority;
        self.last_type = message_type;
        // After a removal the following message slides into `index`
        let next = if removed { index } else { index + 1 };
        self.resume_at.insert(message_type, next);
    }
}
