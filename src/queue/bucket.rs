//! Bucket storage for the message queue
//!
//! Messages are grouped first by priority, then by type. Both levels are
//! keyed by `Reverse<u32>` so that iteration yields the highest identifier
//! first. Buckets are created lazily on insert and are never removed while
//! the queue lives; an empty type bucket is simply skipped by selection.

use crate::queue::message::Message;
use std::cmp::Reverse;
use std::collections::{BTreeMap, VecDeque};

/// Messages of one type within one priority level, in FIFO order
#[derive(Debug, Clone)]
pub(crate) struct TypeBucket<P> {
    message_type: u32,
    messages: VecDeque<Message<P>>,
}

impl<P> TypeBucket<P> {
    fn new(message_type: u32) -> Self {
        Self {
            message_type,
            messages: VecDeque::new(),
        }
    }

    pub(crate) fn message_type(&self) -> u32 {
        self.message_type
    }

    pub(crate) fn len(&self) -> usize {
        self.messages.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub(crate) fn messages(&self) -> impl Iterator<Item = &Message<P>> {
        self.messages.iter()
    }

    /// Drop the oldest messages until one more fits under `capacity`
    ///
    /// Returns the number of evicted messages. A zero capacity never evicts.
    pub(crate) fn make_room(&mut self, capacity: usize) -> usize {
        if capacity == 0 || self.messages.len() < capacity {
            return 0;
        }
        let evict = self.messages.len() - capacity + 1;
        self.messages.drain(..evict);
        evict
    }

    pub(crate) fn push(&mut self, message: Message<P>) {
        self.messages.push_back(message);
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Message<P>> {
        self.messages.get_mut(index)
    }

    pub(crate) fn remove(&mut self, index: usize) -> Option<Message<P>> {
        self.messages.remove(index)
    }
}

/// All type buckets sharing one priority level
#[derive(Debug, Clone)]
pub(crate) struct PriorityBucket<P> {
    priority: u32,
    types: BTreeMap<Reverse<u32>, TypeBucket<P>>,
}

impl<P> PriorityBucket<P> {
    fn new(priority: u32) -> Self {
        Self {
            priority,
            types: BTreeMap::new(),
        }
    }

    pub(crate) fn priority(&self) -> u32 {
        self.priority
    }

    pub(crate) fn has_messages(&self) -> bool {
        self.types.values().any(|bucket| !bucket.is_empty())
    }

    /// Non-empty type buckets, highest type first
    pub(crate) fn candidates(&self) -> impl Iterator<Item = &TypeBucket<P>> {
        self.types.values().filter(|bucket| !bucket.is_empty())
    }

    pub(crate) fn type_bucket_mut(&mut self, message_type: u32) -> Option<&mut TypeBucket<P>> {
        self.types.get_mut(&Reverse(message_type))
    }

    /// Find the type bucket, creating it in sorted position when missing
    pub(crate) fn type_bucket_or_insert(&mut self, message_type: u32) -> &mut TypeBucket<P> {
        self.types
            .entry(Reverse(message_type))
            .or_insert_with(|| TypeBucket::new(message_type))
    }

    pub(crate) fn type_buckets(&self) -> impl Iterator<Item = &TypeBucket<P>> {
        self.types.values()
    }
}

/// Two-level storage: priority buckets holding type buckets
#[derive(Debug, Clone)]
pub(crate) struct BucketTable<P> {
    priorities: BTreeMap<Reverse<u32>, PriorityBucket<P>>,
}

impl<P> BucketTable<P> {
    pub(crate) fn new() -> Self {
        Self {
            priorities: BTreeMap::new(),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.priorities.clear();
    }

    /// Priority buckets, highest priority first
    pub(crate) fn iter(&self) -> impl Iterator<Item = &PriorityBucket<P>> {
        self.priorities.values()
    }

    /// The highest priority bucket that still holds at least one message
    pub(crate) fn active(&self) -> Option<&PriorityBucket<P>> {
        self.iter().find(|bucket| bucket.has_messages())
    }

    pub(crate) fn get_mut(&mut self, priority: u32) -> Option<&mut PriorityBucket<P>> {
        self.priorities.get_mut(&Reverse(priority))
    }

    pub(crate) fn priority_or_insert(&mut self, priority: u32) -> &mut PriorityBucket<P> {
        self.priorities
            .entry(Reverse(priority))
            .or_insert_with(|| PriorityBucket::new(priority))
    }

    pub(crate) fn has_messages(&self) -> bool {
        self.iter().any(|bucket| bucket.has_messages())
    }
}
