//! Bounded history of popped messages
//!
//! Keeps the last `capacity` messages in pop order. When full, recording a
//! new message evicts the oldest one. A capacity of zero records nothing.

use crate::queue::message::Message;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct History<P> {
    entries: VecDeque<Message<P>>,
    capacity: usize,
}

impl<P> History<P> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries from oldest to newest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Message<P>> + ExactSizeIterator {
        self.entries.iter()
    }

    /// The most recently popped message still retained
    pub fn latest(&self) -> Option<&Message<P>> {
        self.entries.back()
    }

    pub(crate) fn record(&mut self, message: Message<P>) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(message);
    }
}

impl<P: Clone> History<P> {
    /// Owned copy of the entries, oldest first
    pub fn to_vec(&self) -> Vec<Message<P>> {
        self.entries.iter().cloned().collect()
    }
}

impl<'a, P> IntoIterator for &'a History<P> {
    type Item = &'a Message<P>;
    type IntoIter = std::collections::vec_deque::Iter<'a, Message<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
