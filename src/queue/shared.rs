//! Shared handle around a single message queue
//!
//! The queue itself is single-threaded. When several threads need it, the
//! whole queue sits behind one mutex and every operation takes that lock, so
//! callers observe the same ordering as a single owner would.

use crate::queue::error::QueueResult;
use crate::queue::internal::MessageQueue;
use crate::queue::message::{Message, MessageSpec};
use crate::queue::types::QueueStats;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable, thread-safe handle to one [`MessageQueue`]
///
/// # Example
///
/// ```rust
/// use msgqueue::queue::{MessageSpec, SharedMessageQueue};
/// use std::thread;
///
/// let queue = SharedMessageQueue::new(10);
/// let producer = queue.clone();
///
/// thread::spawn(move || {
///     producer.insert(MessageSpec::new(1, 1), "from thread").unwrap();
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(queue.pop().map(|m| m.payload), Some("from thread"));
/// ```
#[derive(Debug)]
pub struct SharedMessageQueue<P> {
    inner: Arc<Mutex<MessageQueue<P>>>,
}

impl<P> Clone for SharedMessageQueue<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P> SharedMessageQueue<P> {
    pub fn new(history_size: usize) -> Self {
        Self::from_queue(MessageQueue::new(history_size))
    }

    pub fn from_queue(queue: MessageQueue<P>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(queue)),
        }
    }

    // Every operation leaves the queue consistent before anything can panic,
    // so a poisoned lock still guards a usable queue.
    fn lock(&self) -> MutexGuard<'_, MessageQueue<P>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access, for compound operations
    pub fn with_queue<R>(&self, f: impl FnOnce(&mut MessageQueue<P>) -> R) -> R {
        f(&mut *self.lock())
    }

    pub fn insert(&self, spec: MessageSpec, payload: P) -> QueueResult<()> {
        self.lock().insert(spec, payload)
    }

    pub fn exist(&self) -> bool {
        self.lock().exist()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn reset(&self, history_size: usize) {
        self.lock().reset(history_size)
    }

    pub fn stats(&self) -> QueueStats {
        self.lock().stats()
    }
}

impl<P: Clone> SharedMessageQueue<P> {
    pub fn pop(&self) -> Option<Message<P>> {
        self.lock().pop()
    }

    /// Copy of the retained history, oldest first
    pub fn history_snapshot(&self) -> Vec<Message<P>> {
        self.lock().history().to_vec()
    }
}
