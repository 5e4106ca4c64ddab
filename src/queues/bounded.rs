//! This implements a blocking bounded Queue for any Number of Producers and
//! Consumers
//!
//! # Example
//! ```
//! use boundq::queues::{bounded::Queue, EnqueueError};
//!
//! // Creates a new Queue with the Capacity for 2 Items
//! let queue = Queue::new(2).unwrap();
//!
//! queue.push(13).unwrap();
//! queue.push(14).unwrap();
//! // The Queue is full now, so a blocking push would wait for a Consumer
//! assert_eq!(Err((15, EnqueueError::WouldBlock)), queue.try_push(15));
//!
//! queue.close();
//!
//! // Already buffered Items can still be dequeued after closing the Queue
//! assert_eq!(Some(13), queue.pop());
//! assert_eq!(Some(14), queue.pop());
//! assert_eq!(None, queue.pop());
//!
//! // but new ones are rejected
//! assert_eq!(Err((16, EnqueueError::Closed)), queue.push(16));
//! ```

use std::{collections::VecDeque, fmt::Debug};

use super::{DequeueError, EnqueueError, InvalidCapacity};
use crate::{
    sync::{unpoison, Condvar, Mutex, MutexGuard},
    trace::{debug, trace},
};

mod iter;
pub use iter::*;

/// Upper bound on the Slots allocated up front, larger Queues grow their
/// Buffer on demand
const PREALLOCATE_LIMIT: usize = 1024;

/// The State shared by all the Users of the Queue, only ever accessed while
/// holding the Lock
struct State<T> {
    /// The buffered Items, the Front is the oldest one
    buffer: VecDeque<T>,
    /// Once set this will never be reset again
    closed: bool,
}

/// A bounded FIFO Queue for multiple Producers and multiple Consumers.
///
/// Producers calling [`push`](Queue::push) block while the Queue is full and
/// Consumers calling [`pop`](Queue::pop) block while it is empty. Calling
/// [`close`](Queue::close) wakes up all of them: blocked Producers fail with
/// [`EnqueueError::Closed`] and Consumers keep draining the remaining Items
/// until they receive `None`.
///
/// The Queue itself is shared between Threads by Reference, either using
/// scoped Threads or by wrapping it in an [`Arc`](std::sync::Arc).
pub struct Queue<T> {
    /// The maximum Number of Items buffered at the same Time
    capacity: usize,
    state: Mutex<State<T>>,
    /// Signaled whenever a Slot was freed up
    not_full: Condvar,
    /// Signaled whenever an Item was added
    not_empty: Condvar,
}

impl<T> Queue<T> {
    /// Creates a new open and empty Queue, that can hold up to `capacity`
    /// Items at the same Time
    ///
    /// # Returns
    /// * `Ok(queue)` if the `capacity` is greater than 0
    /// * `Err(InvalidCapacity)` if the `capacity` is 0, as every push on such
    /// a Queue would block forever
    pub fn new(capacity: usize) -> Result<Self, InvalidCapacity> {
        if capacity == 0 {
            return Err(InvalidCapacity);
        }

        debug!(capacity, "created bounded queue");

        Ok(Self {
            capacity,
            state: Mutex::new(State {
                buffer: VecDeque::with_capacity(capacity.min(PREALLOCATE_LIMIT)),
                closed: false,
            }),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
        })
    }

    fn lock(&self) -> MutexGuard<'_, State<T>> {
        unpoison(self.state.lock())
    }

    /// Enqueues the given Item at the End of the Queue, blocking the current
    /// Thread while the Queue is full.
    ///
    /// # Returns
    /// * `Ok(())` if the Item was enqueued
    /// * `Err((data, EnqueueError::Closed))` if the Queue was closed, either
    /// before the call or while waiting for a free Slot. The Item is not
    /// enqueued and handed back to the caller
    pub fn push(&self, data: T) -> Result<(), (T, EnqueueError)> {
        let mut state = self.lock();
        while state.buffer.len() >= self.capacity && !state.closed {
            state = unpoison(self.not_full.wait(state));
        }

        if state.closed {
            drop(state);
            trace!("rejected push on closed queue");
            return Err((data, EnqueueError::Closed));
        }

        state.buffer.push_back(data);
        drop(state);

        self.not_empty.notify_one();
        Ok(())
    }

    /// Attempts to enqueue the given Item without blocking
    ///
    /// # Returns
    /// * `Ok(())` if the Item was enqueued
    /// * `Err((data, EnqueueError::Closed))` if the Queue has been closed
    /// * `Err((data, EnqueueError::WouldBlock))` if the Queue is currently full
    pub fn try_push(&self, data: T) -> Result<(), (T, EnqueueError)> {
        let mut state = self.lock();
        if state.closed {
            drop(state);
            trace!("rejected push on closed queue");
            return Err((data, EnqueueError::Closed));
        }
        if state.buffer.len() >= self.capacity {
            return Err((data, EnqueueError::WouldBlock));
        }

        state.buffer.push_back(data);
        drop(state);

        self.not_empty.notify_one();
        Ok(())
    }

    /// Dequeues the oldest Item in the Queue, blocking the current Thread
    /// while the Queue is empty.
    ///
    /// Items that were buffered before the Queue was closed are still
    /// returned after closing it, until the Queue is drained.
    ///
    /// # Returns
    /// * `Some(data)` with the oldest Item in the Queue
    /// * `None` if the Queue is empty and has been closed, meaning that no
    /// more Items will ever be dequeued from it
    pub fn pop(&self) -> Option<T> {
        let mut state = self.lock();
        while state.buffer.is_empty() && !state.closed {
            state = unpoison(self.not_empty.wait(state));
        }

        let data = state.buffer.pop_front()?;
        drop(state);

        self.not_full.notify_one();
        Some(data)
    }

    /// Attempts to dequeue the oldest Item in the Queue without blocking
    ///
    /// # Returns
    /// * `Ok(data)` with the oldest Item in the Queue, even if the Queue has
    /// already been closed
    /// * `Err(DequeueError::Closed)` if the Queue is empty and closed
    /// * `Err(DequeueError::WouldBlock)` if the Queue is currently empty
    pub fn try_pop(&self) -> Result<T, DequeueError> {
        let mut state = self.lock();
        let data = match state.buffer.pop_front() {
            Some(d) => d,
            None if state.closed => return Err(DequeueError::Closed),
            None => return Err(DequeueError::WouldBlock),
        };
        drop(state);

        self.not_full.notify_one();
        Ok(data)
    }

    /// Closes the Queue, which can not be undone.
    ///
    /// All Threads blocked in [`push`](Queue::push) return with
    /// [`EnqueueError::Closed`] and all Threads blocked in
    /// [`pop`](Queue::pop) either get one of the remaining Items or `None`.
    /// Buffered Items are never discarded.
    ///
    /// # Returns
    /// Whether this call actually closed the Queue, `false` if it was
    /// already closed before
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn close(&self) -> bool {
        let mut state = self.lock();
        if state.closed {
            return false;
        }
        state.closed = true;
        let buffered = state.buffer.len();
        drop(state);

        self.not_full.notify_all();
        self.not_empty.notify_all();

        debug!(buffered, "closed bounded queue");
        true
    }

    /// Checks if the Queue has been closed
    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// The maximum Number of Items the Queue can hold at the same Time
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The Number of Items currently buffered in the Queue
    ///
    /// # Note
    /// Other Threads may push or pop Items at any Point, so the returned
    /// Value might already be outdated once this returns
    pub fn len(&self) -> usize {
        self.lock().buffer.len()
    }

    /// Checks if the Queue is currently empty
    pub fn is_empty(&self) -> bool {
        self.lock().buffer.is_empty()
    }

    /// Checks if the Queue is currently full
    pub fn is_full(&self) -> bool {
        self.lock().buffer.len() >= self.capacity
    }

    /// Returns a blocking Iterator that pops Items until the Queue is closed
    /// and drained
    ///
    /// # Example
    /// ```
    /// # use boundq::queues::bounded::Queue;
    /// let queue = Queue::new(3).unwrap();
    /// queue.push(1).unwrap();
    /// queue.push(2).unwrap();
    /// queue.close();
    ///
    /// assert_eq!(vec![1, 2], queue.iter().collect::<Vec<_>>());
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns a non-blocking Iterator over the Items that are currently
    /// buffered in the Queue, which stops as soon as the Queue is empty
    pub fn try_iter(&self) -> TryIter<'_, T> {
        TryIter::new(self)
    }
}

impl<T> Debug for Queue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("Queue")
            .field("capacity", &self.capacity)
            .field("len", &state.buffer.len())
            .field("closed", &state.closed)
            .finish()
    }
}


#[cfg(all(test, loom))]
mod loom_tests {
    use super::*;
    use loom::sync::Arc;
    use loom::thread;

    #[test]
    fn push_pop_with_backpressure() {
        loom::model(|| {
            let queue = Arc::new(Queue::new(1).unwrap());

            let q = queue.clone();
            let producer = thread::spawn(move || {
                q.push(1).unwrap();
                q.push(2).unwrap();
            });

            assert_eq!(Some(1), queue.pop());
            assert_eq!(Some(2), queue.pop());

            producer.join().unwrap();
        });
    }

    #[test]
    fn close_wakes_blocked_pop() {
        loom::model(|| {
            let queue = Arc::new(Queue::<u64>::new(1).unwrap());

            let q = queue.clone();
            let consumer = thread::spawn(move || q.pop());

            queue.close();

            assert_eq!(None, consumer.join().unwrap());
        });
    }

    #[test]
    fn close_wakes_blocked_push() {
        loom::model(|| {
            let queue = Arc::new(Queue::new(1).unwrap());
            queue.push(0).unwrap();

            let q = queue.clone();
            let producer = thread::spawn(move || q.push(1));

            queue.close();

            assert_eq!(Err((1, EnqueueError::Closed)), producer.join().unwrap());
            assert_eq!(Some(0), queue.pop());
            assert_eq!(None, queue.pop());
        });
    }

    #[test]
    fn concurrent_push_close_drains() {
        loom::model(|| {
            let queue = Arc::new(Queue::new(2).unwrap());

            let q = queue.clone();
            let producer = thread::spawn(move || q.push(1).is_ok());
            let q = queue.clone();
            let closer = thread::spawn(move || {
                q.close();
            });

            let pushed = producer.join().unwrap();
            closer.join().unwrap();

            let drained: Vec<_> = queue.iter().collect();
            if pushed {
                assert_eq!(vec![1], drained);
            } else {
                assert!(drained.is_empty());
            }
        });
    }
}
