use std::{fmt::Debug, iter::FusedIterator};

use super::Queue;

/// A blocking Iterator over the Items of a [`Queue`], created using
/// [`Queue::iter`].
///
/// Every call to `next` behaves like [`Queue::pop`], so the Iterator only
/// ends once the Queue has been closed and drained.
pub struct Iter<'queue, T> {
    queue: &'queue Queue<T>,
    done: bool,
}

impl<'queue, T> Iter<'queue, T> {
    pub(super) fn new(queue: &'queue Queue<T>) -> Self {
        Self { queue, done: false }
    }
}

impl<'queue, T> Iterator for Iter<'queue, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let item = self.queue.pop();
        self.done = item.is_none();
        item
    }
}

impl<'queue, T> FusedIterator for Iter<'queue, T> {}

impl<'queue, T> Debug for Iter<'queue, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Iter ()")
    }
}

impl<'queue, T> IntoIterator for &'queue Queue<T> {
    type Item = T;
    type IntoIter = Iter<'queue, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A non-blocking Iterator over the currently buffered Items of a
/// [`Queue`], created using [`Queue::try_iter`].
///
/// The Iterator ends as soon as the Queue is empty, regardless of whether
/// it has been closed or not.
pub struct TryIter<'queue, T> {
    queue: &'queue Queue<T>,
    done: bool,
}

impl<'queue, T> TryIter<'queue, T> {
    pub(super) fn new(queue: &'queue Queue<T>) -> Self {
        Self { queue, done: false }
    }
}

impl<'queue, T> Iterator for TryIter<'queue, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.queue.try_pop() {
            Ok(item) => Some(item),
            Err(_) => {
                self.done = true;
                None
            }
        }
    }
}

impl<'queue, T> FusedIterator for TryIter<'queue, T> {}

impl<'queue, T> Debug for TryIter<'queue, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TryIter ()")
    }
}

#[cfg(all(test, not(loom)))]
mod tests {
    use super::*;

    #[test]
    fn iter_drains_closed_queue() {
        let queue = Queue::new(4).unwrap();
        queue.push(1).unwrap();
        queue.push(2).unwrap();
        queue.close();

        let mut iter = queue.iter();
        assert_eq!(Some(1), iter.next());
        assert_eq!(Some(2), iter.next());
        assert_eq!(None, iter.next());
        assert_eq!(None, iter.next());
    }
    #[test]
    fn for_loop_over_queue() {
        let queue = Queue::new(3).unwrap();
        for i in 0..3 {
            queue.push(i).unwrap();
        }
        queue.close();

        let mut expected = 0;
        for item in &queue {
            assert_eq!(expected, item);
            expected += 1;
        }
        assert_eq!(3, expected);
    }

    #[test]
    fn try_iter_stops_when_empty() {
        let queue = Queue::new(4).unwrap();
        queue.push(1).unwrap();
        queue.push(2).unwrap();

        let mut iter = queue.try_iter();
        assert_eq!(Some(1), iter.next());
        assert_eq!(Some(2), iter.next());
        assert_eq!(None, iter.next());

        queue.push(3).unwrap();
        assert_eq!(None, iter.next());

        assert!(!queue.is_closed());
        assert_eq!(vec![3], queue.try_iter().collect::<Vec<_>>());
    }
}
