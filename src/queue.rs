use core::fmt;

use crate::{Error, Result, utils::Deque};

/// # Queue
///
/// A bounded First-In/First-Out container over a ring buffer. The least
/// recently enqueued element is the first one dequeued.
///
/// - Enqueue: O(1)
/// - Dequeue: O(1)
///
/// ```
/// use classic_dsa::Queue;
///
/// let mut queue = Queue::new(3);
/// for v in [1, 2, 3] {
///     queue.enqueue(v).unwrap();
/// }
/// assert_eq!(queue.to_string(), "-> _ 3 | 2 | 1 ->");
/// assert_eq!(queue.dequeue(), Ok(1));
/// assert_eq!(queue.rear(), Ok(&3));
/// ```
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: Deque<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue holding at most `capacity` elements
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Deque::new(capacity),
        }
    }

    /// Adds `value` at the rear
    ///
    /// # Returns
    ///
    /// * `Result<()>` - [`Error::Overflow`] if the queue is full
    pub fn enqueue(&mut self, value: T) -> Result<()> {
        self.items.push_back(value).map_err(|_| Error::Overflow {
            capacity: self.items.capacity(),
        })
    }

    /// Removes and returns the element at the front
    ///
    /// # Returns
    ///
    /// * `Result<T>` - [`Error::Underflow`] if the queue is empty
    pub fn dequeue(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(Error::Underflow)
    }

    /// Returns the oldest element
    pub fn front(&self) -> Result<&T> {
        self.items.front().ok_or(Error::Underflow)
    }

    /// Returns the newest element
    pub fn rear(&self) -> Result<&T> {
        self.items.back().ok_or(Error::Underflow)
    }

    /// Returns the number of elements
    #[inline]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the maximum number of elements
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Returns true if the queue holds no elements
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if an enqueue would overflow
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.items.is_full()
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    /// Newest first, e.g. `-> _ 3 | 2 | 1 ->`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("-> _ ")?;
        for (i, item) in self.items.iter().rev().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str(" ->")
    }
}
