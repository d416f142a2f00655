use core::fmt;

use crate::{Error, Result, utils::Deque};

/// # Stack
///
/// A bounded Last-In/First-Out container. Elements are pushed onto and popped
/// from the same end; pushing onto a full stack is an error rather than a
/// reallocation.
///
/// - Push: O(1)
/// - Pop: O(1)
/// - Top: O(1)
///
/// ```
/// use classic_dsa::{Error, Stack};
///
/// let mut stack = Stack::new(2);
/// stack.push(1).unwrap();
/// stack.push(2).unwrap();
/// assert_eq!(stack.push(3), Err(Error::Overflow { capacity: 2 }));
/// assert_eq!(stack.to_string(), "1 | 2 <=>");
/// assert_eq!(stack.pop(), Ok(2));
/// ```
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Deque<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack holding at most `capacity` elements
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Deque::new(capacity),
        }
    }

    /// Pushes `value` on top of the stack
    ///
    /// # Returns
    ///
    /// * `Result<()>` - [`Error::Overflow`] if the stack is full
    pub fn push(&mut self, value: T) -> Result<()> {
        self.items.push_back(value).map_err(|_| Error::Overflow {
            capacity: self.items.capacity(),
        })
    }

    /// Removes and returns the topmost element
    ///
    /// # Returns
    ///
    /// * `Result<T>` - [`Error::Underflow`] if the stack is empty
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop_back().ok_or(Error::Underflow)
    }

    /// Returns the topmost element without removing it
    pub fn top(&self) -> Result<&T> {
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

    /// Returns true if the stack holds no elements
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if a push would overflow
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.items.is_full()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    /// Bottom to top, e.g. `1 | 2 | 3 <=>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str(" <=>")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::all)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_lifo_with_bounds() {
        for n in 1..=5 {
            let mut stack = Stack::new(n);
            assert_eq!(stack.capacity(), n);
            assert!(stack.is_empty());
            assert!(!stack.is_full());
            assert_eq!(stack.top(), Err(Error::Underflow));

            for i in 0..n {
                assert_eq!(stack.len(), i);
                stack.push(i).unwrap();
                assert_eq!(stack.top(), Ok(&i));
                assert_eq!(stack.len(), i + 1);
            }

            assert_eq!(stack.push(n), Err(Error::Overflow { capacity: n }));
            assert!(!stack.is_empty());
            assert!(stack.is_full());

            for i in 0..n {
                assert_eq!(stack.len(), n - i);
                let top = *stack.top().unwrap();
                assert_eq!(stack.pop(), Ok(top));
                assert_eq!(top, n - i - 1);
            }

            assert_eq!(stack.pop(), Err(Error::Underflow));
        }
    }

    #[test]
    fn test_display() {
        let mut stack = Stack::new(4);
        assert_eq!(stack.to_string(), " <=>");

        for v in [1, 2, 3] {
            stack.push(v).unwrap();
        }
        assert_eq!(stack.to_string(), "1 | 2 | 3 <=>");
    }

    #[test]
    #[should_panic(expected = "capacity must be > 0")]
    fn test_zero_capacity() {
        let _ = Stack::<u8>::new(0);
    }
}
