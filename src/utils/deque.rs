use alloc::boxed::Box;

/// A fixed-capacity double-ended ring buffer
///
/// Backs the stack and the queue. Unlike a sliding window it never evicts:
/// a push into a full buffer hands the value back to the caller.
#[derive(Debug, Clone)]
pub struct Deque<T> {
    /// Slots with fixed capacity allocated on the heap
    buf: Box<[Option<T>]>,
    /// The index of the front element in the buffer
    front: usize,
    /// The current number of elements stored in the deque
    len: usize,
}

impl<T> Deque<T> {
    /// Creates a new `Deque` instance with the specified capacity.
    ///
    /// # Arguments
    ///
    /// * `cap` - The capacity of the deque
    ///
    /// # Returns
    ///
    /// * `Self` - The `Deque` instance
    #[inline]
    pub fn new(cap: usize) -> Self {
        assert!(cap > 0, "capacity must be > 0");
        let mut buf = alloc::vec::Vec::with_capacity(cap);
        buf.resize_with(cap, || None);
        Self {
            buf: buf.into_boxed_slice(),
            front: 0,
            len: 0,
        }
    }

    /// Returns true if the deque is empty
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the deque is full
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == self.buf.len()
    }

    /// Returns the current number of elements stored in the deque
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the capacity of the deque
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    const fn slot(&self, i: usize) -> usize {
        (self.front + i) % self.buf.len()
    }

    /// Pushes a new element to the back of the deque
    ///
    /// # Arguments
    ///
    /// * `value` - The value to push to the back of the deque
    ///
    /// # Returns
    ///
    /// * `Result<(), T>` - The rejected value if the deque was full
    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        let idx = self.slot(self.len);
        self.buf[idx] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Pops the element from the back of the deque
    ///
    /// # Returns
    ///
    /// * `Option<T>` - The element at the back of the deque, if it exists
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.len -= 1;
        let idx = self.slot(self.len);
        self.buf[idx].take()
    }

    /// Pops the element from the front of the deque
    ///
    /// # Returns
    ///
    /// * `Option<T>` - The element at the front of the deque, if it exists
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.buf[self.front].take();
        self.front = (self.front + 1) % self.buf.len();
        self.len -= 1;
        value
    }

    /// Returns a reference to the front element of the deque
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a reference to the back element of the deque
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Returns a reference to the element at the specified index from the front
    ///
    /// # Arguments
    ///
    /// * `i` - The index of the element to retrieve
    ///
    /// # Returns
    ///
    /// * `Option<&T>` - The element at position `i`, or `None` if out of bounds
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        if i >= self.len {
            None
        } else {
            self.buf[self.slot(i)].as_ref()
        }
    }

    /// Returns an iterator from front to back
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        (0..self.len).filter_map(move |i| self.buf[self.slot(i)].as_ref())
    }
}
