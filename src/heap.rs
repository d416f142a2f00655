use alloc::vec::Vec;
use core::{fmt, marker::PhantomData};

use crate::{
    Error, Result,
    helper::{left_child, parent, right_child},
    traits::{HeapOrder, MaxOrder, MinOrder},
};

/// A binary heap whose root is the smallest element
pub type MinHeap<T> = BinaryHeap<T, MinOrder>;

/// A binary heap whose root is the largest element
pub type MaxHeap<T> = BinaryHeap<T, MaxOrder>;

/// # Binary Heap
///
/// A complete binary tree stored densely in a vector. The ordering direction is
/// chosen by the `O` policy, so [`MinHeap`] and [`MaxHeap`] share every line of
/// sift logic.
///
/// - Peek: O(1)
/// - Insert: O(log n)
/// - Extract: O(log n)
/// - Build by sift-down: O(n), build by sift-up: O(n log n)
///
/// ```
/// use classic_dsa::MinHeap;
///
/// let mut heap = MinHeap::new(vec![9, 1, 5], true);
/// heap.insert(3);
/// assert_eq!(heap.extract_top(), Ok(1));
/// assert_eq!(heap.extract_top(), Ok(3));
/// assert_eq!(heap.peek_top(), Ok(&5));
/// ```
pub struct BinaryHeap<T, O> {
    data: Vec<T>,
    _order: PhantomData<O>,
}

impl<T, O> BinaryHeap<T, O>
where
    O: HeapOrder<T>,
{
    /// Builds a heap from `values`
    ///
    /// # Arguments
    ///
    /// * `values` - The initial elements, in any order
    /// * `build_down` - Sift every index down from the last to the root when true,
    ///   otherwise sift every index up from left to right
    ///
    /// # Returns
    ///
    /// * `Self` - A heap holding all of `values`
    pub fn new(values: Vec<T>, build_down: bool) -> Self {
        let mut heap = Self {
            data: values,
            _order: PhantomData,
        };

        let n = heap.data.len();
        if build_down {
            for i in (0..n).rev() {
                heap.sift_down(i);
            }
        } else {
            for i in 0..n {
                heap.sift_up(i);
            }
        }

        debug_assert!(heap.is_heap(), "heap order violated after build");
        heap
    }

    /// Creates an empty heap
    pub const fn empty() -> Self {
        Self {
            data: Vec::new(),
            _order: PhantomData,
        }
    }

    /// Returns the number of elements in the heap
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the elements in storage order
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Inserts `value`, restoring the heap order by sifting it up
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
        debug_assert!(self.is_heap(), "heap order violated after insert");
    }

    /// Removes and returns the root of the heap
    ///
    /// # Returns
    ///
    /// * `Result<T>` - The top element, or [`Error::Empty`] if the heap is empty
    pub fn extract_top(&mut self) -> Result<T> {
        if self.data.is_empty() {
            return Err(Error::Empty);
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let top = self.data.pop().ok_or(Error::Empty)?;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        debug_assert!(self.is_heap(), "heap order violated after extract");
        Ok(top)
    }

    /// Returns the root of the heap without removing it
    ///
    /// # Returns
    ///
    /// * `Result<&T>` - The top element, or [`Error::Empty`] if the heap is empty
    pub fn peek_top(&self) -> Result<&T> {
        self.data.first().ok_or(Error::Empty)
    }

    /// Drains the heap, returning its elements in extraction order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(top) = self.extract_top() {
            sorted.push(top);
        }
        sorted
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = parent(i);
            if !O::precedes(&self.data[i], &self.data[p]) {
                break;
            }
            self.data.swap(p, i);
            i = p;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.data.len();
        loop {
            let l = left_child(i);
            if l >= n {
                break;
            }
            let r = right_child(i);

            let mut best = i;
            if O::precedes(&self.data[l], &self.data[best]) {
                best = l;
            }
            if r < n && O::precedes(&self.data[r], &self.data[best]) {
                best = r;
            }
            if best == i {
                break;
            }
            self.data.swap(i, best);
            i = best;
        }
    }

    fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|i| !O::precedes(&self.data[i], &self.data[parent(i)]))
    }
}

impl<T, O> Default for BinaryHeap<T, O>
where
    O: HeapOrder<T>,
{
    fn default() -> Self {
        Self::empty()
    }
}

impl<T, O> FromIterator<T> for BinaryHeap<T, O>
where
    O: HeapOrder<T>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect(), true)
    }
}

impl<T: Clone, O> Clone for BinaryHeap<T, O> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            _order: PhantomData,
        }
    }
}

impl<T: fmt::Debug, O> fmt::Debug for BinaryHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap").field("data", &self.data).finish()
    }
}

impl<T: fmt::Display, O> fmt::Display for BinaryHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}


#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::all)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn min_heap_drains_ascending(
            values in proptest::collection::vec(-50_i32..50, 0..64),
            build_down in any::<bool>(),
        ) {
            let mut expected = values.clone();
            expected.sort();
            prop_assert_eq!(MinHeap::new(values, build_down).into_sorted_vec(), expected);
        }

        #[test]
        fn max_heap_drains_descending(
            values in proptest::collection::vec(-50_i32..50, 0..64),
            build_down in any::<bool>(),
        ) {
            let mut expected = values.clone();
            expected.sort_by(|a, b| b.cmp(a));
            prop_assert_eq!(MaxHeap::new(values, build_down).into_sorted_vec(), expected);
        }

        #[test]
        fn interleaved_insert_extract_keeps_order(
            ops in proptest::collection::vec(prop::option::of(0_i32..100), 0..80),
        ) {
            let mut heap = MinHeap::empty();
            let mut model: Vec<i32> = vec![];
            for op in ops {
                match op {
                    Some(v) => {
                        heap.insert(v);
                        model.push(v);
                    }
                    None => {
                        model.sort_by(|a, b| b.cmp(a));
                        let expected = model.pop().ok_or(Error::Empty);
                        prop_assert_eq!(heap.extract_top(), expected);
                    }
                }
            }
            prop_assert_eq!(heap.len(), model.len());
        }
    }
}
