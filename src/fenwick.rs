use alloc::vec::Vec;
use core::ops::{AddAssign, Sub};

use num_traits::Zero;

use crate::helper::lowest_set_bit;

/// # Fenwick Tree (Binary Indexed Tree)
///
/// Prefix sums over a sequence with O(log n) point updates and O(log n)
/// queries. The tree is stored 1-indexed in a vector of length `n + 1`
/// (slot 0 unused); slot `i` aggregates the `lowest_set_bit(i)` elements
/// ending at position `i`.
///
/// Positions are 1-based throughout. Passing a position outside `1..=n` is a
/// caller error and panics.
///
/// ```
/// use classic_dsa::FenwickTree;
///
/// let mut tree = FenwickTree::new(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
/// assert_eq!(tree.range_sum(1, 10), 55);
/// tree.add(3, 10);
/// assert_eq!(tree.prefix_sum(3), 16);
/// assert_eq!(tree.range_sum(3, 4), 17);
/// ```
#[derive(Debug, Clone)]
pub struct FenwickTree<T> {
    /// 1-indexed tree storage, `tree[0]` is unused
    tree: Vec<T>,
}

impl<T> FenwickTree<T>
where
    T: Copy + Zero + AddAssign + Sub<Output = T>,
{
    /// Builds a tree holding `values`, inserting each one with a point add
    ///
    /// # Arguments
    ///
    /// * `values` - The initial sequence; `values[k]` lands at position `k + 1`
    ///
    /// # Returns
    ///
    /// * `Self` - The Fenwick tree
    pub fn new(values: &[T]) -> Self {
        let mut fenwick = Self {
            tree: vec![T::zero(); values.len() + 1],
        };
        for (k, &value) in values.iter().enumerate() {
            fenwick.add(k + 1, value);
        }
        fenwick
    }

    /// Returns the number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len() - 1
    }

    /// Returns true if the tree holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `delta` to the element at `index`
    ///
    /// # Arguments
    ///
    /// * `index` - A position in `1..=n`
    /// * `delta` - The amount to add
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside `1..=n`.
    pub fn add(&mut self, index: usize, delta: T) {
        let n = self.len();
        assert!(
            (1..=n).contains(&index),
            "index {index} out of bounds (n={n})"
        );

        let mut i = index;
        while i <= n {
            self.tree[i] += delta;
            i += lowest_set_bit(i);
        }
    }

    /// Returns the sum of the first `index` elements
    ///
    /// # Arguments
    ///
    /// * `index` - A position in `0..=n`; `0` yields zero
    ///
    /// # Panics
    ///
    /// Panics if `index > n`.
    pub fn prefix_sum(&self, index: usize) -> T {
        let n = self.len();
        assert!(index <= n, "index {index} out of bounds (n={n})");

        let mut total = T::zero();
        let mut i = index;
        while i > 0 {
            total += self.tree[i];
            i -= lowest_set_bit(i);
        }
        total
    }

    /// Returns the sum of the elements at positions `lo..=hi`
    ///
    /// # Arguments
    ///
    /// * `lo` - First position, in `1..=n`
    /// * `hi` - Last position, in `lo..=n`
    ///
    /// # Panics
    ///
    /// Panics if `lo == 0`, `hi > n` or `lo > hi + 1`. The empty range
    /// `lo == hi + 1` sums to zero.
    pub fn range_sum(&self, lo: usize, hi: usize) -> T {
        assert!(lo >= 1, "range must start at 1 or later, got {lo}");
        assert!(lo - 1 <= hi, "range start {lo} is past range end {hi}");
        self.prefix_sum(hi) - self.prefix_sum(lo - 1)
    }

    /// Returns the element at `index`
    pub fn get(&self, index: usize) -> T {
        self.range_sum(index, index)
    }

    /// Returns the sum of all elements
    pub fn total(&self) -> T {
        self.prefix_sum(self.len())
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
        fn prefix_sums_match_naive(values in proptest::collection::vec(-1000_i64..1000, 0..100)) {
            let tree = FenwickTree::new(&values);
            let mut running = 0;
            prop_assert_eq!(tree.prefix_sum(0), 0);
            for (k, v) in values.iter().enumerate() {
                running += v;
                prop_assert_eq!(tree.prefix_sum(k + 1), running);
            }
            prop_assert_eq!(tree.total(), values.iter().sum::<i64>());
        }

        #[test]
        fn range_sums_after_updates(
            values in proptest::collection::vec(-100_i64..100, 1..60),
            updates in proptest::collection::vec((0_usize..60, -50_i64..50), 0..30),
        ) {
            let mut model = values.clone();
            let mut tree = FenwickTree::new(&values);
            for (pos, delta) in updates {
                let pos = pos % model.len();
                model[pos] += delta;
                tree.add(pos + 1, delta);
            }
            for lo in 1..=model.len() {
                for hi in lo..=model.len() {
                    prop_assert_eq!(tree.range_sum(lo, hi), model[lo - 1..hi].iter().sum::<i64>());
                }
            }
        }
    }
}
