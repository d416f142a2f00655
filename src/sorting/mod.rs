//! Comparison and distribution sorts.
//!
//! In-place sorts take `&mut [T]`; the others return a new vector. Randomized
//! sorts draw pivots from a caller-supplied [`rand::Rng`].

mod bubble_sort;
pub use bubble_sort::bubble_sort;

mod insertion_sort;
pub use insertion_sort::insertion_sort;
pub(crate) use insertion_sort::insertion_sort_by;

mod selection_sort;
pub use selection_sort::selection_sort;

mod merge_sort;
pub use merge_sort::{merge, merge_sort};

mod quick_sort;
pub use quick_sort::{partition, quick_sort};

mod heap_sort;
pub use heap_sort::heap_sort;

mod counting_sort;
pub use counting_sort::counting_sort;

mod bucket_sort;
pub use bucket_sort::bucket_sort;

#[cfg(test)]
pub(crate) mod fixtures {
    use alloc::vec::Vec;
    use rand::{SeedableRng, rngs::SmallRng, seq::SliceRandom};

    /// `1..=9`
    pub(crate) fn odd() -> Vec<i32> {
        (1..=9).collect()
    }

    /// `1..=10`
    pub(crate) fn even() -> Vec<i32> {
        (1..=10).collect()
    }

    pub(crate) fn reversed<T: Clone>(values: &[T]) -> Vec<T> {
        values.iter().rev().cloned().collect()
    }

    pub(crate) fn shuffled<T: Clone>(values: &[T], seed: u64) -> Vec<T> {
        let mut out = values.to_vec();
        out.shuffle(&mut SmallRng::seed_from_u64(seed));
        out
    }

    /// Sorted, shuffled and reversed variants of both fixtures
    pub(crate) fn cases() -> Vec<(Vec<i32>, Vec<i32>)> {
        let mut out = Vec::new();
        for sorted in [odd(), even()] {
            out.push((sorted.clone(), sorted.clone()));
            for seed in 0..4 {
                out.push((shuffled(&sorted, seed), sorted.clone()));
            }
            out.push((reversed(&sorted), sorted));
        }
        out
    }
}
