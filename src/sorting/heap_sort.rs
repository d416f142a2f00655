use alloc::vec::Vec;

use crate::{MaxHeap, MinHeap};

/// # Heap Sort
///
/// Builds a binary heap from `values` in O(n) and extracts its root `n` times.
///
/// - Time: O(n log n)
/// - Space: O(n)
///
/// # Arguments
///
/// * `values` - The elements to sort
/// * `reverse` - Sort descending through a max-heap instead of ascending
///   through a min-heap
///
/// ```
/// use classic_dsa::sorting::heap_sort;
///
/// assert_eq!(heap_sort(vec![3, 1, 2], false), vec![1, 2, 3]);
/// assert_eq!(heap_sort(vec![3, 1, 2], true), vec![3, 2, 1]);
/// ```
pub fn heap_sort<T: Ord>(values: Vec<T>, reverse: bool) -> Vec<T> {
    if reverse {
        MaxHeap::new(values, true).into_sorted_vec()
    } else {
        MinHeap::new(values, true).into_sorted_vec()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::all)]
mod tests {
    use super::*;
    use crate::sorting::fixtures;

    #[test]
    fn test_heap_sort() {
        for (input, expected) in fixtures::cases() {
            assert_eq!(heap_sort(input, false), expected);
        }
    }

    #[test]
    fn test_heap_sort_reversed() {
        for (input, expected) in fixtures::cases() {
            assert_eq!(heap_sort(input, true), fixtures::reversed(&expected));
        }
    }
}
