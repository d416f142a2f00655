use rand::Rng;

/// # Quick Sort
///
/// Partitions around a uniformly random pivot, then sorts both sides. The
/// smaller side is handled recursively and the larger one in a loop, bounding
/// the stack depth by O(log n).
///
/// - Time: O(n log n) expected, O(n^2) worst case
/// - Space: O(log n)
///
/// ```
/// use classic_dsa::sorting::quick_sort;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let mut values = [9, 4, 7, 1];
/// quick_sort(&mut values, &mut rng);
/// assert_eq!(values, [1, 4, 7, 9]);
/// ```
pub fn quick_sort<T, R>(mut values: &mut [T], rng: &mut R)
where
    T: Ord,
    R: Rng + ?Sized,
{
    while values.len() > 1 {
        let pivot = partition(values, rng);
        let current = core::mem::take(&mut values);
        let (left, rest) = current.split_at_mut(pivot);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quick_sort(left, rng);
            values = right;
        } else {
            quick_sort(right, rng);
            values = left;
        }
    }
}

/// Places a random pivot at its final sorted position
///
/// Swaps a uniformly chosen element to the end, then scans inward from both
/// ends, exchanging pairs that sit on the wrong side.
///
/// ```text
/// [ <= pivot | pivot | > pivot ]
///              ^ returned index
/// ```
///
/// # Panics
///
/// Panics if `values` is empty.
pub fn partition<T, R>(values: &mut [T], rng: &mut R) -> usize
where
    T: Ord,
    R: Rng + ?Sized,
{
    assert!(!values.is_empty(), "cannot partition an empty slice");

    let end = values.len() - 1;
    values.swap(rng.gen_range(0..=end), end);

    // left scans up, right_end is one past the downward scan
    let mut left = 0;
    let mut right_end = end;
    while left < right_end {
        while left < end && values[left] <= values[end] {
            left += 1;
        }
        while right_end > 0 && values[right_end - 1] > values[end] {
            right_end -= 1;
        }
        if left + 1 < right_end {
            values.swap(left, right_end - 1);
        }
    }

    values.swap(left, end);
    left
}
