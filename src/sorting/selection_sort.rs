/// # Selection Sort
///
/// Selects the minimum of the unsorted suffix and swaps it to the front of
/// that suffix. Performs at most `n - 1` swaps.
///
/// - Time: O(n^2) on every input
/// - Space: O(1)
///
/// ```
/// use classic_dsa::sorting::selection_sort;
///
/// let mut values = [4, -1, 3];
/// selection_sort(&mut values);
/// assert_eq!(values, [-1, 3, 4]);
/// ```
pub fn selection_sort<T: Ord>(values: &mut [T]) {
    let n = values.len();
    for i in 0..n {
        let min = (i..n).min_by_key(|&j| &values[j]).unwrap_or(i);
        values.swap(i, min);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::all)]
mod tests {
    use super::*;
    use crate::sorting::fixtures;

    #[test]
    fn test_selection_sort() {
        for (mut input, expected) in fixtures::cases() {
            selection_sort(&mut input);
            assert_eq!(input, expected);
        }
    }

    #[test]
    fn test_duplicates() {
        let mut values = [3, 1, 3, 1, 2];
        selection_sort(&mut values);
        assert_eq!(values, [1, 1, 2, 3, 3]);
    }
}
