/// # Insertion Sort
///
/// Grows a sorted prefix one element at a time, shifting larger elements one
/// slot right to open a gap for the next element. Stable.
///
/// - Time: O(n^2), O(n) on nearly sorted input
/// - Space: O(1)
///
/// ```
/// use classic_dsa::sorting::insertion_sort;
///
/// let mut values = ["pear", "apple", "fig"];
/// insertion_sort(&mut values);
/// assert_eq!(values, ["apple", "fig", "pear"]);
/// ```
pub fn insertion_sort<T: Ord>(values: &mut [T]) {
    insertion_sort_by(values, |a, b| a < b);
}

/// Insertion sort under a strict "less than" predicate
pub(crate) fn insertion_sort_by<T, F>(values: &mut [T], mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..values.len() {
        let mut gap = i;
        while gap > 0 && less(&values[i], &values[gap - 1]) {
            gap -= 1;
        }
        values[gap..=i].rotate_right(1);
    }
}
