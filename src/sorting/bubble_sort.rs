/// # Bubble Sort
///
/// Repeatedly swaps adjacent elements that are out of order. Each pass bubbles
/// the largest remaining element to the end; a pass without swaps stops early.
///
/// - Time: O(n^2), O(n) on sorted input
/// - Space: O(1)
///
/// ```
/// use classic_dsa::sorting::bubble_sort;
///
/// let mut values = [3, 1, 2];
/// bubble_sort(&mut values);
/// assert_eq!(values, [1, 2, 3]);
/// ```
pub fn bubble_sort<T: Ord>(values: &mut [T]) {
    let n = values.len();
    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for i in 0..n - pass - 1 {
            if values[i] > values[i + 1] {
                values.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            return;
        }
    }
}
