use core::cmp::Ordering;

use crate::{Error, Result};

/// # Binary Search
///
/// Halves the candidate range of a sorted slice on every comparison.
///
/// - Time: O(log n)
/// - Space: O(1)
///
/// # Arguments
///
/// * `values` - A slice sorted in ascending order
/// * `item` - The value to look for
///
/// # Returns
///
/// * `Result<usize>` - An index holding `item`, or [`Error::NotFound`]. With
///   duplicates any matching index may be returned.
///
/// ```
/// use classic_dsa::{Error, searching::binary_search};
///
/// let values = [1, 3, 5, 7];
/// assert_eq!(binary_search(&values, &5), Ok(2));
/// assert_eq!(binary_search(&values, &4), Err(Error::NotFound));
/// ```
pub fn binary_search<T: Ord>(values: &[T], item: &T) -> Result<usize> {
    let (mut lo, mut hi) = (0, values.len());
    while lo < hi {
        let middle = lo + (hi - lo) / 2;
        match values[middle].cmp(item) {
            Ordering::Less => lo = middle + 1,
            Ordering::Greater => hi = middle,
            Ordering::Equal => return Ok(middle),
        }
    }
    Err(Error::NotFound)
}


#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::all)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn agrees_with_membership(mut values in proptest::collection::vec(-50_i32..50, 0..60), item in -60_i32..60) {
            values.sort();
            match binary_search(&values, &item) {
                Ok(i) => prop_assert_eq!(values[i], item),
                Err(e) => {
                    prop_assert_eq!(e, Error::NotFound);
                    prop_assert!(!values.contains(&item));
                }
            }
        }
    }
}
