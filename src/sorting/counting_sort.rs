use alloc::vec::Vec;

use num_traits::PrimInt;

/// # Counting Sort
///
/// Counts occurrences of every value in `min..=max` and places each input at
/// the start of its value's run. Stable, and never compares two elements.
///
/// - Time: O(n + k) with `k = max - min + 1`
/// - Space: O(n + k)
///
/// # Panics
///
/// Panics if `max - min` does not fit in `usize`.
///
/// ```
/// use classic_dsa::sorting::counting_sort;
///
/// assert_eq!(counting_sort(&[3_u8, 1, 2, 1]), vec![1, 1, 2, 3]);
/// assert_eq!(counting_sort(&[-2_i8, 127, -128]), vec![-128, -2, 127]);
/// ```
pub fn counting_sort<T: PrimInt>(values: &[T]) -> Vec<T> {
    let Some((min, max)) = min_max(values) else {
        return Vec::new();
    };
    let Some(runs) = offset(max, min).and_then(|w| w.checked_add(1)) else {
        panic!("value range too wide for counting sort");
    };

    let mut starts = vec![0_usize; runs];
    for &v in values {
        starts[offset(v, min).unwrap_or(0)] += 1;
    }

    let mut next = 0;
    for slot in starts.iter_mut() {
        let count = *slot;
        *slot = next;
        next += count;
    }

    let mut out = vec![min; values.len()];
    for &v in values {
        let slot = &mut starts[offset(v, min).unwrap_or(0)];
        out[*slot] = v;
        *slot += 1;
    }
    out
}

/// Smallest and largest element in one pass
fn min_max<T: PrimInt>(values: &[T]) -> Option<(T, T)> {
    let (&first, rest) = values.split_first()?;
    Some(rest.iter().fold((first, first), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    }))
}

/// `v - min` as an index, computed wide enough for every primitive integer
fn offset<T: PrimInt>(v: T, min: T) -> Option<usize> {
    match (v.to_i128(), min.to_i128()) {
        (Some(a), Some(b)) => usize::try_from(a.checked_sub(b)?).ok(),
        _ => {
            let (a, b) = (v.to_u128()?, min.to_u128()?);
            usize::try_from(a.checked_sub(b)?).ok()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::all)]
mod tests {
    use super::*;
    use crate::sorting::fixtures;

    #[test]
    fn test_counting_sort() {
        let dups = [1, 1, 2, 2, 2, 2, 5, 10, 10, 10];
        assert_eq!(counting_sort(&fixtures::shuffled(&dups, 9)), dups.to_vec());

        for (input, expected) in fixtures::cases() {
            assert_eq!(counting_sort(&input), expected);
        }
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min_max(&[2, 3, 1]), Some((1, 3)));
        assert_eq!(min_max(&[1, 3, 2]), Some((1, 3)));
        assert_eq!(min_max(&[3, 1, 3]), Some((1, 3)));
        assert_eq!(min_max::<u8>(&[]), None);
    }

    #[test]
    fn test_extreme_types() {
        assert_eq!(
            counting_sort(&[u128::MAX, u128::MAX - 2, u128::MAX - 1]),
            vec![u128::MAX - 2, u128::MAX - 1, u128::MAX]
        );
        assert_eq!(counting_sort(&[0_i64, -5, 5]), vec![-5, 0, 5]);
        assert!(counting_sort::<i32>(&[]).is_empty());
    }

    #[test]
    #[should_panic(expected = "value range too wide")]
    fn test_range_too_wide() {
        let _ = counting_sort(&[i128::MIN, i128::MAX]);
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
        fn agrees_with_slice_sort(values in proptest::collection::vec(any::<i16>(), 0..100)) {
            let mut expected = values.clone();
            expected.sort();
            prop_assert_eq!(counting_sort(&values), expected);
        }
    }
}
