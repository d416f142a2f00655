use rand::Rng;

use crate::{Error, Result, sorting::partition};

/// # Quickselect
///
/// Finds the `k`-th smallest element. Like quick sort it partitions around a
/// random pivot, but keeps only the side that holds position `k`.
///
/// - Time: O(n) expected, O(n^2) worst case
/// - Space: O(1)
///
/// `values` is reordered in place.
///
/// # Arguments
///
/// * `k` - 1-based rank, `1` selects the minimum
/// * `values` - The elements to select from
/// * `rng` - Source of pivot choices
///
/// # Returns
///
/// * `Result<T>` - The element of rank `k`, or [`Error::IndexOutOfRange`]
///   if `k` is outside `1..=values.len()`
///
/// ```
/// use classic_dsa::searching::quick_select;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// let mut values = [7, 2, 9, 4];
/// assert_eq!(quick_select(2, &mut values, &mut rng), Ok(4));
/// ```
pub fn quick_select<T, R>(k: usize, values: &mut [T], rng: &mut R) -> Result<T>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    if !(1..=values.len()).contains(&k) {
        return Err(Error::IndexOutOfRange {
            index: k,
            len: values.len(),
        });
    }

    let mut rank = k - 1;
    let mut window = values;
    loop {
        let pivot = partition(window, rng);
        if rank == pivot {
            return Ok(window[pivot].clone());
        }

        let current = core::mem::take(&mut window);
        if rank < pivot {
            window = &mut current[..pivot];
        } else {
            rank -= pivot + 1;
            window = &mut current[pivot + 1..];
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::all)]
mod tests {
    use super::*;
    use crate::sorting::fixtures;
    use rand::{SeedableRng, rngs::SmallRng};

    #[test]
    fn test_every_rank() {
        let mut rng = SmallRng::seed_from_u64(11);
        for sorted in [fixtures::odd(), fixtures::even()] {
            let variants = [
                sorted.clone(),
                fixtures::reversed(&sorted),
                fixtures::shuffled(&sorted, 5),
            ];
            for values in variants {
                for k in 1..=values.len() {
                    let mut scratch = values.clone();
                    assert_eq!(quick_select(k, &mut scratch, &mut rng), Ok(k as i32));
                }
            }
        }
    }

    #[test]
    fn test_rank_out_of_range() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut odd = fixtures::odd();

        for k in [0, 10] {
            assert_eq!(
                quick_select(k, &mut odd, &mut rng),
                Err(Error::IndexOutOfRange { index: k, len: 9 })
            );
        }
        assert!(quick_select::<i32, _>(1, &mut [], &mut rng).is_err());
    }

    #[test]
    fn test_duplicates() {
        let mut rng = SmallRng::seed_from_u64(2);
        let values = [5, 1, 5, 1, 3];
        let expected = [1, 1, 3, 5, 5];
        for k in 1..=5 {
            let mut scratch = values;
            assert_eq!(quick_select(k, &mut scratch, &mut rng), Ok(expected[k - 1]));
        }
    }
}
