use alloc::vec::Vec;

/// # Merge Sort
///
/// Splits the input in halves, sorts each recursively and merges the sorted
/// halves. Stable.
///
/// - Time: O(n log n)
/// - Space: O(n)
///
/// ```
/// use classic_dsa::sorting::merge_sort;
///
/// assert_eq!(merge_sort(&[5, 2, 4, 1]), vec![1, 2, 4, 5]);
/// ```
pub fn merge_sort<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    if values.len() <= 1 {
        return values.to_vec();
    }
    let (left, right) = values.split_at(values.len() / 2);
    merge(&merge_sort(left), &merge_sort(right))
}

/// Merges two sorted slices into one sorted vector
///
/// On ties the element from `left` comes first.
pub fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if right[j] < left[i] {
            out.push(right[j].clone());
            j += 1;
        } else {
            out.push(left[i].clone());
            i += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::all)]
mod tests {
    use super::*;
    use crate::sorting::fixtures;

    #[test]
    fn test_merge_sort() {
        for (input, expected) in fixtures::cases() {
            assert_eq!(merge_sort(&input), expected);
        }
    }

    #[test]
    fn test_merge() {
        let expected = vec![1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10];
        assert_eq!(merge(&fixtures::odd(), &fixtures::even()), expected);
        assert_eq!(merge(&fixtures::even(), &fixtures::odd()), expected);
        assert_eq!(merge::<i32>(&[], &[]), vec![]);
    }

    #[derive(Debug, Clone)]
    struct Tagged(u8, char);

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl Eq for Tagged {}

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> core::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    #[test]
    fn test_stable() {
        let input = [Tagged(1, 'x'), Tagged(0, 'y'), Tagged(1, 'z'), Tagged(0, 'w')];
        let tags: Vec<char> = merge_sort(&input).iter().map(|t| t.1).collect();
        assert_eq!(tags, vec!['y', 'w', 'x', 'z']);
    }
}
