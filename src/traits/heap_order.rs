/// Ordering policy for a binary heap
///
/// A heap keeps the element that `precedes` every other element at its root.
/// Min-heaps and max-heaps share one sift implementation and differ only in
/// the policy they are instantiated with.
///
/// # Type Parameters
///
/// * `T` - The type of the elements in the heap
pub trait HeapOrder<T: ?Sized> {
    /// Returns true if `a` must sit above `b` in the heap
    fn precedes(a: &T, b: &T) -> bool;
}

/// Order policy for a min-heap: smaller values rise to the root
#[derive(Debug, Clone, Copy, Default)]
pub struct MinOrder;

/// Order policy for a max-heap: larger values rise to the root
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxOrder;

impl<T: PartialOrd + ?Sized> HeapOrder<T> for MinOrder {
    #[inline]
    fn precedes(a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: PartialOrd + ?Sized> HeapOrder<T> for MaxOrder {
    #[inline]
    fn precedes(a: &T, b: &T) -> bool {
        a > b
    }
}
