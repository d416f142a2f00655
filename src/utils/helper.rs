/// Returns the value of the least significant set bit of `index`
///
/// Computed as `index & -index` in two's complement, so `0` maps to `0`.
///
/// # Arguments
///
/// * `index` - The index to inspect
///
/// # Returns
///
/// * `usize` - The lowest set bit of `index`
#[inline]
pub const fn lowest_set_bit(index: usize) -> usize {
    index & index.wrapping_neg()
}

/// Returns the parent position of `index` in an implicit binary heap
///
/// # Arguments
///
/// * `index` - A non-root heap position (`index > 0`)
///
/// # Returns
///
/// * `usize` - The parent position
#[inline]
pub const fn parent(index: usize) -> usize {
    (index - 1) / 2
}

/// Returns the left child position of `index` in an implicit binary heap
#[inline]
pub const fn left_child(index: usize) -> usize {
    2 * index + 1
}

/// Returns the right child position of `index` in an implicit binary heap
#[inline]
pub const fn right_child(index: usize) -> usize {
    2 * index + 2
}
