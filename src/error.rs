use thiserror::Error;

/// Errors reported by the containers and algorithms of this crate.
///
/// Every error is synchronous and local: operations are pure in-memory
/// mutations, so nothing is retried and nothing is partially applied.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A label, rank or position lies outside the valid range `1..=len`
    #[error("index {index} is out of range, expected 1..={len}")]
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// Number of addressable items
        len: usize,
    },

    /// Read or extract on a heap holding no elements
    #[error("heap is empty")]
    Empty,

    /// Push into a fixed-capacity container that is already full
    #[error("container is full, capacity {capacity}")]
    Overflow {
        /// The fixed capacity of the container
        capacity: usize,
    },

    /// Pop or peek on a fixed-capacity container holding no elements
    #[error("container is empty")]
    Underflow,

    /// The requested item is not present
    #[error("item not found")]
    NotFound,

    /// The trie path exists but was never marked as the end of a word
    #[error("string is not marked as a word")]
    NotAWord,
}

/// Result alias used throughout the crate
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_messages() {
        let err = Error::IndexOutOfRange { index: 6, len: 5 };
        assert_eq!(err.to_string(), "index 6 is out of range, expected 1..=5");
        assert_eq!(Error::Empty.to_string(), "heap is empty");
        assert_eq!(
            Error::Overflow { capacity: 3 }.to_string(),
            "container is full, capacity 3"
        );
        assert_eq!(Error::Underflow.to_string(), "container is empty");
    }
}
