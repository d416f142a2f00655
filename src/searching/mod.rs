//! Searching and selection over slices.

mod binary_search;
pub use binary_search::binary_search;

mod quick_select;
pub use quick_select::quick_select;
