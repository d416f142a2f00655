//! Ordering policies for the binary heap.

mod heap_order;
pub use heap_order::{HeapOrder, MaxOrder, MinOrder};
