#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]
#![allow(clippy::just_underscores_and_digits, clippy::len_without_is_empty)]

#[macro_use]
extern crate alloc;

mod error;
pub use error::{Error, Result};

mod utils;
pub(crate) use utils::helper;

pub mod traits;

mod disjoint_set;
pub use disjoint_set::{DisjointSet, SetNode};

mod heap;
pub use heap::{BinaryHeap, MaxHeap, MinHeap};

mod fenwick;
pub use fenwick::FenwickTree;

mod tree;
pub use tree::{BinaryTree, Color, NodeId, RedBlackTree, Trie};

mod stack;
pub use stack::Stack;

mod queue;
pub use queue::Queue;

pub mod linked_list;
pub use linked_list::LinkedList;

mod hash_table;
pub use hash_table::{HASH_BASE, HASH_MODULUS, StringHashSet, polynomial_hash};

pub mod sorting;

pub mod searching;
