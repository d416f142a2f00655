mod arena;
pub use arena::NodeId;

mod binary_tree;
pub use binary_tree::BinaryTree;

mod red_black;
pub use red_black::{Color, RedBlackTree};

mod trie;
pub use trie::Trie;
