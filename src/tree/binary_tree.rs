use alloc::vec::Vec;
use core::fmt;

use super::arena::{Arena, Links, NodeId, Side, TreeNode};

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    value: T,
    links: Links,
}

impl<T> TreeNode for Node<T> {
    type Value = T;

    #[inline]
    fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    fn into_value(self) -> T {
        self.value
    }

    #[inline]
    fn links(&self) -> &Links {
        &self.links
    }

    #[inline]
    fn links_mut(&mut self) -> &mut Links {
        &mut self.links
    }
}

/// # Binary Search Tree
///
/// An unbalanced binary search tree. Values smaller than a node go to its left
/// subtree, everything else (duplicates included) to its right.
///
/// ## Time Complexity
/// - Search: O(h)
/// - Insert: O(h)
/// - Remove: O(h)
///
/// where `h` is the height, `log n` for random input and `n` for sorted input.
///
/// ```
/// use classic_dsa::BinaryTree;
///
/// let mut tree = BinaryTree::new(4);
/// for v in [2, 6, 1, 3, 5, 7] {
///     tree.insert(v);
/// }
/// let lca = tree.lca(&3, &6).unwrap();
/// assert_eq!(tree.get(lca), Some(&4));
/// assert_eq!(tree.in_order(), vec![&1, &2, &3, &4, &5, &6, &7]);
/// ```
#[derive(Debug, Clone)]
pub struct BinaryTree<T> {
    arena: Arena<Node<T>>,
}

impl<T: Ord> BinaryTree<T> {
    /// Creates a tree holding a single root value
    pub fn new(root: T) -> Self {
        let mut arena = Arena::new();
        let id = arena.alloc(Node {
            value: root,
            links: Links::default(),
        });
        arena.attach(id, None);
        Self { arena }
    }

    /// Returns the number of nodes
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns true if every node has been removed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }

    /// Returns the root handle
    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        self.arena.root()
    }

    /// Returns the value stored at `id`, or `None` for a stale handle
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }

    /// Returns the parent of `id`
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id)?.links.parent
    }

    /// Returns the left child of `id`
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id)?.links.left
    }

    /// Returns the right child of `id`
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id)?.links.right
    }

    /// Inserts `value` as a new leaf
    ///
    /// # Returns
    ///
    /// * `NodeId` - Handle of the freshly created node
    pub fn insert(&mut self, value: T) -> NodeId {
        let slot = self.arena.insertion_slot(&value);
        let id = self.arena.alloc(Node {
            value,
            links: Links::default(),
        });
        self.arena.attach(id, slot);
        id
    }

    /// Returns the first node found holding `value`
    pub fn search(&self, value: &T) -> Option<NodeId> {
        self.arena.search(value)
    }

    /// Unlinks the node `id` and returns its value
    ///
    /// A node with two children is replaced by its in-order predecessor, the
    /// maximum of its left subtree. Handles of all other nodes stay valid.
    ///
    /// # Returns
    ///
    /// * `Option<T>` - The removed value, or `None` if `id` is stale
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        if !self.arena.contains(id) {
            return None;
        }

        match (self.arena.left(id), self.arena.right(id)) {
            (left, None) => self.arena.transplant(id, left),
            (None, right) => self.arena.transplant(id, right),
            (Some(left), Some(right)) => {
                let pred = self.arena.maximum(left);
                if pred != left {
                    let pred_left = self.arena.left(pred);
                    self.arena.transplant(pred, pred_left);
                    self.arena.set_child(pred, Side::Left, Some(left));
                    self.arena.set_parent(left, Some(pred));
                }
                self.arena.transplant(id, Some(pred));
                self.arena.set_child(pred, Side::Right, Some(right));
                self.arena.set_parent(right, Some(pred));
            }
        }

        self.arena.release(id)
    }

    /// Lowest common ancestor of two values
    ///
    /// Descends from the root to the first node whose value lies between
    /// `first` and `second` inclusive. The values themselves need not be in
    /// the tree.
    ///
    /// # Returns
    ///
    /// * `Option<NodeId>` - The split node, or `None` if the descent falls off the tree
    pub fn lca(&self, first: &T, second: &T) -> Option<NodeId> {
        let mut current = self.arena.root();
        while let Some(id) = current {
            let value = self.arena.value(id);
            current = if value < first && value < second {
                self.arena.right(id)
            } else if value > first && value > second {
                self.arena.left(id)
            } else {
                return Some(id);
            };
        }
        None
    }

    /// Returns the smallest value
    pub fn min(&self) -> Option<&T> {
        let root = self.arena.root()?;
        Some(self.arena.value(self.arena.minimum(root)))
    }

    /// Returns the largest value
    pub fn max(&self) -> Option<&T> {
        let root = self.arena.root()?;
        Some(self.arena.value(self.arena.maximum(root)))
    }

    /// Values in left, node, right order
    pub fn in_order(&self) -> Vec<&T> {
        self.values(self.arena.in_order())
    }

    /// Values in node, left, right order
    pub fn pre_order(&self) -> Vec<&T> {
        self.values(self.arena.pre_order())
    }

    /// Values in left, right, node order
    pub fn post_order(&self) -> Vec<&T> {
        self.values(self.arena.post_order())
    }

    fn values(&self, ids: Vec<NodeId>) -> Vec<&T> {
        ids.into_iter().map(|id| self.arena.value(id)).collect()
    }
}

impl<T: Ord + fmt::Debug> fmt::Display for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "in_order={:?}", self.in_order())?;
        writeln!(f, "pre_order={:?}", self.pre_order())?;
        write!(f, "post_order={:?}", self.post_order())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::all)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use std::collections::HashMap;

    fn sample() -> (BinaryTree<i32>, HashMap<i32, NodeId>) {
        let mut tree = BinaryTree::new(4);
        let mut nodes = HashMap::new();
        nodes.insert(4, tree.root().unwrap());
        for v in [2, 6, 1, 3, 5, 7] {
            nodes.insert(v, tree.insert(v));
        }
        (tree, nodes)
    }

    #[test]
    fn test_traversals_and_extremes() {
        let (tree, _) = sample();

        assert_eq!(tree.len(), 7);
        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.max(), Some(&7));
        assert_eq!(tree.in_order(), vec![&1, &2, &3, &4, &5, &6, &7]);
        assert_eq!(tree.pre_order(), vec![&4, &2, &1, &3, &6, &5, &7]);
        assert_eq!(tree.post_order(), vec![&1, &3, &2, &5, &7, &6, &4]);
    }

    #[test]
    fn test_lca() {
        let (tree, nodes) = sample();

        assert_eq!(tree.lca(&3, &6), Some(nodes[&4]));
        assert_eq!(tree.lca(&1, &3), Some(nodes[&2]));
        assert_eq!(tree.lca(&5, &5), Some(nodes[&5]));
        assert_eq!(tree.lca(&8, &9), None);
    }

    #[test]
    fn test_search_then_remove() {
        let (mut tree, nodes) = sample();

        for v in [1, 3, 2, 6, 7, 4] {
            assert_eq!(tree.search(&v), Some(nodes[&v]));
            assert_eq!(tree.remove(nodes[&v]), Some(v));
            assert_eq!(tree.search(&v), None);
        }
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.root(), Some(nodes[&5]));
        assert_eq!(tree.parent(nodes[&5]), None);
    }

    #[test]
    fn test_two_children_takes_predecessor() {
        let mut tree = BinaryTree::new(5);
        let four = tree.insert(4);
        let five = tree.search(&5).unwrap();
        assert_eq!(tree.remove(five), Some(5));
        assert_eq!(tree.root(), Some(four));

        let two = tree.insert(2);
        let five = tree.insert(5);
        let three = tree.insert(3);
        assert_eq!(tree.remove(four), Some(4));

        assert_eq!(tree.root(), Some(three));
        assert_eq!(tree.parent(three), None);
        assert_eq!(tree.left(three), Some(two));
        assert_eq!(tree.right(three), Some(five));
        assert_eq!(tree.parent(two), Some(three));
        assert_eq!(tree.parent(five), Some(three));
        assert_eq!(tree.right(two), None);
    }

    #[test]
    fn test_remove_root_down_to_empty() {
        let mut tree = BinaryTree::new(1);
        let root = tree.root().unwrap();

        assert_eq!(tree.remove(root), Some(1));
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
        assert_eq!(tree.min(), None);
        assert_eq!(tree.remove(root), None);

        tree.insert(8);
        assert_eq!(tree.in_order(), vec![&8]);
    }

    #[test]
    fn test_duplicates_descend_right() {
        let mut tree = BinaryTree::new(3);
        let dup = tree.insert(3);

        assert_eq!(tree.right(tree.root().unwrap()), Some(dup));
        assert_eq!(tree.in_order(), vec![&3, &3]);
    }

    #[test]
    fn test_display() {
        let tree = BinaryTree::new(2);
        assert_eq!(
            tree.to_string(),
            "in_order=[2]\npre_order=[2]\npost_order=[2]"
        );
    }
}
