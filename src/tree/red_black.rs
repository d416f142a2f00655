use alloc::vec::Vec;

use super::arena::{Arena, Links, NodeId, Side, TreeNode};

/// Red-Black tree node colors used to maintain tree balance properties.
///
/// Red-Black trees maintain balance by ensuring:
/// - Red nodes have black children
/// - All paths from a node to its null leaves have equal black node counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Red node, cannot be adjacent to another red node
    Red,
    /// Black node, contributes to black height
    Black,
}

#[derive(Debug, Clone)]
pub(crate) struct RbNode<T> {
    /// The stored value
    value: T,

    /// Color of this node (Red or Black) used for balancing
    color: Color,

    /// Parent and child handles
    links: Links,
}

impl<T> TreeNode for RbNode<T> {
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

/// # Red-Black Tree
///
/// A self-balancing binary search tree. Every node carries one color bit and
/// the tree restores four rules after each insertion and removal:
///
/// - The root is black
/// - No red node has a red child
/// - Every path from a node down to a null leaf crosses the same number of black nodes
/// - An in-order walk is non-decreasing; equal values descend to the right
///
/// Together these keep the height within `2 log2(n + 1)`, so search, insert
/// and remove are O(log n).
///
/// Nodes live in an arena and are addressed by [`NodeId`] handles. Removed
/// slots are recycled through a free list.
///
/// ```
/// use classic_dsa::{Color, RedBlackTree};
///
/// let mut tree = RedBlackTree::new(5);
/// let four = tree.insert(4);
/// let three = tree.insert(3);
///
/// assert_eq!(tree.root(), Some(four));
/// assert_eq!(tree.color(four), Some(Color::Black));
/// assert_eq!(tree.color(three), Some(Color::Red));
/// assert!(tree.is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct RedBlackTree<T> {
    arena: Arena<RbNode<T>>,
}

impl<T: Ord> RedBlackTree<T> {
    /// Creates a tree whose black root holds `root`
    pub fn new(root: T) -> Self {
        let mut arena = Arena::new();
        let id = arena.alloc(RbNode {
            value: root,
            color: Color::Black,
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

    /// Returns the color of `id`
    pub fn color(&self, id: NodeId) -> Option<Color> {
        self.arena.get(id).map(|node| node.color)
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

    /// Inserts `value` as a red leaf, then recolors and rotates until the
    /// tree is balanced again
    ///
    /// # Returns
    ///
    /// * `NodeId` - Handle of the node holding `value`
    pub fn insert(&mut self, value: T) -> NodeId {
        let slot = self.arena.insertion_slot(&value);
        let color = if slot.is_some() {
            Color::Red
        } else {
            Color::Black
        };
        let id = self.arena.alloc(RbNode {
            value,
            color,
            links: Links::default(),
        });
        self.arena.attach(id, slot);
        self.fix_insertion_violations(id);

        debug_assert!(
            self.is_valid(),
            "RB tree invariants violated after insertion"
        );

        id
    }

    /// Returns the first node found holding `value`
    pub fn search(&self, value: &T) -> Option<NodeId> {
        self.arena.search(value)
    }

    /// Returns true if some node holds `value`
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// Removes one node holding `value`
    ///
    /// # Returns
    ///
    /// * `Option<T>` - The removed value, or `None` if no node holds `value`
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let node = self.search(value)?;
        let removed = self.delete_node(node);

        debug_assert!(
            self.is_valid(),
            "RB tree invariants violated after removal"
        );

        removed
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

    /// Values in ascending order
    pub fn in_order(&self) -> Vec<&T> {
        self.arena
            .in_order()
            .into_iter()
            .map(|id| self.arena.value(id))
            .collect()
    }

    /// Number of black nodes on every path from the root down to a null leaf
    ///
    /// # Returns
    ///
    /// * `Option<usize>` - `None` if the root is red, a red node has a red child,
    ///   or two paths disagree
    pub fn black_height(&self) -> Option<usize> {
        if self.is_red(self.arena.root()) {
            return None;
        }
        self.verify_black_height(self.arena.root())
    }

    /// Checks every red-black rule plus parent links and in-order sorting
    pub fn is_valid(&self) -> bool {
        if self.black_height().is_none() {
            return false;
        }

        let order = self.arena.in_order();
        if order.len() != self.arena.len() {
            return false;
        }

        let sorted = order
            .windows(2)
            .all(|w| self.arena.value(w[0]) <= self.arena.value(w[1]));
        let linked = order.iter().all(|&id| {
            [self.arena.left(id), self.arena.right(id)]
                .into_iter()
                .flatten()
                .all(|child| self.arena.parent(child) == Some(id))
        });

        sorted && linked
    }

    #[inline]
    fn get_color(&self, node: Option<NodeId>) -> Color {
        match node {
            Some(id) => self.arena.node(id).color,
            None => Color::Black,
        }
    }

    #[inline]
    fn set_color(&mut self, node: Option<NodeId>, color: Color) {
        if let Some(id) = node {
            self.arena.node_mut(id).color = color;
        }
    }

    #[inline]
    fn is_red(&self, node: Option<NodeId>) -> bool {
        self.get_color(node) == Color::Red
    }

    #[inline]
    fn is_black(&self, node: Option<NodeId>) -> bool {
        self.get_color(node) == Color::Black
    }

    #[inline]
    fn get_left(&self, node: Option<NodeId>) -> Option<NodeId> {
        self.arena.left(node?)
    }

    #[inline]
    fn get_right(&self, node: Option<NodeId>) -> Option<NodeId> {
        self.arena.right(node?)
    }

    fn fix_insertion_violations(&mut self, mut node: NodeId) {
        while let Some(parent) = self.arena.parent(node) {
            if self.is_black(Some(parent)) {
                break;
            }
            // a red parent is never the root
            let Some(grandparent) = self.arena.parent(parent) else {
                break;
            };

            if self.arena.left(grandparent) == Some(parent) {
                let uncle = self.arena.right(grandparent);

                if self.is_red(uncle) {
                    self.set_color(Some(parent), Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(Some(grandparent), Color::Red);
                    node = grandparent;
                } else {
                    if self.arena.right(parent) == Some(node) {
                        node = parent;
                        self.arena.rotate_left(node);
                    }
                    let parent = self.arena.parent(node);
                    let grandparent = parent.and_then(|p| self.arena.parent(p));
                    self.set_color(parent, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    if let Some(g) = grandparent {
                        self.arena.rotate_right(g);
                    }
                }
            } else {
                let uncle = self.arena.left(grandparent);

                if self.is_red(uncle) {
                    self.set_color(Some(parent), Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(Some(grandparent), Color::Red);
                    node = grandparent;
                } else {
                    if self.arena.left(parent) == Some(node) {
                        node = parent;
                        self.arena.rotate_right(node);
                    }
                    let parent = self.arena.parent(node);
                    let grandparent = parent.and_then(|p| self.arena.parent(p));
                    self.set_color(parent, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    if let Some(g) = grandparent {
                        self.arena.rotate_left(g);
                    }
                }
            }
        }

        self.set_color(self.arena.root(), Color::Black);
    }

    fn delete_node(&mut self, node: NodeId) -> Option<T> {
        let (original_color, fixup_node, fixup_parent) = self.perform_deletion(node);

        if original_color == Color::Black {
            self.fix_deletion_violations(fixup_node, fixup_parent);
        }

        self.arena.release(node)
    }

    /// Unlinks `node` and reports the color that left the tree, the node that
    /// took its place, and that node's parent
    fn perform_deletion(&mut self, node: NodeId) -> (Color, Option<NodeId>, Option<NodeId>) {
        let original_color = self.get_color(Some(node));
        let left = self.arena.left(node);
        let right = self.arena.right(node);

        let (Some(left), Some(right)) = (left, right) else {
            let child = left.or(right);
            let parent = self.arena.parent(node);
            self.arena.transplant(node, child);
            return (original_color, child, parent);
        };

        let successor = self.arena.minimum(right);
        let successor_color = self.get_color(Some(successor));
        let fixup_node = self.arena.right(successor);

        let fixup_parent = if self.arena.parent(successor) == Some(node) {
            Some(successor)
        } else {
            let parent = self.arena.parent(successor);
            self.arena.transplant(successor, fixup_node);
            self.arena.set_child(successor, Side::Right, Some(right));
            self.arena.set_parent(right, Some(successor));
            parent
        };

        self.arena.transplant(node, Some(successor));
        self.arena.set_child(successor, Side::Left, Some(left));
        self.arena.set_parent(left, Some(successor));
        self.set_color(Some(successor), original_color);

        (successor_color, fixup_node, fixup_parent)
    }

    fn fix_deletion_violations(
        &mut self,
        mut fixup_node: Option<NodeId>,
        mut fixup_parent: Option<NodeId>,
    ) {
        while fixup_node != self.arena.root() && self.is_black(fixup_node) {
            let Some(parent) = fixup_parent else {
                break;
            };

            if fixup_node == self.arena.left(parent) {
                let mut sibling = self.arena.right(parent);

                if self.is_red(sibling) {
                    self.set_color(sibling, Color::Black);
                    self.set_color(Some(parent), Color::Red);
                    self.arena.rotate_left(parent);
                    sibling = self.arena.right(parent);
                }

                if self.is_black(self.get_left(sibling)) && self.is_black(self.get_right(sibling)) {
                    self.set_color(sibling, Color::Red);
                    fixup_node = Some(parent);
                    fixup_parent = self.arena.parent(parent);
                } else {
                    if self.is_black(self.get_right(sibling)) {
                        self.set_color(self.get_left(sibling), Color::Black);
                        self.set_color(sibling, Color::Red);
                        if let Some(s) = sibling {
                            self.arena.rotate_right(s);
                        }
                        sibling = self.arena.right(parent);
                    }

                    self.set_color(sibling, self.get_color(Some(parent)));
                    self.set_color(Some(parent), Color::Black);
                    self.set_color(self.get_right(sibling), Color::Black);
                    self.arena.rotate_left(parent);
                    fixup_node = self.arena.root();
                    fixup_parent = None;
                }
            } else {
                let mut sibling = self.arena.left(parent);

                if self.is_red(sibling) {
                    self.set_color(sibling, Color::Black);
                    self.set_color(Some(parent), Color::Red);
                    self.arena.rotate_right(parent);
                    sibling = self.arena.left(parent);
                }

                if self.is_black(self.get_right(sibling)) && self.is_black(self.get_left(sibling)) {
                    self.set_color(sibling, Color::Red);
                    fixup_node = Some(parent);
                    fixup_parent = self.arena.parent(parent);
                } else {
                    if self.is_black(self.get_left(sibling)) {
                        self.set_color(self.get_right(sibling), Color::Black);
                        self.set_color(sibling, Color::Red);
                        if let Some(s) = sibling {
                            self.arena.rotate_left(s);
                        }
                        sibling = self.arena.left(parent);
                    }

                    self.set_color(sibling, self.get_color(Some(parent)));
                    self.set_color(Some(parent), Color::Black);
                    self.set_color(self.get_left(sibling), Color::Black);
                    self.arena.rotate_right(parent);
                    fixup_node = self.arena.root();
                    fixup_parent = None;
                }
            }
        }

        self.set_color(fixup_node, Color::Black);
    }

    fn verify_black_height(&self, node: Option<NodeId>) -> Option<usize> {
        let Some(id) = node else {
            return Some(0);
        };

        let links = self.arena.node(id).links;

        if self.is_red(node) && (self.is_red(links.left) || self.is_red(links.right)) {
            return None;
        }

        let left_height = self.verify_black_height(links.left)?;
        let right_height = self.verify_black_height(links.right)?;

        if left_height != right_height {
            return None;
        }

        if self.is_black(node) {
            Some(left_height + 1)
        } else {
            Some(left_height)
        }
    }
}


#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::all)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn invariants_hold_after_inserts(values in proptest::collection::vec(-200_i32..200, 1..120)) {
            let mut tree = RedBlackTree::new(values[0]);
            for &v in &values[1..] {
                tree.insert(v);
                prop_assert!(tree.is_valid());
            }

            let mut expected = values.clone();
            expected.sort();
            let in_order: Vec<i32> = tree.in_order().into_iter().copied().collect();
            prop_assert_eq!(in_order, expected);

            let root = tree.root().unwrap();
            prop_assert_eq!(tree.color(root), Some(Color::Black));
        }

        #[test]
        fn invariants_hold_after_removals(
            values in proptest::collection::vec(-50_i32..50, 1..80),
            removals in proptest::collection::vec(-50_i32..50, 0..80),
        ) {
            let mut tree = RedBlackTree::new(values[0]);
            let mut model = vec![values[0]];
            for &v in &values[1..] {
                tree.insert(v);
                model.push(v);
            }

            for v in removals {
                let expected = model.iter().position(|&m| m == v).map(|i| model.swap_remove(i));
                prop_assert_eq!(tree.remove(&v), expected);
                prop_assert!(tree.is_valid());
            }

            model.sort();
            let in_order: Vec<i32> = tree.in_order().into_iter().copied().collect();
            prop_assert_eq!(in_order, model);
        }
    }
}
