use alloc::vec::Vec;
use core::cmp::Ordering;

/// Handle to a node stored inside a tree or list
///
/// Handles are only meaningful for the structure that returned them. Once a
/// node is removed its slot may be reused, so a stale handle can observe a
/// newer node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// Which child slot of a parent a node occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// Parent and child handles of a binary tree node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Links {
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

/// A node that can live in an [`Arena`]
pub(crate) trait TreeNode {
    type Value;

    fn value(&self) -> &Self::Value;
    fn into_value(self) -> Self::Value;
    fn links(&self) -> &Links;
    fn links_mut(&mut self) -> &mut Links;
}

/// Slot storage shared by the binary search tree and the red-black tree
///
/// Owns every node of one tree. Freed slots are recycled through a LIFO free
/// list, so removal never shifts the handles of surviving nodes.
#[derive(Debug, Clone)]
pub(crate) struct Arena<N> {
    slots: Vec<Option<N>>,
    free: Vec<usize>,
    root: Option<NodeId>,
    len: usize,
}

impl<N: TreeNode> Arena<N> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }

    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) const fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn alloc(&mut self, node: N) -> NodeId {
        self.len += 1;
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                NodeId(slot)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Frees the slot of a node that is already unlinked from the tree
    pub(crate) fn release(&mut self, id: NodeId) -> Option<N::Value> {
        let node = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        self.len -= 1;
        Some(node.into_value())
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> Option<&N> {
        self.slots.get(id.0)?.as_ref()
    }

    #[inline]
    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &N {
        match self.slots.get(id.0) {
            Some(Some(node)) => node,
            _ => panic!("dangling node handle {id:?}"),
        }
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut N {
        match self.slots.get_mut(id.0) {
            Some(Some(node)) => node,
            _ => panic!("dangling node handle {id:?}"),
        }
    }

    #[inline]
    pub(crate) fn value(&self, id: NodeId) -> &N::Value {
        self.node(id).value()
    }

    #[inline]
    pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).links().parent
    }

    #[inline]
    pub(crate) fn left(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).links().left
    }

    #[inline]
    pub(crate) fn right(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).links().right
    }

    #[inline]
    pub(crate) fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left(id),
            Side::Right => self.right(id),
        }
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, id: NodeId, parent: Option<NodeId>) {
        self.node_mut(id).links_mut().parent = parent;
    }

    #[inline]
    pub(crate) fn set_child(&mut self, id: NodeId, side: Side, child: Option<NodeId>) {
        let links = self.node_mut(id).links_mut();
        match side {
            Side::Left => links.left = child,
            Side::Right => links.right = child,
        }
    }

    /// Links `id` under `slot`, or makes it the root when `slot` is `None`
    pub(crate) fn attach(&mut self, id: NodeId, slot: Option<(NodeId, Side)>) {
        match slot {
            None => {
                self.set_parent(id, None);
                self.root = Some(id);
            }
            Some((parent, side)) => {
                self.set_parent(id, Some(parent));
                self.set_child(parent, side, Some(id));
            }
        }
    }

    /// Replaces the subtree rooted at `old` with the subtree rooted at `new`
    ///
    /// `old` keeps its own child links; only its parent slot is rewired.
    pub(crate) fn transplant(&mut self, old: NodeId, new: Option<NodeId>) {
        let parent = self.parent(old);
        match parent {
            None => self.root = new,
            Some(p) if self.left(p) == Some(old) => self.set_child(p, Side::Left, new),
            Some(p) => self.set_child(p, Side::Right, new),
        }
        if let Some(n) = new {
            self.set_parent(n, parent);
        }
    }

    /// Left rotation around `x`: its right child `y` takes `x`'s place and `x`
    /// becomes `y`'s left child. No-op if `x` has no right child.
    pub(crate) fn rotate_left(&mut self, x: NodeId) {
        let Some(y) = self.right(x) else {
            return;
        };

        let y_left = self.left(y);
        self.set_child(x, Side::Right, y_left);
        if let Some(b) = y_left {
            self.set_parent(b, Some(x));
        }

        self.transplant(x, Some(y));

        self.set_child(y, Side::Left, Some(x));
        self.set_parent(x, Some(y));
    }

    /// Right rotation around `y`: its left child `x` takes `y`'s place and `y`
    /// becomes `x`'s right child. No-op if `y` has no left child.
    pub(crate) fn rotate_right(&mut self, y: NodeId) {
        let Some(x) = self.left(y) else {
            return;
        };

        let x_right = self.right(x);
        self.set_child(y, Side::Left, x_right);
        if let Some(b) = x_right {
            self.set_parent(b, Some(y));
        }

        self.transplant(y, Some(x));

        self.set_child(x, Side::Right, Some(y));
        self.set_parent(y, Some(x));
    }

    pub(crate) fn minimum(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.left(id) {
            id = left;
        }
        id
    }

    pub(crate) fn maximum(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.right(id) {
            id = right;
        }
        id
    }

    /// Node ids in left, node, right order
    pub(crate) fn in_order(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        let mut current = self.root;

        while current.is_some() || !stack.is_empty() {
            while let Some(id) = current {
                stack.push(id);
                current = self.left(id);
            }
            if let Some(id) = stack.pop() {
                out.push(id);
                current = self.right(id);
            }
        }
        out
    }

    /// Node ids in node, left, right order
    pub(crate) fn pre_order(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();

        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.right(id));
            stack.extend(self.left(id));
        }
        out
    }

    /// Node ids in left, right, node order
    pub(crate) fn post_order(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();

        // node, right, left reversed
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.left(id));
            stack.extend(self.right(id));
        }
        out.reverse();
        out
    }
}

impl<N> Arena<N>
where
    N: TreeNode,
    N::Value: Ord,
{
    /// Descends by comparison to the slot where `value` would be attached
    ///
    /// Values equal to a node descend to its right. Returns `None` for an
    /// empty tree.
    pub(crate) fn insertion_slot(&self, value: &N::Value) -> Option<(NodeId, Side)> {
        let mut current = self.root?;
        loop {
            let side = if value < self.value(current) {
                Side::Left
            } else {
                Side::Right
            };
            match self.child(current, side) {
                Some(next) => current = next,
                None => return Some((current, side)),
            }
        }
    }

    pub(crate) fn search(&self, value: &N::Value) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            current = match value.cmp(self.value(id)) {
                Ordering::Equal => return Some(id),
                Ordering::Less => self.left(id),
                Ordering::Greater => self.right(id),
            };
        }
        None
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::all)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Plain {
        value: i32,
        links: Links,
    }

    impl TreeNode for Plain {
        type Value = i32;

        fn value(&self) -> &i32 {
            &self.value
        }
        fn into_value(self) -> i32 {
            self.value
        }
        fn links(&self) -> &Links {
            &self.links
        }
        fn links_mut(&mut self) -> &mut Links {
            &mut self.links
        }
    }

    fn build(values: &[i32]) -> Arena<Plain> {
        let mut arena = Arena::new();
        for &value in values {
            let slot = arena.insertion_slot(&value);
            let id = arena.alloc(Plain {
                value,
                links: Links::default(),
            });
            arena.attach(id, slot);
        }
        arena
    }

    fn values(arena: &Arena<Plain>, ids: Vec<NodeId>) -> Vec<i32> {
        ids.into_iter().map(|id| *arena.value(id)).collect()
    }

    #[test]
    fn test_traversals() {
        let arena = build(&[4, 2, 6, 1, 3, 5, 7]);

        assert_eq!(values(&arena, arena.in_order()), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(values(&arena, arena.pre_order()), vec![4, 2, 1, 3, 6, 5, 7]);
        assert_eq!(values(&arena, arena.post_order()), vec![1, 3, 2, 5, 7, 6, 4]);
    }

    #[test]
    fn test_rotations_preserve_order_and_root() {
        let mut arena = build(&[2, 1, 4, 3, 5]);
        let two = arena.root().unwrap();

        arena.rotate_left(two);
        let four = arena.root().unwrap();
        assert_eq!(*arena.value(four), 4);
        assert_eq!(arena.parent(four), None);
        assert_eq!(arena.left(four), Some(two));
        assert_eq!(arena.parent(two), Some(four));
        assert_eq!(*arena.value(arena.right(two).unwrap()), 3);
        assert_eq!(values(&arena, arena.in_order()), vec![1, 2, 3, 4, 5]);

        arena.rotate_right(four);
        assert_eq!(arena.root(), Some(two));
        assert_eq!(arena.parent(two), None);
        assert_eq!(values(&arena, arena.pre_order()), vec![2, 1, 4, 3, 5]);
    }

    #[test]
    fn test_rotation_without_child_is_noop() {
        let mut arena = build(&[1, 2]);
        let one = arena.root().unwrap();

        arena.rotate_right(one);
        assert_eq!(arena.root(), Some(one));
    }

    #[test]
    fn test_release_recycles_slots() {
        let mut arena = build(&[1]);
        let one = arena.root().unwrap();

        arena.transplant(one, None);
        assert_eq!(arena.release(one), Some(1));
        assert_eq!(arena.release(one), None);
        assert_eq!(arena.len(), 0);
        assert!(!arena.contains(one));

        let id = arena.alloc(Plain {
            value: 9,
            links: Links::default(),
        });
        assert_eq!(id, one);
    }

    #[test]
    fn test_search_and_extremes() {
        let arena = build(&[8, 3, 10, 1, 6, 14]);
        let root = arena.root().unwrap();

        assert_eq!(*arena.value(arena.search(&6).unwrap()), 6);
        assert!(arena.search(&7).is_none());
        assert_eq!(*arena.value(arena.minimum(root)), 1);
        assert_eq!(*arena.value(arena.maximum(root)), 14);
    }
}
