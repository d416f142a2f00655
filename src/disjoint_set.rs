use alloc::vec::Vec;

use crate::{Error, Result};

/// A member of a [`DisjointSet`]
///
/// A node is a root exactly when its parent is its own label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetNode {
    label: usize,
    rank: usize,
    parent: usize,
}

impl SetNode {
    const fn new(label: usize) -> Self {
        Self {
            label,
            rank: 0,
            parent: label,
        }
    }

    /// Returns the label of this node, in `1..=n`
    #[inline]
    pub const fn label(&self) -> usize {
        self.label
    }

    /// Returns the rank, an upper bound on the height of the subtree below this node
    #[inline]
    pub const fn rank(&self) -> usize {
        self.rank
    }

    /// Returns the label of the parent node
    #[inline]
    pub const fn parent(&self) -> usize {
        self.parent
    }

    /// Returns true if this node is the representative of its set
    #[inline]
    pub const fn is_root(&self) -> bool {
        self.parent == self.label
    }
}

/// # Disjoint-Set (Union-Find)
///
/// Maintains a partition of the labels `1..=n` into disjoint sets with
/// **path compression** during `find` and **union by rank** during `union`,
/// giving amortized O(α(n)) per operation.
///
/// ```
/// use classic_dsa::DisjointSet;
///
/// let mut sets = DisjointSet::new(5);
/// assert_eq!(sets.union(5, 3), Ok(5));
/// assert_eq!(sets.union(1, 2), Ok(1));
/// assert!(sets.connected(3, 5).unwrap());
/// assert!(!sets.connected(1, 3).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct DisjointSet {
    nodes: Vec<SetNode>,
    sets: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets labelled `1..=n`
    ///
    /// # Arguments
    ///
    /// * `n` - Number of nodes
    ///
    /// # Returns
    ///
    /// * `Self` - The disjoint-set forest
    pub fn new(n: usize) -> Self {
        Self {
            nodes: (1..=n).map(SetNode::new).collect(),
            sets: n,
        }
    }

    /// Returns the number of nodes
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the forest holds no nodes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of disjoint sets currently in the forest
    #[inline]
    pub const fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns the node carrying `label`
    ///
    /// # Arguments
    ///
    /// * `label` - A label in `1..=n`
    ///
    /// # Returns
    ///
    /// * `Result<&SetNode>` - The node, or [`Error::IndexOutOfRange`] if `label` is outside `1..=n`
    pub fn get(&self, label: usize) -> Result<&SetNode> {
        let slot = self.slot(label)?;
        Ok(&self.nodes[slot])
    }

    #[inline]
    fn slot(&self, label: usize) -> Result<usize> {
        if (1..=self.nodes.len()).contains(&label) {
            Ok(label - 1)
        } else {
            Err(Error::IndexOutOfRange {
                index: label,
                len: self.nodes.len(),
            })
        }
    }

    /// Finds the representative of the set containing `label`
    ///
    /// Every node visited on the way up is re-parented directly onto the root
    /// before returning.
    ///
    /// # Arguments
    ///
    /// * `label` - A label in `1..=n`
    ///
    /// # Returns
    ///
    /// * `Result<usize>` - The label of the root
    pub fn find(&mut self, label: usize) -> Result<usize> {
        let start = self.slot(label)?;

        let mut root = start;
        while !self.nodes[root].is_root() {
            root = self.nodes[root].parent - 1;
        }
        let root_label = self.nodes[root].label;

        let mut current = start;
        while current != root {
            let next = self.nodes[current].parent - 1;
            self.nodes[current].parent = root_label;
            current = next;
        }

        Ok(root_label)
    }

    /// Merges the sets containing `a` and `b`
    ///
    /// The root of lower rank is attached under the root of higher rank. On a
    /// tie the root of `b` goes under the root of `a`, whose rank grows by one.
    ///
    /// # Arguments
    ///
    /// * `a` - A label in `1..=n`
    /// * `b` - A label in `1..=n`
    ///
    /// # Returns
    ///
    /// * `Result<usize>` - The label of the root of the merged set
    pub fn union(&mut self, a: usize, b: usize) -> Result<usize> {
        let mut u = self.find(a)? - 1;
        let mut v = self.find(b)? - 1;

        if u == v {
            return Ok(self.nodes[u].label);
        }

        if self.nodes[v].rank > self.nodes[u].rank {
            core::mem::swap(&mut u, &mut v);
        }

        self.nodes[v].parent = self.nodes[u].label;
        if self.nodes[u].rank == self.nodes[v].rank {
            self.nodes[u].rank += 1;
        }
        self.sets -= 1;

        Ok(self.nodes[u].label)
    }

    /// Returns true if `a` and `b` belong to the same set
    pub fn connected(&mut self, a: usize, b: usize) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }
}
