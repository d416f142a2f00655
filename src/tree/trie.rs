use alloc::{string::String, vec::Vec};

use super::arena::NodeId;
use crate::{Error, Result};

#[derive(Debug, Clone, Default)]
struct TrieNode {
    is_end: bool,
    parent: Option<NodeId>,
    /// Outgoing edges in insertion order
    edges: Vec<(char, NodeId)>,
}

/// # Trie
///
/// Prefix tree over the characters of stored strings. Lookup costs O(k) edge
/// scans for a key of `k` characters, independent of how many keys are stored.
///
/// Removing a word only clears its end-of-word mark; the path stays in place
/// so handles returned by [`Trie::insert`] remain valid.
///
/// ```
/// use classic_dsa::Trie;
///
/// let mut trie = Trie::new();
/// let foo = trie.insert("foo");
/// trie.insert("foobar");
///
/// assert!(trie.contains("foo"));
/// trie.remove("foo").unwrap();
/// assert!(!trie.contains("foo"));
/// assert!(!trie.is_word(foo));
/// assert!(trie.contains("foobar"));
/// ```
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    words: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Creates a trie holding only its root
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            words: 0,
        }
    }

    /// Returns the number of strings marked as words
    #[inline]
    pub const fn len(&self) -> usize {
        self.words
    }

    /// Returns true if no string is marked as a word
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Returns the root handle, the node of the empty string
    #[inline]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Returns the parent of `id`, `None` for the root or an unknown handle
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0)?.parent
    }

    /// Returns true if the path ending at `id` is marked as a word
    pub fn is_word(&self, id: NodeId) -> bool {
        self.nodes.get(id.0).is_some_and(|node| node.is_end)
    }

    /// Inserts `word`, creating missing nodes along its path
    ///
    /// # Returns
    ///
    /// * `NodeId` - Handle of the node where `word` ends
    pub fn insert(&mut self, word: &str) -> NodeId {
        let mut current = self.root();
        for ch in word.chars() {
            current = match self.child(current, ch) {
                Some(next) => next,
                None => {
                    let next = NodeId(self.nodes.len());
                    self.nodes.push(TrieNode {
                        parent: Some(current),
                        ..TrieNode::default()
                    });
                    self.nodes[current.0].edges.push((ch, next));
                    next
                }
            };
        }

        let node = &mut self.nodes[current.0];
        if !node.is_end {
            node.is_end = true;
            self.words += 1;
        }
        current
    }

    /// Returns true if `word` was inserted and not removed since
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(|id| self.is_word(id))
    }

    /// Clears the end-of-word mark of `word`
    ///
    /// # Returns
    ///
    /// * `Result<()>` - [`Error::NotFound`] if no path spells `word`,
    ///   [`Error::NotAWord`] if the path exists but is not marked
    pub fn remove(&mut self, word: &str) -> Result<()> {
        let id = self.find(word).ok_or(Error::NotFound)?;
        let node = &mut self.nodes[id.0];
        if !node.is_end {
            return Err(Error::NotAWord);
        }
        node.is_end = false;
        self.words -= 1;
        Ok(())
    }

    /// Returns every stored word that starts with `prefix`, in insertion order
    /// of the edges
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut out = Vec::new();
        let Some(start) = self.find(prefix) else {
            return out;
        };

        let mut stack = vec![(start, String::from(prefix))];
        while let Some((id, word)) = stack.pop() {
            let node = &self.nodes[id.0];
            for &(ch, child) in node.edges.iter().rev() {
                let mut next = word.clone();
                next.push(ch);
                stack.push((child, next));
            }
            if node.is_end {
                out.push(word);
            }
        }
        out
    }

    fn child(&self, id: NodeId, ch: char) -> Option<NodeId> {
        self.nodes[id.0]
            .edges
            .iter()
            .find(|&&(label, _)| label == ch)
            .map(|&(_, child)| child)
    }

    fn find(&self, word: &str) -> Option<NodeId> {
        word.chars()
            .try_fold(self.root(), |current, ch| self.child(current, ch))
    }
}
