//! Arena-backed doubly linked list.

use alloc::vec::Vec;
use core::fmt;

use crate::tree::NodeId;

#[derive(Debug, Clone)]
struct ListNode<T> {
    value: T,
    next: Option<NodeId>,
    previous: Option<NodeId>,
}

/// # Doubly Linked List
///
/// Elements are linked through `next` and `previous` handles instead of
/// living contiguously, so splicing next to a known node is O(1).
///
/// - Search: O(n)
/// - Insert next to a node: O(1)
/// - Remove a node: O(1)
///
/// Nodes are stored in slots owned by the list and addressed by [`NodeId`].
/// Freed slots are reused by later insertions.
///
/// ```
/// use classic_dsa::LinkedList;
///
/// let mut list = LinkedList::new(1);
/// let one = list.head().unwrap();
/// let two = list.insert_after(one, 2).unwrap();
/// list.insert_after(two, 3).unwrap();
/// assert_eq!(list.to_string(), "1 <=> 2 <=> 3");
///
/// list.remove(two);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct LinkedList<T> {
    slots: Vec<Option<ListNode<T>>>,
    free: Vec<usize>,
    head: Option<NodeId>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Creates a list holding a single head element
    pub fn new(head: T) -> Self {
        let mut list = Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            len: 0,
        };
        list.head = Some(list.alloc(ListNode {
            value: head,
            next: None,
            previous: None,
        }));
        list
    }

    /// Returns the number of linked nodes
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if every node has been removed
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the node iteration starts from
    #[inline]
    pub const fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// Moves the head to `node`
    ///
    /// Iteration and display start from the new head; nodes before it stay
    /// linked and counted.
    ///
    /// # Returns
    ///
    /// * `bool` - false if `node` is stale, leaving the head unchanged
    pub fn set_head(&mut self, node: NodeId) -> bool {
        if self.node(node).is_none() {
            return false;
        }
        self.head = Some(node);
        true
    }

    /// Returns the value stored at `node`
    pub fn get(&self, node: NodeId) -> Option<&T> {
        self.node(node).map(|n| &n.value)
    }

    /// Returns the node after `node`
    pub fn next(&self, node: NodeId) -> Option<NodeId> {
        self.node(node)?.next
    }

    /// Returns the node before `node`
    pub fn previous(&self, node: NodeId) -> Option<NodeId> {
        self.node(node)?.previous
    }

    /// Links a new node holding `value` directly after `node`
    ///
    /// # Returns
    ///
    /// * `Option<NodeId>` - Handle of the new node, `None` if `node` is stale
    pub fn insert_after(&mut self, node: NodeId, value: T) -> Option<NodeId> {
        let next = self.node(node)?.next;
        let new = self.alloc(ListNode {
            value,
            next,
            previous: Some(node),
        });

        self.set_next(node, Some(new));
        if let Some(next) = next {
            self.set_previous(next, Some(new));
        }
        Some(new)
    }

    /// Links a new node holding `value` directly before `node`
    ///
    /// Inserting before the head makes the new node the head.
    ///
    /// # Returns
    ///
    /// * `Option<NodeId>` - Handle of the new node, `None` if `node` is stale
    pub fn insert_before(&mut self, node: NodeId, value: T) -> Option<NodeId> {
        let previous = self.node(node)?.previous;
        let new = self.alloc(ListNode {
            value,
            next: Some(node),
            previous,
        });

        self.set_previous(node, Some(new));
        if let Some(previous) = previous {
            self.set_next(previous, Some(new));
        }
        if self.head == Some(node) {
            self.head = Some(new);
        }
        Some(new)
    }

    /// Unlinks `node` and returns its value
    ///
    /// Removing the head moves the head to its successor.
    ///
    /// # Returns
    ///
    /// * `Option<T>` - The removed value, `None` if `node` is stale
    pub fn remove(&mut self, node: NodeId) -> Option<T> {
        let removed = self.slots.get_mut(node.0)?.take()?;
        self.free.push(node.0);
        self.len -= 1;

        if let Some(previous) = removed.previous {
            self.set_next(previous, removed.next);
        }
        if let Some(next) = removed.next {
            self.set_previous(next, removed.previous);
        }
        if self.head == Some(node) {
            self.head = removed.next;
        }
        Some(removed.value)
    }

    /// Returns the first node from the head holding `value`
    pub fn search(&self, value: &T) -> Option<NodeId>
    where
        T: PartialEq,
    {
        let mut current = self.head;
        while let Some(id) = current {
            let node = self.node(id)?;
            if node.value == *value {
                return Some(id);
            }
            current = node.next;
        }
        None
    }

    /// Iterates values from the head following `next` links
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    fn alloc(&mut self, node: ListNode<T>) -> NodeId {
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

    #[inline]
    fn node(&self, id: NodeId) -> Option<&ListNode<T>> {
        self.slots.get(id.0)?.as_ref()
    }

    #[inline]
    fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        if let Some(Some(node)) = self.slots.get_mut(id.0) {
            node.next = next;
        }
    }

    #[inline]
    fn set_previous(&mut self, id: NodeId, previous: Option<NodeId>) {
        if let Some(Some(node)) = self.slots.get_mut(id.0) {
            node.previous = previous;
        }
    }
}

/// Iterator over the values of a [`LinkedList`], created by [`LinkedList::iter`]
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    current: Option<NodeId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.list.node(self.current?)?;
        self.current = node.next;
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" <=> ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
