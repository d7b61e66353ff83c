//! Slot storage for linked nodes.
//!
//! Linked lists and queues address their nodes through [`NodeId`] handles into
//! a [`NodeArena`] instead of owning pointers. Links in either direction are
//! plain indices, so circular and doubly linked shapes need no shared
//! ownership. Removed slots are recycled through a free list.

/// Handle to a node stored in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

/// A list node. Singly linked structures leave `prev` unset.
#[derive(Debug)]
pub(crate) struct ListNode<T> {
    pub(crate) value: T,
    pub(crate) next: Option<NodeId>,
    pub(crate) prev: Option<NodeId>,
}

impl<T> ListNode<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            next: None,
            prev: None,
        }
    }
}

#[derive(Debug)]
pub(crate) struct NodeArena<T> {
    slots: Vec<Option<ListNode<T>>>,
    free: Vec<usize>,
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }
}

impl<T> NodeArena<T> {
    /// Store a detached node holding `value`.
    pub(crate) fn alloc(&mut self, value: T) -> NodeId {
        let node = ListNode::new(value);
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

    /// Drop the node out of the arena and hand back its value.
    ///
    /// Callers unlink the node first; a stale handle is a logic error.
    pub(crate) fn release(&mut self, id: NodeId) -> T {
        let node = self.slots[id.0]
            .take()
            .unwrap_or_else(|| panic!("stale node handle {id:?}"));
        self.free.push(id.0);
        node.value
    }

    pub(crate) fn node(&self, id: NodeId) -> &ListNode<T> {
        self.slots[id.0]
            .as_ref()
            .unwrap_or_else(|| panic!("stale node handle {id:?}"))
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut ListNode<T> {
        self.slots[id.0]
            .as_mut()
            .unwrap_or_else(|| panic!("stale node handle {id:?}"))
    }

    pub(crate) fn value(&self, id: NodeId) -> &T {
        &self.node(id).value
    }

    pub(crate) fn next(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next
    }

    pub(crate) fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).prev
    }

    pub(crate) fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        self.node_mut(id).next = next;
    }

    pub(crate) fn set_prev(&mut self, id: NodeId, prev: Option<NodeId>) {
        self.node_mut(id).prev = prev;
    }

    /// Exchange the values held by two nodes, leaving the links untouched.
    pub(crate) fn swap_values(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }
        let (low, high) = if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) };
        let (head, tail) = self.slots.split_at_mut(high);
        match (head[low].as_mut(), tail[0].as_mut()) {
            (Some(x), Some(y)) => std::mem::swap(&mut x.value, &mut y.value),
            _ => panic!("stale node handle in swap"),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    /// Number of live nodes.
    #[cfg(test)]
    pub(crate) fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}

/// Borrowing iterator that follows `next` links for a fixed number of steps.
///
/// The step bound makes the same iterator usable for linear and circular chains.
pub struct Iter<'a, T> {
    arena: &'a NodeArena<T>,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(arena: &'a NodeArena<T>, start: Option<NodeId>, len: usize) -> Self {
        Self {
            arena,
            cursor: start,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.cursor?;
        let node = self.arena.node(id);
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Walk `len` node handles starting at `start`.
pub(crate) fn chain_ids<T>(arena: &NodeArena<T>, start: Option<NodeId>, len: usize) -> Vec<NodeId> {
    let mut ids = Vec::with_capacity(len);
    let mut cursor = start;
    while ids.len() < len {
        let Some(id) = cursor else { break };
        ids.push(id);
        cursor = arena.next(id);
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn released_slots_are_reused() {
        let mut arena = NodeArena::default();
        let a = arena.alloc("a");
        let b = arena.alloc("b");
        assert_eq!(arena.release(a), "a");
        let c = arena.alloc("c");
        assert_eq!(c, a);
        assert_eq!(*arena.value(b), "b");
        assert_eq!(arena.live(), 2);
    }

    #[test]
    fn swap_values_keeps_links() {
        let mut arena = NodeArena::default();
        let a = arena.alloc(1);
        let b = arena.alloc(2);
        arena.set_next(a, Some(b));
        arena.swap_values(b, a);
        assert_eq!(*arena.value(a), 2);
        assert_eq!(*arena.value(b), 1);
        assert_eq!(arena.next(a), Some(b));
    }
}
