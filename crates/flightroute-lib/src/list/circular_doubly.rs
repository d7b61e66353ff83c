use std::fmt;

use crate::arena::{chain_ids, Iter, NodeArena, NodeId};
use crate::error::{Error, Result};

use super::{next_of, prev_of, selection_sort, List};

/// Doubly linked ring: `tail.next == head` and `head.prev == tail` hold after
/// every mutation, including when a single node remains (it links to itself).
pub struct CircularDoublyLinkedList<T> {
    nodes: NodeArena<T>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> CircularDoublyLinkedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::default(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Whether the ring is closed. An empty list is trivially closed.
    pub fn is_ring_closed(&self) -> bool {
        match (self.head, self.tail) {
            (None, None) => self.len == 0,
            (Some(head), Some(tail)) => {
                self.nodes.next(tail) == Some(head) && self.nodes.prev(head) == Some(tail)
            }
            _ => false,
        }
    }

    /// Step `steps` nodes forward from the head, wrapping around the ring.
    ///
    /// Useful for rotating through a schedule; fails on an empty list.
    pub fn cycle_from_head(&self, steps: usize) -> Result<&T> {
        let head = self.head.ok_or(Error::empty("list"))?;
        let mut cursor = head;
        for _ in 0..(steps % self.len) {
            cursor = self.nodes.next(cursor).unwrap_or(head);
        }
        Ok(self.nodes.value(cursor))
    }

    fn find(&self, mut matches: impl FnMut(&T) -> bool) -> Option<NodeId> {
        chain_ids(&self.nodes, self.head, self.len)
            .into_iter()
            .find(|id| matches(self.nodes.value(*id)))
    }

    /// Link a new node in front of `before`, or after the tail when `before` is `None`.
    fn insert_before(&mut self, before: Option<NodeId>, value: T) {
        let id = self.nodes.alloc(value);
        let Some(head) = self.head else {
            self.nodes.set_next(id, Some(id));
            self.nodes.set_prev(id, Some(id));
            self.head = Some(id);
            self.tail = Some(id);
            self.len = 1;
            return;
        };

        let next = before.unwrap_or(head);
        let prev = self.nodes.prev(next).unwrap_or(next);
        self.nodes.set_prev(id, Some(prev));
        self.nodes.set_next(id, Some(next));
        self.nodes.set_next(prev, Some(id));
        self.nodes.set_prev(next, Some(id));

        match before {
            Some(target) if target == head => self.head = Some(id),
            Some(_) => {}
            None => self.tail = Some(id),
        }
        self.len += 1;
    }

    fn unlink(&mut self, id: NodeId) -> T {
        if self.len == 1 {
            self.head = None;
            self.tail = None;
        } else {
            let prev = self.nodes.prev(id).unwrap_or(id);
            let next = self.nodes.next(id).unwrap_or(id);
            self.nodes.set_next(prev, Some(next));
            self.nodes.set_prev(next, Some(prev));
            if self.head == Some(id) {
                self.head = Some(next);
            }
            if self.tail == Some(id) {
                self.tail = Some(prev);
            }
        }
        self.len -= 1;
        self.nodes.release(id)
    }
}

impl<T: Ord> List<T> for CircularDoublyLinkedList<T> {
    fn size(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.head, self.len)
    }

    fn add_first(&mut self, value: T) {
        self.insert_before(self.head, value);
    }

    fn add_last(&mut self, value: T) {
        self.insert_before(None, value);
    }

    fn add_in_sorted_list(&mut self, value: T) {
        let before = self.find(|item| *item > value);
        self.insert_before(before, value);
    }

    fn remove(&mut self, value: &T) -> Result<T> {
        if self.len == 0 {
            return Err(Error::empty("list"));
        }
        let id = self
            .find(|item| item == value)
            .ok_or_else(|| Error::not_found("value"))?;
        Ok(self.unlink(id))
    }

    fn remove_first(&mut self) -> Result<T> {
        let head = self.head.ok_or(Error::empty("list"))?;
        Ok(self.unlink(head))
    }

    fn remove_last(&mut self) -> Result<T> {
        let tail = self.tail.ok_or(Error::empty("list"))?;
        Ok(self.unlink(tail))
    }

    fn get_last(&self) -> Result<&T> {
        let tail = self.tail.ok_or(Error::empty("list"))?;
        Ok(self.nodes.value(tail))
    }

    fn get_prev(&self, value: &T) -> Result<&T> {
        prev_of(self.iter(), value, true)
    }

    fn get_next(&self, value: &T) -> Result<&T> {
        next_of(self.iter(), value, true)
    }

    fn sort(&mut self) -> Result<()> {
        if self.len == 0 {
            return Err(Error::empty("list"));
        }
        selection_sort(&mut self.nodes, self.head, self.len);
        Ok(())
    }
}

impl<T> Default for CircularDoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularDoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(Iter::new(&self.nodes, self.head, self.len))
            .finish()
    }
}

impl<T: Ord> Extend<T> for CircularDoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert_before(None, value);
        }
    }
}

impl<T: Ord> FromIterator<T> for CircularDoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T: Ord> IntoIterator for &'a CircularDoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn single_node_links_to_itself() {
        let mut list = CircularDoublyLinkedList::new();
        list.add(1);
        list.add(2);
        list.remove_first().unwrap();
        assert!(list.is_ring_closed());
        assert_eq!(*list.get_first().unwrap(), 2);
        assert_eq!(*list.get_last().unwrap(), 2);
        list.remove(&2).unwrap();
        assert!(list.is_ring_closed());
        assert!(list.is_empty());
    }

    #[test]
    fn cycle_from_head_wraps() {
        let list: CircularDoublyLinkedList<&str> =
            ["AA101", "BA202", "CX303"].into_iter().collect();
        assert_eq!(*list.cycle_from_head(0).unwrap(), "AA101");
        assert_eq!(*list.cycle_from_head(4).unwrap(), "BA202");
        let empty: CircularDoublyLinkedList<&str> = CircularDoublyLinkedList::new();
        assert!(empty.cycle_from_head(1).unwrap_err().is_empty_structure());
    }

    #[derive(Debug, Clone)]
    enum Op {
        AddFirst(u8),
        AddLast(u8),
        AddSorted(u8),
        Remove(u8),
        RemoveFirst,
        RemoveLast,
        Sort,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<u8>().prop_map(Op::AddFirst),
            any::<u8>().prop_map(Op::AddLast),
            any::<u8>().prop_map(Op::AddSorted),
            any::<u8>().prop_map(Op::Remove),
            Just(Op::RemoveFirst),
            Just(Op::RemoveLast),
            Just(Op::Sort),
        ]
    }

    proptest! {
        #[test]
        fn ring_stays_closed(ops in proptest::collection::vec(op_strategy(), 0..64)) {
            let mut list = CircularDoublyLinkedList::new();
            let mut model: Vec<u8> = Vec::new();
            for op in ops {
                match op {
                    Op::AddFirst(v) => { list.add_first(v); model.insert(0, v); }
                    Op::AddLast(v) => { list.add_last(v); model.push(v); }
                    Op::AddSorted(v) => {
                        list.add_in_sorted_list(v);
                        let at = model.iter().position(|x| *x > v).unwrap_or(model.len());
                        model.insert(at, v);
                    }
                    Op::Remove(v) => {
                        let removed = list.remove(&v).is_ok();
                        if let Some(at) = model.iter().position(|x| *x == v) {
                            model.remove(at);
                            prop_assert!(removed);
                        } else {
                            prop_assert!(!removed);
                        }
                    }
                    Op::RemoveFirst => {
                        let expected = (!model.is_empty()).then(|| model.remove(0));
                        prop_assert_eq!(list.remove_first().ok(), expected);
                    }
                    Op::RemoveLast => {
                        prop_assert_eq!(list.remove_last().ok(), model.pop());
                    }
                    Op::Sort => {
                        prop_assert_eq!(list.sort().is_ok(), !model.is_empty());
                        model.sort();
                    }
                }
                prop_assert!(list.is_ring_closed());
                prop_assert_eq!(list.size(), model.len());
                let values: Vec<u8> = list.iter().copied().collect();
                prop_assert_eq!(&values, &model);
            }
        }
    }
}
