use std::fmt;

use crate::arena::{Iter, NodeArena, NodeId};
use crate::error::{Error, Result};

use super::{next_of, prev_of, selection_sort, List};

/// Doubly linked list with head and tail references.
///
/// `prev` links are only followed for traversal; each node is owned by the
/// list's arena.
pub struct DoublyLinkedList<T> {
    nodes: NodeArena<T>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::default(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Iterate from the last value back to the first.
    pub fn iter_rev(&self) -> impl Iterator<Item = &T> + '_ {
        let mut cursor = self.tail;
        std::iter::from_fn(move || {
            let id = cursor?;
            cursor = self.nodes.prev(id);
            Some(self.nodes.value(id))
        })
    }

    fn find(&self, mut matches: impl FnMut(&T) -> bool) -> Option<NodeId> {
        let mut cursor = self.head;
        while let Some(id) = cursor {
            if matches(self.nodes.value(id)) {
                return Some(id);
            }
            cursor = self.nodes.next(id);
        }
        None
    }

    /// Link a new node in front of `before`, or at the tail when `before` is `None`.
    fn insert_before(&mut self, before: Option<NodeId>, value: T) -> NodeId {
        let id = self.nodes.alloc(value);
        let after = match before {
            Some(next) => self.nodes.prev(next),
            None => self.tail,
        };
        self.nodes.set_prev(id, after);
        self.nodes.set_next(id, before);
        match after {
            Some(prev) => self.nodes.set_next(prev, Some(id)),
            None => self.head = Some(id),
        }
        match before {
            Some(next) => self.nodes.set_prev(next, Some(id)),
            None => self.tail = Some(id),
        }
        self.len += 1;
        id
    }

    fn unlink(&mut self, id: NodeId) -> T {
        let prev = self.nodes.prev(id);
        let next = self.nodes.next(id);
        match prev {
            Some(p) => self.nodes.set_next(p, next),
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes.set_prev(n, prev),
            None => self.tail = prev,
        }
        self.len -= 1;
        self.nodes.release(id)
    }
}

impl<T: Ord> List<T> for DoublyLinkedList<T> {
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
        prev_of(self.iter(), value, false)
    }

    fn get_next(&self, value: &T) -> Result<&T> {
        next_of(self.iter(), value, false)
    }

    fn sort(&mut self) -> Result<()> {
        if self.len == 0 {
            return Err(Error::empty("list"));
        }
        selection_sort(&mut self.nodes, self.head, self.len);
        Ok(())
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(Iter::new(&self.nodes, self.head, self.len))
            .finish()
    }
}

impl<T: Ord> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert_before(None, value);
        }
    }
}

impl<T: Ord> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T: Ord> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_links_mirror_forward_links() {
        let mut list: DoublyLinkedList<i32> = (1..=5).collect();
        list.remove(&3).unwrap();
        list.add_first(0);
        list.remove_last().unwrap();

        let forward: Vec<_> = list.iter().copied().collect();
        let mut backward: Vec<_> = list.iter_rev().copied().collect();
        backward.reverse();
        assert_eq!(forward, vec![0, 1, 2, 4]);
        assert_eq!(forward, backward);
    }
}
