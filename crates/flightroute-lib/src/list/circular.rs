use std::fmt;

use crate::arena::{Iter, NodeArena, NodeId};
use crate::error::{Error, Result};

use super::{next_of, prev_of, selection_sort, List};

/// Singly linked ring addressed through its last node; the head is `last.next`.
pub struct CircularLinkedList<T> {
    nodes: NodeArena<T>,
    last: Option<NodeId>,
    len: usize,
}

impl<T> CircularLinkedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::default(),
            last: None,
            len: 0,
        }
    }

    fn head(&self) -> Option<NodeId> {
        self.last.and_then(|last| self.nodes.next(last))
    }

    /// First node satisfying `matches`, paired with its predecessor in the ring.
    fn find(&self, mut matches: impl FnMut(&T) -> bool) -> Option<(NodeId, NodeId)> {
        let last = self.last?;
        let mut previous = last;
        for _ in 0..self.len {
            let current = self.nodes.next(previous)?;
            if matches(self.nodes.value(current)) {
                return Some((previous, current));
            }
            previous = current;
        }
        None
    }

    /// Link a new node after `previous`; `None` starts a fresh ring.
    fn insert_after(&mut self, previous: Option<NodeId>, value: T) -> NodeId {
        let id = self.nodes.alloc(value);
        match previous {
            Some(prev) => {
                let next = self.nodes.next(prev);
                self.nodes.set_next(id, next);
                self.nodes.set_next(prev, Some(id));
            }
            None => {
                self.nodes.set_next(id, Some(id));
                self.last = Some(id);
            }
        }
        self.len += 1;
        id
    }

    fn unlink(&mut self, previous: NodeId, id: NodeId) -> T {
        if self.len == 1 {
            self.last = None;
        } else {
            let next = self.nodes.next(id);
            self.nodes.set_next(previous, next);
            if self.last == Some(id) {
                self.last = Some(previous);
            }
        }
        self.len -= 1;
        self.nodes.release(id)
    }
}

impl<T: Ord> List<T> for CircularLinkedList<T> {
    fn size(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.last = None;
        self.len = 0;
    }

    fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.head(), self.len)
    }

    fn add_first(&mut self, value: T) {
        // Splicing after the last node makes the new node the head.
        self.insert_after(self.last, value);
    }

    fn add_last(&mut self, value: T) {
        let id = self.insert_after(self.last, value);
        self.last = Some(id);
    }

    fn add_in_sorted_list(&mut self, value: T) {
        match self.find(|item| *item > value) {
            Some((previous, _)) => {
                self.insert_after(Some(previous), value);
            }
            None => self.add_last(value),
        }
    }

    fn remove(&mut self, value: &T) -> Result<T> {
        if self.len == 0 {
            return Err(Error::empty("list"));
        }
        let (previous, id) = self
            .find(|item| item == value)
            .ok_or_else(|| Error::not_found("value"))?;
        Ok(self.unlink(previous, id))
    }

    fn remove_first(&mut self) -> Result<T> {
        let last = self.last.ok_or(Error::empty("list"))?;
        let head = self.nodes.next(last).unwrap_or(last);
        Ok(self.unlink(last, head))
    }

    fn remove_last(&mut self) -> Result<T> {
        let last = self.last.ok_or(Error::empty("list"))?;
        let mut previous = last;
        while self.nodes.next(previous) != Some(last) {
            previous = self.nodes.next(previous).unwrap_or(last);
        }
        Ok(self.unlink(previous, last))
    }

    fn get_last(&self) -> Result<&T> {
        let last = self.last.ok_or(Error::empty("list"))?;
        Ok(self.nodes.value(last))
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
        let head = self.head();
        selection_sort(&mut self.nodes, head, self.len);
        Ok(())
    }
}

impl<T> Default for CircularLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(Iter::new(&self.nodes, self.head(), self.len))
            .finish()
    }
}

impl<T: Ord> Extend<T> for CircularLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_last(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for CircularLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T: Ord> IntoIterator for &'a CircularLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
