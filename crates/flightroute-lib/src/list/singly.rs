use std::fmt;

use crate::arena::{Iter, NodeArena, NodeId};
use crate::error::{Error, Result};

use super::{next_of, prev_of, selection_sort, List};

/// Singly linked list holding only a head reference.
///
/// Prepending is O(1); appending and every tail access walk the chain.
pub struct SinglyLinkedList<T> {
    nodes: NodeArena<T>,
    head: Option<NodeId>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::default(),
            head: None,
            len: 0,
        }
    }

    fn tail(&self) -> Option<NodeId> {
        let mut cursor = self.head?;
        while let Some(next) = self.nodes.next(cursor) {
            cursor = next;
        }
        Some(cursor)
    }

    /// First node satisfying `matches`, paired with its predecessor.
    fn find(&self, mut matches: impl FnMut(&T) -> bool) -> Option<(Option<NodeId>, NodeId)> {
        let mut previous = None;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            if matches(self.nodes.value(id)) {
                return Some((previous, id));
            }
            previous = Some(id);
            cursor = self.nodes.next(id);
        }
        None
    }

    fn insert_after(&mut self, previous: Option<NodeId>, value: T) -> NodeId {
        let id = self.nodes.alloc(value);
        match previous {
            Some(prev) => {
                let next = self.nodes.next(prev);
                self.nodes.set_next(id, next);
                self.nodes.set_next(prev, Some(id));
            }
            None => {
                self.nodes.set_next(id, self.head);
                self.head = Some(id);
            }
        }
        self.len += 1;
        id
    }

    fn unlink(&mut self, previous: Option<NodeId>, id: NodeId) -> T {
        let next = self.nodes.next(id);
        match previous {
            Some(prev) => self.nodes.set_next(prev, next),
            None => self.head = next,
        }
        self.len -= 1;
        self.nodes.release(id)
    }

    /// Unlink and return the first value satisfying `matches`.
    pub fn remove_by(&mut self, matches: impl FnMut(&T) -> bool) -> Option<T> {
        let (previous, id) = self.find(matches)?;
        Some(self.unlink(previous, id))
    }

    /// Mutable access to the first value satisfying `matches`.
    pub fn find_mut(&mut self, matches: impl FnMut(&T) -> bool) -> Option<&mut T> {
        let (_, id) = self.find(matches)?;
        Some(&mut self.nodes.node_mut(id).value)
    }
}

impl<T: Ord> List<T> for SinglyLinkedList<T> {
    fn size(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.len = 0;
    }

    fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.head, self.len)
    }

    fn add_first(&mut self, value: T) {
        self.insert_after(None, value);
    }

    fn add_last(&mut self, value: T) {
        let tail = self.tail();
        self.insert_after(tail, value);
    }

    fn add_in_sorted_list(&mut self, value: T) {
        let previous = match self.find(|item| *item > value) {
            Some((previous, _)) => previous,
            None => self.tail(),
        };
        self.insert_after(previous, value);
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
        let head = self.head.ok_or(Error::empty("list"))?;
        Ok(self.unlink(None, head))
    }

    fn remove_last(&mut self) -> Result<T> {
        let head = self.head.ok_or(Error::empty("list"))?;
        let mut previous = None;
        let mut cursor = head;
        while let Some(next) = self.nodes.next(cursor) {
            previous = Some(cursor);
            cursor = next;
        }
        Ok(self.unlink(previous, cursor))
    }

    fn get_last(&self) -> Result<&T> {
        let tail = self.tail().ok_or(Error::empty("list"))?;
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

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(Iter::new(&self.nodes, self.head, self.len))
            .finish()
    }
}

impl<T: Ord> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.tail();
        for value in iter {
            tail = Some(self.insert_after(tail, value));
        }
    }
}

impl<T: Ord> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T: Ord> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
