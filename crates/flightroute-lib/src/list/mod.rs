//! Linked list collections.
//!
//! This module provides:
//! - [`List`] - The positional sequence contract shared by every variant
//! - [`SinglyLinkedList`] - Head-only chain; appends walk to the tail
//! - [`DoublyLinkedList`] - Head and tail with back links
//! - [`CircularDoublyLinkedList`] - Doubly linked ring (`tail.next == head`)
//! - [`CircularLinkedList`] - Singly linked ring tracked through its last node
//!
//! Positions are 1-based. On an empty list every query and removal fails with
//! [`Error::Empty`]; `size`, `is_empty`, `clear`, `iter` and the insertions
//! work on empty state.

mod circular;
mod circular_doubly;
mod doubly;
mod singly;

pub use crate::arena::Iter;
pub use circular::CircularLinkedList;
pub use circular_doubly::CircularDoublyLinkedList;
pub use doubly::DoublyLinkedList;
pub use singly::SinglyLinkedList;

use std::cmp::Ordering;

use crate::arena::{chain_ids, NodeArena, NodeId};
use crate::error::{Error, Result};

/// Ordered sequence with 1-based positional access.
///
/// Values are compared through their [`Ord`] implementation; "equal" always
/// means `cmp` returns [`Ordering::Equal`].
pub trait List<T: Ord> {
    /// Number of stored values.
    fn size(&self) -> usize;

    /// Drop every value.
    fn clear(&mut self);

    /// Iterate from the first to the last value.
    fn iter(&self) -> Iter<'_, T>;

    /// Insert in front of the current first value.
    fn add_first(&mut self, value: T);

    /// Insert after the current last value.
    fn add_last(&mut self, value: T);

    /// Insert before the first value that compares greater than `value`.
    fn add_in_sorted_list(&mut self, value: T);

    /// Unlink the first value equal to `value`.
    fn remove(&mut self, value: &T) -> Result<T>;

    fn remove_first(&mut self) -> Result<T>;

    fn remove_last(&mut self) -> Result<T>;

    fn get_last(&self) -> Result<&T>;

    /// Value stored before the first match of `value`.
    fn get_prev(&self, value: &T) -> Result<&T>;

    /// Value stored after the first match of `value`.
    fn get_next(&self, value: &T) -> Result<&T>;

    /// Selection sort in place, exchanging stored values rather than nodes.
    fn sort(&mut self) -> Result<()>;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Append `value`; identical to [`List::add_last`].
    fn add(&mut self, value: T) {
        self.add_last(value);
    }

    fn contains(&self, value: &T) -> Result<bool> {
        Ok(self.index_of(value)?.is_some())
    }

    /// 1-based position of the first match, `None` when absent.
    fn index_of(&self, value: &T) -> Result<Option<usize>> {
        if self.is_empty() {
            return Err(Error::empty("list"));
        }
        Ok(self
            .iter()
            .position(|item| item.cmp(value) == Ordering::Equal)
            .map(|index| index + 1))
    }

    fn get_first(&self) -> Result<&T> {
        self.iter().next().ok_or(Error::empty("list"))
    }

    /// Value at the 1-based `index`.
    fn get_node(&self, index: usize) -> Result<&T> {
        let len = self.size();
        if len == 0 {
            return Err(Error::empty("list"));
        }
        if index == 0 || index > len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        self.iter()
            .nth(index - 1)
            .ok_or(Error::IndexOutOfBounds { index, len })
    }

    /// Collect references to every value in order.
    fn to_vec(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

/// Neighbour lookups shared by the list variants. `wrap` treats the
/// sequence as a ring.
pub(crate) fn prev_of<'a, T: Ord>(
    mut iter: Iter<'a, T>,
    value: &T,
    wrap: bool,
) -> Result<&'a T> {
    let first = iter.next().ok_or(Error::empty("list"))?;
    if first.cmp(value) == Ordering::Equal {
        if !wrap {
            return Err(Error::not_found("predecessor of first value"));
        }
        return Ok(iter.last().unwrap_or(first));
    }
    let mut previous = first;
    for item in iter {
        if item.cmp(value) == Ordering::Equal {
            return Ok(previous);
        }
        previous = item;
    }
    Err(Error::not_found("value"))
}

pub(crate) fn next_of<'a, T: Ord>(
    mut iter: Iter<'a, T>,
    value: &T,
    wrap: bool,
) -> Result<&'a T> {
    let first = iter.next().ok_or(Error::empty("list"))?;
    let mut current = first;
    loop {
        let following = iter.next();
        if current.cmp(value) == Ordering::Equal {
            return match following {
                Some(item) => Ok(item),
                None if wrap => Ok(first),
                None => Err(Error::not_found("successor of last value")),
            };
        }
        match following {
            Some(item) => current = item,
            None => return Err(Error::not_found("value")),
        }
    }
}

pub(crate) fn selection_sort<T: Ord>(arena: &mut NodeArena<T>, head: Option<NodeId>, len: usize) {
    let ids = chain_ids(arena, head, len);
    for i in 0..ids.len() {
        let mut smallest = i;
        for j in (i + 1)..ids.len() {
            if arena.value(ids[j]) < arena.value(ids[smallest]) {
                smallest = j;
            }
        }
        arena.swap_values(ids[i], ids[smallest]);
    }
}
