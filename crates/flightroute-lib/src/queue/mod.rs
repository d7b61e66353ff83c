//! FIFO queues and a priority queue.
//!
//! This module provides:
//! - [`Queue`] - The FIFO contract (`enqueue`, `dequeue`, `peek`, scans)
//! - [`LinkedQueue`] - Front/rear chain of linked nodes
//! - [`HeaderLinkedQueue`] - Same contract with a permanent dummy header node
//! - [`ArrayQueue`] - Fixed-capacity ring buffer that rejects overflow
//! - [`PriorityLinkedQueue`] - Linked queue kept in descending priority order
//!
//! `contains` and `index_of` iterate without disturbing the queue order.

mod array;
mod header;
mod linked;
mod priority;

pub use array::ArrayQueue;
pub use header::HeaderLinkedQueue;
pub use linked::LinkedQueue;
pub use priority::{PriorityEntry, PriorityLinkedQueue};

use crate::error::{Error, Result};

/// First-in first-out queue.
pub trait Queue<T> {
    fn size(&self) -> usize;

    fn clear(&mut self);

    /// Append `value` at the rear.
    fn enqueue(&mut self, value: T) -> Result<()>;

    /// Remove and return the front value.
    fn dequeue(&mut self) -> Result<T>;

    fn peek(&self) -> Result<&T>;

    /// Iterate from front to rear.
    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Alias for [`Queue::peek`].
    fn front(&self) -> Result<&T> {
        self.peek()
    }

    fn contains(&self, value: &T) -> Result<bool>
    where
        T: PartialEq,
    {
        Ok(self.index_of(value)?.is_some())
    }

    /// 1-based distance of the first match from the front.
    fn index_of(&self, value: &T) -> Result<Option<usize>>
    where
        T: PartialEq,
    {
        if self.is_empty() {
            return Err(Error::empty("queue"));
        }
        Ok(self
            .iter()
            .position(|item| item == value)
            .map(|index| index + 1))
    }
}
