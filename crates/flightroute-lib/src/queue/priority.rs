use std::fmt;

use crate::arena::{Iter, NodeArena, NodeId};
use crate::error::{Error, Result};

/// Value stored with its explicit priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityEntry<T> {
    pub value: T,
    pub priority: i32,
}

/// Linked queue ordered by descending priority.
///
/// `enqueue` scans from the front and inserts before the first entry whose
/// priority is strictly lower, falling back to the rear. The front therefore
/// always holds the highest priority, and equal priorities leave in arrival
/// order. `dequeue` always takes the front.
pub struct PriorityLinkedQueue<T> {
    nodes: NodeArena<PriorityEntry<T>>,
    front: Option<NodeId>,
    rear: Option<NodeId>,
    len: usize,
}

impl<T> PriorityLinkedQueue<T> {
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::default(),
            front: None,
            rear: None,
            len: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.front = None;
        self.rear = None;
        self.len = 0;
    }

    pub fn enqueue(&mut self, value: T, priority: i32) {
        let id = self.nodes.alloc(PriorityEntry { value, priority });

        let mut previous = None;
        let mut cursor = self.front;
        while let Some(current) = cursor {
            if self.nodes.value(current).priority < priority {
                break;
            }
            previous = Some(current);
            cursor = self.nodes.next(current);
        }

        self.nodes.set_next(id, cursor);
        match previous {
            Some(prev) => self.nodes.set_next(prev, Some(id)),
            None => self.front = Some(id),
        }
        if cursor.is_none() {
            self.rear = Some(id);
        }
        self.len += 1;
    }

    /// Remove the front entry and return its value.
    pub fn dequeue(&mut self) -> Result<T> {
        self.dequeue_entry().map(|entry| entry.value)
    }

    /// Remove the front entry, keeping its priority.
    pub fn dequeue_entry(&mut self) -> Result<PriorityEntry<T>> {
        let front = self.front.ok_or(Error::empty("priority queue"))?;
        self.front = self.nodes.next(front);
        if self.front.is_none() {
            self.rear = None;
        }
        self.len -= 1;
        Ok(self.nodes.release(front))
    }

    pub fn peek(&self) -> Result<&T> {
        self.peek_entry().map(|entry| &entry.value)
    }

    /// Alias for [`PriorityLinkedQueue::peek`].
    pub fn front(&self) -> Result<&T> {
        self.peek()
    }

    pub fn peek_entry(&self) -> Result<&PriorityEntry<T>> {
        let front = self.front.ok_or(Error::empty("priority queue"))?;
        Ok(self.nodes.value(front))
    }

    /// Entry at the rear, i.e. the most recent among the lowest priorities.
    pub fn rear(&self) -> Result<&PriorityEntry<T>> {
        let rear = self.rear.ok_or(Error::empty("priority queue"))?;
        Ok(self.nodes.value(rear))
    }

    /// Iterate over entries in dequeue order.
    pub fn iter(&self) -> Iter<'_, PriorityEntry<T>> {
        Iter::new(&self.nodes, self.front, self.len)
    }

    pub fn contains(&self, value: &T) -> Result<bool>
    where
        T: PartialEq,
    {
        Ok(self.index_of(value)?.is_some())
    }

    /// 1-based position of the first entry holding `value`.
    pub fn index_of(&self, value: &T) -> Result<Option<usize>>
    where
        T: PartialEq,
    {
        if self.is_empty() {
            return Err(Error::empty("priority queue"));
        }
        Ok(self
            .iter()
            .position(|entry| entry.value == *value)
            .map(|index| index + 1))
    }
}

impl<T> Default for PriorityLinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for PriorityLinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|entry| (&entry.value, entry.priority)))
            .finish()
    }
}
