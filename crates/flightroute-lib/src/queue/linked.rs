use std::fmt;

use crate::arena::{Iter, NodeArena, NodeId};
use crate::error::{Error, Result};

use super::Queue;

/// FIFO queue over a singly linked chain with front and rear references.
pub struct LinkedQueue<T> {
    nodes: NodeArena<T>,
    front: Option<NodeId>,
    rear: Option<NodeId>,
    len: usize,
}

impl<T> LinkedQueue<T> {
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::default(),
            front: None,
            rear: None,
            len: 0,
        }
    }

    /// Value at the rear of the queue.
    pub fn rear(&self) -> Result<&T> {
        let rear = self.rear.ok_or(Error::empty("queue"))?;
        Ok(self.nodes.value(rear))
    }
}

impl<T> Queue<T> for LinkedQueue<T> {
    fn size(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.front = None;
        self.rear = None;
        self.len = 0;
    }

    fn enqueue(&mut self, value: T) -> Result<()> {
        let id = self.nodes.alloc(value);
        match self.rear {
            Some(rear) => self.nodes.set_next(rear, Some(id)),
            None => self.front = Some(id),
        }
        self.rear = Some(id);
        self.len += 1;
        Ok(())
    }

    fn dequeue(&mut self) -> Result<T> {
        let front = self.front.ok_or(Error::empty("queue"))?;
        self.front = self.nodes.next(front);
        if self.front.is_none() {
            self.rear = None;
        }
        self.len -= 1;
        Ok(self.nodes.release(front))
    }

    fn peek(&self) -> Result<&T> {
        let front = self.front.ok_or(Error::empty("queue"))?;
        Ok(self.nodes.value(front))
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        Iter::new(&self.nodes, self.front, self.len)
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn dequeues_in_enqueue_order(values in proptest::collection::vec(any::<i64>(), 0..128)) {
            let mut queue = LinkedQueue::new();
            for value in &values {
                queue.enqueue(*value).unwrap();
            }
            prop_assert_eq!(queue.rear().ok().copied(), values.last().copied());
            let mut drained = Vec::new();
            while let Ok(value) = queue.dequeue() {
                drained.push(value);
            }
            prop_assert_eq!(drained, values);
        }
    }
}
