use std::fmt;

use crate::arena::{Iter, NodeArena, NodeId};
use crate::error::{Error, Result};

use super::Queue;

/// FIFO queue whose chain starts at a permanent dummy header node.
///
/// The header holds no value; the front is `header.next` and the rear is the
/// header itself while the queue is empty, so enqueue never special-cases the
/// empty state.
pub struct HeaderLinkedQueue<T> {
    nodes: NodeArena<Option<T>>,
    header: NodeId,
    rear: NodeId,
    len: usize,
}

impl<T> HeaderLinkedQueue<T> {
    pub fn new() -> Self {
        let mut nodes = NodeArena::default();
        let header = nodes.alloc(None);
        Self {
            nodes,
            header,
            rear: header,
            len: 0,
        }
    }

    fn front_id(&self) -> Option<NodeId> {
        self.nodes.next(self.header)
    }
}

impl<T> Queue<T> for HeaderLinkedQueue<T> {
    fn size(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.header = self.nodes.alloc(None);
        self.rear = self.header;
        self.len = 0;
    }

    fn enqueue(&mut self, value: T) -> Result<()> {
        let id = self.nodes.alloc(Some(value));
        self.nodes.set_next(self.rear, Some(id));
        self.rear = id;
        self.len += 1;
        Ok(())
    }

    fn dequeue(&mut self) -> Result<T> {
        let front = self.front_id().ok_or(Error::empty("queue"))?;
        let next = self.nodes.next(front);
        self.nodes.set_next(self.header, next);
        if self.rear == front {
            self.rear = self.header;
        }
        self.len -= 1;
        self.nodes
            .release(front)
            .ok_or_else(|| Error::not_found("value behind header"))
    }

    fn peek(&self) -> Result<&T> {
        self.front_id()
            .and_then(|front| self.nodes.value(front).as_ref())
            .ok_or(Error::empty("queue"))
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        Iter::new(&self.nodes, self.front_id(), self.len).filter_map(Option::as_ref)
    }
}

impl<T> Default for HeaderLinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for HeaderLinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
