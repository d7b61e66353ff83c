use std::fmt;

use crate::error::{Error, Result};

use super::Queue;

/// Bounded FIFO queue backed by a fixed ring of slots.
pub struct ArrayQueue<T> {
    slots: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> ArrayQueue<T> {
    /// Build a queue holding at most `capacity` values.
    ///
    /// A zero capacity is rejected with [`Error::InvalidCapacity`].
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity {
                structure: "array queue",
            });
        }
        Ok(Self {
            slots: (0..capacity).map(|_| None).collect(),
            head: 0,
            len: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    fn slot(&self, offset: usize) -> usize {
        (self.head + offset) % self.slots.len()
    }
}

impl<T> Queue<T> for ArrayQueue<T> {
    fn size(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.head = 0;
        self.len = 0;
    }

    fn enqueue(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::Full {
                structure: "array queue",
                capacity: self.capacity(),
            });
        }
        let index = self.slot(self.len);
        self.slots[index] = Some(value);
        self.len += 1;
        Ok(())
    }

    fn dequeue(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(Error::empty("array queue"));
        }
        let value = self.slots[self.head]
            .take()
            .ok_or(Error::empty("array queue"))?;
        self.head = self.slot(1);
        self.len -= 1;
        Ok(value)
    }

    fn peek(&self) -> Result<&T> {
        if self.len == 0 {
            return Err(Error::empty("array queue"));
        }
        self.slots[self.head]
            .as_ref()
            .ok_or(Error::empty("array queue"))
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        (0..self.len).filter_map(move |offset| self.slots[self.slot(offset)].as_ref())
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
