//! LIFO stack over singly linked boxed nodes.

use std::fmt;

use crate::error::{Error, Result};

struct StackNode<T> {
    value: T,
    below: Option<Box<StackNode<T>>>,
}

/// Linked LIFO stack. The counter always equals the number of nodes.
pub struct LinkedStack<T> {
    top: Option<Box<StackNode<T>>>,
    len: usize,
}

impl<T> LinkedStack<T> {
    pub fn new() -> Self {
        Self { top: None, len: 0 }
    }

    pub fn size(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    pub fn push(&mut self, value: T) {
        let below = self.top.take();
        self.top = Some(Box::new(StackNode { value, below }));
        self.len += 1;
    }

    pub fn pop(&mut self) -> Result<T> {
        let node = self.top.take().ok_or(Error::empty("stack"))?;
        let StackNode { value, below } = *node;
        self.top = below;
        self.len -= 1;
        Ok(value)
    }

    pub fn peek(&self) -> Result<&T> {
        self.top
            .as_deref()
            .map(|node| &node.value)
            .ok_or(Error::empty("stack"))
    }

    /// Alias for [`LinkedStack::peek`].
    pub fn top(&self) -> Result<&T> {
        self.peek()
    }

    pub fn clear(&mut self) {
        let mut cursor = self.top.take();
        while let Some(mut node) = cursor {
            cursor = node.below.take();
        }
        self.len = 0;
    }

    /// Iterate from the top of the stack downwards.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let mut cursor = self.top.as_deref();
        std::iter::from_fn(move || {
            let node = cursor?;
            cursor = node.below.as_deref();
            Some(&node.value)
        })
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        // Unlink iteratively so long stacks do not recurse through Box drops.
        self.clear();
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for LinkedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}
