//! Binary trees.
//!
//! This module provides:
//! - [`BinaryNode`] - Node shape shared by every tree (boxed children, cached height)
//! - [`Tree`] - Structural queries and traversals common to both trees
//! - [`AvlTree`] - Self-balancing binary search tree
//! - [`BinaryTree`] - Unordered tree that grows at random leaf positions
//!
//! Heights count edges: a leaf has height 0 and an empty subtree height -1.
//! Every query except `add`, `clear`, `len` and `is_empty` fails with
//! [`Error::Empty`] on an empty tree.

mod avl;
mod binary;

pub use avl::{AvlTree, Rotation};
pub use binary::BinaryTree;

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};

pub(crate) type Link<T> = Option<Box<BinaryNode<T>>>;

/// Tree node owning its children.
#[derive(Debug)]
pub struct BinaryNode<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    pub(crate) height: i32,
}

impl<T> BinaryNode<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 0,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn left(&self) -> Option<&BinaryNode<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&BinaryNode<T>> {
        self.right.as_deref()
    }

    /// Edges on the longest downward path from this node.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// `height(left) - height(right)`.
    pub fn balance_factor(&self) -> i32 {
        link_height(&self.left) - link_height(&self.right)
    }

    pub(crate) fn update_height(&mut self) {
        self.height = 1 + link_height(&self.left).max(link_height(&self.right));
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }
}

pub(crate) fn link_height<T>(link: &Link<T>) -> i32 {
    link.as_ref().map_or(-1, |node| node.height)
}

/// Depth-first visiting orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    PreOrder,
    InOrder,
    PostOrder,
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Traversal::PreOrder => "pre-order",
            Traversal::InOrder => "in-order",
            Traversal::PostOrder => "post-order",
        };
        f.write_str(value)
    }
}

/// Left and right children of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Children<'a, T> {
    pub left: Option<&'a T>,
    pub right: Option<&'a T>,
}

/// Query surface shared by the tree implementations.
///
/// Implementors decide how values are placed and located; everything else
/// is derived from [`Tree::root`] and [`Tree::path_to`].
pub trait Tree<T: Ord> {
    fn root(&self) -> Option<&BinaryNode<T>>;

    fn len(&self) -> usize;

    /// Insert `value`; returns `false` when the tree rejected it.
    fn add(&mut self, value: T) -> bool;

    fn remove(&mut self, value: &T) -> Result<T>;

    fn clear(&mut self);

    /// Nodes from the root down to the node holding `value`, or `None`.
    fn path_to(&self, value: &T) -> Option<Vec<&BinaryNode<T>>>;

    fn is_empty(&self) -> bool {
        self.root().is_none()
    }

    fn contains(&self, value: &T) -> Result<bool> {
        non_empty(self.root())?;
        Ok(self.path_to(value).is_some())
    }

    fn min(&self) -> Result<&T> {
        non_empty(self.root())?;
        self.in_order()?
            .into_iter()
            .min()
            .ok_or(Error::empty("tree"))
    }

    fn max(&self) -> Result<&T> {
        non_empty(self.root())?;
        self.in_order()?
            .into_iter()
            .max()
            .ok_or(Error::empty("tree"))
    }

    /// Edges from the root to the deepest leaf.
    fn height(&self) -> Result<usize> {
        let root = non_empty(self.root())?;
        Ok(root.height.max(0) as usize)
    }

    /// Depth of `value`, 0 at the root.
    fn depth(&self, value: &T) -> Result<usize> {
        Ok(self.locate(value)?.len() - 1)
    }

    /// Value stored in the parent of `value`'s node.
    fn father(&self, value: &T) -> Result<&T> {
        let path = self.locate(value)?;
        match path.len() {
            0 | 1 => Err(Error::not_found("father of root")),
            n => Ok(&path[n - 2].value),
        }
    }

    /// Value stored in the other child of `value`'s parent.
    fn brother(&self, value: &T) -> Result<&T> {
        let path = self.locate(value)?;
        if path.len() < 2 {
            return Err(Error::not_found("brother of root"));
        }
        let node = path[path.len() - 1];
        let father = path[path.len() - 2];
        let sibling = match father.left() {
            Some(left) if std::ptr::eq(left, node) => father.right(),
            _ => father.left(),
        };
        sibling
            .map(|sibling| &sibling.value)
            .ok_or_else(|| Error::not_found("brother"))
    }

    fn children(&self, value: &T) -> Result<Children<'_, T>> {
        let path = self.locate(value)?;
        let node = path[path.len() - 1];
        Ok(Children {
            left: node.left().map(BinaryNode::value),
            right: node.right().map(BinaryNode::value),
        })
    }

    /// Values in the requested order, recomputed on every call.
    fn traverse(&self, order: Traversal) -> Result<Vec<&T>> {
        let root = non_empty(self.root())?;
        let mut out = Vec::new();
        collect(root, order, &mut out);
        Ok(out)
    }

    fn pre_order(&self) -> Result<Vec<&T>> {
        self.traverse(Traversal::PreOrder)
    }

    fn in_order(&self) -> Result<Vec<&T>> {
        self.traverse(Traversal::InOrder)
    }

    fn post_order(&self) -> Result<Vec<&T>> {
        self.traverse(Traversal::PostOrder)
    }

    /// Traversal rendered as `"a, b, c"`.
    fn format_traversal(&self, order: Traversal) -> Result<String>
    where
        T: fmt::Display,
    {
        Ok(self
            .traverse(order)?
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(", "))
    }

    #[doc(hidden)]
    fn locate(&self, value: &T) -> Result<Vec<&BinaryNode<T>>> {
        non_empty(self.root())?;
        self.path_to(value)
            .ok_or_else(|| Error::not_found("value in tree"))
    }
}

fn non_empty<T>(root: Option<&BinaryNode<T>>) -> Result<&BinaryNode<T>> {
    root.ok_or(Error::empty("tree"))
}

fn collect<'a, T>(node: &'a BinaryNode<T>, order: Traversal, out: &mut Vec<&'a T>) {
    if order == Traversal::PreOrder {
        out.push(&node.value);
    }
    if let Some(left) = node.left() {
        collect(left, order, out);
    }
    if order == Traversal::InOrder {
        out.push(&node.value);
    }
    if let Some(right) = node.right() {
        collect(right, order, out);
    }
    if order == Traversal::PostOrder {
        out.push(&node.value);
    }
}

/// Root-to-node path following comparisons, for ordered trees.
pub(crate) fn ordered_path<'a, T: Ord>(
    root: Option<&'a BinaryNode<T>>,
    mut probe: impl FnMut(&T) -> Ordering,
) -> Option<Vec<&'a BinaryNode<T>>> {
    let mut path = Vec::new();
    let mut cursor = root;
    while let Some(node) = cursor {
        path.push(node);
        cursor = match probe(&node.value) {
            Ordering::Equal => return Some(path),
            Ordering::Less => node.left(),
            Ordering::Greater => node.right(),
        };
    }
    None
}

/// Root-to-node path found by searching both subtrees, for unordered trees.
pub(crate) fn exhaustive_path<'a, T: PartialEq>(
    root: Option<&'a BinaryNode<T>>,
    value: &T,
) -> Option<Vec<&'a BinaryNode<T>>> {
    fn search<'a, T: PartialEq>(
        node: &'a BinaryNode<T>,
        value: &T,
        path: &mut Vec<&'a BinaryNode<T>>,
    ) -> bool {
        path.push(node);
        if node.value == *value {
            return true;
        }
        for child in [node.left(), node.right()].into_iter().flatten() {
            if search(child, value, path) {
                return true;
            }
        }
        path.pop();
        false
    }

    let mut path = Vec::new();
    search(root?, value, &mut path).then_some(path)
}
