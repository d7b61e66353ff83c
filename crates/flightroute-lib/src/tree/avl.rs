use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use crate::error::{Error, Result};

use super::{link_height, ordered_path, BinaryNode, Link, Tree};

/// Rebalancing case applied at an unbalanced node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Left-left: single right rotation.
    LeftLeft,
    /// Right-right: single left rotation.
    RightRight,
    /// Left-right: left rotation on the left child, then right rotation.
    LeftRight,
    /// Right-left: right rotation on the right child, then left rotation.
    RightLeft,
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Rotation::LeftLeft => "LL",
            Rotation::RightRight => "RR",
            Rotation::LeftRight => "LR",
            Rotation::RightLeft => "RL",
        };
        f.write_str(value)
    }
}

/// Self-balancing binary search tree.
///
/// After every insertion or removal each node satisfies
/// `|height(left) - height(right)| <= 1`, and an in-order traversal yields the
/// values in ascending order. Duplicate values are ignored.
pub struct AvlTree<T> {
    root: Link<T>,
    len: usize,
}

/// Where an insertion went relative to the node it passed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Descent {
    Created,
    Duplicate,
    Left,
    Right,
}

impl<T: Ord> AvlTree<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Locate a value with a caller-supplied comparison against stored values.
    ///
    /// `probe` returns how the wanted key orders relative to the stored value.
    pub fn find_by(&self, probe: impl FnMut(&T) -> Ordering) -> Option<&T> {
        ordered_path(self.root.as_deref(), probe)
            .and_then(|path| path.last().copied())
            .map(BinaryNode::value)
    }

    /// Check the balance invariant, the cached heights and the ordering of every node.
    pub fn is_balanced(&self) -> bool {
        fn check<T: Ord>(
            node: Option<&BinaryNode<T>>,
            low: Option<&T>,
            high: Option<&T>,
        ) -> Option<i32> {
            let Some(node) = node else { return Some(-1) };
            if low.is_some_and(|low| node.value <= *low)
                || high.is_some_and(|high| node.value >= *high)
            {
                return None;
            }
            let left = check(node.left(), low, Some(&node.value))?;
            let right = check(node.right(), Some(&node.value), high)?;
            let height = 1 + left.max(right);
            ((left - right).abs() <= 1 && height == node.height).then_some(height)
        }
        check(self.root.as_deref(), None, None).is_some()
    }
}

impl<T: Ord> Tree<T> for AvlTree<T> {
    fn root(&self) -> Option<&BinaryNode<T>> {
        self.root.as_deref()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn add(&mut self, value: T) -> bool {
        let inserted = insert(&mut self.root, value) != Descent::Duplicate;
        if inserted {
            self.len += 1;
        }
        inserted
    }

    fn remove(&mut self, value: &T) -> Result<T> {
        if self.root.is_none() {
            return Err(Error::empty("tree"));
        }
        let removed =
            remove(&mut self.root, value).ok_or_else(|| Error::not_found("value in tree"))?;
        self.len -= 1;
        Ok(removed)
    }

    fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    fn path_to(&self, value: &T) -> Option<Vec<&BinaryNode<T>>> {
        ordered_path(self.root.as_deref(), |stored| value.cmp(stored))
    }

    fn min(&self) -> Result<&T> {
        let mut node = self.root.as_deref().ok_or(Error::empty("tree"))?;
        while let Some(left) = node.left() {
            node = left;
        }
        Ok(&node.value)
    }

    fn max(&self) -> Result<&T> {
        let mut node = self.root.as_deref().ok_or(Error::empty("tree"))?;
        while let Some(right) = node.right() {
            node = right;
        }
        Ok(&node.value)
    }
}

impl<T: Ord> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for AvlTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.in_order().unwrap_or_default())
            .finish()
    }
}

impl<T: Ord> Extend<T> for AvlTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

fn insert<T: Ord>(link: &mut Link<T>, value: T) -> Descent {
    let Some(node) = link.as_mut() else {
        *link = Some(Box::new(BinaryNode::new(value)));
        return Descent::Created;
    };

    let (side, below) = match value.cmp(&node.value) {
        Ordering::Equal => return Descent::Duplicate,
        Ordering::Less => (Descent::Left, insert(&mut node.left, value)),
        Ordering::Greater => (Descent::Right, insert(&mut node.right, value)),
    };
    if below == Descent::Duplicate {
        return Descent::Duplicate;
    }

    node.update_height();
    rebalance_after_insert(link, below);
    side
}

/// Insertion case selection: `below` records whether the new value went left
/// or right of the heavy child, which is the comparison of the inserted value
/// against that child's value.
fn rebalance_after_insert<T>(link: &mut Link<T>, below: Descent) {
    let Some(node) = link.as_mut() else { return };
    let balance = node.balance_factor();

    if balance > 1 {
        match below {
            Descent::Left => apply(link, Rotation::LeftLeft),
            Descent::Right => apply(link, Rotation::LeftRight),
            _ => {}
        }
    } else if balance < -1 {
        match below {
            Descent::Right => apply(link, Rotation::RightRight),
            Descent::Left => apply(link, Rotation::RightLeft),
            _ => {}
        }
    }
}

fn remove<T: Ord>(link: &mut Link<T>, value: &T) -> Option<T> {
    let node = link.as_mut()?;
    let removed = match value.cmp(&node.value) {
        Ordering::Less => remove(&mut node.left, value)?,
        Ordering::Greater => remove(&mut node.right, value)?,
        Ordering::Equal if node.left.is_some() && node.right.is_some() => {
            let successor = remove_min(&mut node.right)?;
            std::mem::replace(&mut node.value, successor)
        }
        Ordering::Equal => {
            let mut target = link.take()?;
            *link = target.left.take().or_else(|| target.right.take());
            target.into_value()
        }
    };
    rebalance_after_remove(link);
    Some(removed)
}

/// Detach the smallest value of the subtree, rebalancing on the way back up.
fn remove_min<T>(link: &mut Link<T>) -> Option<T> {
    let node = link.as_mut()?;
    if node.left.is_some() {
        let min = remove_min(&mut node.left);
        rebalance_after_remove(link);
        return min;
    }
    let mut target = link.take()?;
    *link = target.right.take();
    Some(target.into_value())
}

/// Removal case selection follows the sign of the heavy child's own balance
/// factor, since there is no inserted value to compare against.
fn rebalance_after_remove<T>(link: &mut Link<T>) {
    let Some(node) = link.as_mut() else { return };
    node.update_height();
    let balance = node.balance_factor();

    if balance > 1 {
        let child_balance = node.left.as_ref().map_or(0, |child| child.balance_factor());
        if child_balance >= 0 {
            apply(link, Rotation::LeftLeft);
        } else {
            apply(link, Rotation::LeftRight);
        }
    } else if balance < -1 {
        let child_balance = node.right.as_ref().map_or(0, |child| child.balance_factor());
        if child_balance <= 0 {
            apply(link, Rotation::RightRight);
        } else {
            apply(link, Rotation::RightLeft);
        }
    }
}

fn apply<T>(link: &mut Link<T>, rotation: Rotation) {
    let before = link_height(link);
    match rotation {
        Rotation::LeftLeft => {
            rotate_right(link);
        }
        Rotation::RightRight => {
            rotate_left(link);
        }
        Rotation::LeftRight => {
            if let Some(node) = link.as_mut() {
                rotate_left(&mut node.left);
            }
            rotate_right(link);
        }
        Rotation::RightLeft => {
            if let Some(node) = link.as_mut() {
                rotate_right(&mut node.right);
            }
            rotate_left(link);
        }
    }
    trace!(%rotation, before, after = link_height(link), "rebalanced avl subtree");
}

/// Promote the left child into this position; its right subtree becomes the
/// old node's left subtree. No-op without a left child.
fn rotate_right<T>(link: &mut Link<T>) -> bool {
    let Some(mut node) = link.take() else {
        return false;
    };
    let Some(mut pivot) = node.left.take() else {
        *link = Some(node);
        return false;
    };
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    *link = Some(pivot);
    true
}

/// Mirror of [`rotate_right`].
fn rotate_left<T>(link: &mut Link<T>) -> bool {
    let Some(mut node) = link.take() else {
        return false;
    };
    let Some(mut pivot) = node.right.take() else {
        *link = Some(node);
        return false;
    };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    *link = Some(pivot);
    true
}
