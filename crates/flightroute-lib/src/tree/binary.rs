use std::fmt;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};

use super::{exhaustive_path, BinaryNode, Link, Tree};

/// Unordered binary tree that grows at random leaf positions.
///
/// Insertion walks down from the root, flipping a coin at every occupied node
/// to pick a side, until it reaches a free slot. No ordering invariant holds,
/// so searches visit both subtrees. The random source is injected so growth
/// can be replayed from a seed.
pub struct BinaryTree<T, R = SmallRng> {
    root: Link<T>,
    len: usize,
    rng: R,
}

impl<T> BinaryTree<T, SmallRng> {
    /// Tree seeded from operating-system entropy.
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_os_rng())
    }

    /// Tree whose shape is reproducible for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<T, R: Rng> BinaryTree<T, R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            root: None,
            len: 0,
            rng,
        }
    }
}

impl<T: Ord, R: Rng> Tree<T> for BinaryTree<T, R> {
    fn root(&self) -> Option<&BinaryNode<T>> {
        self.root.as_deref()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn add(&mut self, value: T) -> bool {
        insert_random(&mut self.root, value, &mut self.rng);
        self.len += 1;
        true
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
        exhaustive_path(self.root.as_deref(), value)
    }
}

impl<T> Default for BinaryTree<T, SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + fmt::Debug, R: Rng> fmt::Debug for BinaryTree<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.pre_order().unwrap_or_default())
            .finish()
    }
}

fn insert_random<T, R: Rng>(link: &mut Link<T>, value: T, rng: &mut R) {
    match link {
        None => *link = Some(Box::new(BinaryNode::new(value))),
        Some(node) => {
            if rng.random_bool(0.5) {
                insert_random(&mut node.left, value, rng);
            } else {
                insert_random(&mut node.right, value, rng);
            }
            node.update_height();
        }
    }
}

fn remove<T: PartialEq>(link: &mut Link<T>, value: &T) -> Option<T> {
    let node = link.as_mut()?;
    if node.value != *value {
        let removed = remove(&mut node.left, value).or_else(|| remove(&mut node.right, value));
        if removed.is_some() {
            node.update_height();
        }
        return removed;
    }

    if node.left.is_some() && node.right.is_some() {
        let leaf = detach_leaf(&mut node.right)?;
        node.update_height();
        return Some(std::mem::replace(&mut node.value, leaf));
    }

    let mut target = link.take()?;
    *link = target.left.take().or_else(|| target.right.take());
    Some(target.into_value())
}

/// Cut a leaf out of the subtree, preferring left branches on the way down.
fn detach_leaf<T>(link: &mut Link<T>) -> Option<T> {
    let node = link.as_mut()?;
    let leaf = if node.left.is_some() {
        detach_leaf(&mut node.left)
    } else if node.right.is_some() {
        detach_leaf(&mut node.right)
    } else {
        return link.take().map(|target| target.into_value());
    };
    node.update_height();
    leaf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Traversal;

    fn actual_height<T>(node: Option<&BinaryNode<T>>) -> i32 {
        node.map_or(-1, |node| {
            1 + actual_height(node.left()).max(actual_height(node.right()))
        })
    }

    #[test]
    fn same_seed_builds_the_same_shape() {
        let mut first = BinaryTree::seeded(42);
        let mut second = BinaryTree::seeded(42);
        for value in 0..32 {
            first.add(value);
            second.add(value);
        }
        assert_eq!(first.pre_order().unwrap(), second.pre_order().unwrap());
        assert_eq!(first.len(), 32);
    }

    #[test]
    fn search_visits_both_subtrees() {
        let mut tree = BinaryTree::seeded(3);
        for value in [50, 10, 90, 30, 70, 20, 80] {
            tree.add(value);
        }
        for value in [50, 10, 90, 30, 70, 20, 80] {
            assert!(tree.contains(&value).unwrap());
        }
        assert!(!tree.contains(&60).unwrap());
        assert_eq!(*tree.min().unwrap(), 10);
        assert_eq!(*tree.max().unwrap(), 90);
    }

    #[test]
    fn removal_keeps_remaining_values_and_heights() {
        let mut tree = BinaryTree::seeded(11);
        let values: Vec<i32> = (1..=40).collect();
        for value in &values {
            tree.add(*value);
        }

        for value in values.iter().step_by(3) {
            assert_eq!(tree.remove(value).unwrap(), *value);
            assert_eq!(
                tree.height().map(|h| h as i32).unwrap_or(-1),
                actual_height(tree.root())
            );
        }

        let mut remaining: Vec<i32> = tree
            .traverse(Traversal::InOrder)
            .unwrap()
            .into_iter()
            .copied()
            .collect();
        remaining.sort_unstable();
        let expected: Vec<i32> = values
            .iter()
            .enumerate()
            .filter(|(index, _)| index % 3 != 0)
            .map(|(_, value)| *value)
            .collect();
        assert_eq!(remaining, expected);
        assert_eq!(tree.len(), expected.len());
        assert!(tree.remove(&1).unwrap_err().is_not_found());
    }

    #[test]
    fn removing_the_last_value_empties_the_tree() {
        let mut tree = BinaryTree::seeded(5);
        tree.add("LHR");
        assert_eq!(tree.remove(&"LHR").unwrap(), "LHR");
        assert!(tree.is_empty());
        assert!(tree.remove(&"LHR").unwrap_err().is_empty_structure());
    }
}
