//! Weighted graphs with depth- and breadth-first traversal.
//!
//! Two storage layouts share the [`Graph`] contract:
//! - [`AdjacencyMatrixGraph`] - fixed capacity, edges are matrix cells
//! - [`AdjacencyListGraph`] - each vertex owns a linked list of [`Edge`]s
//!
//! Vertices are addressed by value externally and by insertion position
//! internally. Positions shift down when an earlier vertex is removed.

mod list;
mod matrix;

pub use list::{AdjacencyListGraph, Edge};
pub use matrix::AdjacencyMatrixGraph;

use std::fmt;

use crate::error::{Error, Result};
use crate::queue::{LinkedQueue, Queue};
use crate::stack::LinkedStack;

/// Whether edges are mirrored when they are added, updated or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Directed,
    Undirected,
}

/// Visiting strategy for [`Graph::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOrder {
    DepthFirst,
    BreadthFirst,
}

impl fmt::Display for SearchOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOrder::DepthFirst => f.write_str("dfs"),
            SearchOrder::BreadthFirst => f.write_str("bfs"),
        }
    }
}

/// Vertex and edge storage shared by both graph layouts.
///
/// Implementors supply the position-based primitives ([`Graph::position`],
/// [`Graph::vertex_at`], [`Graph::edges_from`]) plus mutation; lookups and
/// traversals are derived from those.
pub trait Graph<V, W>
where
    V: Ord + Clone + fmt::Debug,
{
    fn direction(&self) -> Direction;

    /// Number of vertices.
    fn size(&self) -> usize;

    fn clear(&mut self);

    /// Insert `vertex`; returns `false` when it is already present.
    fn add_vertex(&mut self, vertex: V) -> Result<bool>;

    /// Remove `vertex` together with every edge that touches it.
    fn remove_vertex(&mut self, vertex: &V) -> Result<V>;

    /// Insert a weighted edge; returns `false` when the edge already exists,
    /// leaving its weight untouched.
    fn add_edge_weight(&mut self, from: &V, to: &V, weight: W) -> Result<bool>;

    /// Replace the weight of an existing edge.
    fn add_weight(&mut self, from: &V, to: &V, weight: W) -> Result<()>;

    fn remove_edge(&mut self, from: &V, to: &V) -> Result<()>;

    /// Insertion position of `vertex`.
    fn position(&self, vertex: &V) -> Option<usize>;

    fn vertex_at(&self, position: usize) -> Option<&V>;

    /// Outgoing edges of the vertex at `position`, as (target position, weight).
    fn edges_from(&self, position: usize) -> Vec<(usize, &W)>;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Insert an edge carrying the default weight.
    fn add_edge(&mut self, from: &V, to: &V) -> Result<bool>
    where
        W: Default,
    {
        self.add_edge_weight(from, to, W::default())
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.position(vertex).is_some()
    }

    fn contains_edge(&self, from: &V, to: &V) -> bool {
        self.weight(from, to).is_ok()
    }

    fn weight(&self, from: &V, to: &V) -> Result<&W> {
        let (source, target) = self.endpoints(from, to)?;
        self.edges_from(source)
            .into_iter()
            .find(|(position, _)| *position == target)
            .map(|(_, weight)| weight)
            .ok_or_else(|| Error::edge_not_found(from, to))
    }

    /// Vertices in insertion order.
    fn vertices(&self) -> Vec<&V> {
        (0..self.size())
            .filter_map(|position| self.vertex_at(position))
            .collect()
    }

    /// Targets and weights of the edges leaving `vertex`.
    fn neighbours(&self, vertex: &V) -> Result<Vec<(&V, &W)>> {
        let position = self
            .position(vertex)
            .ok_or_else(|| Error::vertex_not_found(vertex))?;
        Ok(self
            .edges_from(position)
            .into_iter()
            .filter_map(|(target, weight)| self.vertex_at(target).map(|v| (v, weight)))
            .collect())
    }

    /// Depth-first visiting order from the first vertex.
    fn dfs(&self) -> Result<Vec<&V>> {
        first_vertex(self.size())?;
        walk::<Self, V, W>(self, 0, SearchOrder::DepthFirst)
    }

    /// Breadth-first visiting order from the first vertex.
    fn bfs(&self) -> Result<Vec<&V>> {
        first_vertex(self.size())?;
        walk::<Self, V, W>(self, 0, SearchOrder::BreadthFirst)
    }

    fn dfs_from(&self, start: &V) -> Result<Vec<&V>> {
        self.search(start, SearchOrder::DepthFirst)
    }

    fn bfs_from(&self, start: &V) -> Result<Vec<&V>> {
        self.search(start, SearchOrder::BreadthFirst)
    }

    /// Vertices reachable from `start`, each listed once in visiting order.
    fn search(&self, start: &V, order: SearchOrder) -> Result<Vec<&V>> {
        let position = self
            .position(start)
            .ok_or_else(|| Error::vertex_not_found(start))?;
        walk::<Self, V, W>(self, position, order)
    }

    #[doc(hidden)]
    fn endpoints(&self, from: &V, to: &V) -> Result<(usize, usize)> {
        let source = self
            .position(from)
            .ok_or_else(|| Error::vertex_not_found(from))?;
        let target = self
            .position(to)
            .ok_or_else(|| Error::vertex_not_found(to))?;
        Ok((source, target))
    }
}

fn first_vertex(size: usize) -> Result<()> {
    if size == 0 {
        return Err(Error::empty("graph"));
    }
    Ok(())
}

fn next_unvisited<G, V, W>(graph: &G, position: usize, visited: &[bool]) -> Option<usize>
where
    G: Graph<V, W> + ?Sized,
    V: Ord + Clone + fmt::Debug,
{
    graph
        .edges_from(position)
        .into_iter()
        .map(|(target, _)| target)
        .find(|target| !visited[*target])
}

/// Stack- or queue-driven traversal. The structure's top (or front) is
/// inspected for its next unvisited neighbour; once it has none it is popped
/// (or dequeued). Visited marks live only for the duration of the call.
fn walk<'g, G, V, W>(graph: &'g G, start: usize, order: SearchOrder) -> Result<Vec<&'g V>>
where
    G: Graph<V, W> + ?Sized,
    V: Ord + Clone + fmt::Debug,
{
    let mut visited = vec![false; graph.size()];
    let mut seen = vec![start];
    visited[start] = true;

    match order {
        SearchOrder::DepthFirst => {
            let mut stack = LinkedStack::new();
            stack.push(start);
            while let Ok(&top) = stack.peek() {
                match next_unvisited::<G, V, W>(graph, top, &visited) {
                    Some(next) => {
                        visited[next] = true;
                        seen.push(next);
                        stack.push(next);
                    }
                    None => {
                        stack.pop()?;
                    }
                }
            }
        }
        SearchOrder::BreadthFirst => {
            let mut queue = LinkedQueue::new();
            queue.enqueue(start)?;
            while let Ok(&front) = queue.peek() {
                match next_unvisited::<G, V, W>(graph, front, &visited) {
                    Some(next) => {
                        visited[next] = true;
                        seen.push(next);
                        queue.enqueue(next)?;
                    }
                    None => {
                        queue.dequeue()?;
                    }
                }
            }
        }
    }

    Ok(seen
        .into_iter()
        .filter_map(|position| graph.vertex_at(position))
        .collect())
}
