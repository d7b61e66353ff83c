use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::list::{Iter, List, SinglyLinkedList};

use super::{Direction, Graph};

/// Directed, weighted edge stored in a vertex's adjacency list.
///
/// Equality and ordering look at the destination only, so a vertex holds at
/// most one edge towards any given destination.
#[derive(Debug, Clone)]
pub struct Edge<V, W> {
    pub destination: V,
    pub weight: W,
}

impl<V: PartialEq, W> PartialEq for Edge<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.destination == other.destination
    }
}

impl<V: Eq, W> Eq for Edge<V, W> {}

impl<V: Ord, W> PartialOrd for Edge<V, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Ord, W> Ord for Edge<V, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.destination.cmp(&other.destination)
    }
}

struct Vertex<V, W> {
    value: V,
    edges: SinglyLinkedList<Edge<V, W>>,
}

/// Graph whose vertices each own a singly linked list of outgoing edges.
///
/// `index` maps every vertex to its position in `vertices`, so edge targets
/// resolve in logarithmic time.
pub struct AdjacencyListGraph<V, W> {
    vertices: Vec<Vertex<V, W>>,
    index: BTreeMap<V, usize>,
    direction: Direction,
}

impl<V, W> AdjacencyListGraph<V, W> {
    pub fn new(direction: Direction) -> Self {
        Self {
            vertices: Vec::new(),
            index: BTreeMap::new(),
            direction,
        }
    }

    pub fn directed() -> Self {
        Self::new(Direction::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(Direction::Undirected)
    }
}

impl<V: Ord, W> AdjacencyListGraph<V, W> {
    /// Outgoing edges of `vertex` in insertion order.
    pub fn edges<Q>(&self, vertex: &Q) -> Option<Iter<'_, Edge<V, W>>>
    where
        V: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.index
            .get(vertex)
            .map(|&position| self.vertices[position].edges.iter())
    }

    /// Number of stored edges, counting a mirrored pair twice.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|vertex| vertex.edges.size()).sum()
    }
}

impl<V, W> Default for AdjacencyListGraph<V, W> {
    fn default() -> Self {
        Self::directed()
    }
}

impl<V, W> Graph<V, W> for AdjacencyListGraph<V, W>
where
    V: Ord + Clone + fmt::Debug,
    W: Clone,
{
    fn direction(&self) -> Direction {
        self.direction
    }

    fn size(&self) -> usize {
        self.vertices.len()
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.index.clear();
    }

    fn add_vertex(&mut self, vertex: V) -> Result<bool> {
        if self.contains_vertex(&vertex) {
            return Ok(false);
        }
        self.index.insert(vertex.clone(), self.vertices.len());
        self.vertices.push(Vertex {
            value: vertex,
            edges: SinglyLinkedList::new(),
        });
        Ok(true)
    }

    fn remove_vertex(&mut self, vertex: &V) -> Result<V> {
        let position = self
            .position(vertex)
            .ok_or_else(|| Error::vertex_not_found(vertex))?;
        let removed = self.vertices.remove(position);
        self.index.remove(&removed.value);
        for later in self.index.values_mut().filter(|later| **later > position) {
            *later -= 1;
        }
        for remaining in &mut self.vertices {
            remaining
                .edges
                .remove_by(|edge| edge.destination == removed.value);
        }
        Ok(removed.value)
    }

    fn add_edge_weight(&mut self, from: &V, to: &V, weight: W) -> Result<bool> {
        let (source, target) = self.endpoints(from, to)?;
        if self.vertices[source]
            .edges
            .iter()
            .any(|edge| edge.destination == *to)
        {
            return Ok(false);
        }
        if self.direction == Direction::Undirected && source != target {
            self.vertices[target].edges.add_last(Edge {
                destination: from.clone(),
                weight: weight.clone(),
            });
        }
        self.vertices[source].edges.add_last(Edge {
            destination: to.clone(),
            weight,
        });
        Ok(true)
    }

    fn add_weight(&mut self, from: &V, to: &V, weight: W) -> Result<()> {
        let (source, target) = self.endpoints(from, to)?;
        let edge = self.vertices[source]
            .edges
            .find_mut(|edge| edge.destination == *to)
            .ok_or_else(|| Error::edge_not_found(from, to))?;
        edge.weight = weight.clone();

        if self.direction == Direction::Undirected && source != target {
            if let Some(mirror) = self.vertices[target]
                .edges
                .find_mut(|edge| edge.destination == *from)
            {
                mirror.weight = weight;
            }
        }
        Ok(())
    }

    fn remove_edge(&mut self, from: &V, to: &V) -> Result<()> {
        let (source, target) = self.endpoints(from, to)?;
        self.vertices[source]
            .edges
            .remove_by(|edge| edge.destination == *to)
            .ok_or_else(|| Error::edge_not_found(from, to))?;
        if self.direction == Direction::Undirected && source != target {
            self.vertices[target]
                .edges
                .remove_by(|edge| edge.destination == *from);
        }
        Ok(())
    }

    fn position(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    fn vertex_at(&self, position: usize) -> Option<&V> {
        self.vertices.get(position).map(|vertex| &vertex.value)
    }

    fn edges_from(&self, position: usize) -> Vec<(usize, &W)> {
        let Some(vertex) = self.vertices.get(position) else {
            return Vec::new();
        };
        vertex
            .edges
            .iter()
            .filter_map(|edge| {
                self.position(&edge.destination)
                    .map(|target| (target, &edge.weight))
            })
            .collect()
    }
}

impl<V: Ord + fmt::Debug, W: fmt::Debug> fmt::Debug for AdjacencyListGraph<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for vertex in &self.vertices {
            map.entry(&vertex.value, &vertex.edges);
        }
        map.finish()
    }
}
