use std::fmt;

use crate::error::{Error, Result};

use super::{Direction, Graph};

/// Graph whose edges are cells of a fixed `capacity x capacity` matrix.
///
/// Row `i`, column `j` holds the weight of the edge from the vertex at
/// position `i` to the vertex at position `j`. Removing a vertex shifts every
/// later row up and every later column left, so positions stay dense.
pub struct AdjacencyMatrixGraph<V, W> {
    vertices: Vec<V>,
    cells: Vec<Vec<Option<W>>>,
    direction: Direction,
}

impl<V, W> AdjacencyMatrixGraph<V, W> {
    /// Build a graph with room for `capacity` vertices.
    ///
    /// A zero capacity is rejected with [`Error::InvalidCapacity`].
    pub fn with_capacity(capacity: usize, direction: Direction) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity {
                structure: "adjacency matrix",
            });
        }
        Ok(Self {
            vertices: Vec::with_capacity(capacity),
            cells: (0..capacity).map(|_| empty_row(capacity)).collect(),
            direction,
        })
    }

    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    pub fn is_full(&self) -> bool {
        self.vertices.len() == self.capacity()
    }

    /// Number of occupied cells, counting a mirrored pair twice.
    pub fn edge_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count()
    }
}

fn empty_row<W>(capacity: usize) -> Vec<Option<W>> {
    (0..capacity).map(|_| None).collect()
}

impl<V, W> Graph<V, W> for AdjacencyMatrixGraph<V, W>
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
        self.cells.iter_mut().flatten().for_each(|cell| *cell = None);
    }

    fn add_vertex(&mut self, vertex: V) -> Result<bool> {
        if self.contains_vertex(&vertex) {
            return Ok(false);
        }
        if self.is_full() {
            return Err(Error::Full {
                structure: "adjacency matrix",
                capacity: self.capacity(),
            });
        }
        self.vertices.push(vertex);
        Ok(true)
    }

    fn remove_vertex(&mut self, vertex: &V) -> Result<V> {
        let position = self
            .position(vertex)
            .ok_or_else(|| Error::vertex_not_found(vertex))?;
        let capacity = self.capacity();

        self.cells.remove(position);
        self.cells.push(empty_row(capacity));
        for row in &mut self.cells {
            row.remove(position);
            row.push(None);
        }
        Ok(self.vertices.remove(position))
    }

    fn add_edge_weight(&mut self, from: &V, to: &V, weight: W) -> Result<bool> {
        let (source, target) = self.endpoints(from, to)?;
        if self.cells[source][target].is_some() {
            return Ok(false);
        }
        if self.direction == Direction::Undirected {
            self.cells[target][source] = Some(weight.clone());
        }
        self.cells[source][target] = Some(weight);
        Ok(true)
    }

    fn add_weight(&mut self, from: &V, to: &V, weight: W) -> Result<()> {
        let (source, target) = self.endpoints(from, to)?;
        if self.cells[source][target].is_none() {
            return Err(Error::edge_not_found(from, to));
        }
        if self.direction == Direction::Undirected {
            self.cells[target][source] = Some(weight.clone());
        }
        self.cells[source][target] = Some(weight);
        Ok(())
    }

    fn remove_edge(&mut self, from: &V, to: &V) -> Result<()> {
        let (source, target) = self.endpoints(from, to)?;
        self.cells[source][target]
            .take()
            .ok_or_else(|| Error::edge_not_found(from, to))?;
        if self.direction == Direction::Undirected {
            self.cells[target][source] = None;
        }
        Ok(())
    }

    fn position(&self, vertex: &V) -> Option<usize> {
        self.vertices.iter().position(|candidate| candidate == vertex)
    }

    fn vertex_at(&self, position: usize) -> Option<&V> {
        self.vertices.get(position)
    }

    fn edges_from(&self, position: usize) -> Vec<(usize, &W)> {
        let Some(row) = self.cells.get(position) else {
            return Vec::new();
        };
        row.iter()
            .take(self.vertices.len())
            .enumerate()
            .filter_map(|(target, cell)| cell.as_ref().map(|weight| (target, weight)))
            .collect()
    }
}

impl<V: fmt::Debug, W: fmt::Debug> fmt::Debug for AdjacencyMatrixGraph<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.vertices.len();
        f.debug_struct("AdjacencyMatrixGraph")
            .field("direction", &self.direction)
            .field("vertices", &self.vertices)
            .field(
                "cells",
                &self
                    .cells
                    .iter()
                    .take(size)
                    .map(|row| &row[..size])
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
