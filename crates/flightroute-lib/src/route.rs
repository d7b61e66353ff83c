//! Lowest-cost route search over any [`Graph`].
//!
//! This module provides:
//! - [`CostMetric`] - The weight dimension a search minimises
//! - [`EdgeCost`] - Projection of an edge weight onto a metric
//! - [`ShortestRoute`] - Path and accumulated cost of a successful search
//! - [`find_shortest_route`] - Dijkstra's algorithm on a binary min-heap

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Weight dimension minimised by a route search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CostMetric {
    /// Flight time in minutes.
    #[default]
    Duration,
    /// Great-circle distance in kilometres.
    Distance,
    /// Ticket price.
    Price,
}

impl fmt::Display for CostMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            CostMetric::Duration => "duration",
            CostMetric::Distance => "distance",
            CostMetric::Price => "price",
        };
        f.write_str(value)
    }
}

impl FromStr for CostMetric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "duration" => Ok(CostMetric::Duration),
            "distance" => Ok(CostMetric::Distance),
            "price" => Ok(CostMetric::Price),
            _ => Err(Error::UnsupportedCostMetric {
                metric: s.to_string(),
            }),
        }
    }
}

/// Edge weights that can be priced under a [`CostMetric`].
///
/// Costs must be non-negative; negative values are not detected.
pub trait EdgeCost {
    fn cost(&self, metric: CostMetric) -> f64;
}

macro_rules! scalar_edge_cost {
    ($($ty:ty),*) => {
        $(
            impl EdgeCost for $ty {
                fn cost(&self, _metric: CostMetric) -> f64 {
                    f64::from(*self)
                }
            }
        )*
    };
}

scalar_edge_cost!(f64, f32, u32, i32, u16, u8);

impl EdgeCost for u64 {
    fn cost(&self, _metric: CostMetric) -> f64 {
        *self as f64
    }
}

/// Result of a successful search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestRoute<V> {
    /// Vertices from source to destination, both included.
    pub path: Vec<V>,
    /// Sum of the edge costs along `path`.
    pub total_cost: f64,
}

impl<V> ShortestRoute<V> {
    /// Number of edges travelled.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Run Dijkstra's algorithm from `source` to `destination`.
///
/// Returns `Ok(None)` when the destination is unreachable and
/// [`Error::VertexNotFound`] when either endpoint is missing. The search stops
/// the first time the destination leaves the heap.
pub fn find_shortest_route<G, V, W>(
    graph: &G,
    source: &V,
    destination: &V,
    metric: CostMetric,
) -> Result<Option<ShortestRoute<V>>>
where
    G: Graph<V, W> + ?Sized,
    V: Ord + Clone + fmt::Debug,
    W: EdgeCost,
{
    let (start, goal) = graph.endpoints(source, destination)?;
    debug!(?source, ?destination, %metric, "searching for shortest route");

    if start == goal {
        return Ok(Some(ShortestRoute {
            path: vec![source.clone()],
            total_cost: 0.0,
        }));
    }

    let mut costs = vec![f64::INFINITY; graph.size()];
    let mut parents: Vec<Option<usize>> = vec![None; graph.size()];
    let mut queue = BinaryHeap::new();

    costs[start] = 0.0;
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        if entry.cost.0 > costs[entry.node] {
            continue;
        }

        if entry.node == goal {
            let path = reconstruct_path::<G, V, W>(graph, &parents, start, goal);
            debug!(hops = path.len() - 1, cost = entry.cost.0, "shortest route found");
            return Ok(Some(ShortestRoute {
                path,
                total_cost: entry.cost.0,
            }));
        }

        for (next, weight) in graph.edges_from(entry.node) {
            let next_cost = entry.cost.0 + weight.cost(metric);
            if next_cost < costs[next] {
                costs[next] = next_cost;
                parents[next] = Some(entry.node);
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    debug!(?source, ?destination, "destination unreachable");
    Ok(None)
}

fn reconstruct_path<G, V, W>(
    graph: &G,
    parents: &[Option<usize>],
    start: usize,
    goal: usize,
) -> Vec<V>
where
    G: Graph<V, W> + ?Sized,
    V: Ord + Clone + fmt::Debug,
{
    let mut positions = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        positions.push(node);
        if node == start {
            break;
        }
        current = parents[node];
    }
    positions.reverse();
    positions
        .into_iter()
        .filter_map(|position| graph.vertex_at(position).cloned())
        .collect()
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: usize,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: usize, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
