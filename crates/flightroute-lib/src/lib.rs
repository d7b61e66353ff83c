//! Flight route library entry points.
//!
//! This crate provides the collections behind a flight route planner: linked
//! lists, a stack and queues over a shared node arena, an AVL tree and an
//! unordered binary tree, adjacency-matrix and adjacency-list graphs with
//! depth- and breadth-first traversal, and a Dijkstra search that minimises a
//! chosen cost metric. [`RouteNetwork`] ties them together for airports and
//! flights loaded from JSON. Consumers such as the CLI should depend on the
//! items exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

mod arena;

pub mod error;
pub mod graph;
pub mod list;
pub mod network;
pub mod queue;
pub mod route;
pub mod stack;
pub mod tree;

pub use error::{Error, Result};
pub use graph::{
    AdjacencyListGraph, AdjacencyMatrixGraph, Direction, Edge, Graph, SearchOrder,
};
pub use list::{
    CircularDoublyLinkedList, CircularLinkedList, DoublyLinkedList, List, SinglyLinkedList,
};
pub use network::{Airport, FlightRoute, NetworkDefinition, RouteNetwork, RoutePlan, RouteWeight};
pub use queue::{
    ArrayQueue, HeaderLinkedQueue, LinkedQueue, PriorityEntry, PriorityLinkedQueue, Queue,
};
pub use route::{find_shortest_route, CostMetric, EdgeCost, ShortestRoute};
pub use stack::LinkedStack;
pub use tree::{AvlTree, BinaryNode, BinaryTree, Children, Rotation, Traversal, Tree};
