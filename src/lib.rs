//! Heap SSSP - Dijkstra's single-source shortest paths over pluggable heaps
//!
//! This library runs Dijkstra's algorithm against a priority queue chosen at
//! configuration time:
//!
//! - an array-backed binary heap with O(log n) insert, extract-min and
//!   decrease-key, and
//! - a Fibonacci heap with O(1) amortized insert and decrease-key and
//!   O(log n) amortized extract-min.
//!
//! Both queues hand out [`NodeHandle`]s on insert so the algorithm can lower a
//! vertex's tentative distance in place. Linked structures are kept in
//! generation-checked arenas instead of owning pointers.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra, QueueStats, ShortestPathAlgorithm, ShortestPathResult,
};
pub use data_structures::{
    BinaryHeap, Comparator, DLinkedList, FibonacciHeap, NaturalOrder, NodeHandle, PriorityQueue,
    QueueKind,
};
/// Re-export main types for convenient use
pub use graph::{AdjacencyList, AdjacencyMatrix, Edge, Graph, MutableGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Source vertex {0} not found in graph")]
    SourceNotFound(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
