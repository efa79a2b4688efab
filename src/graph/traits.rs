use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::Result;

/// A weighted directed edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    pub from: usize,
    pub to: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(from: usize, to: usize, weight: W) -> Self {
        Edge { from, to, weight }
    }
}

/// Trait representing a weighted directed graph over the vertices `0..vertex_count()`
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex as `(to, weight)` pairs
    ///
    /// The iterator can be requested any number of times and yields the same
    /// edges each time as long as the graph is not mutated.
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: usize, to: usize) -> Option<W>;

    /// Returns true if no edge has a negative weight
    fn validate_non_negative(&self) -> bool {
        (0..self.vertex_count())
            .all(|v| self.outgoing_edges(v).all(|(_, weight)| weight >= W::zero()))
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Inserts a directed edge
    ///
    /// Inserting an edge that already exists overwrites its weight and leaves
    /// the edge count unchanged. Fails with [`crate::Error::InvalidVertex`] if
    /// either endpoint is out of range.
    fn insert_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()>;

    /// Removes an edge from the graph, returning true if it existed
    fn remove_edge(&mut self, from: usize, to: usize) -> bool;
}
