use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// A directed graph with a fixed vertex count, stored as adjacency lists
#[derive(Debug, Clone)]
pub struct AdjacencyList<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,

    /// Number of distinct (from, to) pairs
    edge_count: usize,
}

impl<W> AdjacencyList<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a graph with `vertices` vertices and no edges
    pub fn new(vertices: usize) -> Self {
        AdjacencyList {
            outgoing_edges: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    /// Builds a graph from `(from, to, weight)` triples
    pub fn from_edges(vertices: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        let mut graph = AdjacencyList::new(vertices);
        for &(from, to, weight) in edges {
            graph.insert_edge(from, to, weight)?;
        }
        Ok(graph)
    }
}

impl<W> Graph<W> for AdjacencyList<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(vertex) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges
            .get(from)?
            .iter()
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| *weight)
    }
}

impl<W> MutableGraph<W> for AdjacencyList<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn insert_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.has_vertex(from) {
            return Err(Error::InvalidVertex(from));
        }
        if !self.has_vertex(to) {
            return Err(Error::InvalidVertex(to));
        }

        let outgoing = &mut self.outgoing_edges[from];
        // Check if edge already exists and update it if it does
        if let Some(edge) = outgoing.iter_mut().find(|(target, _)| *target == to) {
            edge.1 = weight;
        } else {
            outgoing.push((to, weight));
            self.edge_count += 1;
        }
        Ok(())
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        let Some(outgoing) = self.outgoing_edges.get_mut(from) else {
            return false;
        };
        let len_before = outgoing.len();
        outgoing.retain(|(target, _)| *target != to);
        let removed = len_before > outgoing.len();
        if removed {
            self.edge_count -= 1;
        }
        removed
    }
}
