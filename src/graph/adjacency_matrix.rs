use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// A directed graph stored as a dense `V x V` weight matrix
///
/// Suited to dense graphs; `outgoing_edges` scans a full row.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix<W>
where
    W: Float + Zero + Debug + Copy,
{
    vertex_count: usize,
    /// Row-major weights, `None` where there is no edge
    weights: Vec<Option<W>>,
    edge_count: usize,
}

impl<W> AdjacencyMatrix<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a graph with `vertices` vertices and no edges
    pub fn new(vertices: usize) -> Self {
        AdjacencyMatrix {
            vertex_count: vertices,
            weights: vec![None; vertices * vertices],
            edge_count: 0,
        }
    }

    fn cell(&self, from: usize, to: usize) -> Option<usize> {
        if from < self.vertex_count && to < self.vertex_count {
            Some(from * self.vertex_count + to)
        } else {
            None
        }
    }
}

impl<W> Graph<W> for AdjacencyMatrix<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if !self.has_vertex(vertex) {
            return Box::new(std::iter::empty());
        }
        let row = &self.weights[vertex * self.vertex_count..(vertex + 1) * self.vertex_count];
        Box::new(
            row.iter()
                .enumerate()
                .filter_map(|(to, weight)| weight.map(|w| (to, w))),
        )
    }

    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.cell(from, to).and_then(|cell| self.weights[cell])
    }
}

impl<W> MutableGraph<W> for AdjacencyMatrix<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn insert_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        let cell = self.cell(from, to).ok_or_else(|| {
            Error::InvalidVertex(if self.has_vertex(from) { to } else { from })
        })?;
        if self.weights[cell].replace(weight).is_none() {
            self.edge_count += 1;
        }
        Ok(())
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        match self.cell(from, to).and_then(|cell| self.weights[cell].take()) {
            Some(_) => {
                self.edge_count -= 1;
                true
            }
            None => false,
        }
    }
}
