use crate::graph::{AdjacencyList, AdjacencyMatrix, MutableGraph};
use crate::{Error, Result};
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Settings for [`fill_dense`]
#[derive(Debug, Clone)]
pub struct DenseGraphConfig {
    /// Number of vertices
    pub vertices: usize,
    /// Targets of each vertex advance by a random step in `1..=max_step`
    pub max_step: usize,
    /// Edge weights are drawn as integers from `0..max_weight`
    pub max_weight: u32,
    /// Seed for reproducible graphs; `None` draws from entropy
    pub seed: Option<u64>,
}

impl Default for DenseGraphConfig {
    fn default() -> Self {
        Self {
            vertices: 1_000,
            max_step: 5,
            max_weight: 1_000,
            seed: None,
        }
    }
}

impl DenseGraphConfig {
    fn validate(&self) -> Result<()> {
        if self.max_step == 0 {
            return Err(Error::InvalidConfig("max_step must be positive".to_string()));
        }
        if self.max_weight == 0 {
            return Err(Error::InvalidConfig("max_weight must be positive".to_string()));
        }
        Ok(())
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Adds a dense random edge set to `graph`
///
/// For every vertex `i`, targets `j` start at 0 and advance by a random step in
/// `1..=max_step`, skipping self-loops, so each vertex links to roughly
/// `2 / (max_step + 1)` of all vertices.
pub fn fill_dense<G>(graph: &mut G, config: &DenseGraphConfig) -> Result<()>
where
    G: MutableGraph<OrderedFloat<f64>>,
{
    config.validate()?;
    let mut rng = make_rng(config.seed);
    let n = graph.vertex_count();

    for i in 0..n {
        let mut j = 0;
        while j < n {
            if i != j {
                let weight = OrderedFloat(rng.gen_range(0..config.max_weight) as f64);
                graph.insert_edge(i, j, weight)?;
            }
            j += rng.gen_range(1..=config.max_step);
        }
    }
    Ok(())
}

/// Generates a dense random graph stored as an adjacency matrix
pub fn dense_matrix(config: &DenseGraphConfig) -> Result<AdjacencyMatrix<OrderedFloat<f64>>> {
    let mut graph = AdjacencyMatrix::new(config.vertices);
    fill_dense(&mut graph, config)?;
    Ok(graph)
}

/// Generates a dense random graph stored as adjacency lists
pub fn dense_list(config: &DenseGraphConfig) -> Result<AdjacencyList<OrderedFloat<f64>>> {
    let mut graph = AdjacencyList::new(config.vertices);
    fill_dense(&mut graph, config)?;
    Ok(graph)
}

/// Generates a sparse random directed graph with about `edge_factor * vertices`
/// edges and weights in `1.0..100.0`
pub fn random_graph(
    vertices: usize,
    edge_factor: f64,
    seed: Option<u64>,
) -> Result<AdjacencyList<OrderedFloat<f64>>> {
    if vertices == 0 || edge_factor < 0.0 {
        return Err(Error::InvalidConfig(format!(
            "cannot build a random graph with {} vertices and edge factor {}",
            vertices, edge_factor
        )));
    }
    let mut graph = AdjacencyList::new(vertices);
    let mut rng = make_rng(seed);

    // Approximately edge_factor * n edges
    let num_edges = (edge_factor * vertices as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..vertices);
        let v = rng.gen_range(0..vertices);
        // Avoid self-loops and ensure positive weights
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            graph.insert_edge(u, v, weight)?;
        }
    }
    Ok(graph)
}
