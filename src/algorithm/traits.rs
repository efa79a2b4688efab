use std::fmt::Debug;

use log::warn;
use num_traits::{Float, Zero};

use crate::graph::{Edge, Graph};
use crate::Result;

/// Counters collected during one shortest path run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueStats {
    /// Vertices inserted into the queue (first discoveries)
    pub inserted: usize,
    /// Successful relaxations of already queued vertices
    pub decreased: usize,
    /// Vertices extracted (settled)
    pub extracted: usize,
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distances from source to each vertex, infinite where unreached
    pub distances: Vec<W>,

    /// Edge through which each vertex was last reached
    pub predecessors: Vec<Option<Edge<W>>>,

    /// Source vertex ID
    pub source: usize,

    /// Queue operation counters
    pub stats: QueueStats,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distance to `vertex`, `None` if it is out of range or unreachable
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances
            .get(vertex)
            .copied()
            .filter(|d| d.is_finite())
    }

    /// Returns true if `vertex` was reached from the source
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices reached from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }

    /// Vertices on the shortest path from the source to `target`
    ///
    /// Returns `Some(vec![source])` when `target` is the source and `None` when
    /// `target` is out of range or was never reached.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }

        // Build path in reverse order
        let mut path = vec![target];
        let mut current = target;
        while let Some(edge) = self.predecessors[current] {
            current = edge.from;
            path.push(current);

            // Only possible with negative weights
            if path.len() > self.predecessors.len() {
                warn!("predecessor cycle detected while building path to {}", target);
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        result.path_to(target)
    }
}
