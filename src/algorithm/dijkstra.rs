use std::cell::Cell;
use std::fmt::Debug;

use log::{debug, trace};
use num_traits::{Float, Zero};

use crate::algorithm::{QueueStats, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{BinaryHeap, FibonacciHeap, NodeHandle, PriorityQueue, QueueKind};
use crate::graph::{Edge, Graph};
use crate::{Error, Result};

/// Dijkstra's algorithm over a pluggable decrease-key priority queue
///
/// The queue holds vertex ids and orders them by reading the live distance
/// table, so lowering a vertex's tentative distance followed by
/// `decrease_key` reorders it without re-inserting.
///
/// # Example
///
/// ```rust
/// use heap_sssp::{AdjacencyList, Dijkstra, QueueKind, ShortestPathAlgorithm};
/// use ordered_float::OrderedFloat;
///
/// let graph = AdjacencyList::from_edges(3, &[
///     (0, 1, OrderedFloat(2.0)),
///     (1, 2, OrderedFloat(2.0)),
///     (0, 2, OrderedFloat(5.0)),
/// ]).unwrap();
///
/// let dijkstra = Dijkstra::new().with_queue(QueueKind::Fibonacci);
/// let result = dijkstra.compute_shortest_paths(&graph, 0).unwrap();
/// assert_eq!(result.distance(2), Some(OrderedFloat(4.0)));
/// assert_eq!(result.path_to(2), Some(vec![0, 1, 2]));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra {
    /// Priority queue implementation to run with
    queue: QueueKind,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance using the default queue
    pub fn new() -> Self {
        Dijkstra {
            queue: QueueKind::default(),
        }
    }

    /// Set the priority queue implementation
    pub fn with_queue(mut self, queue: QueueKind) -> Self {
        self.queue = queue;
        self
    }

    pub fn queue_kind(&self) -> QueueKind {
        self.queue
    }
}

/// Runs the main loop: settle the closest vertex, relax its outgoing edges
///
/// `distances` must hold zero for `source` and infinity elsewhere, and `queue`
/// must order vertices by reading `distances`.
fn relax_all<W, G, Q>(
    graph: &G,
    source: usize,
    distances: &[Cell<W>],
    mut queue: Q,
) -> (Vec<Option<Edge<W>>>, QueueStats)
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
    Q: PriorityQueue<usize>,
{
    let n = distances.len();
    let mut edge_to: Vec<Option<Edge<W>>> = vec![None; n];
    let mut handles: Vec<Option<NodeHandle>> = vec![None; n];
    let mut stats = QueueStats::default();

    handles[source] = Some(queue.insert(source));
    stats.inserted += 1;

    while let Some(v) = queue.extract_min() {
        stats.extracted += 1;
        let dist_v = distances[v].get();

        for (w, weight) in graph.outgoing_edges(v) {
            let candidate = dist_v + weight;
            if candidate >= distances[w].get() {
                continue;
            }
            distances[w].set(candidate);
            edge_to[w] = Some(Edge::new(v, w, weight));

            match handles[w] {
                None => {
                    handles[w] = Some(queue.insert(w));
                    stats.inserted += 1;
                }
                Some(handle) if queue.contains(&handle) => {
                    queue.decrease_key(&handle);
                    stats.decreased += 1;
                }
                Some(_) => {
                    trace!("vertex {} improved after being settled (negative weight?)", w);
                }
            }
        }
    }

    debug!(
        "{}: {} inserts, {} decrease-keys, {} extractions",
        queue.name(),
        stats.inserted,
        stats.decreased,
        stats.extracted
    );
    (edge_to, stats)
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(source));
        }

        let n = graph.vertex_count();
        debug!(
            "running Dijkstra from {} over {} vertices / {} edges with a {}",
            source,
            n,
            graph.edge_count(),
            self.queue
        );

        // Initialize distances; the queue comparator reads them live
        let distances: Vec<Cell<W>> = vec![Cell::new(W::infinity()); n];
        distances[source].set(W::zero());
        let by_distance = |a: &usize, b: &usize| distances[*a].get().cmp(&distances[*b].get());

        let (predecessors, stats) = match self.queue {
            QueueKind::Binary => relax_all(
                graph,
                source,
                &distances,
                BinaryHeap::with_capacity(n, by_distance),
            ),
            QueueKind::Fibonacci => relax_all(
                graph,
                source,
                &distances,
                FibonacciHeap::with_capacity(n, by_distance),
            ),
        };

        Ok(ShortestPathResult {
            distances: distances.into_iter().map(Cell::into_inner).collect(),
            predecessors,
            source,
            stats,
        })
    }
}
