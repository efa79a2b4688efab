//! Property-based tests using proptest
//!
//! Random sequences of inserts, extractions and decrease-keys are run against
//! both queues and checked against a plain vector model.

use std::cell::Cell;
use std::cmp::Ordering;

use heap_sssp::data_structures::fibonacci_heap::degree_bound;
use heap_sssp::data_structures::{
    BinaryHeap, Comparator, FibonacciHeap, NaturalOrder, NodeHandle, PriorityQueue,
};
use heap_sssp::graph::generators::random_graph;
use heap_sssp::{Dijkstra, QueueKind, ShortestPathAlgorithm};
use proptest::prelude::*;

fn by_key(keys: &[Cell<i32>]) -> impl Fn(&usize, &usize) -> Ordering + Copy + '_ {
    move |a: &usize, b: &usize| keys[*a].get().cmp(&keys[*b].get())
}

/// Draining the queue yields the inserted values in sorted order
fn check_pop_order<Q: PriorityQueue<i32>>(mut queue: Q, values: Vec<i32>) -> Result<(), TestCaseError> {
    for v in &values {
        queue.insert(*v);
    }
    prop_assert_eq!(queue.len(), values.len());

    let mut drained = Vec::with_capacity(values.len());
    while let Some(v) = queue.extract_min() {
        drained.push(v);
    }
    let mut expected = values;
    expected.sort();
    prop_assert_eq!(drained, expected);
    Ok(())
}

/// Interleaves extractions and decrease-keys, checking the minimum each step
///
/// `ops` entries are `(extract, index, amount)`: either extract the minimum or
/// lower the key at `index` by `amount` if it is still queued.
fn check_decrease_key<Q, F>(
    mut queue: Q,
    keys: &[Cell<i32>],
    ops: Vec<(bool, usize, i32)>,
    mut validate: F,
) -> Result<(), TestCaseError>
where
    Q: PriorityQueue<usize>,
    F: FnMut(&Q) -> Result<(), TestCaseError>,
{
    let handles: Vec<NodeHandle> = (0..keys.len()).map(|i| queue.insert(i)).collect();
    let mut live: Vec<bool> = vec![true; keys.len()];

    for (extract, index, amount) in ops {
        let index = index % keys.len();
        if extract {
            if let Some(i) = queue.extract_min() {
                let expected = (0..keys.len())
                    .filter(|&j| live[j])
                    .map(|j| keys[j].get())
                    .min();
                prop_assert_eq!(Some(keys[i].get()), expected);
                live[i] = false;
            }
        } else if live[index] {
            prop_assert!(queue.contains(&handles[index]));
            keys[index].set(keys[index].get() - amount);
            queue.decrease_key(&handles[index]);
        } else {
            prop_assert!(!queue.contains(&handles[index]));
        }

        let expected = (0..keys.len()).filter(|&j| live[j]).map(|j| keys[j].get()).min();
        prop_assert_eq!(queue.min().map(|&i| keys[i].get()), expected);
        prop_assert_eq!(queue.len(), live.iter().filter(|&&l| l).count());
        validate(&queue)?;
    }
    Ok(())
}

fn fibonacci_invariants<C>(heap: &FibonacciHeap<usize, C>) -> Result<(), TestCaseError>
where
    C: Comparator<usize>,
{
    prop_assert!(heap.is_valid());
    prop_assert!(heap.max_degree() <= degree_bound(heap.len()));
    Ok(())
}

fn cells(values: &[i32]) -> Vec<Cell<i32>> {
    values.iter().copied().map(Cell::new).collect()
}

proptest! {
    #[test]
    fn test_binary_pop_order(values in prop::collection::vec(-100i32..100, 0..200)) {
        check_pop_order(BinaryHeap::with_capacity(4, NaturalOrder), values)?;
    }

    #[test]
    fn test_fibonacci_pop_order(values in prop::collection::vec(-100i32..100, 0..200)) {
        check_pop_order(FibonacciHeap::new(NaturalOrder), values)?;
    }

    #[test]
    fn test_binary_decrease_key(
        initial in prop::collection::vec(-100i32..100, 1..60),
        ops in prop::collection::vec((prop::bool::ANY, 0usize..60, 1i32..50), 0..120)
    ) {
        let keys = cells(&initial);
        check_decrease_key(BinaryHeap::new(by_key(&keys)), &keys, ops, |heap| {
            prop_assert!(heap.is_valid());
            Ok(())
        })?;
    }

    #[test]
    fn test_fibonacci_decrease_key(
        initial in prop::collection::vec(-100i32..100, 1..60),
        ops in prop::collection::vec((prop::bool::ANY, 0usize..60, 1i32..50), 0..120)
    ) {
        let keys = cells(&initial);
        check_decrease_key(FibonacciHeap::new(by_key(&keys)), &keys, ops, fibonacci_invariants)?;
    }

    #[test]
    fn test_queues_agree_on_distances(vertices in 1usize..80, edge_factor in 0usize..6, seed in any::<u64>()) {
        let graph = random_graph(vertices, edge_factor as f64, Some(seed)).unwrap();
        let binary = Dijkstra::new()
            .with_queue(QueueKind::Binary)
            .compute_shortest_paths(&graph, 0)
            .unwrap();
        let fibonacci = Dijkstra::new()
            .with_queue(QueueKind::Fibonacci)
            .compute_shortest_paths(&graph, 0)
            .unwrap();
        prop_assert_eq!(binary.distances, fibonacci.distances);
        prop_assert_eq!(binary.stats.extracted, fibonacci.stats.extracted);
    }
}
