use std::cell::Cell;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use heap_sssp::data_structures::{BinaryHeap, FibonacciHeap, PriorityQueue, QueueKind};
use heap_sssp::graph::generators::{dense_matrix, DenseGraphConfig};
use heap_sssp::{Dijkstra, ShortestPathAlgorithm};
use rand::prelude::*;

fn drain_with_decreases<Q: PriorityQueue<usize>>(mut queue: Q, keys: &[Cell<i64>]) -> i64 {
    let handles: Vec<_> = (0..keys.len()).map(|i| queue.insert(i)).collect();
    for (i, handle) in handles.iter().enumerate().step_by(7) {
        keys[i].set(keys[i].get() - 1_000);
        queue.decrease_key(handle);
    }
    let mut last = i64::MIN;
    while let Some(i) = queue.extract_min() {
        last = keys[i].get();
    }
    last
}

fn bench_heaps(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_decrease_drain");
    for &size in &[1_000usize, 10_000, 100_000] {
        let mut rng = StdRng::seed_from_u64(42);
        let initial: Vec<i64> = (0..size).map(|_| rng.gen_range(0..size as i64)).collect();

        group.bench_with_input(BenchmarkId::new("binary", size), &initial, |b, initial| {
            b.iter(|| {
                let keys: Vec<Cell<i64>> = initial.iter().copied().map(Cell::new).collect();
                let queue = BinaryHeap::new(|a: &usize, b: &usize| keys[*a].get().cmp(&keys[*b].get()));
                black_box(drain_with_decreases(queue, &keys))
            })
        });
        group.bench_with_input(BenchmarkId::new("fibonacci", size), &initial, |b, initial| {
            b.iter(|| {
                let keys: Vec<Cell<i64>> = initial.iter().copied().map(Cell::new).collect();
                let queue = FibonacciHeap::new(|a: &usize, b: &usize| keys[*a].get().cmp(&keys[*b].get()));
                black_box(drain_with_decreases(queue, &keys))
            })
        });
    }
    group.finish();
}

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_dense");
    group.sample_size(10);
    for &size in &[250usize, 1_000] {
        let config = DenseGraphConfig {
            vertices: size,
            seed: Some(7),
            ..Default::default()
        };
        let graph = dense_matrix(&config).unwrap();
        for kind in QueueKind::ALL {
            let dijkstra = Dijkstra::new().with_queue(kind);
            group.bench_with_input(BenchmarkId::new(kind.name(), size), &graph, |b, graph| {
                b.iter(|| black_box(dijkstra.compute_shortest_paths(graph, 0).unwrap()))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_heaps, bench_dijkstra);
criterion_main!(benches);
