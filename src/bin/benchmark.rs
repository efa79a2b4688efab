use std::time::{Duration, Instant};

use heap_sssp::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
use heap_sssp::data_structures::QueueKind;
use heap_sssp::graph::generators::{dense_matrix, DenseGraphConfig};
use heap_sssp::graph::{AdjacencyMatrix, Graph};
use ordered_float::OrderedFloat;

// Function to benchmark one queue kind on a graph
fn benchmark_queue(
    kind: QueueKind,
    graph: &AdjacencyMatrix<OrderedFloat<f64>>,
    source: usize,
) -> heap_sssp::Result<(Duration, ShortestPathResult<OrderedFloat<f64>>)> {
    let dijkstra = Dijkstra::new().with_queue(kind);
    println!(
        "Running Dijkstra with a {} on {} vertices...",
        dijkstra.queue_kind(),
        graph.vertex_count()
    );

    let start = Instant::now();
    let result = dijkstra.compute_shortest_paths(graph, source)?;
    let duration = start.elapsed();

    println!(
        "  - Reached {} vertices in {:?} ({} inserts, {} decrease-keys)",
        result.reachable_count(),
        duration,
        result.stats.inserted,
        result.stats.decreased
    );
    Ok((duration, result))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let sizes: Vec<usize> = match args.get(1).and_then(|s| s.parse().ok()) {
        Some(size) => vec![size],
        None => vec![500, 1_000, 2_000, 4_000],
    };

    println!("=====================================================");
    println!("Benchmark: Dijkstra with binary heap vs Fibonacci heap");
    println!("=====================================================");

    let mut results = Vec::new();
    for &size in &sizes {
        let config = DenseGraphConfig {
            vertices: size,
            seed: Some(size as u64),
            ..Default::default()
        };
        println!("\nGenerating dense graph with {} vertices...", size);
        let graph = dense_matrix(&config)?;
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let (binary_time, binary) = benchmark_queue(QueueKind::Binary, &graph, 0)?;
        let (fibonacci_time, fibonacci) = benchmark_queue(QueueKind::Fibonacci, &graph, 0)?;

        if binary.distances != fibonacci.distances {
            return Err("binary and Fibonacci heaps disagree on distances".into());
        }
        results.push((size, graph.edge_count(), binary_time, fibonacci_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<15} | {:<15} | {:<10}", "Vertices", "Edges", "Binary (ms)", "Fibonacci (ms)", "Ratio");
    println!("-----------------------------------------------------");
    for (size, edges, binary_time, fibonacci_time) in &results {
        let ratio = fibonacci_time.as_secs_f64() / binary_time.as_secs_f64();
        println!(
            "{:<10} | {:<10} | {:<15} | {:<15} | {:<10.2}",
            size,
            edges,
            binary_time.as_millis(),
            fibonacci_time.as_millis(),
            ratio
        );
    }
    Ok(())
}
