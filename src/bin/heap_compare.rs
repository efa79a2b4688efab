use std::cell::Cell;
use std::collections::HashSet;
use std::env;
use std::time::Instant;

use heap_sssp::data_structures::{BinaryHeap, FibonacciHeap, NodeHandle, PriorityQueue};
use rand::prelude::*;

// Inserts every key, lowers the marked ones by one, then drains the queue
fn exercise<Q: PriorityQueue<usize>>(mut queue: Q, keys: &[Cell<i64>], to_change: &HashSet<usize>) -> bool {
    println!("{}:", queue.name());

    let start = Instant::now();
    let mut handles: Vec<NodeHandle> = Vec::with_capacity(to_change.len());
    for i in 0..keys.len() {
        let handle = queue.insert(i);
        if to_change.contains(&i) {
            handles.push(handle);
        }
    }
    println!("  insert() took {:.6} seconds", start.elapsed().as_secs_f64());

    println!("  changing priority of {} elements", handles.len());
    let start = Instant::now();
    for handle in &handles {
        if let Some(&i) = queue.get(handle) {
            keys[i].set(keys[i].get() - 1);
            queue.decrease_key(handle);
        }
    }
    println!("  decrease_key() took {:.6} seconds", start.elapsed().as_secs_f64());

    let start = Instant::now();
    let mut extracted = Vec::with_capacity(keys.len());
    while let Some(i) = queue.extract_min() {
        extracted.push(keys[i].get());
    }
    println!("  extract_min() took {:.6} seconds", start.elapsed().as_secs_f64());

    extracted.len() == keys.len() && extracted.windows(2).all(|w| w[0] <= w[1])
}

fn main() {
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let size: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let seed: Option<u64> = args.get(2).and_then(|s| s.parse().ok());

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let initial: Vec<i64> = (0..size).map(|_| rng.gen_range(0..size.max(1) as i64)).collect();
    let to_change: HashSet<usize> = (0..size).filter(|_| rng.gen_range(0..100) % 7 == 0).collect();

    println!("=====================================================");
    println!("Heap comparison: {} elements", size);
    println!("=====================================================");

    let fib_keys: Vec<Cell<i64>> = initial.iter().copied().map(Cell::new).collect();
    let fib_sorted = exercise(
        FibonacciHeap::with_capacity(size, |a: &usize, b: &usize| fib_keys[*a].get().cmp(&fib_keys[*b].get())),
        &fib_keys,
        &to_change,
    );

    let bin_keys: Vec<Cell<i64>> = initial.iter().copied().map(Cell::new).collect();
    let bin_sorted = exercise(
        BinaryHeap::with_capacity(size, |a: &usize, b: &usize| bin_keys[*a].get().cmp(&bin_keys[*b].get())),
        &bin_keys,
        &to_change,
    );

    if fib_sorted && bin_sorted {
        println!("both heaps extracted every element in order");
    } else {
        eprintln!(
            "extraction order broken (fibonacci ok: {}, binary ok: {})",
            fib_sorted, bin_sorted
        );
        std::process::exit(1);
    }
}
