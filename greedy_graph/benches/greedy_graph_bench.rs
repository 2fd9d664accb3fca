// SPDX-License-Identifier: MIT OR Apache-2.0
#![allow(missing_docs)]
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use greedy_graph::{DisjointSetForest, Graph, PairHeap};

/// Square grid with undirected edges to the right and downward neighbours.
fn create_grid(side: usize) -> Graph<usize> {
    let mut graph = Graph::new();
    for id in 0..side * side {
        graph.add_node(id).unwrap();
    }
    for row in 0..side {
        for col in 0..side {
            let id = row * side + col;
            // Varied but deterministic weights
            let weight = ((id * 7919) % 97 + 1) as f64;
            if col + 1 < side {
                graph.add_undirected_edge(&id, weight, &(id + 1)).unwrap();
            }
            if row + 1 < side {
                graph
                    .add_undirected_edge(&id, weight + 0.5, &(id + side))
                    .unwrap();
            }
        }
    }
    graph
}

fn bench_heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("pair_heap");

    for size in [100, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::new("insert_drain", size), size, |b, &size| {
            b.iter(|| {
                let mut heap = PairHeap::with_capacity(size);
                for i in 0..size {
                    heap.insert((i * 7919) % size, i);
                }
                while let Ok(entry) = heap.extract_min() {
                    black_box(entry);
                }
            });
        });
    }

    group.finish();
}

fn bench_forest(c: &mut Criterion) {
    let mut group = c.benchmark_group("disjoint_set_forest");

    for size in [100, 1000, 10_000].iter() {
        for compressed in [true, false] {
            let label = if compressed { "compressed" } else { "plain" };
            group.bench_with_input(BenchmarkId::new(label, size), size, |b, &size| {
                b.iter(|| {
                    let mut forest: DisjointSetForest<usize> =
                        DisjointSetForest::from_elements_with_compression(0..size, compressed)
                            .unwrap();
                    for i in 1..size {
                        forest.union(&(i - 1), &i).unwrap();
                    }
                    for i in 0..size {
                        black_box(forest.find(&i).unwrap());
                    }
                });
            });
        }
    }

    group.finish();
}

fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_paths");

    for side in [10, 30, 60].iter() {
        let graph = create_grid(*side);
        group.bench_with_input(BenchmarkId::new("grid", side), side, |b, _| {
            b.iter(|| black_box(graph.shortest_paths(&0).unwrap()));
        });
    }

    group.finish();
}

fn bench_spanning_trees(c: &mut Criterion) {
    let mut group = c.benchmark_group("spanning_tree");

    for side in [10, 30, 60].iter() {
        let graph = create_grid(*side);
        group.bench_with_input(BenchmarkId::new("relaxation", side), side, |b, _| {
            b.iter(|| black_box(graph.minimum_spanning_tree_by_relaxation(&0).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("edge_sort", side), side, |b, _| {
            b.iter(|| black_box(graph.minimum_spanning_tree_by_edge_sort().unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_heap,
    bench_forest,
    bench_shortest_paths,
    bench_spanning_trees,
);

criterion_main!(benches);
