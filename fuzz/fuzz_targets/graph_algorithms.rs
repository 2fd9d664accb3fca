// SPDX-License-Identifier: MIT OR Apache-2.0
#![no_main]

use arbitrary::Arbitrary;
use greedy_graph::Graph;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct GraphInput {
    node_count: u8,
    source: u8,
    // (from, to, weight)
    edges: Vec<(u8, u8, u8)>,
}

fuzz_target!(|input: GraphInput| {
    let n = usize::from(input.node_count).clamp(1, 32);
    let mut graph = Graph::new();
    for node in 0..n {
        graph.add_node(node).unwrap();
    }
    for (a, b, w) in input.edges.into_iter().take(128) {
        let (a, b) = (usize::from(a) % n, usize::from(b) % n);
        graph.add_undirected_edge(&a, f64::from(w), &b).unwrap();
    }
    let source = usize::from(input.source) % n;

    let paths = graph.shortest_paths(&source).unwrap();
    assert_eq!(paths.distance(&source), Some(0.0));
    for node in graph.nodes() {
        if let Some(parent) = paths.parent(node) {
            assert!(paths.distance(parent).unwrap() <= paths.distance(node).unwrap());
        }
        assert_eq!(paths.path_to(node).is_some(), paths.is_reachable(node));
    }

    let by_edge_sort = graph.minimum_spanning_tree_by_edge_sort().unwrap();
    assert_eq!(by_edge_sort.tree_count(), by_edge_sort.components().unwrap().len());

    // On the source's component both spanning trees weigh the same
    let by_relaxation = graph.minimum_spanning_tree_by_relaxation(&source).unwrap();
    let component = by_edge_sort
        .components()
        .unwrap()
        .into_iter()
        .find(|c| c.contains(&source))
        .unwrap();
    let component_weight: f64 = by_edge_sort
        .edges
        .iter()
        .filter(|e| component.contains(&e.from))
        .map(|e| e.weight)
        .sum();
    assert_eq!(by_relaxation.edge_count(), component.len() - 1);
    assert_eq!(by_relaxation.total_weight, component_weight);
});
