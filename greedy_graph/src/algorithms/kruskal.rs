//! Minimum spanning tree by global edge sort (Kruskal).
//!
//! Every directed edge goes into a [`PairHeap`] keyed by weight and is
//! taken lightest first. An edge whose endpoints already share a set in the
//! [`DisjointSetForest`] would close a cycle and is dropped, so listing an
//! undirected edge in both directions is harmless.

use tracing::{debug, instrument, trace};

use super::spanning::{SpanningEdge, SpanningForest};
use crate::{DisjointSetForest, Graph, NodeId, PairHeap, Result};

impl<N: NodeId> Graph<N> {
    /// Minimum spanning forest over every node of the graph.
    ///
    /// Stops once `n - 1` edges are accepted (unless
    /// `GraphConfig::stop_at_spanning_edges` is off) or when the edges run
    /// out, which is what happens on a disconnected graph.
    ///
    /// Time complexity: O(E log E).
    ///
    /// # Errors
    ///
    /// Propagates forest or heap errors; none occur for a graph built
    /// through [`Graph`]'s constructors.
    #[instrument(skip_all, fields(nodes = self.node_count(), edges = self.edge_count()))]
    pub fn minimum_spanning_tree_by_edge_sort(&self) -> Result<SpanningForest<N>> {
        let n = self.node_count();
        let config = self.config();

        let mut forest: DisjointSetForest<usize> =
            DisjointSetForest::from_elements_with_compression(0..n, config.path_compression)?;
        let mut heap = PairHeap::with_capacity(config.heap_capacity_or(self.edge_count()));
        for source in 0..n {
            for edge in self.edges_at(source) {
                heap.insert(edge.weight, (source, edge.target));
            }
        }

        let wanted = n.saturating_sub(1);
        let mut accepted: Vec<SpanningEdge<N>> = Vec::with_capacity(wanted);
        let mut examined = 0_usize;

        while !heap.is_empty() {
            if config.stop_at_spanning_edges && accepted.len() >= wanted {
                break;
            }
            let (weight, (source, target)) = heap.extract_min()?;
            examined += 1;

            if forest.union(&source, &target)? {
                accepted.push(SpanningEdge {
                    from: self.node_at(source).clone(),
                    to: self.node_at(target).clone(),
                    weight,
                });
            } else {
                trace!(source, target, weight, "rejecting cycle edge");
            }
        }

        debug!(
            accepted = accepted.len(),
            examined,
            remaining = heap.len(),
            trees = forest.set_count(),
            "edge-sort spanning tree complete"
        );
        Ok(SpanningForest::new(self.nodes().to_vec(), accepted))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::GraphConfig;

    fn undirected_pairs(tree: &SpanningForest<u32>) -> BTreeSet<(u32, u32)> {
        tree.edges
            .iter()
            .map(|e| (e.from.min(e.to), e.from.max(e.to)))
            .collect()
    }

    #[test]
    fn test_empty_graph() {
        let graph: Graph<u32> = Graph::new();
        let tree = graph.minimum_spanning_tree_by_edge_sort().unwrap();
        assert!(tree.edges.is_empty());
        assert_eq!(tree.tree_count(), 0);
    }

    #[test]
    fn test_single_node() {
        let graph = Graph::from_adjacency([(0_u32, vec![(1.0, 0)])]).unwrap();
        let tree = graph.minimum_spanning_tree_by_edge_sort().unwrap();
        assert!(tree.edges.is_empty());
        assert!(tree.is_spanning_tree());
    }

    #[test]
    fn test_selects_minimum_edges() {
        let mut graph = Graph::new();
        for n in 0..4_u32 {
            graph.add_node(n).unwrap();
        }
        graph.add_undirected_edge(&0, 1.0, &1).unwrap();
        graph.add_undirected_edge(&1, 2.0, &2).unwrap();
        graph.add_undirected_edge(&2, 3.0, &3).unwrap();
        graph.add_undirected_edge(&0, 10.0, &3).unwrap();

        let tree = graph.minimum_spanning_tree_by_edge_sort().unwrap();
        assert_eq!(tree.edge_count(), 3);
        assert!((tree.total_weight - 6.0).abs() < f64::EPSILON);
        assert_eq!(
            undirected_pairs(&tree),
            BTreeSet::from([(0, 1), (1, 2), (2, 3)])
        );
    }

    #[test]
    fn test_records_target_as_child_of_source() {
        // One direction only, so the recorded orientation is fixed.
        let graph = Graph::from_adjacency([
            (0_u32, vec![(5.0, 1)]),
            (1, vec![]),
            (2, vec![(1.0, 1)]),
        ])
        .unwrap();
        let tree = graph.minimum_spanning_tree_by_edge_sort().unwrap();
        let children = tree.children();
        assert_eq!(children[&2], vec![1]);
        assert_eq!(children[&0], vec![1]);
        assert!(children[&1].is_empty());
        assert!(tree.is_spanning_tree());

        // 1 is the child of both accepted edges; the rooted view still
        // keeps one parent link per edge.
        let parents = tree.parents();
        assert_eq!(parents[&0], None);
        assert_eq!(parents[&1], Some(0));
        assert_eq!(parents[&2], Some(1));
        assert_eq!(parents.values().flatten().count(), tree.edge_count());
    }

    #[test]
    fn test_disconnected_forest() {
        let mut graph = Graph::new();
        for n in 0..5_u32 {
            graph.add_node(n).unwrap();
        }
        graph.add_undirected_edge(&0, 1.0, &1).unwrap();
        graph.add_undirected_edge(&2, 2.0, &3).unwrap();

        let tree = graph.minimum_spanning_tree_by_edge_sort().unwrap();
        assert_eq!(tree.edge_count(), 2);
        assert_eq!(tree.tree_count(), 3);
        assert_eq!(
            tree.components().unwrap(),
            vec![vec![0, 1], vec![2, 3], vec![4]]
        );
        assert_eq!(tree.parents()[&4], None);
    }

    #[test]
    fn test_disconnected_accepts_past_node_count_cutoff() {
        // Two heavy edges in the second component come after enough
        // directed edges to trip an "i < n" extraction cutoff.
        let mut graph = Graph::new();
        for n in 0..6_u32 {
            graph.add_node(n).unwrap();
        }
        graph.add_undirected_edge(&0, 1.0, &1).unwrap();
        graph.add_undirected_edge(&1, 1.0, &2).unwrap();
        graph.add_undirected_edge(&0, 1.0, &2).unwrap();
        graph.add_undirected_edge(&3, 9.0, &4).unwrap();
        graph.add_undirected_edge(&4, 9.0, &5).unwrap();

        let tree = graph.minimum_spanning_tree_by_edge_sort().unwrap();
        assert_eq!(tree.edge_count(), 4);
        assert!((tree.total_weight - 20.0).abs() < f64::EPSILON);
        assert_eq!(tree.tree_count(), 2);
    }

    #[test]
    fn test_config_variants_agree() {
        let build = |config: GraphConfig| {
            let mut graph = Graph::with_config(config);
            for n in 0..5_u32 {
                graph.add_node(n).unwrap();
            }
            for (a, w, b) in [
                (0, 4.0, 1),
                (1, 1.0, 2),
                (2, 3.0, 3),
                (3, 2.0, 4),
                (0, 5.0, 4),
                (1, 6.0, 3),
            ] {
                graph.add_undirected_edge(&a, w, &b).unwrap();
            }
            graph
        };

        let baseline = build(GraphConfig::default())
            .minimum_spanning_tree_by_edge_sort()
            .unwrap();
        for config in [
            GraphConfig::new().path_compression(false),
            GraphConfig::new().stop_at_spanning_edges(false),
            GraphConfig::new().heap_capacity_hint(1),
        ] {
            let tree = build(config).minimum_spanning_tree_by_edge_sort().unwrap();
            assert!((tree.total_weight - baseline.total_weight).abs() < f64::EPSILON);
            assert_eq!(undirected_pairs(&tree), undirected_pairs(&baseline));
        }
        assert!((baseline.total_weight - 10.0).abs() < f64::EPSILON);
    }
}
