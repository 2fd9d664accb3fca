//! In-memory weighted adjacency representation.
//!
//! Node ids are assigned dense indices in insertion order, so the
//! algorithms index plain vectors for their distance, visited and parent
//! tables whether ids are small integers or arbitrary strings. Results are
//! reported back in terms of the caller's ids.

use std::collections::HashMap;

use crate::{GraphConfig, GraphError, NodeId, Result};

/// Directed weighted edge stored against its source node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct IndexedEdge {
    pub(crate) weight: f64,
    pub(crate) target: usize,
}

/// A weighted directed graph keyed by `N`.
///
/// Edge weights are expected to be non-negative for shortest paths. This
/// is not validated.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    adjacency: Vec<Vec<IndexedEdge>>,
    config: GraphConfig,
}

impl<N: NodeId> Default for Graph<N> {
    fn default() -> Self {
        Self::with_config(GraphConfig::default())
    }
}

impl<N: NodeId> Graph<N> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            config,
        }
    }

    /// Build from `(node, [(weight, target), ...])` entries.
    ///
    /// Every key is registered before any edge, so entries may reference
    /// nodes listed later.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateElement`] if a key repeats and
    /// [`GraphError::UnknownElement`] if an edge targets a node that has no
    /// entry.
    pub fn from_adjacency<I, E>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, E)>,
        E: IntoIterator<Item = (f64, N)>,
    {
        Self::from_adjacency_with_config(entries, GraphConfig::default())
    }

    /// # Errors
    ///
    /// See [`Graph::from_adjacency`].
    pub fn from_adjacency_with_config<I, E>(entries: I, config: GraphConfig) -> Result<Self>
    where
        I: IntoIterator<Item = (N, E)>,
        E: IntoIterator<Item = (f64, N)>,
    {
        let mut graph = Self::with_config(config);
        let entries: Vec<(N, E)> = entries.into_iter().collect();
        for (node, _) in &entries {
            graph.add_node(node.clone())?;
        }
        for (node, edges) in entries {
            for (weight, target) in edges {
                graph.add_edge(&node, weight, &target)?;
            }
        }
        Ok(graph)
    }

    #[must_use]
    pub const fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Register a node, returning its dense index.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateElement`] if it already exists.
    pub fn add_node(&mut self, node: N) -> Result<usize> {
        if self.index.contains_key(&node) {
            return Err(GraphError::duplicate(&node));
        }
        let idx = self.nodes.len();
        self.index.insert(node.clone(), idx);
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        Ok(idx)
    }

    /// Append a directed edge `from -> to`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownElement`] if either endpoint is missing.
    pub fn add_edge(&mut self, from: &N, weight: f64, to: &N) -> Result<()> {
        let source = self.index_of(from)?;
        let target = self.index_of(to)?;
        self.adjacency[source].push(IndexedEdge { weight, target });
        Ok(())
    }

    /// Append `a -> b` and `b -> a` with the same weight.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownElement`] if either endpoint is missing.
    pub fn add_undirected_edge(&mut self, a: &N, weight: f64, b: &N) -> Result<()> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        self.adjacency[ia].push(IndexedEdge { weight, target: ib });
        self.adjacency[ib].push(IndexedEdge { weight, target: ia });
        Ok(())
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn contains(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Nodes in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// # Errors
    ///
    /// Returns [`GraphError::UnknownElement`] if `node` is missing.
    pub fn index_of(&self, node: &N) -> Result<usize> {
        self.index
            .get(node)
            .copied()
            .ok_or_else(|| GraphError::unknown(node))
    }

    /// Outgoing `(weight, target)` pairs of `node`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownElement`] if `node` is missing.
    pub fn edges(&self, node: &N) -> Result<Vec<(f64, &N)>> {
        let idx = self.index_of(node)?;
        Ok(self.adjacency[idx]
            .iter()
            .map(|edge| (edge.weight, &self.nodes[edge.target]))
            .collect())
    }

    pub(crate) fn node_at(&self, idx: usize) -> &N {
        &self.nodes[idx]
    }

    pub(crate) fn edges_at(&self, idx: usize) -> &[IndexedEdge] {
        &self.adjacency[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let graph: Graph<u32> = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.config(), &GraphConfig::default());
    }

    #[test]
    fn test_add_nodes_and_edges() {
        let mut graph = Graph::new();
        assert_eq!(graph.add_node("a").unwrap(), 0);
        assert_eq!(graph.add_node("b").unwrap(), 1);
        graph.add_edge(&"a", 2.0, &"b").unwrap();
        graph.add_undirected_edge(&"a", 1.5, &"b").unwrap();

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edges(&"a").unwrap(), vec![(2.0, &"b"), (1.5, &"b")]);
        assert_eq!(graph.edges(&"b").unwrap(), vec![(1.5, &"a")]);
        assert_eq!(graph.index_of(&"b").unwrap(), 1);
        assert!(graph.contains(&"a"));
        assert!(!graph.contains(&"z"));
    }

    #[test]
    fn test_duplicate_node() {
        let mut graph = Graph::new();
        graph.add_node(1_u8).unwrap();
        assert_eq!(
            graph.add_node(1),
            Err(GraphError::DuplicateElement("1".into()))
        );
    }

    #[test]
    fn test_edge_to_unknown_node() {
        let mut graph = Graph::new();
        graph.add_node(0_u32).unwrap();
        assert_eq!(
            graph.add_edge(&0, 1.0, &9),
            Err(GraphError::UnknownElement("9".into()))
        );
        assert!(graph.add_undirected_edge(&9, 1.0, &0).is_err());
        assert!(graph.edges(&9).is_err());
    }

    #[test]
    fn test_from_adjacency_allows_forward_references() {
        let graph = Graph::from_adjacency([
            (5_u32, vec![(2.0, 4)]),
            (4, vec![(2.0, 3)]),
            (3, vec![]),
        ])
        .unwrap();
        assert_eq!(graph.nodes(), &[5_u32, 4, 3]);
        assert_eq!(graph.edges(&5).unwrap(), vec![(2.0, &4)]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_from_adjacency_errors() {
        let dangling = Graph::from_adjacency([(0_u32, vec![(1.0, 1)])]);
        assert!(matches!(dangling, Err(GraphError::UnknownElement(_))));

        let repeated = Graph::from_adjacency([(0_u32, vec![]), (0, vec![])]);
        assert!(matches!(repeated, Err(GraphError::DuplicateElement(_))));
    }

    #[test]
    fn test_with_config() {
        let config = GraphConfig::new().path_compression(false);
        let graph: Graph<String> =
            Graph::from_adjacency_with_config(Vec::<(String, Vec<(f64, String)>)>::new(), config)
                .unwrap();
        assert!(!graph.config().path_compression);
    }
}
