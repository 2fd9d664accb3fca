//! Output type shared by both minimum spanning tree algorithms.

use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::{DisjointSetForest, NodeId, Result};

/// An accepted tree edge. `to` is recorded as a child of `from`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanningEdge<N> {
    pub from: N,
    pub to: N,
    pub weight: f64,
}

/// A spanning tree, or a forest when the graph is disconnected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanningForest<N: NodeId> {
    /// Every node of the graph, in graph order.
    pub nodes: Vec<N>,
    /// Tree edges in the order they were accepted.
    pub edges: Vec<SpanningEdge<N>>,
    pub total_weight: f64,
}

impl<N: NodeId> SpanningForest<N> {
    pub(crate) fn new(nodes: Vec<N>, edges: Vec<SpanningEdge<N>>) -> Self {
        let total_weight = edges.iter().map(|e| e.weight).sum();
        Self {
            nodes,
            edges,
            total_weight,
        }
    }

    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of trees, counting every isolated node as its own tree.
    #[must_use]
    pub fn tree_count(&self) -> usize {
        self.nodes.len().saturating_sub(self.edges.len())
    }

    /// Whether the edges join every node into a single tree.
    #[must_use]
    pub fn is_spanning_tree(&self) -> bool {
        self.tree_count() == 1
    }

    /// Child lists per node. Every node is a key; leaves map to empty lists.
    #[must_use]
    pub fn children(&self) -> HashMap<N, Vec<N>> {
        let mut children: HashMap<N, Vec<N>> = self
            .nodes
            .iter()
            .map(|node| (node.clone(), Vec::new()))
            .collect();
        for edge in &self.edges {
            children
                .entry(edge.from.clone())
                .or_default()
                .push(edge.to.clone());
        }
        children
    }

    /// Parent per node with each tree hung from a root. Roots and isolated
    /// nodes map to `None`.
    ///
    /// Each tree is rooted at its first node in graph order that is never an
    /// edge's `to`, so a relaxation tree keeps its source as root. Edges are
    /// walked in both directions from there, which gives every accepted edge
    /// exactly one parent link even when a node is the `to` of several edges.
    #[must_use]
    pub fn parents(&self) -> HashMap<N, Option<N>> {
        self.nodes
            .iter()
            .zip(self.parent_slots())
            .map(|(node, slot)| (node.clone(), slot.map(|i| self.nodes[i].clone())))
            .collect()
    }

    #[must_use]
    pub fn parent_of(&self, node: &N) -> Option<&N> {
        let position = self.nodes.iter().position(|n| n == node)?;
        self.parent_slots()[position].map(|i| &self.nodes[i])
    }

    /// Parent position per node position. Edges naming nodes outside `nodes`
    /// are ignored.
    fn parent_slots(&self) -> Vec<Option<usize>> {
        let n = self.nodes.len();
        let index: HashMap<&N, usize> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node, i))
            .collect();

        let mut neighbours: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut incoming = vec![0_usize; n];
        for edge in &self.edges {
            let (Some(&from), Some(&to)) = (index.get(&edge.from), index.get(&edge.to)) else {
                continue;
            };
            neighbours[from].push(to);
            neighbours[to].push(from);
            incoming[to] += 1;
        }

        let mut slots = vec![None; n];
        let mut visited = vec![false; n];
        // Every tree has a node with no incoming edge; the second range only
        // matters for edge lists that contain a cycle.
        let roots = (0..n).filter(|&i| incoming[i] == 0).chain(0..n);
        for root in roots {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            let mut queue = VecDeque::from([root]);
            while let Some(current) = queue.pop_front() {
                for &next in &neighbours[current] {
                    if !visited[next] {
                        visited[next] = true;
                        slots[next] = Some(current);
                        queue.push_back(next);
                    }
                }
            }
        }
        slots
    }

    /// Node sets of each tree, ordered by each tree's first node in graph order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownElement`](crate::GraphError::UnknownElement)
    /// if an edge names a node missing from `nodes`.
    pub fn components(&self) -> Result<Vec<Vec<N>>> {
        let mut forest: DisjointSetForest<N, usize> =
            DisjointSetForest::from_elements(self.nodes.iter().cloned())?;
        for edge in &self.edges {
            forest.union(&edge.from, &edge.to)?;
        }

        let mut components: Vec<Vec<N>> = Vec::new();
        for node in &self.nodes {
            let leader = forest.find(node)?;
            if let Some(&slot) = forest.payload_of(&leader)? {
                components[slot].push(node.clone());
            } else {
                forest.attach_payload(&leader, components.len())?;
                components.push(vec![node.clone()]);
            }
        }
        Ok(components)
    }
}
