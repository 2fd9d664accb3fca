//! Single-source shortest paths (Dijkstra).
//!
//! Requires non-negative edge weights. Negative weights are not detected and
//! give unspecified distances.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::relaxation::RelaxationKey;
use crate::{Graph, NodeId, Result};

/// Result of a shortest-path run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPaths<N: NodeId> {
    pub source: N,
    /// Shortest known distance per node; `f64::INFINITY` if unreached.
    ///
    /// Unreached nodes serialize as `null`.
    #[serde(with = "unreached_as_null")]
    pub distances: HashMap<N, f64>,
    /// Predecessor on a shortest path. `None` for the source and unreached nodes.
    pub parents: HashMap<N, Option<N>>,
    /// Number of nodes finalized.
    pub nodes_settled: usize,
    /// Heap entries discarded because their node was already finalized.
    pub stale_entries: usize,
}

/// JSON has no infinity, so unreached distances travel as `None`.
mod unreached_as_null {
    use std::{collections::HashMap, hash::Hash};

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<N, S>(distances: &HashMap<N, f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        N: Serialize,
        S: Serializer,
    {
        serializer.collect_map(
            distances
                .iter()
                .map(|(node, &distance)| (node, distance.is_finite().then_some(distance))),
        )
    }

    pub fn deserialize<'de, N, D>(deserializer: D) -> Result<HashMap<N, f64>, D::Error>
    where
        N: Deserialize<'de> + Eq + Hash,
        D: Deserializer<'de>,
    {
        let wire: HashMap<N, Option<f64>> = HashMap::deserialize(deserializer)?;
        Ok(wire
            .into_iter()
            .map(|(node, distance)| (node, distance.unwrap_or(f64::INFINITY)))
            .collect())
    }
}

impl<N: NodeId> ShortestPaths<N> {
    /// `None` if `node` is not in the graph.
    #[must_use]
    pub fn distance(&self, node: &N) -> Option<f64> {
        self.distances.get(node).copied()
    }

    #[must_use]
    pub fn parent(&self, node: &N) -> Option<&N> {
        self.parents.get(node).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn is_reachable(&self, node: &N) -> bool {
        self.distance(node).is_some_and(f64::is_finite)
    }

    /// Distances listed in the given node order.
    ///
    /// Nodes unknown to this result report `f64::INFINITY`.
    pub fn distances_in<'a, I>(&self, order: I) -> Vec<f64>
    where
        I: IntoIterator<Item = &'a N>,
        N: 'a,
    {
        order
            .into_iter()
            .map(|node| self.distance(node).unwrap_or(f64::INFINITY))
            .collect()
    }

    /// Nodes on a shortest path from the source to `target`, inclusive.
    #[must_use]
    pub fn path_to(&self, target: &N) -> Option<Vec<N>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while *current != self.source {
            current = self.parent(current)?;
            path.push(current.clone());
            if path.len() > self.distances.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

impl<N: NodeId> Graph<N> {
    /// Shortest distances and predecessor tree from `source`.
    ///
    /// Time complexity: O((V + E) log V).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownElement`](crate::GraphError::UnknownElement)
    /// if `source` is not in the graph.
    #[instrument(skip_all, fields(nodes = self.node_count(), edges = self.edge_count()))]
    pub fn shortest_paths(&self, source: &N) -> Result<ShortestPaths<N>> {
        let start = self.index_of(source)?;
        let run = self.relax_from(start, RelaxationKey::AccumulatedDistance)?;

        debug!(
            settled = run.settled.len(),
            stale = run.stale_entries,
            "shortest paths complete"
        );

        let distances = self
            .nodes()
            .iter()
            .cloned()
            .zip(run.best.iter().copied())
            .collect();
        let parents = self
            .nodes()
            .iter()
            .cloned()
            .zip(
                run.parents
                    .iter()
                    .map(|parent| parent.map(|idx| self.node_at(idx).clone())),
            )
            .collect();

        Ok(ShortestPaths {
            source: source.clone(),
            distances,
            parents,
            nodes_settled: run.settled.len(),
            stale_entries: run.stale_entries,
        })
    }
}
