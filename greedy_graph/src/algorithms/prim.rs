//! Minimum spanning tree by edge relaxation (Prim).
//!
//! Same loop as shortest paths, but each node is keyed by the lightest edge
//! joining it to the tree grown so far rather than by accumulated distance.
//! Edges are read as given; add both directions for an undirected graph.

use tracing::{debug, instrument};

use super::relaxation::RelaxationKey;
use super::spanning::{SpanningEdge, SpanningForest};
use crate::{Graph, NodeId, Result};

impl<N: NodeId> Graph<N> {
    /// Minimum spanning tree of the component containing `source`.
    ///
    /// Nodes outside that component get no parent and count as singleton
    /// trees in the result.
    ///
    /// Time complexity: O((V + E) log V).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownElement`](crate::GraphError::UnknownElement)
    /// if `source` is not in the graph.
    #[instrument(skip_all, fields(nodes = self.node_count(), edges = self.edge_count()))]
    pub fn minimum_spanning_tree_by_relaxation(&self, source: &N) -> Result<SpanningForest<N>> {
        let start = self.index_of(source)?;
        let run = self.relax_from(start, RelaxationKey::EdgeWeight)?;

        let edges: Vec<SpanningEdge<N>> = run
            .settled
            .iter()
            .filter_map(|&node| {
                run.parents[node].map(|parent| SpanningEdge {
                    from: self.node_at(parent).clone(),
                    to: self.node_at(node).clone(),
                    weight: run.best[node],
                })
            })
            .collect();

        debug!(
            accepted = edges.len(),
            stale = run.stale_entries,
            "relaxation spanning tree complete"
        );
        Ok(SpanningForest::new(self.nodes().to_vec(), edges))
    }
}
