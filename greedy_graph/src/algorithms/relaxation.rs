//! Lazy-deletion relaxation loop shared by shortest paths and Prim.
//!
//! Instead of decreasing a key in place, an improved candidate is pushed as
//! a new heap entry. Entries popped for a node that is already settled are
//! stale and get discarded.

use tracing::trace;

use crate::{Graph, NodeId, PairHeap, Result};

/// What the loop pushes for an edge `(weight, neighbor)` out of a node
/// popped at key `dist`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RelaxationKey {
    /// `dist + weight`: shortest paths.
    AccumulatedDistance,
    /// `weight`: Prim's spanning tree.
    EdgeWeight,
}

impl RelaxationKey {
    #[inline]
    fn candidate(self, dist: f64, weight: f64) -> f64 {
        match self {
            Self::AccumulatedDistance => dist + weight,
            Self::EdgeWeight => weight,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Open,
    Settled,
}

/// Dense per-node tables produced by one run.
#[derive(Debug)]
pub(crate) struct Relaxation {
    /// Best key seen per node; `INFINITY` if never reached.
    pub(crate) best: Vec<f64>,
    pub(crate) parents: Vec<Option<usize>>,
    /// Nodes in the order they were settled, source first.
    pub(crate) settled: Vec<usize>,
    pub(crate) stale_entries: usize,
}

impl<N: NodeId> Graph<N> {
    /// Caller guarantees `source < node_count()`.
    pub(crate) fn relax_from(&self, source: usize, key: RelaxationKey) -> Result<Relaxation> {
        let n = self.node_count();
        let mut best = vec![f64::INFINITY; n];
        let mut parents = vec![None; n];
        let mut marks = vec![Mark::Open; n];
        let mut settled = Vec::with_capacity(n);
        let mut stale_entries = 0;

        let mut heap = PairHeap::with_capacity(self.config().heap_capacity_or(n));
        best[source] = 0.0;
        heap.insert(0.0, source);

        while !heap.is_empty() {
            let (dist, node) = heap.extract_min()?;
            if marks[node] == Mark::Settled {
                stale_entries += 1;
                trace!(node, dist, "discarding stale entry");
                continue;
            }
            marks[node] = Mark::Settled;
            settled.push(node);

            for edge in self.edges_at(node) {
                let neighbor = edge.target;
                if marks[neighbor] == Mark::Settled {
                    continue;
                }
                let candidate = key.candidate(dist, edge.weight);
                heap.insert(candidate, neighbor);
                if candidate < best[neighbor] {
                    best[neighbor] = candidate;
                    parents[neighbor] = Some(node);
                }
            }
        }

        Ok(Relaxation {
            best,
            parents,
            settled,
            stale_entries,
        })
    }
}
