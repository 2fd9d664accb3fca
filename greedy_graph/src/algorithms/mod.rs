//! Graph algorithms module.
//!
//! This module provides the priority-queue driven algorithms:
//! - Single-source shortest paths (Dijkstra)
//! - Minimum spanning tree by edge relaxation (Prim)
//! - Minimum spanning tree by global edge sort (Kruskal)

mod dijkstra;
mod kruskal;
mod prim;
mod relaxation;
mod spanning;

pub use dijkstra::ShortestPaths;
pub use spanning::{SpanningEdge, SpanningForest};
