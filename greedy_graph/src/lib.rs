//! Priority-queue driven graph algorithms.
//!
//! Two reusable building blocks and three algorithms that consume them:
//!
//! - [`PairHeap`]: binary min-heap over `(key, payload)` pairs
//! - [`DisjointSetForest`]: union-find with size-weighted union and
//!   compressing find
//! - [`Graph::shortest_paths`]: Dijkstra
//! - [`Graph::minimum_spanning_tree_by_relaxation`]: Prim
//! - [`Graph::minimum_spanning_tree_by_edge_sort`]: Kruskal
//!
//! Every run owns its heap, forest and tables. The graph is only borrowed,
//! so a shared `&Graph` can serve any number of runs.
//!
//! # Example
//!
//! ```
//! use greedy_graph::Graph;
//!
//! let graph = Graph::from_adjacency([
//!     (0, vec![(10.0, 1), (3.0, 2)]),
//!     (1, vec![(1.0, 0), (2.0, 3)]),
//!     (2, vec![(4.0, 1), (2.0, 4), (8.0, 3)]),
//!     (3, vec![(7.0, 4)]),
//!     (4, vec![(9.0, 3)]),
//! ])?;
//!
//! let paths = graph.shortest_paths(&0)?;
//! assert_eq!(paths.distances_in(graph.nodes()), vec![0.0, 7.0, 3.0, 9.0, 5.0]);
//! assert_eq!(paths.parent(&1), Some(&2));
//! # Ok::<(), greedy_graph::GraphError>(())
//! ```

// Pedantic lint configuration for greedy_graph
#![allow(clippy::module_name_repetitions)] // GraphError, GraphConfig read better than Error, Config

use std::{fmt::Debug, hash::Hash};

pub mod algorithms;
pub mod config;
pub mod error;
pub mod forest;
pub mod graph;
pub mod heap;

pub use algorithms::{ShortestPaths, SpanningEdge, SpanningForest};
pub use config::GraphConfig;
pub use error::{GraphError, Result};
pub use forest::DisjointSetForest;
pub use graph::Graph;
pub use heap::PairHeap;

/// Bound for node identifiers and forest elements.
///
/// `Debug` lets errors name the offending element.
pub trait NodeId: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> NodeId for T {}
