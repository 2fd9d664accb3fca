//! Configuration for the graph algorithms.

/// Configuration for algorithm runs on a [`Graph`](crate::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// Whether the forest built by edge-sort spanning trees compresses paths.
    pub path_compression: bool,
    /// Stop edge-sort spanning trees once `n - 1` edges are accepted.
    pub stop_at_spanning_edges: bool,
    /// Initial capacity for algorithm heaps. Zero sizes them from the graph.
    pub heap_capacity_hint: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            path_compression: true,
            stop_at_spanning_edges: true,
            heap_capacity_hint: 0,
        }
    }
}

impl GraphConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn path_compression(mut self, enabled: bool) -> Self {
        self.path_compression = enabled;
        self
    }

    #[must_use]
    pub const fn stop_at_spanning_edges(mut self, enabled: bool) -> Self {
        self.stop_at_spanning_edges = enabled;
        self
    }

    #[must_use]
    pub const fn heap_capacity_hint(mut self, capacity: usize) -> Self {
        self.heap_capacity_hint = capacity;
        self
    }

    /// Heap capacity to use, falling back to `derived` when no hint is set.
    pub(crate) const fn heap_capacity_or(&self, derived: usize) -> usize {
        if self.heap_capacity_hint == 0 {
            derived
        } else {
            self.heap_capacity_hint
        }
    }
}
