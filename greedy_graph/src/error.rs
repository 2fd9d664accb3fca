//! Error types for the heap, the forest and the graph algorithms.

use thiserror::Error;

/// Error type for structural failures.
///
/// Every variant is a local, synchronous failure reported to the immediate
/// caller. An algorithm that hits one aborts and returns no partial result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Extraction from a heap with no entries.
    #[error("structure is empty")]
    EmptyStructure,

    /// Lookup of an element that was never registered.
    #[error("unknown element: {0}")]
    UnknownElement(String),

    /// Registration of an element that already exists.
    #[error("duplicate element: {0}")]
    DuplicateElement(String),

    /// Direct heap index operation outside `0..len`.
    #[error("index {index} out of range for length {len}")]
    InvalidIndex { index: usize, len: usize },
}

impl GraphError {
    pub(crate) fn unknown(element: &impl std::fmt::Debug) -> Self {
        Self::UnknownElement(format!("{element:?}"))
    }

    pub(crate) fn duplicate(element: &impl std::fmt::Debug) -> Self {
        Self::DuplicateElement(format!("{element:?}"))
    }
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(GraphError::EmptyStructure.to_string(), "structure is empty");

        let e = GraphError::unknown(&"a");
        assert_eq!(e.to_string(), "unknown element: \"a\"");

        let e = GraphError::duplicate(&7_u32);
        assert_eq!(e.to_string(), "duplicate element: 7");

        let e = GraphError::InvalidIndex { index: 4, len: 2 };
        assert_eq!(e.to_string(), "index 4 out of range for length 2");
    }

    #[test]
    fn test_error_clone_eq() {
        let e1 = GraphError::UnknownElement("x".into());
        let e2 = e1.clone();
        assert_eq!(e1, e2);
        assert_ne!(e1, GraphError::DuplicateElement("x".into()));
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&GraphError::EmptyStructure);
    }
}
