use thiserror::Error;

use crate::{EdgeId, VertexId};

/// Errors returned by graph lookups and algorithms
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// No vertex (or no adjacency entry) with this id exists
    #[error("vertex {0} not found")]
    VertexNotFound(VertexId),

    /// No edge with this id exists
    #[error("edge {0} not found")]
    EdgeNotFound(EdgeId),

    /// The graph violates one of its own invariants, e.g. an adjacency entry references an
    /// edge missing from the edge table. Algorithms stop as soon as they observe this.
    #[error("graph is inconsistent: {0}")]
    Inconsistent(String),

    /// Two-coloring found an odd cycle
    #[error("The graph is not bipartite")]
    NotBipartite,
}

impl GraphError {
    /// Returns true for lookup failures that a caller may reasonably expect
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::VertexNotFound(_) | Self::EdgeNotFound(_))
    }
}

/// Shorthand used throughout the crate
pub type Result<T, E = GraphError> = std::result::Result<T, E>;
