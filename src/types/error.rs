//! Error types for the social-graph library.

use thiserror::Error;

/// All errors that can occur in the social-graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A blank label was passed to a structural operation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No node exists for this label.
    #[error("Node {0} not found")]
    NodeNotFound(String),

    /// The source node exists but has no edge to the target.
    #[error("Edge {from} -> {to} not found")]
    EdgeNotFound { from: String, to: String },

    /// The operation needs more vertices than the graph currently holds.
    #[error("Empty collection: {0}")]
    EmptyCollection(&'static str),

    /// Malformed line in an ingestion source.
    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Configuration file could not be read or decoded.
    #[error("Config error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of a [`GraphError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    EmptyCollection,
    Input,
    Io,
}

impl GraphError {
    /// Fold the variants into the caller-facing taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::NodeNotFound(_) | Self::EdgeNotFound { .. } => ErrorKind::NotFound,
            Self::EmptyCollection(_) => ErrorKind::EmptyCollection,
            Self::Parse { .. } | Self::Config(_) => ErrorKind::Input,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    pub(crate) fn node_not_found(label: &impl std::fmt::Display) -> Self {
        Self::NodeNotFound(label.to_string())
    }

    pub(crate) fn edge_not_found(
        from: &impl std::fmt::Display,
        to: &impl std::fmt::Display,
    ) -> Self {
        Self::EdgeNotFound {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// Convenience result type for social-graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
