//! Errors raised by graph operations

use super::edge::EdgeId;
use super::node::NodeId;
use thiserror::Error;

/// Coarse classification of a [`GraphError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidArgument,
    LengthMismatch,
    InvalidGraph,
    UnknownAttribute,
}

/// Errors that can occur in graph operations
///
/// A failed operation never leaves the graph partially modified.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("No node carries the label '{0}'")]
    LabelNotFound(String),

    #[error("Edge not found: {0}")]
    EdgeNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),
}

impl GraphError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::NodeNotFound(_)
            | GraphError::LabelNotFound(_)
            | GraphError::EdgeNotFound(_) => ErrorKind::NotFound,
            GraphError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            GraphError::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            GraphError::InvalidGraph(_) => ErrorKind::InvalidGraph,
            GraphError::UnknownAttribute(_) => ErrorKind::UnknownAttribute,
        }
    }

    pub(crate) fn edge_id_not_found(id: EdgeId) -> Self {
        GraphError::EdgeNotFound(format!("id {}", id))
    }
}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;
