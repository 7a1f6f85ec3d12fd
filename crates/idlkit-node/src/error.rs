//! Errors raised by node accessors.

use crate::{NodeType, SourceLocation};

/// Error returned when a node does not have the shape a caller expected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    #[error("{location}: expected {expected} node, found {actual}")]
    TypeMismatch {
        expected: NodeType,
        actual: NodeType,
        location: SourceLocation,
    },

    #[error("{location}: missing required member `{member}`")]
    MissingMember {
        member: String,
        location: SourceLocation,
    },

    #[error("{location}: array index {index} out of bounds (length {len})")]
    IndexOutOfBounds {
        index: usize,
        len: usize,
        location: SourceLocation,
    },
}

impl NodeError {
    /// Location of the node that caused the error.
    pub fn location(&self) -> &SourceLocation {
        match self {
            NodeError::TypeMismatch { location, .. }
            | NodeError::MissingMember { location, .. }
            | NodeError::IndexOutOfBounds { location, .. } => location,
        }
    }
}
