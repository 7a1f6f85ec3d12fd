//! Errors raised while projecting nodes into typed traits and models.

use crate::{BuildError, ShapeId, ShapeIdError};
use idlkit_node::{NodeError, SourceLocation, StringNode};
use std::fmt;

/// What went wrong while decoding a trait value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// A node had the wrong type or lacked a member.
    Node(NodeError),
    /// A string that should be a shape ID is malformed.
    InvalidShapeId(ShapeIdError),
    /// The decoded fields did not form a complete value.
    Build(BuildError),
    /// Any other structural or semantic problem.
    Invalid(String),
}

/// A located decode failure, produced by a trait decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    pub location: SourceLocation,
    pub kind: DecodeErrorKind,
}

impl DecodeError {
    pub fn invalid(location: SourceLocation, reason: impl Into<String>) -> Self {
        Self {
            location,
            kind: DecodeErrorKind::Invalid(reason.into()),
        }
    }

    pub fn build(location: SourceLocation, error: BuildError) -> Self {
        Self {
            location,
            kind: DecodeErrorKind::Build(error),
        }
    }

    pub fn shape_id(location: SourceLocation, error: ShapeIdError) -> Self {
        Self {
            location,
            kind: DecodeErrorKind::InvalidShapeId(error),
        }
    }
}

impl From<NodeError> for DecodeError {
    fn from(error: NodeError) -> Self {
        Self {
            location: error.location().clone(),
            kind: DecodeErrorKind::Node(error),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            // Node errors already lead with their location.
            DecodeErrorKind::Node(e) => write!(f, "{e}"),
            DecodeErrorKind::InvalidShapeId(e) => write!(f, "{}: {e}", self.location),
            DecodeErrorKind::Build(e) => write!(f, "{}: {e}", self.location),
            DecodeErrorKind::Invalid(reason) => write!(f, "{}: {reason}", self.location),
        }
    }
}

impl std::error::Error for DecodeError {}

/// A decode failure attributed to a trait and the shape it is applied to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid `{trait_name}` trait on `{target}`: {source}")]
pub struct TraitDecodeError {
    pub trait_name: String,
    pub target: ShapeId,
    pub source: DecodeError,
}

impl TraitDecodeError {
    pub fn new(trait_name: impl Into<String>, target: &ShapeId, source: DecodeError) -> Self {
        Self {
            trait_name: trait_name.into(),
            target: target.clone(),
            source,
        }
    }

    pub fn location(&self) -> &SourceLocation {
        &self.source.location
    }

    pub fn kind(&self) -> &DecodeErrorKind {
        &self.source.kind
    }
}

/// Error raised while building a provider registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("more than one provider registered for trait `{trait_name}`")]
    DuplicateProvider { trait_name: String },

    #[error("provider registered under an invalid trait name: {0}")]
    InvalidTraitName(#[from] ShapeIdError),
}

/// Error raised while assembling a model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error(transparent)]
    Decode(#[from] TraitDecodeError),

    #[error("{location}: invalid trait name applied to `{target}`: {source}")]
    InvalidTraitName {
        target: ShapeId,
        location: SourceLocation,
        source: ShapeIdError,
    },

    #[error("{location}: trait `{trait_name}` applied to unknown shape `{target}`")]
    UnknownShape {
        target: ShapeId,
        trait_name: String,
        location: SourceLocation,
    },

    #[error("{location}: trait `{trait_name}` applied more than once to `{target}`")]
    ConflictingTrait {
        target: ShapeId,
        trait_name: String,
        location: SourceLocation,
    },

    #[error("shape `{0}` defined more than once")]
    DuplicateShape(ShapeId),

    #[error("shape `{0}` not found")]
    ShapeNotFound(ShapeId),

    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Every error found while assembling a model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("model assembly failed with {} error(s): {}", .errors.len(), summarize(.errors))]
pub struct AssemblyError {
    pub errors: Vec<ModelError>,
}

fn summarize(errors: &[ModelError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Shape ID parsing for string nodes found inside trait values.
pub trait ExpectShapeId {
    /// Parse this string as a shape ID, resolving relative IDs against `namespace`.
    fn expect_shape_id(&self, namespace: &str) -> Result<ShapeId, DecodeError>;
}

impl ExpectShapeId for StringNode {
    fn expect_shape_id(&self, namespace: &str) -> Result<ShapeId, DecodeError> {
        ShapeId::parse_relative(self.value(), namespace)
            .map_err(|e| DecodeError::shape_id(self.location().clone(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idlkit_node::Node;

    #[test]
    fn string_nodes_resolve_shape_ids() {
        let node = StringNode::new("Widget", SourceLocation::none());
        assert_eq!(
            node.expect_shape_id("ns").unwrap(),
            ShapeId::parse("ns#Widget").unwrap()
        );

        let bad = StringNode::new("###", SourceLocation::new("m.smithy", 3, 9));
        let err = bad.expect_shape_id("ns").unwrap_err();
        assert_eq!(err.location, SourceLocation::new("m.smithy", 3, 9));
        assert!(matches!(err.kind, DecodeErrorKind::InvalidShapeId(_)));
    }

    #[test]
    fn trait_decode_error_message() {
        let source: DecodeError = Node::from(1)
            .with_source_location(SourceLocation::new("m.smithy", 1, 2))
            .expect_object_node()
            .unwrap_err()
            .into();
        let err = TraitDecodeError::new(
            "smithy.api#references",
            &ShapeId::parse("ns#Thing").unwrap(),
            source,
        );
        assert_eq!(
            err.to_string(),
            "invalid `smithy.api#references` trait on `ns#Thing`: m.smithy [1, 2]: expected object node, found number"
        );
        assert_eq!(err.location(), &SourceLocation::new("m.smithy", 1, 2));
    }
}
