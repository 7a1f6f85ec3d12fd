//! The `smithy.api#documentation` trait.

use crate::traits::TraitCodec;
use crate::{DecodeError, ShapeId};
use idlkit_node::{Node, SourceLocation, StringNode};

/// Human-readable documentation for a shape.
#[derive(Debug, Clone)]
pub struct DocumentationTrait {
    value: String,
    source_location: SourceLocation,
}

location_insensitive_eq!(DocumentationTrait, value);

impl DocumentationTrait {
    pub fn new(value: impl Into<String>, source_location: SourceLocation) -> Self {
        Self {
            value: value.into(),
            source_location,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl TraitCodec for DocumentationTrait {
    const NAME: &'static str = "smithy.api#documentation";

    fn decode(_target: &ShapeId, value: &Node) -> Result<Self, DecodeError> {
        let text = value.expect_string_node()?;
        Ok(Self::new(text.value(), text.location().clone()))
    }

    fn encode(&self) -> Node {
        StringNode::new(self.value.clone(), self.source_location.clone()).into()
    }
}

crate::impl_trait!(DocumentationTrait);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_strings_only() {
        let target = ShapeId::parse("ns#Thing").unwrap();
        let doc = DocumentationTrait::decode(&target, &Node::from("Hello")).unwrap();
        assert_eq!(doc.value(), "Hello");
        assert_eq!(doc.encode(), Node::from("Hello"));
        assert!(DocumentationTrait::decode(&target, &Node::from(1)).is_err());
    }

    #[test]
    fn equality_ignores_source_location() {
        let target = ShapeId::parse("ns#Thing").unwrap();
        let a = Node::from("Hello").with_source_location(SourceLocation::new("a.smithy", 1, 1));
        let b = Node::from("Hello").with_source_location(SourceLocation::new("b.smithy", 4, 2));
        assert_eq!(
            DocumentationTrait::decode(&target, &a).unwrap(),
            DocumentationTrait::decode(&target, &b).unwrap()
        );
    }
}
