//! Traits with no registered provider.

use crate::traits::Trait;
use crate::ShapeId;
use idlkit_node::{Node, SourceLocation};
use std::any::Any;

/// A trait kept as its raw node value because no provider is registered for it.
#[derive(Debug, Clone)]
pub struct DynamicTrait {
    name: String,
    value: Node,
    source_location: SourceLocation,
}

location_insensitive_eq!(DynamicTrait, name, value);

impl DynamicTrait {
    pub fn new(name: &ShapeId, value: Node) -> Self {
        let source_location = value.location().clone();
        Self {
            name: name.to_string(),
            value,
            source_location,
        }
    }

    pub fn value(&self) -> &Node {
        &self.value
    }
}

impl Trait for DynamicTrait {
    fn name(&self) -> &str {
        &self.name
    }

    fn source_location(&self) -> &SourceLocation {
        &self.source_location
    }

    fn to_node(&self) -> Node {
        self.value.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_source_location() {
        let name = ShapeId::parse("ns#custom").unwrap();
        let value = Node::object([("a", 1)]);
        let a = DynamicTrait::new(
            &name,
            value.with_source_location(SourceLocation::new("a.smithy", 1, 1)),
        );
        let b = DynamicTrait::new(
            &name,
            value.with_source_location(SourceLocation::new("b.smithy", 2, 5)),
        );
        assert_ne!(a.source_location(), b.source_location());
        assert_eq!(a, b);

        let other = ShapeId::parse("ns#other").unwrap();
        assert_ne!(a, DynamicTrait::new(&other, value));
    }
}
