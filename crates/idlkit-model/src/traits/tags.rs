//! The `smithy.api#tags` trait.

use crate::traits::TraitCodec;
use crate::{DecodeError, ShapeId};
use idlkit_node::{ArrayNode, Node, SourceLocation};

/// Free-form tags used to group and filter shapes.
#[derive(Debug, Clone)]
pub struct TagsTrait {
    tags: Vec<String>,
    source_location: SourceLocation,
}

location_insensitive_eq!(TagsTrait, tags);

impl TagsTrait {
    pub fn new(tags: Vec<String>, source_location: SourceLocation) -> Self {
        Self {
            tags,
            source_location,
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl TraitCodec for TagsTrait {
    const NAME: &'static str = "smithy.api#tags";

    fn decode(_target: &ShapeId, value: &Node) -> Result<Self, DecodeError> {
        let array = value.expect_array_node()?;
        let tags = array
            .expect_strings()?
            .into_iter()
            .map(str::to_string)
            .collect();
        Ok(Self::new(tags, array.location().clone()))
    }

    fn encode(&self) -> Node {
        ArrayNode::new(
            self.tags.iter().map(Node::from).collect(),
            self.source_location.clone(),
        )
        .into()
    }
}

crate::impl_trait!(TagsTrait);
