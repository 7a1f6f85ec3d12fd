//! The [`Node`] value tree.

use crate::{
    ArrayNode, BooleanNode, FromSourceLocation, NodeError, NullNode, NumberNode, ObjectNode,
    SourceLocation, StringNode,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag identifying which variant a [`Node`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Null => "null",
            NodeType::Boolean => "boolean",
            NodeType::Number => "number",
            NodeType::String => "string",
            NodeType::Array => "array",
            NodeType::Object => "object",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable, self-describing value.
///
/// Every typed object in the toolkit can be encoded to a `Node` and decoded
/// back from one. Nodes are trees: values own their children and there is no
/// way to build a cycle. Updates such as [`ObjectNode::with_member`] return new
/// trees.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    Null(NullNode),
    Boolean(BooleanNode),
    Number(NumberNode),
    String(StringNode),
    Array(ArrayNode),
    Object(ObjectNode),
}

macro_rules! expect_variant {
    ($expect:ident, $as_:ident, $variant:ident, $ty:ty) => {
        /// Borrow the inner value, or `None` if this node has another tag.
        pub fn $as_(&self) -> Option<&$ty> {
            match self {
                Node::$variant(inner) => Some(inner),
                _ => None,
            }
        }

        /// Borrow the inner value, failing with a located type mismatch.
        pub fn $expect(&self) -> Result<&$ty, NodeError> {
            match self {
                Node::$variant(inner) => Ok(inner),
                other => Err(NodeError::TypeMismatch {
                    expected: NodeType::$variant,
                    actual: other.node_type(),
                    location: other.location().clone(),
                }),
            }
        }
    };
}

impl Node {
    pub fn null() -> Node {
        Node::Null(NullNode::default())
    }

    /// Build a float node. Returns `None` for NaN and infinities.
    pub fn from_f64(value: f64) -> Option<Node> {
        NumberNode::from_f64(value, SourceLocation::none()).map(Node::Number)
    }

    pub fn array<I, T>(elements: I) -> Node
    where
        I: IntoIterator<Item = T>,
        T: Into<Node>,
    {
        Node::Array(ArrayNode::new(
            elements.into_iter().map(Into::into).collect(),
            SourceLocation::none(),
        ))
    }

    pub fn object<I, K, V>(members: I) -> Node
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Node>,
    {
        Node::Object(ObjectNode::new(
            members
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            SourceLocation::none(),
        ))
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            Node::Null(_) => NodeType::Null,
            Node::Boolean(_) => NodeType::Boolean,
            Node::Number(_) => NodeType::Number,
            Node::String(_) => NodeType::String,
            Node::Array(_) => NodeType::Array,
            Node::Object(_) => NodeType::Object,
        }
    }

    pub fn location(&self) -> &SourceLocation {
        match self {
            Node::Null(n) => &n.location,
            Node::Boolean(n) => &n.location,
            Node::Number(n) => &n.location,
            Node::String(n) => &n.location,
            Node::Array(n) => &n.location,
            Node::Object(n) => &n.location,
        }
    }

    /// Return a copy of this node carrying `location`. Children keep theirs.
    pub fn with_source_location(&self, location: impl FromSourceLocation) -> Node {
        let location = location.source_location();
        let mut node = self.clone();
        match &mut node {
            Node::Null(n) => n.location = location,
            Node::Boolean(n) => n.location = location,
            Node::Number(n) => n.location = location,
            Node::String(n) => n.location = location,
            Node::Array(n) => n.location = location,
            Node::Object(n) => n.location = location,
        }
        node
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null(_))
    }

    expect_variant!(expect_null_node, as_null_node, Null, NullNode);
    expect_variant!(expect_boolean_node, as_boolean_node, Boolean, BooleanNode);
    expect_variant!(expect_number_node, as_number_node, Number, NumberNode);
    expect_variant!(expect_string_node, as_string_node, String, StringNode);
    expect_variant!(expect_array_node, as_array_node, Array, ArrayNode);
    expect_variant!(expect_object_node, as_object_node, Object, ObjectNode);
}

impl FromSourceLocation for Node {
    fn source_location(&self) -> SourceLocation {
        self.location().clone()
    }
}

impl From<NullNode> for Node {
    fn from(value: NullNode) -> Self {
        Node::Null(value)
    }
}

impl From<BooleanNode> for Node {
    fn from(value: BooleanNode) -> Self {
        Node::Boolean(value)
    }
}

impl From<NumberNode> for Node {
    fn from(value: NumberNode) -> Self {
        Node::Number(value)
    }
}

impl From<StringNode> for Node {
    fn from(value: StringNode) -> Self {
        Node::String(value)
    }
}

impl From<ArrayNode> for Node {
    fn from(value: ArrayNode) -> Self {
        Node::Array(value)
    }
}

impl From<ObjectNode> for Node {
    fn from(value: ObjectNode) -> Self {
        Node::Object(value)
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Boolean(BooleanNode::new(value, SourceLocation::none()))
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::String(StringNode::new(value, SourceLocation::none()))
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::String(StringNode::new(value, SourceLocation::none()))
    }
}

impl From<&String> for Node {
    fn from(value: &String) -> Self {
        Node::from(value.as_str())
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::Number(NumberNode::new(value, SourceLocation::none()))
                }
            }
        )*
    };
}

from_integer!(i32, i64, u32, u64);

impl From<serde_json::Number> for Node {
    fn from(value: serde_json::Number) -> Self {
        Node::Number(NumberNode::new(value, SourceLocation::none()))
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Self {
        Node::Array(ArrayNode::new(value, SourceLocation::none()))
    }
}

impl From<IndexMap<String, Node>> for Node {
    fn from(value: IndexMap<String, Node>) -> Self {
        Node::Object(ObjectNode::new(value, SourceLocation::none()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expect_reports_expected_and_actual() {
        let node = Node::from("hello").with_source_location(SourceLocation::new("a.smithy", 2, 5));
        let err = node.expect_object_node().unwrap_err();
        assert_eq!(
            err,
            NodeError::TypeMismatch {
                expected: NodeType::Object,
                actual: NodeType::String,
                location: SourceLocation::new("a.smithy", 2, 5),
            }
        );
        assert_eq!(
            err.to_string(),
            "a.smithy [2, 5]: expected object node, found string"
        );
    }

    #[test]
    fn expect_matching_tag() {
        assert!(Node::from(true).expect_boolean_node().unwrap().value());
        assert_eq!(Node::from(7).expect_number_node().unwrap().as_i64(), Some(7));
        assert!(Node::null().expect_null_node().is_ok());
        assert_eq!(
            Node::array([1, 2]).expect_array_node().unwrap().len(),
            2
        );
        assert!(Node::from(1).as_string_node().is_none());
    }

    #[test]
    fn equality_ignores_location() {
        let a = Node::from("x").with_source_location(SourceLocation::new("a", 1, 1));
        let b = Node::from("x").with_source_location(SourceLocation::new("b", 9, 9));
        assert_eq!(a, b);
        assert_ne!(a, Node::from("y"));
        assert_ne!(Node::from(1), Node::from_f64(1.0).unwrap());
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        assert!(Node::from_f64(f64::NAN).is_none());
        assert!(Node::from_f64(f64::INFINITY).is_none());
        assert!(Node::from_f64(1.5).is_some());
    }
}
