//! Conversion between nodes and `serde_json` values.
//!
//! This is the handoff point to external writers: nodes serialize with member
//! order preserved, and JSON documents convert to nodes without locations.

use crate::{
    ArrayNode, BooleanNode, Node, NodeVisitor, NullNode, NumberNode, ObjectNode, SourceLocation,
    StringNode,
};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

struct JsonVisitor;

impl NodeVisitor for JsonVisitor {
    type Output = Value;

    fn visit_null(&mut self, _: &NullNode) -> Value {
        Value::Null
    }

    fn visit_boolean(&mut self, node: &BooleanNode) -> Value {
        Value::Bool(node.value())
    }

    fn visit_number(&mut self, node: &NumberNode) -> Value {
        Value::Number(node.value().clone())
    }

    fn visit_string(&mut self, node: &StringNode) -> Value {
        Value::String(node.value().to_string())
    }

    fn visit_array(&mut self, node: &ArrayNode) -> Value {
        Value::Array(node.iter().map(|n| n.accept(self)).collect())
    }

    fn visit_object(&mut self, node: &ObjectNode) -> Value {
        Value::Object(
            node.iter()
                .map(|(k, v)| (k.clone(), v.accept(self)))
                .collect(),
        )
    }
}

impl Node {
    /// Convert to a JSON value, keeping object member order.
    pub fn to_json(&self) -> Value {
        self.accept(&mut JsonVisitor)
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        let location = SourceLocation::none();
        match value {
            Value::Null => Node::Null(NullNode::new(location)),
            Value::Bool(b) => Node::Boolean(BooleanNode::new(b, location)),
            Value::Number(n) => Node::Number(NumberNode::new(n, location)),
            Value::String(s) => Node::String(StringNode::new(s, location)),
            Value::Array(items) => Node::Array(ArrayNode::new(
                items.into_iter().map(Node::from).collect(),
                location,
            )),
            Value::Object(members) => Node::Object(ObjectNode::new(
                members.into_iter().map(|(k, v)| (k, Node::from(v))).collect(),
                location,
            )),
        }
    }
}

impl From<&Node> for Value {
    fn from(node: &Node) -> Self {
        node.to_json()
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Null(_) => serializer.serialize_unit(),
            Node::Boolean(b) => serializer.serialize_bool(b.value()),
            Node::Number(n) => n.value().serialize(serializer),
            Node::String(s) => serializer.serialize_str(s.value()),
            Node::Array(a) => {
                let mut seq = serializer.serialize_seq(Some(a.len()))?;
                for element in a {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Node::Object(o) => {
                let mut map = serializer.serialize_map(Some(o.len()))?;
                for (k, v) in o {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Node::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_round_trip_preserves_order() {
        let value = json!({ "z": 1, "a": [true, null, "s"], "m": { "k": 1.5 } });
        let node = Node::from(value.clone());
        let keys: Vec<&str> = node
            .expect_object_node()
            .unwrap()
            .members()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["z", "a", "m"]);
        assert_eq!(node.to_json(), value);
        assert_eq!(serde_json::to_value(&node).unwrap(), value);
    }

    #[test]
    fn deserialize_from_text() {
        let node: Node = serde_json::from_str(r#"{"resource": "ns#Widget"}"#).unwrap();
        assert_eq!(node, Node::object([("resource", "ns#Widget")]));
    }
}
