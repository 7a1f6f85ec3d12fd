//! Object nodes: ordered string-keyed members.

use crate::{ArrayNode, FromSourceLocation, Node, NodeError, SourceLocation, StringNode};
use indexmap::IndexMap;
use std::hash::{Hash, Hasher};

/// A mapping of unique string keys to nodes.
///
/// Members keep insertion order so that re-encoded values serialize the same
/// way every time. Equality compares members as a map and ignores order.
#[derive(Debug, Clone, Default)]
pub struct ObjectNode {
    members: IndexMap<String, Node>,
    pub(crate) location: SourceLocation,
}

impl ObjectNode {
    pub fn new(members: IndexMap<String, Node>, location: SourceLocation) -> Self {
        Self { members, location }
    }

    /// Start building an object node.
    pub fn builder() -> ObjectNodeBuilder {
        ObjectNodeBuilder::default()
    }

    /// Create an object whose members are all string nodes.
    pub fn from_string_map<'a, I>(map: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let members = map
            .into_iter()
            .map(|(k, v)| (k.clone(), Node::from(v.as_str())))
            .collect();
        Self::new(members, SourceLocation::none())
    }

    pub fn members(&self) -> &IndexMap<String, Node> {
        &self.members
    }

    pub fn into_members(self) -> IndexMap<String, Node> {
        self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains_member(&self, key: &str) -> bool {
        self.members.contains_key(key)
    }

    pub fn get_member(&self, key: &str) -> Option<&Node> {
        self.members.get(key)
    }

    /// Get a member or fail with a located error naming it.
    pub fn expect_member(&self, key: &str) -> Result<&Node, NodeError> {
        self.members
            .get(key)
            .ok_or_else(|| NodeError::MissingMember {
                member: key.to_string(),
                location: self.location.clone(),
            })
    }

    /// Get an optional member that must be a string when present.
    pub fn get_string_member(&self, key: &str) -> Result<Option<&StringNode>, NodeError> {
        self.members
            .get(key)
            .map(Node::expect_string_node)
            .transpose()
    }

    /// Get an optional member that must be an object when present.
    pub fn get_object_member(&self, key: &str) -> Result<Option<&ObjectNode>, NodeError> {
        self.members
            .get(key)
            .map(Node::expect_object_node)
            .transpose()
    }

    /// Get an optional member that must be an array when present.
    pub fn get_array_member(&self, key: &str) -> Result<Option<&ArrayNode>, NodeError> {
        self.members
            .get(key)
            .map(Node::expect_array_node)
            .transpose()
    }

    /// Get an optional member that must be a boolean when present.
    pub fn get_boolean_member(&self, key: &str) -> Result<Option<bool>, NodeError> {
        self.members
            .get(key)
            .map(|n| n.expect_boolean_node().map(|b| b.value()))
            .transpose()
    }

    /// Return a new object with `key` set to `value`.
    ///
    /// A new key is appended; an existing key is replaced in its original position.
    pub fn with_member(&self, key: impl Into<String>, value: impl Into<Node>) -> ObjectNode {
        let mut members = self.members.clone();
        members.insert(key.into(), value.into());
        ObjectNode {
            members,
            location: self.location.clone(),
        }
    }

    /// Return a new object without `key`, keeping the order of the rest.
    pub fn without_member(&self, key: &str) -> ObjectNode {
        let mut members = self.members.clone();
        members.shift_remove(key);
        ObjectNode {
            members,
            location: self.location.clone(),
        }
    }

    /// Return a new object with the members of `other` merged over these.
    pub fn merge(&self, other: &ObjectNode) -> ObjectNode {
        let mut members = self.members.clone();
        for (k, v) in &other.members {
            members.insert(k.clone(), v.clone());
        }
        ObjectNode {
            members,
            location: self.location.clone(),
        }
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Node> {
        self.members.iter()
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }
}

impl<'a> IntoIterator for &'a ObjectNode {
    type Item = (&'a String, &'a Node);
    type IntoIter = indexmap::map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl PartialEq for ObjectNode {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl Eq for ObjectNode {}

impl Hash for ObjectNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Order-independent, to agree with PartialEq.
        let mut keys: Vec<&String> = self.members.keys().collect();
        keys.sort();
        state.write_usize(keys.len());
        for key in keys {
            key.hash(state);
            self.members[key.as_str()].hash(state);
        }
    }
}

impl FromSourceLocation for ObjectNode {
    fn source_location(&self) -> SourceLocation {
        self.location.clone()
    }
}

/// Incrementally builds an [`ObjectNode`].
#[derive(Debug, Clone, Default)]
pub struct ObjectNodeBuilder {
    members: IndexMap<String, Node>,
    location: SourceLocation,
}

impl ObjectNodeBuilder {
    pub fn source_location(mut self, location: impl FromSourceLocation) -> Self {
        self.location = location.source_location();
        self
    }

    pub fn with_member(mut self, key: impl Into<String>, value: impl Into<Node>) -> Self {
        self.members.insert(key.into(), value.into());
        self
    }

    /// Set `key` only when `value` is present.
    pub fn with_optional_member<V: Into<Node>>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with_member(key, value),
            None => self,
        }
    }

    pub fn without_member(mut self, key: &str) -> Self {
        self.members.shift_remove(key);
        self
    }

    pub fn contains_member(&self, key: &str) -> bool {
        self.members.contains_key(key)
    }

    pub fn build(self) -> ObjectNode {
        ObjectNode {
            members: self.members,
            location: self.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(obj: &ObjectNode) -> Vec<&str> {
        obj.members().keys().map(String::as_str).collect()
    }

    #[test]
    fn with_member_appends_and_replaces_in_place() {
        let obj = ObjectNode::builder()
            .with_member("a", 1)
            .with_member("b", 2)
            .with_member("c", 3)
            .build();

        let replaced = obj.with_member("b", "two");
        assert_eq!(keys(&replaced), ["a", "b", "c"]);
        assert_eq!(replaced.get_member("b"), Some(&Node::from("two")));

        let appended = obj.with_member("d", true);
        assert_eq!(keys(&appended), ["a", "b", "c", "d"]);

        // The original is untouched.
        assert_eq!(obj.get_member("b"), Some(&Node::from(2)));
        assert!(!obj.contains_member("d"));
    }

    #[test]
    fn without_member_keeps_order() {
        let obj = ObjectNode::builder()
            .with_member("a", 1)
            .with_member("b", 2)
            .with_member("c", 3)
            .build();
        assert_eq!(keys(&obj.without_member("b")), ["a", "c"]);
    }

    #[test]
    fn expect_member_reports_location() {
        let location = SourceLocation::new("model.smithy", 4, 2);
        let obj = ObjectNode::builder().source_location(&location).build();
        let err = obj.expect_member("resource").unwrap_err();
        assert_eq!(
            err,
            NodeError::MissingMember {
                member: "resource".into(),
                location,
            }
        );
    }

    #[test]
    fn typed_optional_members() {
        let obj = ObjectNode::builder()
            .with_member("rel", "owner")
            .with_member("ids", 5)
            .build();
        assert_eq!(
            obj.get_string_member("rel").unwrap().map(StringNode::value),
            Some("owner")
        );
        assert!(obj.get_string_member("service").unwrap().is_none());
        assert!(obj.get_object_member("ids").is_err());
    }

    #[test]
    fn equality_ignores_order_and_location() {
        let a = ObjectNode::builder()
            .with_member("x", 1)
            .with_member("y", 2)
            .source_location(SourceLocation::new("a", 1, 1))
            .build();
        let b = ObjectNode::builder()
            .with_member("y", 2)
            .with_member("x", 1)
            .build();
        assert_eq!(a, b);

        use std::collections::hash_map::DefaultHasher;
        let hash = |o: &ObjectNode| {
            let mut h = DefaultHasher::new();
            o.hash(&mut h);
            h.finish()
        };
        assert_eq!(hash(&a), hash(&b));
    }
}
