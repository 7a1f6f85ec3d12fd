//! Leaf and array node types.
//!
//! Each type pairs its value with the location it was parsed from. Equality
//! and hashing look at the value only.

use crate::{FromSourceLocation, Node, NodeError, SourceLocation};
use std::hash::{Hash, Hasher};

macro_rules! value_semantics {
    ($ty:ident, $field:ident) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.$field == other.$field
            }
        }

        impl Eq for $ty {}

        impl Hash for $ty {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.$field.hash(state);
            }
        }

        impl FromSourceLocation for $ty {
            fn source_location(&self) -> SourceLocation {
                self.location.clone()
            }
        }
    };
}

/// The null value.
#[derive(Debug, Clone, Default)]
pub struct NullNode {
    pub(crate) location: SourceLocation,
}

impl NullNode {
    pub fn new(location: SourceLocation) -> Self {
        Self { location }
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }
}

impl PartialEq for NullNode {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for NullNode {}

impl Hash for NullNode {
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}

impl FromSourceLocation for NullNode {
    fn source_location(&self) -> SourceLocation {
        self.location.clone()
    }
}

/// A boolean value.
#[derive(Debug, Clone)]
pub struct BooleanNode {
    value: bool,
    pub(crate) location: SourceLocation,
}

impl BooleanNode {
    pub fn new(value: bool, location: SourceLocation) -> Self {
        Self { value, location }
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }
}

value_semantics!(BooleanNode, value);

/// A numeric value.
///
/// Numbers are stored as [`serde_json::Number`], which keeps integers exact
/// and rejects non-finite floats.
#[derive(Debug, Clone)]
pub struct NumberNode {
    value: serde_json::Number,
    pub(crate) location: SourceLocation,
}

impl NumberNode {
    pub fn new(value: impl Into<serde_json::Number>, location: SourceLocation) -> Self {
        Self {
            value: value.into(),
            location,
        }
    }

    /// Build a float number. Returns `None` for NaN and infinities.
    pub fn from_f64(value: f64, location: SourceLocation) -> Option<Self> {
        serde_json::Number::from_f64(value).map(|value| Self { value, location })
    }

    pub fn value(&self) -> &serde_json::Number {
        &self.value
    }

    pub fn is_integer(&self) -> bool {
        self.value.is_i64() || self.value.is_u64()
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.value.as_i64()
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.value.as_f64()
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }
}

value_semantics!(NumberNode, value);

/// A string value.
#[derive(Debug, Clone)]
pub struct StringNode {
    value: String,
    pub(crate) location: SourceLocation,
}

impl StringNode {
    pub fn new(value: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            value: value.into(),
            location,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_value(self) -> String {
        self.value
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }
}

value_semantics!(StringNode, value);

/// An ordered list of nodes.
#[derive(Debug, Clone, Default)]
pub struct ArrayNode {
    elements: Vec<Node>,
    pub(crate) location: SourceLocation,
}

impl ArrayNode {
    pub fn new(elements: Vec<Node>, location: SourceLocation) -> Self {
        Self { elements, location }
    }

    pub fn elements(&self) -> &[Node] {
        &self.elements
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.elements.get(index)
    }

    /// Get an element or fail with a located error.
    pub fn expect_element(&self, index: usize) -> Result<&Node, NodeError> {
        self.elements
            .get(index)
            .ok_or_else(|| NodeError::IndexOutOfBounds {
                index,
                len: self.elements.len(),
                location: self.location.clone(),
            })
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.elements.iter()
    }

    /// Return a new array with `element` appended.
    pub fn with_element(&self, element: Node) -> ArrayNode {
        let mut elements = self.elements.clone();
        elements.push(element);
        ArrayNode {
            elements,
            location: self.location.clone(),
        }
    }

    /// Every element as a string, failing on the first non-string.
    pub fn expect_strings(&self) -> Result<Vec<&str>, NodeError> {
        self.elements
            .iter()
            .map(|e| e.expect_string_node().map(|s| s.value()))
            .collect()
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }
}

impl<'a> IntoIterator for &'a ArrayNode {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

value_semantics!(ArrayNode, elements);
