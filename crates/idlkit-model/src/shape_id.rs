//! Namespace-qualified shape identifiers.
//!
//! The canonical form is `namespace#name` or `namespace#name$member`:
//!
//! - `namespace` is one or more identifiers joined by `.`
//! - `name` and `member` are identifiers
//! - an identifier is an ASCII letter followed by ASCII letters, digits, or `_`
//!
//! The canonical string is a stable contract: `ShapeId::parse(s)?.to_string() == s`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Error returned for a malformed shape identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid shape ID `{value}`: {reason}")]
pub struct ShapeIdError {
    pub value: String,
    pub reason: &'static str,
}

impl ShapeIdError {
    fn new(value: &str, reason: &'static str) -> Self {
        Self {
            value: value.to_string(),
            reason,
        }
    }
}

/// Identifier of a shape, optionally qualified by a member name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShapeId {
    namespace: String,
    name: String,
    member: Option<String>,
}

/// True if `value` is an identifier: a letter followed by letters, digits, or `_`.
pub fn is_valid_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// True if `value` is one or more identifiers joined by `.`.
pub fn is_valid_namespace(value: &str) -> bool {
    !value.is_empty() && value.split('.').all(is_valid_identifier)
}

impl ShapeId {
    /// Parse an absolute shape ID.
    pub fn parse(value: &str) -> Result<ShapeId, ShapeIdError> {
        let (namespace, rest) = value
            .split_once('#')
            .ok_or_else(|| ShapeIdError::new(value, "expected `namespace#name`"))?;
        if !is_valid_namespace(namespace) {
            return Err(ShapeIdError::new(value, "invalid namespace"));
        }
        Self::parse_local(value, namespace, rest)
    }

    /// Parse a shape ID that may omit its namespace.
    ///
    /// `name` and `name$member` resolve against `default_namespace`; absolute
    /// IDs are parsed as-is.
    pub fn parse_relative(value: &str, default_namespace: &str) -> Result<ShapeId, ShapeIdError> {
        if value.contains('#') {
            return Self::parse(value);
        }
        if !is_valid_namespace(default_namespace) {
            return Err(ShapeIdError::new(
                default_namespace,
                "invalid default namespace",
            ));
        }
        Self::parse_local(value, default_namespace, value)
    }

    /// Create a shape ID from a namespace and a name.
    pub fn from_parts(namespace: &str, name: &str) -> Result<ShapeId, ShapeIdError> {
        if !is_valid_namespace(namespace) {
            return Err(ShapeIdError::new(namespace, "invalid namespace"));
        }
        if !is_valid_identifier(name) {
            return Err(ShapeIdError::new(name, "invalid shape name"));
        }
        Ok(ShapeId {
            namespace: namespace.to_string(),
            name: name.to_string(),
            member: None,
        })
    }

    fn parse_local(original: &str, namespace: &str, local: &str) -> Result<ShapeId, ShapeIdError> {
        let (name, member) = match local.split_once('$') {
            Some((name, member)) => (name, Some(member)),
            None => (local, None),
        };
        if !is_valid_identifier(name) {
            return Err(ShapeIdError::new(original, "invalid shape name"));
        }
        if let Some(member) = member
            && !is_valid_identifier(member)
        {
            return Err(ShapeIdError::new(original, "invalid member name"));
        }
        Ok(ShapeId {
            namespace: namespace.to_string(),
            name: name.to_string(),
            member: member.map(str::to_string),
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn member(&self) -> Option<&str> {
        self.member.as_deref()
    }

    /// Same namespace and name, qualified by `member`.
    pub fn with_member(&self, member: &str) -> Result<ShapeId, ShapeIdError> {
        if !is_valid_identifier(member) {
            return Err(ShapeIdError::new(member, "invalid member name"));
        }
        Ok(ShapeId {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
            member: Some(member.to_string()),
        })
    }

    /// Same namespace and name, without a member.
    pub fn without_member(&self) -> ShapeId {
        ShapeId {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
            member: None,
        }
    }

    /// `name` or `name$member`, without the namespace.
    pub fn relative(&self) -> String {
        match &self.member {
            Some(member) => format!("{}${}", self.name, member),
            None => self.name.clone(),
        }
    }

    fn canonical_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        let member = self
            .member
            .iter()
            .flat_map(|m| std::iter::once(b'$').chain(m.bytes()));
        self.namespace
            .bytes()
            .chain(std::iter::once(b'#'))
            .chain(self.name.bytes())
            .chain(member)
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.namespace, self.name)?;
        if let Some(member) = &self.member {
            write!(f, "${member}")?;
        }
        Ok(())
    }
}

impl FromStr for ShapeId {
    type Err = ShapeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeId::parse(s)
    }
}

impl TryFrom<&str> for ShapeId {
    type Error = ShapeIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        ShapeId::parse(value)
    }
}

// Ordered by canonical string so generated output is deterministic.
impl Ord for ShapeId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical_bytes().cmp(other.canonical_bytes())
    }
}

impl PartialOrd for ShapeId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for ShapeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ShapeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        ShapeId::parse(&value).map_err(serde::de::Error::custom)
    }
}
