//! Shared base of every OpenAPI object.
//!
//! Components carry typed fields plus an open set of extension members
//! (conventionally `x-` prefixed). Both are written into a single object node
//! on encode: typed fields first, then extensions in insertion order.

use idlkit_model::BuildError;
use idlkit_node::{Node, ObjectNodeBuilder};
use indexmap::IndexMap;

/// Extension members attached to a component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extensions {
    members: IndexMap<String, Node>,
}

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.members.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Node>) {
        self.members.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Node> {
        self.members.shift_remove(key)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Node> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn as_map(&self) -> &IndexMap<String, Node> {
        &self.members
    }
}

impl From<IndexMap<String, Node>> for Extensions {
    fn from(members: IndexMap<String, Node>) -> Self {
        Self { members }
    }
}

impl<K: Into<String>, V: Into<Node>> FromIterator<(K, V)> for Extensions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            members: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Extensions {
    type Item = (&'a String, &'a Node);
    type IntoIter = indexmap::map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

/// An OpenAPI object: typed fields plus extensions.
pub trait Component {
    /// Type name used in build errors.
    const TARGET: &'static str;

    /// Names of the typed fields; extensions may not reuse them.
    const FIELDS: &'static [&'static str];

    fn extensions(&self) -> &Extensions;

    /// Typed fields only, in encoding order.
    fn typed_members(&self) -> ObjectNodeBuilder;

    fn get_extension(&self, key: &str) -> Option<&Node> {
        self.extensions().get(key)
    }

    /// Encode typed fields and extensions into one object node.
    fn to_node(&self) -> Node {
        self.extensions()
            .iter()
            .fold(self.typed_members(), |builder, (k, v)| {
                builder.with_member(k.clone(), v.clone())
            })
            .build()
            .into()
    }
}

/// Reject extension keys that collide with a component's typed fields,
/// including members with dynamic keys such as callback expressions.
pub(crate) fn checked<T: Component>(component: T) -> Result<T, BuildError> {
    let typed = component.typed_members();
    for key in component.extensions().as_map().keys() {
        if T::FIELDS.contains(&key.as_str()) || typed.contains_member(key) {
            return Err(BuildError::ConflictingExtension {
                target: T::TARGET,
                key: key.clone(),
            });
        }
    }
    Ok(component)
}

/// Fluent access to the extensions embedded in a component builder.
pub trait ExtensionsBuilder: Sized {
    fn extensions_mut(&mut self) -> &mut Extensions;

    /// Replace all extensions.
    fn extensions(mut self, extensions: Extensions) -> Self {
        *self.extensions_mut() = extensions;
        self
    }

    fn put_extension(mut self, key: impl Into<String>, value: impl Into<Node>) -> Self {
        self.extensions_mut().insert(key, value);
        self
    }

    fn remove_extension(mut self, key: &str) -> Self {
        self.extensions_mut().remove(key);
        self
    }
}

/// Components compare by their encoded node.
macro_rules! component_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PartialEq for $ty {
                fn eq(&self, other: &Self) -> bool {
                    $crate::model::Component::to_node(self) == $crate::model::Component::to_node(other)
                }
            }

            impl Eq for $ty {}
        )*
    };
}

pub(crate) use component_eq;
