//! Typed traits and the providers that project nodes into them.
//!
//! A trait is a named, validated annotation applied to a shape. Its value
//! arrives from the parser as a [`Node`]; a [`TraitProvider`] registered under
//! the trait's name decodes that node into a typed value and encodes it back.
//!
//! # Implementing a trait
//!
//! ```ignore
//! use idlkit_model::traits::{Provider, TraitCodec};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct SensitiveTrait { source_location: SourceLocation }
//!
//! impl TraitCodec for SensitiveTrait {
//!     const NAME: &'static str = "smithy.api#sensitive";
//!     fn decode(_target: &ShapeId, value: &Node) -> Result<Self, DecodeError> { /* ... */ }
//!     fn encode(&self) -> Node { /* ... */ }
//! }
//!
//! idlkit_model::impl_trait!(SensitiveTrait);
//!
//! static SENSITIVE: Provider<SensitiveTrait> = Provider::new();
//!
//! let registry = TraitRegistry::builder().with_builtins().register(&SENSITIVE).build()?;
//! ```

/// Equality over the listed fields; the source location is never compared.
macro_rules! location_insensitive_eq {
    ($ty:ty, $($field:ident),+) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $(self.$field == other.$field)&&+
            }
        }

        impl Eq for $ty {}
    };
}

mod documentation;
mod dynamic;
mod references;
mod registry;
mod tags;

pub use documentation::DocumentationTrait;
pub use dynamic::DynamicTrait;
pub use references::{Reference, ReferenceBuilder, ReferencesTrait, ReferencesTraitBuilder};
pub use registry::{TraitRegistry, TraitRegistryBuilder, builtin_providers, builtin_registry};
pub use tags::TagsTrait;

use crate::{DecodeError, ShapeId, TraitDecodeError};
use idlkit_node::{Node, SourceLocation};
use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// A decoded trait value, as stored on a shape.
pub trait Trait: fmt::Debug + Send + Sync + 'static {
    /// Absolute shape ID of the trait (e.g., "smithy.api#references").
    fn name(&self) -> &str;

    /// Where the trait value was defined.
    fn source_location(&self) -> &SourceLocation;

    /// Encode the trait value back into a node.
    fn to_node(&self) -> Node;

    fn as_any(&self) -> &dyn Any;
}

impl dyn Trait {
    /// Downcast to a concrete trait type.
    pub fn downcast_ref<T: TraitCodec>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

impl PartialEq for dyn Trait {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name() && self.to_node() == other.to_node()
    }
}

/// Static decode/encode pair for a concrete trait type.
///
/// `decode` receives the shape the trait is applied to so that relative shape
/// IDs in the value resolve against its namespace. Implementations must
/// satisfy `T::decode(target, &t.encode()) == Ok(t)`.
pub trait TraitCodec: Trait + Clone + Sized {
    const NAME: &'static str;

    fn decode(target: &ShapeId, value: &Node) -> Result<Self, DecodeError>;

    fn encode(&self) -> Node;
}

/// Implements [`Trait`] for a type that implements [`TraitCodec`] and has a
/// `source_location` field.
#[macro_export]
macro_rules! impl_trait {
    ($ty:ty) => {
        impl $crate::traits::Trait for $ty {
            fn name(&self) -> &str {
                <$ty as $crate::traits::TraitCodec>::NAME
            }

            fn source_location(&self) -> &$crate::node::SourceLocation {
                &self.source_location
            }

            fn to_node(&self) -> $crate::node::Node {
                <$ty as $crate::traits::TraitCodec>::encode(self)
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    };
}

/// Decoder registered for exactly one trait name.
pub trait TraitProvider: Send + Sync {
    /// Name of the trait this provider decodes.
    fn trait_name(&self) -> &'static str;

    /// Decode a trait value applied to `target`.
    fn decode(&self, target: &ShapeId, value: &Node) -> Result<Arc<dyn Trait>, TraitDecodeError>;

    /// Encode a trait value, or `None` if it is not this provider's trait.
    fn encode(&self, value: &dyn Trait) -> Option<Node> {
        (value.name() == self.trait_name()).then(|| value.to_node())
    }
}

/// Provider for any [`TraitCodec`] type.
pub struct Provider<T>(PhantomData<fn() -> T>);

impl<T> Provider<T> {
    pub const fn new() -> Self {
        Provider(PhantomData)
    }
}

impl<T> Default for Provider<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TraitCodec> TraitProvider for Provider<T> {
    fn trait_name(&self) -> &'static str {
        T::NAME
    }

    fn decode(&self, target: &ShapeId, value: &Node) -> Result<Arc<dyn Trait>, TraitDecodeError> {
        T::decode(target, value)
            .map(|t| Arc::new(t) as Arc<dyn Trait>)
            .map_err(|e| TraitDecodeError::new(T::NAME, target, e))
    }
}
