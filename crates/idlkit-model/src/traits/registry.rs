//! Registry of trait providers.
//!
//! Providers are collected by [`TraitRegistryBuilder`] and checked once when
//! the registry is built: two providers claiming the same trait name is a
//! configuration error, reported before anything is decoded. A built registry
//! is read-only and can be shared across threads.

use super::{
    DocumentationTrait, Provider, ReferencesTrait, TagsTrait, Trait, TraitProvider,
};
use crate::{RegistryError, ShapeId, TraitDecodeError};
use idlkit_node::Node;
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

static REFERENCES: Provider<ReferencesTrait> = Provider::new();
static DOCUMENTATION: Provider<DocumentationTrait> = Provider::new();
static TAGS: Provider<TagsTrait> = Provider::new();

static BUILTIN: OnceLock<TraitRegistry> = OnceLock::new();

/// Providers for the traits defined in this crate.
pub fn builtin_providers() -> [&'static dyn TraitProvider; 3] {
    [&REFERENCES, &DOCUMENTATION, &TAGS]
}

/// Shared registry of the built-in providers, initialized on first use.
pub fn builtin_registry() -> &'static TraitRegistry {
    BUILTIN.get_or_init(|| {
        TraitRegistry::builder()
            .with_builtins()
            .build()
            .expect("built-in trait providers have unique, valid names")
    })
}

/// Collects providers before validating them into a [`TraitRegistry`].
#[derive(Default)]
pub struct TraitRegistryBuilder {
    providers: Vec<&'static dyn TraitProvider>,
}

impl TraitRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every built-in provider.
    pub fn with_builtins(mut self) -> Self {
        self.providers.extend(builtin_providers());
        self
    }

    pub fn register(mut self, provider: &'static dyn TraitProvider) -> Self {
        self.providers.push(provider);
        self
    }

    /// Validate names and reject duplicates.
    pub fn build(self) -> Result<TraitRegistry, RegistryError> {
        let mut providers = BTreeMap::new();
        for provider in self.providers {
            let name = provider.trait_name();
            ShapeId::parse(name)?;
            if providers.insert(name.to_string(), provider).is_some() {
                return Err(RegistryError::DuplicateProvider {
                    trait_name: name.to_string(),
                });
            }
        }
        tracing::debug!(providers = providers.len(), "built trait registry");
        Ok(TraitRegistry { providers })
    }
}

/// Read-only mapping of trait name to provider.
pub struct TraitRegistry {
    providers: BTreeMap<String, &'static dyn TraitProvider>,
}

impl TraitRegistry {
    pub fn builder() -> TraitRegistryBuilder {
        TraitRegistryBuilder::new()
    }

    /// Get the provider registered for `trait_name`.
    pub fn provider(&self, trait_name: &str) -> Option<&'static dyn TraitProvider> {
        self.providers.get(trait_name).copied()
    }

    pub fn contains(&self, trait_name: &str) -> bool {
        self.providers.contains_key(trait_name)
    }

    /// Registered trait names, sorted.
    pub fn trait_names(&self) -> Vec<&str> {
        self.providers.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Decode a trait value applied to `target`.
    ///
    /// Returns `Ok(None)` when no provider is registered for `trait_name`.
    pub fn create_trait(
        &self,
        target: &ShapeId,
        trait_name: &str,
        value: &Node,
    ) -> Result<Option<Arc<dyn Trait>>, TraitDecodeError> {
        match self.provider(trait_name) {
            Some(provider) => provider.decode(target, value).map(Some),
            None => Ok(None),
        }
    }

    /// Encode a trait through its registered provider.
    pub fn encode(&self, value: &dyn Trait) -> Option<Node> {
        self.provider(value.name())
            .and_then(|provider| provider.encode(value))
    }
}

impl std::fmt::Debug for TraitRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraitRegistry")
            .field("traits", &self.trait_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecodeError, ShapeId};
    use idlkit_node::SourceLocation;

    /// A second provider claiming the references trait name.
    #[derive(Debug, Clone, PartialEq)]
    struct ShadowReferences {
        source_location: SourceLocation,
    }

    impl super::super::TraitCodec for ShadowReferences {
        const NAME: &'static str = "smithy.api#references";

        fn decode(_target: &ShapeId, value: &Node) -> Result<Self, DecodeError> {
            Ok(Self {
                source_location: value.location().clone(),
            })
        }

        fn encode(&self) -> Node {
            Node::object(Vec::<(String, Node)>::new())
        }
    }

    crate::impl_trait!(ShadowReferences);

    static SHADOW: Provider<ShadowReferences> = Provider::new();

    #[derive(Debug, Clone, PartialEq)]
    struct Misnamed {
        source_location: SourceLocation,
    }

    impl super::super::TraitCodec for Misnamed {
        const NAME: &'static str = "not a shape id";

        fn decode(_target: &ShapeId, value: &Node) -> Result<Self, DecodeError> {
            Ok(Self {
                source_location: value.location().clone(),
            })
        }

        fn encode(&self) -> Node {
            Node::null()
        }
    }

    crate::impl_trait!(Misnamed);

    static MISNAMED: Provider<Misnamed> = Provider::new();

    #[test]
    fn duplicate_provider_fails_at_build() {
        let err = TraitRegistry::builder()
            .with_builtins()
            .register(&SHADOW)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateProvider {
                trait_name: "smithy.api#references".into()
            }
        );
    }

    #[test]
    fn invalid_provider_name_fails_at_build() {
        let err = TraitRegistry::builder().register(&MISNAMED).build().unwrap_err();
        assert!(matches!(err, RegistryError::InvalidTraitName(_)));
    }

    #[test]
    fn builtins_are_registered() {
        let registry = builtin_registry();
        assert_eq!(
            registry.trait_names(),
            [
                "smithy.api#documentation",
                "smithy.api#references",
                "smithy.api#tags"
            ]
        );
    }

    #[test]
    fn unknown_traits_yield_none() {
        let target = ShapeId::parse("ns#Thing").unwrap();
        let created = builtin_registry()
            .create_trait(&target, "ns#custom", &Node::from(true))
            .unwrap();
        assert!(created.is_none());
    }

    #[test]
    fn create_and_encode_through_registry() {
        let target = ShapeId::parse("ns#Thing").unwrap();
        let registry = builtin_registry();
        let value = Node::from("Docs");
        let created = registry
            .create_trait(&target, "smithy.api#documentation", &value)
            .unwrap()
            .unwrap();
        assert_eq!(
            created.downcast_ref::<DocumentationTrait>().map(|d| d.value()),
            Some("Docs")
        );
        assert_eq!(registry.encode(created.as_ref()), Some(value));
    }

    #[test]
    fn decode_errors_name_trait_and_target() {
        let target = ShapeId::parse("ns#Thing").unwrap();
        let err = builtin_registry()
            .create_trait(&target, "smithy.api#tags", &Node::from("x"))
            .unwrap_err();
        assert_eq!(err.trait_name, "smithy.api#tags");
        assert_eq!(err.target, target);
    }
}
