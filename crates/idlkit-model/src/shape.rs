//! Shapes with their applied traits, and the model that holds them.
//!
//! Only the parts of the shape graph that trait projection and schema
//! conversion read are represented here: a shape's identity, its location,
//! and its traits.

use crate::builder::{BuildError, ToBuilder, required};
use crate::traits::{Trait, TraitCodec};
use crate::{ModelError, ShapeId};
use idlkit_node::{FromSourceLocation, SourceLocation};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A model element and the traits applied to it.
#[derive(Debug, Clone)]
pub struct Shape {
    id: ShapeId,
    source_location: SourceLocation,
    traits: BTreeMap<String, Arc<dyn Trait>>,
}

impl Shape {
    pub fn builder() -> ShapeBuilder {
        ShapeBuilder::default()
    }

    pub fn id(&self) -> &ShapeId {
        &self.id
    }

    pub fn source_location(&self) -> &SourceLocation {
        &self.source_location
    }

    /// Applied traits keyed by trait name, sorted.
    pub fn traits(&self) -> &BTreeMap<String, Arc<dyn Trait>> {
        &self.traits
    }

    pub fn find_trait(&self, name: &str) -> Option<&Arc<dyn Trait>> {
        self.traits.get(name)
    }

    pub fn has_trait(&self, name: &str) -> bool {
        self.traits.contains_key(name)
    }

    /// Get a trait by its concrete type.
    pub fn get_trait<T: TraitCodec>(&self) -> Option<&T> {
        self.traits.get(T::NAME).and_then(|t| t.downcast_ref::<T>())
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.traits.len() == other.traits.len()
            && self
                .traits
                .iter()
                .zip(&other.traits)
                .all(|((k1, v1), (k2, v2))| k1 == k2 && **v1 == **v2)
    }
}

impl ToBuilder for Shape {
    type Builder = ShapeBuilder;

    fn to_builder(&self) -> ShapeBuilder {
        ShapeBuilder {
            id: Some(self.id.clone()),
            source_location: self.source_location.clone(),
            traits: self.traits.clone(),
        }
    }
}

/// Builder for [`Shape`]. `id` is required.
#[derive(Debug, Clone, Default)]
pub struct ShapeBuilder {
    id: Option<ShapeId>,
    source_location: SourceLocation,
    traits: BTreeMap<String, Arc<dyn Trait>>,
}

impl ShapeBuilder {
    pub fn id(mut self, id: ShapeId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn source_location(mut self, location: impl FromSourceLocation) -> Self {
        self.source_location = location.source_location();
        self
    }

    /// Apply a trait, replacing any trait with the same name.
    pub fn add_trait(mut self, value: Arc<dyn Trait>) -> Self {
        self.traits.insert(value.name().to_string(), value);
        self
    }

    pub fn remove_trait(mut self, name: &str) -> Self {
        self.traits.remove(name);
        self
    }

    pub fn build(self) -> Result<Shape, BuildError> {
        Ok(Shape {
            id: required("Shape", "id", self.id)?,
            source_location: self.source_location,
            traits: self.traits,
        })
    }
}

/// An immutable set of shapes keyed by ID.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    shapes: BTreeMap<ShapeId, Shape>,
}

impl Model {
    pub fn builder() -> ModelBuilder {
        ModelBuilder::default()
    }

    pub fn get_shape(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    pub fn expect_shape(&self, id: &ShapeId) -> Result<&Shape, ModelError> {
        self.shapes
            .get(id)
            .ok_or_else(|| ModelError::ShapeNotFound(id.clone()))
    }

    /// All shapes, ordered by shape ID.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.values()
    }

    /// Shapes that have a trait named `name` applied.
    pub fn shapes_with_trait<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Shape> + 'a {
        self.shapes.values().filter(move |s| s.has_trait(name))
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl ToBuilder for Model {
    type Builder = ModelBuilder;

    fn to_builder(&self) -> ModelBuilder {
        ModelBuilder {
            shapes: self.shapes.clone(),
        }
    }
}

/// Builder for [`Model`].
#[derive(Debug, Clone, Default)]
pub struct ModelBuilder {
    shapes: BTreeMap<ShapeId, Shape>,
}

impl ModelBuilder {
    /// Add a shape, replacing any shape with the same ID.
    pub fn add_shape(mut self, shape: Shape) -> Self {
        self.shapes.insert(shape.id.clone(), shape);
        self
    }

    pub fn remove_shape(mut self, id: &ShapeId) -> Self {
        self.shapes.remove(id);
        self
    }

    pub fn build(self) -> Result<Model, BuildError> {
        Ok(Model {
            shapes: self.shapes,
        })
    }
}
