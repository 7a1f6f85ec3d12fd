//! Builds a [`Model`] from shapes and raw trait values.
//!
//! A parser reports each shape it finds and each trait value applied to a
//! shape. [`ModelAssembler::assemble`] then decodes every trait through a
//! [`TraitRegistry`]. Shapes are independent, so they are decoded in parallel.
//! Errors from all shapes are collected and returned together; on failure no
//! model is produced.

use crate::traits::{DynamicTrait, Trait, TraitRegistry};
use crate::{AssemblyError, Model, ModelError, Shape, ShapeId};
use idlkit_node::{FromSourceLocation, Node, SourceLocation};
use indexmap::IndexMap;
use rayon::prelude::*;
use std::sync::Arc;

/// Namespace that relative trait names resolve against.
pub const PRELUDE_NAMESPACE: &str = "smithy.api";

#[derive(Debug, Default)]
struct PendingShape {
    source_location: SourceLocation,
    traits: IndexMap<String, Node>,
}

/// Collects shapes and trait values, then decodes them into a model.
#[derive(Debug)]
pub struct ModelAssembler<'r> {
    registry: &'r TraitRegistry,
    shapes: IndexMap<ShapeId, PendingShape>,
    errors: Vec<ModelError>,
}

impl<'r> ModelAssembler<'r> {
    pub fn new(registry: &'r TraitRegistry) -> Self {
        Self {
            registry,
            shapes: IndexMap::new(),
            errors: Vec::new(),
        }
    }

    /// Declare a shape.
    pub fn add_shape(&mut self, id: ShapeId, location: impl FromSourceLocation) -> &mut Self {
        if self.shapes.contains_key(&id) {
            self.errors.push(ModelError::DuplicateShape(id));
        } else {
            self.shapes.insert(
                id,
                PendingShape {
                    source_location: location.source_location(),
                    traits: IndexMap::new(),
                },
            );
        }
        self
    }

    /// Apply a raw trait value to a declared shape.
    ///
    /// `trait_name` may be relative, in which case it resolves against the
    /// prelude namespace. Applying the same value twice is allowed; applying
    /// two different values is an error.
    pub fn add_trait(&mut self, target: &ShapeId, trait_name: &str, value: Node) -> &mut Self {
        let name = match ShapeId::parse_relative(trait_name, PRELUDE_NAMESPACE) {
            Ok(id) => id.to_string(),
            Err(source) => {
                self.errors.push(ModelError::InvalidTraitName {
                    target: target.clone(),
                    location: value.location().clone(),
                    source,
                });
                return self;
            }
        };

        let Some(shape) = self.shapes.get_mut(target) else {
            self.errors.push(ModelError::UnknownShape {
                target: target.clone(),
                trait_name: name,
                location: value.location().clone(),
            });
            return self;
        };

        match shape.traits.get(&name) {
            Some(existing) if existing != &value => {
                self.errors.push(ModelError::ConflictingTrait {
                    target: target.clone(),
                    trait_name: name,
                    location: value.location().clone(),
                });
            }
            Some(_) => {}
            None => {
                shape.traits.insert(name, value);
            }
        }
        self
    }

    /// Decode every trait and build the model.
    pub fn assemble(self) -> Result<Model, AssemblyError> {
        let registry = self.registry;
        let mut errors = self.errors;

        let pending: Vec<(ShapeId, PendingShape)> = self.shapes.into_iter().collect();
        let decoded: Vec<Result<Shape, Vec<ModelError>>> = pending
            .into_par_iter()
            .map(|(id, shape)| decode_shape(registry, id, shape))
            .collect();

        let mut builder = Model::builder();
        for result in decoded {
            match result {
                Ok(shape) => builder = builder.add_shape(shape),
                Err(shape_errors) => errors.extend(shape_errors),
            }
        }

        if !errors.is_empty() {
            tracing::debug!(errors = errors.len(), "model assembly failed");
            return Err(AssemblyError { errors });
        }
        builder
            .build()
            .map_err(|e| AssemblyError { errors: vec![e.into()] })
    }
}

fn decode_shape(
    registry: &TraitRegistry,
    id: ShapeId,
    pending: PendingShape,
) -> Result<Shape, Vec<ModelError>> {
    let mut builder = Shape::builder()
        .id(id.clone())
        .source_location(&pending.source_location);
    let mut errors = Vec::new();

    for (name, value) in &pending.traits {
        match registry.create_trait(&id, name, value) {
            Ok(Some(decoded)) => builder = builder.add_trait(decoded),
            Ok(None) => {
                tracing::debug!(shape = %id, trait_name = %name, "no provider; keeping dynamic trait");
                let dynamic = match ShapeId::parse(name) {
                    Ok(trait_id) => DynamicTrait::new(&trait_id, value.clone()),
                    // Names were resolved in add_trait.
                    Err(source) => {
                        errors.push(ModelError::InvalidTraitName {
                            target: id.clone(),
                            location: value.location().clone(),
                            source,
                        });
                        continue;
                    }
                };
                builder = builder.add_trait(Arc::new(dynamic) as Arc<dyn Trait>);
            }
            Err(e) => {
                tracing::debug!(error = %e, "trait decode failed");
                errors.push(e.into());
            }
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    builder.build().map_err(|e| vec![e.into()])
}
