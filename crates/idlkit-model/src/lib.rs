//! Shape identifiers and typed traits for idlkit models.
//!
//! `idlkit-model` projects untyped [`Node`](idlkit_node::Node) values into
//! strongly-typed, validated traits and attaches them to shapes.
//!
//! # Architecture
//!
//! ```text
//! Parser (external)          Projection                    Consumers
//! ─────────────────    ──────────────────────────    ──────────────────
//! shape IDs        ─┐                                ┌─> schema converters
//! trait name + Node ┼─> TraitRegistry ─> Provider ───┼─> typed lookups
//!                   ┘   (one per name)   decode/encode└─> encode to Node
//! ```
//!
//! # Example
//!
//! ```
//! use idlkit_model::{ModelAssembler, ShapeId, traits::{ReferencesTrait, builtin_registry}};
//! use idlkit_node::{Node, SourceLocation};
//!
//! let thing = ShapeId::parse("example.weather#Forecast").unwrap();
//! let value = Node::from(serde_json::json!({
//!     "city": { "resource": "City", "ids": { "cityId": "id" } }
//! }));
//!
//! let mut assembler = ModelAssembler::new(builtin_registry());
//! assembler
//!     .add_shape(thing.clone(), SourceLocation::none())
//!     .add_trait(&thing, "smithy.api#references", value);
//! let model = assembler.assemble().unwrap();
//!
//! let refs = model.get_shape(&thing).unwrap().get_trait::<ReferencesTrait>().unwrap();
//! assert_eq!(refs.reference("city").unwrap().resource().to_string(), "example.weather#City");
//! ```

pub mod assembler;
pub mod builder;
mod error;
pub mod shape;
pub mod shape_id;
pub mod traits;

pub use idlkit_node as node;

pub use assembler::{ModelAssembler, PRELUDE_NAMESPACE};
pub use builder::{BuildError, ToBuilder, required};
pub use error::{
    AssemblyError, DecodeError, DecodeErrorKind, ExpectShapeId, ModelError, RegistryError,
    TraitDecodeError,
};
pub use shape::{Model, ModelBuilder, Shape, ShapeBuilder};
pub use shape_id::{ShapeId, ShapeIdError, is_valid_identifier, is_valid_namespace};
pub use traits::{Trait, TraitCodec, TraitProvider, TraitRegistry};
