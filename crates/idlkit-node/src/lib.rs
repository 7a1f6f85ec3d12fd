//! Generic value tree for idlkit.
//!
//! `idlkit-node` defines [`Node`], the untyped interchange format between the
//! IDL front end and every typed object in the toolkit. Parsers produce nodes,
//! traits and schema components decode from and encode to them, and writers
//! consume them.
//!
//! # Example
//!
//! ```
//! use idlkit_node::{Node, ObjectNode};
//!
//! let reference = ObjectNode::builder()
//!     .with_member("resource", "example.weather#City")
//!     .with_member("rel", "city")
//!     .build();
//!
//! let rel = reference.get_string_member("rel").unwrap().unwrap();
//! assert_eq!(rel.value(), "city");
//!
//! // Updates return new trees.
//! let updated = reference.with_member("rel", "parent");
//! assert_eq!(reference.get_member("rel"), Some(&Node::from("city")));
//! assert_eq!(updated.get_member("rel"), Some(&Node::from("parent")));
//! ```
//!
//! Equality and hashing are structural; the [`SourceLocation`] every node
//! carries is used only for diagnostics.

mod error;
mod json;
mod location;
mod node;
mod object;
mod values;
mod visitor;

pub use error::NodeError;
pub use location::{FromSourceLocation, SourceLocation};
pub use node::{Node, NodeType};
pub use object::{ObjectNode, ObjectNodeBuilder};
pub use values::{ArrayNode, BooleanNode, NullNode, NumberNode, StringNode};
pub use visitor::NodeVisitor;
