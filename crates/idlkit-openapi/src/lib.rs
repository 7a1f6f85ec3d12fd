//! OpenAPI components and security scheme converters for idlkit models.
//!
//! Converters read an assembled [`Model`](idlkit_model::Model) and the
//! [`OpenApiConfig`] through a [`Context`] and produce OpenAPI objects from the
//! [`model`] module. Each object encodes to a [`Node`](idlkit_node::Node),
//! which external writers serialize.
//!
//! # Example
//!
//! ```
//! use idlkit_model::Model;
//! use idlkit_openapi::{Context, OpenApiConfig, builtin_registry};
//! use idlkit_openapi::model::Component;
//!
//! let model = Model::builder().build().unwrap();
//! let config = OpenApiConfig::from_toml_str(r#"apiKeyQueryName = "key""#).unwrap();
//! let context = Context::new(&model, &config);
//!
//! let converted = builtin_registry()
//!     .convert_all(&context, &["http-x-api-key", "http-query-api-key"])
//!     .unwrap();
//! assert_eq!(converted.schemes["http-query-api-key"].name(), Some("key"));
//! assert!(converted.request_headers.contains("x-api-key"));
//! ```

mod config;
mod context;
mod error;
pub mod model;
pub mod registry;
pub mod security;

pub use config::OpenApiConfig;
pub use context::Context;
pub use error::{ConfigError, ConverterError};
pub use registry::{
    ConverterRegistry, ConverterRegistryBuilder, SecurityConversion, builtin_registry,
};
pub use security::SecuritySchemeConverter;
