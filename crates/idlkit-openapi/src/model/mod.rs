//! OpenAPI objects built by converters.
//!
//! Every object implements [`Component`]: typed fields plus free-form
//! extensions, encoded together into a single object node.

mod callback;
mod component;
mod operation;
mod path_item;
mod security_scheme;

pub use callback::{CallbackObject, CallbackObjectBuilder};
pub use component::{Component, Extensions, ExtensionsBuilder};
pub use operation::{OperationObject, OperationObjectBuilder};
pub use path_item::{HttpMethod, PathItem, PathItemBuilder};
pub use security_scheme::{SecurityScheme, SecuritySchemeBuilder};
