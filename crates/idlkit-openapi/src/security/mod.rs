//! Security scheme converters.
//!
//! Each converter turns one authentication scheme of a service into an
//! OpenAPI [`SecurityScheme`] and reports the request headers the scheme
//! consumes.
//!
//! # Implementing Custom Converters
//!
//! ```
//! use idlkit_openapi::{Context, ConverterError, ConverterRegistry};
//! use idlkit_openapi::model::SecurityScheme;
//! use idlkit_openapi::security::SecuritySchemeConverter;
//!
//! struct CookieSession;
//!
//! impl SecuritySchemeConverter for CookieSession {
//!     fn auth_scheme_name(&self) -> &'static str { "example.cookie-session" }
//!
//!     fn create_security_scheme(&self, _: &Context<'_>) -> Result<SecurityScheme, ConverterError> {
//!         Ok(SecurityScheme::builder().scheme_type("apiKey").location("cookie").name("session").build()?)
//!     }
//! }
//!
//! static COOKIE_SESSION: CookieSession = CookieSession;
//!
//! let registry = ConverterRegistry::builder()
//!     .with_builtins()
//!     .register(&COOKIE_SESSION)
//!     .build()
//!     .unwrap();
//! assert!(registry.get("example.cookie-session").is_some());
//! ```

mod aws_v4;
mod http_basic;
mod http_bearer;
mod query_api_key;
mod x_api_key;

pub use aws_v4::{AWS_V4, AwsV4};
pub use http_basic::{HTTP_BASIC, HttpBasic};
pub use http_bearer::{HTTP_BEARER, HttpBearer};
pub use query_api_key::{QUERY_API_KEY, QueryApiKey};
pub use x_api_key::{X_API_KEY, XApiKey};

use crate::model::SecurityScheme;
use crate::{Context, ConverterError};
use std::collections::BTreeSet;

/// Converts one authentication scheme into an OpenAPI security scheme.
///
/// Converters hold no mutable state: the same context always yields the same
/// scheme.
pub trait SecuritySchemeConverter: Send + Sync {
    /// Unique scheme identifier (e.g., "http-basic", "aws.v4").
    fn auth_scheme_name(&self) -> &'static str;

    /// Build the security scheme object.
    fn create_security_scheme(&self, context: &Context<'_>)
    -> Result<SecurityScheme, ConverterError>;

    /// Request headers consumed by the scheme. Empty when the credential is
    /// not carried in a dedicated header.
    fn auth_request_headers(&self) -> BTreeSet<String> {
        BTreeSet::new()
    }
}

/// Converters defined in this crate.
pub fn builtin_converters() -> [&'static dyn SecuritySchemeConverter; 5] {
    [&X_API_KEY, &HTTP_BASIC, &HTTP_BEARER, &AWS_V4, &QUERY_API_KEY]
}

fn headers(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}
