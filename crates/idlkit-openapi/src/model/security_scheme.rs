//! OpenAPI Security Scheme object.

use super::component::{Component, Extensions, ExtensionsBuilder, checked, component_eq};
use idlkit_model::{BuildError, ToBuilder, required};
use idlkit_node::{ObjectNode, ObjectNodeBuilder};

/// How a request is authenticated: an API key, an HTTP scheme, OAuth2 flows,
/// or OpenID Connect discovery.
#[derive(Debug, Clone)]
pub struct SecurityScheme {
    scheme_type: String,
    description: Option<String>,
    name: Option<String>,
    location: Option<String>,
    scheme: Option<String>,
    bearer_format: Option<String>,
    flows: Option<ObjectNode>,
    open_id_connect_url: Option<String>,
    extensions: Extensions,
}

impl SecurityScheme {
    pub fn builder() -> SecuritySchemeBuilder {
        SecuritySchemeBuilder::default()
    }

    /// `apiKey`, `http`, `oauth2`, or `openIdConnect`.
    pub fn scheme_type(&self) -> &str {
        &self.scheme_type
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Header, query, or cookie parameter name for `apiKey` schemes.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// `header`, `query`, or `cookie` for `apiKey` schemes.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// HTTP authorization scheme (e.g., `basic`, `bearer`).
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn bearer_format(&self) -> Option<&str> {
        self.bearer_format.as_deref()
    }

    pub fn flows(&self) -> Option<&ObjectNode> {
        self.flows.as_ref()
    }

    pub fn open_id_connect_url(&self) -> Option<&str> {
        self.open_id_connect_url.as_deref()
    }
}

impl Component for SecurityScheme {
    const TARGET: &'static str = "SecurityScheme";
    const FIELDS: &'static [&'static str] = &[
        "type",
        "description",
        "name",
        "in",
        "scheme",
        "bearerFormat",
        "flows",
        "openIdConnectUrl",
    ];

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    fn typed_members(&self) -> ObjectNodeBuilder {
        ObjectNode::builder()
            .with_member("type", self.scheme_type.clone())
            .with_optional_member("description", self.description.clone())
            .with_optional_member("name", self.name.clone())
            .with_optional_member("in", self.location.clone())
            .with_optional_member("scheme", self.scheme.clone())
            .with_optional_member("bearerFormat", self.bearer_format.clone())
            .with_optional_member("flows", self.flows.clone())
            .with_optional_member("openIdConnectUrl", self.open_id_connect_url.clone())
    }
}

component_eq!(SecurityScheme);

impl ToBuilder for SecurityScheme {
    type Builder = SecuritySchemeBuilder;

    fn to_builder(&self) -> SecuritySchemeBuilder {
        SecuritySchemeBuilder {
            scheme_type: Some(self.scheme_type.clone()),
            description: self.description.clone(),
            name: self.name.clone(),
            location: self.location.clone(),
            scheme: self.scheme.clone(),
            bearer_format: self.bearer_format.clone(),
            flows: self.flows.clone(),
            open_id_connect_url: self.open_id_connect_url.clone(),
            extensions: self.extensions.clone(),
        }
    }
}

/// Builder for [`SecurityScheme`]. `type` is required.
#[derive(Debug, Clone, Default)]
pub struct SecuritySchemeBuilder {
    scheme_type: Option<String>,
    description: Option<String>,
    name: Option<String>,
    location: Option<String>,
    scheme: Option<String>,
    bearer_format: Option<String>,
    flows: Option<ObjectNode>,
    open_id_connect_url: Option<String>,
    extensions: Extensions,
}

impl SecuritySchemeBuilder {
    pub fn scheme_type(mut self, scheme_type: impl Into<String>) -> Self {
        self.scheme_type = Some(scheme_type.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the `in` member.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    pub fn bearer_format(mut self, bearer_format: impl Into<String>) -> Self {
        self.bearer_format = Some(bearer_format.into());
        self
    }

    pub fn flows(mut self, flows: ObjectNode) -> Self {
        self.flows = Some(flows);
        self
    }

    pub fn open_id_connect_url(mut self, url: impl Into<String>) -> Self {
        self.open_id_connect_url = Some(url.into());
        self
    }

    pub fn build(self) -> Result<SecurityScheme, BuildError> {
        checked(SecurityScheme {
            scheme_type: required(SecurityScheme::TARGET, "type", self.scheme_type)?,
            description: self.description,
            name: self.name,
            location: self.location,
            scheme: self.scheme,
            bearer_format: self.bearer_format,
            flows: self.flows,
            open_id_connect_url: self.open_id_connect_url,
            extensions: self.extensions,
        })
    }
}

impl ExtensionsBuilder for SecuritySchemeBuilder {
    fn extensions_mut(&mut self) -> &mut Extensions {
        &mut self.extensions
    }
}
