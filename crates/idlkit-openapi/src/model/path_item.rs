//! OpenAPI Path Item object and the HTTP methods it maps.

use super::component::{Component, Extensions, ExtensionsBuilder, checked, component_eq};
use super::OperationObject;
use idlkit_model::{BuildError, ToBuilder};
use idlkit_node::{ObjectNode, ObjectNodeBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// HTTP methods a path item can hold an operation for, in encoding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 8] = [
        HttpMethod::Get,
        HttpMethod::Put,
        HttpMethod::Post,
        HttpMethod::Delete,
        HttpMethod::Options,
        HttpMethod::Head,
        HttpMethod::Patch,
        HttpMethod::Trace,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
            HttpMethod::Trace => "trace",
        }
    }

    /// Case-insensitive lookup.
    pub fn from_name(name: &str) -> Option<HttpMethod> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operations available on a single path.
#[derive(Debug, Clone, Default)]
pub struct PathItem {
    reference: Option<String>,
    summary: Option<String>,
    description: Option<String>,
    operations: BTreeMap<HttpMethod, OperationObject>,
    extensions: Extensions,
}

impl PathItem {
    pub fn builder() -> PathItemBuilder {
        PathItemBuilder::default()
    }

    /// The `$ref` member.
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn operation(&self, method: HttpMethod) -> Option<&OperationObject> {
        self.operations.get(&method)
    }

    pub fn operations(&self) -> &BTreeMap<HttpMethod, OperationObject> {
        &self.operations
    }
}

impl Component for PathItem {
    const TARGET: &'static str = "PathItem";
    const FIELDS: &'static [&'static str] = &[
        "$ref",
        "summary",
        "description",
        "get",
        "put",
        "post",
        "delete",
        "options",
        "head",
        "patch",
        "trace",
    ];

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    fn typed_members(&self) -> ObjectNodeBuilder {
        let builder = ObjectNode::builder()
            .with_optional_member("$ref", self.reference.clone())
            .with_optional_member("summary", self.summary.clone())
            .with_optional_member("description", self.description.clone());
        self.operations
            .iter()
            .fold(builder, |builder, (method, operation)| {
                builder.with_member(method.as_str(), operation.to_node())
            })
    }
}

component_eq!(PathItem);

impl ToBuilder for PathItem {
    type Builder = PathItemBuilder;

    fn to_builder(&self) -> PathItemBuilder {
        PathItemBuilder {
            reference: self.reference.clone(),
            summary: self.summary.clone(),
            description: self.description.clone(),
            operations: self.operations.clone(),
            extensions: self.extensions.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PathItemBuilder {
    reference: Option<String>,
    summary: Option<String>,
    description: Option<String>,
    operations: BTreeMap<HttpMethod, OperationObject>,
    extensions: Extensions,
}

impl PathItemBuilder {
    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn operation(mut self, method: HttpMethod, operation: OperationObject) -> Self {
        self.operations.insert(method, operation);
        self
    }

    pub fn get(self, operation: OperationObject) -> Self {
        self.operation(HttpMethod::Get, operation)
    }

    pub fn put(self, operation: OperationObject) -> Self {
        self.operation(HttpMethod::Put, operation)
    }

    pub fn post(self, operation: OperationObject) -> Self {
        self.operation(HttpMethod::Post, operation)
    }

    pub fn delete(self, operation: OperationObject) -> Self {
        self.operation(HttpMethod::Delete, operation)
    }

    pub fn remove_operation(mut self, method: HttpMethod) -> Self {
        self.operations.remove(&method);
        self
    }

    pub fn build(self) -> Result<PathItem, BuildError> {
        checked(PathItem {
            reference: self.reference,
            summary: self.summary,
            description: self.description,
            operations: self.operations,
            extensions: self.extensions,
        })
    }
}

impl ExtensionsBuilder for PathItemBuilder {
    fn extensions_mut(&mut self) -> &mut Extensions {
        &mut self.extensions
    }
}
