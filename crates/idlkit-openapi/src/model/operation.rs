//! OpenAPI Operation object.

use super::component::{Component, Extensions, ExtensionsBuilder, checked, component_eq};
use super::CallbackObject;
use idlkit_model::{BuildError, ToBuilder};
use idlkit_node::{Node, ObjectNode, ObjectNodeBuilder};
use indexmap::IndexMap;

/// A single API operation on a path.
#[derive(Debug, Clone, Default)]
pub struct OperationObject {
    operation_id: Option<String>,
    summary: Option<String>,
    description: Option<String>,
    tags: Vec<String>,
    deprecated: bool,
    callbacks: IndexMap<String, CallbackObject>,
    extensions: Extensions,
}

impl OperationObject {
    pub fn builder() -> OperationObjectBuilder {
        OperationObjectBuilder::default()
    }

    pub fn operation_id(&self) -> Option<&str> {
        self.operation_id.as_deref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn deprecated(&self) -> bool {
        self.deprecated
    }

    pub fn callbacks(&self) -> &IndexMap<String, CallbackObject> {
        &self.callbacks
    }
}

impl Component for OperationObject {
    const TARGET: &'static str = "OperationObject";
    const FIELDS: &'static [&'static str] = &[
        "operationId",
        "summary",
        "description",
        "tags",
        "deprecated",
        "callbacks",
    ];

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    fn typed_members(&self) -> ObjectNodeBuilder {
        let tags = (!self.tags.is_empty()).then(|| Node::array(self.tags.iter().cloned()));
        let callbacks = (!self.callbacks.is_empty()).then(|| {
            Node::object(
                self.callbacks
                    .iter()
                    .map(|(name, callback)| (name.clone(), callback.to_node())),
            )
        });
        ObjectNode::builder()
            .with_optional_member("operationId", self.operation_id.clone())
            .with_optional_member("summary", self.summary.clone())
            .with_optional_member("description", self.description.clone())
            .with_optional_member("tags", tags)
            .with_optional_member("deprecated", self.deprecated.then_some(true))
            .with_optional_member("callbacks", callbacks)
    }
}

component_eq!(OperationObject);

impl ToBuilder for OperationObject {
    type Builder = OperationObjectBuilder;

    fn to_builder(&self) -> OperationObjectBuilder {
        OperationObjectBuilder {
            operation_id: self.operation_id.clone(),
            summary: self.summary.clone(),
            description: self.description.clone(),
            tags: self.tags.clone(),
            deprecated: self.deprecated,
            callbacks: self.callbacks.clone(),
            extensions: self.extensions.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct OperationObjectBuilder {
    operation_id: Option<String>,
    summary: Option<String>,
    description: Option<String>,
    tags: Vec<String>,
    deprecated: bool,
    callbacks: IndexMap<String, CallbackObject>,
    extensions: Extensions,
}

impl OperationObjectBuilder {
    pub fn operation_id(mut self, operation_id: impl Into<String>) -> Self {
        self.operation_id = Some(operation_id.into());
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

    pub fn add_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    pub fn put_callback(mut self, name: impl Into<String>, callback: CallbackObject) -> Self {
        self.callbacks.insert(name.into(), callback);
        self
    }

    pub fn remove_callback(mut self, name: &str) -> Self {
        self.callbacks.shift_remove(name);
        self
    }

    pub fn build(self) -> Result<OperationObject, BuildError> {
        checked(OperationObject {
            operation_id: self.operation_id,
            summary: self.summary,
            description: self.description,
            tags: self.tags,
            deprecated: self.deprecated,
            callbacks: self.callbacks,
            extensions: self.extensions,
        })
    }
}

impl ExtensionsBuilder for OperationObjectBuilder {
    fn extensions_mut(&mut self) -> &mut Extensions {
        &mut self.extensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn omits_defaults() {
        let op = OperationObject::builder().build().unwrap();
        assert_eq!(op.to_node(), Node::from(json!({})));
    }

    #[test]
    fn encodes_tags_and_deprecation() {
        let op = OperationObject::builder()
            .operation_id("GetForecast")
            .tags(["weather", "read"])
            .deprecated(true)
            .put_extension("x-rate-limit", 10)
            .build()
            .unwrap();
        assert_eq!(
            op.to_node(),
            Node::from(json!({
                "operationId": "GetForecast",
                "tags": ["weather", "read"],
                "deprecated": true,
                "x-rate-limit": 10
            }))
        );
        assert_eq!(op.to_builder().build().unwrap(), op);
    }
}
