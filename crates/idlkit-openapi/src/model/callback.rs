//! OpenAPI Callback object.

use super::component::{Component, Extensions, ExtensionsBuilder, checked, component_eq};
use super::PathItem;
use idlkit_model::{BuildError, ToBuilder};
use idlkit_node::{ObjectNode, ObjectNodeBuilder};
use indexmap::IndexMap;

/// Out-of-band requests an operation may make, keyed by runtime expression.
///
/// Unlike other components, the expressions are written directly as members
/// of the encoded object rather than under a fixed field name.
#[derive(Debug, Clone, Default)]
pub struct CallbackObject {
    paths: IndexMap<String, PathItem>,
    extensions: Extensions,
}

impl CallbackObject {
    pub fn builder() -> CallbackObjectBuilder {
        CallbackObjectBuilder::default()
    }

    pub fn paths(&self) -> &IndexMap<String, PathItem> {
        &self.paths
    }

    pub fn path(&self, expression: &str) -> Option<&PathItem> {
        self.paths.get(expression)
    }
}

impl Component for CallbackObject {
    const TARGET: &'static str = "CallbackObject";
    const FIELDS: &'static [&'static str] = &[];

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    fn typed_members(&self) -> ObjectNodeBuilder {
        self.paths
            .iter()
            .fold(ObjectNode::builder(), |builder, (expression, item)| {
                builder.with_member(expression.clone(), item.to_node())
            })
    }
}

component_eq!(CallbackObject);

impl ToBuilder for CallbackObject {
    type Builder = CallbackObjectBuilder;

    fn to_builder(&self) -> CallbackObjectBuilder {
        CallbackObjectBuilder {
            paths: self.paths.clone(),
            extensions: self.extensions.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CallbackObjectBuilder {
    paths: IndexMap<String, PathItem>,
    extensions: Extensions,
}

impl CallbackObjectBuilder {
    pub fn put_path(mut self, expression: impl Into<String>, item: PathItem) -> Self {
        self.paths.insert(expression.into(), item);
        self
    }

    pub fn paths(mut self, paths: IndexMap<String, PathItem>) -> Self {
        self.paths = paths;
        self
    }

    pub fn remove_path(mut self, expression: &str) -> Self {
        self.paths.shift_remove(expression);
        self
    }

    pub fn build(self) -> Result<CallbackObject, BuildError> {
        checked(CallbackObject {
            paths: self.paths,
            extensions: self.extensions,
        })
    }
}

impl ExtensionsBuilder for CallbackObjectBuilder {
    fn extensions_mut(&mut self) -> &mut Extensions {
        &mut self.extensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HttpMethod, OperationObject};
    use idlkit_node::Node;
    use serde_json::json;

    fn on_event() -> PathItem {
        PathItem::builder()
            .post(OperationObject::builder().operation_id("OnEvent").build().unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn expressions_are_direct_members() {
        let callback = CallbackObject::builder()
            .put_path("{$request.body#/callbackUrl}", on_event())
            .put_extension("x-internal", true)
            .build()
            .unwrap();
        assert_eq!(
            callback.to_node(),
            Node::from(json!({
                "{$request.body#/callbackUrl}": { "post": { "operationId": "OnEvent" } },
                "x-internal": true
            }))
        );
        let item = callback.path("{$request.body#/callbackUrl}").unwrap();
        assert!(item.operation(HttpMethod::Post).is_some());
    }

    #[test]
    fn extension_may_not_reuse_an_expression() {
        let err = CallbackObject::builder()
            .put_path("x-hook", on_event())
            .put_extension("x-hook", 1)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::ConflictingExtension {
                target: "CallbackObject",
                key: "x-hook".into()
            }
        );
    }

    #[test]
    fn rebuild_preserves_paths() {
        let callback = CallbackObject::builder()
            .put_path("{$url}", on_event())
            .build()
            .unwrap();
        assert_eq!(callback.to_builder().build().unwrap(), callback);
        assert!(callback.to_builder().remove_path("{$url}").build().unwrap().paths().is_empty());
    }
}
