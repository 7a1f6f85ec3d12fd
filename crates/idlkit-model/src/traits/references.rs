//! The `smithy.api#references` trait: resource references within a structure.

use crate::builder::{BuildError, ToBuilder, required};
use crate::traits::TraitCodec;
use crate::{DecodeError, ExpectShapeId, ShapeId};
use idlkit_node::{FromSourceLocation, Node, ObjectNode, SourceLocation};
use indexmap::IndexMap;

/// References from a structure's members to resources.
///
/// The trait value is an object keyed by reference name:
///
/// ```json
/// {
///     "city": {
///         "resource": "example.weather#City",
///         "ids": { "cityId": "id" },
///         "service": "example.weather#Weather",
///         "rel": "parent"
///     }
/// }
/// ```
///
/// Reference names are unique: adding a reference under a name that is
/// already present replaces the earlier entry in its original position, so
/// every instance encodes without loss.
#[derive(Debug, Clone)]
pub struct ReferencesTrait {
    references: Vec<Reference>,
    source_location: SourceLocation,
}

location_insensitive_eq!(ReferencesTrait, references);

impl ReferencesTrait {
    pub fn builder() -> ReferencesTraitBuilder {
        ReferencesTraitBuilder::default()
    }

    /// All references in declaration order.
    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    /// The reference named `name`.
    pub fn reference(&self, name: &str) -> Option<&Reference> {
        self.references.iter().find(|r| r.name == name)
    }

    /// Every reference that targets `resource`.
    pub fn resource_references(&self, resource: &ShapeId) -> Vec<&Reference> {
        self.references
            .iter()
            .filter(|r| &r.resource == resource)
            .collect()
    }
}

impl TraitCodec for ReferencesTrait {
    const NAME: &'static str = "smithy.api#references";

    fn decode(target: &ShapeId, value: &Node) -> Result<Self, DecodeError> {
        let namespace = target.namespace();
        let mut builder = ReferencesTrait::builder().source_location(value);
        for (name, reference) in value.expect_object_node()? {
            builder = builder.add_reference(decode_reference(namespace, name, reference)?);
        }
        builder
            .build()
            .map_err(|e| DecodeError::build(value.location().clone(), e))
    }

    fn encode(&self) -> Node {
        let mut builder = ObjectNode::builder().source_location(&self.source_location);
        for reference in &self.references {
            builder = builder.with_member(reference.name.clone(), reference.to_node());
        }
        builder.build().into()
    }
}

crate::impl_trait!(ReferencesTrait);

fn decode_reference(namespace: &str, name: &str, value: &Node) -> Result<Reference, DecodeError> {
    let properties = value.expect_object_node()?;

    let resource = properties
        .expect_member("resource")?
        .expect_string_node()?
        .expect_shape_id(namespace)?;

    let mut ids = IndexMap::new();
    if let Some(members) = properties.get_object_member("ids")? {
        for (member, identifier) in members {
            ids.insert(
                member.clone(),
                identifier.expect_string_node()?.value().to_string(),
            );
        }
    }

    let service = properties
        .get_string_member("service")?
        .map(|s| s.expect_shape_id(namespace))
        .transpose()?;

    let rel = properties
        .get_string_member("rel")?
        .map(|s| s.value().to_string());

    Reference::builder()
        .name(name)
        .resource(resource)
        .ids(ids)
        .service(service)
        .rel(rel)
        .build()
        .map_err(|e| DecodeError::build(value.location().clone(), e))
}

impl ToBuilder for ReferencesTrait {
    type Builder = ReferencesTraitBuilder;

    fn to_builder(&self) -> ReferencesTraitBuilder {
        ReferencesTraitBuilder {
            references: self.references.clone(),
            source_location: self.source_location.clone(),
        }
    }
}

/// Builder for [`ReferencesTrait`].
#[derive(Debug, Clone, Default)]
pub struct ReferencesTraitBuilder {
    references: Vec<Reference>,
    source_location: SourceLocation,
}

impl ReferencesTraitBuilder {
    pub fn source_location(mut self, location: impl FromSourceLocation) -> Self {
        self.source_location = location.source_location();
        self
    }

    /// Add a reference, replacing any existing one with the same name in place.
    pub fn add_reference(mut self, reference: Reference) -> Self {
        match self.references.iter_mut().find(|r| r.name == reference.name) {
            Some(existing) => *existing = reference,
            None => self.references.push(reference),
        }
        self
    }

    pub fn clear_references(mut self) -> Self {
        self.references.clear();
        self
    }

    /// Remove the reference named `name`.
    pub fn remove_reference(mut self, name: &str) -> Self {
        self.references.retain(|r| r.name != name);
        self
    }

    pub fn build(self) -> Result<ReferencesTrait, BuildError> {
        Ok(ReferencesTrait {
            references: self.references,
            source_location: self.source_location,
        })
    }
}

/// A single named reference to a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    name: String,
    resource: ShapeId,
    ids: IndexMap<String, String>,
    service: Option<ShapeId>,
    rel: Option<String>,
}

impl Reference {
    pub fn builder() -> ReferenceBuilder {
        ReferenceBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The referenced resource shape.
    pub fn resource(&self) -> &ShapeId {
        &self.resource
    }

    /// Member name to resource identifier name.
    pub fn ids(&self) -> &IndexMap<String, String> {
        &self.ids
    }

    /// The service the resource is bound to, if not the enclosing one.
    pub fn service(&self) -> Option<&ShapeId> {
        self.service.as_ref()
    }

    pub fn rel(&self) -> Option<&str> {
        self.rel.as_deref()
    }

    /// Encode this reference without its name.
    pub fn to_node(&self) -> Node {
        ObjectNode::builder()
            .with_member("resource", self.resource.to_string())
            .with_optional_member(
                "ids",
                (!self.ids.is_empty()).then(|| ObjectNode::from_string_map(&self.ids)),
            )
            .with_optional_member("service", self.service.as_ref().map(ToString::to_string))
            .with_optional_member("rel", self.rel.clone())
            .build()
            .into()
    }
}

impl ToBuilder for Reference {
    type Builder = ReferenceBuilder;

    fn to_builder(&self) -> ReferenceBuilder {
        Reference::builder()
            .name(self.name.clone())
            .resource(self.resource.clone())
            .ids(self.ids.clone())
            .service(self.service.clone())
            .rel(self.rel.clone())
    }
}

/// Builder for [`Reference`]. `name` and `resource` are required.
#[derive(Debug, Clone, Default)]
pub struct ReferenceBuilder {
    name: Option<String>,
    resource: Option<ShapeId>,
    ids: IndexMap<String, String>,
    service: Option<ShapeId>,
    rel: Option<String>,
}

impl ReferenceBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn resource(mut self, resource: ShapeId) -> Self {
        self.resource = Some(resource);
        self
    }

    pub fn ids(mut self, ids: IndexMap<String, String>) -> Self {
        self.ids = ids;
        self
    }

    pub fn put_id(mut self, member: impl Into<String>, identifier: impl Into<String>) -> Self {
        self.ids.insert(member.into(), identifier.into());
        self
    }

    pub fn service(mut self, service: impl Into<Option<ShapeId>>) -> Self {
        self.service = service.into();
        self
    }

    pub fn rel(mut self, rel: impl Into<Option<String>>) -> Self {
        self.rel = rel.into();
        self
    }

    pub fn build(self) -> Result<Reference, BuildError> {
        Ok(Reference {
            name: required("Reference", "name", self.name)?,
            resource: required("Reference", "resource", self.resource)?,
            ids: self.ids,
            service: self.service,
            rel: self.rel,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DecodeErrorKind;
    use serde_json::json;

    fn target() -> ShapeId {
        ShapeId::parse("ns#Thing").unwrap()
    }

    fn decode(value: serde_json::Value) -> Result<ReferencesTrait, DecodeError> {
        ReferencesTrait::decode(&target(), &Node::from(value))
    }

    #[test]
    fn decodes_minimal_reference() {
        let t = decode(json!({ "widget": { "resource": "ns#Widget", "rel": "owner" } })).unwrap();
        assert_eq!(t.references().len(), 1);
        let r = t.reference("widget").unwrap();
        assert_eq!(r.name(), "widget");
        assert_eq!(r.resource(), &ShapeId::parse("ns#Widget").unwrap());
        assert_eq!(r.rel(), Some("owner"));
        assert!(r.ids().is_empty());
        assert!(r.service().is_none());
    }

    #[test]
    fn resolves_relative_ids_against_target_namespace() {
        let t = decode(json!({
            "city": { "resource": "City", "service": "Weather", "ids": { "cityId": "id" } }
        }))
        .unwrap();
        let r = t.reference("city").unwrap();
        assert_eq!(r.resource().to_string(), "ns#City");
        assert_eq!(r.service().map(ToString::to_string).as_deref(), Some("ns#Weather"));
        assert_eq!(r.ids().get("cityId").map(String::as_str), Some("id"));
    }

    #[test]
    fn malformed_resource_is_rejected() {
        let err = decode(json!({ "widget": { "resource": "###" } })).unwrap_err();
        assert!(matches!(err.kind, DecodeErrorKind::InvalidShapeId(_)));
    }

    #[test]
    fn missing_resource_is_rejected() {
        let err = decode(json!({ "widget": { "rel": "owner" } })).unwrap_err();
        assert!(matches!(
            err.kind,
            DecodeErrorKind::Node(idlkit_node::NodeError::MissingMember { ref member, .. }) if member == "resource"
        ));
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(decode(json!(["widget"])).is_err());
        assert!(decode(json!({ "widget": "ns#Widget" })).is_err());
        assert!(decode(json!({ "widget": { "resource": "ns#Widget", "ids": { "a": 1 } } })).is_err());
        assert!(decode(json!({ "widget": { "resource": "ns#Widget", "rel": false } })).is_err());
    }

    fn reference(name: &str, resource: &str) -> Reference {
        Reference::builder()
            .name(name)
            .resource(ShapeId::parse(resource).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn repeated_name_replaces_in_place() {
        let t = ReferencesTrait::builder()
            .add_reference(reference("a", "ns#First"))
            .add_reference(reference("b", "ns#Other"))
            .add_reference(reference("a", "ns#Second"))
            .build()
            .unwrap();
        assert_eq!(t.references().len(), 2);
        assert_eq!(t.references()[0].name(), "a");
        assert_eq!(t.reference("a").unwrap().resource().name(), "Second");
        assert!(
            t.resource_references(&ShapeId::parse("ns#First").unwrap())
                .is_empty()
        );
        assert_eq!(ReferencesTrait::decode(&target(), &t.encode()).unwrap(), t);

        let removed = t.to_builder().remove_reference("a").build().unwrap();
        assert_eq!(removed.references().len(), 1);
    }

    #[test]
    fn equality_ignores_source_location() {
        let value = Node::from(json!({ "widget": { "resource": "ns#Widget" } }));
        let a = ReferencesTrait::decode(
            &target(),
            &value.with_source_location(SourceLocation::new("a.smithy", 1, 1)),
        )
        .unwrap();
        let b = ReferencesTrait::decode(
            &target(),
            &value.with_source_location(SourceLocation::new("b.smithy", 9, 9)),
        )
        .unwrap();
        assert_ne!(a.source_location, b.source_location);
        assert_eq!(a, b);
    }

    #[test]
    fn reference_builder_reports_first_missing_field() {
        let err = Reference::builder().build().unwrap_err();
        assert_eq!(
            err,
            BuildError::MissingRequiredField {
                target: "Reference",
                field: "name"
            }
        );
        let err = Reference::builder().name("a").build().unwrap_err();
        assert_eq!(
            err,
            BuildError::MissingRequiredField {
                target: "Reference",
                field: "resource"
            }
        );
    }

    #[test]
    fn encode_then_decode_is_identity() {
        let value = json!({
            "a": { "resource": "ns#A", "ids": { "x": "y", "b": "c" }, "service": "other#S", "rel": "r" },
            "b": { "resource": "ns#B" }
        });
        let decoded = decode(value.clone()).unwrap();
        assert_eq!(decoded.encode().to_json(), value);
        assert_eq!(ReferencesTrait::decode(&target(), &decoded.encode()).unwrap(), decoded);
        assert_eq!(decoded.to_builder().build().unwrap(), decoded);
    }
}
