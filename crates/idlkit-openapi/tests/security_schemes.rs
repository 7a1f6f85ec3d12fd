//! Converter behavior through the public registry.

use idlkit_model::traits::builtin_registry as builtin_traits;
use idlkit_model::{Model, ModelAssembler, ShapeId, ToBuilder};
use idlkit_node::{Node, SourceLocation};
use idlkit_openapi::model::{Component, ExtensionsBuilder, SecurityScheme};
use idlkit_openapi::security::{SecuritySchemeConverter, X_API_KEY};
use idlkit_openapi::{Context, ConverterError, OpenApiConfig, builtin_registry};
use serde_json::json;
use std::collections::BTreeSet;

fn empty_model() -> Model {
    Model::builder().build().unwrap()
}

fn set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn header_auth_scheme() {
    let model = empty_model();
    let config = OpenApiConfig::default();
    let context = Context::new(&model, &config);

    let converter = builtin_registry().get("http-x-api-key").unwrap();
    let scheme = converter.create_security_scheme(&context).unwrap();
    assert_eq!(
        scheme.to_node(),
        Node::from(json!({
            "type": "apiKey",
            "in": "header",
            "name": "x-api-key",
            "description": "X-Api-Key authentication"
        }))
    );
    assert_eq!(converter.auth_request_headers(), set(&["x-api-key"]));
}

#[test]
fn conversion_is_deterministic() {
    let model = empty_model();
    let config = OpenApiConfig::default();
    let context = Context::new(&model, &config);
    let first = X_API_KEY.create_security_scheme(&context).unwrap();
    let second = X_API_KEY.create_security_scheme(&context).unwrap();
    assert_eq!(first, second);
}

#[test]
fn schemes_without_headers() {
    for name in ["http-basic", "http-bearer", "http-query-api-key"] {
        let converter = builtin_registry().get(name).unwrap();
        assert!(converter.auth_request_headers().is_empty(), "{name}");
    }
}

#[test]
fn query_api_key_requires_setting() {
    let model = empty_model();
    let config = OpenApiConfig::default();
    let err = builtin_registry()
        .convert(&Context::new(&model, &config), "http-query-api-key")
        .unwrap_err();
    assert_eq!(
        err,
        ConverterError::MissingSetting {
            converter: "http-query-api-key".into(),
            setting: "apiKeyQueryName"
        }
    );
    assert_eq!(
        err.to_string(),
        "converter `http-query-api-key` requires the `apiKeyQueryName` setting"
    );
}

#[test]
fn convert_all_merges_headers_in_request_order() {
    let model = empty_model();
    let config = OpenApiConfig::default();
    let converted = builtin_registry()
        .convert_all(&Context::new(&model, &config), &["aws.v4", "http-basic", "http-x-api-key"])
        .unwrap();

    assert_eq!(
        converted.schemes.keys().collect::<Vec<_>>(),
        ["aws.v4", "http-basic", "http-x-api-key"]
    );
    assert!(converted.request_headers.contains("x-api-key"));
    assert!(converted.request_headers.contains("authorization"));
    assert!(converted.request_headers.contains("x-amz-date"));
    assert_eq!(converted.request_headers.len(), 8);
}

#[test]
fn convert_all_reports_earliest_failure() {
    let model = empty_model();
    let config = OpenApiConfig::default();
    let err = builtin_registry()
        .convert_all(
            &Context::new(&model, &config),
            &["http-basic", "http-query-api-key", "nope"],
        )
        .unwrap_err();
    assert!(matches!(err, ConverterError::MissingSetting { .. }));
}

#[test]
fn extensions_survive_rebuild() {
    let model = empty_model();
    let config = OpenApiConfig::default();
    let scheme = X_API_KEY
        .create_security_scheme(&Context::new(&model, &config))
        .unwrap();
    let extended = scheme
        .to_builder()
        .put_extension("x-custom", 42)
        .build()
        .unwrap();

    let rebuilt = extended.to_builder().build().unwrap();
    assert_eq!(rebuilt.get_extension("x-custom"), Some(&Node::from(42)));
    assert_eq!(rebuilt, extended);
    assert_ne!(rebuilt, scheme);

    let stripped: SecurityScheme = extended
        .to_builder()
        .remove_extension("x-custom")
        .build()
        .unwrap();
    assert_eq!(stripped, scheme);
}

#[test]
fn converters_see_the_assembled_model() {
    struct DocumentedService;

    impl SecuritySchemeConverter for DocumentedService {
        fn auth_scheme_name(&self) -> &'static str {
            "example.documented"
        }

        fn create_security_scheme(
            &self,
            context: &Context<'_>,
        ) -> Result<SecurityScheme, ConverterError> {
            let service = context.service_shape(self.auth_scheme_name())?;
            let docs = service
                .get_trait::<idlkit_model::traits::DocumentationTrait>()
                .map(|d| d.value().to_string())
                .unwrap_or_default();
            Ok(SecurityScheme::builder()
                .scheme_type("http")
                .scheme("bearer")
                .description(docs)
                .build()?)
        }
    }

    static DOCUMENTED: DocumentedService = DocumentedService;

    let service = ShapeId::parse("example.weather#Weather").unwrap();
    let mut assembler = ModelAssembler::new(builtin_traits());
    assembler
        .add_shape(service.clone(), SourceLocation::none())
        .add_trait(&service, "documentation", Node::from("Weather API"));
    let model = assembler.assemble().unwrap();

    let registry = idlkit_openapi::ConverterRegistry::builder()
        .register(&DOCUMENTED)
        .build()
        .unwrap();

    let missing = OpenApiConfig::default();
    assert!(matches!(
        registry.convert(&Context::new(&model, &missing), "example.documented"),
        Err(ConverterError::MissingSetting { setting: "service", .. })
    ));

    let config = OpenApiConfig::default().with_service(service);
    let scheme = registry
        .convert(&Context::new(&model, &config), "example.documented")
        .unwrap();
    assert_eq!(scheme.description(), Some("Weather API"));
}
