use crate::ConfigError;
use idlkit_model::ShapeId;
use idlkit_node::Node;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Settings read by converters.
///
/// Example config.toml:
/// ```toml
/// service = "example.weather#Weather"
/// apiKeyQueryName = "api_key"
///
/// [schemeDescriptions]
/// "http-x-api-key" = "Partner API key"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OpenApiConfig {
    /// Service shape being converted.
    pub service: Option<ShapeId>,
    /// Query parameter carrying the key for `http-query-api-key`.
    pub api_key_query_name: Option<String>,
    /// Description overrides, keyed by auth scheme name.
    pub scheme_descriptions: BTreeMap<String, String>,
}

impl OpenApiConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Read settings from a plugin-settings object node.
    pub fn from_node(node: &Node) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(node.to_json())?)
    }

    pub fn with_service(mut self, service: ShapeId) -> Self {
        self.service = Some(service);
        self
    }

    pub fn with_api_key_query_name(mut self, name: impl Into<String>) -> Self {
        self.api_key_query_name = Some(name.into());
        self
    }

    pub fn with_scheme_description(
        mut self,
        scheme: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.scheme_descriptions
            .insert(scheme.into(), description.into());
        self
    }

    /// Configured description for `scheme`, falling back to `default`.
    pub fn description_for<'a>(&'a self, scheme: &str, default: &'a str) -> &'a str {
        self.scheme_descriptions
            .get(scheme)
            .map(String::as_str)
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn loads_toml() {
        let config = OpenApiConfig::from_toml_str(
            r#"
            service = "example.weather#Weather"
            apiKeyQueryName = "api_key"

            [schemeDescriptions]
            "http-basic" = "Staff login"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.service,
            Some(ShapeId::parse("example.weather#Weather").unwrap())
        );
        assert_eq!(config.api_key_query_name.as_deref(), Some("api_key"));
        assert_eq!(config.description_for("http-basic", "x"), "Staff login");
        assert_eq!(config.description_for("http-bearer", "x"), "x");
    }

    #[test]
    fn empty_sources_use_defaults() {
        assert_eq!(OpenApiConfig::from_toml_str("").unwrap(), OpenApiConfig::default());
        assert_eq!(
            OpenApiConfig::from_node(&Node::from(json!({}))).unwrap(),
            OpenApiConfig::default()
        );
    }

    #[test]
    fn loads_plugin_settings_node() {
        let config =
            OpenApiConfig::from_node(&Node::from(json!({ "apiKeyQueryName": "token" }))).unwrap();
        assert_eq!(config.api_key_query_name.as_deref(), Some("token"));
        assert!(config.service.is_none());
    }

    #[test]
    fn rejects_invalid_service_id() {
        let err = OpenApiConfig::from_toml_str(r#"service = "not an id""#).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
