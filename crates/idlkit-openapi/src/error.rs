use idlkit_model::{BuildError, ModelError};

/// Error raised while converting a model into OpenAPI components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConverterError {
    /// A converter needs a setting that was not configured.
    #[error("converter `{converter}` requires the `{setting}` setting")]
    MissingSetting {
        converter: String,
        setting: &'static str,
    },

    #[error("no security scheme converter named `{0}`")]
    UnknownScheme(String),

    #[error("more than one converter registered for auth scheme `{0}`")]
    DuplicateConverter(String),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Error raised while loading [`OpenApiConfig`](crate::OpenApiConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid config object: {0}")]
    Node(#[from] serde_json::Error),
}
