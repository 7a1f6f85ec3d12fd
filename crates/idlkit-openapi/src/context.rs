use crate::{ConverterError, OpenApiConfig};
use idlkit_model::{Model, ModelError, Shape};

/// Read-only view of the model and settings handed to converters.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    model: &'a Model,
    config: &'a OpenApiConfig,
}

impl<'a> Context<'a> {
    pub fn new(model: &'a Model, config: &'a OpenApiConfig) -> Self {
        Self { model, config }
    }

    pub fn model(&self) -> &'a Model {
        self.model
    }

    pub fn config(&self) -> &'a OpenApiConfig {
        self.config
    }

    /// The configured service shape. `converter` names the caller in errors.
    pub fn service_shape(&self, converter: &str) -> Result<&'a Shape, ConverterError> {
        let id = self
            .config
            .service
            .as_ref()
            .ok_or_else(|| ConverterError::MissingSetting {
                converter: converter.to_string(),
                setting: "service",
            })?;
        self.model
            .get_shape(id)
            .ok_or_else(|| ModelError::ShapeNotFound(id.clone()).into())
    }
}
