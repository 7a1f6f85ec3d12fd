//! Registry of security scheme converters.

use crate::model::SecurityScheme;
use crate::security::{SecuritySchemeConverter, builtin_converters};
use crate::{Context, ConverterError};
use indexmap::IndexMap;
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

static BUILTIN: OnceLock<ConverterRegistry> = OnceLock::new();

/// Shared registry of the built-in converters, initialized on first use.
pub fn builtin_registry() -> &'static ConverterRegistry {
    BUILTIN.get_or_init(|| {
        ConverterRegistry::builder()
            .with_builtins()
            .build()
            .expect("built-in converters have unique names")
    })
}

/// Schemes produced by [`ConverterRegistry::convert_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityConversion {
    /// Converted schemes keyed by auth scheme name, in request order.
    pub schemes: IndexMap<String, SecurityScheme>,
    /// Union of the request headers of every converted scheme.
    pub request_headers: BTreeSet<String>,
}

#[derive(Default)]
pub struct ConverterRegistryBuilder {
    converters: Vec<&'static dyn SecuritySchemeConverter>,
}

impl ConverterRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtins(mut self) -> Self {
        self.converters.extend(builtin_converters());
        self
    }

    pub fn register(mut self, converter: &'static dyn SecuritySchemeConverter) -> Self {
        self.converters.push(converter);
        self
    }

    /// Reject two converters claiming the same auth scheme name.
    pub fn build(self) -> Result<ConverterRegistry, ConverterError> {
        let mut converters = BTreeMap::new();
        for converter in self.converters {
            let name = converter.auth_scheme_name();
            if converters.insert(name, converter).is_some() {
                return Err(ConverterError::DuplicateConverter(name.to_string()));
            }
        }
        tracing::debug!(converters = converters.len(), "built converter registry");
        Ok(ConverterRegistry { converters })
    }
}

/// Read-only mapping of auth scheme name to converter.
pub struct ConverterRegistry {
    converters: BTreeMap<&'static str, &'static dyn SecuritySchemeConverter>,
}

impl ConverterRegistry {
    pub fn builder() -> ConverterRegistryBuilder {
        ConverterRegistryBuilder::new()
    }

    pub fn get(&self, name: &str) -> Option<&'static dyn SecuritySchemeConverter> {
        self.converters.get(name).copied()
    }

    /// Registered auth scheme names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        self.converters.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// Convert a single scheme.
    pub fn convert(
        &self,
        context: &Context<'_>,
        name: &str,
    ) -> Result<SecurityScheme, ConverterError> {
        let converter = self
            .get(name)
            .ok_or_else(|| ConverterError::UnknownScheme(name.to_string()))?;
        let scheme = converter.create_security_scheme(context)?;
        tracing::debug!(scheme = name, scheme_type = scheme.scheme_type(), "converted security scheme");
        Ok(scheme)
    }

    /// Convert several schemes in parallel.
    ///
    /// Results keep the order of `names`. If any conversion fails, the error
    /// for the earliest failing name is returned.
    pub fn convert_all(
        &self,
        context: &Context<'_>,
        names: &[&str],
    ) -> Result<SecurityConversion, ConverterError> {
        let results: Vec<(&str, Result<SecurityScheme, ConverterError>)> = names
            .par_iter()
            .map(|&name| (name, self.convert(context, name)))
            .collect();

        let mut conversion = SecurityConversion::default();
        for (name, result) in results {
            let scheme = result?;
            if let Some(converter) = self.get(name) {
                conversion
                    .request_headers
                    .extend(converter.auth_request_headers());
            }
            conversion.schemes.insert(name.to_string(), scheme);
        }
        Ok(conversion)
    }
}

impl std::fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConverterRegistry")
            .field("converters", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpenApiConfig;
    use crate::security::X_API_KEY;
    use idlkit_model::Model;

    #[test]
    fn builtins_are_registered() {
        assert_eq!(
            builtin_registry().names(),
            ["aws.v4", "http-basic", "http-bearer", "http-query-api-key", "http-x-api-key"]
        );
    }

    #[test]
    fn duplicate_converter_is_rejected() {
        let err = ConverterRegistry::builder()
            .with_builtins()
            .register(&X_API_KEY)
            .build()
            .unwrap_err();
        assert_eq!(err, ConverterError::DuplicateConverter("http-x-api-key".into()));
    }

    #[test]
    fn unknown_scheme() {
        let model = Model::builder().build().unwrap();
        let config = OpenApiConfig::default();
        let err = builtin_registry()
            .convert(&Context::new(&model, &config), "http-digest")
            .unwrap_err();
        assert_eq!(err, ConverterError::UnknownScheme("http-digest".into()));
    }
}
