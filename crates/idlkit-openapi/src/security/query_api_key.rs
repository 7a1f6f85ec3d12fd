use super::SecuritySchemeConverter;
use crate::model::SecurityScheme;
use crate::{Context, ConverterError};

/// API key passed as a query string parameter.
///
/// The parameter name comes from the `apiKeyQueryName` setting.
pub struct QueryApiKey;

pub static QUERY_API_KEY: QueryApiKey = QueryApiKey;

impl SecuritySchemeConverter for QueryApiKey {
    fn auth_scheme_name(&self) -> &'static str {
        "http-query-api-key"
    }

    fn create_security_scheme(
        &self,
        context: &Context<'_>,
    ) -> Result<SecurityScheme, ConverterError> {
        let config = context.config();
        let name = config
            .api_key_query_name
            .as_deref()
            .ok_or_else(|| ConverterError::MissingSetting {
                converter: self.auth_scheme_name().to_string(),
                setting: "apiKeyQueryName",
            })?;
        Ok(SecurityScheme::builder()
            .scheme_type("apiKey")
            .location("query")
            .name(name)
            .description(
                config.description_for(self.auth_scheme_name(), "API key query parameter"),
            )
            .build()?)
    }
}
