use super::{SecuritySchemeConverter, headers};
use crate::model::SecurityScheme;
use crate::{Context, ConverterError};
use std::collections::BTreeSet;

/// API key sent in the `x-api-key` header, as accepted by API gateways.
pub struct XApiKey;

pub static X_API_KEY: XApiKey = XApiKey;

impl SecuritySchemeConverter for XApiKey {
    fn auth_scheme_name(&self) -> &'static str {
        "http-x-api-key"
    }

    fn create_security_scheme(
        &self,
        context: &Context<'_>,
    ) -> Result<SecurityScheme, ConverterError> {
        Ok(SecurityScheme::builder()
            .scheme_type("apiKey")
            .location("header")
            .name("x-api-key")
            .description(
                context
                    .config()
                    .description_for(self.auth_scheme_name(), "X-Api-Key authentication"),
            )
            .build()?)
    }

    fn auth_request_headers(&self) -> BTreeSet<String> {
        headers(&["x-api-key"])
    }
}
