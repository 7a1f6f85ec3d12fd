use super::SecuritySchemeConverter;
use crate::model::SecurityScheme;
use crate::{Context, ConverterError};

/// HTTP Basic authentication.
pub struct HttpBasic;

pub static HTTP_BASIC: HttpBasic = HttpBasic;

impl SecuritySchemeConverter for HttpBasic {
    fn auth_scheme_name(&self) -> &'static str {
        "http-basic"
    }

    fn create_security_scheme(
        &self,
        context: &Context<'_>,
    ) -> Result<SecurityScheme, ConverterError> {
        Ok(SecurityScheme::builder()
            .scheme_type("http")
            .scheme("basic")
            .description(
                context
                    .config()
                    .description_for(self.auth_scheme_name(), "HTTP Basic authentication"),
            )
            .build()?)
    }
}
