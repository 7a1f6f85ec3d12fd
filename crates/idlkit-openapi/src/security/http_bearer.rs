use super::SecuritySchemeConverter;
use crate::model::SecurityScheme;
use crate::{Context, ConverterError};

/// HTTP Bearer token authentication. The token format is left unspecified.
pub struct HttpBearer;

pub static HTTP_BEARER: HttpBearer = HttpBearer;

impl SecuritySchemeConverter for HttpBearer {
    fn auth_scheme_name(&self) -> &'static str {
        "http-bearer"
    }

    fn create_security_scheme(
        &self,
        context: &Context<'_>,
    ) -> Result<SecurityScheme, ConverterError> {
        Ok(SecurityScheme::builder()
            .scheme_type("http")
            .scheme("bearer")
            .description(
                context
                    .config()
                    .description_for(self.auth_scheme_name(), "HTTP Bearer authentication"),
            )
            .build()?)
    }
}
