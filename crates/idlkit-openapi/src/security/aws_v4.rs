use super::{SecuritySchemeConverter, headers};
use crate::model::{ExtensionsBuilder, SecurityScheme};
use crate::{Context, ConverterError};
use std::collections::BTreeSet;

/// AWS Signature Version 4 request signing.
///
/// Expressed as an API key in the `Authorization` header, tagged with the
/// API Gateway auth type extension.
pub struct AwsV4;

pub static AWS_V4: AwsV4 = AwsV4;

const AUTH_TYPE_EXTENSION: &str = "x-amazon-apigateway-authtype";

impl SecuritySchemeConverter for AwsV4 {
    fn auth_scheme_name(&self) -> &'static str {
        "aws.v4"
    }

    fn create_security_scheme(
        &self,
        context: &Context<'_>,
    ) -> Result<SecurityScheme, ConverterError> {
        Ok(SecurityScheme::builder()
            .scheme_type("apiKey")
            .location("header")
            .name("Authorization")
            .description(context.config().description_for(
                self.auth_scheme_name(),
                "AWS Signature Version 4 authentication",
            ))
            .put_extension(AUTH_TYPE_EXTENSION, "awsSigv4")
            .build()?)
    }

    fn auth_request_headers(&self) -> BTreeSet<String> {
        headers(&[
            "authorization",
            "date",
            "host",
            "x-amz-content-sha256",
            "x-amz-date",
            "x-amz-security-token",
            "x-amz-target",
        ])
    }
}
