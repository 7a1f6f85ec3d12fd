//! Construction contract shared by every immutable model object.
//!
//! Builders are plain structs with consuming setters. `build()` checks
//! required fields in declaration order using [`required`] and reports the
//! first one that is missing. Types that can be rebuilt implement
//! [`ToBuilder`], seeding a builder with every current field.

/// Error returned by `build()`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("missing required field `{field}` when building {target}")]
    MissingRequiredField {
        target: &'static str,
        field: &'static str,
    },

    #[error("extension `{key}` on {target} collides with a typed field")]
    ConflictingExtension { target: &'static str, key: String },
}

/// Unwrap a required builder field or report it as missing.
pub fn required<T>(
    target: &'static str,
    field: &'static str,
    value: Option<T>,
) -> Result<T, BuildError> {
    value.ok_or(BuildError::MissingRequiredField { target, field })
}

/// Types that can produce a builder seeded with their current state.
///
/// Implementations must satisfy `x.to_builder().build() == Ok(x)`.
pub trait ToBuilder {
    type Builder;

    fn to_builder(&self) -> Self::Builder;
}
