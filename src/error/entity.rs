//! Entity errors

use super::DeclcfgError;

/// Creates an invalid entity error carrying a rendered diagnostic
pub fn invalid(
    schema: impl Into<String>,
    name: impl Into<String>,
    diagnostic: impl Into<String>,
) -> DeclcfgError {
    DeclcfgError::InvalidEntity {
        schema: schema.into(),
        name: name.into(),
        diagnostic: diagnostic.into(),
    }
}

/// Creates an encode failed error
pub fn encode_failed(what: impl Into<String>, reason: impl Into<String>) -> DeclcfgError {
    DeclcfgError::EncodeFailed {
        what: what.into(),
        reason: reason.into(),
    }
}
