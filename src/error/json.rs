//! Parser errors

use serde_json::error::Category;

use super::DeclcfgError;
use crate::diagnostic;

/// Creates a malformed JSON error
pub fn malformed(message: impl Into<String>, offset: usize) -> DeclcfgError {
    DeclcfgError::MalformedJson {
        message: message.into(),
        offset,
    }
}

/// Creates an invalid type error
pub fn invalid_type(message: impl Into<String>, offset: usize) -> DeclcfgError {
    DeclcfgError::InvalidType {
        message: message.into(),
        offset,
    }
}

/// Converts a `serde_json` error raised while parsing `data`
///
/// The parser reports a line and column; they are turned back into a byte
/// offset into `data` so the failure can be shown with
/// [`DeclcfgError::render`].
pub fn from_serde(data: &[u8], err: &serde_json::Error) -> DeclcfgError {
    let message = diagnostic::strip_position(err);
    let offset = diagnostic::error_offset(data, err);
    match err.classify() {
        Category::Syntax | Category::Eof => malformed(message, offset),
        Category::Data => invalid_type(message, offset),
        Category::Io => DeclcfgError::Io { message },
    }
}
