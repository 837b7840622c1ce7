//! Error types and handling for declcfg
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostic codes.
//!
//! This module is organized into sub-modules by error domain:
//! - [`json`]: Malformed documents and shape mismatches reported by the parser
//! - [`meta`]: Case-insensitive key resolution errors
//! - [`entity`]: Typed decoding of routed records and encoding failures

pub mod entity;
pub mod json;
pub mod meta;

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

use crate::diagnostic;

/// Original keys that fold to the same canonical key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKey {
    /// The case-folded key shared by every entry in `keys`
    pub folded: String,
    /// The colliding keys as they appear in the object, sorted
    pub keys: Vec<String>,
}

impl fmt::Display for DuplicateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "duplicate keys for key {:?}: [{}]",
            self.folded,
            self.keys.join(", ")
        )
    }
}

fn join_duplicates(duplicates: &[DuplicateKey]) -> String {
    match duplicates {
        [single] => single.to_string(),
        _ => {
            let parts: Vec<String> = duplicates.iter().map(ToString::to_string).collect();
            format!("[{}]", parts.join("; "))
        }
    }
}

/// Main error type for declcfg operations
#[derive(Error, Diagnostic, Debug)]
pub enum DeclcfgError {
    // Parser errors
    #[error("{message}")]
    #[diagnostic(
        code(declcfg::json::malformed),
        help("The document is not valid JSON; render it with `DeclcfgError::render` to see where")
    )]
    MalformedJson { message: String, offset: usize },

    #[error("{message}")]
    #[diagnostic(code(declcfg::json::invalid_type))]
    InvalidType { message: String, offset: usize },

    // Key resolution errors
    #[error("expected value for key {key:?} to be a string, got {kind}: {value}")]
    #[diagnostic(code(declcfg::meta::type_mismatch))]
    TypeMismatch {
        key: String,
        kind: String,
        value: String,
    },

    #[error("{}", join_duplicates(.duplicates))]
    #[diagnostic(
        code(declcfg::meta::duplicate_keys),
        help("Keep a single spelling of each of `schema`, `package` and `name`")
    )]
    DuplicateKeys { duplicates: Vec<DuplicateKey> },

    // Entity errors
    #[error("invalid {schema} {name:?}: {diagnostic}")]
    #[diagnostic(code(declcfg::entity::invalid))]
    InvalidEntity {
        schema: String,
        name: String,
        diagnostic: String,
    },

    #[error("Failed to encode {what}: {reason}")]
    #[diagnostic(code(declcfg::entity::encode_failed))]
    EncodeFailed { what: String, reason: String },

    #[error("YAML error: {reason}")]
    #[diagnostic(code(declcfg::yaml::failed))]
    YamlFailed { reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(declcfg::io::failed))]
    Io { message: String },
}

impl DeclcfgError {
    /// Byte offset of the failure within the decoded document, if known
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::MalformedJson { offset, .. } | Self::InvalidType { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    /// Render the error for a human, pointing into `data` when the error has an offset
    ///
    /// `data` must be the document the error was produced from.
    pub fn render(&self, data: &[u8]) -> String {
        match self {
            Self::MalformedJson { message, offset } | Self::InvalidType { message, offset } => {
                diagnostic::format_at_offset(data, message, *offset)
            }
            _ => self.to_string(),
        }
    }
}

impl From<std::io::Error> for DeclcfgError {
    fn from(err: std::io::Error) -> Self {
        DeclcfgError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for DeclcfgError {
    fn from(err: serde_yaml::Error) -> Self {
        DeclcfgError::YamlFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DeclcfgError>;
