//! declcfg - declarative catalog configuration
//!
//! An in-memory model of file-based catalogs (packages, channels and
//! bundles) and the conversion between that model and JSON:
//!
//! - [`meta::Meta`] keeps records of any schema as their original object,
//!   resolving `schema`, `package` and `name` under any casing and rejecting
//!   objects that spell one key two ways.
//! - [`model::DeclarativeConfig`] routes records into typed entities.
//! - [`diagnostic`] shows where in a document a decode failure happened.

pub mod diagnostic;
pub mod error;
pub mod meta;
pub mod model;

pub use error::{DeclcfgError, DuplicateKey, Result};
pub use meta::Meta;
pub use model::{
    Bundle, Channel, ChannelEntry, DeclarativeConfig, Icon, Package, Property, RelatedImage,
    SCHEMA_BUNDLE, SCHEMA_CHANNEL, SCHEMA_PACKAGE,
};
