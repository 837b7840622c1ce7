//! Declarative config entity model
//!
//! This module contains data structures for:
//! - `olm.package` - [`Package`] records
//! - `olm.channel` - [`Channel`] records and their [`ChannelEntry`] edges
//! - `olm.bundle` - [`Bundle`] records
//! - [`DeclarativeConfig`] - every record of a catalog, with anything of an
//!   unknown schema kept as a [`Meta`](crate::meta::Meta)

pub mod bundle;
pub mod channel;
pub mod declarative;
pub mod package;
pub mod property;
pub mod serialization;
pub mod set;

// Re-export commonly used types
pub use bundle::{Bundle, RelatedImage};
pub use channel::{Channel, ChannelEntry};
pub use declarative::DeclarativeConfig;
pub use package::{Icon, Package};
pub use property::Property;

/// Schema of package records
pub const SCHEMA_PACKAGE: &str = "olm.package";

/// Schema of channel records
pub const SCHEMA_CHANNEL: &str = "olm.channel";

/// Schema of bundle records
pub const SCHEMA_BUNDLE: &str = "olm.bundle";

/// Deserialize `null` as the default value, the same as a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests;
