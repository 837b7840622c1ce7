//! Channel records (`olm.channel`)

use serde::{Deserialize, Serialize};

use super::set::set_eq;
use super::{Property, null_as_default};

/// An update channel of a package
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Channel {
    /// Always `olm.channel`
    #[serde(alias = "Schema", deserialize_with = "null_as_default")]
    pub schema: String,

    #[serde(alias = "Name", deserialize_with = "null_as_default")]
    pub name: String,

    /// Owning package
    #[serde(alias = "Package", deserialize_with = "null_as_default")]
    pub package: String,

    /// Upgrade graph edges; order is significant
    #[serde(alias = "Entries", deserialize_with = "null_as_default")]
    pub entries: Vec<ChannelEntry>,

    /// Compared as a set
    #[serde(
        alias = "Properties",
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub properties: Vec<Property>,
}

impl PartialEq for Channel {
    fn eq(&self, other: &Self) -> bool {
        self.schema == other.schema
            && self.name == other.name
            && self.package == other.package
            && self.entries == other.entries
            && set_eq(&self.properties, &other.properties)
    }
}

impl Eq for Channel {}

/// One bundle in a channel and the bundles it upgrades from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChannelEntry {
    #[serde(alias = "Name", deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(
        alias = "Replaces",
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub replaces: String,

    #[serde(
        alias = "Skips",
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub skips: Vec<String>,

    #[serde(
        alias = "SkipRange",
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub skip_range: String,
}

impl ChannelEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
