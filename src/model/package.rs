//! Package records (`olm.package`)

use serde::{Deserialize, Serialize};

use super::set::set_eq;
use super::{Property, null_as_default};

/// A package: the unit users subscribe to
///
/// Field names also accept their upper camel case spelling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Package {
    /// Always `olm.package`
    #[serde(alias = "Schema", deserialize_with = "null_as_default")]
    pub schema: String,

    /// Package name, unique within a config
    #[serde(alias = "Name", deserialize_with = "null_as_default")]
    pub name: String,

    /// Name of one of this package's channels
    #[serde(alias = "DefaultChannel", deserialize_with = "null_as_default")]
    pub default_channel: String,

    #[serde(alias = "Icon", skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,

    #[serde(
        alias = "Description",
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub description: String,

    /// Compared as a set
    #[serde(
        alias = "Properties",
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub properties: Vec<Property>,
}

impl PartialEq for Package {
    fn eq(&self, other: &Self) -> bool {
        self.schema == other.schema
            && self.name == other.name
            && self.default_channel == other.default_channel
            && self.icon == other.icon
            && self.description == other.description
            && set_eq(&self.properties, &other.properties)
    }
}

impl Eq for Package {}

/// Package icon, base64 encoded on the wire
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Icon {
    #[serde(rename = "base64data", alias = "Base64data", with = "base64data")]
    pub data: Vec<u8>,

    #[serde(
        rename = "mediatype",
        alias = "Mediatype",
        deserialize_with = "null_as_default"
    )]
    pub media_type: String,
}

mod base64data {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&STANDARD.encode(data))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}
