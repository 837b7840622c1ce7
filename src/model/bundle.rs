//! Bundle records (`olm.bundle`)

use serde::{Deserialize, Serialize};

use super::set::{SetMember, set_eq};
use super::{Property, null_as_default};

/// A bundle: one installable version of a package
///
/// Top-level fields are the source of truth. `csv_json` and `objects` are
/// filled in after decoding from `olm.bundle.object` properties so older
/// consumers can keep reading them; they are never read from or written to
/// JSON but still take part in equality.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Bundle {
    /// Always `olm.bundle`
    #[serde(alias = "Schema", deserialize_with = "null_as_default")]
    pub schema: String,

    #[serde(alias = "Name", deserialize_with = "null_as_default")]
    pub name: String,

    /// Owning package
    #[serde(alias = "Package", deserialize_with = "null_as_default")]
    pub package: String,

    /// Bundle image reference
    #[serde(alias = "Image", deserialize_with = "null_as_default")]
    pub image: String,

    /// Compared as a set
    #[serde(
        alias = "Properties",
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub properties: Vec<Property>,

    /// Compared as a set
    #[serde(
        alias = "RelatedImages",
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub related_images: Vec<RelatedImage>,

    #[serde(skip)]
    pub csv_json: Option<String>,

    #[serde(skip)]
    pub objects: Vec<String>,
}

impl PartialEq for Bundle {
    fn eq(&self, other: &Self) -> bool {
        self.schema == other.schema
            && self.name == other.name
            && self.package == other.package
            && self.image == other.image
            && set_eq(&self.properties, &other.properties)
            && set_eq(&self.related_images, &other.related_images)
            && self.csv_json == other.csv_json
            && self.objects == other.objects
    }
}

impl Eq for Bundle {}

/// An image referenced by a bundle's manifests
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedImage {
    #[serde(alias = "Name", deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(alias = "Image", deserialize_with = "null_as_default")]
    pub image: String,
}

impl RelatedImage {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }
}

impl SetMember for RelatedImage {
    fn digest(&self) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        super::set::hash_str(&mut hasher, &self.name);
        super::set::hash_str(&mut hasher, &self.image);
        hasher.finalize()
    }
}
