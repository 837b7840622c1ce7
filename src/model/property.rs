//! Property envelope
//!
//! Property schemas are defined elsewhere; a catalog record only needs the
//! type tag and the raw value.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::set::SetMember;

/// A typed property attached to a package, channel or bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Property type, e.g. `olm.package` or `olm.gvk`
    #[serde(rename = "type", alias = "Type")]
    pub kind: String,

    /// Property value, interpreted according to `kind`
    #[serde(alias = "Value")]
    pub value: Value,
}

impl Property {
    pub fn new(kind: impl Into<String>, value: Value) -> Self {
        Self {
            kind: kind.into(),
            value,
        }
    }
}

impl SetMember for Property {
    fn digest(&self) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        super::set::hash_str(&mut hasher, &self.kind);
        super::set::hash_value(&mut hasher, &self.value);
        hasher.finalize()
    }
}
