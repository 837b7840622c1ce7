//! Opaque metadata records
//!
//! A [`Meta`] keeps the complete JSON object it was decoded from and exposes
//! the `schema`, `package` and `name` fields found in it under any casing.
//! The extracted fields are projections of the payload: encoding a `Meta`
//! writes the payload back unchanged.

pub mod fold;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use serde_json::{Map, Value};

use crate::error::{self, Result};

/// Well-known keys extracted from every record
pub const META_KEYS: [&str; 3] = ["schema", "package", "name"];

/// A catalog record of any schema, kept as its original JSON object
#[derive(Clone)]
pub struct Meta {
    schema: String,
    package: String,
    name: String,
    blob: Box<RawValue>,
}

impl Meta {
    /// Decode a record from a single JSON object
    ///
    /// The object is re-serialized once with sorted keys and kept as the
    /// payload. Parse failures carry the byte offset into `data`.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let object: Map<String, Value> =
            serde_json::from_slice(data).map_err(|err| error::json::from_serde(data, &err))?;
        Self::from_object(object)
    }

    /// Build a record from an already parsed JSON object
    pub fn from_object(object: Map<String, Value>) -> Result<Self> {
        let mut fields = fold::resolve_strings(&object, &META_KEYS)?;
        let mut take = |key: &str| fields.remove(key).unwrap_or_default();
        let (schema, package, name) = (take("schema"), take("package"), take("name"));

        let blob = serde_json::value::to_raw_value(&object)
            .map_err(|err| error::entity::encode_failed("meta payload", err.to_string()))?;

        tracing::trace!(%schema, %package, %name, "decoded meta record");
        Ok(Self {
            schema,
            package,
            name,
            blob,
        })
    }

    /// The payload bytes, exactly as stored at decode time
    pub fn encode(&self) -> &[u8] {
        self.blob.get().as_bytes()
    }

    /// The payload as raw JSON
    pub fn blob(&self) -> &RawValue {
        &self.blob
    }

    /// Parse the payload back into a JSON value
    pub fn value(&self) -> Result<Value> {
        serde_json::from_str(self.blob.get())
            .map_err(|err| error::json::from_serde(self.encode(), &err))
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Meta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Meta")
            .field("schema", &self.schema)
            .field("package", &self.package)
            .field("name", &self.name)
            .field("blob", &self.blob.get())
            .finish()
    }
}

impl PartialEq for Meta {
    fn eq(&self, other: &Self) -> bool {
        self.blob.get() == other.blob.get()
    }
}

impl Eq for Meta {}

impl Serialize for Meta {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.blob.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Meta {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        Self::from_object(object).map_err(D::Error::custom)
    }
}
