//! The aggregate of every record in a catalog

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::{Bundle, Channel, Package, SCHEMA_BUNDLE, SCHEMA_CHANNEL, SCHEMA_PACKAGE};
use crate::diagnostic;
use crate::error::{self, DeclcfgError, Result};
use crate::meta::Meta;

/// All records of a declarative config, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarativeConfig {
    pub packages: Vec<Package>,
    pub channels: Vec<Channel>,
    pub bundles: Vec<Bundle>,

    /// Records whose schema is not one of the above
    pub others: Vec<Meta>,
}

impl DeclarativeConfig {
    /// Create an empty declarative config
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a stream of JSON objects separated by optional whitespace
    ///
    /// Parse failures carry byte offsets into `data`; render them with
    /// [`DeclcfgError::render`].
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        let mut config = Self::new();
        let stream = serde_json::Deserializer::from_slice(data).into_iter::<Map<String, Value>>();
        for object in stream {
            let object = object.map_err(|err| error::json::from_serde(data, &err))?;
            config.push_meta(Meta::from_object(object)?)?;
        }
        config.log_decoded();
        Ok(config)
    }

    /// Decode a multi-document YAML text, one record per document
    ///
    /// Empty documents are skipped.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let mut config = Self::new();
        for (index, document) in serde_yaml::Deserializer::from_str(text).enumerate() {
            match Value::deserialize(document)? {
                Value::Null => {}
                Value::Object(object) => config.push_meta(Meta::from_object(object)?)?,
                _ => {
                    return Err(DeclcfgError::YamlFailed {
                        reason: format!("document {} is not a mapping", index + 1),
                    });
                }
            }
        }
        config.log_decoded();
        Ok(config)
    }

    /// Add a record, decoding it into a typed entity when its schema is known
    ///
    /// The identity fields of the typed entity are taken from `meta`, so
    /// they may be spelled with any casing in the record.
    pub fn push_meta(&mut self, meta: Meta) -> Result<()> {
        match meta.schema() {
            SCHEMA_PACKAGE => {
                let mut package: Package = decode_entity(&meta)?;
                package.schema = meta.schema().to_string();
                package.name = meta.name().to_string();
                self.packages.push(package);
            }
            SCHEMA_CHANNEL => {
                let mut channel: Channel = decode_entity(&meta)?;
                channel.schema = meta.schema().to_string();
                channel.package = meta.package().to_string();
                channel.name = meta.name().to_string();
                self.channels.push(channel);
            }
            SCHEMA_BUNDLE => {
                let mut bundle: Bundle = decode_entity(&meta)?;
                bundle.schema = meta.schema().to_string();
                bundle.package = meta.package().to_string();
                bundle.name = meta.name().to_string();
                self.bundles.push(bundle);
            }
            schema => {
                tracing::trace!(schema, name = meta.name(), "keeping record as meta");
                self.others.push(meta);
            }
        }
        Ok(())
    }

    /// Total number of records
    pub fn len(&self) -> usize {
        self.packages.len() + self.channels.len() + self.bundles.len() + self.others.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn log_decoded(&self) {
        tracing::debug!(
            packages = self.packages.len(),
            channels = self.channels.len(),
            bundles = self.bundles.len(),
            others = self.others.len(),
            "decoded declarative config"
        );
    }
}

fn decode_entity<T: DeserializeOwned>(meta: &Meta) -> Result<T> {
    let data = meta.encode();
    serde_json::from_slice(data).map_err(|err| {
        error::entity::invalid(
            meta.schema(),
            meta.name(),
            diagnostic::resolve_decode_error(data, &err),
        )
    })
}
