//! Case-insensitive lookup of well-known keys in a JSON object
//!
//! Keys are compared after full Unicode case folding, so `Schema`,
//! `SCHEMA` and `ſchema` all name the same field. An object may spell each
//! folded key only one way; any collision is an error, and every collision
//! in the object is reported at once.

use std::collections::{BTreeMap, BTreeSet};

use caseless::default_case_fold_str;
use serde_json::{Map, Value};

use crate::error::meta::{duplicate_keys, type_mismatch};
use crate::error::{DuplicateKey, Result};

/// Keys of an object indexed by their case-folded form
#[derive(Debug)]
pub struct FoldedKeys<'a> {
    object: &'a Map<String, Value>,
    keys: BTreeMap<String, &'a str>,
}

impl<'a> FoldedKeys<'a> {
    /// Index the keys of `object`, failing if two of them fold together
    pub fn new(object: &'a Map<String, Value>) -> Result<Self> {
        let mut groups: BTreeMap<String, BTreeSet<&'a str>> = BTreeMap::new();
        for key in object.keys() {
            groups
                .entry(default_case_fold_str(key))
                .or_default()
                .insert(key.as_str());
        }

        let duplicates: Vec<DuplicateKey> = groups
            .iter()
            .filter(|(_, keys)| keys.len() > 1)
            .map(|(folded, keys)| DuplicateKey {
                folded: folded.clone(),
                keys: keys.iter().map(|key| (*key).to_string()).collect(),
            })
            .collect();
        if !duplicates.is_empty() {
            return Err(duplicate_keys(duplicates));
        }

        let keys = groups
            .into_iter()
            .filter_map(|(folded, keys)| keys.first().map(|key| (folded, *key)))
            .collect();

        Ok(Self { object, keys })
    }

    /// The spelling of `canonical` used by the object, if it has one
    pub fn key(&self, canonical: &str) -> Option<&'a str> {
        self.keys.get(&default_case_fold_str(canonical)).copied()
    }

    /// The string stored under any casing of `canonical`
    ///
    /// Returns `Ok(None)` when the object has no such key and an error when
    /// the value is not a string.
    pub fn string(&self, canonical: &str) -> Result<Option<&'a str>> {
        let Some(key) = self.key(canonical) else {
            return Ok(None);
        };
        match self.object.get(key) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.as_str())),
            Some(other) => Err(type_mismatch(key, other)),
        }
    }
}

/// Resolve each of `canonical` to its string value in `object`
///
/// Names missing from the object are absent from the result.
pub fn resolve_strings<'k>(
    object: &Map<String, Value>,
    canonical: &[&'k str],
) -> Result<BTreeMap<&'k str, String>> {
    let keys = FoldedKeys::new(object)?;
    let mut resolved = BTreeMap::new();
    for name in canonical {
        if let Some(value) = keys.string(name)? {
            resolved.insert(*name, value.to_string());
        }
    }
    Ok(resolved)
}
