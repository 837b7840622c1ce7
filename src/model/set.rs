//! Order-independent comparison of collections
//!
//! Each member is reduced to a BLAKE3 digest; two collections are equal when
//! they hold the same set of digests.

use std::collections::BTreeSet;

use blake3::Hasher;
use serde_json::Value;

/// A value that can be compared as part of an unordered collection
pub trait SetMember {
    fn digest(&self) -> blake3::Hash;
}

/// Compare two collections as sets
pub fn set_eq<T: SetMember>(left: &[T], right: &[T]) -> bool {
    digests(left) == digests(right)
}

fn digests<T: SetMember>(items: &[T]) -> BTreeSet<[u8; 32]> {
    items.iter().map(|item| *item.digest().as_bytes()).collect()
}

/// Feed a length-prefixed string into `hasher`
pub(crate) fn hash_str(hasher: &mut Hasher, text: &str) {
    hasher.update(&(text.len() as u64).to_le_bytes());
    hasher.update(text.as_bytes());
}

/// Feed a JSON value into `hasher` with object keys in sorted order
pub(crate) fn hash_value(hasher: &mut Hasher, value: &Value) {
    match value {
        Value::Null => {
            hasher.update(b"n");
        }
        Value::Bool(flag) => {
            hasher.update(if *flag { b"t" } else { b"f" });
        }
        Value::Number(number) => {
            hasher.update(b"#");
            hasher.update(number.to_string().as_bytes());
        }
        Value::String(text) => {
            hasher.update(b"s");
            hash_str(hasher, text);
        }
        Value::Array(items) => {
            hasher.update(b"[");
            for item in items {
                hash_value(hasher, item);
            }
            hasher.update(b"]");
        }
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            hasher.update(b"{");
            for (key, item) in entries {
                hash_str(hasher, key);
                hash_value(hasher, item);
            }
            hasher.update(b"}");
        }
    }
}
