//! Canonical cache keys.
//!
//! Structured keys are reduced to a stable digest: object keys are sorted
//! recursively, then the compact JSON bytes are hashed. Equivalent values
//! with differently ordered properties hash identically; nothing here
//! depends on a map's iteration order.

use serde::Serialize;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();

            let mut sorted = Map::new();
            for key in keys {
                sorted.insert(key.clone(), canonicalize(&map[key]));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}

/// Canonical SHA-256 digest of any serializable value.
///
/// Total: a value that cannot serialize digests as JSON null rather than
/// erroring, keeping the cache failure-free.
pub fn canonical_digest<T: Serialize>(value: &T) -> String {
    let json = serde_json::to_value(value).unwrap_or(Value::Null);
    let canonical = canonicalize(&json);
    let bytes = serde_json::to_vec(&canonical).unwrap_or_default();
    format!("{:x}", Sha256::digest(&bytes))
}
