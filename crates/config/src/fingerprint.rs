//! Reproducibility fingerprints.
//!
//! The digest is taken over compact JSON with object keys sorted at every
//! depth, so two documents that differ only in key order hash identically.

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

/// Recursively key-sorted, compact JSON text.
pub fn canonical_json(value: &Value) -> String {
    sort_keys(value).to_string()
}

/// SHA-256 hex digest of [`canonical_json`], all 64 hex characters.
///
/// Digests from tools that hash `", "`/`": "`-separated JSON or keep only a
/// 16-character prefix will not match; compare against a re-hash of the same
/// canonical text instead.
pub fn fingerprint_value(value: &Value) -> String {
    fingerprint_bytes(canonical_json(value).as_bytes())
}

pub(crate) fn fingerprint_bytes(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

// `Map` keeps insertion order when serde_json's `preserve_order` feature is
// enabled anywhere in the build, so rebuild maps in sorted order explicitly.
fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let mut sorted = Map::with_capacity(entries.len());
            for (key, child) in entries {
                sorted.insert(key.clone(), sort_keys(child));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}
