// ABOUTME: JSON wire helpers - RFC 7396 merge patch, canonical hashing, finite float encoding
// ABOUTME: Pure functions over serde_json values used by the Record trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UpCoach

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde_json::{Map, Number, Value};

/// Serializers for float fields that refuse NaN and infinities
///
/// JSON has no representation for non-finite numbers and `serde_json` writes them
/// as `null`, which would decode as a cleared or missing field. Annotate float
/// fields with `#[serde(serialize_with = "finite::number")]` (or
/// `finite::optional` for `Option<f64>`) so encoding fails instead.
pub mod finite {
    use serde::ser::Error;
    use serde::Serializer;

    fn reject<E: Error>(value: f64) -> E {
        E::custom(format!("non-finite float {value} has no JSON representation"))
    }

    /// Serialize a required float, failing on NaN or infinity
    ///
    /// # Errors
    ///
    /// Returns the serializer's error for non-finite values.
    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            Err(reject(*value))
        }
    }

    /// Serialize an optional float, failing on NaN or infinity
    ///
    /// # Errors
    ///
    /// Returns the serializer's error for non-finite values.
    #[allow(clippy::ref_option)]
    pub fn optional<S: Serializer>(
        value: &Option<f64>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) if !v.is_finite() => Err(reject(*v)),
            Some(v) => serializer.serialize_some(v),
            None => serializer.serialize_none(),
        }
    }
}

/// Name of the JSON type of a value, for error messages
#[must_use]
pub const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Apply an RFC 7396 merge patch to `target` in place
pub fn merge_patch(target: &mut Map<String, Value>, patch: &Map<String, Value>) {
    for (key, patch_value) in patch {
        match patch_value {
            Value::Null => {
                target.remove(key);
            }
            Value::Object(nested_patch) => {
                let entry = target
                    .entry(key.clone())
                    .or_insert_with(|| Value::Object(Map::new()));
                if !entry.is_object() {
                    *entry = Value::Object(Map::new());
                }
                if let Value::Object(nested_target) = entry {
                    merge_patch(nested_target, nested_patch);
                }
            }
            other => {
                target.insert(key.clone(), other.clone());
            }
        }
    }
}

/// Hash a JSON value structurally
///
/// Object keys are hashed in sorted order so the result does not depend on map
/// iteration order. Numbers hash by numeric value with `-0.0` folded into `0.0`.
#[must_use]
pub fn hash_value(value: &Value) -> u64 {
    let mut hasher = DefaultHasher::new();
    feed(value, &mut hasher);
    hasher.finish()
}

fn feed<H: Hasher>(value: &Value, state: &mut H) {
    match value {
        Value::Null => 0u8.hash(state),
        Value::Bool(b) => {
            1u8.hash(state);
            b.hash(state);
        }
        Value::Number(n) => {
            2u8.hash(state);
            feed_number(n, state);
        }
        Value::String(s) => {
            3u8.hash(state);
            s.hash(state);
        }
        Value::Array(items) => {
            4u8.hash(state);
            items.len().hash(state);
            for item in items {
                feed(item, state);
            }
        }
        Value::Object(map) => {
            5u8.hash(state);
            map.len().hash(state);
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort_unstable();
            for key in keys {
                key.hash(state);
                if let Some(item) = map.get(key) {
                    feed(item, state);
                }
            }
        }
    }
}

fn feed_number<H: Hasher>(n: &Number, state: &mut H) {
    if let Some(i) = n.as_i64() {
        0u8.hash(state);
        i.hash(state);
    } else if let Some(u) = n.as_u64() {
        1u8.hash(state);
        u.hash(state);
    } else if let Some(f) = n.as_f64() {
        2u8.hash(state);
        // -0.0 + 0.0 is +0.0
        (f + 0.0).to_bits().hash(state);
    }
}
