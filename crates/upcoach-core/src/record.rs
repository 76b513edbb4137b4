// ABOUTME: The Record contract shared by every UpCoach domain type
// ABOUTME: Copy-with updates, wire map encode/decode, merge-patch and content hashing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UpCoach

//! Immutable record contract
//!
//! A record is a fixed-shape value with named fields. Records are never changed
//! in place: [`Record::with_changes`] produces a modified copy and leaves the
//! source untouched. The wire form is a string-keyed JSON map whose keys are the
//! camelCase field names; decoding applies the same defaults as construction and
//! rejects missing required fields instead of inventing placeholders.
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use upcoach_core::record::Record;
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! #[serde(rename_all = "camelCase")]
//! struct Note {
//!     id: i64,
//!     body: Option<String>,
//! }
//!
//! impl Record for Note {
//!     const KIND: &'static str = "note";
//! }
//!
//! let note = Note { id: 1, body: Some("draft".to_owned()) };
//! let cleared = note.with_changes(|n| n.body = None);
//! assert_eq!(note.body.as_deref(), Some("draft"));
//! assert_eq!(cleared.body, None);
//! ```

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::{WireError, WireResult};
use crate::wire;

/// Wire representation of a record: a string-keyed map of JSON values
pub type WireMap = Map<String, Value>;

/// Open key-value bag of arbitrary JSON values (preferences, metadata, ...)
pub type JsonMap = BTreeMap<String, Value>;

/// Contract implemented by every domain record
pub trait Record: Clone + PartialEq + Serialize + DeserializeOwned {
    /// Snake-case kind name, used in errors and the record registry
    const KIND: &'static str;

    /// Produce a copy of this record with the fields assigned in `apply` replaced.
    ///
    /// Fields the closure does not touch keep the source value. For `Option`
    /// fields, leaving the field alone, assigning `None`, and assigning `Some(v)`
    /// are three distinct outcomes.
    #[must_use]
    fn with_changes<F>(&self, apply: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut next = self.clone();
        apply(&mut next);
        next
    }

    /// Encode into the wire map
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Encode`] if serialization fails (a NaN or infinite
    /// float field, for one), or [`WireError::NotAnObject`] if the type does not
    /// serialize to a map.
    fn to_wire(&self) -> WireResult<WireMap> {
        let value = serde_json::to_value(self).map_err(|source| WireError::Encode {
            record: Self::KIND,
            source,
        })?;
        match value {
            Value::Object(map) => Ok(map),
            other => Err(WireError::NotAnObject {
                record: Self::KIND,
                found: wire::json_type_name(&other),
            }),
        }
    }

    /// Decode from the wire map
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Decode`] when a required field is missing, a field has
    /// the wrong JSON kind, or a tag or timestamp cannot be parsed.
    fn from_wire(map: WireMap) -> WireResult<Self> {
        serde_json::from_value(Value::Object(map)).map_err(|e| WireError::decode(Self::KIND, e))
    }

    /// Decode from an arbitrary JSON value, which must be an object
    ///
    /// # Errors
    ///
    /// Returns [`WireError::NotAnObject`] for non-object values and otherwise the
    /// same errors as [`Record::from_wire`].
    fn from_value(value: Value) -> WireResult<Self> {
        match value {
            Value::Object(map) => Self::from_wire(map),
            other => Err(WireError::NotAnObject {
                record: Self::KIND,
                found: wire::json_type_name(&other),
            }),
        }
    }

    /// Parse JSON text and decode it
    ///
    /// # Errors
    ///
    /// Returns a [`WireError::Decode`] with kind `Syntax` for malformed JSON and
    /// otherwise the same errors as [`Record::from_value`].
    fn from_json_str(text: &str) -> WireResult<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| WireError::syntax(Self::KIND, e))?;
        Self::from_value(value)
    }

    /// Encode to compact JSON text
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Encode`] if serialization fails.
    fn to_json_string(&self) -> WireResult<String> {
        serde_json::to_string(self).map_err(|source| WireError::Encode {
            record: Self::KIND,
            source,
        })
    }

    /// Apply an RFC 7396 merge patch to the wire form and decode the result.
    ///
    /// Keys absent from `patch` keep their value. A `null` removes the key, which
    /// clears a nullable field, resets a defaulted field to its default, and fails
    /// decoding for a required field. Nested objects merge recursively; lists
    /// are replaced whole.
    ///
    /// # Errors
    ///
    /// Returns the encode or decode error of the round trip.
    fn merge_patch(&self, patch: &WireMap) -> WireResult<Self> {
        let mut target = self.to_wire()?;
        wire::merge_patch(&mut target, patch);
        Self::from_wire(target)
    }

    /// Hash of the canonical wire form.
    ///
    /// Equal records always produce equal hashes, including records with
    /// floating point fields.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Encode`] if serialization fails.
    fn content_hash(&self) -> WireResult<u64> {
        let value = serde_json::to_value(self).map_err(|source| WireError::Encode {
            record: Self::KIND,
            source,
        })?;
        Ok(wire::hash_value(&value))
    }
}

/// Implement [`Record`] for a list of types with their kind names
///
/// ```rust,ignore
/// impl_record! {
///     AvailabilitySlot => "availability_slot",
///     TimeSlot => "time_slot",
/// }
/// ```
#[macro_export]
macro_rules! impl_record {
    ($($ty:ty => $kind:literal),+ $(,)?) => {
        $(
            impl $crate::record::Record for $ty {
                const KIND: &'static str = $kind;
            }
        )+
    };
}
