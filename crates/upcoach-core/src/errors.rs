// ABOUTME: Error types for record wire conversion and the application layer
// ABOUTME: WireError classifies decode failures; AppError carries an ErrorCode for callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UpCoach

//! Error handling for the UpCoach model crates
//!
//! Two layers:
//! - [`WireError`] is returned by every record encode/decode operation. Decode
//!   failures carry a [`DecodeErrorKind`] so callers can tell a missing field from
//!   an unknown tag without parsing messages themselves.
//! - [`AppError`] is the application-level error used by the registry, formatters,
//!   configuration and CLI. It wraps wire failures with a stable [`ErrorCode`].

use std::fmt;
use std::io;

use thiserror::Error;

/// Result alias for wire conversions
pub type WireResult<T> = Result<T, WireError>;

/// Result alias for application-level operations
pub type AppResult<T> = Result<T, AppError>;

/// Classification of a decode failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeErrorKind {
    /// A required field was not present in the wire map
    MissingField,
    /// A closed tag field held a string outside its vocabulary
    UnknownTag,
    /// A field held a JSON value of the wrong kind (string for number, ...)
    InvalidType,
    /// A field held the right JSON kind but an unparseable value (bad timestamp, ...)
    InvalidValue,
    /// The input text was not valid JSON
    Syntax,
}

impl DecodeErrorKind {
    /// Classify a failure to turn a JSON value into a record.
    ///
    /// Serde's data-model errors use fixed message prefixes (`missing field`,
    /// `unknown variant`, `invalid type`), so the classification is stable
    /// across formats. `serde_json` reports some value-level failures (a
    /// non-numeric map key, for one) under its syntax category, so that flag is
    /// not consulted here: [`Self::Syntax`] is only produced by
    /// [`WireError::syntax`] for text that failed to parse.
    #[must_use]
    pub fn classify(error: &serde_json::Error) -> Self {
        let message = error.to_string();
        if message.starts_with("missing field") {
            Self::MissingField
        } else if message.starts_with("unknown variant") {
            Self::UnknownTag
        } else if message.starts_with("invalid type") {
            Self::InvalidType
        } else {
            Self::InvalidValue
        }
    }

    /// Short identifier used in logs and CLI output
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::UnknownTag => "unknown_tag",
            Self::InvalidType => "invalid_type",
            Self::InvalidValue => "invalid_value",
            Self::Syntax => "syntax",
        }
    }
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure converting a record to or from its wire map
#[derive(Debug, Error)]
pub enum WireError {
    /// Serializing the record into a JSON value failed
    #[error("failed to encode {record}: {source}")]
    Encode {
        /// Kind name of the record being encoded
        record: &'static str,
        /// Underlying serializer error
        #[source]
        source: serde_json::Error,
    },

    /// The wire value was not a JSON object
    #[error("failed to decode {record}: expected a JSON object, found {found}")]
    NotAnObject {
        /// Kind name of the record being decoded
        record: &'static str,
        /// JSON type that was found instead
        found: &'static str,
    },

    /// The wire map could not be turned into the record
    #[error("failed to decode {record} ({kind}): {source}")]
    Decode {
        /// Kind name of the record being decoded
        record: &'static str,
        /// Classification of the failure
        kind: DecodeErrorKind,
        /// Underlying deserializer error
        #[source]
        source: serde_json::Error,
    },
}

impl WireError {
    /// Build a decode error, classifying the serde failure
    #[must_use]
    pub fn decode(record: &'static str, source: serde_json::Error) -> Self {
        Self::Decode {
            record,
            kind: DecodeErrorKind::classify(&source),
            source,
        }
    }

    /// Build a decode error for JSON text that could not be parsed
    #[must_use]
    pub const fn syntax(record: &'static str, source: serde_json::Error) -> Self {
        Self::Decode {
            record,
            kind: DecodeErrorKind::Syntax,
            source,
        }
    }

    /// Decode classification, or `None` for encode failures
    #[must_use]
    pub const fn decode_kind(&self) -> Option<DecodeErrorKind> {
        match self {
            Self::Decode { kind, .. } => Some(*kind),
            Self::NotAnObject { .. } => Some(DecodeErrorKind::InvalidType),
            Self::Encode { .. } => None,
        }
    }

    /// Whether this error came from the decode direction
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        self.decode_kind().is_some()
    }

    /// Kind name of the record involved
    #[must_use]
    pub const fn record(&self) -> &'static str {
        match self {
            Self::Encode { record, .. }
            | Self::NotAnObject { record, .. }
            | Self::Decode { record, .. } => record,
        }
    }
}

/// A tag string outside the closed vocabulary of a tag type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {tag} `{value}`")]
pub struct UnknownTag {
    /// Name of the tag type
    pub tag: &'static str,
    /// The rejected input
    pub value: String,
}

impl UnknownTag {
    /// Create a new unknown tag error
    #[must_use]
    pub fn new(tag: &'static str, value: &str) -> Self {
        Self {
            tag,
            value: value.to_owned(),
        }
    }
}

/// Stable error codes for application-level failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Caller supplied input that cannot be used
    InvalidInput,
    /// A payload failed to decode into a record
    DecodeFailed,
    /// A named resource (record kind, file) does not exist
    ResourceNotFound,
    /// Environment configuration is invalid
    ConfigError,
    /// Reading or writing a file failed
    IoError,
    /// Unexpected internal failure
    InternalError,
}

impl ErrorCode {
    /// Machine-readable identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::DecodeFailed => "decode_failed",
            Self::ResourceNotFound => "resource_not_found",
            Self::ConfigError => "config_error",
            Self::IoError => "io_error",
            Self::InternalError => "internal_error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application-level error with a stable code
#[derive(Debug, Error)]
#[error("{code}: {message}")]
pub struct AppError {
    /// Error classification
    pub code: ErrorCode,
    /// Human-readable description
    pub message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach an underlying cause
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid caller input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Missing resource
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceNotFound, message)
    }

    /// Invalid configuration
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// File system failure
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::IoError, message)
    }

    /// Unexpected internal failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<WireError> for AppError {
    fn from(error: WireError) -> Self {
        let code = if error.is_decode() {
            ErrorCode::DecodeFailed
        } else {
            ErrorCode::InternalError
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::io(error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::invalid_input(format!("invalid JSON: {error}")).with_source(error)
    }
}

impl From<UnknownTag> for AppError {
    fn from(error: UnknownTag) -> Self {
        Self::invalid_input(error.to_string()).with_source(error)
    }
}
