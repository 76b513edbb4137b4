// ABOUTME: Output format abstraction for printing records in multiple formats
// ABOUTME: Supports JSON (default) and TOON (compact, behind the `toon` feature)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UpCoach

//! Output Format Abstraction Layer
//!
//! Records are always stored and exchanged as JSON wire maps. When they are
//! shown to a person or handed to a language model the CLI can print them as
//! TOON (Token-Oriented Object Notation) instead, which drops most of the
//! punctuation of large lists such as a habit screen snapshot.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use upcoach_models::formatters::{format_output, OutputFormat};
//!
//! let kinds = vec!["habit", "habit_state"];
//! if let Ok(output) = format_output(&kinds, OutputFormat::Toon) {
//!     println!("Formatted: {}", output.data);
//! }
//! ```

use serde::Serialize;
#[cfg(feature = "toon")]
use toon_format::EncodeOptions;
#[cfg(not(feature = "toon"))]
use tracing::debug;
use upcoach_core::errors::{AppError, AppResult};
use upcoach_core::wire_tag;

wire_tag! {
    /// Output serialization format selector
    #[derive(Default)]
    pub enum OutputFormat {
        /// JSON format (default)
        #[default]
        Json => "json",
        /// TOON format, Token-Oriented Object Notation
        Toon => "toon",
    }
}

impl OutputFormat {
    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            // TOON has no registered MIME type, use the vendor prefix
            Self::Toon => "application/vnd.toon",
        }
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The serialized data as a string
    pub data: String,
    /// The format used for serialization
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

impl FormattedOutput {
    fn new(data: String, format: OutputFormat) -> Self {
        Self {
            data,
            format,
            content_type: format.content_type(),
        }
    }
}

/// Format serializable data to the specified output format
///
/// # Errors
///
/// Returns an `ErrorCode::InternalError` error if JSON serialization fails or,
/// for TOON, if the encoder rejects the value.
///
/// # Example
/// ```rust,no_run
/// use upcoach_models::formatters::{format_output, OutputFormat};
///
/// let kinds = vec!["user", "progress_photo"];
/// if let Ok(output) = format_output(&kinds, OutputFormat::Json) {
///     assert_eq!(output.content_type, "application/json");
/// }
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> AppResult<FormattedOutput> {
    render(data, format, false)
}

/// Format serializable data to pretty-printed output
///
/// TOON output is already line-oriented, so only JSON changes shape.
///
/// # Errors
///
/// Same failure modes as [`format_output`].
pub fn format_output_pretty<T: Serialize>(
    data: &T,
    format: OutputFormat,
) -> AppResult<FormattedOutput> {
    render(data, format, true)
}

/// The returned output is labelled with the format actually produced, which is
/// JSON when TOON is requested from a build without the `toon` feature.
fn render<T: Serialize>(
    data: &T,
    format: OutputFormat,
    pretty: bool,
) -> AppResult<FormattedOutput> {
    if format == OutputFormat::Toon {
        if let Some(text) = encode_toon(data)? {
            return Ok(FormattedOutput::new(text, OutputFormat::Toon));
        }
    }
    let text = if pretty {
        serde_json::to_string_pretty(data)
    } else {
        serde_json::to_string(data)
    }
    .map_err(|e| format_error(OutputFormat::Json, &e))?;
    Ok(FormattedOutput::new(text, OutputFormat::Json))
}

fn format_error(format: OutputFormat, error: &dyn std::fmt::Display) -> AppError {
    AppError::internal(format!("Format error ({format}): {error}"))
}

#[cfg(feature = "toon")]
fn encode_toon<T: Serialize>(data: &T) -> AppResult<Option<String>> {
    let value = serde_json::to_value(data).map_err(|e| {
        format_error(OutputFormat::Toon, &format!("Failed to convert to JSON value: {e}"))
    })?;
    let options = EncodeOptions::default();
    toon_format::encode(&value, &options)
        .map(Some)
        .map_err(|e| format_error(OutputFormat::Toon, &e))
}

/// TOON feature disabled: the caller falls back to JSON
#[cfg(not(feature = "toon"))]
#[allow(clippy::unnecessary_wraps)]
fn encode_toon<T: Serialize>(_data: &T) -> AppResult<Option<String>> {
    debug!("TOON format requested but toon feature is disabled, falling back to JSON");
    Ok(None)
}
