// ABOUTME: Tests for the JSON and TOON output formatters
// ABOUTME: Content types, compact and pretty JSON, and format name parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UpCoach

// Test files: allow missing_docs (rustc lint) and unwrap (valid in tests)
#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use serde_json::Value;
use upcoach_models::formatters::{format_output, format_output_pretty, OutputFormat};
use upcoach_models::models::Habit;
use upcoach_models::record::Record;

#[test]
fn test_output_format_names() {
    assert_eq!(OutputFormat::default(), OutputFormat::Json);
    assert_eq!("toon".parse::<OutputFormat>().unwrap(), OutputFormat::Toon);
    assert!("yaml".parse::<OutputFormat>().is_err());
    assert_eq!(OutputFormat::Json.content_type(), "application/json");
    assert_eq!(OutputFormat::Toon.content_type(), "application/vnd.toon");
}

#[test]
fn test_json_output_decodes_back_to_record() {
    let habit = common::full_habit();

    let output = format_output(&habit, OutputFormat::Json).unwrap();

    assert_eq!(output.format, OutputFormat::Json);
    assert_eq!(output.content_type, "application/json");
    assert!(!output.data.contains('\n'));
    assert_eq!(Habit::from_json_str(&output.data).unwrap(), habit);
}

#[test]
fn test_pretty_json_is_multiline_and_equivalent() {
    let state = common::full_habit_state();

    let compact = format_output(&state, OutputFormat::Json).unwrap();
    let pretty = format_output_pretty(&state, OutputFormat::Json).unwrap();

    assert!(pretty.data.contains('\n'));
    let a: Value = serde_json::from_str(&compact.data).unwrap();
    let b: Value = serde_json::from_str(&pretty.data).unwrap();
    assert_eq!(a, b);
}

#[cfg(feature = "toon")]
#[test]
fn test_toon_output_is_tagged_with_toon_format() {
    common::init_test_logging();
    let photos = common::full_progress_photos_state();

    let output = format_output(&photos, OutputFormat::Toon).unwrap();

    assert_eq!(output.format, OutputFormat::Toon);
    assert_eq!(output.content_type, "application/vnd.toon");
    assert!(output.data.contains("photo-1"));
}

#[cfg(not(feature = "toon"))]
#[test]
fn test_toon_falls_back_to_labelled_json_without_feature() {
    common::init_test_logging();
    let habit = common::full_habit();

    let output = format_output(&habit, OutputFormat::Toon).unwrap();

    assert_eq!(output.format, OutputFormat::Json);
    assert_eq!(output.content_type, "application/json");
    assert!(!output.data.contains('\n'));
    assert_eq!(Habit::from_json_str(&output.data).unwrap(), habit);
}

#[cfg(not(feature = "toon"))]
#[test]
fn test_toon_fallback_honours_pretty() {
    let state = common::full_habit_state();

    let output = format_output_pretty(&state, OutputFormat::Toon).unwrap();

    assert_eq!(output.format, OutputFormat::Json);
    assert!(output.data.contains('\n'));
}
