// ABOUTME: Record subcommands for upcoach-cli
// ABOUTME: kinds, decode, patch and hash over the record kind registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UpCoach

use tracing::info;
use upcoach_models::errors::AppResult;
use upcoach_models::records::{self, RecordKind};

use super::Output;

type Result<T> = AppResult<T>;

/// Print every registered kind name
pub fn kinds(output: Output) -> Result<()> {
    output.print(&RecordKind::WIRE_NAMES)
}

/// Decode a payload and print the normalized record
pub fn decode(output: Output, kind: &str, file: &str) -> Result<()> {
    let kind = records::parse_kind(kind)?;
    let normalized = kind.normalize(records::load_json(file)?)?;
    info!(%kind, file, "Decoded record");
    output.print(&normalized)
}

/// Apply a merge patch to a record and print the result
pub fn patch(output: Output, kind: &str, record_file: &str, patch_file: &str) -> Result<()> {
    let kind = records::parse_kind(kind)?;
    let record = records::load_json(record_file)?;
    let patch = records::load_json(patch_file)?;
    let patched = kind.merge_patch(record, &patch)?;
    info!(%kind, record_file, patch_file, "Patched record");
    output.print(&patched)
}

/// Print the content hash of a record as 16 hex digits
pub fn hash(kind: &str, file: &str) -> Result<()> {
    let kind = records::parse_kind(kind)?;
    let hash = kind.content_hash(records::load_json(file)?)?;
    println!("{hash:016x}");
    Ok(())
}
