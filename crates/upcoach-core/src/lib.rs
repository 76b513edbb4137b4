// ABOUTME: Core contracts for UpCoach domain records
// ABOUTME: Record trait, wire helpers, closed tag macro and error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UpCoach

#![deny(unsafe_code)]

//! # `UpCoach` Core
//!
//! Shared building blocks for the `UpCoach` model crates:
//!
//! - [`record::Record`]: the immutable-record contract (copy-with updates, wire
//!   map round-tripping, merge patch, content hashing)
//! - [`wire`]: pure JSON helpers behind the contract
//! - [`wire_tag!`]: closed-vocabulary string tags
//! - [`errors`]: `WireError` for codec failures and `AppError` for callers

/// Error types and result aliases
pub mod errors;

/// The record contract
pub mod record;

/// Closed tag macro
mod tag;

/// JSON merge patch and hashing helpers
pub mod wire;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
