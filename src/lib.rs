// ABOUTME: Main library entry point for the UpCoach domain model crate
// ABOUTME: Immutable coaching, payment, subscription and habit records with JSON wire forms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UpCoach

// Crate-level attributes:
// - recursion_limit: raised for the registry and tag macros, which expand one
//   match arm per record kind
// - deny(unsafe_code): zero-tolerance unsafe policy
#![recursion_limit = "256"]
#![deny(unsafe_code)]

//! # `UpCoach` Models
//!
//! Value types for the `UpCoach` coaching app: coach profiles and availability,
//! sessions and packages, reviews, payments and invoices, subscription tiers,
//! habits, users and progress photos.
//!
//! Every record is immutable in use. Changes go through
//! [`Record::with_changes`](record::Record::with_changes), which returns a new
//! value, and every record round-trips through a camelCase JSON wire map.
//!
//! ## Architecture
//!
//! - **Models**: the record types, grouped by feature area
//! - **Records**: a registry addressing each record type by kind name
//! - **Formatters**: JSON and TOON output for printed records
//! - **Config** and **Logging**: environment settings for the `upcoach-cli` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use upcoach_models::models::AvailabilitySlot;
//! use upcoach_models::record::Record;
//!
//! let slot = AvailabilitySlot::new("09:00", "12:00");
//! let later = slot.with_changes(|s| s.start = "10:00".into());
//!
//! assert_eq!(slot.start, "09:00");
//! assert_eq!(AvailabilitySlot::from_wire(later.to_wire()?)?, later);
//! # Ok::<(), upcoach_models::errors::WireError>(())
//! ```

pub use upcoach_core::{errors, record, wire};

/// Domain record types
pub mod models;

/// Record kind registry for untyped payloads
pub mod records;

/// Configuration management
pub mod config;

/// Tracing subscriber setup
pub mod logging;

/// Output format abstraction (JSON, TOON)
pub mod formatters;
