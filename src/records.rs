// ABOUTME: Registry of every record kind with untyped JSON operations dispatched by name
// ABOUTME: Normalize, merge-patch and hash payloads whose type is only known at runtime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UpCoach

//! Record kind registry
//!
//! Payloads arriving from files, fixtures or the CLI are plain JSON. The registry
//! maps a kind name (`coach_profile`, `habit_state`, ...) to its record type and
//! runs the typed contract on the payload, so defaults are filled and invalid
//! payloads are rejected exactly as the typed API would.
//!
//! ```rust,no_run
//! use upcoach_models::records::RecordKind;
//!
//! let kind: RecordKind = "coach_package".parse()?;
//! let payload = serde_json::json!({
//!     "id": 1, "coachId": 2, "name": "Starter",
//!     "sessionCount": 5, "validityDays": 30, "price": 99.0
//! });
//! let normalized = kind.normalize(payload)?;
//! assert_eq!(normalized["currency"], "USD");
//! # Ok::<(), upcoach_models::errors::AppError>(())
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde_json::Value;
use tracing::debug;
use upcoach_core::errors::{AppError, AppResult, WireResult};
use upcoach_core::record::{Record, WireMap};
use upcoach_core::wire_tag;

use crate::models;

macro_rules! record_registry {
    ($($name:ident => $kind:literal),+ $(,)?) => {
        wire_tag! {
            /// Every record type, addressed by its snake_case kind name
            pub enum RecordKind {
                $(
                    #[doc = concat!("[`models::", stringify!($name), "`]")]
                    $name => $kind,
                )+
            }
        }

        impl RecordKind {
            /// Every registered kind, in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$name),+];

            /// Kind name declared by the record type itself
            #[must_use]
            pub const fn record_kind(self) -> &'static str {
                match self {
                    $(Self::$name => <models::$name as Record>::KIND,)+
                }
            }

            fn normalize_value(self, value: Value) -> WireResult<Value> {
                match self {
                    $(Self::$name => normalize_as::<models::$name>(value),)+
                }
            }

            fn patch_value(self, value: Value, patch: &WireMap) -> WireResult<Value> {
                match self {
                    $(Self::$name => patch_as::<models::$name>(value, patch),)+
                }
            }

            fn hash_value(self, value: Value) -> WireResult<u64> {
                match self {
                    $(Self::$name => hash_as::<models::$name>(value),)+
                }
            }
        }
    };
}

record_registry! {
    AvailabilitySlot => "availability_slot",
    TimeSlot => "time_slot",
    AvailabilitySchedule => "availability_schedule",
    Certification => "certification",
    CoachProfile => "coach_profile",
    SharedResource => "shared_resource",
    CoachSession => "coach_session",
    BookingRequest => "booking_request",
    CoachPackage => "coach_package",
    ClientCoachPackage => "client_coach_package",
    DetailedRatings => "detailed_ratings",
    CoachReview => "coach_review",
    ReviewStats => "review_stats",
    PaymentRecord => "payment_record",
    RefundRecord => "refund_record",
    InvoiceLineItem => "invoice_line_item",
    Invoice => "invoice",
    CreatePaymentIntentRequest => "create_payment_intent_request",
    ConfirmPaymentRequest => "confirm_payment_request",
    PaymentIntentResponse => "payment_intent_response",
    SetupIntentResponse => "setup_intent_response",
    TierPricing => "tier_pricing",
    SubscriptionTier => "subscription_tier",
    UserSubscriptionStatus => "user_subscription_status",
    TiersResponse => "tiers_response",
    Habit => "habit",
    HabitCompletion => "habit_completion",
    HabitStreak => "habit_streak",
    HabitAchievement => "habit_achievement",
    HabitState => "habit_state",
    User => "user",
    ProgressPhoto => "progress_photo",
    ProgressPhotosState => "progress_photos_state",
}

impl RecordKind {
    /// Decode a payload as this kind and re-encode it with every default filled
    ///
    /// # Errors
    ///
    /// Returns an `ErrorCode::DecodeFailed` error if the payload is not a valid
    /// record of this kind.
    pub fn normalize(self, value: Value) -> AppResult<Value> {
        debug!(kind = %self, "Normalizing record payload");
        Ok(self.normalize_value(value)?)
    }

    /// Apply a JSON merge patch to a record payload of this kind
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` if `patch` is not an object and
    /// `ErrorCode::DecodeFailed` if the record or the patched result is invalid.
    pub fn merge_patch(self, record: Value, patch: &Value) -> AppResult<Value> {
        let Value::Object(patch) = patch else {
            return Err(AppError::invalid_input(format!(
                "merge patch for {self} must be a JSON object"
            )));
        };
        debug!(kind = %self, keys = patch.len(), "Applying merge patch");
        Ok(self.patch_value(record, patch)?)
    }

    /// Content hash of a record payload of this kind
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::DecodeFailed` if the payload is not a valid record.
    pub fn content_hash(self, value: Value) -> AppResult<u64> {
        Ok(self.hash_value(value)?)
    }
}

fn normalize_as<T: Record>(value: Value) -> WireResult<Value> {
    let record = T::from_value(value)?;
    Ok(Value::Object(record.to_wire()?))
}

fn patch_as<T: Record>(value: Value, patch: &WireMap) -> WireResult<Value> {
    let patched = T::from_value(value)?.merge_patch(patch)?;
    Ok(Value::Object(patched.to_wire()?))
}

fn hash_as<T: Record>(value: Value) -> WireResult<u64> {
    T::from_value(value)?.content_hash()
}

/// Parse a kind name, reporting unknown names as a not-found error
///
/// # Errors
///
/// Returns `ErrorCode::ResourceNotFound` listing the valid kinds.
pub fn parse_kind(name: &str) -> AppResult<RecordKind> {
    name.parse().map_err(|_| {
        AppError::not_found(format!(
            "unknown record kind `{name}` (expected one of: {})",
            RecordKind::WIRE_NAMES.join(", ")
        ))
    })
}

/// Read a JSON document from a file, or from stdin when `source` is `-`
///
/// # Errors
///
/// Returns `ErrorCode::IoError` if reading fails and `ErrorCode::InvalidInput`
/// if the text is not JSON.
pub fn load_json(source: &str) -> AppResult<Value> {
    let text = if source == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        let path = Path::new(source);
        if !path.exists() {
            return Err(AppError::not_found(format!("file not found: {source}")));
        }
        fs::read_to_string(path)
            .map_err(|e| AppError::io(format!("failed to read {source}: {e}")).with_source(e))?
    };
    debug!(source, bytes = text.len(), "Loaded JSON input");
    Ok(serde_json::from_str(&text)?)
}
