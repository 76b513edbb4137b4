// ABOUTME: Shared field defaults applied on construction and on wire decode
// ABOUTME: Referenced from serde `default = "..."` attributes so both paths agree
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UpCoach

/// Default currency for prices and payments
pub const DEFAULT_CURRENCY: &str = "USD";

/// Default IANA timezone for schedules, profiles and bookings
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Hours a coach requires between booking and session start
pub const DEFAULT_BOOKING_BUFFER_HOURS: i32 = 24;

/// How far ahead clients may book by default
pub const DEFAULT_MAX_ADVANCE_BOOKING_DAYS: i32 = 30;

/// Shortest bookable session in hours
pub const DEFAULT_MIN_BOOKING_HOURS: f64 = 1.0;

/// Longest bookable session in hours
pub const DEFAULT_MAX_BOOKING_HOURS: f64 = 4.0;

pub(crate) fn currency() -> String {
    DEFAULT_CURRENCY.to_owned()
}

pub(crate) fn timezone() -> String {
    DEFAULT_TIMEZONE.to_owned()
}

pub(crate) const fn yes() -> bool {
    true
}

pub(crate) const fn one() -> i32 {
    1
}

pub(crate) const fn booking_buffer_hours() -> i32 {
    DEFAULT_BOOKING_BUFFER_HOURS
}

pub(crate) const fn max_advance_booking_days() -> i32 {
    DEFAULT_MAX_ADVANCE_BOOKING_DAYS
}

pub(crate) const fn min_booking_hours() -> f64 {
    DEFAULT_MIN_BOOKING_HOURS
}

pub(crate) const fn max_booking_hours() -> f64 {
    DEFAULT_MAX_BOOKING_HOURS
}
