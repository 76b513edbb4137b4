// ABOUTME: Coach availability records - weekly slots, bookable time slots and schedules
// ABOUTME: Leaf value types consumed by CoachProfile and booking flows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UpCoach

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

use super::defaults;

/// A recurring window inside one weekday, as local `HH:MM` times
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySlot {
    /// Window start (`HH:MM`)
    pub start: String,
    /// Window end (`HH:MM`)
    pub end: String,
}

impl AvailabilitySlot {
    /// Create a slot from start and end times
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// A concrete, dated slot offered for booking
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// Slot start
    pub start: DateTime<Utc>,
    /// Slot end
    pub end: DateTime<Utc>,
    /// Whether the slot can still be booked
    #[serde(default = "defaults::yes")]
    pub is_available: bool,
}

impl TimeSlot {
    /// Create an available slot
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            is_available: true,
        }
    }
}

/// A coach's weekly availability template
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySchedule {
    /// IANA timezone the slot times are expressed in
    #[serde(default = "defaults::timezone")]
    pub timezone: String,
    /// Monday windows
    #[serde(default)]
    pub monday: Vec<AvailabilitySlot>,
    /// Tuesday windows
    #[serde(default)]
    pub tuesday: Vec<AvailabilitySlot>,
    /// Wednesday windows
    #[serde(default)]
    pub wednesday: Vec<AvailabilitySlot>,
    /// Thursday windows
    #[serde(default)]
    pub thursday: Vec<AvailabilitySlot>,
    /// Friday windows
    #[serde(default)]
    pub friday: Vec<AvailabilitySlot>,
    /// Saturday windows
    #[serde(default)]
    pub saturday: Vec<AvailabilitySlot>,
    /// Sunday windows
    #[serde(default)]
    pub sunday: Vec<AvailabilitySlot>,
    /// Dates on which no bookings are accepted
    #[serde(default)]
    pub blocked_dates: Vec<NaiveDate>,
    /// Minimum notice, in hours, between booking and session start
    #[serde(default = "defaults::booking_buffer_hours")]
    pub booking_buffer_hours: i32,
    /// How many days ahead a session may be booked
    #[serde(default = "defaults::max_advance_booking_days")]
    pub max_advance_booking_days: i32,
}

impl Default for AvailabilitySchedule {
    fn default() -> Self {
        Self {
            timezone: defaults::timezone(),
            monday: Vec::new(),
            tuesday: Vec::new(),
            wednesday: Vec::new(),
            thursday: Vec::new(),
            friday: Vec::new(),
            saturday: Vec::new(),
            sunday: Vec::new(),
            blocked_dates: Vec::new(),
            booking_buffer_hours: defaults::DEFAULT_BOOKING_BUFFER_HOURS,
            max_advance_booking_days: defaults::DEFAULT_MAX_ADVANCE_BOOKING_DAYS,
        }
    }
}

impl AvailabilitySchedule {
    /// Empty schedule in the given timezone
    #[must_use]
    pub fn new(timezone: impl Into<String>) -> Self {
        Self {
            timezone: timezone.into(),
            ..Self::default()
        }
    }

    /// Windows configured for a weekday
    #[must_use]
    pub fn slots_for(&self, day: Weekday) -> &[AvailabilitySlot] {
        match day {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }
}
