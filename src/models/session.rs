// ABOUTME: Coaching session records - bookings, their lifecycle and shared resources
// ABOUTME: CoachSession, SharedResource, BookingRequest and the session tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UpCoach

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use upcoach_core::wire::finite;
use upcoach_core::wire_tag;

use super::coach_profile::CoachProfile;
use super::defaults;
use super::payment::PaymentStatus;

wire_tag! {
    /// Medium a session is held over
    pub enum SessionType {
        /// Video call
        Video => "video",
        /// Voice-only call
        Audio => "audio",
        /// Text chat
        Chat => "chat",
        /// Face to face
        InPerson => "in_person",
    }
}

wire_tag! {
    /// Booking lifecycle state
    #[derive(Default)]
    pub enum SessionStatus {
        /// Requested, awaiting coach confirmation
        #[default]
        Pending => "pending",
        /// Accepted by the coach
        Confirmed => "confirmed",
        /// Currently running
        InProgress => "in_progress",
        /// Finished normally
        Completed => "completed",
        /// Called off by either side
        Cancelled => "cancelled",
        /// Client did not attend
        NoShow => "no_show",
        /// Moved to another time
        Rescheduled => "rescheduled",
    }
}

/// A file or link shared during a session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedResource {
    /// Resource identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Resource kind as reported by the uploader (document, video, link, ...)
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Location of the resource
    pub url: String,
    /// Optional note
    pub description: Option<String>,
    /// When it was shared
    pub shared_at: DateTime<Utc>,
}

impl SharedResource {
    /// Create a resource without a description
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        resource_type: impl Into<String>,
        url: impl Into<String>,
        shared_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            resource_type: resource_type.into(),
            url: url.into(),
            description: None,
            shared_at,
        }
    }
}

/// A booked coaching session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachSession {
    /// Session identifier
    pub id: i64,
    /// Coach profile delivering the session
    pub coach_id: i64,
    /// Client attending
    pub client_id: String,
    /// Session title
    pub title: String,
    /// Agenda
    pub description: Option<String>,
    /// Medium
    pub session_type: SessionType,
    /// Lifecycle state
    #[serde(default)]
    pub status: SessionStatus,
    /// Scheduled start
    pub scheduled_at: DateTime<Utc>,
    /// Planned length
    pub duration_minutes: i32,
    /// IANA timezone the booking was made in
    #[serde(default = "defaults::timezone")]
    pub timezone: String,
    /// Video/audio join link
    pub meeting_url: Option<String>,
    /// Provider meeting identifier
    pub meeting_id: Option<String>,
    /// Provider meeting password
    pub meeting_password: Option<String>,
    /// Venue for in-person sessions
    pub location: Option<String>,
    /// Rate charged, in major currency units
    #[serde(serialize_with = "finite::number")]
    pub hourly_rate: f64,
    /// Total price, in major currency units
    #[serde(serialize_with = "finite::number")]
    pub total_amount: f64,
    /// ISO currency code
    #[serde(default = "defaults::currency")]
    pub currency: String,
    /// Payment state
    #[serde(default)]
    pub payment_status: PaymentStatus,
    /// Payment record funding the session
    pub payment_id: Option<String>,
    /// Coach's private notes
    pub coach_notes: Option<String>,
    /// Client's notes for the coach
    pub client_notes: Option<String>,
    /// Resources shared in the session
    #[serde(default)]
    pub shared_resources: Vec<SharedResource>,
    /// Client's rating of the session
    pub client_rating: Option<i32>,
    /// Client's written feedback
    pub client_feedback: Option<String>,
    /// Coach's rating of the client
    pub coach_rating: Option<i32>,
    /// Coach's written feedback
    pub coach_feedback: Option<String>,
    /// Actual start
    pub started_at: Option<DateTime<Utc>>,
    /// Actual end
    pub ended_at: Option<DateTime<Utc>>,
    /// Actual length
    pub actual_duration_minutes: Option<i32>,
    /// When the session was cancelled
    pub cancelled_at: Option<DateTime<Utc>>,
    /// Who cancelled (user id)
    pub cancelled_by: Option<String>,
    /// Why it was cancelled
    pub cancellation_reason: Option<String>,
    /// Coach profile snapshot, when fetched with it
    pub coach: Option<CoachProfile>,
    /// Client display name snapshot
    pub client_name: Option<String>,
    /// Client avatar snapshot
    pub client_avatar: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl CoachSession {
    /// Create a pending, unpaid session from a confirmed booking slot
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        id: i64,
        coach_id: i64,
        client_id: impl Into<String>,
        title: impl Into<String>,
        session_type: SessionType,
        scheduled_at: DateTime<Utc>,
        duration_minutes: i32,
        hourly_rate: f64,
        total_amount: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            coach_id,
            client_id: client_id.into(),
            title: title.into(),
            description: None,
            session_type,
            status: SessionStatus::Pending,
            scheduled_at,
            duration_minutes,
            timezone: defaults::timezone(),
            meeting_url: None,
            meeting_id: None,
            meeting_password: None,
            location: None,
            hourly_rate,
            total_amount,
            currency: defaults::currency(),
            payment_status: PaymentStatus::Pending,
            payment_id: None,
            coach_notes: None,
            client_notes: None,
            shared_resources: Vec::new(),
            client_rating: None,
            client_feedback: None,
            coach_rating: None,
            coach_feedback: None,
            started_at: None,
            ended_at: None,
            actual_duration_minutes: None,
            cancelled_at: None,
            cancelled_by: None,
            cancellation_reason: None,
            coach: None,
            client_name: None,
            client_avatar: None,
            created_at,
            updated_at: created_at,
        }
    }
}

/// Request body for booking a session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// Coach profile to book
    pub coach_id: i64,
    /// Medium
    pub session_type: SessionType,
    /// Requested start
    pub scheduled_at: DateTime<Utc>,
    /// Requested length
    pub duration_minutes: i32,
    /// Session title
    pub title: String,
    /// Client's IANA timezone
    #[serde(default = "defaults::timezone")]
    pub timezone: String,
    /// Agenda
    pub description: Option<String>,
    /// Notes for the coach
    pub client_notes: Option<String>,
    /// Purchased package to draw the session from
    pub package_id: Option<i64>,
}

impl BookingRequest {
    /// Create a booking request in the default timezone
    #[must_use]
    pub fn new(
        coach_id: i64,
        session_type: SessionType,
        scheduled_at: DateTime<Utc>,
        duration_minutes: i32,
        title: impl Into<String>,
    ) -> Self {
        Self {
            coach_id,
            session_type,
            scheduled_at,
            duration_minutes,
            title: title.into(),
            timezone: defaults::timezone(),
            description: None,
            client_notes: None,
            package_id: None,
        }
    }
}
