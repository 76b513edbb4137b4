// ABOUTME: Coach profile aggregate - public coach listing with credentials and pricing
// ABOUTME: CoachProfile embeds certifications, availability and package/review snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UpCoach

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use upcoach_core::wire::finite;

use super::availability::AvailabilitySchedule;
use super::defaults;
use super::package::CoachPackage;
use super::review::CoachReview;

/// A professional certification held by a coach
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    /// Certification name
    pub name: String,
    /// Issuing body
    pub issuer: String,
    /// Year awarded
    pub year: Option<i32>,
    /// Issuer's credential identifier
    pub credential_id: Option<String>,
    /// Public verification link
    pub verification_url: Option<String>,
    /// Expiry, for certifications that lapse
    pub expires_at: Option<DateTime<Utc>>,
}

impl Certification {
    /// Create a certification with only name and issuer
    #[must_use]
    pub fn new(name: impl Into<String>, issuer: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            issuer: issuer.into(),
            year: None,
            credential_id: None,
            verification_url: None,
            expires_at: None,
        }
    }
}

/// A coach's public profile
///
/// `packages` and `reviews` are denormalized snapshots filled by richer fetches;
/// the profile does not own them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachProfile {
    /// Profile identifier
    pub id: i64,
    /// Account that owns the profile
    pub user_id: String,
    /// Public name
    pub display_name: String,
    /// Professional title ("Certified Life Coach")
    pub title: Option<String>,
    /// Free-form biography
    pub bio: Option<String>,
    /// Avatar image
    pub profile_image_url: Option<String>,
    /// Banner image
    pub cover_image_url: Option<String>,
    /// Introduction video
    pub intro_video_url: Option<String>,
    /// Personal website
    pub website_url: Option<String>,
    /// `LinkedIn` profile
    pub linkedin_url: Option<String>,
    /// Coaching specialities
    #[serde(default)]
    pub specializations: Vec<String>,
    /// Professional certifications
    #[serde(default)]
    pub certifications: Vec<Certification>,
    /// Spoken languages
    #[serde(default)]
    pub languages: Vec<String>,
    /// Search tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Years of coaching experience
    #[serde(default)]
    pub experience_years: i32,
    /// IANA timezone
    #[serde(default = "defaults::timezone")]
    pub timezone: String,
    /// Hourly rate in major currency units, when published
    #[serde(serialize_with = "finite::optional")]
    pub hourly_rate: Option<f64>,
    /// ISO currency code
    #[serde(default = "defaults::currency")]
    pub currency: String,
    /// Shortest bookable session in hours
    #[serde(default = "defaults::min_booking_hours", serialize_with = "finite::number")]
    pub min_booking_hours: f64,
    /// Longest bookable session in hours
    #[serde(default = "defaults::max_booking_hours", serialize_with = "finite::number")]
    pub max_booking_hours: f64,
    /// Minimum notice in hours before a session
    #[serde(default = "defaults::booking_buffer_hours")]
    pub booking_buffer_hours: i32,
    /// Weekly availability, when fetched with it
    pub availability_schedule: Option<AvailabilitySchedule>,
    /// Mean review rating
    #[serde(default, serialize_with = "finite::number")]
    pub average_rating: f64,
    /// Number of ratings
    #[serde(default)]
    pub rating_count: i32,
    /// Completed sessions
    #[serde(default)]
    pub total_sessions: i32,
    /// Distinct clients coached
    #[serde(default)]
    pub total_clients: i32,
    /// Typical reply latency in hours
    #[serde(serialize_with = "finite::optional")]
    pub response_time_hours: Option<f64>,
    /// Whether the profile is listed
    #[serde(default = "defaults::yes")]
    pub is_active: bool,
    /// Whether credentials were checked by staff
    #[serde(default)]
    pub is_verified: bool,
    /// Whether the profile is promoted
    #[serde(default)]
    pub is_featured: bool,
    /// When verification happened
    pub verified_at: Option<DateTime<Utc>>,
    /// Whether the viewing user favourited this coach
    #[serde(default)]
    pub is_favorite: bool,
    /// Account full name snapshot
    pub full_name: Option<String>,
    /// Account email snapshot
    pub email: Option<String>,
    /// Offered packages snapshot
    #[serde(default)]
    pub packages: Vec<CoachPackage>,
    /// Recent reviews snapshot
    #[serde(default)]
    pub reviews: Vec<CoachReview>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl CoachProfile {
    /// Create an active, unverified profile with every optional field absent
    #[must_use]
    pub fn new(
        id: i64,
        user_id: impl Into<String>,
        display_name: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id: user_id.into(),
            display_name: display_name.into(),
            title: None,
            bio: None,
            profile_image_url: None,
            cover_image_url: None,
            intro_video_url: None,
            website_url: None,
            linkedin_url: None,
            specializations: Vec::new(),
            certifications: Vec::new(),
            languages: Vec::new(),
            tags: Vec::new(),
            experience_years: 0,
            timezone: defaults::timezone(),
            hourly_rate: None,
            currency: defaults::currency(),
            min_booking_hours: defaults::DEFAULT_MIN_BOOKING_HOURS,
            max_booking_hours: defaults::DEFAULT_MAX_BOOKING_HOURS,
            booking_buffer_hours: defaults::DEFAULT_BOOKING_BUFFER_HOURS,
            availability_schedule: None,
            average_rating: 0.0,
            rating_count: 0,
            total_sessions: 0,
            total_clients: 0,
            response_time_hours: None,
            is_active: true,
            is_verified: false,
            is_featured: false,
            verified_at: None,
            is_favorite: false,
            full_name: None,
            email: None,
            packages: Vec::new(),
            reviews: Vec::new(),
            created_at,
            updated_at,
        }
    }

    /// Active packages from the snapshot
    #[must_use]
    pub fn active_packages(&self) -> impl Iterator<Item = &CoachPackage> {
        self.packages.iter().filter(|package| package.is_active)
    }
}
