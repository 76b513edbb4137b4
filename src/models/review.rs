// ABOUTME: Coach review records - individual client reviews and aggregated statistics
// ABOUTME: DetailedRatings sub-scores, CoachReview and ReviewStats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UpCoach

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use upcoach_core::wire::finite;

use super::defaults;

/// Optional per-aspect scores attached to a review (or averaged in stats)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedRatings {
    /// Clarity and responsiveness
    #[serde(serialize_with = "finite::optional")]
    pub communication: Option<f64>,
    /// Subject-matter knowledge
    #[serde(serialize_with = "finite::optional")]
    pub expertise: Option<f64>,
    /// Showing up on time
    #[serde(serialize_with = "finite::optional")]
    pub punctuality: Option<f64>,
    /// Value for money
    #[serde(serialize_with = "finite::optional")]
    pub value: Option<f64>,
    /// Overall helpfulness
    #[serde(serialize_with = "finite::optional")]
    pub helpfulness: Option<f64>,
}

/// A client's review of a coach
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachReview {
    /// Review identifier
    pub id: i64,
    /// Reviewed coach profile
    pub coach_id: i64,
    /// Reviewing client
    pub client_id: String,
    /// Session the review refers to
    pub session_id: Option<i64>,
    /// Overall star rating
    #[serde(serialize_with = "finite::number")]
    pub rating: f64,
    /// Headline
    pub title: Option<String>,
    /// Review body
    pub comment: String,
    /// Per-aspect scores
    pub detailed_ratings: Option<DetailedRatings>,
    /// Whether the reviewer attended a paid session
    #[serde(default)]
    pub is_verified: bool,
    /// Whether the review is shown publicly
    #[serde(default = "defaults::yes")]
    pub is_visible: bool,
    /// "Was this helpful" votes
    #[serde(default)]
    pub helpful_count: i32,
    /// Coach's public reply
    pub coach_response: Option<String>,
    /// When the coach replied
    pub coach_response_at: Option<DateTime<Utc>>,
    /// Reviewer display name snapshot
    pub client_name: Option<String>,
    /// Reviewer avatar snapshot
    pub client_avatar: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last edit timestamp
    pub updated_at: Option<DateTime<Utc>>,
}

impl CoachReview {
    /// Create a visible, unverified review
    #[must_use]
    pub fn new(
        id: i64,
        coach_id: i64,
        client_id: impl Into<String>,
        rating: f64,
        comment: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            coach_id,
            client_id: client_id.into(),
            session_id: None,
            rating,
            title: None,
            comment: comment.into(),
            detailed_ratings: None,
            is_verified: false,
            is_visible: true,
            helpful_count: 0,
            coach_response: None,
            coach_response_at: None,
            client_name: None,
            client_avatar: None,
            created_at,
            updated_at: None,
        }
    }
}

/// Aggregated review statistics for one coach
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    /// Coach profile the stats describe
    pub coach_id: i64,
    /// Mean overall rating
    #[serde(default, serialize_with = "finite::number")]
    pub average_rating: f64,
    /// Number of visible reviews
    #[serde(default)]
    pub total_reviews: i32,
    /// Review count per star value (1-5); wire keys are the decimal star values
    #[serde(default)]
    pub rating_distribution: BTreeMap<u8, i32>,
    /// Mean per-aspect scores
    #[serde(default)]
    pub detailed_averages: DetailedRatings,
}

impl ReviewStats {
    /// Empty statistics for a coach
    #[must_use]
    pub const fn new(coach_id: i64) -> Self {
        Self {
            coach_id,
            average_rating: 0.0,
            total_reviews: 0,
            rating_distribution: BTreeMap::new(),
            detailed_averages: DetailedRatings {
                communication: None,
                expertise: None,
                punctuality: None,
                value: None,
                helpfulness: None,
            },
        }
    }

    /// Reviews recorded for a star value
    #[must_use]
    pub fn count_for(&self, stars: u8) -> i32 {
        self.rating_distribution.get(&stars).copied().unwrap_or(0)
    }
}
