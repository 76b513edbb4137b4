// ABOUTME: Progress photo records and the progress photo screen state snapshot
// ABOUTME: ProgressPhoto and ProgressPhotosState
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UpCoach

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use upcoach_core::wire::finite;

use super::defaults;

/// A body-progress photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPhoto {
    /// Photo identifier
    pub id: String,
    /// Owner
    pub user_id: String,
    /// Full-size image location
    pub image_url: String,
    /// Thumbnail location
    pub thumbnail_url: Option<String>,
    /// User caption
    pub caption: Option<String>,
    /// Pose or body area ("front", "side", ...)
    pub category: Option<String>,
    /// Body weight recorded with the photo
    #[serde(serialize_with = "finite::optional")]
    pub weight: Option<f64>,
    /// User tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Hidden from coaches
    #[serde(default = "defaults::yes")]
    pub is_private: bool,
    /// When the photo was taken
    pub taken_at: DateTime<Utc>,
    /// Upload timestamp
    pub created_at: Option<DateTime<Utc>>,
}

impl ProgressPhoto {
    /// Create a private photo with no annotations
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        image_url: impl Into<String>,
        taken_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            image_url: image_url.into(),
            thumbnail_url: None,
            caption: None,
            category: None,
            weight: None,
            tags: Vec::new(),
            is_private: true,
            taken_at,
            created_at: None,
        }
    }
}

/// Snapshot of the progress photo screen's state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressPhotosState {
    /// Loaded photos, newest first as delivered
    pub photos: Vec<ProgressPhoto>,
    /// Photo open in the viewer
    pub selected_photo: Option<ProgressPhoto>,
    /// A fetch is in flight
    pub is_loading: bool,
    /// An upload is in flight
    pub is_saving: bool,
    /// Last error message shown to the user
    pub error: Option<String>,
}
