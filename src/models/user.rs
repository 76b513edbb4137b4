// ABOUTME: User account record with role tag and open preference/metadata bags
// ABOUTME: Preferences and metadata are untyped JSON maps kept verbatim across round trips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UpCoach

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use upcoach_core::record::JsonMap;
use upcoach_core::wire_tag;
use uuid::Uuid;

wire_tag! {
    /// Account role
    #[derive(Default)]
    pub enum UserRole {
        /// Regular app user
        #[default]
        Client => "client",
        /// Coach with a public profile
        Coach => "coach",
        /// Platform administrator
        Admin => "admin",
    }
}

/// A user account profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Account identifier
    pub id: Uuid,
    /// Login email
    pub email: String,
    /// Display name
    pub name: Option<String>,
    /// Avatar image
    pub avatar_url: Option<String>,
    /// Phone number
    pub phone: Option<String>,
    /// Short biography
    pub bio: Option<String>,
    /// IANA timezone
    pub timezone: Option<String>,
    /// Account role
    #[serde(default)]
    pub role: UserRole,
    /// Whether the email address was confirmed
    #[serde(default)]
    pub is_email_verified: bool,
    /// Client-side preferences (theme, notification toggles, ...)
    #[serde(default)]
    pub preferences: JsonMap,
    /// Backend-attached metadata
    #[serde(default)]
    pub metadata: JsonMap,
    /// Sign-up timestamp
    pub created_at: DateTime<Utc>,
    /// Last profile update
    pub updated_at: Option<DateTime<Utc>>,
    /// Last successful sign-in
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Create a client account with empty preferences
    #[must_use]
    pub fn new(id: Uuid, email: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            email: email.into(),
            name: None,
            avatar_url: None,
            phone: None,
            bio: None,
            timezone: None,
            role: UserRole::Client,
            is_email_verified: false,
            preferences: JsonMap::new(),
            metadata: JsonMap::new(),
            created_at,
            updated_at: None,
            last_login_at: None,
        }
    }

    /// Look up a preference value
    #[must_use]
    pub fn preference(&self, key: &str) -> Option<&Value> {
        self.preferences.get(key)
    }
}
