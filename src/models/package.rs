// ABOUTME: Coaching package records - purchasable bundles and a client's purchased instance
// ABOUTME: CoachPackage, ClientCoachPackage and the PackageStatus tag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UpCoach

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use upcoach_core::wire::finite;
use upcoach_core::wire_tag;

use super::defaults;

wire_tag! {
    /// Lifecycle of a client's purchased package
    #[derive(Default)]
    pub enum PackageStatus {
        /// Sessions may still be booked against the package
        #[default]
        Active => "active",
        /// Validity window has elapsed
        Expired => "expired",
        /// Every session has been used
        Exhausted => "exhausted",
        /// Cancelled before use
        Cancelled => "cancelled",
        /// Payment was returned to the client
        Refunded => "refunded",
    }
}

/// A bundle of sessions a coach sells at a fixed price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachPackage {
    /// Package identifier
    pub id: i64,
    /// Owning coach profile
    pub coach_id: i64,
    /// Display name
    pub name: String,
    /// Marketing description
    pub description: Option<String>,
    /// Sessions included
    pub session_count: i32,
    /// Days the package stays usable after purchase
    pub validity_days: i32,
    /// Price in major currency units
    #[serde(serialize_with = "finite::number")]
    pub price: f64,
    /// ISO currency code
    #[serde(default = "defaults::currency")]
    pub currency: String,
    /// Undiscounted price, shown struck through
    #[serde(serialize_with = "finite::optional")]
    pub original_price: Option<f64>,
    /// How many times one client may buy this package
    #[serde(default = "defaults::one")]
    pub max_purchases_per_client: i32,
    /// Number of purchases so far
    #[serde(default)]
    pub total_sold: i32,
    /// Whether the package is offered for sale
    #[serde(default = "defaults::yes")]
    pub is_active: bool,
    /// Bullet-point features
    #[serde(default)]
    pub features: Vec<String>,
    /// Creation timestamp
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,
}

impl CoachPackage {
    /// Create an active package with default currency and purchase limits
    #[must_use]
    pub fn new(
        id: i64,
        coach_id: i64,
        name: impl Into<String>,
        session_count: i32,
        validity_days: i32,
        price: f64,
    ) -> Self {
        Self {
            id,
            coach_id,
            name: name.into(),
            description: None,
            session_count,
            validity_days,
            price,
            currency: defaults::currency(),
            original_price: None,
            max_purchases_per_client: 1,
            total_sold: 0,
            is_active: true,
            features: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }
}

/// A package a client has bought
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCoachPackage {
    /// Purchase identifier
    pub id: i64,
    /// Package that was bought
    pub package_id: i64,
    /// Buyer
    pub client_id: String,
    /// When the package was bought
    pub purchase_date: DateTime<Utc>,
    /// When the package stops being usable
    pub expiry_date: DateTime<Utc>,
    /// Sessions already consumed
    #[serde(default)]
    pub sessions_used: i32,
    /// Sessions left
    pub sessions_remaining: i32,
    /// Current lifecycle state
    #[serde(default)]
    pub status: PackageStatus,
    /// Payment that funded the purchase
    pub payment_id: Option<String>,
    /// Amount charged in major currency units
    #[serde(serialize_with = "finite::number")]
    pub amount_paid: f64,
    /// ISO currency code
    #[serde(default = "defaults::currency")]
    pub currency: String,
    /// Snapshot of the package definition, when fetched with it
    pub package: Option<CoachPackage>,
}

impl ClientCoachPackage {
    /// Create an active, unused purchase
    #[must_use]
    pub fn new(
        id: i64,
        package_id: i64,
        client_id: impl Into<String>,
        purchase_date: DateTime<Utc>,
        expiry_date: DateTime<Utc>,
        sessions_remaining: i32,
        amount_paid: f64,
    ) -> Self {
        Self {
            id,
            package_id,
            client_id: client_id.into(),
            purchase_date,
            expiry_date,
            sessions_used: 0,
            sessions_remaining,
            status: PackageStatus::Active,
            payment_id: None,
            amount_paid,
            currency: defaults::currency(),
            package: None,
        }
    }
}
