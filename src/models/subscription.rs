// ABOUTME: Subscription plan catalog and a user's current plan binding
// ABOUTME: SubscriptionTier, TierPricing, UserSubscriptionStatus and TiersResponse
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UpCoach

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use upcoach_core::record::JsonMap;
use upcoach_core::wire::finite;
use upcoach_core::wire_tag;

use super::defaults;

wire_tag! {
    /// Billing cadence of a price
    pub enum BillingInterval {
        /// Every month
        Monthly => "monthly",
        /// Every three months
        Quarterly => "quarterly",
        /// Every year
        Yearly => "yearly",
    }
}

wire_tag! {
    /// State of a user's subscription
    pub enum SubscriptionStatus {
        /// Paid and current
        Active => "active",
        /// In a free trial
        Trialing => "trialing",
        /// Renewal payment failed, grace period
        PastDue => "past_due",
        /// Cancelled by the user
        Cancelled => "cancelled",
        /// Ended
        Expired => "expired",
    }
}

/// Price of a tier for one billing interval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierPricing {
    /// Price identifier
    pub id: String,
    /// Tier this price belongs to
    pub tier_id: String,
    /// Billing cadence
    pub billing_interval: BillingInterval,
    /// Price in minor units
    pub amount: i64,
    /// ISO currency code
    #[serde(default = "defaults::currency")]
    pub currency: String,
    /// Processor price identifier
    pub stripe_price_id: Option<String>,
    /// Free trial length
    #[serde(default)]
    pub trial_days: i32,
    /// Advertised saving versus the monthly price
    #[serde(serialize_with = "finite::optional")]
    pub discount_percentage: Option<f64>,
    /// Whether the price can be purchased
    #[serde(default = "defaults::yes")]
    pub is_active: bool,
}

impl TierPricing {
    /// Create an active price with no trial
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        tier_id: impl Into<String>,
        billing_interval: BillingInterval,
        amount: i64,
    ) -> Self {
        Self {
            id: id.into(),
            tier_id: tier_id.into(),
            billing_interval,
            amount,
            currency: defaults::currency(),
            stripe_price_id: None,
            trial_days: 0,
            discount_percentage: None,
            is_active: true,
        }
    }
}

/// A subscription plan and its feature flags
///
/// Absent `max_*` limits mean unlimited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionTier {
    /// Tier identifier
    pub id: String,
    /// Internal name ("pro")
    pub name: String,
    /// Name shown to users
    pub display_name: String,
    /// Marketing description
    pub description: Option<String>,
    /// AI coach conversations
    #[serde(default)]
    pub has_ai_coaching: bool,
    /// Voice journal entries
    #[serde(default)]
    pub has_voice_journaling: bool,
    /// Progress photo tracking
    #[serde(default)]
    pub has_progress_photos: bool,
    /// Advanced analytics dashboards
    #[serde(default)]
    pub has_advanced_analytics: bool,
    /// Team and group features
    #[serde(default)]
    pub has_team_features: bool,
    /// Priority support queue
    #[serde(default)]
    pub has_priority_support: bool,
    /// White-label branding
    #[serde(default)]
    pub has_custom_branding: bool,
    /// Coaches a user may connect with
    pub max_coaches: Option<i32>,
    /// Habits a user may track
    pub max_habits: Option<i32>,
    /// Goals a user may set
    pub max_goals: Option<i32>,
    /// Feature flags not modelled above
    #[serde(default)]
    pub custom_features: JsonMap,
    /// Prices per billing interval
    #[serde(default)]
    pub pricing: Vec<TierPricing>,
    /// Whether the tier can be subscribed to
    #[serde(default = "defaults::yes")]
    pub is_active: bool,
    /// Whether the tier is listed in the catalog
    #[serde(default = "defaults::yes")]
    pub is_public: bool,
    /// Catalog position
    #[serde(default)]
    pub sort_order: i32,
    /// Creation timestamp
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,
}

impl SubscriptionTier {
    /// Create a public, active tier with every feature off and no limits
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            display_name: display_name.into(),
            description: None,
            has_ai_coaching: false,
            has_voice_journaling: false,
            has_progress_photos: false,
            has_advanced_analytics: false,
            has_team_features: false,
            has_priority_support: false,
            has_custom_branding: false,
            max_coaches: None,
            max_habits: None,
            max_goals: None,
            custom_features: JsonMap::new(),
            pricing: Vec::new(),
            is_active: true,
            is_public: true,
            sort_order: 0,
            created_at: None,
            updated_at: None,
        }
    }

    /// Price listed for a billing interval
    #[must_use]
    pub fn price_for(&self, interval: BillingInterval) -> Option<&TierPricing> {
        self.pricing
            .iter()
            .find(|price| price.billing_interval == interval)
    }
}

/// A user's current plan binding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSubscriptionStatus {
    /// Subscribed user
    pub user_id: String,
    /// Bound tier identifier
    pub tier_id: Option<String>,
    /// Tier snapshot, when fetched with it
    pub tier: Option<SubscriptionTier>,
    /// Subscription state
    pub status: SubscriptionStatus,
    /// Billing cadence
    pub billing_interval: Option<BillingInterval>,
    /// Start of the paid period
    pub current_period_start: Option<DateTime<Utc>>,
    /// End of the paid period
    pub current_period_end: Option<DateTime<Utc>>,
    /// Whether the subscription stops at period end
    #[serde(default)]
    pub cancel_at_period_end: bool,
    /// End of the free trial
    pub trial_ends_at: Option<DateTime<Utc>>,
    /// Processor subscription identifier
    pub stripe_subscription_id: Option<String>,
}

impl UserSubscriptionStatus {
    /// Create a status with no tier bound
    #[must_use]
    pub fn new(user_id: impl Into<String>, status: SubscriptionStatus) -> Self {
        Self {
            user_id: user_id.into(),
            tier_id: None,
            tier: None,
            status,
            billing_interval: None,
            current_period_start: None,
            current_period_end: None,
            cancel_at_period_end: false,
            trial_ends_at: None,
            stripe_subscription_id: None,
        }
    }
}

/// Catalog response listing the available tiers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TiersResponse {
    /// Listed tiers
    #[serde(default)]
    pub tiers: Vec<SubscriptionTier>,
    /// Tier the requesting user is on
    pub current_tier_id: Option<String>,
}
