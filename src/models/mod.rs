// ABOUTME: Domain record types for the UpCoach app, grouped by feature area
// ABOUTME: Every type implements the immutable Record contract from upcoach-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UpCoach

//! Domain records
//!
//! Every record is a plain value: fields are public, construction goes through
//! `new` (required fields only, defaults filled) or struct literals, and
//! modification goes through [`Record::with_changes`](upcoach_core::record::Record::with_changes)
//! which returns a new value. Wire names are the camelCase field names.

/// Coach availability templates and bookable slots
pub mod availability;
/// Coach public profile and certifications
pub mod coach_profile;
/// Field defaults shared by construction and decode
pub mod defaults;
/// Habit tracking and the habit screen state
pub mod habit;
/// Session packages and client purchases
pub mod package;
/// Payments, refunds, invoices and processor envelopes
pub mod payment;
/// Progress photos and the photo screen state
pub mod progress_photo;
/// Client reviews and review statistics
pub mod review;
/// Coaching sessions and booking requests
pub mod session;
/// Subscription tiers, prices and user plan status
pub mod subscription;
/// User accounts
pub mod user;

pub use availability::{AvailabilitySchedule, AvailabilitySlot, TimeSlot};
pub use coach_profile::{Certification, CoachProfile};
pub use habit::{Habit, HabitAchievement, HabitCompletion, HabitFrequency, HabitState, HabitStreak};
pub use package::{ClientCoachPackage, CoachPackage, PackageStatus};
pub use payment::{
    ConfirmPaymentRequest, CreatePaymentIntentRequest, Invoice, InvoiceLineItem, InvoiceStatus,
    PaymentIntentResponse, PaymentRecord, PaymentStatus, RefundRecord, RefundStatus,
    SetupIntentResponse,
};
pub use progress_photo::{ProgressPhoto, ProgressPhotosState};
pub use review::{CoachReview, DetailedRatings, ReviewStats};
pub use session::{BookingRequest, CoachSession, SessionStatus, SessionType, SharedResource};
pub use subscription::{
    BillingInterval, SubscriptionStatus, SubscriptionTier, TierPricing, TiersResponse,
    UserSubscriptionStatus,
};
pub use user::{User, UserRole};

upcoach_core::impl_record! {
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
