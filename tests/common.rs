// ABOUTME: Shared test utilities and record fixtures for integration tests
// ABOUTME: Provides logging setup, timestamp helpers and fully-populated records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UpCoach
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::too_many_lines
)]
//! Shared test utilities for `upcoach_models`
//!
//! `full_*` fixtures set every optional field so round-trip tests cover the
//! "all present" case; the `new` constructors cover "all absent".

use std::env;
use std::fmt::Debug;
use std::sync::Once;

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::json;
use upcoach_models::models::{
    AvailabilitySchedule, AvailabilitySlot, BillingInterval, BookingRequest, Certification,
    ClientCoachPackage, CoachPackage, CoachProfile, CoachReview, CoachSession,
    ConfirmPaymentRequest, CreatePaymentIntentRequest, DetailedRatings, Habit, HabitAchievement,
    HabitCompletion, HabitFrequency, HabitState, HabitStreak, Invoice, InvoiceLineItem,
    InvoiceStatus, PackageStatus, PaymentIntentResponse, PaymentRecord, PaymentStatus,
    ProgressPhoto, ProgressPhotosState, RefundRecord, RefundStatus, ReviewStats, SessionStatus,
    SessionType, SetupIntentResponse, SharedResource, SubscriptionStatus, SubscriptionTier,
    TierPricing, TiersResponse, TimeSlot, User, UserRole, UserSubscriptionStatus,
};
use upcoach_models::record::{JsonMap, Record};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level, quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Parse an RFC 3339 timestamp
pub fn ts(value: &str) -> DateTime<Utc> {
    value.parse().unwrap()
}

/// Parse an ISO calendar date
pub fn day(value: &str) -> NaiveDate {
    value.parse().unwrap()
}

/// Encode, decode through both the map and the text form, and compare
pub fn assert_round_trip<T: Record + Debug>(record: &T) {
    let wire = record.to_wire().unwrap();
    let decoded = T::from_wire(wire).unwrap();
    assert_eq!(&decoded, record, "{} map round trip", T::KIND);

    let text = record.to_json_string().unwrap();
    let reparsed = T::from_json_str(&text).unwrap();
    assert_eq!(&reparsed, record, "{} text round trip", T::KIND);
}

fn bag(value: serde_json::Value) -> JsonMap {
    serde_json::from_value(value).unwrap()
}

pub fn full_availability_schedule() -> AvailabilitySchedule {
    AvailabilitySchedule::new("Europe/Berlin").with_changes(|s| {
        s.monday = vec![
            AvailabilitySlot::new("09:00", "12:00"),
            AvailabilitySlot::new("14:00", "17:00"),
        ];
        s.wednesday = vec![AvailabilitySlot::new("10:00", "11:30")];
        s.friday = vec![AvailabilitySlot::new("08:00", "09:00")];
        s.sunday = vec![AvailabilitySlot::new("18:00", "20:00")];
        s.blocked_dates = vec![day("2025-12-24"), day("2025-12-25")];
        s.booking_buffer_hours = 12;
        s.max_advance_booking_days = 60;
    })
}

pub fn full_time_slot() -> TimeSlot {
    TimeSlot::new(ts("2025-02-03T09:00:00Z"), ts("2025-02-03T10:00:00Z"))
        .with_changes(|slot| slot.is_available = false)
}

pub fn full_certification() -> Certification {
    Certification::new("ICF Professional Certified Coach", "International Coaching Federation")
        .with_changes(|c| {
            c.year = Some(2019);
            c.credential_id = Some("PCC-20931".into());
            c.verification_url = Some("https://coachfederation.org/verify/PCC-20931".into());
            c.expires_at = Some(ts("2027-06-30T00:00:00Z"));
        })
}

pub fn full_coach_package() -> CoachPackage {
    CoachPackage::new(11, 7, "Momentum Bundle", 6, 90, 540.0).with_changes(|p| {
        p.description = Some("Six sessions over three months".into());
        p.currency = "EUR".into();
        p.original_price = Some(600.0);
        p.max_purchases_per_client = 3;
        p.total_sold = 42;
        p.features = vec!["Weekly check-ins".into(), "Goal workbook".into()];
        p.created_at = Some(ts("2025-01-02T08:00:00Z"));
        p.updated_at = Some(ts("2025-01-10T08:00:00Z"));
    })
}

pub fn full_detailed_ratings() -> DetailedRatings {
    DetailedRatings {
        communication: Some(5.0),
        expertise: Some(4.5),
        punctuality: Some(4.0),
        value: Some(4.5),
        helpfulness: Some(5.0),
    }
}

pub fn full_coach_review() -> CoachReview {
    CoachReview::new(
        301,
        7,
        "client-42",
        4.5,
        "Clear plan and great follow-up.",
        ts("2025-01-20T18:30:00Z"),
    )
    .with_changes(|r| {
        r.session_id = Some(9001);
        r.title = Some("Worth it".into());
        r.detailed_ratings = Some(full_detailed_ratings());
        r.is_verified = true;
        r.is_visible = false;
        r.helpful_count = 8;
        r.coach_response = Some("Thank you, see you next week!".into());
        r.coach_response_at = Some(ts("2025-01-21T07:00:00Z"));
        r.client_name = Some("Sam Lee".into());
        r.client_avatar = Some("https://cdn.upcoach.test/avatars/42.png".into());
        r.updated_at = Some(ts("2025-01-22T10:00:00Z"));
    })
}

pub fn full_review_stats() -> ReviewStats {
    ReviewStats::new(7).with_changes(|s| {
        s.average_rating = 4.5;
        s.total_reviews = 12;
        s.rating_distribution = [(5, 7), (4, 4), (3, 1)].into_iter().collect();
        s.detailed_averages = full_detailed_ratings();
    })
}

pub fn full_coach_profile() -> CoachProfile {
    CoachProfile::new(
        7,
        "user-7",
        "Dana Whitfield",
        ts("2024-11-01T12:00:00Z"),
        ts("2025-01-15T12:00:00Z"),
    )
    .with_changes(|p| {
        p.title = Some("Certified Life Coach".into());
        p.bio = Some("Helping founders build sustainable routines.".into());
        p.profile_image_url = Some("https://cdn.upcoach.test/coaches/7.png".into());
        p.cover_image_url = Some("https://cdn.upcoach.test/coaches/7-cover.png".into());
        p.intro_video_url = Some("https://video.upcoach.test/7".into());
        p.website_url = Some("https://dana.example".into());
        p.linkedin_url = Some("https://linkedin.com/in/dana".into());
        p.specializations = vec!["Leadership".into(), "Burnout recovery".into()];
        p.certifications = vec![full_certification()];
        p.languages = vec!["en".into(), "de".into()];
        p.tags = vec!["founders".into()];
        p.experience_years = 9;
        p.timezone = "Europe/Berlin".into();
        p.hourly_rate = Some(120.0);
        p.currency = "EUR".into();
        p.min_booking_hours = 0.5;
        p.max_booking_hours = 2.0;
        p.booking_buffer_hours = 12;
        p.availability_schedule = Some(full_availability_schedule());
        p.average_rating = 4.5;
        p.rating_count = 12;
        p.total_sessions = 310;
        p.total_clients = 58;
        p.response_time_hours = Some(2.5);
        p.is_verified = true;
        p.is_featured = true;
        p.verified_at = Some(ts("2024-12-01T00:00:00Z"));
        p.is_favorite = true;
        p.full_name = Some("Dana M. Whitfield".into());
        p.email = Some("dana@upcoach.test".into());
        p.packages = vec![full_coach_package()];
        p.reviews = vec![full_coach_review()];
    })
}

pub fn full_shared_resource() -> SharedResource {
    SharedResource::new(
        "res-1",
        "Values worksheet",
        "document",
        "https://cdn.upcoach.test/res/1.pdf",
        ts("2025-02-03T09:40:00Z"),
    )
    .with_changes(|r| r.description = Some("Fill in before next session".into()))
}

pub fn full_coach_session() -> CoachSession {
    CoachSession::new(
        9001,
        7,
        "client-42",
        "Quarterly planning",
        SessionType::Video,
        ts("2025-02-03T09:00:00Z"),
        60,
        120.0,
        120.0,
        ts("2025-01-25T10:00:00Z"),
    )
    .with_changes(|s| {
        s.description = Some("Review Q1 goals".into());
        s.status = SessionStatus::Completed;
        s.timezone = "Europe/Berlin".into();
        s.meeting_url = Some("https://meet.upcoach.test/9001".into());
        s.meeting_id = Some("9001".into());
        s.meeting_password = Some("s3cret".into());
        s.location = Some("Online".into());
        s.currency = "EUR".into();
        s.payment_status = PaymentStatus::Succeeded;
        s.payment_id = Some("pay_123".into());
        s.coach_notes = Some("Client energised".into());
        s.client_notes = Some("Want to talk about delegation".into());
        s.shared_resources = vec![full_shared_resource()];
        s.client_rating = Some(5);
        s.client_feedback = Some("Very useful".into());
        s.coach_rating = Some(5);
        s.coach_feedback = Some("Well prepared".into());
        s.started_at = Some(ts("2025-02-03T09:01:00Z"));
        s.ended_at = Some(ts("2025-02-03T10:02:00Z"));
        s.actual_duration_minutes = Some(61);
        s.cancelled_at = Some(ts("2025-02-01T09:00:00Z"));
        s.cancelled_by = Some("user-7".into());
        s.cancellation_reason = Some("Rebooked".into());
        s.coach = Some(full_coach_profile());
        s.client_name = Some("Sam Lee".into());
        s.client_avatar = Some("https://cdn.upcoach.test/avatars/42.png".into());
        s.updated_at = ts("2025-02-03T10:05:00Z");
    })
}

pub fn full_booking_request() -> BookingRequest {
    BookingRequest::new(
        7,
        SessionType::InPerson,
        ts("2025-03-01T15:00:00Z"),
        90,
        "Career pivot",
    )
    .with_changes(|b| {
        b.timezone = "America/New_York".into();
        b.description = Some("Discuss options".into());
        b.client_notes = Some("Bring CV".into());
        b.package_id = Some(11);
    })
}

pub fn full_client_coach_package() -> ClientCoachPackage {
    ClientCoachPackage::new(
        501,
        11,
        "client-42",
        ts("2025-01-05T10:00:00Z"),
        ts("2025-04-05T10:00:00Z"),
        4,
        540.0,
    )
    .with_changes(|c| {
        c.sessions_used = 2;
        c.status = PackageStatus::Exhausted;
        c.payment_id = Some("pay_456".into());
        c.currency = "EUR".into();
        c.package = Some(full_coach_package());
    })
}

pub fn full_refund_record() -> RefundRecord {
    RefundRecord::new("re_1", "pay_123", 2_000, ts("2025-02-05T12:00:00Z")).with_changes(|r| {
        r.currency = "EUR".into();
        r.status = RefundStatus::Succeeded;
        r.reason = Some("requested_by_customer".into());
    })
}

pub fn full_payment_record() -> PaymentRecord {
    PaymentRecord::new("pay_123", "client-42", 12_000, ts("2025-02-01T12:00:00Z")).with_changes(
        |p| {
            p.currency = "EUR".into();
            p.status = PaymentStatus::PartiallyRefunded;
            p.payment_method = Some("card".into());
            p.stripe_payment_intent_id = Some("pi_123".into());
            p.stripe_charge_id = Some("ch_123".into());
            p.description = Some("Session 9001".into());
            p.metadata = bag(json!({
                "sessionId": 9001,
                "source": "ios",
                "tags": ["promo", {"code": "WINTER", "percent": 10}],
                "note": null
            }));
            p.refunds = vec![full_refund_record()];
            p.updated_at = Some(ts("2025-02-05T12:00:00Z"));
        },
    )
}

pub fn full_invoice_line_item() -> InvoiceLineItem {
    InvoiceLineItem::new("Coaching session", 6_000, 12_000).with_changes(|l| l.quantity = 2)
}

pub fn full_invoice() -> Invoice {
    Invoice::new(
        "in_1",
        "client-42",
        "UC-2025-0001",
        12_000,
        14_280,
        ts("2025-02-01T00:00:00Z"),
    )
    .with_changes(|i| {
        i.status = InvoiceStatus::Paid;
        i.tax = 2_280;
        i.currency = "EUR".into();
        i.line_items = vec![
            full_invoice_line_item(),
            InvoiceLineItem::new("Workbook", 0, 0),
        ];
        i.due_at = Some(ts("2025-02-15T00:00:00Z"));
        i.paid_at = Some(ts("2025-02-02T09:00:00Z"));
        i.pdf_url = Some("https://billing.upcoach.test/in_1.pdf".into());
    })
}

pub fn full_create_payment_intent_request() -> CreatePaymentIntentRequest {
    CreatePaymentIntentRequest::new(12_000).with_changes(|r| {
        r.currency = "EUR".into();
        r.description = Some("Momentum Bundle".into());
        r.payment_method_id = Some("pm_1".into());
        r.customer_id = Some("cus_1".into());
        r.metadata = bag(json!({"packageId": 11, "trial": false}));
    })
}

pub fn full_confirm_payment_request() -> ConfirmPaymentRequest {
    ConfirmPaymentRequest::new("pi_123").with_changes(|r| r.payment_method_id = Some("pm_1".into()))
}

pub fn full_payment_intent_response() -> PaymentIntentResponse {
    PaymentIntentResponse::new("pi_123_secret_abc", "pi_123", 12_000, "requires_confirmation")
        .with_changes(|r| r.currency = "EUR".into())
}

pub fn full_setup_intent_response() -> SetupIntentResponse {
    SetupIntentResponse::new("seti_1_secret_xyz", "seti_1")
        .with_changes(|r| r.customer_id = Some("cus_1".into()))
}

pub fn full_tier_pricing() -> TierPricing {
    TierPricing::new("price_pro_yearly", "tier_pro", BillingInterval::Yearly, 9_999).with_changes(
        |p| {
            p.currency = "EUR".into();
            p.stripe_price_id = Some("price_1Nabc".into());
            p.trial_days = 14;
            p.discount_percentage = Some(16.5);
            p.is_active = false;
        },
    )
}

pub fn full_subscription_tier() -> SubscriptionTier {
    SubscriptionTier::new("tier_pro", "pro", "Pro").with_changes(|t| {
        t.description = Some("Everything in Basic plus AI coaching".into());
        t.has_ai_coaching = true;
        t.has_voice_journaling = true;
        t.has_progress_photos = true;
        t.has_advanced_analytics = true;
        t.has_team_features = true;
        t.has_priority_support = true;
        t.has_custom_branding = true;
        t.max_coaches = Some(3);
        t.max_habits = Some(50);
        t.max_goals = Some(20);
        t.custom_features = bag(json!({"betaInsights": true, "exportFormats": ["csv", "pdf"]}));
        t.pricing = vec![
            TierPricing::new("price_pro_monthly", "tier_pro", BillingInterval::Monthly, 999),
            full_tier_pricing(),
        ];
        t.is_active = false;
        t.is_public = false;
        t.sort_order = 2;
        t.created_at = Some(ts("2024-06-01T00:00:00Z"));
        t.updated_at = Some(ts("2025-01-01T00:00:00Z"));
    })
}

pub fn full_user_subscription_status() -> UserSubscriptionStatus {
    UserSubscriptionStatus::new("client-42", SubscriptionStatus::Trialing).with_changes(|s| {
        s.tier_id = Some("tier_pro".into());
        s.tier = Some(full_subscription_tier());
        s.billing_interval = Some(BillingInterval::Yearly);
        s.current_period_start = Some(ts("2025-01-01T00:00:00Z"));
        s.current_period_end = Some(ts("2026-01-01T00:00:00Z"));
        s.cancel_at_period_end = true;
        s.trial_ends_at = Some(ts("2025-01-15T00:00:00Z"));
        s.stripe_subscription_id = Some("sub_1".into());
    })
}

pub fn full_tiers_response() -> TiersResponse {
    TiersResponse {
        tiers: vec![
            SubscriptionTier::new("tier_basic", "basic", "Basic"),
            full_subscription_tier(),
        ],
        current_tier_id: Some("tier_basic".into()),
    }
}

pub fn full_habit() -> Habit {
    Habit::new("habit-1", "client-42", "Morning pages", ts("2025-01-01T06:00:00Z")).with_changes(
        |h| {
            h.description = Some("Three pages before breakfast".into());
            h.category = Some("mindfulness".into());
            h.icon = Some("pencil".into());
            h.color = Some("#4F46E5".into());
            h.frequency = HabitFrequency::Weekly;
            h.target_count = 3;
            h.weekdays = vec![1, 3, 5];
            h.reminder_time = Some("06:30".into());
            h.reminder_enabled = true;
            h.current_streak = 4;
            h.longest_streak = 11;
            h.total_completions = 37;
            h.is_archived = true;
            h.start_date = Some(day("2025-01-01"));
            h.updated_at = Some(ts("2025-02-01T06:00:00Z"));
        },
    )
}

pub fn full_habit_completion() -> HabitCompletion {
    HabitCompletion::new("done-1", "habit-1", "client-42", ts("2025-02-03T06:45:00Z"))
        .with_changes(|c| {
            c.count = 2;
            c.note = Some("Felt focused".into());
            c.mood = Some(4);
        })
}

pub fn full_habit_streak() -> HabitStreak {
    HabitStreak::new("habit-1").with_changes(|s| {
        s.current_streak = 4;
        s.longest_streak = 11;
        s.last_completed_at = Some(ts("2025-02-03T06:45:00Z"));
        s.streak_started_at = Some(ts("2025-01-31T06:40:00Z"));
    })
}

pub fn full_habit_achievement() -> HabitAchievement {
    minimal_habit_achievement().with_changes(|a| {
        a.habit_id = Some("habit-1".into());
        a.description = Some("Seven days in a row".into());
        a.icon = Some("flame".into());
    })
}

pub fn minimal_habit_achievement() -> HabitAchievement {
    HabitAchievement::new(
        "ach-1",
        "client-42",
        "streak",
        "Week warrior",
        7,
        ts("2025-01-08T06:45:00Z"),
    )
}

pub fn full_habit_state() -> HabitState {
    HabitState {
        habits: vec![
            full_habit(),
            Habit::new("habit-2", "client-42", "Walk", ts("2025-01-02T06:00:00Z")),
        ],
        completions: vec![full_habit_completion()],
        streaks: vec![full_habit_streak()],
        achievements: vec![full_habit_achievement()],
        selected_habit: Some(full_habit()),
        is_loading: true,
        is_saving: true,
        error: Some("Network unavailable".into()),
    }
}

pub fn full_user() -> User {
    User::new(
        Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap(),
        "sam@upcoach.test",
        ts("2024-10-01T08:00:00Z"),
    )
    .with_changes(|u| {
        u.name = Some("Sam Lee".into());
        u.avatar_url = Some("https://cdn.upcoach.test/avatars/42.png".into());
        u.phone = Some("+4915112345678".into());
        u.bio = Some("Product manager, runner".into());
        u.timezone = Some("Europe/Berlin".into());
        u.role = UserRole::Coach;
        u.is_email_verified = true;
        u.preferences = bag(json!({
            "theme": "dark",
            "notifications": {"email": true, "push": false},
            "weeklyGoal": 3
        }));
        u.metadata = bag(json!({"signupSource": "referral", "cohort": null}));
        u.updated_at = Some(ts("2025-01-20T08:00:00Z"));
        u.last_login_at = Some(ts("2025-02-03T06:00:00Z"));
    })
}

pub fn full_progress_photo() -> ProgressPhoto {
    ProgressPhoto::new(
        "photo-1",
        "client-42",
        "https://cdn.upcoach.test/photos/1.jpg",
        ts("2025-02-01T07:00:00Z"),
    )
    .with_changes(|p| {
        p.thumbnail_url = Some("https://cdn.upcoach.test/photos/1_thumb.jpg".into());
        p.caption = Some("Week 4".into());
        p.category = Some("front".into());
        p.weight = Some(72.5);
        p.tags = vec!["cut".into(), "week4".into()];
        p.is_private = false;
        p.created_at = Some(ts("2025-02-01T07:05:00Z"));
    })
}

pub fn full_progress_photos_state() -> ProgressPhotosState {
    ProgressPhotosState {
        photos: vec![full_progress_photo()],
        selected_photo: Some(full_progress_photo()),
        is_loading: true,
        is_saving: false,
        error: Some("Upload failed".into()),
    }
}
