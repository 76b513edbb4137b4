// ABOUTME: Habit tracking records and the habit screen state snapshot
// ABOUTME: Habit, HabitCompletion, HabitStreak, HabitAchievement and HabitState
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UpCoach

//! Habit tracking
//!
//! These are data shapes only. Streak counts and achievements arrive already
//! computed by the backend; nothing here derives them from completion history.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use upcoach_core::wire_tag;

use super::defaults;

wire_tag! {
    /// How often a habit is meant to be done
    #[derive(Default)]
    pub enum HabitFrequency {
        /// Every day
        #[default]
        Daily => "daily",
        /// On the listed weekdays each week
        Weekly => "weekly",
        /// Once a month
        Monthly => "monthly",
        /// User-defined cadence
        Custom => "custom",
    }
}

/// A habit the user is tracking
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Habit identifier
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Display name
    pub name: String,
    /// Longer description
    pub description: Option<String>,
    /// Grouping label
    pub category: Option<String>,
    /// Icon name
    pub icon: Option<String>,
    /// Hex colour
    pub color: Option<String>,
    /// Cadence
    #[serde(default)]
    pub frequency: HabitFrequency,
    /// Completions expected per period
    #[serde(default = "defaults::one")]
    pub target_count: i32,
    /// ISO weekdays (1 = Monday .. 7 = Sunday) for weekly habits
    #[serde(default)]
    pub weekdays: Vec<u8>,
    /// Local reminder time (`HH:MM`)
    pub reminder_time: Option<String>,
    /// Whether the reminder fires
    #[serde(default)]
    pub reminder_enabled: bool,
    /// Current streak as reported by the backend
    #[serde(default)]
    pub current_streak: i32,
    /// Best streak as reported by the backend
    #[serde(default)]
    pub longest_streak: i32,
    /// Lifetime completions
    #[serde(default)]
    pub total_completions: i32,
    /// Hidden from the active list
    #[serde(default)]
    pub is_archived: bool,
    /// First tracked day
    pub start_date: Option<NaiveDate>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,
}

impl Habit {
    /// Create a daily habit with no reminder
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            name: name.into(),
            description: None,
            category: None,
            icon: None,
            color: None,
            frequency: HabitFrequency::Daily,
            target_count: 1,
            weekdays: Vec::new(),
            reminder_time: None,
            reminder_enabled: false,
            current_streak: 0,
            longest_streak: 0,
            total_completions: 0,
            is_archived: false,
            start_date: None,
            created_at,
            updated_at: None,
        }
    }
}

/// One check-in against a habit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitCompletion {
    /// Completion identifier
    pub id: String,
    /// Habit checked in
    pub habit_id: String,
    /// User who checked in
    pub user_id: String,
    /// When it was done
    pub completed_at: DateTime<Utc>,
    /// Repetitions recorded
    #[serde(default = "defaults::one")]
    pub count: i32,
    /// Journal note
    pub note: Option<String>,
    /// Self-reported mood score
    pub mood: Option<i32>,
}

impl HabitCompletion {
    /// Create a single check-in
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        habit_id: impl Into<String>,
        user_id: impl Into<String>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            habit_id: habit_id.into(),
            user_id: user_id.into(),
            completed_at,
            count: 1,
            note: None,
            mood: None,
        }
    }
}

/// Streak summary for one habit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitStreak {
    /// Habit summarised
    pub habit_id: String,
    /// Consecutive periods completed up to now
    #[serde(default)]
    pub current_streak: i32,
    /// Best run ever
    #[serde(default)]
    pub longest_streak: i32,
    /// Most recent completion
    pub last_completed_at: Option<DateTime<Utc>>,
    /// Start of the current streak
    pub streak_started_at: Option<DateTime<Utc>>,
}

impl HabitStreak {
    /// Zero streak for a habit
    #[must_use]
    pub fn new(habit_id: impl Into<String>) -> Self {
        Self {
            habit_id: habit_id.into(),
            current_streak: 0,
            longest_streak: 0,
            last_completed_at: None,
            streak_started_at: None,
        }
    }
}

/// An unlocked achievement
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitAchievement {
    /// Achievement identifier
    pub id: String,
    /// User who unlocked it
    pub user_id: String,
    /// Habit it relates to, for habit-specific achievements
    pub habit_id: Option<String>,
    /// Achievement family ("streak", "total_completions", ...)
    pub achievement_type: String,
    /// Display title
    pub title: String,
    /// Display description
    pub description: Option<String>,
    /// Badge icon
    pub icon: Option<String>,
    /// Value that unlocked it
    pub threshold: i32,
    /// Unlock timestamp
    pub unlocked_at: DateTime<Utc>,
}

impl HabitAchievement {
    /// Create an achievement that is not tied to a single habit
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        achievement_type: impl Into<String>,
        title: impl Into<String>,
        threshold: i32,
        unlocked_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            habit_id: None,
            achievement_type: achievement_type.into(),
            title: title.into(),
            description: None,
            icon: None,
            threshold,
            unlocked_at,
        }
    }
}

/// Snapshot of the habit screen's state
///
/// Produced and replaced wholesale by whatever controller owns the screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HabitState {
    /// Loaded habits
    pub habits: Vec<Habit>,
    /// Loaded check-ins
    pub completions: Vec<HabitCompletion>,
    /// Loaded streak summaries
    pub streaks: Vec<HabitStreak>,
    /// Unlocked achievements
    pub achievements: Vec<HabitAchievement>,
    /// Habit open in the detail view
    pub selected_habit: Option<Habit>,
    /// A fetch is in flight
    pub is_loading: bool,
    /// A save is in flight
    pub is_saving: bool,
    /// Last error message shown to the user
    pub error: Option<String>,
}

impl HabitState {
    /// Find a loaded habit by id
    #[must_use]
    pub fn habit(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id == id)
    }

    /// Streak summary for a habit, if loaded
    #[must_use]
    pub fn streak_for(&self, habit_id: &str) -> Option<&HabitStreak> {
        self.streaks.iter().find(|streak| streak.habit_id == habit_id)
    }
}
