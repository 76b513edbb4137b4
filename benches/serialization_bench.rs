// ABOUTME: Criterion benchmarks for record wire conversion and hashing
// ABOUTME: Encode/decode of a large aggregate, merge patch and habit state scaling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UpCoach
#![allow(missing_docs, clippy::unwrap_used, clippy::cast_possible_wrap)]

use chrono::{DateTime, Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Map, Value};
use upcoach_models::models::{
    AvailabilitySchedule, AvailabilitySlot, Certification, CoachPackage, CoachProfile,
    CoachReview, Habit, HabitCompletion, HabitState,
};
use upcoach_models::record::Record;
use upcoach_models::records::RecordKind;

fn epoch() -> DateTime<Utc> {
    "2025-01-01T00:00:00Z".parse().unwrap()
}

fn coach_profile(reviews: usize) -> CoachProfile {
    let schedule = AvailabilitySchedule::new("Europe/Berlin").with_changes(|s| {
        s.monday = vec![
            AvailabilitySlot::new("09:00", "12:00"),
            AvailabilitySlot::new("14:00", "17:00"),
        ];
        s.thursday = s.monday.clone();
    });

    CoachProfile::new(7, "user-7", "Dana Whitfield", epoch(), epoch()).with_changes(|p| {
        p.bio = Some("Helping founders build sustainable routines.".into());
        p.specializations = vec!["Leadership".into(), "Burnout recovery".into()];
        p.certifications = vec![Certification::new("PCC", "ICF")];
        p.availability_schedule = Some(schedule);
        p.packages = (0..5)
            .map(|i| CoachPackage::new(i, 7, format!("Bundle {i}"), 5, 30, 99.0))
            .collect();
        p.reviews = (0..reviews as i64)
            .map(|i| {
                CoachReview::new(i, 7, format!("client-{i}"), 4.5, "Great coach", epoch())
            })
            .collect();
    })
}

fn habit_state(habits: usize) -> HabitState {
    HabitState {
        habits: (0..habits)
            .map(|i| Habit::new(format!("habit-{i}"), "client", format!("Habit {i}"), epoch()))
            .collect(),
        completions: (0..habits * 7)
            .map(|i| {
                HabitCompletion::new(
                    format!("done-{i}"),
                    format!("habit-{}", i % habits.max(1)),
                    "client",
                    epoch() + Duration::hours(i as i64),
                )
            })
            .collect(),
        ..HabitState::default()
    }
}

fn bench_coach_profile_wire(c: &mut Criterion) {
    let mut group = c.benchmark_group("coach_profile");
    let profile = coach_profile(20);
    let wire = profile.to_wire().unwrap();
    let text = profile.to_json_string().unwrap();

    group.bench_function("to_wire", |b| {
        b.iter(|| black_box(&profile).to_wire().unwrap());
    });
    group.bench_function("from_wire", |b| {
        b.iter(|| CoachProfile::from_wire(black_box(wire.clone())).unwrap());
    });
    group.bench_function("from_json_str", |b| {
        b.iter(|| CoachProfile::from_json_str(black_box(&text)).unwrap());
    });
    group.bench_function("content_hash", |b| {
        b.iter(|| black_box(&profile).content_hash().unwrap());
    });

    group.finish();
}

fn bench_merge_patch(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_patch");
    let profile = coach_profile(20);
    let patch: Map<String, Value> = match json!({
        "bio": null,
        "title": "Executive Coach",
        "availabilitySchedule": {"timezone": "Asia/Tokyo"}
    }) {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    group.bench_function("typed", |b| {
        b.iter(|| black_box(&profile).merge_patch(black_box(&patch)).unwrap());
    });

    let payload = Value::Object(profile.to_wire().unwrap());
    let patch = Value::Object(patch);
    group.bench_function("registry", |b| {
        b.iter(|| {
            RecordKind::CoachProfile
                .merge_patch(black_box(payload.clone()), black_box(&patch))
                .unwrap()
        });
    });

    group.finish();
}

fn bench_habit_state_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("habit_state");

    for habits in [10usize, 100, 1000] {
        let state = habit_state(habits);
        let text = state.to_json_string().unwrap();
        group.bench_with_input(BenchmarkId::new("round_trip", habits), &text, |b, input| {
            b.iter(|| {
                let decoded = HabitState::from_json_str(black_box(input)).unwrap();
                decoded.to_json_string().unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_coach_profile_wire,
    bench_merge_patch,
    bench_habit_state_scaling
);
criterion_main!(benches);
