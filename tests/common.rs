// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, fixed timestamps, and stores with workout history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `barbell`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use std::env;
use std::sync::Once;

use barbell::models::{BiologicalSex, UserProfile, WeightUnit, Workout};
use barbell::store::WorkoutStore;
use chrono::{DateTime, Duration, TimeZone, Utc};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 08:00 UTC on a day in March 2025
///
/// 2025-03-03 is a Monday.
pub fn march(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, 8, 0, 0).unwrap()
}

/// Seeded store with one finished workout per entry, each lasting one hour
///
/// Sets are `(exercise, weight, reps)` and must name catalog exercises.
pub fn store_with_workouts(workouts: &[(DateTime<Utc>, &[(&str, f64, u32)])]) -> WorkoutStore {
    init_test_logging();
    let mut store = WorkoutStore::seeded(march(1));
    for (start, sets) in workouts {
        store.start_workout(*start).unwrap();
        for (offset, (exercise, weight, reps)) in (1_i64..).zip(sets.iter()) {
            store
                .log_set(exercise, *weight, *reps, *start + Duration::minutes(offset))
                .unwrap();
        }
        store.end_workout(*start + Duration::hours(1)).unwrap();
    }
    store
}

/// Finished workout built directly, outside any store
pub fn finished_workout(start: DateTime<Utc>, minutes: i64, sets: &[(&str, f64, u32)]) -> Workout {
    let mut workout = Workout::start(start);
    for (exercise, weight, reps) in sets {
        workout.push_set(*exercise, *weight, *reps, start);
    }
    workout.finish(start + Duration::minutes(minutes));
    workout
}

/// 30-year-old male, 180 cm, 80 kg
pub fn metric_profile() -> UserProfile {
    UserProfile::new("Test Lifter", 30, BiologicalSex::Male, 180.0, 80.0, WeightUnit::Kilograms)
}
