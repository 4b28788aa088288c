// ABOUTME: Benchmark fixtures for generating realistic training histories
// ABOUTME: Deterministic workouts and sets for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Benchmark fixtures for generating realistic training histories.

use barbell::models::{BiologicalSex, UserProfile, WeightUnit, Workout};
use barbell::store::WorkoutStore;
use chrono::{DateTime, Duration, TimeZone, Utc};

/// Lifts rotated through the generated sessions
const ROTATION: [&str; 6] = [
    "Squat",
    "Bench Press",
    "Deadlift",
    "Overhead Press",
    "Barbell Row",
    "Pull-Up",
];

/// Predefined history sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// A few months of training
    Small,
    /// Several years of training
    Large,
}

impl HistorySize {
    #[must_use]
    pub const fn workouts(self) -> usize {
        match self {
            Self::Small => 50,
            Self::Large => 1_000,
        }
    }
}

/// Fixed reference time so runs are comparable
#[must_use]
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 30, 18, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Completed workouts every other day going back from [`reference_now`]
///
/// Each session has three lifts of four sets with slowly rising loads.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap
)]
#[must_use]
pub fn generate_workouts(size: HistorySize) -> Vec<Workout> {
    let count = size.workouts();
    (0..count)
        .map(|index| {
            let days_ago = ((count - index) * 2) as i64;
            let start = reference_now() - Duration::days(days_ago);
            let mut workout = Workout::start(start);
            for lift in 0..3 {
                let exercise = ROTATION[(index + lift) % ROTATION.len()];
                let base = 60.0 + (index % 40) as f64 * 2.5 + lift as f64 * 20.0;
                for set in 0..4_u32 {
                    let logged_at = start + Duration::minutes(i64::from(set) * 3 + lift as i64 * 15);
                    workout.push_set(exercise, base + f64::from(set) * 2.5, 8 - set, logged_at);
                }
            }
            workout.finish(start + Duration::minutes(55 + (index % 30) as i64));
            workout
        })
        .collect()
}

/// Seeded store holding [`generate_workouts`] plus a profile
#[must_use]
pub fn generate_store(size: HistorySize) -> WorkoutStore {
    let mut store = WorkoutStore::seeded(reference_now() - Duration::days(3_650));
    let _ = store.set_profile(UserProfile::new(
        "Bench Lifter",
        34,
        BiologicalSex::Female,
        168.0,
        64.0,
        WeightUnit::Kilograms,
    ));
    for workout in generate_workouts(size) {
        if store.start_workout(workout.started_at).is_err() {
            continue;
        }
        for set in &workout.sets {
            let _ = store.log_set(&set.exercise, set.weight, set.reps, set.logged_at);
        }
        if let Some(ended_at) = workout.ended_at {
            let _ = store.end_workout(ended_at);
        }
    }
    store
}
