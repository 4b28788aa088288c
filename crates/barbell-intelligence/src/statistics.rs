// ABOUTME: Simple workout statistics for the dashboard
// ABOUTME: Completed counts, this-week count, average duration, and all-time set total
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use barbell_core::constants::units::SECONDS_PER_MINUTE;
use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::calendar::{in_week, week_start_for};
use crate::snapshot::WorkoutSnapshot;

/// Dashboard counters computed in one pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutStatistics {
    /// Finalized workouts
    pub total_completed_workouts: usize,
    /// Finalized workouts started in the current calendar week
    pub workouts_this_week: usize,
    /// Mean duration of finalized workouts with an end time, in whole minutes
    pub average_duration_minutes: u64,
    /// Sets across every workout, including the active one
    pub total_sets_all_time: usize,
}

/// Number of finalized workouts
#[must_use]
pub fn total_completed_workouts(snapshot: &WorkoutSnapshot<'_>) -> usize {
    snapshot.completed().count()
}

/// Finalized workouts whose start date falls in the week containing `now`
#[must_use]
pub fn workouts_this_week(
    snapshot: &WorkoutSnapshot<'_>,
    week_start: Weekday,
    now: DateTime<Utc>,
) -> usize {
    let current_week = week_start_for(now.date_naive(), week_start);
    snapshot
        .completed()
        .filter(|workout| in_week(workout.started_at.date_naive(), current_week))
        .count()
}

/// Mean duration in whole minutes, rounded; 0 when no workout has an end time
#[must_use]
pub fn average_duration_minutes(snapshot: &WorkoutSnapshot<'_>) -> u64 {
    let durations: Vec<i64> = snapshot
        .completed()
        .filter_map(|workout| workout.duration_seconds())
        .collect();

    if durations.is_empty() {
        return 0;
    }

    let total_seconds: i64 = durations.iter().sum();
    let mean_seconds = total_seconds as f64 / durations.len() as f64;
    let minutes = (mean_seconds / SECONDS_PER_MINUTE as f64).round();
    // Safe: durations are clamped non-negative
    minutes.max(0.0) as u64
}

/// Every set ever logged, including sets in the active workout
#[must_use]
pub fn total_sets_all_time(snapshot: &WorkoutSnapshot<'_>) -> usize {
    snapshot
        .workouts()
        .iter()
        .map(|workout| workout.sets.len())
        .sum()
}

/// All dashboard counters at once
#[must_use]
pub fn workout_statistics(
    snapshot: &WorkoutSnapshot<'_>,
    week_start: Weekday,
    now: DateTime<Utc>,
) -> WorkoutStatistics {
    WorkoutStatistics {
        total_completed_workouts: total_completed_workouts(snapshot),
        workouts_this_week: workouts_this_week(snapshot, week_start, now),
        average_duration_minutes: average_duration_minutes(snapshot),
        total_sets_all_time: total_sets_all_time(snapshot),
    }
}
