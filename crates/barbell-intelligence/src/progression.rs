// ABOUTME: Per-lift progression series for time-series charts
// ABOUTME: One point per completed workout holding the heaviest set of the exercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::snapshot::WorkoutSnapshot;

/// Heaviest set of an exercise in one workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionPoint {
    /// Workout the point came from
    pub workout_id: Uuid,
    /// Workout start time
    pub date: DateTime<Utc>,
    /// Heaviest weight logged for the exercise in that workout
    pub max_weight: f64,
}

/// Chronological max-weight series for one exercise
///
/// Pure function of the snapshot; repeated calls return identical series.
#[must_use]
pub fn progression(snapshot: &WorkoutSnapshot<'_>, exercise: &str) -> Vec<ProgressionPoint> {
    snapshot
        .completed_chronological()
        .into_iter()
        .filter_map(|workout| {
            workout
                .sets_for(exercise)
                .map(|set| set.weight)
                .reduce(f64::max)
                .map(|max_weight| ProgressionPoint {
                    workout_id: workout.id,
                    date: workout.started_at,
                    max_weight,
                })
        })
        .collect()
}
