// ABOUTME: Today-versus-previous comparison for a lift
// ABOUTME: Finds the latest earlier workout with the exercise and compares sets by set number
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::cmp::Ordering;

use barbell_core::models::{SetRecord, Workout};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::snapshot::WorkoutSnapshot;

/// Weight and reps of one set, detached from its workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetSummary {
    /// 1-based set number
    pub set_number: u32,
    /// Load
    pub weight: f64,
    /// Repetitions
    pub reps: u32,
}

impl SetSummary {
    /// `weight x reps`
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }
}

impl From<&SetRecord> for SetSummary {
    fn from(set: &SetRecord) -> Self {
        Self {
            set_number: set.set_number,
            weight: set.weight,
            reps: set.reps,
        }
    }
}

/// The sets of an exercise from the most recent earlier workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviousPerformance {
    /// Workout the sets came from
    pub workout_id: Uuid,
    /// That workout's start time
    pub started_at: DateTime<Utc>,
    /// Sets ordered by set number
    pub sets: Vec<SetSummary>,
}

/// How a set compares to the same set number last time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonOutcome {
    /// More volume than last time
    Improved,
    /// Same volume
    Matched,
    /// Less volume
    Declined,
    /// No set with this number last time
    New,
}

/// One of today's sets next to its predecessor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetComparison {
    /// Today's set
    pub current: SetSummary,
    /// Same set number in the previous workout
    pub previous: Option<SetSummary>,
    /// `current.weight - previous.weight`
    pub weight_delta: Option<f64>,
    /// `current.reps - previous.reps`
    pub reps_delta: Option<i64>,
    /// Volume-based verdict
    pub outcome: ComparisonOutcome,
}

/// Latest completed workout started before `reference` that includes `exercise`
///
/// Equal start times resolve to the workout appearing later in the snapshot.
#[must_use]
pub fn previous_performance(
    snapshot: &WorkoutSnapshot<'_>,
    exercise: &str,
    reference: &Workout,
) -> Option<PreviousPerformance> {
    let mut latest: Option<&Workout> = None;
    for workout in snapshot.completed() {
        if workout.id == reference.id
            || workout.started_at >= reference.started_at
            || !workout.includes(exercise)
        {
            continue;
        }
        if latest.is_none_or(|current| current.started_at <= workout.started_at) {
            latest = Some(workout);
        }
    }

    latest.map(|workout| {
        let mut sets: Vec<SetSummary> = workout.sets_for(exercise).map(SetSummary::from).collect();
        sets.sort_by_key(|set| set.set_number);
        PreviousPerformance {
            workout_id: workout.id,
            started_at: workout.started_at,
            sets,
        }
    })
}

/// Compare the exercise's sets in `current` with `previous`, pairing by set number
#[must_use]
pub fn compare_sets(
    current: &Workout,
    exercise: &str,
    previous: Option<&PreviousPerformance>,
) -> Vec<SetComparison> {
    let mut today: Vec<SetSummary> = current.sets_for(exercise).map(SetSummary::from).collect();
    today.sort_by_key(|set| set.set_number);

    today
        .into_iter()
        .map(|set| {
            let before = previous.and_then(|performance| {
                performance
                    .sets
                    .iter()
                    .find(|candidate| candidate.set_number == set.set_number)
                    .copied()
            });
            let outcome = before.map_or(ComparisonOutcome::New, |before| {
                match set.volume().partial_cmp(&before.volume()) {
                    Some(Ordering::Greater) => ComparisonOutcome::Improved,
                    Some(Ordering::Less) => ComparisonOutcome::Declined,
                    _ => ComparisonOutcome::Matched,
                }
            });
            SetComparison {
                current: set,
                previous: before,
                weight_delta: before.map(|before| set.weight - before.weight),
                reps_delta: before.map(|before| i64::from(set.reps) - i64::from(before.reps)),
                outcome,
            }
        })
        .collect()
}
