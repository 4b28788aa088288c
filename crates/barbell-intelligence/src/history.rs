// ABOUTME: Workout history summaries for browsing past sessions
// ABOUTME: Newest-first list with duration, exercises, set count, and volume per workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use barbell_core::constants::units::SECONDS_PER_MINUTE;
use barbell_core::models::Workout;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::snapshot::WorkoutSnapshot;

/// One row of the history list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Workout id
    pub workout_id: Uuid,
    /// Start time
    pub started_at: DateTime<Utc>,
    /// End time
    pub ended_at: Option<DateTime<Utc>>,
    /// Whole minutes between start and end, rounded
    pub duration_minutes: Option<i64>,
    /// Free-text note
    pub note: Option<String>,
    /// Exercises in order of first appearance
    pub exercises: Vec<String>,
    /// Number of sets
    pub set_count: usize,
    /// Sum of `weight x reps`
    pub total_volume: f64,
}

impl From<&Workout> for WorkoutSummary {
    fn from(workout: &Workout) -> Self {
        Self {
            workout_id: workout.id,
            started_at: workout.started_at,
            ended_at: workout.ended_at,
            duration_minutes: workout
                .duration_seconds()
                .map(|seconds| (seconds + SECONDS_PER_MINUTE / 2) / SECONDS_PER_MINUTE),
            note: workout.note.clone(),
            exercises: workout
                .exercise_names()
                .into_iter()
                .map(str::to_owned)
                .collect(),
            set_count: workout.sets.len(),
            total_volume: workout.total_volume(),
        }
    }
}

/// Completed workouts, newest first
#[must_use]
pub fn workout_history(snapshot: &WorkoutSnapshot<'_>) -> Vec<WorkoutSummary> {
    let mut workouts = snapshot.completed_chronological();
    workouts.reverse();
    workouts.into_iter().map(WorkoutSummary::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_history_is_newest_first_and_skips_active() {
        let monday = Utc.with_ymd_and_hms(2025, 5, 5, 6, 0, 0).unwrap();
        let mut early = Workout::start(monday);
        early.push_set("Squat", 100.0, 5, monday);
        early.push_set("Bench Press", 70.0, 8, monday);
        early.push_set("Squat", 100.0, 5, monday);
        early.finish(monday + Duration::seconds(61 * 60 + 31));

        let mut late = Workout::start(monday + Duration::days(2));
        late.note = Some("Deload".into());
        late.finish(monday + Duration::days(2));

        let active = Workout::start(monday + Duration::days(3));
        let workouts = vec![early.clone(), late.clone(), active];

        let history = workout_history(&WorkoutSnapshot::from_workouts(&workouts));
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].workout_id, late.id);
        assert_eq!(history[0].duration_minutes, Some(0));
        assert_eq!(history[0].note.as_deref(), Some("Deload"));
        assert_eq!(history[1].exercises, vec!["Squat", "Bench Press"]);
        assert_eq!(history[1].set_count, 3);
        assert_eq!(history[1].duration_minutes, Some(62));
        assert!((history[1].total_volume - 1560.0).abs() < f64::EPSILON);
    }
}
