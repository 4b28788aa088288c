// ABOUTME: Personal record computation across all completed workouts
// ABOUTME: Heaviest set, best single-workout volume, most reps, and best estimated one-rep max
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::collections::HashMap;

use barbell_core::models::{MuscleGroup, Workout};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::algorithms::estimated_one_rep_max;
use crate::snapshot::WorkoutSnapshot;

/// A best-ever value and when it was achieved
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecordValue<T> {
    /// The record value
    pub value: T,
    /// Set timestamp, or workout start for volume records
    pub achieved_at: DateTime<Utc>,
}

impl<T: PartialOrd + Copy> RecordValue<T> {
    /// Replace when strictly better, or equal and earlier
    fn offer(slot: &mut Option<Self>, value: T, achieved_at: DateTime<Utc>) {
        let replace = slot.as_ref().is_none_or(|best| {
            value > best.value || (value == best.value && achieved_at < best.achieved_at)
        });
        if replace {
            *slot = Some(Self { value, achieved_at });
        }
    }
}

/// Personal records for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalRecord {
    /// Exercise name
    pub exercise: String,
    /// Muscle group from the catalog, when the exercise is in it
    pub muscle_group: Option<MuscleGroup>,
    /// Heaviest single set
    pub heaviest_weight: RecordValue<f64>,
    /// Highest `weight x reps` total for the exercise within one workout
    pub best_volume: RecordValue<f64>,
    /// Most reps in a single set
    pub most_reps: RecordValue<u32>,
    /// Highest Brzycki one-rep-max estimate
    pub best_estimated_one_rep_max: RecordValue<f64>,
}

#[derive(Default)]
struct RecordAccumulator {
    heaviest: Option<RecordValue<f64>>,
    volume: Option<RecordValue<f64>>,
    reps: Option<RecordValue<u32>>,
    one_rep_max: Option<RecordValue<f64>>,
}

impl RecordAccumulator {
    fn absorb_workout(&mut self, workout: &Workout, exercise: &str) {
        let mut workout_volume = 0.0;
        for set in workout.sets_for(exercise) {
            RecordValue::offer(&mut self.heaviest, set.weight, set.logged_at);
            RecordValue::offer(&mut self.reps, set.reps, set.logged_at);
            RecordValue::offer(
                &mut self.one_rep_max,
                estimated_one_rep_max(set.weight, set.reps),
                set.logged_at,
            );
            workout_volume += set.volume();
        }
        RecordValue::offer(&mut self.volume, workout_volume, workout.started_at);
    }

    fn finish(self, exercise: String, muscle_group: Option<MuscleGroup>) -> Option<PersonalRecord> {
        Some(PersonalRecord {
            exercise,
            muscle_group,
            heaviest_weight: self.heaviest?,
            best_volume: self.volume?,
            most_reps: self.reps?,
            best_estimated_one_rep_max: self.one_rep_max?,
        })
    }
}

/// Compute one record per exercise that has at least one set in a completed workout
///
/// Sorted by exercise name (case-insensitive) for stable display.
#[must_use]
pub fn personal_records(snapshot: &WorkoutSnapshot<'_>) -> Vec<PersonalRecord> {
    let mut accumulators: HashMap<&str, RecordAccumulator> = HashMap::new();

    for workout in snapshot.completed() {
        for exercise in workout.exercise_names() {
            accumulators
                .entry(exercise)
                .or_default()
                .absorb_workout(workout, exercise);
        }
    }

    let mut records: Vec<PersonalRecord> = accumulators
        .into_iter()
        .filter_map(|(exercise, accumulator)| {
            accumulator.finish(exercise.to_owned(), snapshot.muscle_group_of(exercise))
        })
        .collect();

    records.sort_by(|a, b| {
        a.exercise
            .to_lowercase()
            .cmp(&b.exercise.to_lowercase())
            .then_with(|| a.exercise.cmp(&b.exercise))
    });

    debug!(exercises = records.len(), "Computed personal records");
    records
}

/// Personal records for a single exercise
#[must_use]
pub fn personal_record_for(snapshot: &WorkoutSnapshot<'_>, exercise: &str) -> Option<PersonalRecord> {
    let mut accumulator = RecordAccumulator::default();
    for workout in snapshot.completed().filter(|workout| workout.includes(exercise)) {
        accumulator.absorb_workout(workout, exercise);
    }
    accumulator.finish(exercise.to_owned(), snapshot.muscle_group_of(exercise))
}

#[cfg(test)]
mod tests {
    use super::*;
    use barbell_core::models::ExerciseDefinition;
    use chrono::{Duration, TimeZone};

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0).unwrap()
    }

    fn workout(day: u32, sets: &[(&str, f64, u32)]) -> Workout {
        let start = at(day, 8);
        let mut workout = Workout::start(start);
        for (offset, (exercise, weight, reps)) in (1_i64..).zip(sets) {
            workout.push_set(*exercise, *weight, *reps, start + Duration::minutes(offset));
        }
        workout.finish(start + Duration::hours(1));
        workout
    }

    #[test]
    fn test_records_pick_best_values_with_dates() {
        let workouts = vec![
            workout(3, &[("Bench Press", 100.0, 5), ("Bench Press", 100.0, 5)]),
            workout(5, &[("Bench Press", 110.0, 2), ("Bench Press", 60.0, 15)]),
        ];
        let records = personal_records(&WorkoutSnapshot::from_workouts(&workouts));
        assert_eq!(records.len(), 1);

        let bench = &records[0];
        assert!((bench.heaviest_weight.value - 110.0).abs() < f64::EPSILON);
        assert_eq!(bench.heaviest_weight.achieved_at, at(5, 8) + Duration::minutes(1));
        // 1000 on day 3 vs 220 + 900 = 1120 on day 5
        assert!((bench.best_volume.value - 1120.0).abs() < f64::EPSILON);
        assert_eq!(bench.best_volume.achieved_at, at(5, 8));
        assert_eq!(bench.most_reps.value, 15);
        // 60 x 36 / 22 = 98.18, 100 x 36 / 32 = 112.5, 110 x 36 / 35 = 113.14
        assert!((bench.best_estimated_one_rep_max.value - 110.0 * 36.0 / 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_ties_resolve_to_earliest() {
        let workouts = vec![
            workout(10, &[("Squat", 140.0, 5)]),
            workout(4, &[("Squat", 140.0, 5)]),
        ];
        let records = personal_records(&WorkoutSnapshot::from_workouts(&workouts));
        let squat = &records[0];
        assert_eq!(squat.heaviest_weight.achieved_at, at(4, 8) + Duration::minutes(1));
        assert_eq!(squat.best_volume.achieved_at, at(4, 8));
        assert_eq!(squat.most_reps.achieved_at, at(4, 8) + Duration::minutes(1));
    }

    #[test]
    fn test_active_workout_is_ignored() {
        let mut active = Workout::start(at(12, 8));
        active.push_set("Deadlift", 250.0, 1, at(12, 9));
        let workouts = vec![workout(3, &[("Deadlift", 200.0, 1)]), active];

        let records = personal_records(&WorkoutSnapshot::from_workouts(&workouts));
        assert!((records[0].heaviest_weight.value - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sorted_by_name_with_muscle_groups() {
        let workouts = vec![workout(
            3,
            &[("squat", 100.0, 5), ("Bench Press", 80.0, 5), ("Arnold Press", 20.0, 10)],
        )];
        let catalog = vec![ExerciseDefinition::preloaded(
            "Bench Press",
            MuscleGroup::Chest,
            at(1, 0),
        )];
        let records = personal_records(&WorkoutSnapshot::new(&workouts, &catalog));
        let names: Vec<&str> = records.iter().map(|r| r.exercise.as_str()).collect();
        assert_eq!(names, vec!["Arnold Press", "Bench Press", "squat"]);
        assert_eq!(records[1].muscle_group, Some(MuscleGroup::Chest));
        assert_eq!(records[0].muscle_group, None);
    }

    #[test]
    fn test_single_exercise_lookup() {
        let workouts = vec![workout(3, &[("Row", 60.0, 10), ("Squat", 100.0, 5)])];
        let snapshot = WorkoutSnapshot::from_workouts(&workouts);
        let row = personal_record_for(&snapshot, "Row").unwrap();
        assert_eq!(row.most_reps.value, 10);
        assert!(personal_record_for(&snapshot, "Curl").is_none());
    }
}
