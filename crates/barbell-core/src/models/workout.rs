// ABOUTME: Workout session and set record models
// ABOUTME: Owns set numbering rules and per-workout volume and duration helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One performed set of an exercise
///
/// `set_number` is 1-based and scoped to the (workout, exercise) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetRecord {
    /// Unique identifier
    pub id: Uuid,
    /// Owning workout
    pub workout_id: Uuid,
    /// Exercise name as stored in the catalog
    pub exercise: String,
    /// Load in the user's preferred unit
    pub weight: f64,
    /// Completed repetitions
    pub reps: u32,
    /// Position among this exercise's sets in the workout, starting at 1
    pub set_number: u32,
    /// When the set was logged
    pub logged_at: DateTime<Utc>,
}

impl SetRecord {
    /// Training volume of this set (`weight x reps`)
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }
}

/// A workout session and the sets logged in it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workout {
    /// Unique identifier
    pub id: Uuid,
    /// When the session started
    pub started_at: DateTime<Utc>,
    /// When the session was finalized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
    /// Free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// True while the session is in progress
    pub is_active: bool,
    /// Sets in the order they were logged
    #[serde(default)]
    pub sets: Vec<SetRecord>,
}

impl Workout {
    /// Start a new active session
    #[must_use]
    pub fn start(started_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at,
            ended_at: None,
            note: None,
            is_active: true,
            sets: Vec::new(),
        }
    }

    /// Build a finished session, mostly useful for imports and fixtures
    #[must_use]
    pub fn completed(started_at: DateTime<Utc>, ended_at: Option<DateTime<Utc>>) -> Self {
        Self {
            ended_at,
            is_active: false,
            ..Self::start(started_at)
        }
    }

    /// Whether the session has been finalized
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        !self.is_active
    }

    /// Finalize the session; the state is terminal
    pub fn finish(&mut self, ended_at: DateTime<Utc>) {
        self.ended_at = Some(ended_at.max(self.started_at));
        self.is_active = false;
    }

    /// Elapsed seconds between start and end, if the session has ended
    #[must_use]
    pub fn duration_seconds(&self) -> Option<i64> {
        self.ended_at
            .map(|end| (end - self.started_at).num_seconds().max(0))
    }

    /// Sum of `weight x reps` across every set
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.sets.iter().map(SetRecord::volume).sum()
    }

    /// Sets logged for one exercise, in logging order
    pub fn sets_for<'a>(&'a self, exercise: &'a str) -> impl Iterator<Item = &'a SetRecord> + 'a {
        self.sets.iter().filter(move |set| set.exercise == exercise)
    }

    /// Whether any set in this session belongs to the exercise
    #[must_use]
    pub fn includes(&self, exercise: &str) -> bool {
        self.sets.iter().any(|set| set.exercise == exercise)
    }

    /// Exercise names in order of first appearance
    #[must_use]
    pub fn exercise_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for set in &self.sets {
            if !names.contains(&set.exercise.as_str()) {
                names.push(&set.exercise);
            }
        }
        names
    }

    /// Set number the next set of this exercise should receive
    #[must_use]
    pub fn next_set_number(&self, exercise: &str) -> u32 {
        let count = self.sets_for(exercise).count();
        u32::try_from(count).unwrap_or(u32::MAX).saturating_add(1)
    }

    /// Append a set with the next set number for its exercise
    pub fn push_set(
        &mut self,
        exercise: impl Into<String>,
        weight: f64,
        reps: u32,
        logged_at: DateTime<Utc>,
    ) -> &SetRecord {
        let exercise = exercise.into();
        let set_number = self.next_set_number(&exercise);
        let index = self.sets.len();
        self.sets.push(SetRecord {
            id: Uuid::new_v4(),
            workout_id: self.id,
            exercise,
            weight,
            reps,
            set_number,
            logged_at,
        });
        &self.sets[index]
    }

    /// Remove a set and renumber the remaining sets of its exercise
    ///
    /// Returns the removed set, or `None` if the id is not in this workout.
    pub fn remove_set(&mut self, set_id: Uuid) -> Option<SetRecord> {
        let position = self.sets.iter().position(|set| set.id == set_id)?;
        let removed = self.sets.remove(position);
        self.renumber_sets(&removed.exercise);
        Some(removed)
    }

    /// Make one exercise's set numbers contiguous from 1, keeping their order
    pub fn renumber_sets(&mut self, exercise: &str) {
        let mut positions: Vec<usize> = self
            .sets
            .iter()
            .enumerate()
            .filter(|(_, set)| set.exercise == exercise)
            .map(|(index, _)| index)
            .collect();
        positions.sort_by_key(|&index| (self.sets[index].set_number, index));

        for (number, index) in (1_u32..).zip(positions) {
            self.sets[index].set_number = number;
        }
    }

    /// Rename every set that references an exercise
    pub fn rename_exercise(&mut self, from: &str, to: &str) {
        for set in self.sets.iter_mut().filter(|set| set.exercise == from) {
            to.clone_into(&mut set.exercise);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_set_numbers_are_scoped_per_exercise() {
        let now = Utc::now();
        let mut workout = Workout::start(now);
        workout.push_set("Bench Press", 100.0, 5, now);
        workout.push_set("Squat", 140.0, 5, now);
        workout.push_set("Bench Press", 100.0, 5, now);

        let bench: Vec<u32> = workout.sets_for("Bench Press").map(|s| s.set_number).collect();
        let squat: Vec<u32> = workout.sets_for("Squat").map(|s| s.set_number).collect();
        assert_eq!(bench, vec![1, 2]);
        assert_eq!(squat, vec![1]);
    }

    #[test]
    fn test_remove_set_renumbers_only_that_exercise() {
        let now = Utc::now();
        let mut workout = Workout::start(now);
        let first = workout.push_set("Squat", 100.0, 5, now).id;
        let second = workout.push_set("Squat", 110.0, 5, now).id;
        workout.push_set("Squat", 120.0, 5, now);
        workout.push_set("Row", 60.0, 10, now);
        workout.push_set("Row", 60.0, 10, now);

        let removed = workout.remove_set(second).unwrap();
        assert_eq!(removed.set_number, 2);

        let squat: Vec<(u32, f64)> = workout
            .sets_for("Squat")
            .map(|s| (s.set_number, s.weight))
            .collect();
        assert_eq!(squat, vec![(1, 100.0), (2, 120.0)]);
        let rows: Vec<u32> = workout.sets_for("Row").map(|s| s.set_number).collect();
        assert_eq!(rows, vec![1, 2]);
        assert!(workout.remove_set(second).is_none());
        assert!(workout.remove_set(first).is_some());
    }

    #[test]
    fn test_duration_and_volume() {
        let start = Utc::now();
        let mut workout = Workout::start(start);
        assert_eq!(workout.duration_seconds(), None);
        workout.push_set("Deadlift", 180.0, 3, start);
        workout.push_set("Deadlift", 200.0, 1, start);
        workout.finish(start + Duration::minutes(45));

        assert!(workout.is_completed());
        assert_eq!(workout.duration_seconds(), Some(45 * 60));
        assert!((workout.total_volume() - 740.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_exercise_names_keep_first_appearance_order() {
        let now = Utc::now();
        let mut workout = Workout::start(now);
        workout.push_set("Squat", 100.0, 5, now);
        workout.push_set("Bench Press", 80.0, 5, now);
        workout.push_set("Squat", 100.0, 5, now);
        assert_eq!(workout.exercise_names(), vec!["Squat", "Bench Press"]);
    }
}
