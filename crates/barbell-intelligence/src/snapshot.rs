// ABOUTME: Read-only view over workouts and the exercise catalog
// ABOUTME: The single input every analytics computation borrows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use barbell_core::models::{ExerciseDefinition, MuscleGroup, Workout};

/// Borrowed snapshot of the store taken at the moment analytics are requested
///
/// Workouts keep the store's insertion order; functions that need
/// chronological order sort by start time themselves.
#[derive(Debug, Clone, Copy)]
pub struct WorkoutSnapshot<'a> {
    workouts: &'a [Workout],
    exercises: &'a [ExerciseDefinition],
}

impl<'a> WorkoutSnapshot<'a> {
    /// Snapshot with catalog information for muscle-group lookups
    #[must_use]
    pub const fn new(workouts: &'a [Workout], exercises: &'a [ExerciseDefinition]) -> Self {
        Self {
            workouts,
            exercises,
        }
    }

    /// Snapshot without a catalog; muscle groups resolve to `None`
    #[must_use]
    pub const fn from_workouts(workouts: &'a [Workout]) -> Self {
        Self::new(workouts, &[])
    }

    /// Every workout, including an active one
    #[must_use]
    pub const fn workouts(&self) -> &'a [Workout] {
        self.workouts
    }

    /// Finalized workouts only
    pub fn completed(&self) -> impl Iterator<Item = &'a Workout> + 'a {
        self.workouts.iter().filter(|workout| workout.is_completed())
    }

    /// Finalized workouts ordered by start time, ties kept in snapshot order
    #[must_use]
    pub fn completed_chronological(&self) -> Vec<&'a Workout> {
        let mut workouts: Vec<&Workout> = self.completed().collect();
        workouts.sort_by_key(|workout| workout.started_at);
        workouts
    }

    /// Muscle group of a catalog exercise
    #[must_use]
    pub fn muscle_group_of(&self, exercise: &str) -> Option<MuscleGroup> {
        self.exercises
            .iter()
            .find(|definition| definition.name == exercise)
            .or_else(|| {
                self.exercises
                    .iter()
                    .find(|definition| definition.has_name(exercise))
            })
            .map(|definition| definition.muscle_group)
    }
}
