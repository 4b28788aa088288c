// ABOUTME: In-memory workout store owning exercises, workouts, profile, and the weight log
// ABOUTME: Enforces the single-active-workout and contiguous set numbering invariants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Workout Store
//!
//! Every mutation goes through `&mut self`, so the borrow checker serializes
//! writers. Analytics read a [`WorkoutSnapshot`] borrowed from the store.

/// JSON file persistence
pub mod persistence;

use barbell_core::constants::limits::{MAX_SET_REPS, MAX_SET_WEIGHT};
use barbell_core::models::{
    ExerciseDefinition, MuscleGroup, SetRecord, UserProfile, WeightEntry, Workout,
};
use barbell_intelligence::snapshot::WorkoutSnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::catalog::ExerciseCatalog;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;

/// All persisted application state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutStore {
    exercises: ExerciseCatalog,
    #[serde(default)]
    workouts: Vec<Workout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    profile: Option<UserProfile>,
    #[serde(default)]
    weight_entries: Vec<WeightEntry>,
}

impl WorkoutStore {
    /// Empty store without any exercises
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh store with the preloaded exercise catalog
    #[must_use]
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self {
            exercises: ExerciseCatalog::seeded(now),
            ..Self::default()
        }
    }

    /// Check the invariants a loaded document must satisfy
    ///
    /// # Errors
    ///
    /// Returns an error if more than one workout is active, an active workout
    /// has an end time, or set numbers are not contiguous from 1
    pub fn validate(&self) -> AppResult<()> {
        let active = self.workouts.iter().filter(|workout| workout.is_active).count();
        if active > 1 {
            return Err(AppError::invalid_state(format!(
                "Store has {active} active workouts; at most one is allowed"
            )));
        }

        for workout in &self.workouts {
            if workout.is_active && workout.ended_at.is_some() {
                return Err(AppError::invalid_state(format!(
                    "Active workout {} already has an end time",
                    workout.id
                )));
            }
            for exercise in workout.exercise_names() {
                let mut numbers: Vec<u32> =
                    workout.sets_for(exercise).map(|set| set.set_number).collect();
                numbers.sort_unstable();
                if !numbers.iter().copied().eq(1..=numbers.len() as u32) {
                    return Err(AppError::invalid_state(format!(
                        "Sets of '{exercise}' in workout {} are not numbered 1..n",
                        workout.id
                    )));
                }
            }
        }

        self.exercises.validate()
    }

    // ================================================================================================
    // Read accessors
    // ================================================================================================

    /// Every workout in insertion order
    #[must_use]
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    /// The workout in progress, if any
    #[must_use]
    pub fn active_workout(&self) -> Option<&Workout> {
        self.workouts.iter().find(|workout| workout.is_active)
    }

    /// Workout by id
    #[must_use]
    pub fn workout(&self, id: Uuid) -> Option<&Workout> {
        self.workouts.iter().find(|workout| workout.id == id)
    }

    /// Most recently started finalized workout
    #[must_use]
    pub fn latest_completed_workout(&self) -> Option<&Workout> {
        self.workouts
            .iter()
            .filter(|workout| workout.is_completed())
            .max_by_key(|workout| workout.started_at)
    }

    /// The exercise catalog
    #[must_use]
    pub const fn catalog(&self) -> &ExerciseCatalog {
        &self.exercises
    }

    /// Every catalog entry
    #[must_use]
    pub fn exercises(&self) -> &[ExerciseDefinition] {
        self.exercises.as_slice()
    }

    /// The user profile, once set
    #[must_use]
    pub const fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Weight log in insertion order
    #[must_use]
    pub fn weight_entries(&self) -> &[WeightEntry] {
        &self.weight_entries
    }

    /// Read-only view for the analytics engine
    #[must_use]
    pub fn snapshot(&self) -> WorkoutSnapshot<'_> {
        WorkoutSnapshot::new(&self.workouts, self.exercises.as_slice())
    }

    // ================================================================================================
    // Workout lifecycle
    // ================================================================================================

    /// Start a new workout
    ///
    /// # Errors
    ///
    /// Returns an error if a workout is already active
    pub fn start_workout(&mut self, now: DateTime<Utc>) -> AppResult<&Workout> {
        if let Some(active) = self.active_workout() {
            return Err(AppError::invalid_state(format!(
                "Workout {} is already in progress",
                active.id
            )));
        }

        let workout = Workout::start(now);
        AppLogger::log_workout_event(workout.id, "started", now);
        self.workouts.push(workout);
        let index = self.workouts.len() - 1;
        Ok(&self.workouts[index])
    }

    /// Finalize the active workout
    ///
    /// # Errors
    ///
    /// Returns an error if no workout is active
    pub fn end_workout(&mut self, now: DateTime<Utc>) -> AppResult<&Workout> {
        let index = self.active_index()?;
        let workout = &mut self.workouts[index];
        workout.finish(now);
        if workout.sets.is_empty() {
            warn!(workout.id = %workout.id, "Ended a workout with no sets");
        }
        AppLogger::log_workout_event(workout.id, "ended", now);
        Ok(&self.workouts[index])
    }

    /// Remove the active workout and its sets
    ///
    /// # Errors
    ///
    /// Returns an error if no workout is active
    pub fn discard_active_workout(&mut self, now: DateTime<Utc>) -> AppResult<Workout> {
        let index = self.active_index()?;
        let workout = self.workouts.remove(index);
        AppLogger::log_workout_event(workout.id, "discarded", now);
        Ok(workout)
    }

    /// Replace a workout's note; blank notes clear it
    ///
    /// # Errors
    ///
    /// Returns an error if the workout does not exist
    pub fn set_workout_note(&mut self, workout_id: Uuid, note: Option<&str>) -> AppResult<()> {
        let workout = self
            .workouts
            .iter_mut()
            .find(|workout| workout.id == workout_id)
            .ok_or_else(|| AppError::not_found(format!("Workout {workout_id}")))?;
        workout.note = note
            .map(str::trim)
            .filter(|note| !note.is_empty())
            .map(str::to_owned);
        debug!(workout.id = %workout_id, has_note = workout.note.is_some(), "Updated workout note");
        Ok(())
    }

    // ================================================================================================
    // Sets
    // ================================================================================================

    /// Log a set in the active workout
    ///
    /// The set is stored under the catalog's spelling of the exercise name.
    ///
    /// # Errors
    ///
    /// Returns an error if no workout is active, the exercise is unknown, or
    /// the weight or reps are out of range
    pub fn log_set(
        &mut self,
        exercise: &str,
        weight: f64,
        reps: u32,
        now: DateTime<Utc>,
    ) -> AppResult<&SetRecord> {
        validate_set(weight, reps)?;
        let index = self.active_index()?;
        let name = self.exercises.require(exercise)?.name.clone();
        self.exercises.mark_used(&name, now)?;

        let workout = &mut self.workouts[index];
        let set = workout.push_set(name, weight, reps, now);
        AppLogger::log_set_event(set.workout_id, &set.exercise, set.set_number, "logged");
        Ok(set)
    }

    /// Delete a set and renumber the remaining sets of its exercise
    ///
    /// # Errors
    ///
    /// Returns an error if no workout holds a set with this id
    pub fn delete_set(&mut self, set_id: Uuid) -> AppResult<SetRecord> {
        let removed = self
            .workouts
            .iter_mut()
            .find_map(|workout| workout.remove_set(set_id))
            .ok_or_else(|| AppError::not_found(format!("Set {set_id}")))?;
        AppLogger::log_set_event(
            removed.workout_id,
            &removed.exercise,
            removed.set_number,
            "deleted",
        );
        Ok(removed)
    }

    // ================================================================================================
    // Catalog
    // ================================================================================================

    /// Add a custom exercise
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or taken
    pub fn add_exercise(
        &mut self,
        name: &str,
        muscle_group: MuscleGroup,
        now: DateTime<Utc>,
    ) -> AppResult<&ExerciseDefinition> {
        self.exercises.add_custom(name, muscle_group, now)
    }

    /// Rename a custom exercise and every set that references it
    ///
    /// # Errors
    ///
    /// Returns an error if the exercise is missing or preloaded, or the new name is taken
    pub fn rename_exercise(&mut self, from: &str, to: &str) -> AppResult<()> {
        let previous = self.exercises.rename_custom(from, to)?;
        let current = self.exercises.require(to)?.name.clone();
        for workout in &mut self.workouts {
            workout.rename_exercise(&previous, &current);
        }
        Ok(())
    }

    /// Delete a custom exercise that no set references
    ///
    /// # Errors
    ///
    /// Returns an error if the exercise is missing, preloaded, or still has sets
    pub fn delete_exercise(&mut self, name: &str) -> AppResult<ExerciseDefinition> {
        let stored = self.exercises.require(name)?.name.clone();
        let references = self
            .workouts
            .iter()
            .flat_map(|workout| workout.sets_for(&stored))
            .count();
        if references > 0 {
            return Err(AppError::invalid_state(format!(
                "Exercise '{stored}' is referenced by {references} sets"
            )));
        }
        self.exercises.remove_custom(&stored)
    }

    // ================================================================================================
    // Profile and body weight
    // ================================================================================================

    /// Replace the user profile
    ///
    /// # Errors
    ///
    /// Returns an error if height or body weight is not positive, or the
    /// waist measurement is present and not positive
    pub fn set_profile(&mut self, profile: UserProfile) -> AppResult<()> {
        if !is_positive(profile.height) {
            return Err(AppError::invalid_input("Height must be a positive number"));
        }
        if !is_positive(profile.body_weight) {
            return Err(AppError::invalid_input(
                "Body weight must be a positive number",
            ));
        }
        if profile.waist.is_some_and(|waist| !is_positive(waist)) {
            return Err(AppError::invalid_input("Waist must be a positive number"));
        }
        debug!(unit = %profile.weight_unit, "Profile updated");
        self.profile = Some(profile);
        Ok(())
    }

    /// Append a body-weight measurement
    ///
    /// # Errors
    ///
    /// Returns an error if the weight is not a positive number
    pub fn log_weight(&mut self, weight: f64, now: DateTime<Utc>) -> AppResult<&WeightEntry> {
        if !is_positive(weight) {
            return Err(AppError::invalid_input(
                "Body weight must be a positive number",
            ));
        }
        self.weight_entries.push(WeightEntry::new(weight, now));
        let index = self.weight_entries.len() - 1;
        debug!(weight, "Logged body weight");
        Ok(&self.weight_entries[index])
    }

    fn active_index(&self) -> AppResult<usize> {
        self.workouts
            .iter()
            .position(|workout| workout.is_active)
            .ok_or_else(|| AppError::invalid_state("No workout is in progress"))
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn validate_set(weight: f64, reps: u32) -> AppResult<()> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(AppError::invalid_input(
            "Weight must be a non-negative number",
        ));
    }
    if weight > MAX_SET_WEIGHT {
        return Err(AppError::out_of_range(format!(
            "Weight cannot exceed {MAX_SET_WEIGHT}"
        )));
    }
    if reps > MAX_SET_REPS {
        return Err(AppError::out_of_range(format!(
            "Reps cannot exceed {MAX_SET_REPS}"
        )));
    }
    Ok(())
}
