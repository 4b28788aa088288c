// ABOUTME: Exercise catalog with preloaded and custom entries
// ABOUTME: Case-insensitive lookup, search, filtered listings, and custom entry management
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Exercise Catalog
//!
//! Names are unique case-insensitively. Preloaded entries are fixed apart
//! from their last-used timestamp; custom entries may also be renamed or
//! removed. Removing an entry that sets still reference is the store's
//! decision, since only the store can see the sets.

/// Preloaded exercise list
pub mod seed;

use std::cmp::Ordering;
use std::mem;

use barbell_core::constants::limits::MAX_EXERCISE_NAME_LEN;
use barbell_core::models::{ExerciseDefinition, MuscleGroup};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use seed::SEED_EXERCISES;

/// All known exercises
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExerciseCatalog {
    exercises: Vec<ExerciseDefinition>,
}

impl ExerciseCatalog {
    /// Empty catalog
    #[must_use]
    pub const fn new() -> Self {
        Self {
            exercises: Vec::new(),
        }
    }

    /// Catalog holding the preloaded seed
    #[must_use]
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self {
            exercises: SEED_EXERCISES
                .iter()
                .map(|(name, group)| ExerciseDefinition::preloaded(*name, *group, now))
                .collect(),
        }
    }

    /// Catalog from previously stored entries
    ///
    /// # Errors
    ///
    /// Returns an error if two entries share a name ignoring case
    pub fn from_definitions(exercises: Vec<ExerciseDefinition>) -> AppResult<Self> {
        let catalog = Self { exercises };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check that names are unique ignoring case
    ///
    /// # Errors
    ///
    /// Returns an error naming the first duplicate
    pub fn validate(&self) -> AppResult<()> {
        for (index, exercise) in self.exercises.iter().enumerate() {
            if self.exercises[..index]
                .iter()
                .any(|earlier| earlier.has_name(&exercise.name))
            {
                return Err(AppError::already_exists(format!(
                    "Exercise '{}'",
                    exercise.name
                )));
            }
        }
        Ok(())
    }

    /// Every entry in insertion order
    #[must_use]
    pub fn as_slice(&self) -> &[ExerciseDefinition] {
        &self.exercises
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Whether the catalog has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Look up an entry ignoring case and surrounding whitespace
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ExerciseDefinition> {
        self.exercises.iter().find(|exercise| exercise.has_name(name))
    }

    /// Look up an entry or fail with `ResourceNotFound`
    ///
    /// # Errors
    ///
    /// Returns an error if no entry has this name
    pub fn require(&self, name: &str) -> AppResult<&ExerciseDefinition> {
        self.get(name)
            .ok_or_else(|| AppError::not_found(format!("Exercise '{}'", name.trim())))
    }

    fn position(&self, name: &str) -> AppResult<usize> {
        self.exercises
            .iter()
            .position(|exercise| exercise.has_name(name))
            .ok_or_else(|| AppError::not_found(format!("Exercise '{}'", name.trim())))
    }

    /// Add a user-defined exercise
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed name is empty, too long, or already taken
    pub fn add_custom(
        &mut self,
        name: &str,
        muscle_group: MuscleGroup,
        now: DateTime<Utc>,
    ) -> AppResult<&ExerciseDefinition> {
        let name = self.validate_new_name(name)?;
        AppLogger::log_catalog_event(&name, "added");
        self.exercises
            .push(ExerciseDefinition::custom(name, muscle_group, now));
        let index = self.exercises.len() - 1;
        Ok(&self.exercises[index])
    }

    /// Rename a custom exercise, returning the previous stored name
    ///
    /// Changing only the capitalization of a name is allowed.
    ///
    /// # Errors
    ///
    /// Returns an error if the exercise is missing or preloaded, or the new
    /// name is empty, too long, or taken by another entry
    pub fn rename_custom(&mut self, from: &str, to: &str) -> AppResult<String> {
        let index = self.position(from)?;
        if !self.exercises[index].is_custom {
            return Err(AppError::invalid_state(format!(
                "Preloaded exercise '{}' cannot be renamed",
                self.exercises[index].name
            )));
        }

        let new_name = validate_name(to)?;
        if self
            .exercises
            .iter()
            .enumerate()
            .any(|(other, exercise)| other != index && exercise.has_name(&new_name))
        {
            return Err(AppError::already_exists(format!("Exercise '{new_name}'")));
        }

        let previous = mem::replace(&mut self.exercises[index].name, new_name);
        debug!(from = %previous, to = %self.exercises[index].name, "Renamed exercise");
        AppLogger::log_catalog_event(&self.exercises[index].name, "renamed");
        Ok(previous)
    }

    /// Remove a custom exercise
    ///
    /// # Errors
    ///
    /// Returns an error if the exercise is missing or preloaded
    pub fn remove_custom(&mut self, name: &str) -> AppResult<ExerciseDefinition> {
        let index = self.position(name)?;
        if !self.exercises[index].is_custom {
            return Err(AppError::invalid_state(format!(
                "Preloaded exercise '{}' cannot be deleted",
                self.exercises[index].name
            )));
        }
        let removed = self.exercises.remove(index);
        AppLogger::log_catalog_event(&removed.name, "deleted");
        Ok(removed)
    }

    /// Stamp an exercise as used at `at`
    ///
    /// # Errors
    ///
    /// Returns an error if no entry has this name
    pub fn mark_used(&mut self, name: &str, at: DateTime<Utc>) -> AppResult<()> {
        let index = self.position(name)?;
        self.exercises[index].mark_used(at);
        Ok(())
    }

    /// Case-insensitive substring search
    ///
    /// Names starting with the query come first, then the remaining matches;
    /// each group is alphabetical. An empty query returns every entry.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&ExerciseDefinition> {
        let needle = query.trim().to_lowercase();
        let mut matches: Vec<(bool, String, &ExerciseDefinition)> = self
            .exercises
            .iter()
            .filter_map(|exercise| {
                let folded = exercise.name.to_lowercase();
                if folded.contains(&needle) {
                    Some((!folded.starts_with(&needle), folded, exercise))
                } else {
                    None
                }
            })
            .collect();
        matches.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
        matches.into_iter().map(|(_, _, exercise)| exercise).collect()
    }

    /// Custom and preloaded entries merged and sorted by name
    #[must_use]
    pub fn list(&self, muscle_group: Option<MuscleGroup>) -> Vec<&ExerciseDefinition> {
        let mut listed: Vec<&ExerciseDefinition> = self
            .exercises
            .iter()
            .filter(|exercise| muscle_group.is_none_or(|group| exercise.muscle_group == group))
            .collect();
        listed.sort_by(|a, b| compare_names(&a.name, &b.name));
        listed
    }

    /// Most recently used exercises first, at most `limit`
    #[must_use]
    pub fn recent(&self, limit: usize) -> Vec<&ExerciseDefinition> {
        let mut used: Vec<&ExerciseDefinition> = self
            .exercises
            .iter()
            .filter(|exercise| exercise.last_used_at.is_some())
            .collect();
        used.sort_by(|a, b| {
            b.last_used_at
                .cmp(&a.last_used_at)
                .then_with(|| compare_names(&a.name, &b.name))
        });
        used.truncate(limit);
        used
    }

    fn validate_new_name(&self, name: &str) -> AppResult<String> {
        let name = validate_name(name)?;
        if self.get(&name).is_some() {
            return Err(AppError::already_exists(format!("Exercise '{name}'")));
        }
        Ok(name)
    }
}

fn validate_name(name: &str) -> AppResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_input("Exercise name cannot be empty"));
    }
    if trimmed.chars().count() > MAX_EXERCISE_NAME_LEN {
        return Err(AppError::invalid_input(format!(
            "Exercise name cannot exceed {MAX_EXERCISE_NAME_LEN} characters"
        )));
    }
    Ok(trimmed.to_owned())
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
