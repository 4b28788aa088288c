// ABOUTME: Exercise catalog entry and muscle group classification
// ABOUTME: Defines ExerciseDefinition and MuscleGroup with parsing and display implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Muscle group an exercise primarily trains
///
/// The set is fixed; exercises that do not fit a group use `Other`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    /// Pectorals
    Chest,
    /// Lats, traps, and spinal erectors
    Back,
    /// Deltoids
    Shoulders,
    /// Biceps and forearm flexors
    Biceps,
    /// Triceps
    Triceps,
    /// Quadriceps, hamstrings, and calves
    Legs,
    /// Gluteal muscles
    Glutes,
    /// Abdominals and obliques
    Core,
    /// Compound movements without a single dominant group
    FullBody,
    /// Conditioning work
    Cardio,
    /// Anything else
    Other,
}

impl MuscleGroup {
    /// All muscle groups in display order
    pub const ALL: [Self; 11] = [
        Self::Chest,
        Self::Back,
        Self::Shoulders,
        Self::Biceps,
        Self::Triceps,
        Self::Legs,
        Self::Glutes,
        Self::Core,
        Self::FullBody,
        Self::Cardio,
        Self::Other,
    ];

    /// Stable machine-readable name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Shoulders => "shoulders",
            Self::Biceps => "biceps",
            Self::Triceps => "triceps",
            Self::Legs => "legs",
            Self::Glutes => "glutes",
            Self::Core => "core",
            Self::FullBody => "full_body",
            Self::Cardio => "cardio",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MuscleGroup {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|group| group.as_str() == normalized)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown muscle group: {s}")))
    }
}

/// A named movement in the exercise catalog
///
/// Names are unique within the catalog, compared case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExerciseDefinition {
    /// Display name and identifier
    pub name: String,
    /// Primary muscle group
    pub muscle_group: MuscleGroup,
    /// True for user-created entries, false for the preloaded seed
    pub is_custom: bool,
    /// When the entry was added to the catalog
    pub created_at: DateTime<Utc>,
    /// When a set was last logged for this exercise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used_at: Option<DateTime<Utc>>,
}

impl ExerciseDefinition {
    /// Create a preloaded catalog entry
    #[must_use]
    pub fn preloaded(
        name: impl Into<String>,
        muscle_group: MuscleGroup,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            muscle_group,
            is_custom: false,
            created_at,
            last_used_at: None,
        }
    }

    /// Create a user-defined catalog entry
    #[must_use]
    pub fn custom(
        name: impl Into<String>,
        muscle_group: MuscleGroup,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            is_custom: true,
            ..Self::preloaded(name, muscle_group, created_at)
        }
    }

    /// Case-insensitive name comparison
    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }

    /// Record that a set was logged for this exercise
    pub fn mark_used(&mut self, at: DateTime<Utc>) {
        self.last_used_at = Some(self.last_used_at.map_or(at, |previous| previous.max(at)));
    }
}
