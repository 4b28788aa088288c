// ABOUTME: Core data models for the Barbell weightlifting log
// ABOUTME: Re-exports exercise, workout, set, profile, and weight entry types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Data Models
//!
//! Plain serializable records owned by the workout store. The analytics
//! engine only ever borrows them.
//!
//! ## Core Models
//!
//! - `ExerciseDefinition`: catalog entry with a `MuscleGroup`
//! - `Workout`: a session owning its `SetRecord`s
//! - `UserProfile`: singleton profile with unit preference
//! - `WeightEntry`: body-weight log

mod exercise;
mod profile;
mod weight;
mod workout;

pub use exercise::{ExerciseDefinition, MuscleGroup};
pub use profile::{
    ActivityLevel, BiologicalSex, InputMethod, ThemePreference, UserProfile, WeightUnit,
};
pub use weight::WeightEntry;
pub use workout::{SetRecord, Workout};
