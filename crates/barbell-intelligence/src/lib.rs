// ABOUTME: Progress analytics engine for the Barbell weightlifting log
// ABOUTME: Pure functions over a workout snapshot producing records, trends, statistics, and calories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Barbell Intelligence
//!
//! Derives read-only summaries from logged workouts. Every function borrows
//! a [`WorkoutSnapshot`] and recomputes from scratch; there is no cache and
//! no observer graph. Only completed workouts feed the analytics, except
//! [`statistics::total_sets_all_time`], which also counts the active one.
//!
//! ## Modules
//!
//! - **analyzer**: [`ProgressAnalytics`] facade
//! - **personal_records**: heaviest set, best volume, most reps, best estimated 1RM
//! - **volume**: zero-filled weekly volume trend
//! - **progression**: per-lift max-weight series
//! - **statistics**: dashboard counters
//! - **calories**: Mifflin-St Jeor RMR, TDEE, MET workout calories
//! - **comparison**: today's sets against the previous workout
//! - **history**: newest-first workout summaries
//! - **body_weight**: weight-log trend
//! - **algorithms**: one-rep-max estimators
//! - **config**: [`AnalyticsConfig`] with environment overrides

/// One-rep-max estimation algorithms
pub mod algorithms;

/// Facade over a snapshot
pub mod analyzer;

/// Body-weight trend
pub mod body_weight;

/// Calendar week helpers
pub mod calendar;

/// Calorie estimation
pub mod calories;

/// Previous-performance comparison
pub mod comparison;

/// Analytics configuration
pub mod config;

/// Workout history summaries
pub mod history;

/// Personal records
pub mod personal_records;

/// Per-lift progression series
pub mod progression;

/// Read-only input view
pub mod snapshot;

/// Workout statistics
pub mod statistics;

/// Weekly volume trend
pub mod volume;

pub use algorithms::{estimated_one_rep_max, OneRepMaxAlgorithm};
pub use analyzer::ProgressAnalytics;
pub use config::AnalyticsConfig;
pub use snapshot::WorkoutSnapshot;
