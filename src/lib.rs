// ABOUTME: Main library entry point for the Barbell weightlifting log
// ABOUTME: Workout store, exercise catalog, persistence, configuration, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Barbell
//!
//! A personal weightlifting log. Log sets against an exercise catalog,
//! compare them with the previous session, track body weight, and derive
//! progress analytics from the history.
//!
//! ## Architecture
//!
//! - **`barbell-core`**: error types, constants, and domain models
//! - **`barbell-intelligence`**: the progress analytics engine
//! - **this crate**: the store that owns the data and enforces its
//!   invariants, JSON persistence, configuration, logging, and the
//!   `barbell-cli` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use barbell::intelligence::ProgressAnalytics;
//! use barbell::store::WorkoutStore;
//! use barbell::errors::AppResult;
//! use chrono::Utc;
//!
//! fn main() -> AppResult<()> {
//!     let mut store = WorkoutStore::seeded(Utc::now());
//!     store.start_workout(Utc::now())?;
//!     store.log_set("Squat", 225.0, 5, Utc::now())?;
//!     store.end_workout(Utc::now())?;
//!
//!     let analytics = ProgressAnalytics::new(store.snapshot(), Utc::now());
//!     println!("{} personal records", analytics.personal_records().len());
//!     Ok(())
//! }
//! ```

/// Exercise catalog with the preloaded seed
pub mod catalog;

/// Environment configuration
pub mod config;

/// Application constants
pub mod constants;

/// Error types shared with `barbell-core`
pub mod errors;

/// Logging setup and structured logging helpers
pub mod logging;

/// Workout store and persistence
pub mod store;

/// Domain models from `barbell-core`
pub use barbell_core::models;

/// Progress analytics engine
pub use barbell_intelligence as intelligence;
