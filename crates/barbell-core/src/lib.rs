// ABOUTME: Core types and constants for the Barbell weightlifting log
// ABOUTME: Foundation crate with error handling, unit conversion constants, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Barbell Core
//!
//! Foundation crate providing shared types and constants for the Barbell
//! weightlifting log. Both the analytics engine and the application crate
//! depend on it, so it is kept small and changes infrequently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Unit conversion factors and physiological defaults
//! - **models**: Exercise catalog entries, workouts, sets, profile, and weight log

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (exercises, workouts, sets, profile, weight entries)
pub mod models;
