// ABOUTME: Configuration module for the analytics engine
// ABOUTME: Re-exports analytics configuration types and configuration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Analytics tunables (week start, windows, MET, BMR coefficients)
pub mod analytics;
/// Configuration error types
pub mod error;

pub use analytics::{ActivityFactorsConfig, AnalyticsConfig, BmrConfig};
pub use error::ConfigError;
