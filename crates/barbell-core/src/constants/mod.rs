// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversion factors, physiological defaults, and input limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Unit conversion and measurement constants
pub mod units {
    /// Kilograms per pound
    pub const KG_PER_LB: f64 = 0.453_592;
    /// Centimeters per inch
    pub const CM_PER_INCH: f64 = 2.54;
    /// Seconds per minute
    pub const SECONDS_PER_MINUTE: i64 = 60;
    /// Seconds per hour as float for duration conversions
    pub const SECONDS_PER_HOUR_F64: f64 = 3600.0;
}

/// Physiological constants used by the calorie estimates
pub mod physiology {
    /// Mifflin-St Jeor weight coefficient
    pub const MSJ_WEIGHT_COEF: f64 = 10.0;
    /// Mifflin-St Jeor height coefficient
    pub const MSJ_HEIGHT_COEF: f64 = 6.25;
    /// Mifflin-St Jeor age coefficient
    pub const MSJ_AGE_COEF: f64 = -5.0;
    /// Mifflin-St Jeor male constant
    pub const MSJ_MALE_CONSTANT: f64 = 5.0;
    /// Mifflin-St Jeor female constant
    pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;

    /// Activity factor: little or no exercise
    pub const ACTIVITY_FACTOR_SEDENTARY: f64 = 1.2;
    /// Activity factor: light exercise 1-3 days/week
    pub const ACTIVITY_FACTOR_LIGHTLY_ACTIVE: f64 = 1.375;
    /// Activity factor: moderate exercise 3-5 days/week
    pub const ACTIVITY_FACTOR_MODERATELY_ACTIVE: f64 = 1.55;
    /// Activity factor: hard exercise 6-7 days/week
    pub const ACTIVITY_FACTOR_VERY_ACTIVE: f64 = 1.725;
    /// Activity factor: twice-daily training
    pub const ACTIVITY_FACTOR_EXTRA_ACTIVE: f64 = 1.9;

    /// MET value for general resistance training
    pub const RESISTANCE_TRAINING_MET: f64 = 5.5;
}

/// Strength-training formula constants
pub mod strength {
    /// Brzycki numerator factor
    pub const BRZYCKI_NUMERATOR: f64 = 36.0;
    /// Brzycki denominator offset (37 - reps)
    pub const BRZYCKI_REP_CEILING: u32 = 37;
    /// Epley rep divisor
    pub const EPLEY_REP_DIVISOR: f64 = 30.0;
}

/// Input limits enforced by the store
pub mod limits {
    /// Longest accepted exercise name in characters
    pub const MAX_EXERCISE_NAME_LEN: usize = 64;
    /// Heaviest accepted set weight in either unit
    pub const MAX_SET_WEIGHT: f64 = 2_000.0;
    /// Most reps accepted for a single set
    pub const MAX_SET_REPS: u32 = 1_000;
    /// Default rest timer duration in seconds
    pub const DEFAULT_REST_TIMER_SECS: u32 = 90;
}

/// Defaults for analytics windows
pub mod analytics {
    /// Trailing weeks shown by the weekly volume chart
    pub const DEFAULT_VOLUME_WEEKS: usize = 8;
    /// Number of entries returned by the recent exercises list
    pub const DEFAULT_RECENT_EXERCISES: usize = 5;
    /// Trailing days used for the body-weight change figure
    pub const DEFAULT_WEIGHT_TREND_DAYS: i64 = 30;
    /// Longest volume window accepted from configuration or the command line
    pub const MAX_VOLUME_WEEKS: usize = 520;
    /// Longest body-weight window accepted from the command line
    pub const MAX_WEIGHT_TREND_DAYS: i64 = 36_500;
}
