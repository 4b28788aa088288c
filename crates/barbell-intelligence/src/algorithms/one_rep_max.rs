// ABOUTME: One-rep-max estimation from submaximal sets
// ABOUTME: Implements Brzycki (default) and Epley formulas with rep-range fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::fmt;
use std::str::FromStr;

use barbell_core::constants::strength::{
    BRZYCKI_NUMERATOR, BRZYCKI_REP_CEILING, EPLEY_REP_DIVISOR,
};
use barbell_core::errors::AppError;
use serde::{Deserialize, Serialize};

/// One-rep-max estimation algorithm
///
/// - `Brzycki`: `weight x 36 / (37 - reps)`, accurate below ~10 reps
/// - `Epley`: `weight x (1 + reps / 30)`, slightly more generous at higher reps
///
/// # Scientific References
///
/// - Brzycki, M. (1993). "Strength testing: predicting a one-rep max from reps-to-fatigue."
///   *JOPERD*, 64(1), 88-90.
/// - Epley, B. (1985). *Poundage Chart*. Boyd Epley Workout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OneRepMaxAlgorithm {
    /// Brzycki formula, used for personal records
    #[default]
    Brzycki,
    /// Epley formula
    Epley,
}

impl OneRepMaxAlgorithm {
    /// Estimate a one-rep max from a single set
    ///
    /// A single rep is its own max. Zero reps carry no information and fall
    /// back to the raw weight, as does Brzycki at 37 reps or more where its
    /// denominator reaches zero.
    #[must_use]
    pub fn estimate(&self, weight: f64, reps: u32) -> f64 {
        if reps <= 1 {
            return weight;
        }

        match self {
            Self::Brzycki => {
                if reps >= BRZYCKI_REP_CEILING {
                    return weight;
                }
                weight * BRZYCKI_NUMERATOR / f64::from(BRZYCKI_REP_CEILING - reps)
            }
            Self::Epley => weight * (1.0 + f64::from(reps) / EPLEY_REP_DIVISOR),
        }
    }

    /// Get algorithm name for logging and debugging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Brzycki => "brzycki",
            Self::Epley => "epley",
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::Brzycki => "weight x 36 / (37 - reps)",
            Self::Epley => "weight x (1 + reps / 30)",
        }
    }
}

impl fmt::Display for OneRepMaxAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OneRepMaxAlgorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "brzycki" => Ok(Self::Brzycki),
            "epley" => Ok(Self::Epley),
            other => Err(AppError::invalid_input(format!(
                "Unknown one-rep-max algorithm: {other}. Valid options: brzycki, epley"
            ))),
        }
    }
}

/// Brzycki estimate used throughout the personal-record computation
#[must_use]
pub fn estimated_one_rep_max(weight: f64, reps: u32) -> f64 {
    OneRepMaxAlgorithm::Brzycki.estimate(weight, reps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_rep_is_the_max() {
        assert!((estimated_one_rep_max(100.0, 1) - 100.0).abs() < f64::EPSILON);
        assert!((OneRepMaxAlgorithm::Epley.estimate(100.0, 1) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_brzycki_five_reps() {
        assert!((estimated_one_rep_max(200.0, 5) - 225.0).abs() < 1e-9);
    }

    #[test]
    fn test_brzycki_falls_back_at_ceiling() {
        assert!((estimated_one_rep_max(100.0, 37) - 100.0).abs() < f64::EPSILON);
        assert!((estimated_one_rep_max(100.0, 50) - 100.0).abs() < f64::EPSILON);
        assert!((estimated_one_rep_max(100.0, 0) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_brzycki_just_below_ceiling_is_finite() {
        let estimate = estimated_one_rep_max(100.0, 36);
        assert!((estimate - 3600.0).abs() < 1e-9);
    }

    #[test]
    fn test_epley_ten_reps() {
        let estimate = OneRepMaxAlgorithm::Epley.estimate(100.0, 10);
        assert!((estimate - 133.333_333_333).abs() < 1e-6);
    }

    #[test]
    fn test_parse_algorithm() {
        assert_eq!("Epley".parse::<OneRepMaxAlgorithm>().unwrap(), OneRepMaxAlgorithm::Epley);
        assert!("lombardi".parse::<OneRepMaxAlgorithm>().is_err());
    }
}
