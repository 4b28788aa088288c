// ABOUTME: Calorie estimation using peer-reviewed formulas
// ABOUTME: Mifflin-St Jeor RMR, TDEE via activity factor, and MET-based workout calories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Calorie Estimation
//!
//! Every function here takes the profile as a required argument; there is
//! no "current user" lookup. Weights and lengths are converted from the
//! profile's unit system to kilograms and centimeters before any formula
//! is applied.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Ainsworth, B.E., et al. (2011). Compendium of Physical Activities.
//!   *Medicine & Science in Sports & Exercise*, 43(8), 1575-1581.
//!   <https://doi.org/10.1249/MSS.0b013e31821ece12>

use barbell_core::constants::units::SECONDS_PER_HOUR_F64;
use barbell_core::models::{BiologicalSex, UserProfile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::{in_week, week_start_for};
use crate::config::{AnalyticsConfig, BmrConfig};
use crate::snapshot::WorkoutSnapshot;

/// Calorie figures for the profile screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieSummary {
    /// Resting metabolic rate in kcal/day
    pub resting_metabolic_rate: f64,
    /// Total daily energy expenditure in kcal/day
    pub total_daily_energy_expenditure: f64,
    /// Estimated kcal burned in this week's completed workouts
    pub weekly_workout_calories: f64,
}

/// Mifflin-St Jeor equation (1990)
///
/// Formula: RMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_offset`
/// - Men: +5
/// - Women: -161
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: BiologicalSex,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let sex_constant = match sex {
        BiologicalSex::Male => config.msj_male_constant,
        BiologicalSex::Female => config.msj_female_constant,
    };

    weight_component + height_component + age_component + sex_constant
}

/// Resting metabolic rate for a profile, in kcal/day
#[must_use]
pub fn resting_metabolic_rate(profile: &UserProfile, config: &AnalyticsConfig) -> f64 {
    calculate_mifflin_st_jeor(
        profile.weight_kg(),
        profile.height_cm(),
        profile.age,
        profile.sex,
        &config.bmr,
    )
}

/// Total Daily Energy Expenditure: RMR x activity factor
#[must_use]
pub fn calculate_tdee(rmr: f64, factor: f64) -> f64 {
    rmr * factor
}

/// TDEE for a profile, in kcal/day
#[must_use]
pub fn total_daily_energy_expenditure(profile: &UserProfile, config: &AnalyticsConfig) -> f64 {
    calculate_tdee(
        resting_metabolic_rate(profile, config),
        config.activity_factors.factor_for(profile.activity_level),
    )
}

/// Calories for one bout of exercise: MET x kg x hours
#[must_use]
pub fn met_calories(met: f64, weight_kg: f64, duration_seconds: i64) -> f64 {
    let hours = duration_seconds.max(0) as f64 / SECONDS_PER_HOUR_F64;
    met * weight_kg * hours
}

/// Estimated kcal burned in completed workouts started during the week containing `now`
///
/// Workouts without an end time contribute nothing.
#[must_use]
pub fn weekly_workout_calories(
    profile: &UserProfile,
    snapshot: &WorkoutSnapshot<'_>,
    now: DateTime<Utc>,
    config: &AnalyticsConfig,
) -> f64 {
    let current_week = week_start_for(now.date_naive(), config.week_start);
    let weight_kg = profile.weight_kg();

    let total: f64 = snapshot
        .completed()
        .filter(|workout| in_week(workout.started_at.date_naive(), current_week))
        .filter_map(|workout| workout.duration_seconds())
        .map(|seconds| met_calories(config.workout_met, weight_kg, seconds))
        .sum();

    debug!(week_start = %current_week, kcal = total, "Estimated weekly workout calories");
    total
}

/// RMR, TDEE and weekly workout calories together
#[must_use]
pub fn calorie_summary(
    profile: &UserProfile,
    snapshot: &WorkoutSnapshot<'_>,
    now: DateTime<Utc>,
    config: &AnalyticsConfig,
) -> CalorieSummary {
    CalorieSummary {
        resting_metabolic_rate: resting_metabolic_rate(profile, config),
        total_daily_energy_expenditure: total_daily_energy_expenditure(profile, config),
        weekly_workout_calories: weekly_workout_calories(profile, snapshot, now, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barbell_core::models::WeightUnit;

    #[test]
    fn test_mifflin_st_jeor_male() {
        let rmr = calculate_mifflin_st_jeor(80.0, 180.0, 30, BiologicalSex::Male, &BmrConfig::default());
        assert!((rmr - 1780.0).abs() < 1e-9);
    }

    #[test]
    fn test_mifflin_st_jeor_female() {
        let rmr =
            calculate_mifflin_st_jeor(60.0, 165.0, 25, BiologicalSex::Female, &BmrConfig::default());
        // 600 + 1031.25 - 125 - 161
        assert!((rmr - 1345.25).abs() < 1e-9);
    }

    #[test]
    fn test_imperial_profile_is_converted_first() {
        let config = AnalyticsConfig::default();
        let metric =
            UserProfile::new("A", 30, BiologicalSex::Male, 180.0, 80.0, WeightUnit::Kilograms);
        let imperial = UserProfile::new(
            "A",
            30,
            BiologicalSex::Male,
            180.0 / 2.54,
            80.0 / 0.453_592,
            WeightUnit::Pounds,
        );
        let a = resting_metabolic_rate(&metric, &config);
        let b = resting_metabolic_rate(&imperial, &config);
        assert!((a - b).abs() < 1e-6);
    }

    #[test]
    fn test_met_calories_one_hour() {
        assert!((met_calories(5.5, 80.0, 3600) - 440.0).abs() < 1e-9);
        assert!(met_calories(5.5, 80.0, -10).abs() < f64::EPSILON);
    }
}
