// ABOUTME: Analytics configuration for week partitioning, calorie formulas, and chart windows
// ABOUTME: Provides defaults, environment overrides, validation, and a process-wide instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Analytics Configuration
//!
//! Every engine entry point takes an [`AnalyticsConfig`] explicitly.
//! [`AnalyticsConfig::global`] exists for front ends that want the
//! environment-derived instance without threading it through themselves.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology
//! - MET values: Ainsworth et al. (2011) Compendium of Physical Activities

use std::env;
use std::sync::OnceLock;

use barbell_core::constants::analytics::{DEFAULT_VOLUME_WEEKS, MAX_VOLUME_WEEKS};
use barbell_core::constants::physiology::{
    ACTIVITY_FACTOR_EXTRA_ACTIVE, ACTIVITY_FACTOR_LIGHTLY_ACTIVE,
    ACTIVITY_FACTOR_MODERATELY_ACTIVE, ACTIVITY_FACTOR_SEDENTARY, ACTIVITY_FACTOR_VERY_ACTIVE,
    MSJ_AGE_COEF, MSJ_FEMALE_CONSTANT, MSJ_HEIGHT_COEF, MSJ_MALE_CONSTANT, MSJ_WEIGHT_COEF,
    RESISTANCE_TRAINING_MET,
};
use barbell_core::models::ActivityLevel;
use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Analytics engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// First day of a calendar week
    pub week_start: Weekday,
    /// Default trailing window for the weekly volume series
    pub volume_weeks: usize,
    /// MET value applied to strength workouts
    pub workout_met: f64,
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// TDEE multipliers per activity level
    pub activity_factors: ActivityFactorsConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub extra_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::ExtraActive => self.extra_active,
        }
    }

    fn ascending(&self) -> bool {
        let factors = [
            self.sedentary,
            self.lightly_active,
            self.moderately_active,
            self.very_active,
            self.extra_active,
        ];
        factors[0] >= 1.0 && factors.windows(2).all(|pair| pair[0] < pair[1])
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: MSJ_WEIGHT_COEF,
            msj_height_coef: MSJ_HEIGHT_COEF,
            msj_age_coef: MSJ_AGE_COEF,
            msj_male_constant: MSJ_MALE_CONSTANT,
            msj_female_constant: MSJ_FEMALE_CONSTANT,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: ACTIVITY_FACTOR_SEDENTARY,
            lightly_active: ACTIVITY_FACTOR_LIGHTLY_ACTIVE,
            moderately_active: ACTIVITY_FACTOR_MODERATELY_ACTIVE,
            very_active: ACTIVITY_FACTOR_VERY_ACTIVE,
            extra_active: ACTIVITY_FACTOR_EXTRA_ACTIVE,
        }
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            week_start: Weekday::Mon,
            volume_weeks: DEFAULT_VOLUME_WEEKS,
            workout_met: RESISTANCE_TRAINING_MET,
            bmr: BmrConfig::default(),
            activity_factors: ActivityFactorsConfig::default(),
        }
    }
}

/// Global configuration singleton
static ANALYTICS_CONFIG: OnceLock<AnalyticsConfig> = OnceLock::new();

impl AnalyticsConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ANALYTICS_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!("Failed to load analytics config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.volume_weeks == 0 || self.volume_weeks > MAX_VOLUME_WEEKS {
            return Err(ConfigError::InvalidRange(
                "volume_weeks must be between 1 and 520",
            ));
        }

        if !self.workout_met.is_finite() || self.workout_met <= 0.0 || self.workout_met > 20.0 {
            return Err(ConfigError::ValueOutOfRange(
                "workout_met must be greater than 0 and at most 20",
            ));
        }

        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Mifflin-St Jeor weight and height coefficients must be positive",
            ));
        }

        if !self.activity_factors.ascending() {
            return Err(ConfigError::InvalidRange(
                "Activity factors must start at 1.0 or above and increase with activity",
            ));
        }

        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(val) = read_env("BARBELL_WEEK_START")? {
            self.week_start = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid BARBELL_WEEK_START".into()))?;
        }

        if let Some(val) = read_env("BARBELL_VOLUME_WEEKS")? {
            self.volume_weeks = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid BARBELL_VOLUME_WEEKS".into()))?;
        }

        if let Some(val) = read_env("BARBELL_WORKOUT_MET")? {
            self.workout_met = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid BARBELL_WORKOUT_MET".into()))?;
        }

        Ok(self)
    }
}

/// Read an optional environment variable, treating absence as `None`
fn read_env(name: &str) -> Result<Option<String>, ConfigError> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
