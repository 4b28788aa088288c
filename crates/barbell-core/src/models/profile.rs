// ABOUTME: User profile model with unit preference and physiological attributes
// ABOUTME: Defines WeightUnit conversions, BiologicalSex, ActivityLevel, and display preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::limits::DEFAULT_REST_TIMER_SECS;
use crate::constants::units::{CM_PER_INCH, KG_PER_LB};
use crate::errors::AppError;

/// Preferred unit for every stored weight
///
/// Heights and waist measurements follow the same system: inches for
/// pounds, centimeters for kilograms.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    /// Imperial pounds (lengths in inches)
    #[default]
    Pounds,
    /// Metric kilograms (lengths in centimeters)
    Kilograms,
}

impl WeightUnit {
    /// Convert a weight in this unit to kilograms
    #[must_use]
    pub fn to_kg(self, weight: f64) -> f64 {
        match self {
            Self::Pounds => weight * KG_PER_LB,
            Self::Kilograms => weight,
        }
    }

    /// Convert kilograms into this unit
    #[must_use]
    pub fn from_kg(self, kg: f64) -> f64 {
        match self {
            Self::Pounds => kg / KG_PER_LB,
            Self::Kilograms => kg,
        }
    }

    /// Convert a length in this unit system to centimeters
    #[must_use]
    pub fn length_to_cm(self, length: f64) -> f64 {
        match self {
            Self::Pounds => length * CM_PER_INCH,
            Self::Kilograms => length,
        }
    }

    /// Short label for display
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pounds => "lb",
            Self::Kilograms => "kg",
        }
    }
}

impl FromStr for WeightUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lb" | "lbs" | "pound" | "pounds" => Ok(Self::Pounds),
            "kg" | "kgs" | "kilogram" | "kilograms" => Ok(Self::Kilograms),
            other => Err(AppError::invalid_input(format!("Unknown weight unit: {other}"))),
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Biological sex used by the Mifflin-St Jeor equation
///
/// Only the two categories the equation defines are modeled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BiologicalSex {
    /// Male (+5 kcal offset)
    Male,
    /// Female (-161 kcal offset)
    Female,
}

impl FromStr for BiologicalSex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!("Unknown sex: {other}"))),
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise)
    Sedentary,
    /// Lightly active (1-3 days/week)
    LightlyActive,
    /// Moderately active (3-5 days/week)
    #[default]
    ModeratelyActive,
    /// Very active (6-7 days/week)
    VeryActive,
    /// Extra active (hard training 2x/day)
    ExtraActive,
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "lightly_active" | "light" => Ok(Self::LightlyActive),
            "moderately_active" | "moderate" => Ok(Self::ModeratelyActive),
            "very_active" | "very" => Ok(Self::VeryActive),
            "extra_active" | "extra" => Ok(Self::ExtraActive),
            other => Err(AppError::invalid_input(format!("Unknown activity level: {other}"))),
        }
    }
}

/// Visual theme preference
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreference {
    /// Follow the system setting
    #[default]
    System,
    /// Always light
    Light,
    /// Always dark
    Dark,
}

impl FromStr for ThemePreference {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "system" => Ok(Self::System),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(AppError::invalid_input(format!("Unknown theme: {other}"))),
        }
    }
}

/// How weights and reps are entered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum InputMethod {
    /// Numeric keypad
    #[default]
    Keypad,
    /// Increment/decrement stepper
    Stepper,
}

impl FromStr for InputMethod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keypad" => Ok(Self::Keypad),
            "stepper" => Ok(Self::Stepper),
            other => Err(AppError::invalid_input(format!("Unknown input method: {other}"))),
        }
    }
}

/// Singleton user profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Biological sex for the RMR equation
    pub sex: BiologicalSex,
    /// Height in inches (pounds) or centimeters (kilograms)
    pub height: f64,
    /// Body weight in the preferred unit
    pub body_weight: f64,
    /// Waist measurement in the preferred length unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist: Option<f64>,
    /// Unit every stored weight is expressed in
    #[serde(default)]
    pub weight_unit: WeightUnit,
    /// Visual theme
    #[serde(default)]
    pub theme: ThemePreference,
    /// Input method for set entry
    #[serde(default)]
    pub input_method: InputMethod,
    /// Default rest timer in seconds
    #[serde(default = "default_rest_timer")]
    pub rest_timer_secs: u32,
    /// Activity level for TDEE
    #[serde(default)]
    pub activity_level: ActivityLevel,
    /// Path to a profile photo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_path: Option<String>,
    /// When the current training program began
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_start: Option<NaiveDate>,
}

const fn default_rest_timer() -> u32 {
    DEFAULT_REST_TIMER_SECS
}

impl UserProfile {
    /// Create a profile with default preferences
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        age: u32,
        sex: BiologicalSex,
        height: f64,
        body_weight: f64,
        weight_unit: WeightUnit,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            sex,
            height,
            body_weight,
            waist: None,
            weight_unit,
            theme: ThemePreference::default(),
            input_method: InputMethod::default(),
            rest_timer_secs: DEFAULT_REST_TIMER_SECS,
            activity_level: ActivityLevel::default(),
            photo_path: None,
            program_start: None,
        }
    }

    /// Body weight converted to kilograms
    #[must_use]
    pub fn weight_kg(&self) -> f64 {
        self.weight_unit.to_kg(self.body_weight)
    }

    /// Height converted to centimeters
    #[must_use]
    pub fn height_cm(&self) -> f64 {
        self.weight_unit.length_to_cm(self.height)
    }
}
