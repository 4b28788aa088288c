// ABOUTME: Profile and body-weight commands for barbell-cli
// ABOUTME: Handles profile show/set and weight log/trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use barbell::constants::analytics::DEFAULT_WEIGHT_TREND_DAYS;
use barbell::errors::{AppError, AppResult, ErrorCode};
use barbell::intelligence::body_weight::{body_weight_trend, validate_window_days};
use barbell::models::{
    ActivityLevel, BiologicalSex, InputMethod, ThemePreference, UserProfile, WeightUnit,
};
use chrono::NaiveDate;

use super::CommandContext;
use crate::helpers::display::{format_time, format_weight};

/// Requested profile changes; `None` keeps the current value
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub sex: Option<BiologicalSex>,
    pub height: Option<f64>,
    pub body_weight: Option<f64>,
    pub waist: Option<f64>,
    pub unit: Option<WeightUnit>,
    pub activity: Option<ActivityLevel>,
    pub theme: Option<ThemePreference>,
    pub input_method: Option<InputMethod>,
    pub rest_timer: Option<u32>,
    pub photo: Option<String>,
    pub program_start: Option<NaiveDate>,
}

impl ProfileUpdate {
    /// Build a first profile; every required field must be present
    fn create(&self) -> AppResult<UserProfile> {
        let missing = |field: &str| {
            AppError::invalid_input(format!("--{field} is required when creating a profile"))
        };
        Ok(UserProfile::new(
            self.name.clone().ok_or_else(|| missing("name"))?,
            self.age.ok_or_else(|| missing("age"))?,
            self.sex.ok_or_else(|| missing("sex"))?,
            self.height.ok_or_else(|| missing("height"))?,
            self.body_weight.ok_or_else(|| missing("body-weight"))?,
            self.unit.unwrap_or_default(),
        ))
    }

    fn apply(self, mut profile: UserProfile) -> UserProfile {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(age) = self.age {
            profile.age = age;
        }
        if let Some(sex) = self.sex {
            profile.sex = sex;
        }
        if let Some(height) = self.height {
            profile.height = height;
        }
        if let Some(body_weight) = self.body_weight {
            profile.body_weight = body_weight;
        }
        if let Some(unit) = self.unit {
            profile.weight_unit = unit;
        }
        if let Some(activity) = self.activity {
            profile.activity_level = activity;
        }
        if let Some(theme) = self.theme {
            profile.theme = theme;
        }
        if let Some(input_method) = self.input_method {
            profile.input_method = input_method;
        }
        if let Some(rest_timer) = self.rest_timer {
            profile.rest_timer_secs = rest_timer;
        }
        profile.waist = self.waist.or(profile.waist);
        profile.photo_path = self.photo.or(profile.photo_path);
        profile.program_start = self.program_start.or(profile.program_start);
        profile
    }
}

fn print_profile(profile: &UserProfile) {
    let unit = profile.weight_unit;
    let length = match unit {
        WeightUnit::Pounds => "in",
        WeightUnit::Kilograms => "cm",
    };
    println!("{}", profile.name);
    println!("{}", "=".repeat(40));
    println!("   Age:         {}", profile.age);
    println!("   Sex:         {:?}", profile.sex);
    println!("   Height:      {:.1} {length}", profile.height);
    println!("   Body weight: {}", format_weight(profile.body_weight, unit));
    if let Some(waist) = profile.waist {
        println!("   Waist:       {waist:.1} {length}");
    }
    println!("   Activity:    {:?}", profile.activity_level);
    println!("   Rest timer:  {}s", profile.rest_timer_secs);
    println!("   Theme:       {:?}", profile.theme);
    println!("   Input:       {:?}", profile.input_method);
    if let Some(start) = profile.program_start {
        println!("   Program:     since {start}");
    }
}

pub fn show(context: &CommandContext) -> AppResult<()> {
    let profile = require_profile(context)?;
    context.output.emit(profile, print_profile)
}

pub fn set(context: &mut CommandContext, update: ProfileUpdate) -> AppResult<()> {
    let profile = match context.store.profile().cloned() {
        Some(current) => update.apply(current),
        None => {
            let created = update.create()?;
            update.apply(created)
        }
    };
    context.store.set_profile(profile.clone())?;
    context.output.emit(&profile, print_profile)
}

pub fn log_weight(context: &mut CommandContext, weight: f64) -> AppResult<()> {
    let unit = context.unit();
    let entry = context.store.log_weight(weight, context.now)?.clone();
    context.output.emit(&entry, |entry| {
        println!(
            "Logged {} at {}",
            format_weight(entry.weight, unit),
            format_time(entry.recorded_at)
        );
    })
}

pub fn weight_trend(context: &CommandContext, days: Option<i64>) -> AppResult<()> {
    let unit = context.unit();
    let window = validate_window_days(days.unwrap_or(DEFAULT_WEIGHT_TREND_DAYS))?;
    let trend = body_weight_trend(context.store.weight_entries(), window, context.now);
    context.output.emit(&trend, |trend| {
        let Some(trend) = trend else {
            println!("No body weight logged yet");
            return;
        };
        println!("Latest:   {}", format_weight(trend.latest, unit));
        println!("Starting: {}", format_weight(trend.starting, unit));
        println!("Change:   {:+.1} {unit}", trend.total_change);
        println!(
            "Range:    {} - {}",
            format_weight(trend.minimum, unit),
            format_weight(trend.maximum, unit)
        );
        if let Some(recent) = trend.recent_change {
            println!("Last {window} days: {recent:+.1} {unit}");
        }
    })
}

fn require_profile(context: &CommandContext) -> AppResult<&UserProfile> {
    context
        .store
        .profile()
        .ok_or_else(|| {
            AppError::new(
                ErrorCode::ResourceNotFound,
                "No profile yet; create one with `profile set`",
            )
        })
}
