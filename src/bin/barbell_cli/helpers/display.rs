// ABOUTME: Output formatting helpers for barbell-cli
// ABOUTME: Switches between pretty JSON and human-readable text for every command
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use barbell::errors::AppResult;
use barbell::models::{SetRecord, WeightUnit, Workout};
use chrono::{DateTime, Local, Utc};
use serde::Serialize;

/// Output mode chosen by `--json`
#[derive(Debug, Clone, Copy)]
pub struct Output {
    json: bool,
}

impl Output {
    pub const fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print `value` as JSON, or run `render` for text
    pub fn emit<T: Serialize + ?Sized>(&self, value: &T, render: impl FnOnce(&T)) -> AppResult<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            render(value);
        }
        Ok(())
    }

    /// Print a one-line confirmation, or a JSON object carrying it
    pub fn message(&self, message: &str) -> AppResult<()> {
        self.emit(&serde_json::json!({ "message": message }), |_| {
            println!("{message}");
        })
    }
}

pub fn format_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

pub fn format_weight(weight: f64, unit: WeightUnit) -> String {
    if weight.fract().abs() < f64::EPSILON {
        format!("{weight:.0} {unit}")
    } else {
        format!("{weight:.1} {unit}")
    }
}

pub fn format_set(set: &SetRecord, unit: WeightUnit) -> String {
    format!(
        "#{} {} x {}  ({})",
        set.set_number,
        format_weight(set.weight, unit),
        set.reps,
        set.id
    )
}

/// Multi-line workout listing grouped by exercise
pub fn display_workout(workout: &Workout, unit: WeightUnit) {
    let status = if workout.is_active { "in progress" } else { "completed" };
    println!("Workout {} ({status})", workout.id);
    println!("{}", "=".repeat(60));
    println!("   Started: {}", format_time(workout.started_at));
    if let Some(ended) = workout.ended_at {
        println!("   Ended:   {}", format_time(ended));
    }
    if let Some(note) = &workout.note {
        println!("   Note:    {note}");
    }
    for exercise in workout.exercise_names() {
        println!("\n{exercise}");
        let mut sets: Vec<&SetRecord> = workout.sets_for(exercise).collect();
        sets.sort_by_key(|set| set.set_number);
        for set in sets {
            println!("   {}", format_set(set, unit));
        }
    }
    println!(
        "\nTotal volume: {}",
        format_weight(workout.total_volume(), unit)
    );
}
