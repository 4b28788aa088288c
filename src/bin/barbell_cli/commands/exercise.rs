// ABOUTME: Exercise catalog commands for barbell-cli
// ABOUTME: Handles list, search, add, rename, delete, and recent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use barbell::constants::analytics::DEFAULT_RECENT_EXERCISES;
use barbell::errors::AppResult;
use barbell::models::{ExerciseDefinition, MuscleGroup};

use super::CommandContext;
use crate::helpers::display::format_time;

fn print_exercises(exercises: &[&ExerciseDefinition]) {
    if exercises.is_empty() {
        println!("No exercises found");
        return;
    }
    for exercise in exercises {
        let custom = if exercise.is_custom { "  (custom)" } else { "" };
        println!("{:<32} {}{custom}", exercise.name, exercise.muscle_group);
    }
}

pub fn list(context: &CommandContext, muscle_group: Option<MuscleGroup>) -> AppResult<()> {
    let exercises = context.store.catalog().list(muscle_group);
    context
        .output
        .emit(&exercises, |exercises| print_exercises(exercises))
}

pub fn search(context: &CommandContext, query: &str) -> AppResult<()> {
    let exercises = context.store.catalog().search(query);
    context
        .output
        .emit(&exercises, |exercises| print_exercises(exercises))
}

pub fn add(context: &mut CommandContext, name: &str, muscle_group: MuscleGroup) -> AppResult<()> {
    let exercise = context
        .store
        .add_exercise(name, muscle_group, context.now)?
        .clone();
    context.output.emit(&exercise, |exercise| {
        println!("Added {} ({})", exercise.name, exercise.muscle_group);
    })
}

pub fn rename(context: &mut CommandContext, from: &str, to: &str) -> AppResult<()> {
    context.store.rename_exercise(from, to)?;
    context
        .output
        .message(&format!("Renamed '{}' to '{}'", from.trim(), to.trim()))
}

pub fn delete(context: &mut CommandContext, name: &str) -> AppResult<()> {
    let removed = context.store.delete_exercise(name)?;
    context.output.emit(&removed, |removed| {
        println!("Deleted {}", removed.name);
    })
}

pub fn recent(context: &CommandContext, limit: Option<usize>) -> AppResult<()> {
    let exercises = context
        .store
        .catalog()
        .recent(limit.unwrap_or(DEFAULT_RECENT_EXERCISES));
    context.output.emit(&exercises, |exercises| {
        if exercises.is_empty() {
            println!("No exercises logged yet");
        }
        for exercise in exercises {
            let used = exercise.last_used_at.map_or_else(String::new, format_time);
            println!("{:<32} {used}", exercise.name);
        }
    })
}
