// ABOUTME: Workout session commands for barbell-cli
// ABOUTME: Handles start, end, discard, note, log, delete-set, and show
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use barbell::errors::{AppError, AppResult};
use barbell::models::Workout;
use tracing::info;
use uuid::Uuid;

use super::CommandContext;
use crate::helpers::display::{display_workout, format_set, format_time, format_weight};

pub fn start(context: &mut CommandContext) -> AppResult<()> {
    let workout = context.store.start_workout(context.now)?.clone();
    context.output.emit(&workout, |workout| {
        println!(
            "Started workout {} at {}",
            workout.id,
            format_time(workout.started_at)
        );
    })
}

pub fn end(context: &mut CommandContext) -> AppResult<()> {
    let unit = context.unit();
    let workout = context.store.end_workout(context.now)?.clone();
    info!(workout.id = %workout.id, sets = workout.sets.len(), "Workout finished");
    context.output.emit(&workout, |workout| {
        let minutes = workout.duration_seconds().unwrap_or(0) / 60;
        println!(
            "Finished workout {}: {} sets, {}, {minutes} min",
            workout.id,
            workout.sets.len(),
            format_weight(workout.total_volume(), unit)
        );
    })
}

pub fn discard(context: &mut CommandContext) -> AppResult<()> {
    let workout = context.store.discard_active_workout(context.now)?;
    context.output.emit(&workout, |workout| {
        println!(
            "Discarded workout {} and its {} sets",
            workout.id,
            workout.sets.len()
        );
    })
}

pub fn note(
    context: &mut CommandContext,
    text: Option<&str>,
    workout_id: Option<Uuid>,
) -> AppResult<()> {
    let id = match workout_id {
        Some(id) => id,
        None => active_id(context)?,
    };
    context.store.set_workout_note(id, text)?;
    let action = if text.map(str::trim).is_some_and(|text| !text.is_empty()) {
        "Saved"
    } else {
        "Cleared"
    };
    context
        .output
        .message(&format!("{action} note on workout {id}"))
}

pub fn log(context: &mut CommandContext, exercise: &str, weight: f64, reps: u32) -> AppResult<()> {
    let unit = context.unit();
    let set = context
        .store
        .log_set(exercise, weight, reps, context.now)?
        .clone();
    context.output.emit(&set, |set| {
        println!("{}  {}", set.exercise, format_set(set, unit));
    })
}

pub fn delete_set(context: &mut CommandContext, set_id: Uuid) -> AppResult<()> {
    let removed = context.store.delete_set(set_id)?;
    context.output.emit(&removed, |removed| {
        println!(
            "Deleted {} set #{}; remaining sets renumbered",
            removed.exercise, removed.set_number
        );
    })
}

pub fn show(context: &CommandContext, workout_id: Option<Uuid>) -> AppResult<()> {
    let workout = resolve_workout(context, workout_id)?;
    let unit = context.unit();
    context
        .output
        .emit(workout, |workout| display_workout(workout, unit))
}

/// Explicit id, else the active workout, else the latest completed one
pub fn resolve_workout(context: &CommandContext, workout_id: Option<Uuid>) -> AppResult<&Workout> {
    let store = &context.store;
    workout_id.map_or_else(
        || {
            store
                .active_workout()
                .or_else(|| store.latest_completed_workout())
                .ok_or_else(|| AppError::not_found("Workout"))
        },
        |id| {
            store
                .workout(id)
                .ok_or_else(|| AppError::not_found(format!("Workout {id}")))
        },
    )
}

fn active_id(context: &CommandContext) -> AppResult<Uuid> {
    context
        .store
        .active_workout()
        .map(|workout| workout.id)
        .ok_or_else(|| AppError::invalid_state("No workout is in progress; pass --workout"))
}
