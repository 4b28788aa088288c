// ABOUTME: Progress analytics commands for barbell-cli
// ABOUTME: Handles stats, records, volume, progression, compare, calories, and history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use barbell::errors::{AppError, AppResult, ErrorCode};
use barbell::intelligence::comparison::ComparisonOutcome;
use barbell::intelligence::personal_records::PersonalRecord;
use barbell::intelligence::volume::validate_volume_window;
use serde_json::json;
use tracing::debug;
use uuid::Uuid;

use super::workout::resolve_workout;
use super::CommandContext;
use crate::helpers::display::{format_time, format_weight};

pub fn stats(context: &CommandContext) -> AppResult<()> {
    let stats = context.analytics().statistics();
    context.output.emit(&stats, |stats| {
        println!("Completed workouts: {}", stats.total_completed_workouts);
        println!("This week:          {}", stats.workouts_this_week);
        println!("Average duration:   {} min", stats.average_duration_minutes);
        println!("Sets logged:        {}", stats.total_sets_all_time);
    })
}

pub fn records(context: &CommandContext, exercise: Option<&str>) -> AppResult<()> {
    let analytics = context.analytics();
    let records: Vec<PersonalRecord> = match exercise {
        Some(name) => {
            let name = &context.store.catalog().require(name)?.name;
            analytics.personal_record(name).into_iter().collect()
        }
        None => analytics.personal_records(),
    };
    let unit = context.unit();
    context.output.emit(&records, |records| {
        if records.is_empty() {
            println!("No personal records yet");
        }
        for record in records {
            println!("{}", record.exercise);
            println!(
                "   Heaviest:   {}  ({})",
                format_weight(record.heaviest_weight.value, unit),
                format_time(record.heaviest_weight.achieved_at)
            );
            println!(
                "   Volume:     {}  ({})",
                format_weight(record.best_volume.value, unit),
                format_time(record.best_volume.achieved_at)
            );
            println!(
                "   Most reps:  {}  ({})",
                record.most_reps.value,
                format_time(record.most_reps.achieved_at)
            );
            println!(
                "   Est. 1RM:   {}  ({})",
                format_weight(record.best_estimated_one_rep_max.value, unit),
                format_time(record.best_estimated_one_rep_max.achieved_at)
            );
        }
    })
}

pub fn volume(context: &CommandContext, weeks: Option<usize>) -> AppResult<()> {
    let weeks = weeks.map(validate_volume_window).transpose()?;
    let analytics = context.analytics();
    let volumes = weeks.map_or_else(
        || analytics.default_weekly_volumes(),
        |weeks| analytics.weekly_volumes(weeks),
    );
    let unit = context.unit();
    context.output.emit(&volumes, |volumes| {
        for week in volumes {
            println!("{:<8} {}", week.label, format_weight(week.total_volume, unit));
        }
    })
}

pub fn progression(context: &CommandContext, exercise: &str) -> AppResult<()> {
    let name = &context.store.catalog().require(exercise)?.name;
    let points = context.analytics().progression(name);
    let unit = context.unit();
    context.output.emit(&points, |points| {
        if points.is_empty() {
            println!("No completed workouts include {name}");
        }
        for point in points {
            println!(
                "{}  {}",
                format_time(point.date),
                format_weight(point.max_weight, unit)
            );
        }
    })
}

pub fn compare(context: &CommandContext, exercise: &str, workout_id: Option<Uuid>) -> AppResult<()> {
    let name = &context.store.catalog().require(exercise)?.name;
    let reference = resolve_workout(context, workout_id)?;
    let analytics = context.analytics();
    let previous = analytics.previous_performance(name, reference);
    let comparisons = analytics.compare(name, reference);
    debug!(
        workout.id = %reference.id,
        previous = ?previous.as_ref().map(|performance| performance.workout_id),
        "Compared sets"
    );

    let unit = context.unit();
    let report = json!({
        "exercise": name,
        "workout_id": reference.id,
        "previous": previous,
        "sets": comparisons,
    });
    context.output.emit(&report, |_| {
        let baseline = previous.as_ref().map_or_else(
            || "no earlier workout with this exercise".to_owned(),
            |performance| format!("compared with {}", format_time(performance.started_at)),
        );
        println!("{name}: {baseline}");
        for comparison in &comparisons {
            let current = comparison.current;
            let before = comparison.previous.map_or_else(
                || "-".to_owned(),
                |set| format!("{} x {}", format_weight(set.weight, unit), set.reps),
            );
            let verdict = match comparison.outcome {
                ComparisonOutcome::Improved => "improved",
                ComparisonOutcome::Matched => "matched",
                ComparisonOutcome::Declined => "declined",
                ComparisonOutcome::New => "new",
            };
            println!(
                "   #{} {} x {}   last: {before}   {verdict}",
                current.set_number,
                format_weight(current.weight, unit),
                current.reps
            );
        }
    })
}

pub fn calories(context: &CommandContext) -> AppResult<()> {
    let profile = context.store.profile().ok_or_else(|| {
        AppError::new(
            ErrorCode::ResourceNotFound,
            "Calorie estimates need a profile; create one with `profile set`",
        )
    })?;
    let summary = context.analytics().calories(profile);
    context.output.emit(&summary, |summary| {
        println!("Resting metabolic rate: {:.0} kcal/day", summary.resting_metabolic_rate);
        println!(
            "Daily energy use:       {:.0} kcal/day",
            summary.total_daily_energy_expenditure
        );
        println!(
            "Workouts this week:     {:.0} kcal",
            summary.weekly_workout_calories
        );
    })
}

pub fn history(context: &CommandContext, limit: Option<usize>) -> AppResult<()> {
    let mut summaries = context.analytics().history();
    if let Some(limit) = limit {
        summaries.truncate(limit);
    }
    let unit = context.unit();
    context.output.emit(&summaries, |summaries| {
        if summaries.is_empty() {
            println!("No completed workouts yet");
        }
        for summary in summaries {
            let minutes = summary
                .duration_minutes
                .map_or_else(|| "-".to_owned(), |minutes| format!("{minutes} min"));
            println!(
                "{}  {:>7}  {:>3} sets  {}  {}",
                format_time(summary.started_at),
                minutes,
                summary.set_count,
                format_weight(summary.total_volume, unit),
                summary.exercises.join(", ")
            );
            if let Some(note) = &summary.note {
                println!("      {note}");
            }
        }
    })
}
