// ABOUTME: Integration tests for the progress analytics engine through the store
// ABOUTME: Covers personal records, weekly volume, progression, statistics, calories, and history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use barbell::constants::analytics::MAX_VOLUME_WEEKS;
use barbell::errors::ErrorCode;
use barbell::intelligence::calories::{
    resting_metabolic_rate, total_daily_energy_expenditure, weekly_workout_calories,
};
use barbell::intelligence::volume::validate_volume_window;
use barbell::intelligence::{
    estimated_one_rep_max, AnalyticsConfig, ProgressAnalytics, WorkoutSnapshot,
};
use barbell::models::Workout;
use chrono::Duration;
use common::{finished_workout, march, metric_profile, store_with_workouts};

#[test]
fn test_one_record_per_exercise_with_sets() {
    let store = store_with_workouts(&[
        (march(3), &[("Squat", 100.0, 5), ("Bench Press", 70.0, 8)]),
        (march(5), &[("Squat", 110.0, 3), ("Deadlift", 140.0, 5)]),
    ]);
    let analytics = ProgressAnalytics::new(store.snapshot(), march(6));
    let records = analytics.personal_records();

    let names: Vec<&str> = records.iter().map(|r| r.exercise.as_str()).collect();
    assert_eq!(names, vec!["Bench Press", "Deadlift", "Squat"]);
    let squat = &records[2];
    assert!((squat.heaviest_weight.value - 110.0).abs() < f64::EPSILON);
    assert!((squat.best_volume.value - 500.0).abs() < f64::EPSILON);
    assert_eq!(squat.best_volume.achieved_at, march(3));
    assert!(squat.muscle_group.is_some());
}

#[test]
fn test_active_workout_sets_do_not_create_records() {
    let mut store = store_with_workouts(&[(march(3), &[("Squat", 100.0, 5)])]);
    store.start_workout(march(4)).unwrap();
    store.log_set("Bench Press", 80.0, 5, march(4)).unwrap();

    let analytics = ProgressAnalytics::new(store.snapshot(), march(4));
    assert_eq!(analytics.personal_records().len(), 1);
    assert_eq!(analytics.total_sets_all_time(), 2);
    assert_eq!(analytics.total_completed_workouts(), 1);
}

#[test]
fn test_brzycki_reference_values() {
    assert!((estimated_one_rep_max(100.0, 1) - 100.0).abs() < f64::EPSILON);
    assert!((estimated_one_rep_max(100.0, 37) - 100.0).abs() < f64::EPSILON);
    assert!((estimated_one_rep_max(200.0, 5) - 225.0).abs() < 1e-9);
}

#[test]
fn test_weekly_volume_has_requested_length_and_sums_window() {
    // Mondays 3, 10, 17 and 24 March; "now" is Wednesday 26 March
    let store = store_with_workouts(&[
        (march(3), &[("Squat", 100.0, 5)]),
        (march(12), &[("Squat", 100.0, 5), ("Bench Press", 60.0, 10)]),
        (march(24), &[("Deadlift", 150.0, 2)]),
    ]);
    let analytics = ProgressAnalytics::new(store.snapshot(), march(26));

    let volumes = analytics.weekly_volumes(8);
    assert_eq!(volumes.len(), 8);
    let total: f64 = volumes.iter().map(|week| week.total_volume).sum();
    assert!((total - (500.0 + 500.0 + 600.0 + 300.0)).abs() < f64::EPSILON);

    let last_four: Vec<f64> = volumes[4..].iter().map(|week| week.total_volume).collect();
    assert_eq!(last_four, vec![500.0, 1100.0, 0.0, 300.0]);
    assert_eq!(volumes[7].week_start, march(24).date_naive());
    assert_eq!(volumes[7].label, "Mar 24");

    assert!(analytics.weekly_volumes(0).is_empty());
    assert_eq!(analytics.default_weekly_volumes().len(), 8);
}

#[test]
fn test_weekly_volume_window_is_bounded() {
    let store = store_with_workouts(&[(march(24), &[("Deadlift", 150.0, 2)])]);
    let analytics = ProgressAnalytics::new(store.snapshot(), march(26));

    let volumes = analytics.weekly_volumes(usize::MAX);
    assert_eq!(volumes.len(), MAX_VOLUME_WEEKS);
    assert_eq!(volumes.last().unwrap().week_start, march(24).date_naive());

    let error = validate_volume_window(MAX_VOLUME_WEEKS + 1).unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_progression_is_chronological_and_idempotent() {
    let store = store_with_workouts(&[
        (march(10), &[("Bench Press", 100.0, 5), ("Bench Press", 105.0, 3)]),
        (march(1), &[("Bench Press", 95.0, 5), ("Bench Press", 100.0, 5)]),
        (march(5), &[("Bench Press", 110.0, 1), ("Squat", 140.0, 5)]),
        (march(7), &[("Squat", 145.0, 5)]),
    ]);
    let analytics = ProgressAnalytics::new(store.snapshot(), march(12));

    let series = analytics.progression("Bench Press");
    let weights: Vec<f64> = series.iter().map(|point| point.max_weight).collect();
    assert_eq!(weights, vec![100.0, 110.0, 105.0]);
    let dates: Vec<_> = series.iter().map(|point| point.date).collect();
    assert_eq!(dates, vec![march(1), march(5), march(10)]);
    assert_eq!(analytics.progression("Bench Press"), series);
}

#[test]
fn test_average_duration_is_zero_without_end_times() {
    let workouts = vec![
        Workout::completed(march(3), None),
        Workout::start(march(4)),
    ];
    let analytics = ProgressAnalytics::new(WorkoutSnapshot::from_workouts(&workouts), march(5));
    assert_eq!(analytics.average_duration_minutes(), 0);
    assert_eq!(analytics.total_completed_workouts(), 1);
}

#[test]
fn test_statistics_counts_current_week_only() {
    let workouts = vec![
        finished_workout(march(2), 45, &[("Squat", 100.0, 5)]),
        finished_workout(march(4), 60, &[("Squat", 100.0, 5)]),
        finished_workout(march(6), 76, &[("Squat", 100.0, 5), ("Squat", 100.0, 5)]),
    ];
    let analytics = ProgressAnalytics::new(WorkoutSnapshot::from_workouts(&workouts), march(7));
    let stats = analytics.statistics();

    assert_eq!(stats.total_completed_workouts, 3);
    // Sunday 2 March belongs to the previous Monday-based week
    assert_eq!(stats.workouts_this_week, 2);
    // (45 + 60 + 76) / 3 = 60.33
    assert_eq!(stats.average_duration_minutes, 60);
    assert_eq!(stats.total_sets_all_time, 4);
}

#[test]
fn test_calorie_estimates_for_reference_profile() {
    let config = AnalyticsConfig::default();
    let profile = metric_profile();
    assert!((resting_metabolic_rate(&profile, &config) - 1780.0).abs() < 1e-9);
    // Moderately active by default
    assert!((total_daily_energy_expenditure(&profile, &config) - 1780.0 * 1.55).abs() < 1e-9);

    let workouts = vec![
        finished_workout(march(3), 60, &[("Squat", 100.0, 5)]),
        finished_workout(march(5), 30, &[]),
        finished_workout(march(20), 60, &[]),
    ];
    let snapshot = WorkoutSnapshot::from_workouts(&workouts);
    let kcal = weekly_workout_calories(&profile, &snapshot, march(6), &config);
    // 5.5 MET x 80 kg x 1.5 h
    assert!((kcal - 660.0).abs() < 1e-9);
}

#[test]
fn test_compare_uses_latest_earlier_workout() {
    let mut store = store_with_workouts(&[
        (march(3), &[("Squat", 100.0, 5), ("Squat", 100.0, 5)]),
        (march(5), &[("Squat", 105.0, 5), ("Squat", 105.0, 4)]),
    ]);
    store.start_workout(march(7)).unwrap();
    store.log_set("Squat", 105.0, 5, march(7)).unwrap();
    store.log_set("Squat", 105.0, 5, march(7) + Duration::minutes(3)).unwrap();

    let analytics = ProgressAnalytics::new(store.snapshot(), march(7));
    let active = store.active_workout().unwrap();
    let previous = analytics.previous_performance("Squat", active).unwrap();
    assert_eq!(previous.started_at, march(5));

    let comparisons = analytics.compare("Squat", active);
    assert_eq!(comparisons.len(), 2);
    assert_eq!(comparisons[1].reps_delta, Some(1));
}

#[test]
fn test_history_is_newest_first() {
    let store = store_with_workouts(&[
        (march(3), &[("Squat", 100.0, 5)]),
        (march(10), &[("Bench Press", 80.0, 5)]),
    ]);
    let history = ProgressAnalytics::new(store.snapshot(), march(11)).history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].started_at, march(10));
    assert_eq!(history[0].duration_minutes, Some(60));
    assert_eq!(history[1].exercises, vec!["Squat"]);
}
