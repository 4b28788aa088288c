// ABOUTME: Integration tests for JSON store persistence on disk
// ABOUTME: Covers save/load round trips, first-launch seeding, and rejection of invalid documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs;

use barbell::errors::ErrorCode;
use barbell::models::{MuscleGroup, WeightUnit};
use barbell::store::{persistence, WorkoutStore};
use chrono::Duration;
use common::{init_test_logging, march, metric_profile, store_with_workouts};
use serde_json::Value;
use tempfile::TempDir;

#[test]
fn test_round_trip_preserves_store() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("store.json");

    let mut store = store_with_workouts(&[
        (march(3), &[("Squat", 100.0, 5), ("Squat", 102.5, 5)]),
        (march(5), &[("Bench Press", 70.0, 8)]),
    ]);
    store.add_exercise("Sled Push", MuscleGroup::Other, march(4)).unwrap();
    store.set_profile(metric_profile()).unwrap();
    store.log_weight(80.4, march(4)).unwrap();
    store.start_workout(march(6)).unwrap();
    store.log_set("Sled Push", 90.0, 1, march(6) + Duration::minutes(2)).unwrap();

    persistence::save(&store, &path).unwrap();
    let loaded = persistence::load(&path, march(7)).unwrap();

    assert_eq!(loaded.workouts(), store.workouts());
    assert_eq!(loaded.exercises(), store.exercises());
    assert_eq!(loaded.profile(), store.profile());
    assert_eq!(loaded.weight_entries(), store.weight_entries());
    assert_eq!(loaded.profile().unwrap().weight_unit, WeightUnit::Kilograms);
    assert!(loaded.active_workout().is_some());
}

#[test]
fn test_saved_document_is_versioned() {
    init_test_logging();
    let store = WorkoutStore::seeded(march(1));
    let json = persistence::to_json(&store).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["version"], 1);
    assert!(value["exercises"].as_array().is_some_and(|list| !list.is_empty()));
    assert!(value["workouts"].as_array().is_some_and(Vec::is_empty));
}

#[test]
fn test_missing_file_seeds_catalog() {
    init_test_logging();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("store.json");

    let store = persistence::load(&path, march(1)).unwrap();
    assert!(store.workouts().is_empty());
    assert!(store.catalog().get("Bench Press").is_some());
    assert!(!path.exists());
}

#[test]
fn test_save_overwrites_existing_file() {
    init_test_logging();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("store.json");

    let mut store = WorkoutStore::seeded(march(1));
    persistence::save(&store, &path).unwrap();
    store.start_workout(march(2)).unwrap();
    persistence::save(&store, &path).unwrap();

    let loaded = persistence::load(&path, march(3)).unwrap();
    assert_eq!(loaded.workouts().len(), 1);

    let leftovers = fs::read_dir(temp_dir.path()).unwrap().count();
    assert_eq!(leftovers, 1);
}

#[test]
fn test_two_active_workouts_are_rejected() {
    let store = store_with_workouts(&[(march(3), &[("Squat", 100.0, 5)])]);
    let mut value: Value = serde_json::from_str(&persistence::to_json(&store).unwrap()).unwrap();

    let mut second = value["workouts"][0].clone();
    second["id"] = Value::String("00000000-0000-4000-8000-000000000001".into());
    second["sets"] = Value::Array(Vec::new());
    value["workouts"][0]["is_active"] = Value::Bool(true);
    value["workouts"][0]["ended_at"] = Value::Null;
    second["is_active"] = Value::Bool(true);
    second["ended_at"] = Value::Null;
    value["workouts"].as_array_mut().unwrap().push(second);

    let error = persistence::from_json(&value.to_string()).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidState);
}

#[test]
fn test_gapped_set_numbers_are_rejected() {
    let store = store_with_workouts(&[(march(3), &[("Squat", 100.0, 5), ("Squat", 100.0, 5)])]);
    let mut value: Value = serde_json::from_str(&persistence::to_json(&store).unwrap()).unwrap();
    value["workouts"][0]["sets"][1]["set_number"] = Value::from(3);

    let error = persistence::from_json(&value.to_string()).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidState);
}

#[test]
fn test_newer_format_version_is_rejected() {
    init_test_logging();
    let store = WorkoutStore::new();
    let mut value: Value = serde_json::from_str(&persistence::to_json(&store).unwrap()).unwrap();
    value["version"] = Value::from(99);

    let error = persistence::from_json(&value.to_string()).unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
}

#[test]
fn test_malformed_file_is_an_error() {
    init_test_logging();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("store.json");
    fs::write(&path, "{ not json").unwrap();

    let error = persistence::load(&path, march(1)).unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}
