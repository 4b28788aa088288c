// ABOUTME: JSON file persistence for the workout store
// ABOUTME: Atomic save through a sibling temp file and validated load with first-launch seeding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Store persistence
//!
//! The whole store is one pretty-printed JSON document tagged with a format
//! version. Saving writes a temporary file in the target directory and
//! renames it over the target, so readers see either the old or the new
//! document and never a partial one.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::info;

use super::WorkoutStore;
use crate::constants::storage::STORE_FORMAT_VERSION;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;

#[derive(Serialize)]
struct StoreDocumentRef<'a> {
    version: u32,
    #[serde(flatten)]
    store: &'a WorkoutStore,
}

#[derive(Deserialize)]
struct StoreDocument {
    version: u32,
    #[serde(flatten)]
    store: WorkoutStore,
}

/// Serialize the store to its on-disk JSON form
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn to_json(store: &WorkoutStore) -> AppResult<String> {
    let document = StoreDocumentRef {
        version: STORE_FORMAT_VERSION,
        store,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Parse and validate a store document
///
/// # Errors
///
/// Returns an error if the JSON is malformed, the version is newer than this
/// build understands, or the store violates its invariants
pub fn from_json(json: &str) -> AppResult<WorkoutStore> {
    let document: StoreDocument = serde_json::from_str(json)?;
    if document.version > STORE_FORMAT_VERSION {
        return Err(AppError::storage(format!(
            "Store format version {} is newer than supported version {STORE_FORMAT_VERSION}",
            document.version
        )));
    }
    document.store.validate()?;
    Ok(document.store)
}

/// Load the store, seeding a fresh one when the file does not exist
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails to parse or validate
pub fn load(path: &Path, now: DateTime<Utc>) -> AppResult<WorkoutStore> {
    let started = Instant::now();
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "No store file found, starting with the preloaded catalog");
            return Ok(WorkoutStore::seeded(now));
        }
        Err(e) => {
            return Err(AppError::storage(format!(
                "Failed to read {}: {e}",
                path.display()
            ))
            .with_source(e));
        }
    };

    let result = from_json(&json);
    AppLogger::log_storage_operation(
        "load",
        &path.display().to_string(),
        result.is_ok(),
        elapsed_ms(started),
    );
    result
}

/// Save the store atomically, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if serialization, the temp-file write, or the final rename fails
pub fn save(store: &WorkoutStore, path: &Path) -> AppResult<()> {
    let started = Instant::now();
    let json = to_json(store)?;

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut temp_file = NamedTempFile::new_in(parent)?;
    temp_file.write_all(json.as_bytes())?;
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|e| {
        AppError::storage(format!("Failed to replace {}: {}", path.display(), e.error))
            .with_source(e.error)
    })?;

    AppLogger::log_storage_operation(
        "save",
        &path.display().to_string(),
        true,
        elapsed_ms(started),
    );
    Ok(())
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
