// ABOUTME: Body-weight log entry model
// ABOUTME: Append-only weight measurements independent of workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single body-weight measurement in the user's preferred unit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightEntry {
    /// Unique identifier
    pub id: Uuid,
    /// When the measurement was taken
    pub recorded_at: DateTime<Utc>,
    /// Body weight
    pub weight: f64,
}

impl WeightEntry {
    /// Create a new entry
    #[must_use]
    pub fn new(weight: f64, recorded_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at,
            weight,
        }
    }
}
