// ABOUTME: Weekly training volume trend over a trailing window of calendar weeks
// ABOUTME: Zero-fills empty weeks so charts always receive a continuous axis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::iter;

use barbell_core::constants::analytics::MAX_VOLUME_WEEKS;
use barbell_core::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::{week_label, week_start_for};
use crate::snapshot::WorkoutSnapshot;

/// Total volume lifted in one calendar week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyVolume {
    /// First day of the week
    pub week_start: NaiveDate,
    /// Chart label derived from `week_start`
    pub label: String,
    /// Sum of `weight x reps` over every set in the week's completed workouts
    pub total_volume: f64,
}

/// Check a user-supplied window length against [`MAX_VOLUME_WEEKS`]
///
/// # Errors
///
/// Returns `ValueOutOfRange` when `weeks` exceeds the limit
pub fn validate_volume_window(weeks: usize) -> AppResult<usize> {
    if weeks > MAX_VOLUME_WEEKS {
        return Err(AppError::out_of_range(format!(
            "Volume window cannot exceed {MAX_VOLUME_WEEKS} weeks"
        )));
    }
    Ok(weeks)
}

/// Volume per week for the `weeks` calendar weeks ending with the week containing `now`
///
/// Returns `weeks` entries in chronological order, capped at
/// [`MAX_VOLUME_WEEKS`] and at the earliest week chrono can represent.
/// Workouts outside the window, including ones dated in the future, are ignored.
#[must_use]
pub fn weekly_volumes(
    snapshot: &WorkoutSnapshot<'_>,
    weeks: usize,
    week_start: Weekday,
    now: DateTime<Utc>,
) -> Vec<WeeklyVolume> {
    if weeks == 0 {
        return Vec::new();
    }

    let weeks = weeks.min(MAX_VOLUME_WEEKS);
    let current_week = week_start_for(now.date_naive(), week_start);
    let first_week = (0..weeks)
        .rev()
        .find_map(|span| {
            let span = i64::try_from(span).ok()?;
            Duration::try_weeks(span).and_then(|offset| current_week.checked_sub_signed(offset))
        })
        .unwrap_or(current_week);

    let mut series: Vec<WeeklyVolume> = iter::successors(Some(first_week), |start| {
        start.checked_add_signed(Duration::weeks(1))
    })
    .take_while(|start| *start <= current_week)
    .map(|start| WeeklyVolume {
        week_start: start,
        label: week_label(start),
        total_volume: 0.0,
    })
    .collect();

    for workout in snapshot.completed() {
        let workout_week = week_start_for(workout.started_at.date_naive(), week_start);
        if workout_week < first_week || workout_week > current_week {
            continue;
        }
        let index = usize::try_from((workout_week - first_week).num_weeks()).unwrap_or(usize::MAX);
        if let Some(entry) = series.get_mut(index) {
            entry.total_volume += workout.total_volume();
        }
    }

    debug!(weeks, first_week = %first_week, "Computed weekly volume series");
    series
}
