// ABOUTME: Body-weight trend derived from the weight log
// ABOUTME: Chronological series with latest, starting, extremes, and trailing-window change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use barbell_core::constants::analytics::MAX_WEIGHT_TREND_DAYS;
use barbell_core::errors::{AppError, AppResult};
use barbell_core::models::WeightEntry;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A single point on the body-weight chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightPoint {
    /// Measurement time
    pub recorded_at: DateTime<Utc>,
    /// Body weight in the user's unit
    pub weight: f64,
}

/// Summary of the weight log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyWeightTrend {
    /// Entries in chronological order
    pub points: Vec<WeightPoint>,
    /// Most recent weight
    pub latest: f64,
    /// First logged weight
    pub starting: f64,
    /// `latest - starting`
    pub total_change: f64,
    /// Lowest logged weight
    pub minimum: f64,
    /// Highest logged weight
    pub maximum: f64,
    /// Change across entries within the trailing window; `None` with fewer than two
    pub recent_change: Option<f64>,
}

/// Check a user-supplied trailing window, in days
///
/// # Errors
///
/// Returns `ValueOutOfRange` for negative windows or ones longer than
/// [`MAX_WEIGHT_TREND_DAYS`]
pub fn validate_window_days(days: i64) -> AppResult<i64> {
    if !(0..=MAX_WEIGHT_TREND_DAYS).contains(&days) {
        return Err(AppError::out_of_range(format!(
            "Trend window must be between 0 and {MAX_WEIGHT_TREND_DAYS} days"
        )));
    }
    Ok(days)
}

/// Build the trend; `None` when nothing has been logged
///
/// The trailing window covers `window_days` days ending at `now`; a window
/// reaching past the earliest representable instant covers the whole log.
#[must_use]
pub fn body_weight_trend(
    entries: &[WeightEntry],
    window_days: i64,
    now: DateTime<Utc>,
) -> Option<BodyWeightTrend> {
    let mut points: Vec<WeightPoint> = entries
        .iter()
        .map(|entry| WeightPoint {
            recorded_at: entry.recorded_at,
            weight: entry.weight,
        })
        .collect();
    points.sort_by_key(|point| point.recorded_at);

    let first = *points.first()?;
    let last = *points.last()?;
    let (minimum, maximum) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), point| {
            (lo.min(point.weight), hi.max(point.weight))
        });

    let window_start = Duration::try_days(window_days.max(0))
        .and_then(|window| now.checked_sub_signed(window))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);
    let recent: Vec<&WeightPoint> = points
        .iter()
        .filter(|point| point.recorded_at >= window_start && point.recorded_at <= now)
        .collect();
    let recent_change = match (recent.first(), recent.last()) {
        (Some(oldest), Some(newest)) if recent.len() >= 2 => Some(newest.weight - oldest.weight),
        _ => None,
    };

    Some(BodyWeightTrend {
        latest: last.weight,
        starting: first.weight,
        total_change: last.weight - first.weight,
        minimum,
        maximum,
        recent_change,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use barbell_core::errors::ErrorCode;
    use chrono::TimeZone;

    #[test]
    fn test_empty_log_has_no_trend() {
        assert!(body_weight_trend(&[], 30, Utc::now()).is_none());
    }

    #[test]
    fn test_trend_orders_entries_and_measures_change() {
        let now = Utc.with_ymd_and_hms(2025, 6, 30, 12, 0, 0).unwrap();
        let entries = vec![
            WeightEntry::new(181.0, now - Duration::days(10)),
            WeightEntry::new(186.0, now - Duration::days(90)),
            WeightEntry::new(179.5, now - Duration::days(1)),
            WeightEntry::new(183.0, now - Duration::days(25)),
        ];
        let trend = body_weight_trend(&entries, 30, now).unwrap();

        assert_eq!(trend.points.len(), 4);
        assert!((trend.starting - 186.0).abs() < f64::EPSILON);
        assert!((trend.latest - 179.5).abs() < f64::EPSILON);
        assert!((trend.total_change + 6.5).abs() < f64::EPSILON);
        assert!((trend.minimum - 179.5).abs() < f64::EPSILON);
        assert!((trend.maximum - 186.0).abs() < f64::EPSILON);
        assert_eq!(trend.recent_change, Some(179.5 - 183.0));
    }

    #[test]
    fn test_unbounded_window_covers_whole_log() {
        let now = Utc.with_ymd_and_hms(2025, 6, 30, 12, 0, 0).unwrap();
        let entries = vec![
            WeightEntry::new(90.0, now - Duration::days(3650)),
            WeightEntry::new(82.0, now - Duration::days(2)),
        ];

        let trend = body_weight_trend(&entries, i64::MAX, now).unwrap();
        assert_eq!(trend.recent_change, Some(-8.0));

        let single = body_weight_trend(&[WeightEntry::new(80.0, now)], i64::MAX, now).unwrap();
        assert_eq!(single.recent_change, None);
    }

    #[test]
    fn test_window_days_limits() {
        assert_eq!(validate_window_days(30).unwrap(), 30);
        assert_eq!(validate_window_days(0).unwrap(), 0);
        for days in [-1, MAX_WEIGHT_TREND_DAYS + 1, i64::MAX] {
            let error = validate_window_days(days).unwrap_err();
            assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        }
    }

    #[test]
    fn test_single_recent_entry_has_no_recent_change() {
        let now = Utc::now();
        let entries = vec![WeightEntry::new(80.0, now)];
        let trend = body_weight_trend(&entries, 30, now).unwrap();
        assert_eq!(trend.recent_change, None);
        assert!(trend.total_change.abs() < f64::EPSILON);
    }
}
