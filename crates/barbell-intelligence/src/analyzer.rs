// ABOUTME: Progress analytics facade binding a snapshot, a clock reading, and configuration
// ABOUTME: Single entry point for records, volume trend, progression, statistics, and history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Progress Analytics
//!
//! [`ProgressAnalytics`] is stateless: it borrows a [`WorkoutSnapshot`],
//! fixes "now" for week-relative answers, and recomputes every result on
//! each call. Nothing is cached, so two calls against the same snapshot
//! always agree.

use barbell_core::models::{UserProfile, Workout};
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::calories::{calorie_summary, CalorieSummary};
use crate::comparison::{compare_sets, previous_performance, PreviousPerformance, SetComparison};
use crate::config::AnalyticsConfig;
use crate::history::{workout_history, WorkoutSummary};
use crate::personal_records::{personal_record_for, personal_records, PersonalRecord};
use crate::progression::{progression, ProgressionPoint};
use crate::snapshot::WorkoutSnapshot;
use crate::statistics::{self, WorkoutStatistics};
use crate::volume::{weekly_volumes, WeeklyVolume};

/// Analytics over one snapshot at one moment
#[derive(Debug, Clone)]
pub struct ProgressAnalytics<'a> {
    snapshot: WorkoutSnapshot<'a>,
    now: DateTime<Utc>,
    config: AnalyticsConfig,
}

impl<'a> ProgressAnalytics<'a> {
    /// Analytics with default configuration
    #[must_use]
    pub fn new(snapshot: WorkoutSnapshot<'a>, now: DateTime<Utc>) -> Self {
        Self::with_config(snapshot, now, AnalyticsConfig::default())
    }

    /// Analytics with explicit configuration
    #[must_use]
    pub const fn with_config(
        snapshot: WorkoutSnapshot<'a>,
        now: DateTime<Utc>,
        config: AnalyticsConfig,
    ) -> Self {
        Self {
            snapshot,
            now,
            config,
        }
    }

    /// Configuration in effect
    #[must_use]
    pub const fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// One record per exercise with at least one completed set
    #[must_use]
    pub fn personal_records(&self) -> Vec<PersonalRecord> {
        personal_records(&self.snapshot)
    }

    /// Records for a single exercise
    #[must_use]
    pub fn personal_record(&self, exercise: &str) -> Option<PersonalRecord> {
        personal_record_for(&self.snapshot, exercise)
    }

    /// Trailing `weeks` of weekly volume ending with the current week
    #[must_use]
    pub fn weekly_volumes(&self, weeks: usize) -> Vec<WeeklyVolume> {
        debug!(weeks, week_start = ?self.config.week_start, "Computing weekly volume");
        weekly_volumes(&self.snapshot, weeks, self.config.week_start, self.now)
    }

    /// Weekly volume over the configured default window
    #[must_use]
    pub fn default_weekly_volumes(&self) -> Vec<WeeklyVolume> {
        self.weekly_volumes(self.config.volume_weeks)
    }

    /// Max-weight series for one exercise
    #[must_use]
    pub fn progression(&self, exercise: &str) -> Vec<ProgressionPoint> {
        progression(&self.snapshot, exercise)
    }

    /// Number of finalized workouts
    #[must_use]
    pub fn total_completed_workouts(&self) -> usize {
        statistics::total_completed_workouts(&self.snapshot)
    }

    /// Finalized workouts started this calendar week
    #[must_use]
    pub fn workouts_this_week(&self) -> usize {
        statistics::workouts_this_week(&self.snapshot, self.config.week_start, self.now)
    }

    /// Mean workout duration in whole minutes
    #[must_use]
    pub fn average_duration_minutes(&self) -> u64 {
        statistics::average_duration_minutes(&self.snapshot)
    }

    /// All sets ever logged, active workout included
    #[must_use]
    pub fn total_sets_all_time(&self) -> usize {
        statistics::total_sets_all_time(&self.snapshot)
    }

    /// Every dashboard counter
    #[must_use]
    pub fn statistics(&self) -> WorkoutStatistics {
        statistics::workout_statistics(&self.snapshot, self.config.week_start, self.now)
    }

    /// RMR, TDEE, and this week's workout calories for `profile`
    #[must_use]
    pub fn calories(&self, profile: &UserProfile) -> CalorieSummary {
        calorie_summary(profile, &self.snapshot, self.now, &self.config)
    }

    /// Sets of `exercise` from the latest workout before `reference`
    #[must_use]
    pub fn previous_performance(
        &self,
        exercise: &str,
        reference: &Workout,
    ) -> Option<PreviousPerformance> {
        previous_performance(&self.snapshot, exercise, reference)
    }

    /// `reference`'s sets of `exercise` compared to the previous workout's
    #[must_use]
    pub fn compare(&self, exercise: &str, reference: &Workout) -> Vec<SetComparison> {
        let previous = self.previous_performance(exercise, reference);
        compare_sets(reference, exercise, previous.as_ref())
    }

    /// Completed workouts, newest first
    #[must_use]
    pub fn history(&self) -> Vec<WorkoutSummary> {
        workout_history(&self.snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Weekday};

    #[test]
    fn test_empty_snapshot_degrades_to_empty_and_zero() {
        let workouts: Vec<Workout> = Vec::new();
        let analytics =
            ProgressAnalytics::new(WorkoutSnapshot::from_workouts(&workouts), Utc::now());

        assert!(analytics.personal_records().is_empty());
        assert!(analytics.progression("Squat").is_empty());
        assert!(analytics.history().is_empty());
        assert_eq!(analytics.total_completed_workouts(), 0);
        assert_eq!(analytics.average_duration_minutes(), 0);
        let volumes = analytics.default_weekly_volumes();
        assert_eq!(volumes.len(), 8);
        assert!(volumes.iter().all(|week| week.total_volume.abs() < f64::EPSILON));
    }

    #[test]
    fn test_week_start_follows_config() {
        // Sunday
        let now = Utc.with_ymd_and_hms(2025, 6, 8, 12, 0, 0).unwrap();
        let mut workout = Workout::start(now - Duration::hours(2));
        workout.finish(now - Duration::hours(1));
        let workouts = vec![workout];
        let snapshot = WorkoutSnapshot::from_workouts(&workouts);

        let monday_weeks = ProgressAnalytics::new(snapshot, now);
        let sunday_weeks = ProgressAnalytics::with_config(
            snapshot,
            now,
            AnalyticsConfig {
                week_start: Weekday::Sun,
                ..AnalyticsConfig::default()
            },
        );
        assert_eq!(monday_weeks.workouts_this_week(), 1);
        assert_eq!(sunday_weeks.workouts_this_week(), 1);
        assert_eq!(
            sunday_weeks.weekly_volumes(1)[0].week_start,
            now.date_naive()
        );
        assert_eq!(
            monday_weeks.weekly_volumes(1)[0].week_start,
            now.date_naive() - Duration::days(6)
        );
    }
}
