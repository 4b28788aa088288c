// ABOUTME: Calendar week helpers for weekly aggregation
// ABOUTME: Anchors dates to a configurable week-start day and formats week labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// First day of the calendar week containing `date`
///
/// Dates in chrono's first partial week anchor to themselves.
#[must_use]
pub fn week_start_for(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset = (7 + date.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7;
    date.checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(date)
}

/// Whether `date` falls in the week beginning at `start`
#[must_use]
pub fn in_week(date: NaiveDate, start: NaiveDate) -> bool {
    date >= start
        && start
            .checked_add_days(Days::new(7))
            .is_none_or(|end| date < end)
}

/// Short chart label for a week, e.g. `Mar 3`
#[must_use]
pub fn week_label(start: NaiveDate) -> String {
    start.format("%b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_start_monday() {
        // 2025-03-06 is a Thursday
        assert_eq!(week_start_for(date(2025, 3, 6), Weekday::Mon), date(2025, 3, 3));
        assert_eq!(week_start_for(date(2025, 3, 3), Weekday::Mon), date(2025, 3, 3));
        assert_eq!(week_start_for(date(2025, 3, 9), Weekday::Mon), date(2025, 3, 3));
    }

    #[test]
    fn test_week_start_sunday() {
        assert_eq!(week_start_for(date(2025, 3, 6), Weekday::Sun), date(2025, 3, 2));
        assert_eq!(week_start_for(date(2025, 3, 2), Weekday::Sun), date(2025, 3, 2));
        assert_eq!(week_start_for(date(2025, 3, 1), Weekday::Sun), date(2025, 2, 23));
    }

    #[test]
    fn test_calendar_edges_do_not_overflow() {
        assert!(week_start_for(NaiveDate::MIN, Weekday::Mon) >= NaiveDate::MIN);
        assert!(in_week(NaiveDate::MAX, week_start_for(NaiveDate::MAX, Weekday::Mon)));
    }

    #[test]
    fn test_in_week_bounds() {
        let start = date(2025, 3, 3);
        assert!(in_week(start, start));
        assert!(in_week(date(2025, 3, 9), start));
        assert!(!in_week(date(2025, 3, 10), start));
        assert!(!in_week(date(2025, 3, 2), start));
    }

    #[test]
    fn test_week_label() {
        assert_eq!(week_label(date(2025, 3, 3)), "Mar 3");
        assert_eq!(week_label(date(2025, 12, 29)), "Dec 29");
    }
}
