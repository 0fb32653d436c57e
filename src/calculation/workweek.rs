//! Work-week classification logic.
//!
//! This module provides the [`WorkWeek`] type for classifying calendar dates
//! as business or weekend days under a configurable weekend convention, and
//! for counting the business days in a calendar month.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The classification of a single calendar day.
///
/// # Example
///
/// ```
/// use dealday_engine::calculation::DayKind;
///
/// let kind = DayKind::Weekend;
/// assert_eq!(format!("{:?}", kind), "Weekend");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// A day that counts toward the working-day tally.
    Business,
    /// A day excluded by the weekend convention.
    Weekend,
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayKind::Business => write!(f, "Business"),
            DayKind::Weekend => write!(f, "Weekend"),
        }
    }
}

/// A work-week convention: the set of weekdays treated as the weekend.
///
/// The default matches the organization's observed convention of a
/// Friday/Saturday weekend; other conventions (e.g., Saturday/Sunday) are
/// injected through [`WorkWeek::new`] or a
/// [calendar configuration](crate::config::CalendarConfig).
///
/// # Example
///
/// ```
/// use dealday_engine::calculation::WorkWeek;
/// use chrono::NaiveDate;
///
/// let work_week = WorkWeek::default();
///
/// // 2025-01-03 is a Friday
/// assert!(work_week.is_weekend(NaiveDate::from_ymd_opt(2025, 1, 3).unwrap()));
/// // 2025-01-05 is a Sunday, a business day under this convention
/// assert!(!work_week.is_weekend(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkWeek {
    weekend: Vec<Weekday>,
}

impl Default for WorkWeek {
    fn default() -> Self {
        Self {
            weekend: vec![Weekday::Fri, Weekday::Sat],
        }
    }
}

impl WorkWeek {
    /// Creates a work week with the given weekend days.
    ///
    /// # Example
    ///
    /// ```
    /// use dealday_engine::calculation::WorkWeek;
    /// use chrono::{NaiveDate, Weekday};
    ///
    /// let work_week = WorkWeek::new([Weekday::Sat, Weekday::Sun]);
    /// // 2025-01-05 is a Sunday
    /// assert!(work_week.is_weekend(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()));
    /// ```
    pub fn new(weekend: impl IntoIterator<Item = Weekday>) -> Self {
        Self {
            weekend: weekend.into_iter().collect(),
        }
    }

    /// Returns the weekend days of this convention.
    pub fn weekend_days(&self) -> &[Weekday] {
        &self.weekend
    }

    /// Returns true if the date's day-of-week falls on the weekend.
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.weekend.contains(&date.weekday())
    }

    /// Classifies a date as a business or weekend day.
    ///
    /// # Example
    ///
    /// ```
    /// use dealday_engine::calculation::{DayKind, WorkWeek};
    /// use chrono::NaiveDate;
    ///
    /// let work_week = WorkWeek::default();
    /// // 2025-01-06 is a Monday
    /// let monday = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
    /// assert_eq!(work_week.classify(monday), DayKind::Business);
    /// ```
    pub fn classify(&self, date: NaiveDate) -> DayKind {
        if self.is_weekend(date) {
            DayKind::Weekend
        } else {
            DayKind::Business
        }
    }

    /// Counts the non-weekend days in a calendar month.
    ///
    /// # Example
    ///
    /// ```
    /// use dealday_engine::calculation::WorkWeek;
    ///
    /// // January 2025 has 9 Friday/Saturday weekend days
    /// assert_eq!(WorkWeek::default().working_days_in_month(2025, 1), 22);
    /// ```
    pub fn working_days_in_month(&self, year: i32, month: u32) -> u32 {
        let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid first of month");
        first
            .iter_days()
            .take_while(|d| d.year() == year && d.month() == month)
            .filter(|d| !self.is_weekend(*d))
            .count() as u32
    }
}
