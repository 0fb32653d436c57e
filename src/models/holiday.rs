//! Public holiday model.
//!
//! This module defines the [`Holiday`] type used to describe the
//! organization-specific holiday calendar consulted during deal-day
//! calculation.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Represents a named public holiday.
///
/// Holiday collections are owned by the caller (typically loaded from a
/// [calendar configuration](crate::config::CalendarLoader)) and are read-only
/// to the calculator. A holiday only reduces deal days when it lands on what
/// would otherwise be a business day inside the engagement period.
///
/// # Example
///
/// ```
/// use dealday_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     name: "New Year's Day".to_string(),
/// };
/// assert_eq!(holiday.year(), 2025);
/// assert_eq!(holiday.month(), 1);
/// assert_eq!(holiday.day(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Revolution Day").
    pub name: String,
}

impl Holiday {
    /// Returns the calendar year of the holiday.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Returns the calendar month of the holiday (1-12).
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Returns the day of the month of the holiday (1-31).
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Returns true if the holiday falls in the given calendar month.
    pub fn is_in_month(&self, year: i32, month: u32) -> bool {
        self.year() == year && self.month() == month
    }
}
