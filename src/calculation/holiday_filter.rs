//! Holiday filtering logic.
//!
//! This module restricts a caller-owned holiday collection to the entries
//! that can actually reduce deal days: holidays in a given month that land on
//! business days, optionally intersected with a clipped date range. A holiday
//! on a weekend day is already excluded from the working-day tally and must
//! not be subtracted a second time.

use chrono::NaiveDate;

use crate::models::Holiday;

use super::workweek::WorkWeek;

/// Filters holidays to those in the given month that fall on business days.
///
/// The input order is preserved and never resorted.
///
/// # Arguments
///
/// * `year` - The calendar year to match
/// * `month` - The calendar month to match (1-12)
/// * `holidays` - The caller-owned holiday collection
/// * `work_week` - The weekend convention used to discard weekend holidays
///
/// # Example
///
/// ```
/// use dealday_engine::calculation::{holidays_in_month, WorkWeek};
/// use dealday_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holidays = vec![
///     Holiday {
///         date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), // Wednesday
///         name: "New Year's Day".to_string(),
///     },
///     Holiday {
///         date: NaiveDate::from_ymd_opt(2025, 1, 25).unwrap(), // Saturday
///         name: "Revolution Day".to_string(),
///     },
/// ];
///
/// let qualifying = holidays_in_month(2025, 1, &holidays, &WorkWeek::default());
/// assert_eq!(qualifying.len(), 1);
/// assert_eq!(qualifying[0].name, "New Year's Day");
/// ```
pub fn holidays_in_month<'a>(
    year: i32,
    month: u32,
    holidays: &'a [Holiday],
    work_week: &WorkWeek,
) -> Vec<&'a Holiday> {
    holidays
        .iter()
        .filter(|h| h.is_in_month(year, month) && !work_week.is_weekend(h.date))
        .collect()
}

/// Restricts a holiday set to dates within `[start, end]` inclusive.
///
/// Used to intersect month-level holidays with the clipped day range of a
/// partial month. Holidays outside the range are silently dropped; that is
/// the intended filtering behavior, not an error.
///
/// # Example
///
/// ```
/// use dealday_engine::calculation::{holidays_in_month, holidays_in_range, WorkWeek};
/// use dealday_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holidays = vec![Holiday {
///     date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(), // Monday
///     name: "Revolution Anniversary".to_string(),
/// }];
///
/// let in_month = holidays_in_month(2025, 6, &holidays, &WorkWeek::default());
/// let clipped = holidays_in_range(
///     &in_month,
///     NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
/// );
/// assert!(clipped.is_empty());
/// ```
pub fn holidays_in_range<'a>(
    holidays: &[&'a Holiday],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<&'a Holiday> {
    holidays
        .iter()
        .filter(|h| h.date >= start && h.date <= end)
        .copied()
        .collect()
}
