//! Monthly accumulation logic.
//!
//! This module clips a calendar month to an engagement period and tallies
//! business days, weekend days, and qualifying holidays for the clipped
//! range. It also provides the month enumerator that drives the per-month
//! breakdown of a period.

use chrono::{Datelike, NaiveDate};

use crate::models::{EngagementPeriod, Holiday, MonthRecord};

use super::holiday_filter::{holidays_in_month, holidays_in_range};
use super::workweek::{DayKind, WorkWeek};

/// Returns the English name of a calendar month (1-12).
///
/// # Example
///
/// ```
/// use dealday_engine::calculation::month_name;
///
/// assert_eq!(month_name(1), "January");
/// assert_eq!(month_name(12), "December");
/// ```
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

/// Returns the first and last day of a calendar month.
///
/// # Example
///
/// ```
/// use dealday_engine::calculation::month_bounds;
/// use chrono::NaiveDate;
///
/// let (first, last) = month_bounds(2025, 2);
/// assert_eq!(first, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
/// assert_eq!(last, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
/// ```
pub fn month_bounds(year: i32, month: u32) -> (NaiveDate, NaiveDate) {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid first of month");
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("valid first of next month")
        .pred_opt()
        .expect("valid last of month");
    (first, last)
}

/// A finite, chronological, restartable enumeration of the `(year, month)`
/// pairs an engagement period touches.
///
/// Produced by [`months_touched`]. Cloning the iterator yields an
/// independent cursor, so the enumeration can be walked more than once.
#[derive(Debug, Clone)]
pub struct Months {
    next: Option<(i32, u32)>,
    last: (i32, u32),
}

impl Iterator for Months {
    type Item = (i32, u32);

    fn next(&mut self) -> Option<(i32, u32)> {
        let current = self.next?;
        self.next = if current == self.last {
            None
        } else {
            let (year, month) = current;
            Some(if month == 12 {
                (year + 1, 1)
            } else {
                (year, month + 1)
            })
        };
        Some(current)
    }
}

/// Enumerates every calendar month the period touches, in chronological
/// order, including partial months at both ends.
///
/// An inverted period (end before start) produces no months.
///
/// # Example
///
/// ```
/// use dealday_engine::calculation::months_touched;
/// use dealday_engine::models::EngagementPeriod;
/// use chrono::NaiveDate;
///
/// let period = EngagementPeriod {
///     start_date: NaiveDate::from_ymd_opt(2024, 11, 20).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
/// };
/// let months: Vec<_> = months_touched(&period).collect();
/// assert_eq!(months, vec![(2024, 11), (2024, 12), (2025, 1), (2025, 2)]);
/// ```
pub fn months_touched(period: &EngagementPeriod) -> Months {
    let next = if period.is_valid() {
        Some((period.start_date.year(), period.start_date.month()))
    } else {
        None
    };
    Months {
        next,
        last: (period.end_date.year(), period.end_date.month()),
    }
}

/// The result of tallying one calendar month against an engagement period.
///
/// Bundles the [`MonthRecord`] with the business-day count of the clipped
/// range so callers can detect when the deal-day floor was applied
/// (`record.holiday_count > business_day_count`).
#[derive(Debug, Clone)]
pub struct MonthTally {
    /// The per-month breakdown record.
    pub record: MonthRecord,
    /// Business days in the clipped range, before holiday subtraction.
    pub business_day_count: u32,
}

/// Tallies one calendar month of a full-time engagement.
///
/// The month is clipped to the engagement period, every day of the clipped
/// range is classified under the work-week convention, and qualifying
/// holidays (in-month, on a business day, inside the clipped range) are
/// subtracted from the business-day count to produce the deal days, floored
/// at zero.
///
/// The caller is expected to pass only months that intersect the period, as
/// [`months_touched`] does; the clipped range is then guaranteed non-empty.
///
/// # Arguments
///
/// * `year` - The calendar year of the month to tally
/// * `month` - The calendar month to tally (1-12)
/// * `period` - The engagement period the month is clipped to
/// * `holidays` - The caller-owned holiday collection
/// * `work_week` - The weekend convention
///
/// # Example
///
/// ```
/// use dealday_engine::calculation::{tally_month, WorkWeek};
/// use dealday_engine::models::{EngagementPeriod, Holiday};
/// use chrono::NaiveDate;
///
/// let period = EngagementPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
/// };
/// let holidays = vec![Holiday {
///     date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     name: "New Year's Day".to_string(),
/// }];
///
/// let tally = tally_month(2025, 1, &period, &holidays, &WorkWeek::default());
/// assert_eq!(tally.business_day_count, 22);
/// assert_eq!(tally.record.deal_days, 21);
/// ```
pub fn tally_month(
    year: i32,
    month: u32,
    period: &EngagementPeriod,
    holidays: &[Holiday],
    work_week: &WorkWeek,
) -> MonthTally {
    let (month_first, month_last) = month_bounds(year, month);

    // Clip the month to the engagement period
    let effective_start = period.start_date.max(month_first);
    let effective_end = period.end_date.min(month_last);

    let mut calendar_days = 0u32;
    let mut business_day_count = 0u32;
    let mut weekend_day_count = 0u32;

    for day in effective_start
        .iter_days()
        .take_while(|d| *d <= effective_end)
    {
        calendar_days += 1;
        match work_week.classify(day) {
            DayKind::Business => business_day_count += 1,
            DayKind::Weekend => weekend_day_count += 1,
        }
    }

    let in_month = holidays_in_month(year, month, holidays, work_week);
    let qualifying = holidays_in_range(&in_month, effective_start, effective_end);
    let holiday_count = qualifying.len() as u32;

    MonthTally {
        record: MonthRecord {
            year,
            month,
            month_name: month_name(month).to_string(),
            total_calendar_days: calendar_days,
            weekend_day_count,
            holiday_count,
            deal_days: business_day_count.saturating_sub(holiday_count),
            holiday_details: qualifying.into_iter().cloned().collect(),
        },
        business_day_count,
    }
}
