//! Engagement period and engagement basis models.
//!
//! This module contains the [`EngagementPeriod`] and [`EngagementBasis`] types
//! that define the calculation context for deal-day calculations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The default monthly deal-day quota for part-time engagements.
pub const DEFAULT_PART_TIME_DAYS_PER_MONTH: u32 = 10;

fn default_days_per_month() -> u32 {
    DEFAULT_PART_TIME_DAYS_PER_MONTH
}

/// Represents the date range over which a consultant is engaged.
///
/// Both ends are inclusive. The engine expects `start_date <= end_date`;
/// [`compute_deal_days`](crate::calculation::compute_deal_days) rejects
/// inverted periods with
/// [`EngineError::InvalidPeriod`](crate::error::EngineError::InvalidPeriod).
///
/// # Example
///
/// ```
/// use dealday_engine::models::EngagementPeriod;
/// use chrono::NaiveDate;
///
/// let period = EngagementPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
/// };
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()));
/// assert!(period.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementPeriod {
    /// The start date of the engagement (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the engagement (inclusive).
    pub end_date: NaiveDate,
}

impl EngagementPeriod {
    /// Checks if a given date falls within this engagement period.
    ///
    /// The check is inclusive of both start and end dates.
    ///
    /// # Example
    ///
    /// ```
    /// use dealday_engine::models::EngagementPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = EngagementPeriod {
    ///     start_date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
    /// };
    ///
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 6, 10).unwrap())); // start
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 6, 20).unwrap())); // end
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 6, 9).unwrap())); // before
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 6, 21).unwrap())); // after
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns true if the period's start does not come after its end.
    pub fn is_valid(&self) -> bool {
        self.start_date <= self.end_date
    }
}

/// The billing basis of an engagement.
///
/// Part-time engagements bill a fixed monthly quota independent of the
/// calendar; full-time engagements bill every business day of the month minus
/// qualifying holidays. Each variant carries its own monthly computation, so
/// a future custom-schedule basis slots in as a new variant.
///
/// # Example
///
/// ```
/// use dealday_engine::models::{EngagementBasis, DEFAULT_PART_TIME_DAYS_PER_MONTH};
///
/// let basis = EngagementBasis::PartTime {
///     days_per_month: DEFAULT_PART_TIME_DAYS_PER_MONTH,
/// };
/// assert!(basis.is_part_time());
/// assert!(!EngagementBasis::FullTime.is_part_time());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngagementBasis {
    /// Full-time engagement: every business day in the period is billable,
    /// minus qualifying holidays.
    FullTime,
    /// Part-time engagement: a fixed number of deal days per touched month.
    PartTime {
        /// The fixed monthly deal-day quota.
        #[serde(default = "default_days_per_month")]
        days_per_month: u32,
    },
}

impl EngagementBasis {
    /// Returns true if this is a part-time engagement.
    pub fn is_part_time(&self) -> bool {
        matches!(self, EngagementBasis::PartTime { .. })
    }
}
