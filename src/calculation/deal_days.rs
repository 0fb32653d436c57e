//! Deal-day computation for an engagement period.
//!
//! This module strings the leaf calculators together: it validates the
//! period, enumerates the months it touches, dispatches each month to the
//! computation matching the engagement basis, and assembles the final
//! [`PeriodReport`] with totals and data-quality warnings.

use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    CalculationWarning, EngagementBasis, EngagementPeriod, Holiday, MonthRecord, PeriodReport,
    PeriodTotals,
};

use super::month_tally::{month_bounds, month_name, months_touched, tally_month};
use super::workweek::WorkWeek;

/// Warning code emitted when a month's qualifying holidays exceed its
/// business days and the deal-day floor at zero masks the difference.
pub const WARN_HOLIDAYS_EXCEED_BUSINESS_DAYS: &str = "holidays_exceed_business_days";

/// Computes the deal-day report for an engagement period.
///
/// For full-time engagements every touched month is tallied against the
/// calendar: business days minus qualifying holidays, floored at zero. For
/// part-time engagements every touched month contributes the fixed monthly
/// quota, with no weekend or holiday accounting, since the quota already
/// represents the commitment independent of the calendar.
///
/// # Arguments
///
/// * `period` - The engagement date range (inclusive on both ends)
/// * `basis` - Full-time or part-time with its monthly quota
/// * `holidays` - The organization's holiday collection (read-only snapshot)
/// * `work_week` - The weekend convention
///
/// # Returns
///
/// A [`PeriodReport`] with one [`MonthRecord`] per touched month in
/// chronological order, or [`EngineError::InvalidPeriod`] when the period
/// ends before it starts.
///
/// Months where the floor at zero masked an excess of holidays over business
/// days are flagged with a [`CalculationWarning`] carrying
/// [`WARN_HOLIDAYS_EXCEED_BUSINESS_DAYS`].
///
/// # Example
///
/// ```
/// use dealday_engine::calculation::{compute_deal_days, WorkWeek};
/// use dealday_engine::models::{EngagementBasis, EngagementPeriod, Holiday};
/// use chrono::NaiveDate;
///
/// let period = EngagementPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
/// };
///
/// let report = compute_deal_days(
///     &period,
///     EngagementBasis::PartTime { days_per_month: 10 },
///     &[],
///     &WorkWeek::default(),
/// )
/// .unwrap();
///
/// assert_eq!(report.monthly_breakdown.len(), 3);
/// assert_eq!(report.totals.deal_days, 30);
/// ```
pub fn compute_deal_days(
    period: &EngagementPeriod,
    basis: EngagementBasis,
    holidays: &[Holiday],
    work_week: &WorkWeek,
) -> EngineResult<PeriodReport> {
    if !period.is_valid() {
        return Err(EngineError::InvalidPeriod {
            start: period.start_date,
            end: period.end_date,
        });
    }

    debug!(
        start = %period.start_date,
        end = %period.end_date,
        part_time = basis.is_part_time(),
        "computing deal days"
    );

    let mut monthly_breakdown = Vec::new();
    let mut warnings = Vec::new();
    let mut totals = PeriodTotals {
        deal_days: 0,
        working_days: 0,
        holidays: 0,
    };

    for (year, month) in months_touched(period) {
        let record = match basis {
            EngagementBasis::PartTime { days_per_month } => {
                part_time_month(year, month, period, days_per_month)
            }
            EngagementBasis::FullTime => {
                let tally = tally_month(year, month, period, holidays, work_week);
                if tally.record.holiday_count > tally.business_day_count {
                    warn!(
                        year,
                        month,
                        holidays = tally.record.holiday_count,
                        business_days = tally.business_day_count,
                        "deal days floored at zero"
                    );
                    warnings.push(CalculationWarning {
                        code: WARN_HOLIDAYS_EXCEED_BUSINESS_DAYS.to_string(),
                        message: format!(
                            "{} {}: {} qualifying holidays exceed {} business days, deal days floored at zero",
                            month_name(month),
                            year,
                            tally.record.holiday_count,
                            tally.business_day_count
                        ),
                        severity: "medium".to_string(),
                    });
                }
                tally.record
            }
        };

        totals.deal_days += record.deal_days;
        totals.working_days += record.deal_days + record.holiday_count;
        totals.holidays += record.holiday_count;
        monthly_breakdown.push(record);
    }

    Ok(PeriodReport {
        monthly_breakdown,
        totals,
        warnings,
    })
}

/// Builds the fixed-quota record for one month of a part-time engagement.
///
/// The quota stands in for the calendar, so weekend and holiday counts stay
/// at zero; only the clipped calendar-day span is reported.
fn part_time_month(
    year: i32,
    month: u32,
    period: &EngagementPeriod,
    days_per_month: u32,
) -> MonthRecord {
    let (month_first, month_last) = month_bounds(year, month);
    let effective_start = period.start_date.max(month_first);
    let effective_end = period.end_date.min(month_last);
    let total_calendar_days = (effective_end - effective_start).num_days() as u32 + 1;

    MonthRecord {
        year,
        month,
        month_name: month_name(month).to_string(),
        total_calendar_days,
        weekend_day_count: 0,
        holiday_count: 0,
        deal_days: days_per_month,
        holiday_details: Vec::new(),
    }
}
