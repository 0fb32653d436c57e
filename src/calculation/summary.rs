//! Human-readable report summaries.
//!
//! This module renders a [`PeriodReport`] as plain text for diagnostics and
//! previews. The summary is never the billed or persisted figure; the
//! structured report is.

use std::fmt::Write;

use crate::models::PeriodReport;

/// Formats a period report as one line per month plus a total line.
///
/// Months with qualifying holidays list them by name; months without omit
/// the parenthetical entirely.
///
/// # Example
///
/// ```
/// use dealday_engine::calculation::{compute_deal_days, format_summary, WorkWeek};
/// use dealday_engine::models::{EngagementBasis, EngagementPeriod, Holiday};
/// use chrono::NaiveDate;
///
/// let period = EngagementPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 2, 28).unwrap(),
/// };
/// let holidays = vec![Holiday {
///     date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     name: "New Year's Day".to_string(),
/// }];
///
/// let report = compute_deal_days(
///     &period,
///     EngagementBasis::FullTime,
///     &holidays,
///     &WorkWeek::default(),
/// )
/// .unwrap();
///
/// let summary = format_summary(&report);
/// assert!(summary.starts_with("January 2025: 21 deal days (holidays: New Year's Day)"));
/// assert!(summary.ends_with("Total: 41 deal days\n"));
/// ```
pub fn format_summary(report: &PeriodReport) -> String {
    let mut summary = String::new();

    for record in &report.monthly_breakdown {
        write!(
            summary,
            "{} {}: {} deal days",
            record.month_name, record.year, record.deal_days
        )
        .expect("writing to a String cannot fail");

        if !record.holiday_details.is_empty() {
            let names: Vec<&str> = record
                .holiday_details
                .iter()
                .map(|h| h.name.as_str())
                .collect();
            write!(summary, " (holidays: {})", names.join(", "))
                .expect("writing to a String cannot fail");
        }

        summary.push('\n');
    }

    writeln!(summary, "Total: {} deal days", report.totals.deal_days)
        .expect("writing to a String cannot fail");

    summary
}
