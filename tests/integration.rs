//! Comprehensive integration tests for the Deal-Day Calculation Engine.
//!
//! This test suite covers all calculation scenarios including:
//! - Full-time engagements over multi-month periods
//! - Part-time engagements with fixed monthly quotas
//! - Intra-month clipping of the engagement period
//! - Weekend-holiday exclusion under both weekend conventions
//! - Calendar configuration loading
//! - Report summaries and the utilization metric
//! - Error cases

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use dealday_engine::calculation::{
    WorkWeek, compute_deal_days, format_summary, utilization_percent,
};
use dealday_engine::config::CalendarLoader;
use dealday_engine::error::EngineError;
use dealday_engine::models::{EngagementBasis, EngagementPeriod, Holiday};

// =============================================================================
// Test Helpers
// =============================================================================

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn period(start: NaiveDate, end: NaiveDate) -> EngagementPeriod {
    EngagementPeriod {
        start_date: start,
        end_date: end,
    }
}

fn holiday(year: i32, month: u32, day: u32, name: &str) -> Holiday {
    Holiday {
        date: date(year, month, day),
        name: name.to_string(),
    }
}

fn q1_2025() -> EngagementPeriod {
    period(date(2025, 1, 1), date(2025, 3, 31))
}

/// The holiday fixture for the first quarter of 2025.
fn q1_2025_holidays() -> Vec<Holiday> {
    vec![
        holiday(2025, 1, 1, "New Year's Day"),        // Wednesday
        holiday(2025, 1, 25, "Revolution Day"),       // Saturday
        holiday(2025, 2, 25, "Sinai Liberation Day"), // Tuesday
        holiday(2025, 3, 21, "Mother's Day"),         // Friday
    ]
}

// =============================================================================
// Scenario A: full-time quarter with mixed business-day and weekend holidays
// =============================================================================

#[test]
fn test_full_time_quarter_qualifying_holidays() {
    let report = compute_deal_days(
        &q1_2025(),
        EngagementBasis::FullTime,
        &q1_2025_holidays(),
        &WorkWeek::default(),
    )
    .unwrap();

    assert_eq!(report.monthly_breakdown.len(), 3);

    // January: Revolution Day lands on a Saturday and must not qualify
    let january = &report.monthly_breakdown[0];
    assert_eq!(january.holiday_count, 1);
    assert_eq!(january.holiday_details[0].name, "New Year's Day");

    // February: Sinai Liberation Day on a Tuesday qualifies
    let february = &report.monthly_breakdown[1];
    assert_eq!(february.holiday_count, 1);

    // March: Mother's Day lands on a Friday and must not qualify
    let march = &report.monthly_breakdown[2];
    assert_eq!(march.holiday_count, 0);

    assert_eq!(report.totals.holidays, 2);
}

#[test]
fn test_full_time_quarter_deal_day_counts() {
    let report = compute_deal_days(
        &q1_2025(),
        EngagementBasis::FullTime,
        &q1_2025_holidays(),
        &WorkWeek::default(),
    )
    .unwrap();

    assert_eq!(report.monthly_breakdown[0].deal_days, 21); // 22 business - 1 holiday
    assert_eq!(report.monthly_breakdown[1].deal_days, 19); // 20 business - 1 holiday
    assert_eq!(report.monthly_breakdown[2].deal_days, 22); // 22 business - 0 holidays

    assert_eq!(report.totals.deal_days, 62);
    assert_eq!(report.totals.working_days, 64);
}

#[test]
fn test_full_time_quarter_weekend_counts() {
    let report = compute_deal_days(
        &q1_2025(),
        EngagementBasis::FullTime,
        &q1_2025_holidays(),
        &WorkWeek::default(),
    )
    .unwrap();

    assert_eq!(report.monthly_breakdown[0].weekend_day_count, 9);
    assert_eq!(report.monthly_breakdown[1].weekend_day_count, 8);
    assert_eq!(report.monthly_breakdown[2].weekend_day_count, 9);

    assert_eq!(report.monthly_breakdown[0].total_calendar_days, 31);
    assert_eq!(report.monthly_breakdown[1].total_calendar_days, 28);
    assert_eq!(report.monthly_breakdown[2].total_calendar_days, 31);
}

// =============================================================================
// Scenario B: part-time quarter with the default quota
// =============================================================================

#[test]
fn test_part_time_quarter_fixed_quota() {
    let report = compute_deal_days(
        &q1_2025(),
        EngagementBasis::PartTime { days_per_month: 10 },
        &q1_2025_holidays(),
        &WorkWeek::default(),
    )
    .unwrap();

    assert_eq!(report.monthly_breakdown.len(), 3);
    for record in &report.monthly_breakdown {
        assert_eq!(record.deal_days, 10);
        assert_eq!(record.weekend_day_count, 0);
        assert_eq!(record.holiday_count, 0);
        assert!(record.holiday_details.is_empty());
    }

    assert_eq!(report.totals.deal_days, 30);
    assert_eq!(report.totals.holidays, 0);
}

// =============================================================================
// Scenario C: intra-month clipping
// =============================================================================

#[test]
fn test_intra_month_clipping() {
    // 2025-06-10 (Tuesday) through 2025-06-20 (Friday)
    let report = compute_deal_days(
        &period(date(2025, 6, 10), date(2025, 6, 20)),
        EngagementBasis::FullTime,
        &[],
        &WorkWeek::default(),
    )
    .unwrap();

    assert_eq!(report.monthly_breakdown.len(), 1);
    let june = &report.monthly_breakdown[0];

    // Days 1-9 and 21-30 must not be counted
    assert_eq!(june.total_calendar_days, 11);
    assert_eq!(june.weekend_day_count, 3); // June 13, 14, 20
    assert_eq!(june.deal_days, 8);
}

#[test]
fn test_clipping_excludes_out_of_range_holidays() {
    // Monday June 30 is in the month but outside the clipped range
    let report = compute_deal_days(
        &period(date(2025, 6, 10), date(2025, 6, 20)),
        EngagementBasis::FullTime,
        &[holiday(2025, 6, 30, "Revolution Anniversary")],
        &WorkWeek::default(),
    )
    .unwrap();

    assert_eq!(report.monthly_breakdown[0].holiday_count, 0);
    assert_eq!(report.totals.deal_days, 8);
}

// =============================================================================
// Boundary: single-day period on a business-day holiday
// =============================================================================

#[test]
fn test_single_day_period_on_holiday() {
    let report = compute_deal_days(
        &period(date(2025, 1, 1), date(2025, 1, 1)),
        EngagementBasis::FullTime,
        &q1_2025_holidays(),
        &WorkWeek::default(),
    )
    .unwrap();

    let january = &report.monthly_breakdown[0];
    assert_eq!(january.total_calendar_days, 1);
    assert_eq!(january.holiday_count, 1);
    assert_eq!(january.deal_days, 0);
    assert!(report.warnings.is_empty());
}

// =============================================================================
// Weekend-holiday exclusion
// =============================================================================

#[test]
fn test_weekend_holiday_never_reduces_deal_days() {
    let without_holidays = compute_deal_days(
        &period(date(2025, 1, 1), date(2025, 1, 31)),
        EngagementBasis::FullTime,
        &[],
        &WorkWeek::default(),
    )
    .unwrap();

    // Revolution Day falls on a Saturday under the Friday/Saturday weekend
    let with_weekend_holiday = compute_deal_days(
        &period(date(2025, 1, 1), date(2025, 1, 31)),
        EngagementBasis::FullTime,
        &[holiday(2025, 1, 25, "Revolution Day")],
        &WorkWeek::default(),
    )
    .unwrap();

    assert_eq!(
        without_holidays.totals.deal_days,
        with_weekend_holiday.totals.deal_days
    );
    assert_eq!(with_weekend_holiday.totals.holidays, 0);
}

// =============================================================================
// Calendar configuration end to end
// =============================================================================

#[test]
fn test_egypt_calendar_quarter() {
    let loader = CalendarLoader::load("./config/calendars").unwrap();
    let calendar = loader.get("egypt").unwrap();

    let report = compute_deal_days(
        &q1_2025(),
        EngagementBasis::FullTime,
        &calendar.holidays_in_year(2025),
        &calendar.work_week(),
    )
    .unwrap();

    // January: New Year's Day (Wed) and Coptic Christmas (Tue) qualify,
    // January 25 Revolution Day falls on a Saturday
    assert_eq!(report.monthly_breakdown[0].holiday_count, 2);
    assert_eq!(report.monthly_breakdown[0].deal_days, 20);

    // February carries no Egyptian holidays
    assert_eq!(report.monthly_breakdown[1].deal_days, 20);

    // March: Eid al-Fitr (Monday March 31) qualifies
    assert_eq!(report.monthly_breakdown[2].holiday_count, 1);
    assert_eq!(report.monthly_breakdown[2].deal_days, 21);

    assert_eq!(report.totals.deal_days, 61);
    assert_eq!(report.totals.holidays, 3);
}

#[test]
fn test_australia_calendar_january() {
    let loader = CalendarLoader::load("./config/calendars").unwrap();
    let calendar = loader.get("australia").unwrap();

    let report = compute_deal_days(
        &period(date(2025, 1, 1), date(2025, 1, 31)),
        EngagementBasis::FullTime,
        &calendar.holidays_in_year(2025),
        &calendar.work_week(),
    )
    .unwrap();

    let january = &report.monthly_breakdown[0];
    // Saturday/Sunday weekend: 8 weekend days, 23 business days
    assert_eq!(january.weekend_day_count, 8);
    // New Year's Day (Wed) and observed Australia Day (Mon) qualify
    assert_eq!(january.holiday_count, 2);
    assert_eq!(january.deal_days, 21);
}

#[test]
fn test_unknown_calendar_code() {
    let loader = CalendarLoader::load("./config/calendars").unwrap();
    match loader.get("atlantis") {
        Err(EngineError::CalendarNotFound { code }) => assert_eq!(code, "atlantis"),
        other => panic!("Expected CalendarNotFound error, got {:?}", other),
    }
}

// =============================================================================
// Error cases
// =============================================================================

#[test]
fn test_inverted_period_is_rejected() {
    let result = compute_deal_days(
        &period(date(2025, 3, 31), date(2025, 1, 1)),
        EngagementBasis::FullTime,
        &[],
        &WorkWeek::default(),
    );
    assert!(matches!(result, Err(EngineError::InvalidPeriod { .. })));
}

// =============================================================================
// Summary and utilization
// =============================================================================

#[test]
fn test_summary_lines_for_full_time_quarter() {
    let report = compute_deal_days(
        &q1_2025(),
        EngagementBasis::FullTime,
        &q1_2025_holidays(),
        &WorkWeek::default(),
    )
    .unwrap();

    let summary = format_summary(&report);
    let lines: Vec<&str> = summary.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "January 2025: 21 deal days (holidays: New Year's Day)"
    );
    assert_eq!(
        lines[1],
        "February 2025: 19 deal days (holidays: Sinai Liberation Day)"
    );
    assert_eq!(lines[2], "March 2025: 22 deal days");
    assert_eq!(lines[3], "Total: 62 deal days");
}

#[test]
fn test_utilization_from_report() {
    let report = compute_deal_days(
        &q1_2025(),
        EngagementBasis::FullTime,
        &q1_2025_holidays(),
        &WorkWeek::default(),
    )
    .unwrap();

    // January: 160 hours against 21 deal days at 8 hours per day
    let january = &report.monthly_breakdown[0];
    let utilization = utilization_percent(
        Decimal::from_str("160").unwrap(),
        january.deal_days,
        Decimal::from_str("8").unwrap(),
    )
    .unwrap();

    assert_eq!(utilization, Decimal::from_str("95.24").unwrap());
}

// =============================================================================
// Report shape
// =============================================================================

#[test]
fn test_report_serializes_to_json() {
    let report = compute_deal_days(
        &q1_2025(),
        EngagementBasis::FullTime,
        &q1_2025_holidays(),
        &WorkWeek::default(),
    )
    .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["monthly_breakdown"].as_array().unwrap().len(), 3);
    assert_eq!(json["totals"]["deal_days"], 62);
    assert_eq!(json["monthly_breakdown"][0]["month_name"], "January");
}

#[test]
fn test_breakdown_is_chronological() {
    let report = compute_deal_days(
        &period(date(2024, 11, 20), date(2025, 2, 3)),
        EngagementBasis::FullTime,
        &[],
        &WorkWeek::default(),
    )
    .unwrap();

    let months: Vec<(i32, u32)> = report
        .monthly_breakdown
        .iter()
        .map(|r| (r.year, r.month))
        .collect();
    assert_eq!(months, vec![(2024, 11), (2024, 12), (2025, 1), (2025, 2)]);
}
