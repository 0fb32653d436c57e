//! Period report models for the Deal-Day Calculation Engine.
//!
//! This module contains the [`PeriodReport`] type and its associated
//! structures that capture all outputs from a deal-day calculation: the
//! per-month breakdown, aggregate totals, and any data-quality warnings.

use serde::{Deserialize, Serialize};

use super::Holiday;

/// The per-month line item of a deal-day calculation.
///
/// Each record covers the intersection of one calendar month with the
/// engagement period, so counts for partial months at either end of the
/// period reflect only the clipped day range.
///
/// # Example
///
/// ```
/// use dealday_engine::models::MonthRecord;
///
/// let record = MonthRecord {
///     year: 2025,
///     month: 1,
///     month_name: "January".to_string(),
///     total_calendar_days: 31,
///     weekend_day_count: 9,
///     holiday_count: 1,
///     deal_days: 21,
///     holiday_details: vec![],
/// };
/// assert_eq!(record.deal_days, 21);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRecord {
    /// The calendar year of the record.
    pub year: i32,
    /// The calendar month of the record (1-12).
    pub month: u32,
    /// The English name of the month (e.g., "January").
    pub month_name: String,
    /// Inclusive day count of the clipped range covered by this record.
    pub total_calendar_days: u32,
    /// Number of weekend days in the clipped range.
    pub weekend_day_count: u32,
    /// Number of qualifying holidays in the clipped range.
    pub holiday_count: u32,
    /// Billable deal days in the clipped range, floored at zero.
    pub deal_days: u32,
    /// The qualifying holidays, in the order they appeared in the input.
    pub holiday_details: Vec<Holiday>,
}

/// Aggregated totals for a deal-day calculation.
///
/// # Example
///
/// ```
/// use dealday_engine::models::PeriodTotals;
///
/// let totals = PeriodTotals {
///     deal_days: 62,
///     working_days: 64,
///     holidays: 2,
/// };
/// assert_eq!(totals.working_days - totals.holidays, totals.deal_days);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// Total billable deal days across the period.
    pub deal_days: u32,
    /// Total working days across the period (deal days plus holidays).
    pub working_days: u32,
    /// Total qualifying holidays across the period.
    pub holidays: u32,
}

/// A data-quality warning generated during calculation.
///
/// Warnings indicate conditions that don't prevent calculation but may
/// require attention, such as a month whose qualifying holidays exceed its
/// business days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete result of a deal-day calculation.
///
/// The monthly breakdown is in chronological order; the sum of its
/// `deal_days` always equals `totals.deal_days`.
///
/// # Example
///
/// ```
/// use dealday_engine::models::{PeriodReport, PeriodTotals};
///
/// let report = PeriodReport {
///     monthly_breakdown: vec![],
///     totals: PeriodTotals { deal_days: 0, working_days: 0, holidays: 0 },
///     warnings: vec![],
/// };
/// assert!(report.monthly_breakdown.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodReport {
    /// Per-month breakdown in chronological order.
    pub monthly_breakdown: Vec<MonthRecord>,
    /// Aggregated totals across the period.
    pub totals: PeriodTotals,
    /// Data-quality warnings generated during calculation.
    pub warnings: Vec<CalculationWarning>,
}
