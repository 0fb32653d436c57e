//! Monthly utilization metric.
//!
//! The hosting application divides the hours a consultant actually logged in
//! a month by the month's billable capacity (deal days times contracted
//! hours per day). That arithmetic ships with the engine so every consumer
//! rounds and guards the division the same way.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Computes a monthly utilization percentage.
///
/// `actual_hours / (deal_days * hours_per_day) * 100`, rounded to two
/// decimal places. Values above 100 indicate more hours logged than the
/// month's billable capacity.
///
/// # Arguments
///
/// * `actual_hours` - Hours actually logged in the month
/// * `deal_days` - Billable deal days from the month's [`MonthRecord`](crate::models::MonthRecord)
/// * `hours_per_day` - Contracted hours per deal day
///
/// # Returns
///
/// The utilization percentage, or [`EngineError::CalculationError`] when the
/// capacity is zero (no deal days, or a non-positive hours-per-day figure).
///
/// # Example
///
/// ```
/// use dealday_engine::calculation::utilization_percent;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let utilization = utilization_percent(
///     Decimal::from_str("160").unwrap(),
///     21,
///     Decimal::from_str("8").unwrap(),
/// )
/// .unwrap();
/// assert_eq!(utilization, Decimal::from_str("95.24").unwrap());
/// ```
pub fn utilization_percent(
    actual_hours: Decimal,
    deal_days: u32,
    hours_per_day: Decimal,
) -> EngineResult<Decimal> {
    let capacity = Decimal::from(deal_days) * hours_per_day;
    if capacity <= Decimal::ZERO {
        return Err(EngineError::CalculationError {
            message: format!(
                "cannot compute utilization against zero capacity ({} deal days x {} hours per day)",
                deal_days, hours_per_day
            ),
        });
    }

    Ok((actual_hours / capacity * Decimal::ONE_HUNDRED).round_dp(2))
}
