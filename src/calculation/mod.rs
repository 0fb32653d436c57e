//! Calculation logic for the Deal-Day Calculation Engine.
//!
//! This module contains all the calculation functions for determining deal
//! days, including work-week classification, holiday filtering, monthly
//! tallying with period clipping, month enumeration, full engagement-period
//! computation, report summaries, and the utilization metric.

mod deal_days;
mod holiday_filter;
mod month_tally;
mod summary;
mod utilization;
mod workweek;

pub use deal_days::{WARN_HOLIDAYS_EXCEED_BUSINESS_DAYS, compute_deal_days};
pub use holiday_filter::{holidays_in_month, holidays_in_range};
pub use month_tally::{MonthTally, Months, month_bounds, month_name, months_touched, tally_month};
pub use summary::format_summary;
pub use utilization::utilization_percent;
pub use workweek::{DayKind, WorkWeek};
