//! Configuration types for holiday calendars.
//!
//! This module defines the deserialized shape of the YAML calendar files:
//! a calendar code, a display name, the weekend convention, and the holiday
//! list.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::calculation::WorkWeek;
use crate::models::Holiday;

/// A day of the week as written in calendar configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekendDay {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl WeekendDay {
    /// Converts the configuration value to its `chrono` weekday.
    pub fn to_weekday(self) -> Weekday {
        match self {
            WeekendDay::Monday => Weekday::Mon,
            WeekendDay::Tuesday => Weekday::Tue,
            WeekendDay::Wednesday => Weekday::Wed,
            WeekendDay::Thursday => Weekday::Thu,
            WeekendDay::Friday => Weekday::Fri,
            WeekendDay::Saturday => Weekday::Sat,
            WeekendDay::Sunday => Weekday::Sun,
        }
    }
}

/// A holiday calendar for one organization or region.
///
/// # Example
///
/// ```no_run
/// use dealday_engine::config::CalendarLoader;
///
/// let loader = CalendarLoader::load("./config/calendars")?;
/// let calendar = loader.get("egypt")?;
/// println!("{} holidays in {}", calendar.holidays.len(), calendar.name);
/// # Ok::<(), dealday_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Short identifier used to look the calendar up (e.g., "egypt").
    pub code: String,
    /// Human-readable calendar name.
    pub name: String,
    /// The weekend convention for this calendar.
    pub weekend: Vec<WeekendDay>,
    /// The holiday list, in configuration file order.
    pub holidays: Vec<Holiday>,
}

impl CalendarConfig {
    /// Builds the [`WorkWeek`] for this calendar's weekend convention.
    pub fn work_week(&self) -> WorkWeek {
        WorkWeek::new(self.weekend.iter().map(|d| d.to_weekday()))
    }

    /// Returns the holidays falling in the given calendar year, preserving
    /// configuration file order.
    pub fn holidays_in_year(&self, year: i32) -> Vec<Holiday> {
        self.holidays
            .iter()
            .filter(|h| h.year() == year)
            .cloned()
            .collect()
    }
}
