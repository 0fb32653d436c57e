//! Calendar configuration loading functionality.
//!
//! This module provides the [`CalendarLoader`] type for loading holiday
//! calendars from a directory of YAML files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::Holiday;

use super::types::CalendarConfig;

/// Loads and provides access to holiday calendars.
///
/// The `CalendarLoader` reads every YAML file in a directory and indexes the
/// resulting calendars by their `code` field.
///
/// # Directory Structure
///
/// ```text
/// config/calendars/
/// ├── egypt.yaml       # Friday/Saturday weekend, Egyptian holidays
/// └── australia.yaml   # Saturday/Sunday weekend, Australian holidays
/// ```
///
/// # Example
///
/// ```no_run
/// use dealday_engine::config::CalendarLoader;
///
/// let loader = CalendarLoader::load("./config/calendars")?;
/// let calendar = loader.get("egypt")?;
/// let work_week = calendar.work_week();
/// # Ok::<(), dealday_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CalendarLoader {
    calendars: HashMap<String, CalendarConfig>,
}

impl CalendarLoader {
    /// Loads every calendar file from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the calendar directory (e.g., "./config/calendars")
    ///
    /// # Returns
    ///
    /// Returns a `CalendarLoader` on success, or an error if:
    /// - The directory does not exist or contains no YAML files
    /// - Any file contains invalid YAML
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let dir_str = path.display().to_string();

        let entries = fs::read_dir(path).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut calendars = HashMap::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let file_path = entry.path();
            if file_path.extension().is_some_and(|ext| ext == "yaml") {
                let calendar = Self::load_yaml::<CalendarConfig>(&file_path)?;
                debug!(
                    code = %calendar.code,
                    holidays = calendar.holidays.len(),
                    "loaded holiday calendar"
                );
                calendars.insert(calendar.code.clone(), calendar);
            }
        }

        if calendars.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no calendar files found)", dir_str),
            });
        }

        Ok(Self { calendars })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Gets a calendar by its code.
    ///
    /// # Arguments
    ///
    /// * `code` - The calendar code (e.g., "egypt")
    ///
    /// # Returns
    ///
    /// Returns the calendar if found, or a `CalendarNotFound` error.
    pub fn get(&self, code: &str) -> EngineResult<&CalendarConfig> {
        self.calendars
            .get(code)
            .ok_or_else(|| EngineError::CalendarNotFound {
                code: code.to_string(),
            })
    }

    /// Returns the codes of all loaded calendars, sorted alphabetically.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.calendars.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Returns the holidays of a calendar falling in the given year.
    ///
    /// # Arguments
    ///
    /// * `code` - The calendar code
    /// * `year` - The calendar year to slice
    pub fn holidays_in_year(&self, code: &str, year: i32) -> EngineResult<Vec<Holiday>> {
        Ok(self.get(code)?.holidays_in_year(year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn calendars_path() -> &'static str {
        "./config/calendars"
    }

    #[test]
    fn test_load_shipped_calendars() {
        let result = CalendarLoader::load(calendars_path());
        assert!(
            result.is_ok(),
            "Failed to load calendars: {:?}",
            result.err()
        );

        let loader = result.unwrap();
        assert_eq!(loader.codes(), vec!["australia", "egypt"]);
    }

    #[test]
    fn test_get_egypt_calendar() {
        let loader = CalendarLoader::load(calendars_path()).unwrap();

        let calendar = loader.get("egypt").unwrap();
        assert_eq!(calendar.name, "Egypt Public Holidays");

        // Friday/Saturday weekend: 2025-01-03 is a Friday
        let work_week = calendar.work_week();
        assert!(work_week.is_weekend(NaiveDate::from_ymd_opt(2025, 1, 3).unwrap()));
        assert!(!work_week.is_weekend(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()));
    }

    #[test]
    fn test_get_australia_calendar() {
        let loader = CalendarLoader::load(calendars_path()).unwrap();

        let calendar = loader.get("australia").unwrap();
        // Saturday/Sunday weekend: 2025-01-05 is a Sunday
        let work_week = calendar.work_week();
        assert!(work_week.is_weekend(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()));
        assert!(!work_week.is_weekend(NaiveDate::from_ymd_opt(2025, 1, 3).unwrap()));
    }

    #[test]
    fn test_get_unknown_calendar_returns_error() {
        let loader = CalendarLoader::load(calendars_path()).unwrap();

        match loader.get("atlantis") {
            Err(EngineError::CalendarNotFound { code }) => assert_eq!(code, "atlantis"),
            other => panic!("Expected CalendarNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_holidays_in_year_slices_by_year() {
        let loader = CalendarLoader::load(calendars_path()).unwrap();

        let holidays = loader.holidays_in_year("egypt", 2025).unwrap();
        assert!(!holidays.is_empty());
        assert!(holidays.iter().all(|h| h.year() == 2025));

        let none = loader.holidays_in_year("egypt", 1999).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_egypt_new_year_is_first_in_file_order() {
        let loader = CalendarLoader::load(calendars_path()).unwrap();

        let holidays = loader.holidays_in_year("egypt", 2025).unwrap();
        assert_eq!(holidays[0].name, "New Year's Day");
        assert_eq!(
            holidays[0].date,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match CalendarLoader::load("/nonexistent/path") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("/nonexistent/path"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }
}
