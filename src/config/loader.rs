//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the work-day
//! calendar configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::PublicHoliday;
use crate::providers::HolidayCalendar;

use super::types::CalendarConfig;

/// Loads and provides access to the calendar configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── calendar.yaml   # Region and public holidays
/// ```
///
/// # Example
///
/// ```no_run
/// use vacation_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// let calendar = loader.holiday_calendar();
/// # Ok::<(), vacation_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalendarConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if
    /// `calendar.yaml` is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let calendar_path = path.as_ref().join("calendar.yaml");
        let config = Self::load_yaml::<CalendarConfig>(&calendar_path)?;
        Ok(Self { config })
    }

    /// Creates a loader from an already parsed configuration.
    pub fn from_config(config: CalendarConfig) -> Self {
        Self { config }
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

    /// Returns the region the public holidays apply to.
    pub fn region(&self) -> &str {
        &self.config.region
    }

    /// Returns all configured public holidays.
    pub fn public_holidays(&self) -> &[PublicHoliday] {
        &self.config.public_holidays
    }

    /// Builds a work-day calendar from the configured public holidays.
    pub fn holiday_calendar(&self) -> HolidayCalendar {
        HolidayCalendar::new(self.config.public_holidays.clone())
    }
}
