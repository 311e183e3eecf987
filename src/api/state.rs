//! Application state for the Vacation Entitlement Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::providers::HolidayCalendar;

/// Shared application state.
///
/// Holds the loaded configuration and the work-day calendar built from it,
/// both shared read-only across requests.
#[derive(Clone)]
pub struct AppState {
    /// The loaded calendar configuration.
    config: Arc<ConfigLoader>,
    /// The calendar built from the configured public holidays.
    calendar: Arc<HolidayCalendar>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        let calendar = Arc::new(config.holiday_calendar());
        Self {
            config: Arc::new(config),
            calendar,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a shared handle to the work-day calendar.
    pub fn calendar(&self) -> Arc<HolidayCalendar> {
        Arc::clone(&self.calendar)
    }
}
