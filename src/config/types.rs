//! Configuration types for the work-day calendar.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::PublicHoliday;

/// Calendar configuration from `calendar.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// The region the public holidays apply to (e.g., "national").
    pub region: String,
    /// Public holidays known to the calendar.
    #[serde(default)]
    pub public_holidays: Vec<PublicHoliday>,
}
