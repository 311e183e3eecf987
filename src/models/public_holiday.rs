//! Public holiday model.
//!
//! Public holidays are supplied by configuration and consumed by the
//! work-day calendar; the engine never derives them itself.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DayLength;

/// Represents a public holiday.
///
/// `day_length` is the part of the day that is off: a `full` holiday is not
/// a working day at all, a `morning` or `noon` holiday leaves half a working
/// day.
///
/// # Example
///
/// ```
/// use vacation_engine::models::{DayLength, PublicHoliday};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let christmas_eve = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2024, 12, 24).unwrap(),
///     name: "Christmas Eve".to_string(),
///     day_length: DayLength::Noon,
/// };
/// assert_eq!(christmas_eve.working_time(), Decimal::new(5, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday (e.g., "New Year's Day").
    pub name: String,
    /// How much of the day is off.
    #[serde(default)]
    pub day_length: DayLength,
}

impl PublicHoliday {
    /// Returns the part of the day that is still worked.
    pub fn working_time(&self) -> Decimal {
        Decimal::ONE - self.day_length.duration()
    }
}
