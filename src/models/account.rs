//! Vacation account model.
//!
//! An [`Account`] holds a person's vacation entitlement for one calendar year.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::Person;

/// Represents the vacation entitlement of a person for one year.
///
/// # Example
///
/// ```
/// use vacation_engine::models::{Account, Person};
/// use rust_decimal::Decimal;
///
/// let account = Account {
///     person: Person::new("per_001", "Marlene Muster"),
///     year: 2024,
///     annual_vacation_days: Decimal::new(28, 0),
///     remaining_vacation_days: Decimal::new(5, 0),
///     remaining_vacation_days_not_expiring: Decimal::new(2, 0),
/// };
/// assert!(account.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// The person this account belongs to.
    pub person: Person,
    /// The calendar year this account covers.
    pub year: i32,
    /// Vacation days granted for the year.
    pub annual_vacation_days: Decimal,
    /// Days carried over from the previous year.
    pub remaining_vacation_days: Decimal,
    /// The part of the carried over days that does not expire on April 1st.
    pub remaining_vacation_days_not_expiring: Decimal,
}

impl Account {
    /// Checks the account before any calculation is done with it.
    ///
    /// Rejects negative quantities, more non-expiring days than remaining
    /// days, and years outside the supported calendar range.
    pub fn validate(&self) -> EngineResult<()> {
        if NaiveDate::from_ymd_opt(self.year, 1, 1).is_none() {
            return Err(invalid("year", format!("{} is not a supported year", self.year)));
        }

        for (field, value) in [
            ("annual_vacation_days", self.annual_vacation_days),
            ("remaining_vacation_days", self.remaining_vacation_days),
            (
                "remaining_vacation_days_not_expiring",
                self.remaining_vacation_days_not_expiring,
            ),
        ] {
            if value < Decimal::ZERO {
                return Err(invalid(field, format!("must not be negative, got {}", value)));
            }
        }

        if self.remaining_vacation_days_not_expiring > self.remaining_vacation_days {
            return Err(invalid(
                "remaining_vacation_days_not_expiring",
                format!(
                    "{} exceeds remaining vacation days {}",
                    self.remaining_vacation_days_not_expiring, self.remaining_vacation_days
                ),
            ));
        }

        Ok(())
    }
}

fn invalid(field: &str, message: String) -> EngineError {
    EngineError::InvalidAccount {
        field: field.to_string(),
        message,
    }
}
