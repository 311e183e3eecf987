//! Application for leave model and related types.
//!
//! This module defines the [`Application`] struct together with the
//! [`VacationType`], [`ApplicationStatus`] and [`DayLength`] enums.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The kind of leave that was applied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VacationType {
    /// Regular paid vacation, consumes the vacation entitlement.
    Holiday,
    /// Special leave (e.g. wedding, relocation).
    SpecialLeave,
    /// Unpaid leave.
    UnpaidLeave,
    /// Time off compensating overtime.
    Overtime,
}

/// The lifecycle state of an application for leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    /// Submitted and awaiting a decision.
    Waiting,
    /// Approved.
    Allowed,
    /// Declined.
    Rejected,
    /// Withdrawn by the applicant before it was decided.
    Cancelled,
    /// Withdrawn after it was approved.
    Revoked,
}

/// How much of each day an application covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayLength {
    /// The whole day.
    #[default]
    Full,
    /// The first half of the day.
    Morning,
    /// The second half of the day.
    Noon,
}

impl DayLength {
    /// Returns the fraction of a day this length represents.
    ///
    /// # Examples
    ///
    /// ```
    /// use vacation_engine::models::DayLength;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(DayLength::Full.duration(), Decimal::ONE);
    /// assert_eq!(DayLength::Morning.duration(), Decimal::new(5, 1));
    /// ```
    pub fn duration(self) -> Decimal {
        match self {
            DayLength::Full => Decimal::ONE,
            DayLength::Morning | DayLength::Noon => Decimal::new(5, 1),
        }
    }
}

/// Represents an application for leave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    /// Unique identifier for the application.
    pub id: String,
    /// The ID of the person who applied.
    pub person_id: String,
    /// The first day of leave (inclusive).
    pub start_date: NaiveDate,
    /// The last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// The kind of leave.
    pub vacation_type: VacationType,
    /// The current status of the application.
    pub status: ApplicationStatus,
    /// How much of each day is taken off.
    #[serde(default)]
    pub day_length: DayLength,
}

impl Application {
    /// Returns true if the application is in the given status.
    pub fn has_status(&self, status: ApplicationStatus) -> bool {
        self.status == status
    }

    /// Returns true if the application's date range intersects `[start, end]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vacation_engine::models::{Application, ApplicationStatus, DayLength, VacationType};
    /// use chrono::NaiveDate;
    ///
    /// let application = Application {
    ///     id: "app_001".to_string(),
    ///     person_id: "per_001".to_string(),
    ///     start_date: NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2024, 4, 10).unwrap(),
    ///     vacation_type: VacationType::Holiday,
    ///     status: ApplicationStatus::Allowed,
    ///     day_length: DayLength::Full,
    /// };
    ///
    /// let april = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
    /// let december = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    /// assert!(application.overlaps(april, december));
    /// ```
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date <= end && self.end_date >= start
    }

    /// Rejects applications whose end date lies before their start date.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end_date < self.start_date {
            return Err(EngineError::InvalidApplication {
                application_id: self.id.clone(),
                message: format!(
                    "end date {} is before start date {}",
                    self.end_date, self.start_date
                ),
            });
        }
        Ok(())
    }
}
