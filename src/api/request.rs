//! Request types for the Vacation Entitlement Engine API.
//!
//! This module defines the JSON request structures for the `/vacation-days`
//! endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Account, Application, ApplicationStatus, DayLength, Person, VacationType};

/// Request body for the `/vacation-days` endpoint.
///
/// Carries the account and the full application history the calculation is
/// based on. When `evaluation_date` is omitted the server's current date is
/// used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacationDaysRequest {
    /// The vacation account.
    pub account: AccountRequest,
    /// The applications for leave of the account's person.
    #[serde(default)]
    pub applications: Vec<ApplicationRequest>,
    /// The date the cutoff is evaluated against.
    #[serde(default)]
    pub evaluation_date: Option<NaiveDate>,
}

/// Account information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRequest {
    /// The person the account belongs to.
    pub person: Person,
    /// The calendar year of the account.
    pub year: i32,
    /// Vacation days granted for the year.
    pub annual_vacation_days: Decimal,
    /// Days carried over from the previous year.
    #[serde(default)]
    pub remaining_vacation_days: Decimal,
    /// Carried over days that do not expire.
    #[serde(default)]
    pub remaining_vacation_days_not_expiring: Decimal,
}

/// Application for leave in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationRequest {
    /// Unique identifier for the application.
    pub id: String,
    /// The first day of leave.
    pub start_date: NaiveDate,
    /// The last day of leave.
    pub end_date: NaiveDate,
    /// The kind of leave.
    pub vacation_type: VacationType,
    /// The current status of the application.
    pub status: ApplicationStatus,
    /// How much of each day is taken off.
    #[serde(default)]
    pub day_length: DayLength,
}

impl From<AccountRequest> for Account {
    fn from(req: AccountRequest) -> Self {
        Account {
            person: req.person,
            year: req.year,
            annual_vacation_days: req.annual_vacation_days,
            remaining_vacation_days: req.remaining_vacation_days,
            remaining_vacation_days_not_expiring: req.remaining_vacation_days_not_expiring,
        }
    }
}

impl ApplicationRequest {
    /// Converts the request into an application owned by `person_id`.
    pub fn into_application(self, person_id: &str) -> Application {
        Application {
            id: self.id,
            person_id: person_id.to_string(),
            start_date: self.start_date,
            end_date: self.end_date,
            vacation_type: self.vacation_type,
            status: self.status,
            day_length: self.day_length,
        }
    }
}
