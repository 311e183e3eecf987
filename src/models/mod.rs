//! Core data models for the Vacation Entitlement Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod account;
mod application;
mod person;
mod public_holiday;
mod vacation_days_left;

pub use account::Account;
pub use application::{Application, ApplicationStatus, DayLength, VacationType};
pub use person::{Person, default_working_days};
pub use public_holiday::PublicHoliday;
pub use vacation_days_left::VacationDaysLeft;
