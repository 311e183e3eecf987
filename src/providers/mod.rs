//! Collaborators consumed by the entitlement calculation.
//!
//! The calculation never talks to a store or a calendar directly. It asks an
//! [`ApplicationQuery`] for the applications of a person in a period and a
//! [`WorkDayCalendar`] for the number of working days in a date range. Both
//! traits return [`EngineResult`] so that failures propagate unchanged.
//!
//! Reference implementations are provided for in-process use:
//! [`InMemoryApplications`] and [`HolidayCalendar`].

mod holiday_calendar;
mod in_memory;

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{Application, DayLength, Person};

pub use holiday_calendar::HolidayCalendar;
pub use in_memory::InMemoryApplications;

/// Looks up applications for leave.
pub trait ApplicationQuery: Send + Sync {
    /// Returns all applications of `person` whose date range intersects the
    /// closed interval `[start, end]`.
    fn applications_for_period(
        &self,
        person: &Person,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<Application>>;
}

/// Counts working days.
pub trait WorkDayCalendar: Send + Sync {
    /// Returns the number of working days `person` spends on leave between
    /// `start` and `end` (inclusive) when taking `day_length` of each day.
    ///
    /// The result is never negative and is zero for an empty range.
    fn work_days(
        &self,
        day_length: DayLength,
        start: NaiveDate,
        end: NaiveDate,
        person: &Person,
    ) -> EngineResult<Decimal>;
}

impl<T: ApplicationQuery + ?Sized> ApplicationQuery for Arc<T> {
    fn applications_for_period(
        &self,
        person: &Person,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<Application>> {
        (**self).applications_for_period(person, start, end)
    }
}

impl<T: ApplicationQuery + ?Sized> ApplicationQuery for &T {
    fn applications_for_period(
        &self,
        person: &Person,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<Application>> {
        (**self).applications_for_period(person, start, end)
    }
}

impl<T: WorkDayCalendar + ?Sized> WorkDayCalendar for Arc<T> {
    fn work_days(
        &self,
        day_length: DayLength,
        start: NaiveDate,
        end: NaiveDate,
        person: &Person,
    ) -> EngineResult<Decimal> {
        (**self).work_days(day_length, start, end, person)
    }
}

impl<T: WorkDayCalendar + ?Sized> WorkDayCalendar for &T {
    fn work_days(
        &self,
        day_length: DayLength,
        start: NaiveDate,
        end: NaiveDate,
        person: &Person,
    ) -> EngineResult<Decimal> {
        (**self).work_days(day_length, start, end, person)
    }
}
