//! Work-day calendar backed by a list of public holidays.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::trace;

use crate::error::EngineResult;
use crate::models::{DayLength, Person, PublicHoliday};

use super::WorkDayCalendar;

/// Counts working days from a person's working week and known public holidays.
///
/// A date counts as one working day when the person works on that weekday.
/// A full public holiday counts as zero, a half-day public holiday as a half.
/// The sum is then scaled by the requested [`DayLength`].
///
/// # Example
///
/// ```
/// use vacation_engine::models::{DayLength, Person};
/// use vacation_engine::providers::{HolidayCalendar, WorkDayCalendar};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let calendar = HolidayCalendar::new(vec![]);
/// let person = Person::new("per_001", "Marlene Muster");
///
/// // 2024-01-08 (Monday) to 2024-01-14 (Sunday)
/// let days = calendar
///     .work_days(
///         DayLength::Full,
///         NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
///         NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
///         &person,
///     )
///     .unwrap();
/// assert_eq!(days, Decimal::new(5, 0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    working_time_on_holidays: HashMap<NaiveDate, Decimal>,
}

impl HolidayCalendar {
    /// Creates a calendar from the given public holidays.
    ///
    /// When a date is listed more than once the longest holiday wins.
    pub fn new(public_holidays: Vec<PublicHoliday>) -> Self {
        let mut working_time_on_holidays: HashMap<NaiveDate, Decimal> = HashMap::new();
        for holiday in public_holidays {
            let working_time = holiday.working_time();
            working_time_on_holidays
                .entry(holiday.date)
                .and_modify(|existing| *existing = (*existing).min(working_time))
                .or_insert(working_time);
        }
        Self {
            working_time_on_holidays,
        }
    }

    /// Returns the part of `date` that is worked by someone working that weekday.
    fn working_time(&self, date: NaiveDate) -> Decimal {
        self.working_time_on_holidays
            .get(&date)
            .copied()
            .unwrap_or(Decimal::ONE)
    }
}

impl WorkDayCalendar for HolidayCalendar {
    fn work_days(
        &self,
        day_length: DayLength,
        start: NaiveDate,
        end: NaiveDate,
        person: &Person,
    ) -> EngineResult<Decimal> {
        if start > end {
            return Ok(Decimal::ZERO);
        }

        let working_days: Decimal = start
            .iter_days()
            .take_while(|date| *date <= end)
            .filter(|date| person.works_on(date.weekday()))
            .map(|date| self.working_time(date))
            .sum();

        let days = working_days * day_length.duration();
        trace!(
            person_id = %person.id,
            %start,
            %end,
            ?day_length,
            days = %days,
            "Counted working days"
        );
        Ok(days)
    }
}
