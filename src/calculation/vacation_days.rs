//! Calculation of used and left vacation days for an account.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Account, Person, VacationDaysLeft};
use crate::providers::{ApplicationQuery, WorkDayCalendar};

use super::{Milestones, is_before_april, used_days_between_milestones};

/// Reduces a breakdown to the number of days still available.
///
/// Before April 1st of `today`'s year the full remaining pool is added to the
/// annual days, afterwards only the non-expiring part. The year of the account
/// is not consulted. The result is not clamped at zero.
///
/// A sum that does not fit a `Decimal` is reported as
/// [`EngineError::InvalidAccount`].
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::total_left_vacation_days;
/// use vacation_engine::models::VacationDaysLeft;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let left = VacationDaysLeft::new(
///     Decimal::new(28, 0),
///     Decimal::new(5, 0),
///     Decimal::new(2, 0),
///     Decimal::new(3, 0),
///     Decimal::ZERO,
/// );
///
/// let march = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let may = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// assert_eq!(total_left_vacation_days(&left, march)?, Decimal::new(33, 0));
/// assert_eq!(total_left_vacation_days(&left, may)?, Decimal::new(30, 0));
/// # Ok::<(), vacation_engine::error::EngineError>(())
/// ```
pub fn total_left_vacation_days(
    left: &VacationDaysLeft,
    today: NaiveDate,
) -> EngineResult<Decimal> {
    let (field, carried_over) = if is_before_april(today) {
        ("remaining_vacation_days", left.remaining_vacation_days())
    } else {
        (
            "remaining_vacation_days_not_expiring",
            left.remaining_vacation_days_not_expiring(),
        )
    };

    left.annual_vacation_days()
        .checked_add(carried_over)
        .ok_or_else(|| EngineError::InvalidAccount {
            field: field.to_string(),
            message: format!(
                "{} plus annual vacation days {} exceeds the supported range",
                carried_over,
                left.annual_vacation_days()
            ),
        })
}

/// Computes vacation entitlements from an application store and a calendar.
///
/// The service holds no state besides its two collaborators, so it can be
/// shared between threads whenever they can.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::VacationDaysService;
/// use vacation_engine::models::{
///     Account, Application, ApplicationStatus, DayLength, Person, VacationType,
/// };
/// use vacation_engine::providers::{HolidayCalendar, InMemoryApplications};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let person = Person::new("per_001", "Marlene Muster");
/// let applications = InMemoryApplications::new(vec![Application {
///     id: "app_001".to_string(),
///     person_id: person.id.clone(),
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
///     vacation_type: VacationType::Holiday,
///     status: ApplicationStatus::Allowed,
///     day_length: DayLength::Full,
/// }]);
/// let service = VacationDaysService::new(applications, HolidayCalendar::default());
///
/// let account = Account {
///     person,
///     year: 2024,
///     annual_vacation_days: Decimal::new(28, 0),
///     remaining_vacation_days: Decimal::new(5, 0),
///     remaining_vacation_days_not_expiring: Decimal::new(2, 0),
/// };
///
/// let left = service.get_vacation_days_left(&account)?;
/// assert_eq!(left.used_days_before_april(), Decimal::new(3, 0));
/// assert_eq!(left.used_days_after_april(), Decimal::ZERO);
/// # Ok::<(), vacation_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct VacationDaysService<Q, C> {
    applications: Q,
    calendar: C,
}

impl<Q, C> VacationDaysService<Q, C>
where
    Q: ApplicationQuery,
    C: WorkDayCalendar,
{
    /// Creates a service from its collaborators.
    pub fn new(applications: Q, calendar: C) -> Self {
        Self {
            applications,
            calendar,
        }
    }

    /// Calculates the total number of days left to apply for, as of `today`.
    ///
    /// See [`total_left_vacation_days`] for how the cutoff is applied.
    pub fn calculate_total_left_vacation_days(
        &self,
        account: &Account,
        today: NaiveDate,
    ) -> EngineResult<Decimal> {
        let left = self.get_vacation_days_left(account)?;
        let total = total_left_vacation_days(&left, today)?;
        debug!(
            person_id = %account.person.id,
            year = account.year,
            %today,
            total = %total,
            "Calculated total left vacation days"
        );
        Ok(total)
    }

    /// Same as [`Self::calculate_total_left_vacation_days`] evaluated on the
    /// local current date.
    pub fn calculate_total_left_vacation_days_today(
        &self,
        account: &Account,
    ) -> EngineResult<Decimal> {
        self.calculate_total_left_vacation_days(account, Local::now().date_naive())
    }

    /// Computes the entitlement breakdown of an account.
    pub fn get_vacation_days_left(&self, account: &Account) -> EngineResult<VacationDaysLeft> {
        account.validate()?;

        let days_before_april = self.used_days_before_april(account)?;
        let days_after_april = self.used_days_after_april(account)?;

        Ok(VacationDaysLeft::new(
            account.annual_vacation_days,
            account.remaining_vacation_days,
            account.remaining_vacation_days_not_expiring,
            days_before_april,
            days_after_april,
        ))
    }

    /// Days used between January 1st and March 31st of the account year.
    pub fn used_days_before_april(&self, account: &Account) -> EngineResult<Decimal> {
        let milestones = Milestones::before_april(account.year)?;
        self.used_days_between_milestones(&account.person, milestones)
    }

    /// Days used between April 1st and December 31st of the account year.
    pub fn used_days_after_april(&self, account: &Account) -> EngineResult<Decimal> {
        let milestones = Milestones::after_april(account.year)?;
        self.used_days_between_milestones(&account.person, milestones)
    }

    /// Days used by `person` between the two milestones.
    pub fn used_days_between_milestones(
        &self,
        person: &Person,
        milestones: Milestones,
    ) -> EngineResult<Decimal> {
        used_days_between_milestones(&self.applications, &self.calendar, person, milestones)
    }
}
