//! Used vacation days within a window.
//!
//! Only waiting or allowed applications of type holiday consume the vacation
//! entitlement. Each of them is clamped to the window and measured in working
//! days by the calendar.

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::error::{EngineError, EngineResult};
use crate::models::{Application, ApplicationStatus, Person, VacationType};
use crate::providers::{ApplicationQuery, WorkDayCalendar};

use super::Milestones;

/// Returns true if the application consumes vacation entitlement.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::counts_towards_entitlement;
/// use vacation_engine::models::{Application, ApplicationStatus, DayLength, VacationType};
/// use chrono::NaiveDate;
///
/// let mut application = Application {
///     id: "app_001".to_string(),
///     person_id: "per_001".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
///     vacation_type: VacationType::Holiday,
///     status: ApplicationStatus::Waiting,
///     day_length: DayLength::Full,
/// };
/// assert!(counts_towards_entitlement(&application));
///
/// application.status = ApplicationStatus::Cancelled;
/// assert!(!counts_towards_entitlement(&application));
/// ```
pub fn counts_towards_entitlement(application: &Application) -> bool {
    application.vacation_type == VacationType::Holiday
        && (application.has_status(ApplicationStatus::Waiting)
            || application.has_status(ApplicationStatus::Allowed))
}

/// Sums the working days `person` used between the two milestones.
///
/// Collaborator failures are returned unchanged. A sum that does not fit a
/// `Decimal` fails with [`EngineError::InvalidApplication`] naming the
/// application that overflowed it.
pub fn used_days_between_milestones<Q, C>(
    applications: &Q,
    calendar: &C,
    person: &Person,
    milestones: Milestones,
) -> EngineResult<Decimal>
where
    Q: ApplicationQuery + ?Sized,
    C: WorkDayCalendar + ?Sized,
{
    let candidates =
        applications.applications_for_period(person, milestones.first, milestones.last)?;

    let mut used_days = Decimal::ZERO;
    let mut counted = 0usize;

    for application in candidates.iter().filter(|a| counts_towards_entitlement(a)) {
        let (start, end) = milestones.clamp(application.start_date, application.end_date);
        let days = calendar.work_days(application.day_length, start, end, person)?;
        trace!(
            application_id = %application.id,
            %start,
            %end,
            days = %days,
            "Counted application"
        );
        used_days = used_days
            .checked_add(days)
            .ok_or_else(|| EngineError::InvalidApplication {
                application_id: application.id.clone(),
                message: format!("{} used days exceed the supported range", days),
            })?;
        counted += 1;
    }

    debug!(
        person_id = %person.id,
        first = %milestones.first,
        last = %milestones.last,
        queried = candidates.len(),
        counted,
        used_days = %used_days,
        "Used days between milestones"
    );

    Ok(used_days)
}
