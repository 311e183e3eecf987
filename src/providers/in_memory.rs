//! In-memory application store.

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{Application, Person};

use super::ApplicationQuery;

/// Answers application queries from a list held in memory.
///
/// # Example
///
/// ```
/// use vacation_engine::models::{Application, ApplicationStatus, DayLength, Person, VacationType};
/// use vacation_engine::providers::{ApplicationQuery, InMemoryApplications};
/// use chrono::NaiveDate;
///
/// let date = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap();
/// let store = InMemoryApplications::new(vec![Application {
///     id: "app_001".to_string(),
///     person_id: "per_001".to_string(),
///     start_date: date(1, 10),
///     end_date: date(1, 12),
///     vacation_type: VacationType::Holiday,
///     status: ApplicationStatus::Allowed,
///     day_length: DayLength::Full,
/// }]);
///
/// let person = Person::new("per_001", "Marlene Muster");
/// let found = store.applications_for_period(&person, date(1, 1), date(3, 31)).unwrap();
/// assert_eq!(found.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryApplications {
    applications: Vec<Application>,
}

impl InMemoryApplications {
    /// Creates a store holding the given applications.
    pub fn new(applications: Vec<Application>) -> Self {
        Self { applications }
    }
}

impl ApplicationQuery for InMemoryApplications {
    fn applications_for_period(
        &self,
        person: &Person,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<Application>> {
        Ok(self
            .applications
            .iter()
            .filter(|a| a.person_id == person.id && a.overlaps(start, end))
            .cloned()
            .collect())
    }
}
