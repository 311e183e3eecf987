//! Person model.
//!
//! A person owns vacation accounts and applications for leave. The engine
//! only needs to know which weekdays the person works.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Returns the default working week, Monday through Friday.
pub fn default_working_days() -> Vec<Weekday> {
    vec![
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ]
}

/// Represents a person holding a vacation account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier for the person.
    pub id: String,
    /// Display name of the person.
    pub name: String,
    /// The weekdays this person works (defaults to Monday through Friday).
    #[serde(default = "default_working_days")]
    pub working_days: Vec<Weekday>,
}

impl Person {
    /// Creates a person with the default Monday to Friday working week.
    ///
    /// # Examples
    ///
    /// ```
    /// use vacation_engine::models::Person;
    /// use chrono::Weekday;
    ///
    /// let person = Person::new("per_001", "Marlene Muster");
    /// assert!(person.works_on(Weekday::Mon));
    /// assert!(!person.works_on(Weekday::Sat));
    /// ```
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            working_days: default_working_days(),
        }
    }

    /// Returns true if the person works on the given weekday.
    pub fn works_on(&self, weekday: Weekday) -> bool {
        self.working_days.contains(&weekday)
    }
}
