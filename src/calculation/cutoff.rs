//! The April 1st cutoff and the two half-year windows around it.
//!
//! Carried over vacation days expire on April 1st except for the part marked
//! as not expiring. Used days are therefore counted separately for
//! January 1st to March 31st and April 1st to December 31st.

use chrono::{Datelike, Months, NaiveDate};

use crate::error::{EngineError, EngineResult};

/// The month in which carried over vacation days expire.
pub const CUTOFF_MONTH: u32 = 4;

/// A closed date interval `[first, last]` within one account year.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::Milestones;
/// use chrono::NaiveDate;
///
/// let before = Milestones::before_april(2024).unwrap();
/// assert_eq!(before.first, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// assert_eq!(before.last, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestones {
    /// First day of the window (inclusive).
    pub first: NaiveDate,
    /// Last day of the window (inclusive).
    pub last: NaiveDate,
}

impl Milestones {
    /// January 1st to March 31st of `year`.
    pub fn before_april(year: i32) -> EngineResult<Self> {
        Ok(Self {
            first: first_day_of_month(year, 1)?,
            last: last_day_of_month(year, CUTOFF_MONTH - 1)?,
        })
    }

    /// April 1st to December 31st of `year`.
    pub fn after_april(year: i32) -> EngineResult<Self> {
        Ok(Self {
            first: first_day_of_month(year, CUTOFF_MONTH)?,
            last: last_day_of_month(year, 12)?,
        })
    }

    /// Clamps `[start, end]` to this window.
    ///
    /// A range straddling a window boundary keeps only the part inside.
    pub fn clamp(&self, start: NaiveDate, end: NaiveDate) -> (NaiveDate, NaiveDate) {
        (start.max(self.first), end.min(self.last))
    }
}

/// Returns true if `date` lies before April 1st of its own year.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::is_before_april;
/// use chrono::NaiveDate;
///
/// assert!(is_before_april(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()));
/// assert!(!is_before_april(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));
/// ```
pub fn is_before_april(date: NaiveDate) -> bool {
    date.month() < CUTOFF_MONTH
}

fn first_day_of_month(year: i32, month: u32) -> EngineResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| unsupported_year(year))
}

fn last_day_of_month(year: i32, month: u32) -> EngineResult<NaiveDate> {
    first_day_of_month(year, month)?
        .checked_add_months(Months::new(1))
        .and_then(|first_of_next| first_of_next.pred_opt())
        .ok_or_else(|| unsupported_year(year))
}

fn unsupported_year(year: i32) -> EngineError {
    EngineError::InvalidAccount {
        field: "year".to_string(),
        message: format!("{} is not a supported year", year),
    }
}
