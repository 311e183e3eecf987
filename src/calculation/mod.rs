//! Calculation logic for the Vacation Entitlement Engine.
//!
//! This module contains the April 1st cutoff windows, the reduction of
//! applications for leave into used days, and the service computing the
//! entitlement breakdown and the total days left of an account.

mod cutoff;
mod used_days;
mod vacation_days;

pub use cutoff::{CUTOFF_MONTH, Milestones, is_before_april};
pub use used_days::{counts_towards_entitlement, used_days_between_milestones};
pub use vacation_days::{VacationDaysService, total_left_vacation_days};
