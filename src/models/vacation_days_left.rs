//! Vacation entitlement breakdown.
//!
//! [`VacationDaysLeft`] is the immutable result of a breakdown calculation:
//! the three entitlement pools of an account plus the days used before and
//! after the April 1st cutoff.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Snapshot of an account's entitlement pools and the days used from them.
///
/// Recomputed on every call and never mutated after construction.
///
/// # Example
///
/// ```
/// use vacation_engine::models::VacationDaysLeft;
/// use rust_decimal::Decimal;
///
/// let left = VacationDaysLeft::new(
///     Decimal::new(28, 0),
///     Decimal::new(5, 0),
///     Decimal::new(2, 0),
///     Decimal::new(3, 0),
///     Decimal::ZERO,
/// );
/// assert_eq!(left.used_days_before_april(), Decimal::new(3, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationDaysLeft {
    annual_vacation_days: Decimal,
    remaining_vacation_days: Decimal,
    remaining_vacation_days_not_expiring: Decimal,
    used_days_before_april: Decimal,
    used_days_after_april: Decimal,
}

impl VacationDaysLeft {
    /// Creates a breakdown from its five components.
    pub fn new(
        annual_vacation_days: Decimal,
        remaining_vacation_days: Decimal,
        remaining_vacation_days_not_expiring: Decimal,
        used_days_before_april: Decimal,
        used_days_after_april: Decimal,
    ) -> Self {
        Self {
            annual_vacation_days,
            remaining_vacation_days,
            remaining_vacation_days_not_expiring,
            used_days_before_april,
            used_days_after_april,
        }
    }

    /// Vacation days granted for the account year.
    pub fn annual_vacation_days(&self) -> Decimal {
        self.annual_vacation_days
    }

    /// Days carried over from the previous year.
    pub fn remaining_vacation_days(&self) -> Decimal {
        self.remaining_vacation_days
    }

    /// Carried over days that survive the April 1st cutoff.
    pub fn remaining_vacation_days_not_expiring(&self) -> Decimal {
        self.remaining_vacation_days_not_expiring
    }

    /// Days used between January 1st and March 31st.
    pub fn used_days_before_april(&self) -> Decimal {
        self.used_days_before_april
    }

    /// Days used between April 1st and December 31st.
    pub fn used_days_after_april(&self) -> Decimal {
        self.used_days_after_april
    }
}
