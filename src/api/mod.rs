//! HTTP API module for the Vacation Entitlement Engine.
//!
//! This module provides a thin REST adapter around the entitlement
//! calculation. Requests carry the account and its applications; nothing is
//! persisted.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AccountRequest, ApplicationRequest, VacationDaysRequest};
pub use response::{ApiError, VacationDaysResponse};
pub use state::AppState;
