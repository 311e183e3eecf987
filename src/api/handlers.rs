//! HTTP request handlers for the Vacation Entitlement Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::{Local, NaiveDate};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{VacationDaysService, total_left_vacation_days};
use crate::error::EngineError;
use crate::models::{Account, Application};
use crate::providers::InMemoryApplications;

use super::request::VacationDaysRequest;
use super::response::{ApiError, ApiErrorResponse, VacationDaysResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/vacation-days", post(vacation_days_handler))
        .with_state(state)
}

/// Handler for POST /vacation-days endpoint.
///
/// Accepts an account with its applications and returns the entitlement
/// breakdown together with the total days left.
async fn vacation_days_handler(
    State(state): State<AppState>,
    payload: Result<Json<VacationDaysRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing vacation days request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let evaluation_date = request
        .evaluation_date
        .unwrap_or_else(|| Local::now().date_naive());
    let account: Account = request.account.into();
    let applications: Vec<Application> = request
        .applications
        .into_iter()
        .map(|a| a.into_application(&account.person.id))
        .collect();

    let start_time = Instant::now();
    match perform_calculation(&state, &account, applications, evaluation_date) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                person_id = %account.person.id,
                region = state.config().region(),
                year = account.year,
                %evaluation_date,
                total_left = %result.total_left_vacation_days,
                duration_us = duration.as_micros(),
                "Vacation days calculated successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Vacation days calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, api_error.error)
        }
    }
}

/// Runs the entitlement calculation for one request.
fn perform_calculation(
    state: &AppState,
    account: &Account,
    applications: Vec<Application>,
    evaluation_date: NaiveDate,
) -> Result<VacationDaysResponse, EngineError> {
    for application in &applications {
        application.validate()?;
    }

    let service =
        VacationDaysService::new(InMemoryApplications::new(applications), state.calendar());
    let vacation_days_left = service.get_vacation_days_left(account)?;

    Ok(VacationDaysResponse {
        evaluation_date,
        total_left_vacation_days: total_left_vacation_days(&vacation_days_left, evaluation_date)?,
        vacation_days_left,
    })
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
