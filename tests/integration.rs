//! Integration tests for the Vacation Entitlement Engine.
//!
//! This test suite covers the public API end to end:
//! - Breakdown of used days before and after April 1st
//! - Applications straddling the cutoff and the year boundaries
//! - Filtering by vacation type and status
//! - Total days left before and after the cutoff
//! - The HTTP endpoint with the default calendar configuration
//! - Error cases

use std::str::FromStr;
use std::sync::Arc;
use std::thread;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;

use vacation_engine::api::{AppState, create_router};
use vacation_engine::calculation::VacationDaysService;
use vacation_engine::config::ConfigLoader;
use vacation_engine::error::{EngineError, EngineResult};
use vacation_engine::models::{
    Account, Application, ApplicationStatus, DayLength, Person, VacationType,
};
use vacation_engine::providers::{
    ApplicationQuery, HolidayCalendar, InMemoryApplications, WorkDayCalendar,
};

// =============================================================================
// Test Helpers
// =============================================================================

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn marlene() -> Person {
    Person::new("per_001", "Marlene Muster")
}

fn account(year: i32, annual: &str, remaining: &str, not_expiring: &str) -> Account {
    Account {
        person: marlene(),
        year,
        annual_vacation_days: decimal(annual),
        remaining_vacation_days: decimal(remaining),
        remaining_vacation_days_not_expiring: decimal(not_expiring),
    }
}

fn application(
    id: &str,
    start: &str,
    end: &str,
    vacation_type: VacationType,
    status: ApplicationStatus,
) -> Application {
    Application {
        id: id.to_string(),
        person_id: "per_001".to_string(),
        start_date: date(start),
        end_date: date(end),
        vacation_type,
        status,
        day_length: DayLength::Full,
    }
}

fn holiday(id: &str, start: &str, end: &str) -> Application {
    application(id, start, end, VacationType::Holiday, ApplicationStatus::Allowed)
}

fn default_calendar() -> HolidayCalendar {
    ConfigLoader::load("./config/default")
        .expect("Failed to load config")
        .holiday_calendar()
}

fn service_with(
    applications: Vec<Application>,
) -> VacationDaysService<InMemoryApplications, HolidayCalendar> {
    VacationDaysService::new(InMemoryApplications::new(applications), default_calendar())
}

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    create_router(AppState::new(config))
}

async fn post_vacation_days(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/vacation-days")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn create_request(applications: Vec<Value>, evaluation_date: &str) -> Value {
    json!({
        "account": {
            "person": { "id": "per_001", "name": "Marlene Muster" },
            "year": 2024,
            "annual_vacation_days": "28",
            "remaining_vacation_days": "5",
            "remaining_vacation_days_not_expiring": "2"
        },
        "applications": applications,
        "evaluation_date": evaluation_date
    })
}

fn create_application(id: &str, start: &str, end: &str) -> Value {
    json!({
        "id": id,
        "start_date": start,
        "end_date": end,
        "vacation_type": "holiday",
        "status": "allowed"
    })
}

fn assert_decimal_field(result: &Value, pointer: &str, expected: &str) {
    let actual = result
        .pointer(pointer)
        .and_then(Value::as_str)
        .unwrap_or_else(|| panic!("missing {} in {}", pointer, result));
    assert_eq!(
        decimal(actual),
        decimal(expected),
        "{}: expected {}, got {}",
        pointer,
        expected,
        actual
    );
}

// =============================================================================
// Breakdown
// =============================================================================

#[test]
fn test_january_holiday_is_used_before_april() {
    let service = service_with(vec![holiday("app_001", "2024-01-10", "2024-01-12")]);
    let left = service
        .get_vacation_days_left(&account(2024, "28", "5", "2"))
        .unwrap();

    assert_eq!(left.annual_vacation_days(), decimal("28"));
    assert_eq!(left.remaining_vacation_days(), decimal("5"));
    assert_eq!(left.remaining_vacation_days_not_expiring(), decimal("2"));
    assert_eq!(left.used_days_before_april(), decimal("3"));
    assert_eq!(left.used_days_after_april(), decimal("0"));
}

#[test]
fn test_easter_application_split_at_cutoff_skips_public_holidays() {
    // 2024-03-25 (Mon) to 2024-04-05 (Fri), Good Friday and Easter Monday off
    let service = service_with(vec![holiday("app_001", "2024-03-25", "2024-04-05")]);
    let left = service
        .get_vacation_days_left(&account(2024, "28", "5", "2"))
        .unwrap();

    assert_eq!(left.used_days_before_april(), decimal("4"));
    assert_eq!(left.used_days_after_april(), decimal("4"));
}

#[test]
fn test_christmas_application_counts_half_days() {
    // 2024-12-23 (Mon) to 2024-12-31 (Tue)
    // 23 + half 24 + 27 + 30 + half 31
    let service = service_with(vec![holiday("app_001", "2024-12-23", "2024-12-31")]);
    let left = service
        .get_vacation_days_left(&account(2024, "28", "5", "2"))
        .unwrap();

    assert_eq!(left.used_days_after_april(), decimal("4"));
}

#[test]
fn test_half_day_application() {
    let mut morning = holiday("app_001", "2024-06-12", "2024-06-12");
    morning.day_length = DayLength::Morning;

    let service = service_with(vec![morning]);
    let left = service
        .get_vacation_days_left(&account(2024, "28", "5", "2"))
        .unwrap();

    assert_eq!(left.used_days_after_april(), decimal("0.5"));
}

#[test]
fn test_only_waiting_and_allowed_holidays_count() {
    let service = service_with(vec![
        application(
            "app_001",
            "2024-02-05",
            "2024-02-09",
            VacationType::Holiday,
            ApplicationStatus::Waiting,
        ),
        application(
            "app_002",
            "2024-02-12",
            "2024-02-16",
            VacationType::Holiday,
            ApplicationStatus::Rejected,
        ),
        application(
            "app_003",
            "2024-02-19",
            "2024-02-23",
            VacationType::Holiday,
            ApplicationStatus::Cancelled,
        ),
        application(
            "app_004",
            "2024-07-01",
            "2024-07-05",
            VacationType::SpecialLeave,
            ApplicationStatus::Allowed,
        ),
        application(
            "app_005",
            "2024-07-08",
            "2024-07-12",
            VacationType::UnpaidLeave,
            ApplicationStatus::Allowed,
        ),
        application(
            "app_006",
            "2024-07-15",
            "2024-07-19",
            VacationType::Overtime,
            ApplicationStatus::Waiting,
        ),
    ]);

    let left = service
        .get_vacation_days_left(&account(2024, "28", "5", "2"))
        .unwrap();
    assert_eq!(left.used_days_before_april(), decimal("5"));
    assert_eq!(left.used_days_after_april(), decimal("0"));
}

#[test]
fn test_applications_of_other_people_do_not_count() {
    let mut colleague = holiday("app_002", "2024-05-06", "2024-05-10");
    colleague.person_id = "per_002".to_string();

    let service = service_with(vec![colleague]);
    let left = service
        .get_vacation_days_left(&account(2024, "28", "5", "2"))
        .unwrap();
    assert_eq!(left.used_days_after_april(), decimal("0"));
}

// =============================================================================
// Total days left
// =============================================================================

#[test]
fn test_total_left_before_and_after_cutoff() {
    let service = service_with(vec![holiday("app_001", "2024-01-10", "2024-01-12")]);
    let account = account(2024, "28", "5", "2");

    let in_march = service
        .calculate_total_left_vacation_days(&account, date("2024-03-15"))
        .unwrap();
    let in_may = service
        .calculate_total_left_vacation_days(&account, date("2024-05-01"))
        .unwrap();

    assert_eq!(in_march, decimal("33"));
    assert_eq!(in_may, decimal("30"));
}

#[test]
fn test_total_left_equal_pools_do_not_differ() {
    let service = service_with(vec![]);
    let account = account(2024, "30", "4", "4");

    let in_march = service
        .calculate_total_left_vacation_days(&account, date("2024-03-15"))
        .unwrap();
    let in_may = service
        .calculate_total_left_vacation_days(&account, date("2024-05-01"))
        .unwrap();

    assert_eq!(in_march, in_may);
}

/// A past year's account evaluated in March still uses the full remaining
/// pool, because the cutoff is taken from the evaluation date.
#[test]
fn test_past_account_uses_evaluation_year_for_cutoff() {
    let service = service_with(vec![]);
    let total = service
        .calculate_total_left_vacation_days(&account(2023, "28", "5", "2"), date("2024-03-15"))
        .unwrap();
    assert_eq!(total, decimal("33"));
}

// =============================================================================
// Errors and collaborators
// =============================================================================

struct UnavailableStore;

impl ApplicationQuery for UnavailableStore {
    fn applications_for_period(
        &self,
        _person: &Person,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> EngineResult<Vec<Application>> {
        Err(EngineError::ApplicationQueryFailed {
            message: "connection refused".to_string(),
        })
    }
}

#[test]
fn test_query_failure_reaches_caller() {
    let service = VacationDaysService::new(UnavailableStore, default_calendar());
    let result =
        service.calculate_total_left_vacation_days(&account(2024, "28", "5", "2"), date("2024-03-15"));

    match result {
        Err(EngineError::ApplicationQueryFailed { message }) => {
            assert_eq!(message, "connection refused")
        }
        other => panic!("Expected ApplicationQueryFailed, got {:?}", other),
    }
}

#[test]
fn test_negative_account_is_rejected() {
    let service = service_with(vec![]);
    let result = service.get_vacation_days_left(&account(2024, "-1", "5", "2"));
    assert!(matches!(result, Err(EngineError::InvalidAccount { .. })));
}

#[test]
fn test_service_shared_between_threads() {
    let calendar: Arc<dyn WorkDayCalendar> = Arc::new(default_calendar());
    let service = Arc::new(VacationDaysService::new(
        InMemoryApplications::new(vec![holiday("app_001", "2024-03-20", "2024-04-10")]),
        calendar,
    ));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                service
                    .get_vacation_days_left(&account(2024, "28", "5", "2"))
                    .unwrap()
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
}

// =============================================================================
// HTTP endpoint
// =============================================================================

#[tokio::test]
async fn test_endpoint_before_cutoff() {
    let body = create_request(
        vec![create_application("app_001", "2024-01-10", "2024-01-12")],
        "2024-03-15",
    );
    let (status, result) = post_vacation_days(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result, "/total_left_vacation_days", "33");
    assert_decimal_field(&result, "/vacation_days_left/used_days_before_april", "3");
    assert_decimal_field(&result, "/vacation_days_left/used_days_after_april", "0");
    assert_eq!(result["evaluation_date"], "2024-03-15");
}

#[tokio::test]
async fn test_endpoint_after_cutoff() {
    let body = create_request(
        vec![create_application("app_001", "2024-03-25", "2024-04-05")],
        "2024-05-01",
    );
    let (status, result) = post_vacation_days(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result, "/total_left_vacation_days", "30");
    assert_decimal_field(&result, "/vacation_days_left/used_days_before_april", "4");
    assert_decimal_field(&result, "/vacation_days_left/used_days_after_april", "4");
}

#[tokio::test]
async fn test_endpoint_defaults_evaluation_date() {
    let mut body = create_request(vec![], "2024-03-15");
    body.as_object_mut().unwrap().remove("evaluation_date");

    let (status, result) = post_vacation_days(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["evaluation_date"].is_string());
}

#[tokio::test]
async fn test_endpoint_unknown_status_is_rejected() {
    let mut application = create_application("app_001", "2024-01-10", "2024-01-12");
    application["status"] = json!("approved");

    let (status, result) =
        post_vacation_days(create_router_for_test(), create_request(vec![application], "2024-03-15"))
            .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_endpoint_invalid_account() {
    let mut body = create_request(vec![], "2024-03-15");
    body["account"]["annual_vacation_days"] = json!("-3");

    let (status, result) = post_vacation_days(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_ACCOUNT");
}
