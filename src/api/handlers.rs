//! HTTP request handlers for the benefits API.
//!
//! This module contains the handler functions for all endpoints and the
//! router constructor.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_paycheck;
use crate::models::{Dependent, Employee};
use crate::store::{NewDependent, NewEmployee};

use super::request::{CreateDependentRequest, CreateEmployeeRequest, PaycheckQuery};
use super::response::{ApiErrorResponse, ApiResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/v1/employees",
            get(list_employees).post(create_employee),
        )
        .route("/api/v1/employees/:id", get(get_employee))
        .route("/api/v1/employees/:id/paycheck", get(get_paycheck))
        .route(
            "/api/v1/dependents",
            get(list_dependents).post(create_dependent),
        )
        .route("/api/v1/dependents/:id", get(get_dependent))
        .with_state(state)
}

/// Turns a JSON extraction failure into a 400 failure envelope.
fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let message = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed serde error, including
            // missing fields and unknown enum variants.
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            body_text
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            format!("Invalid JSON syntax: {}", err)
        }
        JsonRejection::MissingJsonContentType(_) => {
            "Content-Type must be application/json".to_string()
        }
        _ => "Failed to parse request body".to_string(),
    };
    ApiErrorResponse::new(StatusCode::BAD_REQUEST, message).into_response()
}

/// Handler for GET /api/v1/employees.
async fn list_employees(State(state): State<AppState>) -> Json<ApiResponse<Vec<Employee>>> {
    let employees = state.employees().list_all();
    Json(ApiResponse::ok(employees))
}

/// Handler for GET /api/v1/employees/{id}.
async fn get_employee(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    match state.employees().find_by_id(id) {
        Some(employee) => Json(ApiResponse::ok(employee)).into_response(),
        None => {
            warn!(employee_id = id, "Employee not found");
            ApiErrorResponse::from(crate::error::EngineError::employee_not_found(id))
                .into_response()
        }
    }
}

/// Handler for POST /api/v1/employees.
async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let new_employee: NewEmployee = request.into();
    if let Err(err) = validate_new_employee(&new_employee) {
        warn!(correlation_id = %correlation_id, error = %err, "Employee validation failed");
        return ApiErrorResponse::from(err).into_response();
    }

    let employee = state.employees().add(new_employee);
    info!(
        correlation_id = %correlation_id,
        employee_id = employee.id,
        dependents = employee.dependents.len(),
        "Employee created"
    );
    (StatusCode::CREATED, Json(ApiResponse::ok(employee))).into_response()
}

/// Handler for GET /api/v1/employees/{id}/paycheck.
///
/// The optional `as_of` query parameter fixes the reference date for
/// dependent ages; it defaults to the current UTC date.
async fn get_paycheck(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(query): Query<PaycheckQuery>,
) -> Response {
    let Some(employee) = state.employees().find_by_id(id) else {
        warn!(employee_id = id, "Employee not found for paycheck");
        return ApiErrorResponse::from(crate::error::EngineError::employee_not_found(id))
            .into_response();
    };

    let as_of = query.as_of.unwrap_or_else(|| Utc::now().date_naive());
    let amount: Decimal = calculate_paycheck(&employee, state.rates(), as_of);
    info!(
        employee_id = id,
        as_of = %as_of,
        amount = %amount,
        "Paycheck calculated"
    );
    Json(ApiResponse::ok(amount)).into_response()
}

/// Handler for GET /api/v1/dependents.
async fn list_dependents(State(state): State<AppState>) -> Json<ApiResponse<Vec<Dependent>>> {
    let dependents = state.dependents().list_all();
    Json(ApiResponse::ok(dependents))
}

/// Handler for GET /api/v1/dependents/{id}.
async fn get_dependent(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    match state.dependents().find_by_id(id) {
        Some(dependent) => Json(ApiResponse::ok(dependent)).into_response(),
        None => {
            warn!(dependent_id = id, "Dependent not found");
            ApiErrorResponse::from(crate::error::EngineError::dependent_not_found(id))
                .into_response()
        }
    }
}

/// Handler for POST /api/v1/dependents.
async fn create_dependent(
    State(state): State<AppState>,
    payload: Result<Json<CreateDependentRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let new_dependent: NewDependent = request.into();
    if let Err(err) = probe_dependent(&new_dependent).validate(Utc::now().date_naive()) {
        warn!(correlation_id = %correlation_id, error = %err, "Dependent validation failed");
        return ApiErrorResponse::from(err).into_response();
    }

    let dependent = state.dependents().add(new_dependent);
    info!(
        correlation_id = %correlation_id,
        dependent_id = dependent.id,
        "Dependent created"
    );
    (StatusCode::CREATED, Json(ApiResponse::ok(dependent))).into_response()
}

/// Validates a new employee before the store assigns any ids.
fn validate_new_employee(new: &NewEmployee) -> crate::error::EngineResult<()> {
    let probe = Employee {
        id: 0,
        first_name: new.first_name.clone(),
        last_name: new.last_name.clone(),
        salary: new.salary,
        date_of_birth: new.date_of_birth,
        dependents: new.dependents.iter().map(probe_dependent).collect(),
    };
    probe.validate(Utc::now().date_naive())
}

/// Builds an unassigned (id 0) dependent for validation.
fn probe_dependent(new: &NewDependent) -> Dependent {
    Dependent {
        id: 0,
        first_name: new.first_name.clone(),
        last_name: new.last_name.clone(),
        date_of_birth: new.date_of_birth,
        relationship: new.relationship,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BenefitRates;
    use crate::store::InMemoryStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_router() -> Router {
        create_router(AppState::with_store(
            BenefitRates::default(),
            InMemoryStore::seeded(),
        ))
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_get_employee_returns_envelope() {
        let (status, body) = get_json(create_test_router(), "/api/v1/employees/1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["first_name"], "LeBron");
    }

    #[tokio::test]
    async fn test_get_unknown_employee_returns_404() {
        let (status, body) = get_json(create_test_router(), "/api/v1/employees/999").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "employee not found: 999");
    }

    #[tokio::test]
    async fn test_paycheck_with_explicit_as_of() {
        let (status, body) = get_json(
            create_test_router(),
            "/api/v1/employees/2/paycheck?as_of=2024-06-01",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        // Decimal serializes as a JSON string.
        assert_eq!(
            Decimal::from_str(body["data"].as_str().unwrap()).unwrap(),
            Decimal::from_str("1363.36").unwrap()
        );
    }

    #[tokio::test]
    async fn test_create_employee_malformed_json_returns_400() {
        let router = create_test_router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/employees")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_employee_missing_content_type_returns_400() {
        let router = create_test_router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/employees")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
