//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    PayrollAudit, calculate_final_pay, calculate_notice_period, calculate_payroll_run,
    calculate_severance, explain_payroll, validate_minimum_wage,
};
use crate::models::{FinalPayInput, PayrollCalculation, PayrollRunInput};

use super::request::{
    MinimumWageRequest, NoticePeriodRequest, PayrollRequest, SeveranceRequest, ValidateRequest,
};
use super::response::{ApiError, ApiErrorResponse, NoticePeriodResponse, RatesResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/rates", get(rates_handler))
        .route("/payroll/calculate", post(calculate_payroll_handler))
        .route("/payroll/run", post(payroll_run_handler))
        .route("/termination/severance", post(severance_handler))
        .route("/termination/notice-period", post(notice_period_handler))
        .route("/termination/final-pay", post(final_pay_handler))
        .route("/minimum-wage/validate", post(minimum_wage_handler))
        .with_state(state)
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Unwraps a JSON body, mapping parse failures and invalid fields to 400s.
fn parse_request<T: ValidateRequest>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries serde's detailed message
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
            return Err(ApiErrorResponse::bad_request(error));
        }
    };

    if let Err(err) = request.validate() {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Request validation failed"
        );
        return Err(err.into());
    }

    Ok(request)
}

/// Handler for GET /rates.
///
/// Returns the jurisdiction and statutory rates the engine is running with.
async fn rates_handler(State(state): State<AppState>) -> Response {
    let config = state.config();
    json_ok(RatesResponse {
        jurisdiction: config.jurisdiction().clone(),
        rates: config.rates().clone(),
    })
}

/// Handler for POST /payroll/calculate.
///
/// Calculates one employee's gross-to-net payroll with a full audit trace.
async fn calculate_payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll calculation request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(err) => return err.into_response(),
    };

    let start_time = Instant::now();
    let PayrollAudit {
        result,
        mut audit_trace,
    } = explain_payroll(&request.input, state.rates());
    let duration = start_time.elapsed();
    audit_trace.duration_us = duration.as_micros() as u64;

    info!(
        correlation_id = %correlation_id,
        employee_id = request.employee_id.as_deref().unwrap_or("-"),
        gross_pay = %result.gross_pay,
        net_pay = %result.net_pay,
        below_minimum_wage = result.below_minimum_wage,
        duration_us = duration.as_micros(),
        "Payroll calculation completed successfully"
    );

    json_ok(PayrollCalculation {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: request.employee_id,
        result,
        audit_trace,
    })
}

/// Handler for POST /payroll/run.
///
/// Calculates payroll for every employee in a pay period and returns the
/// per-employee results with aggregate totals.
async fn payroll_run_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRunInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll run request");

    let run = match parse_request(payload, correlation_id) {
        Ok(run) => run,
        Err(err) => return err.into_response(),
    };

    let start_time = Instant::now();
    match calculate_payroll_run(&run, state.rates()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_count = result.totals.employee_count,
                filing_deadline = %result.filing_deadline,
                duration_us = start_time.elapsed().as_micros(),
                "Payroll run completed successfully"
            );
            json_ok(result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll run failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /termination/severance.
async fn severance_handler(
    State(state): State<AppState>,
    payload: Result<Json<SeveranceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing severance request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(err) => return err.into_response(),
    };

    let severance = calculate_severance(
        request.monthly_salary,
        request.months_of_service,
        state.rates(),
    );
    info!(
        correlation_id = %correlation_id,
        months_of_service = request.months_of_service,
        days = severance.days,
        amount = %severance.amount,
        "Severance calculated"
    );
    json_ok(severance)
}

/// Handler for POST /termination/notice-period.
async fn notice_period_handler(
    State(state): State<AppState>,
    payload: Result<Json<NoticePeriodRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(err) => return err.into_response(),
    };

    let days = calculate_notice_period(request.months_of_service, state.rates());
    info!(
        correlation_id = %correlation_id,
        months_of_service = request.months_of_service,
        days,
        "Notice period calculated"
    );
    json_ok(NoticePeriodResponse {
        months_of_service: request.months_of_service,
        days,
    })
}

/// Handler for POST /termination/final-pay.
///
/// Combines unused leave, severance and payment in lieu of notice.
async fn final_pay_handler(
    State(state): State<AppState>,
    payload: Result<Json<FinalPayInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing final pay request");

    let input = match parse_request(payload, correlation_id) {
        Ok(input) => input,
        Err(err) => return err.into_response(),
    };

    let final_pay = calculate_final_pay(&input, state.rates());
    info!(
        correlation_id = %correlation_id,
        months_of_service = input.months_of_service,
        is_for_cause = input.is_for_cause,
        total = %final_pay.total,
        "Final pay calculated"
    );
    json_ok(final_pay)
}

/// Handler for POST /minimum-wage/validate.
async fn minimum_wage_handler(
    State(state): State<AppState>,
    payload: Result<Json<MinimumWageRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(err) => return err.into_response(),
    };

    let check = validate_minimum_wage(request.monthly_salary, state.rates());
    if !check.is_valid {
        warn!(
            correlation_id = %correlation_id,
            monthly_salary = %request.monthly_salary,
            shortfall = %check.shortfall,
            "Salary below minimum wage"
        );
    }
    json_ok(check)
}
