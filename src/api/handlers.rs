//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    TerminationParams, calculate_leave_summary, compute_period_report, compute_selected_report,
    compute_termination, summarize_attendance,
};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::export::{batch_csv_string, csv_file_name};
use crate::models::{BatchReport, Employee};

use super::request::{
    AttendanceRequest, BatchReportRequest, LeaveSummaryRequest, PeriodReportRequest,
    TerminationRequest, into_roster,
};
use super::response::{ApiError, ApiErrorResponse, ReportEnvelope};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reports/period", post(period_report_handler))
        .route("/reports/batch", post(batch_report_handler))
        .route("/reports/batch.csv", post(batch_csv_handler))
        .route("/termination", post(termination_handler))
        .route("/attendance", post(attendance_handler))
        .route("/leave/summary", post(leave_summary_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
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
    json_response(StatusCode::BAD_REQUEST, error)
}

fn error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Handler for POST /reports/period.
async fn period_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<PeriodReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing period report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let config = state.config();
    let employee = request.employee.into_employee(config.hourly_rate_divisor());

    let start_time = Instant::now();
    match compute_period_report(
        &employee,
        request.start_date,
        request.end_date,
        &config.work_rules(),
    ) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                net_salary = %report.net_salary.normalize(),
                duration_us = start_time.elapsed().as_micros() as u64,
                "Period report completed"
            );
            json_response(StatusCode::OK, ReportEnvelope::new(report))
        }
        Err(err) => error_response(err, correlation_id),
    }
}

fn batch_from_request(request: BatchReportRequest, config: &ConfigLoader) -> EngineResult<BatchReport> {
    let selection = request.selection();
    let roster = into_roster(request.employees, config.hourly_rate_divisor());
    compute_selected_report(
        &roster,
        &selection,
        request.start_date,
        request.end_date,
        &config.work_rules(),
    )
}

/// Handler for POST /reports/batch.
async fn batch_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing batch report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    match batch_from_request(request, state.config()) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                employee_count = report.items.len(),
                "Batch report completed"
            );
            json_response(StatusCode::OK, ReportEnvelope::new(report))
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for POST /reports/batch.csv.
async fn batch_csv_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing batch CSV export request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let exported = batch_from_request(request, state.config())
        .and_then(|report| Ok((csv_file_name(&report), batch_csv_string(&report)?)));

    match exported {
        Ok((file_name, body)) => {
            info!(
                correlation_id = %correlation_id,
                file_name = %file_name,
                bytes = body.len(),
                "Batch CSV export completed"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", file_name),
                    ),
                ],
                body,
            )
                .into_response()
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Fills omitted termination inputs from the employee and configuration.
///
/// Configured statutory rates are only looked up when at least one rate
/// was not supplied.
fn termination_params(
    request: &TerminationRequest,
    employee: &Employee,
    config: &ConfigLoader,
) -> EngineResult<TerminationParams> {
    let gross_salary = request.gross_salary.unwrap_or(employee.base_salary);
    let additional_benefits = request.additional_benefits.unwrap_or(Decimal::ZERO);

    let all_rates_given = request.severance_ceiling.is_some()
        && request.stamp_tax_rate.is_some()
        && request.notice_income_tax_rate.is_some();

    let mut params = if all_rates_given {
        TerminationParams {
            notice_schedule: config.notice_schedule().clone(),
            ..TerminationParams::new(gross_salary, additional_benefits, Decimal::ZERO)
        }
    } else {
        config.termination_params(request.termination_date, gross_salary, additional_benefits)?
    };

    if let Some(ceiling) = request.severance_ceiling {
        params.severance_ceiling = ceiling;
    }
    if let Some(rate) = request.stamp_tax_rate {
        params.stamp_tax_rate = rate;
    }
    if let Some(rate) = request.notice_income_tax_rate {
        params.notice_income_tax_rate = rate;
    }

    Ok(params)
}

/// Handler for POST /termination.
async fn termination_handler(
    State(state): State<AppState>,
    payload: Result<Json<TerminationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing termination request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let config = state.config();
    let employee = request
        .employee
        .clone()
        .into_employee(config.hourly_rate_divisor());

    let result = termination_params(&request, &employee, config)
        .and_then(|params| compute_termination(&employee, request.termination_date, &params));

    match result {
        Ok(calculation) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                total_net = %calculation.total_net.normalize(),
                "Termination calculation completed"
            );
            json_response(StatusCode::OK, ReportEnvelope::new(calculation))
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for POST /attendance.
async fn attendance_handler(
    State(state): State<AppState>,
    payload: Result<Json<AttendanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let config = state.config();
    let roster = into_roster(request.employees, config.hourly_rate_divisor());
    let summary = summarize_attendance(&roster, request.date, config.work_start_time());

    info!(
        correlation_id = %correlation_id,
        date = %summary.date,
        present = summary.present,
        late = summary.late,
        "Attendance summary completed"
    );
    json_response(StatusCode::OK, ReportEnvelope::new(summary))
}

/// Handler for POST /leave/summary.
async fn leave_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<LeaveSummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let employee = request
        .employee
        .into_employee(state.config().hourly_rate_divisor());
    let summary = calculate_leave_summary(&employee, request.as_of);

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        entitlement_days = summary.entitlement_days,
        "Leave summary completed"
    );
    json_response(StatusCode::OK, ReportEnvelope::new(summary))
}
