//! HTTP API module for the payroll engine.
//!
//! This module exposes period and batch reports, the CSV salary list,
//! termination pay, daily attendance and leave summaries as JSON
//! endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AttendanceRequest, BatchReportRequest, EmployeeRequest, LeaveSummaryRequest,
    PeriodReportRequest, TerminationRequest,
};
pub use response::{ApiError, ENGINE_VERSION, ReportEnvelope};
pub use state::AppState;
