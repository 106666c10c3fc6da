//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for every endpoint. An
//! employee's hourly rate may be omitted, in which case it is derived from
//! the base salary with the configured divisor.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{EmployeeSelection, derive_hourly_rate};
use crate::models::{Bonus, Deduction, Employee, LeaveRecord, TimeLog};

/// Employee record in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub full_name: String,
    /// Internal registry number.
    #[serde(default)]
    pub registry_no: Option<String>,
    /// Job title or department.
    #[serde(default)]
    pub position: Option<String>,
    /// Date of birth.
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// Hire date.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    /// Termination date, if the employee has left.
    #[serde(default)]
    pub termination_date: Option<NaiveDate>,
    /// Monthly gross salary.
    #[serde(default)]
    pub base_salary: Decimal,
    /// Hourly rate; derived from the base salary when omitted.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Time-clock logs.
    #[serde(default)]
    pub time_logs: Vec<TimeLog>,
    /// One-off bonuses.
    #[serde(default)]
    pub bonuses: Vec<Bonus>,
    /// One-off deductions.
    #[serde(default)]
    pub deductions: Vec<Deduction>,
    /// Leave records.
    #[serde(default)]
    pub leaves: Vec<LeaveRecord>,
}

impl EmployeeRequest {
    /// Converts to the domain model, deriving a missing hourly rate with `hourly_rate_divisor`.
    pub fn into_employee(self, hourly_rate_divisor: Decimal) -> Employee {
        let hourly_rate = self
            .hourly_rate
            .unwrap_or_else(|| derive_hourly_rate(self.base_salary, hourly_rate_divisor));
        Employee {
            id: self.id,
            registry_no: self.registry_no,
            full_name: self.full_name,
            position: self.position,
            birth_date: self.birth_date,
            hire_date: self.hire_date,
            termination_date: self.termination_date,
            base_salary: self.base_salary,
            hourly_rate,
            time_logs: self.time_logs,
            bonuses: self.bonuses,
            deductions: self.deductions,
            leaves: self.leaves,
        }
    }
}

/// Converts a list of employee requests to domain models.
pub fn into_roster(employees: Vec<EmployeeRequest>, hourly_rate_divisor: Decimal) -> Vec<Employee> {
    employees
        .into_iter()
        .map(|e| e.into_employee(hourly_rate_divisor))
        .collect()
}

/// Request body for `POST /reports/period`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodReportRequest {
    /// The employee to report on.
    pub employee: EmployeeRequest,
    /// First day of the period (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,
}

/// Request body for `POST /reports/batch` and `POST /reports/batch.csv`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReportRequest {
    /// The roster.
    pub employees: Vec<EmployeeRequest>,
    /// First day of the period (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,
    /// Restricts the report to one employee when set.
    #[serde(default)]
    pub employee_id: Option<String>,
}

impl BatchReportRequest {
    /// The employee selection this request asks for.
    pub fn selection(&self) -> EmployeeSelection {
        EmployeeSelection::from_optional_id(self.employee_id.as_deref())
    }
}

/// Request body for `POST /termination`.
///
/// Omitted amounts default to the employee's base salary, zero benefits,
/// and the statutory rates effective on the termination date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminationRequest {
    /// The departing employee.
    pub employee: EmployeeRequest,
    /// Last day of employment.
    pub termination_date: NaiveDate,
    /// Monthly gross salary.
    #[serde(default)]
    pub gross_salary: Option<Decimal>,
    /// Regular monthly benefits.
    #[serde(default)]
    pub additional_benefits: Option<Decimal>,
    /// Severance ceiling override.
    #[serde(default)]
    pub severance_ceiling: Option<Decimal>,
    /// Stamp duty rate override.
    #[serde(default)]
    pub stamp_tax_rate: Option<Decimal>,
    /// Notice pay income tax rate override.
    #[serde(default)]
    pub notice_income_tax_rate: Option<Decimal>,
}

/// Request body for `POST /attendance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRequest {
    /// The roster.
    pub employees: Vec<EmployeeRequest>,
    /// The day to summarize.
    pub date: NaiveDate,
}

/// Request body for `POST /leave/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveSummaryRequest {
    /// The employee with their leave records.
    pub employee: EmployeeRequest,
    /// The date entitlement is evaluated on.
    pub as_of: NaiveDate,
}
