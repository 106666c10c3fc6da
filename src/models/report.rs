//! Period report models for the payroll engine.
//!
//! This module contains the [`PeriodReport`] produced for each employee,
//! the [`BatchReport`] that aggregates them, and the [`AuditStep`] records
//! that explain how each figure was reached.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Bonus, Deduction};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statute article behind the rule, if any.
    pub legal_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// Attendance and payroll figures for one employee over one date range.
///
/// All quantities are unrounded; rounding to currency precision is the
/// renderer's job.
///
/// # Example
///
/// ```
/// use bordro_engine::calculation::{compute_period_report, WorkRules};
/// use bordro_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut employee = Employee::new("e1", "Ali Kaya");
/// employee.base_salary = Decimal::new(30000, 0);
///
/// let report = compute_period_report(
///     &employee,
///     NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 4, 30).unwrap(),
///     &WorkRules::default(),
/// )
/// .unwrap();
///
/// assert_eq!(report.work_days, 0);
/// assert_eq!(report.prorated_base_salary, Decimal::new(30000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodReport {
    /// The employee the report is for.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// First day of the report range.
    pub start_date: NaiveDate,
    /// Last day of the report range.
    pub end_date: NaiveDate,
    /// Distinct dates with at least one log in range.
    pub work_days: u32,
    /// All logged hours in range, Sunday included.
    pub total_hours: Decimal,
    /// `work_days` times the daily required hours.
    pub required_hours: Decimal,
    /// Weekday overtime hours (paid at the weekday premium).
    pub overtime_hours: Decimal,
    /// Hours logged on Sundays (paid at the Sunday premium).
    pub sunday_hours: Decimal,
    /// Required hours not worked on weekdays.
    pub undertime_hours: Decimal,
    /// Monthly gross salary used for the report.
    pub base_salary: Decimal,
    /// Hourly rate used for the report.
    pub hourly_rate: Decimal,
    /// Calendar days in range, used for proration.
    pub days_in_range: i64,
    /// Salary accrued over the range.
    pub prorated_base_salary: Decimal,
    /// Weekday overtime pay plus Sunday pay.
    pub overtime_pay: Decimal,
    /// Deduction for undertime hours.
    pub undertime_deduction: Decimal,
    /// Sum of bonuses in range.
    pub total_bonuses: Decimal,
    /// Sum of deductions in range.
    pub total_deductions: Decimal,
    /// Final net amount; may be negative.
    pub net_salary: Decimal,
    /// The bonuses selected into the range.
    pub bonuses: Vec<Bonus>,
    /// The deductions selected into the range.
    pub deductions: Vec<Deduction>,
    /// How each figure was reached.
    pub audit_steps: Vec<AuditStep>,
}

impl PeriodReport {
    /// Weekday overtime plus Sunday hours, as shown in exports.
    pub fn total_overtime_hours(&self) -> Decimal {
        self.overtime_hours + self.sunday_hours
    }
}

/// Period reports for a set of employees with grand totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    /// First day of the report range.
    pub start_date: NaiveDate,
    /// Last day of the report range.
    pub end_date: NaiveDate,
    /// One report per employee, in roster order.
    pub items: Vec<PeriodReport>,
    /// Sum of `work_days`.
    pub grand_total_work_days: u32,
    /// Sum of `total_hours`.
    pub grand_total_hours: Decimal,
    /// Sum of weekday overtime and Sunday hours.
    pub grand_total_overtime_hours: Decimal,
    /// Sum of `undertime_hours`.
    pub grand_total_undertime_hours: Decimal,
    /// Sum of `net_salary`.
    pub grand_total_net_salary: Decimal,
}

impl BatchReport {
    /// Returns true if the batch covers exactly one employee.
    pub fn is_single_employee(&self) -> bool {
        self.items.len() == 1
    }
}
