//! Batch aggregation across employees.
//!
//! One [`PeriodReport`] is computed per selected employee, in roster order,
//! and the grand totals are plain sums over those reports. Every consumer
//! of batch figures (API, CSV export, summaries) reads them from here.

use std::time::Instant;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{BatchReport, DateRange, Employee, PeriodReport};

use super::period_report::build_period_report;
use super::work_rules::WorkRules;

/// Which employees of a roster a batch report covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "employee_id", rename_all = "snake_case")]
pub enum EmployeeSelection {
    /// Every employee on the roster.
    All,
    /// A single employee, by ID.
    Single(String),
}

impl EmployeeSelection {
    /// Builds a selection from an optional employee ID; `None` or a blank
    /// ID selects everyone.
    pub fn from_optional_id(employee_id: Option<&str>) -> Self {
        match employee_id.map(str::trim) {
            Some(id) if !id.is_empty() => EmployeeSelection::Single(id.to_string()),
            _ => EmployeeSelection::All,
        }
    }

    /// The employees of `roster` this selection covers, in roster order.
    pub fn select<'a>(&self, roster: &'a [Employee]) -> Vec<&'a Employee> {
        match self {
            EmployeeSelection::All => roster.iter().collect(),
            EmployeeSelection::Single(id) => roster.iter().filter(|e| &e.id == id).collect(),
        }
    }
}

/// Computes period reports for a set of employees and sums them.
///
/// # Arguments
///
/// * `employees` - The employees to report on, in output order
/// * `start` - First day of the period (inclusive)
/// * `end` - Last day of the period (inclusive)
/// * `rules` - Working-time rules and premiums
///
/// # Returns
///
/// The [`BatchReport`], `InvalidDateRange` if `start > end`, or
/// `EmptySelection` if no employees were given.
///
/// # Examples
///
/// ```
/// use bordro_engine::calculation::{compute_batch_report, WorkRules};
/// use bordro_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut a = Employee::new("a", "Ali");
/// a.base_salary = Decimal::new(30000, 0);
/// let mut b = Employee::new("b", "Banu");
/// b.base_salary = Decimal::new(45000, 0);
///
/// let batch = compute_batch_report(
///     &[a, b],
///     NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 4, 30).unwrap(),
///     &WorkRules::default(),
/// )
/// .unwrap();
///
/// assert_eq!(batch.items.len(), 2);
/// assert_eq!(batch.grand_total_net_salary, Decimal::new(75000, 0));
/// ```
pub fn compute_batch_report<'a, I>(
    employees: I,
    start: NaiveDate,
    end: NaiveDate,
    rules: &WorkRules,
) -> EngineResult<BatchReport>
where
    I: IntoIterator<Item = &'a Employee>,
{
    let range = DateRange::new(start, end)?;
    let started = Instant::now();

    let items: Vec<PeriodReport> = employees
        .into_iter()
        .map(|employee| build_period_report(employee, &range, rules))
        .collect();

    if items.is_empty() {
        return Err(EngineError::EmptySelection);
    }

    let batch = summarize(range, items);

    info!(
        start_date = %batch.start_date,
        end_date = %batch.end_date,
        employee_count = batch.items.len(),
        grand_total_net_salary = %batch.grand_total_net_salary.normalize(),
        duration_us = started.elapsed().as_micros() as u64,
        "Batch report computed"
    );

    Ok(batch)
}

/// Computes a batch report for the employees of `roster` picked by `selection`.
///
/// A `Single` selection whose ID is not on the roster yields
/// `EmptySelection`.
pub fn compute_selected_report(
    roster: &[Employee],
    selection: &EmployeeSelection,
    start: NaiveDate,
    end: NaiveDate,
    rules: &WorkRules,
) -> EngineResult<BatchReport> {
    compute_batch_report(selection.select(roster), start, end, rules)
}

fn summarize(range: DateRange, items: Vec<PeriodReport>) -> BatchReport {
    let mut grand_total_work_days = 0u32;
    let mut grand_total_hours = Decimal::ZERO;
    let mut grand_total_overtime_hours = Decimal::ZERO;
    let mut grand_total_undertime_hours = Decimal::ZERO;
    let mut grand_total_net_salary = Decimal::ZERO;

    for item in &items {
        grand_total_work_days += item.work_days;
        grand_total_hours += item.total_hours;
        grand_total_overtime_hours += item.total_overtime_hours();
        grand_total_undertime_hours += item.undertime_hours;
        grand_total_net_salary += item.net_salary;
    }

    BatchReport {
        start_date: range.start(),
        end_date: range.end(),
        items,
        grand_total_work_days,
        grand_total_hours,
        grand_total_overtime_hours,
        grand_total_undertime_hours,
        grand_total_net_salary,
    }
}
