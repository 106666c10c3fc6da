//! Period attendance and payroll aggregation (puantaj ve maaş hesaplama).
//!
//! This module computes a [`PeriodReport`] for one employee over an
//! inclusive date range.
//!
//! ## Hours
//!
//! - Every log in range contributes its duration to `total_hours`.
//! - Logs dated on a Sunday also go to `sunday_hours` and are carved out of
//!   the weekday base: `regular = total - sunday`.
//! - `required = work_days x daily required hours`, where `work_days` counts
//!   distinct logged dates.
//! - Overtime and undertime are the positive parts of `regular - required`
//!   and `required - regular`, so at most one is non-zero.
//!
//! ## Pay
//!
//! - Salary is prorated over calendar days in range and accrues even with
//!   no attendance logged.
//! - `overtime_pay = overtime x rate x 1.5 + sunday x rate x 2.0`.
//! - `net = prorated + overtime_pay + bonuses - undertime x rate - deductions`,
//!   not clamped at zero.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{Bonus, DateRange, Deduction, Employee, PeriodReport};

use super::audit::AuditTrail;
use super::work_rules::WorkRules;

const OVERTIME_REF: &str = "4857 sayılı İş Kanunu md. 41";
const WEEKLY_REST_REF: &str = "4857 sayılı İş Kanunu md. 46";

/// Computes the period report for one employee.
///
/// # Arguments
///
/// * `employee` - The employee to report on (not modified)
/// * `start` - First day of the period (inclusive)
/// * `end` - Last day of the period (inclusive)
/// * `rules` - Working-time rules and premiums
///
/// # Returns
///
/// The [`PeriodReport`], or `InvalidDateRange` if `start > end`.
///
/// # Examples
///
/// ```
/// use bordro_engine::calculation::{compute_period_report, WorkRules};
/// use bordro_engine::models::{Employee, TimeLog};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut employee = Employee::new("e1", "Ali Kaya");
/// employee.hourly_rate = Decimal::new(100, 0);
/// employee.time_logs.push(TimeLog {
///     id: "t1".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(), // Monday
///     check_in: Some("08:00".to_string()),
///     check_out: Some("18:00".to_string()),
/// });
///
/// let report = compute_period_report(
///     &employee,
///     NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
///     &WorkRules::default(),
/// )
/// .unwrap();
///
/// assert_eq!(report.overtime_hours, Decimal::new(2, 0));
/// assert_eq!(report.overtime_pay, Decimal::new(300, 0));
/// ```
pub fn compute_period_report(
    employee: &Employee,
    start: NaiveDate,
    end: NaiveDate,
    rules: &WorkRules,
) -> EngineResult<PeriodReport> {
    let range = DateRange::new(start, end)?;
    Ok(build_period_report(employee, &range, rules))
}

/// Builds the report for an already validated range.
pub(crate) fn build_period_report(
    employee: &Employee,
    range: &DateRange,
    rules: &WorkRules,
) -> PeriodReport {
    let mut trail = AuditTrail::new();

    // Step 1: Accumulate logged hours
    let mut total_hours = Decimal::ZERO;
    let mut sunday_hours = Decimal::ZERO;
    let mut logged_dates = BTreeSet::new();
    let mut log_count = 0usize;

    for log in employee.logs_in(range) {
        let hours = log.worked_hours();
        if log.is_sunday() {
            sunday_hours += hours;
        }
        total_hours += hours;
        logged_dates.insert(log.date);
        log_count += 1;
    }
    let work_days = logged_dates.len() as u32;

    trail.record(
        "attendance_hours",
        "Logged Attendance Hours",
        "",
        serde_json::json!({
            "start_date": range.start().to_string(),
            "end_date": range.end().to_string(),
            "logs_in_range": log_count
        }),
        serde_json::json!({
            "work_days": work_days,
            "total_hours": total_hours.normalize().to_string(),
            "sunday_hours": sunday_hours.normalize().to_string()
        }),
        format!(
            "{} logs on {} distinct days: {} hours in total, {} of them on Sundays",
            log_count,
            work_days,
            total_hours.normalize(),
            sunday_hours.normalize()
        ),
    );

    // Step 2: Split weekday hours into overtime and undertime
    let required_hours = Decimal::from(work_days) * rules.daily_required_hours;
    let regular_hours = total_hours - sunday_hours;
    let overtime_hours = (regular_hours - required_hours).max(Decimal::ZERO);
    let undertime_hours = (required_hours - regular_hours).max(Decimal::ZERO);

    trail.record(
        "weekday_hours_split",
        "Weekday Overtime / Undertime Split",
        OVERTIME_REF,
        serde_json::json!({
            "regular_hours": regular_hours.normalize().to_string(),
            "required_hours": required_hours.normalize().to_string(),
            "daily_required_hours": rules.daily_required_hours.normalize().to_string()
        }),
        serde_json::json!({
            "overtime_hours": overtime_hours.normalize().to_string(),
            "undertime_hours": undertime_hours.normalize().to_string()
        }),
        format!(
            "Weekday hours {} against {} required ({} days x {}): {} overtime, {} undertime",
            regular_hours.normalize(),
            required_hours.normalize(),
            work_days,
            rules.daily_required_hours.normalize(),
            overtime_hours.normalize(),
            undertime_hours.normalize()
        ),
    );

    // Step 3: Prorate the monthly salary over the calendar days in range
    let days_in_range = range.days_inclusive();
    let prorated_base_salary =
        (employee.base_salary / rules.proration_days) * Decimal::from(days_in_range);

    trail.record(
        "salary_proration",
        "Base Salary Proration",
        "",
        serde_json::json!({
            "base_salary": employee.base_salary.normalize().to_string(),
            "days_in_range": days_in_range,
            "proration_days": rules.proration_days.normalize().to_string()
        }),
        serde_json::json!({
            "prorated_base_salary": prorated_base_salary.normalize().to_string()
        }),
        format!(
            "{} / {} x {} days = {}",
            employee.base_salary.normalize(),
            rules.proration_days.normalize(),
            days_in_range,
            prorated_base_salary.normalize()
        ),
    );

    // Step 4: Premium pay for weekday overtime and Sunday work
    let hourly_rate = employee.hourly_rate;
    let weekday_overtime_pay = overtime_hours * hourly_rate * rules.weekday_overtime_multiplier;
    let sunday_pay = sunday_hours * hourly_rate * rules.sunday_multiplier;
    let overtime_pay = weekday_overtime_pay + sunday_pay;

    trail.record(
        "premium_pay",
        "Overtime and Sunday Premium Pay",
        WEEKLY_REST_REF,
        serde_json::json!({
            "overtime_hours": overtime_hours.normalize().to_string(),
            "sunday_hours": sunday_hours.normalize().to_string(),
            "hourly_rate": hourly_rate.normalize().to_string(),
            "weekday_multiplier": rules.weekday_overtime_multiplier.normalize().to_string(),
            "sunday_multiplier": rules.sunday_multiplier.normalize().to_string()
        }),
        serde_json::json!({
            "weekday_overtime_pay": weekday_overtime_pay.normalize().to_string(),
            "sunday_pay": sunday_pay.normalize().to_string(),
            "overtime_pay": overtime_pay.normalize().to_string()
        }),
        format!(
            "{} h x {} x {} + {} Sunday h x {} x {} = {}",
            overtime_hours.normalize(),
            hourly_rate.normalize(),
            rules.weekday_overtime_multiplier.normalize(),
            sunday_hours.normalize(),
            hourly_rate.normalize(),
            rules.sunday_multiplier.normalize(),
            overtime_pay.normalize()
        ),
    );

    // Step 5: Undertime deduction at the plain hourly rate
    let undertime_deduction = undertime_hours * hourly_rate;

    trail.record(
        "undertime_deduction",
        "Undertime Deduction",
        "",
        serde_json::json!({
            "undertime_hours": undertime_hours.normalize().to_string(),
            "hourly_rate": hourly_rate.normalize().to_string()
        }),
        serde_json::json!({
            "undertime_deduction": undertime_deduction.normalize().to_string()
        }),
        format!(
            "{} h x {} = {}",
            undertime_hours.normalize(),
            hourly_rate.normalize(),
            undertime_deduction.normalize()
        ),
    );

    // Step 6: Bonuses and deductions dated within the range
    let bonuses: Vec<Bonus> = employee.bonuses_in(range).cloned().collect();
    let deductions: Vec<Deduction> = employee.deductions_in(range).cloned().collect();
    let total_bonuses: Decimal = bonuses.iter().map(|b| b.amount).sum();
    let total_deductions: Decimal = deductions.iter().map(|d| d.amount).sum();

    trail.record(
        "period_adjustments",
        "Bonuses and Deductions in Period",
        "",
        serde_json::json!({
            "bonus_count": bonuses.len(),
            "deduction_count": deductions.len()
        }),
        serde_json::json!({
            "total_bonuses": total_bonuses.normalize().to_string(),
            "total_deductions": total_deductions.normalize().to_string()
        }),
        format!(
            "{} bonuses totalling {}, {} deductions totalling {}",
            bonuses.len(),
            total_bonuses.normalize(),
            deductions.len(),
            total_deductions.normalize()
        ),
    );

    // Step 7: Net salary
    let net_salary =
        prorated_base_salary + overtime_pay + total_bonuses - undertime_deduction - total_deductions;

    trail.record(
        "net_salary",
        "Net Salary",
        "",
        serde_json::json!({
            "prorated_base_salary": prorated_base_salary.normalize().to_string(),
            "overtime_pay": overtime_pay.normalize().to_string(),
            "total_bonuses": total_bonuses.normalize().to_string(),
            "undertime_deduction": undertime_deduction.normalize().to_string(),
            "total_deductions": total_deductions.normalize().to_string()
        }),
        serde_json::json!({
            "net_salary": net_salary.normalize().to_string()
        }),
        format!(
            "{} + {} + {} - {} - {} = {}",
            prorated_base_salary.normalize(),
            overtime_pay.normalize(),
            total_bonuses.normalize(),
            undertime_deduction.normalize(),
            total_deductions.normalize(),
            net_salary.normalize()
        ),
    );

    debug!(
        employee_id = %employee.id,
        work_days,
        total_hours = %total_hours.normalize(),
        net_salary = %net_salary.normalize(),
        "Period report computed"
    );

    PeriodReport {
        employee_id: employee.id.clone(),
        employee_name: employee.full_name.clone(),
        start_date: range.start(),
        end_date: range.end(),
        work_days,
        total_hours,
        required_hours,
        overtime_hours,
        sunday_hours,
        undertime_hours,
        base_salary: employee.base_salary,
        hourly_rate,
        days_in_range,
        prorated_base_salary,
        overtime_pay,
        undertime_deduction,
        total_bonuses,
        total_deductions,
        net_salary,
        bonuses,
        deductions,
        audit_steps: trail.into_steps(),
    }
}
