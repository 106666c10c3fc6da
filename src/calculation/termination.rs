//! Termination payment calculation (kıdem ve ihbar tazminatı).
//!
//! This module computes severance and notice pay for one employee leaving
//! on a chosen date.
//!
//! ## Severance (1475 md. 14)
//!
//! The dressed wage (gross salary plus regular benefits) is capped at the
//! severance ceiling, then paid per full year, per twelfth for each month
//! and per 1/365 for each day of calendar tenure. Severance carries stamp
//! duty only.
//!
//! ## Notice (4857 md. 17)
//!
//! Notice weeks come from the [`NoticeSchedule`] by whole days of service.
//! Notice pay is the uncapped dressed wage per 30-day month times the
//! notice days, and carries income tax and stamp duty.
//!
//! Nothing is rounded here; currency rounding is for display.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, TerminationCalculation};

use super::audit::AuditTrail;
use super::notice::NoticeSchedule;
use super::tenure::calculate_tenure;

/// Damga vergisi rate (0.759%).
pub const DEFAULT_STAMP_TAX_RATE: Decimal = Decimal::from_parts(759, 0, 0, false, 5);

/// Income tax bracket applied to notice pay (15%).
pub const DEFAULT_NOTICE_INCOME_TAX_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);
const DAYS_PER_YEAR: Decimal = Decimal::from_parts(365, 0, 0, false, 0);
const DAYS_PER_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);
const DAYS_PER_WEEK: u32 = 7;

const SEVERANCE_REF: &str = "1475 sayılı İş Kanunu md. 14";
const NOTICE_REF: &str = "4857 sayılı İş Kanunu md. 17";
const STAMP_TAX_REF: &str = "488 sayılı Damga Vergisi Kanunu";
const INCOME_TAX_REF: &str = "193 sayılı Gelir Vergisi Kanunu md. 103";

/// Wage and rate inputs for a termination calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminationParams {
    /// Monthly gross salary.
    pub gross_salary: Decimal,
    /// Regular monthly benefits (meal, transport).
    pub additional_benefits: Decimal,
    /// Legal cap on the monthly severance wage base.
    pub severance_ceiling: Decimal,
    /// Stamp duty rate.
    pub stamp_tax_rate: Decimal,
    /// Income tax rate applied to notice pay.
    pub notice_income_tax_rate: Decimal,
    /// Notice weeks by service length.
    pub notice_schedule: NoticeSchedule,
}

impl TerminationParams {
    /// Parameters with the default tax rates and notice schedule.
    ///
    /// # Examples
    ///
    /// ```
    /// use bordro_engine::calculation::{TerminationParams, DEFAULT_STAMP_TAX_RATE};
    /// use rust_decimal::Decimal;
    ///
    /// let params = TerminationParams::new(
    ///     Decimal::new(30000, 0),
    ///     Decimal::ZERO,
    ///     Decimal::new(5434376, 2),
    /// );
    /// assert_eq!(params.stamp_tax_rate, DEFAULT_STAMP_TAX_RATE);
    /// ```
    pub fn new(gross_salary: Decimal, additional_benefits: Decimal, severance_ceiling: Decimal) -> Self {
        Self {
            gross_salary,
            additional_benefits,
            severance_ceiling,
            stamp_tax_rate: DEFAULT_STAMP_TAX_RATE,
            notice_income_tax_rate: DEFAULT_NOTICE_INCOME_TAX_RATE,
            notice_schedule: NoticeSchedule::default(),
        }
    }
}

/// Computes severance and notice pay for an employee leaving on `termination_date`.
///
/// # Arguments
///
/// * `employee` - The employee; must have a hire date
/// * `termination_date` - Last day of employment
/// * `params` - Wages, ceiling, tax rates and notice schedule
///
/// # Returns
///
/// The [`TerminationCalculation`], `MissingHireDate` if the employee has no
/// hire date, or `TerminationBeforeHire` if the dates are inverted.
///
/// # Examples
///
/// ```
/// use bordro_engine::calculation::{compute_termination, TerminationParams};
/// use bordro_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut employee = Employee::new("e1", "Ali Kaya");
/// employee.hire_date = NaiveDate::from_ymd_opt(2020, 1, 15);
///
/// let params = TerminationParams::new(
///     Decimal::new(30000, 0),
///     Decimal::ZERO,
///     Decimal::new(5434376, 2),
/// );
/// let result = compute_termination(
///     &employee,
///     NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
///     &params,
/// )
/// .unwrap();
///
/// assert_eq!(result.tenure.to_string(), "5 Yıl, 0 Ay, 0 Gün");
/// assert_eq!(result.total_net, Decimal::new(19603646, 2));
/// ```
pub fn compute_termination(
    employee: &Employee,
    termination_date: NaiveDate,
    params: &TerminationParams,
) -> EngineResult<TerminationCalculation> {
    let hire_date = employee
        .hire_date
        .ok_or_else(|| EngineError::MissingHireDate {
            employee_id: employee.id.clone(),
        })?;

    if termination_date < hire_date {
        return Err(EngineError::TerminationBeforeHire {
            hire_date,
            termination_date,
        });
    }

    let mut trail = AuditTrail::new();

    // Step 1: Calendar tenure and whole days of service
    let tenure = calculate_tenure(hire_date, termination_date);
    let total_days = (termination_date - hire_date).num_days();

    trail.record(
        "tenure",
        "Length of Service",
        "",
        serde_json::json!({
            "hire_date": hire_date.to_string(),
            "termination_date": termination_date.to_string()
        }),
        serde_json::json!({
            "years": tenure.years,
            "months": tenure.months,
            "days": tenure.days,
            "total_days": total_days
        }),
        format!("Service from {} to {}: {} ({} days)", hire_date, termination_date, tenure, total_days),
    );

    // Step 2: Dressed wage and severance base
    let dressed_wage = params.gross_salary + params.additional_benefits;
    let severance_base_wage = dressed_wage.min(params.severance_ceiling);
    let capped = severance_base_wage < dressed_wage;

    trail.record(
        "severance_base_wage",
        "Severance Wage Base",
        SEVERANCE_REF,
        serde_json::json!({
            "gross_salary": params.gross_salary.normalize().to_string(),
            "additional_benefits": params.additional_benefits.normalize().to_string(),
            "severance_ceiling": params.severance_ceiling.normalize().to_string()
        }),
        serde_json::json!({
            "dressed_wage": dressed_wage.normalize().to_string(),
            "severance_base_wage": severance_base_wage.normalize().to_string(),
            "capped": capped
        }),
        if capped {
            format!(
                "Dressed wage {} exceeds the ceiling; severance base capped at {}",
                dressed_wage.normalize(),
                severance_base_wage.normalize()
            )
        } else {
            format!(
                "Dressed wage {} is within the ceiling {}",
                dressed_wage.normalize(),
                params.severance_ceiling.normalize()
            )
        },
    );

    // Step 3: Gross and net severance
    let gross_severance = severance_base_wage * Decimal::from(tenure.years)
        + severance_base_wage / MONTHS_PER_YEAR * Decimal::from(tenure.months)
        + severance_base_wage / DAYS_PER_YEAR * Decimal::from(tenure.days);
    let stamp_tax_severance = gross_severance * params.stamp_tax_rate;
    let net_severance = gross_severance - stamp_tax_severance;

    trail.record(
        "severance_pay",
        "Severance Pay",
        STAMP_TAX_REF,
        serde_json::json!({
            "severance_base_wage": severance_base_wage.normalize().to_string(),
            "tenure": tenure.to_string(),
            "stamp_tax_rate": params.stamp_tax_rate.normalize().to_string()
        }),
        serde_json::json!({
            "gross_severance": gross_severance.normalize().to_string(),
            "stamp_tax_severance": stamp_tax_severance.normalize().to_string(),
            "net_severance": net_severance.normalize().to_string()
        }),
        format!(
            "{} x {} years + /12 x {} months + /365 x {} days = {}; less stamp duty {} = {}",
            severance_base_wage.normalize(),
            tenure.years,
            tenure.months,
            tenure.days,
            gross_severance.normalize(),
            stamp_tax_severance.normalize(),
            net_severance.normalize()
        ),
    );

    // Step 4: Notice period
    let notice_weeks = params.notice_schedule.weeks_for(total_days);
    let notice_days = notice_weeks * DAYS_PER_WEEK;

    trail.record(
        "notice_period",
        "Notice Period",
        NOTICE_REF,
        serde_json::json!({ "total_days": total_days }),
        serde_json::json!({
            "notice_weeks": notice_weeks,
            "notice_days": notice_days
        }),
        format!("{} days of service earn {} weeks of notice", total_days, notice_weeks),
    );

    // Step 5: Gross and net notice pay
    let gross_notice_pay = dressed_wage / DAYS_PER_MONTH * Decimal::from(notice_days);
    let income_tax_notice = gross_notice_pay * params.notice_income_tax_rate;
    let stamp_tax_notice = gross_notice_pay * params.stamp_tax_rate;
    let net_notice_pay = gross_notice_pay - income_tax_notice - stamp_tax_notice;

    trail.record(
        "notice_pay",
        "Notice Pay",
        INCOME_TAX_REF,
        serde_json::json!({
            "dressed_wage": dressed_wage.normalize().to_string(),
            "notice_days": notice_days,
            "income_tax_rate": params.notice_income_tax_rate.normalize().to_string(),
            "stamp_tax_rate": params.stamp_tax_rate.normalize().to_string()
        }),
        serde_json::json!({
            "gross_notice_pay": gross_notice_pay.normalize().to_string(),
            "income_tax_notice": income_tax_notice.normalize().to_string(),
            "stamp_tax_notice": stamp_tax_notice.normalize().to_string(),
            "net_notice_pay": net_notice_pay.normalize().to_string()
        }),
        format!(
            "{} / 30 x {} days = {}; less income tax {} and stamp duty {} = {}",
            dressed_wage.normalize(),
            notice_days,
            gross_notice_pay.normalize(),
            income_tax_notice.normalize(),
            stamp_tax_notice.normalize(),
            net_notice_pay.normalize()
        ),
    );

    // Step 6: Total
    let total_net = net_severance + net_notice_pay;

    trail.record(
        "total_net",
        "Total Net Termination Pay",
        "",
        serde_json::json!({
            "net_severance": net_severance.normalize().to_string(),
            "net_notice_pay": net_notice_pay.normalize().to_string()
        }),
        serde_json::json!({ "total_net": total_net.normalize().to_string() }),
        format!(
            "{} + {} = {}",
            net_severance.normalize(),
            net_notice_pay.normalize(),
            total_net.normalize()
        ),
    );

    info!(
        employee_id = %employee.id,
        total_days,
        notice_weeks,
        total_net = %total_net.normalize(),
        "Termination pay computed"
    );

    Ok(TerminationCalculation {
        employee_id: employee.id.clone(),
        hire_date,
        termination_date,
        tenure,
        total_days,
        dressed_wage,
        severance_base_wage,
        gross_severance,
        stamp_tax_severance,
        net_severance,
        notice_weeks,
        gross_notice_pay,
        income_tax_notice,
        stamp_tax_notice,
        net_notice_pay,
        total_net,
        audit_steps: trail.into_steps(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tenure;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn hired(on: &str) -> Employee {
        let mut employee = Employee::new("12345678901", "Mehmet Demir");
        employee.hire_date = Some(date(on));
        employee
    }

    fn params(gross: &str, benefits: &str) -> TerminationParams {
        TerminationParams::new(dec(gross), dec(benefits), dec("54343.76"))
    }

    #[test]
    fn test_five_year_worked_example() {
        let result =
            compute_termination(&hired("2020-01-15"), date("2025-01-15"), &params("30000", "0"))
                .unwrap();

        assert_eq!(
            result.tenure,
            Tenure {
                years: 5,
                months: 0,
                days: 0
            }
        );
        assert_eq!(result.total_days, 1827);
        assert_eq!(result.dressed_wage, dec("30000"));
        assert_eq!(result.severance_base_wage, dec("30000"));
        assert_eq!(result.gross_severance, dec("150000"));
        assert_eq!(result.stamp_tax_severance, dec("1138.5"));
        assert_eq!(result.net_severance, dec("148861.5"));
        assert_eq!(result.notice_weeks, 8);
        assert_eq!(result.gross_notice_pay, dec("56000"));
        assert_eq!(result.income_tax_notice, dec("8400"));
        assert_eq!(result.stamp_tax_notice, dec("425.04"));
        assert_eq!(result.net_notice_pay, dec("47174.96"));
        assert_eq!(result.total_net, dec("196036.46"));
    }

    #[test]
    fn test_ceiling_caps_severance_but_not_notice() {
        let result = compute_termination(
            &hired("2020-01-15"),
            date("2025-01-15"),
            &params("60000", "5000"),
        )
        .unwrap();

        assert_eq!(result.dressed_wage, dec("65000"));
        assert_eq!(result.severance_base_wage, dec("54343.76"));
        assert_eq!(result.gross_severance, dec("271718.80"));
        // Notice uses the full dressed wage: 65000 / 30 x 56
        assert_eq!(result.gross_notice_pay.round_dp(2), dec("121333.33"));
        assert_eq!(result.audit_steps[1].output["capped"], true);
    }

    #[test]
    fn test_months_and_days_are_prorated() {
        // 2 years, 9 months, 21 days
        let result = compute_termination(
            &hired("2022-03-20"),
            date("2025-01-10"),
            &params("36500", "0"),
        )
        .unwrap();

        // 73000 + 3041.666.. x 9 + 100 x 21
        let expected = dec("36500") * dec("2") + dec("36500") / dec("12") * dec("9")
            + dec("36500") / dec("365") * dec("21");
        assert_eq!(result.gross_severance, expected);
        assert_eq!(result.gross_severance.round_dp(2), dec("102475.00"));
        assert_eq!(result.notice_weeks, 6);
    }

    #[test]
    fn test_short_service_gets_two_weeks_notice() {
        let result =
            compute_termination(&hired("2025-01-01"), date("2025-03-01"), &params("30000", "0"))
                .unwrap();

        assert_eq!(result.total_days, 59);
        assert_eq!(result.notice_weeks, 2);
        assert_eq!(result.gross_notice_pay, dec("14000"));
        assert_eq!(result.tenure.years, 0);
        assert_eq!(result.tenure.months, 2);
    }

    #[test]
    fn test_same_day_termination_is_zero_severance() {
        let result =
            compute_termination(&hired("2025-01-01"), date("2025-01-01"), &params("30000", "0"))
                .unwrap();

        assert_eq!(result.total_days, 0);
        assert_eq!(result.gross_severance, Decimal::ZERO);
        assert_eq!(result.notice_weeks, 2);
    }

    #[test]
    fn test_termination_before_hire_rejected() {
        let result =
            compute_termination(&hired("2025-01-01"), date("2024-12-31"), &params("30000", "0"));
        assert!(matches!(
            result,
            Err(EngineError::TerminationBeforeHire { .. })
        ));
    }

    #[test]
    fn test_missing_hire_date_rejected() {
        let employee = Employee::new("x", "No Hire Date");
        let result = compute_termination(&employee, date("2025-01-01"), &params("30000", "0"));
        assert!(matches!(result, Err(EngineError::MissingHireDate { .. })));
    }

    #[test]
    fn test_custom_rates_are_used() {
        let mut custom = params("30000", "0");
        custom.stamp_tax_rate = Decimal::ZERO;
        custom.notice_income_tax_rate = Decimal::ZERO;

        let result =
            compute_termination(&hired("2020-01-15"), date("2025-01-15"), &custom).unwrap();
        assert_eq!(result.net_severance, dec("150000"));
        assert_eq!(result.net_notice_pay, dec("56000"));
        assert_eq!(result.total_net, dec("206000"));
    }

    #[test]
    fn test_audit_steps_cover_each_stage() {
        let result =
            compute_termination(&hired("2020-01-15"), date("2025-01-15"), &params("30000", "0"))
                .unwrap();
        let rule_ids: Vec<&str> = result.audit_steps.iter().map(|s| s.rule_id.as_str()).collect();
        assert_eq!(
            rule_ids,
            vec![
                "tenure",
                "severance_base_wage",
                "severance_pay",
                "notice_period",
                "notice_pay",
                "total_net"
            ]
        );
        assert_eq!(result.audit_steps[5].output["total_net"], "196036.46");
    }
}
