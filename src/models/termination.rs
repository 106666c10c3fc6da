//! Termination payment models.
//!
//! This module contains [`Tenure`] and [`TerminationCalculation`], the
//! result of a severance (kıdem) and notice (ihbar) pay calculation.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AuditStep;

/// Length of service broken into calendar years, months and days.
///
/// # Example
///
/// ```
/// use bordro_engine::models::Tenure;
///
/// let tenure = Tenure { years: 5, months: 0, days: 0 };
/// assert_eq!(tenure.to_string(), "5 Yıl, 0 Ay, 0 Gün");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenure {
    /// Whole years of service.
    pub years: u32,
    /// Remaining whole months (0-11).
    pub months: u32,
    /// Remaining days.
    pub days: u32,
}

impl fmt::Display for Tenure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Yıl, {} Ay, {} Gün", self.years, self.months, self.days)
    }
}

/// The complete severance and notice pay breakdown for one termination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminationCalculation {
    /// The employee the calculation is for.
    pub employee_id: String,
    /// The employee's hire date.
    pub hire_date: NaiveDate,
    /// The termination date used for the calculation.
    pub termination_date: NaiveDate,
    /// Calendar tenure between hire and termination.
    pub tenure: Tenure,
    /// Whole days between hire and termination; selects the notice bracket.
    pub total_days: i64,
    /// Gross salary plus regular benefits (giydirilmiş ücret).
    pub dressed_wage: Decimal,
    /// Dressed wage capped at the severance ceiling.
    pub severance_base_wage: Decimal,
    /// Gross severance pay (kıdem tazminatı).
    pub gross_severance: Decimal,
    /// Stamp duty on severance.
    pub stamp_tax_severance: Decimal,
    /// Severance after stamp duty.
    pub net_severance: Decimal,
    /// Notice period length in weeks.
    pub notice_weeks: u32,
    /// Gross notice pay (ihbar tazminatı).
    pub gross_notice_pay: Decimal,
    /// Income tax on notice pay.
    pub income_tax_notice: Decimal,
    /// Stamp duty on notice pay.
    pub stamp_tax_notice: Decimal,
    /// Notice pay after income tax and stamp duty.
    pub net_notice_pay: Decimal,
    /// Net severance plus net notice pay.
    pub total_net: Decimal,
    /// How each figure was reached.
    pub audit_steps: Vec<AuditStep>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenure_display() {
        let tenure = Tenure {
            years: 2,
            months: 11,
            days: 30,
        };
        assert_eq!(tenure.to_string(), "2 Yıl, 11 Ay, 30 Gün");
    }

    #[test]
    fn test_tenure_serialization() {
        let tenure = Tenure {
            years: 1,
            months: 2,
            days: 3,
        };
        let json = serde_json::to_string(&tenure).unwrap();
        assert_eq!(json, r#"{"years":1,"months":2,"days":3}"#);
    }
}
