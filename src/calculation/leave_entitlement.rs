//! Annual leave entitlement (yıllık ücretli izin, 4857 md. 53).
//!
//! Entitlement depends on years of service, measured as days since hire
//! divided by 365.25:
//!
//! | Service          | Days |
//! |------------------|------|
//! | under 1 year     | 0    |
//! | 1 to 5 years     | 14   |
//! | over 5, under 15 | 20   |
//! | 15 years or more | 26   |
//!
//! Employees aged 18 or younger, or 50 or older, get at least 20 days once
//! they are entitled to any leave at all.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{Employee, LeaveStatus, LeaveSummary, LeaveType};

const DAYS_PER_YEAR: Decimal = Decimal::from_parts(36525, 0, 0, false, 2);
const ONE_YEAR: Decimal = Decimal::from_parts(1, 0, 0, false, 0);
const FIVE_YEARS: Decimal = Decimal::from_parts(5, 0, 0, false, 0);
const FIFTEEN_YEARS: Decimal = Decimal::from_parts(15, 0, 0, false, 0);
const YOUNG_WORKER_AGE: Decimal = Decimal::from_parts(18, 0, 0, false, 0);
const SENIOR_WORKER_AGE: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Minimum entitlement for young and senior workers.
pub const AGE_MINIMUM_ENTITLEMENT_DAYS: u32 = 20;

/// Unpaid days charged once any medical-report leave is approved.
pub const MEDICAL_REPORT_UNPAID_DAYS: u32 = 2;

fn years_between(from: NaiveDate, to: NaiveDate) -> Decimal {
    Decimal::from((to - from).num_days()) / DAYS_PER_YEAR
}

fn service_entitlement(years_worked: Decimal) -> (u32, &'static str) {
    if years_worked < ONE_YEAR {
        (0, "1 yıldan az kıdem")
    } else if years_worked <= FIVE_YEARS {
        (14, "1-5 yıl kıdem (14 gün)")
    } else if years_worked < FIFTEEN_YEARS {
        (20, "5-15 yıl kıdem (20 gün)")
    } else {
        (26, "15+ yıl kıdem (26 gün)")
    }
}

/// Summarizes annual leave entitlement and usage as of a date.
///
/// # Arguments
///
/// * `employee` - The employee with their leave records
/// * `as_of` - The date service length and age are measured to
///
/// # Examples
///
/// ```
/// use bordro_engine::calculation::calculate_leave_summary;
/// use bordro_engine::models::Employee;
/// use chrono::NaiveDate;
///
/// let mut employee = Employee::new("e1", "Ali Kaya");
/// employee.hire_date = NaiveDate::from_ymd_opt(2018, 3, 1);
///
/// let summary = calculate_leave_summary(&employee, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
/// assert_eq!(summary.entitlement_days, 20);
/// ```
pub fn calculate_leave_summary(employee: &Employee, as_of: NaiveDate) -> LeaveSummary {
    let (years_worked, entitlement_days, basis) = match employee.hire_date {
        None => (Decimal::ZERO, 0, "Giriş tarihi yok".to_string()),
        Some(hire_date) => {
            let years_worked = years_between(hire_date, as_of).max(Decimal::ZERO);
            let (mut days, basis) = service_entitlement(years_worked);
            let mut basis = basis.to_string();

            if let Some(birth_date) = employee.birth_date {
                let age = years_between(birth_date, as_of).abs();
                let age_exception = age <= YOUNG_WORKER_AGE || age >= SENIOR_WORKER_AGE;
                if days > 0 && days < AGE_MINIMUM_ENTITLEMENT_DAYS && age_exception {
                    days = AGE_MINIMUM_ENTITLEMENT_DAYS;
                    basis.push_str(" + Yaş avantajı (50+ veya 18- için min. 20 gün)");
                }
            }

            (years_worked, days, basis)
        }
    };

    let approved: Vec<_> = employee.leaves.iter().filter(|l| l.is_approved()).collect();
    let total_approved_days: Decimal = approved.iter().map(|l| l.days).sum();
    let used_annual_days: Decimal = approved
        .iter()
        .filter(|l| l.leave_type == LeaveType::Annual)
        .map(|l| l.days)
        .sum();
    let remaining_annual_days = (Decimal::from(entitlement_days) - used_annual_days).max(Decimal::ZERO);

    let medical_report_unpaid_days = if approved
        .iter()
        .any(|l| l.leave_type == LeaveType::MedicalReport)
    {
        MEDICAL_REPORT_UNPAID_DAYS
    } else {
        0
    };

    let pending_requests = employee
        .leaves
        .iter()
        .filter(|l| l.status == LeaveStatus::Pending)
        .count() as u32;

    debug!(
        employee_id = %employee.id,
        entitlement_days,
        remaining = %remaining_annual_days.normalize(),
        "Leave summary computed"
    );

    LeaveSummary {
        employee_id: employee.id.clone(),
        as_of,
        years_worked,
        entitlement_days,
        basis,
        total_approved_days,
        used_annual_days,
        remaining_annual_days,
        pending_requests,
        medical_report_unpaid_days,
    }
}
