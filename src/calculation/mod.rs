//! Calculation logic for the payroll engine.
//!
//! This module contains every calculation the engine performs: time-clock
//! durations, period attendance and payroll aggregation, batch reports,
//! termination (severance and notice) pay, annual leave entitlement and
//! daily attendance. All functions are pure and take their rules and
//! rates as parameters.

mod attendance;
mod audit;
mod batch_report;
mod duration;
mod leave_entitlement;
mod notice;
mod period_report;
mod salary;
mod tenure;
mod termination;
mod work_rules;

pub use attendance::summarize_attendance;
pub use batch_report::{EmployeeSelection, compute_batch_report, compute_selected_report};
pub use duration::{MINUTES_PER_DAY, calculate_duration, parse_clock_time};
pub use leave_entitlement::{
    AGE_MINIMUM_ENTITLEMENT_DAYS, MEDICAL_REPORT_UNPAID_DAYS, calculate_leave_summary,
};
pub use notice::{NoticeBracket, NoticeSchedule};
pub use period_report::compute_period_report;
pub use salary::{DEFAULT_HOURLY_RATE_DIVISOR, derive_hourly_rate, round_currency};
pub use tenure::calculate_tenure;
pub use termination::{
    DEFAULT_NOTICE_INCOME_TAX_RATE, DEFAULT_STAMP_TAX_RATE, TerminationParams,
    compute_termination,
};
pub use work_rules::{
    DEFAULT_DAILY_REQUIRED_HOURS, DEFAULT_PRORATION_DAYS, DEFAULT_SUNDAY_MULTIPLIER,
    DEFAULT_WEEKDAY_OVERTIME_MULTIPLIER, WorkRules,
};
