//! Working-time rules for period aggregation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Required hours per logged work day.
pub const DEFAULT_DAILY_REQUIRED_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Weekday overtime premium (150%).
pub const DEFAULT_WEEKDAY_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Sunday premium (200%).
pub const DEFAULT_SUNDAY_MULTIPLIER: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Days in the notional month used to prorate monthly salary.
pub const DEFAULT_PRORATION_DAYS: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// The parameters a period report is computed with.
///
/// `WorkRules::default()` gives the rules the payroll office applies today:
/// 8 required hours per work day, weekday overtime at 150%, Sunday hours at
/// 200% and a 30-day salary month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkRules {
    /// Required hours per logged work day.
    pub daily_required_hours: Decimal,
    /// Multiplier applied to the hourly rate for weekday overtime.
    pub weekday_overtime_multiplier: Decimal,
    /// Multiplier applied to the hourly rate for Sunday hours.
    pub sunday_multiplier: Decimal,
    /// Divisor turning monthly salary into a daily accrual.
    pub proration_days: Decimal,
}

impl Default for WorkRules {
    fn default() -> Self {
        Self {
            daily_required_hours: DEFAULT_DAILY_REQUIRED_HOURS,
            weekday_overtime_multiplier: DEFAULT_WEEKDAY_OVERTIME_MULTIPLIER,
            sunday_multiplier: DEFAULT_SUNDAY_MULTIPLIER,
            proration_days: DEFAULT_PRORATION_DAYS,
        }
    }
}
