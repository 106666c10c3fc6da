//! Salary helpers: hourly rate derivation and currency rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Monthly working hours a salary is divided by to get an hourly rate.
pub const DEFAULT_HOURLY_RATE_DIVISOR: Decimal = Decimal::from_parts(225, 0, 0, false, 0);

/// Derives an hourly rate from a monthly salary.
///
/// Returns zero when either the salary or the divisor is not positive.
///
/// # Examples
///
/// ```
/// use bordro_engine::calculation::{derive_hourly_rate, DEFAULT_HOURLY_RATE_DIVISOR};
/// use rust_decimal::Decimal;
///
/// let rate = derive_hourly_rate(Decimal::new(22500, 0), DEFAULT_HOURLY_RATE_DIVISOR);
/// assert_eq!(rate, Decimal::new(100, 0));
/// ```
pub fn derive_hourly_rate(base_salary: Decimal, divisor: Decimal) -> Decimal {
    if base_salary <= Decimal::ZERO || divisor <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    base_salary / divisor
}

/// Rounds a currency amount to kuruş for display and export.
///
/// # Examples
///
/// ```
/// use bordro_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_currency(Decimal::new(12345, 3)), Decimal::new(1235, 2));
/// assert_eq!(round_currency(Decimal::new(-12345, 3)), Decimal::new(-1235, 2));
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_hourly_rate_from_salary() {
        assert_eq!(derive_hourly_rate(dec("30000"), dec("225")).round_dp(4), dec("133.3333"));
    }

    #[test]
    fn test_non_positive_inputs_give_zero() {
        assert_eq!(derive_hourly_rate(Decimal::ZERO, dec("225")), Decimal::ZERO);
        assert_eq!(derive_hourly_rate(dec("-100"), dec("225")), Decimal::ZERO);
        assert_eq!(derive_hourly_rate(dec("30000"), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_round_currency_midpoint_away_from_zero() {
        assert_eq!(round_currency(dec("0.005")), dec("0.01"));
        assert_eq!(round_currency(dec("-0.005")), dec("-0.01"));
        assert_eq!(round_currency(dec("121333.3333")), dec("121333.33"));
        assert_eq!(round_currency(dec("10")).to_string(), "10");
    }
}
