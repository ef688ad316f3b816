//! Monthly-to-hourly rate conversion.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::config::StatutoryRates;

/// Weeks in a year, used to average weeks per month as 52/12.
pub const WEEKS_PER_YEAR: Decimal = dec!(52);

/// Months in a year.
pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Converts a monthly salary to an hourly rate.
///
/// The rate is `monthly_salary / (standard_weekly_hours × 52/12)`. It is
/// deliberately left unrounded; rounding happens on the pay amounts derived
/// from it.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_hourly_rate;
/// use payroll_engine::config::StatutoryRates;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = StatutoryRates::timor_leste();
/// let hourly = calculate_hourly_rate(Decimal::from(500), &rates);
///
/// // 500 / (44 × 52 / 12) ≈ 2.6224
/// assert_eq!(hourly.round_dp(4), Decimal::from_str("2.6224").unwrap());
/// ```
pub fn calculate_hourly_rate(monthly_salary: Decimal, rates: &StatutoryRates) -> Decimal {
    // Multiplying through by 12 first keeps the divisor exact (44 × 52 = 2288).
    monthly_salary * MONTHS_PER_YEAR / (rates.standard_weekly_hours * WEEKS_PER_YEAR)
}
