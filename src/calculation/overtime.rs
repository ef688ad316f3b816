//! Overtime pay calculation.
//!
//! Regular overtime and holiday/rest-day overtime are paid at different
//! multipliers of the hourly rate. The two amounts are computed and rounded
//! independently; hours are never pooled before rounding.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::StatutoryRates;

use super::round_to_cents;

/// Overtime pay split by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimePay {
    /// Pay for overtime on ordinary working days.
    pub regular: Decimal,
    /// Pay for overtime on public holidays and rest days.
    pub holiday: Decimal,
}

impl OvertimePay {
    /// Sum of both kinds.
    pub fn total(&self) -> Decimal {
        self.regular + self.holiday
    }
}

/// Calculates regular and holiday overtime pay.
///
/// `regular = round2(hourly × regular_multiplier × regular_hours)` and
/// `holiday = round2(hourly × holiday_multiplier × holiday_hours)`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_overtime_pay;
/// use payroll_engine::config::StatutoryRates;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = StatutoryRates::timor_leste();
/// let pay = calculate_overtime_pay(
///     Decimal::from(10),
///     Decimal::from(2),
///     Decimal::from(3),
///     &rates,
/// );
///
/// assert_eq!(pay.regular, Decimal::from_str("30.00").unwrap());
/// assert_eq!(pay.holiday, Decimal::from_str("60.00").unwrap());
/// ```
pub fn calculate_overtime_pay(
    hourly_rate: Decimal,
    regular_hours: Decimal,
    holiday_hours: Decimal,
    rates: &StatutoryRates,
) -> OvertimePay {
    OvertimePay {
        regular: round_to_cents(hourly_rate * rates.overtime.regular_multiplier * regular_hours),
        holiday: round_to_cents(hourly_rate * rates.overtime.holiday_multiplier * holiday_hours),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_hourly_rate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rates() -> StatutoryRates {
        StatutoryRates::timor_leste()
    }

    #[test]
    fn test_regular_overtime_on_500_salary() {
        let hourly = calculate_hourly_rate(dec("500"), &rates());
        let pay = calculate_overtime_pay(hourly, dec("10"), Decimal::ZERO, &rates());

        // 2.6223776.. × 1.5 × 10 = 39.3356..
        assert_eq!(pay.regular, dec("39.34"));
        assert_eq!(pay.holiday, Decimal::ZERO);
    }

    #[test]
    fn test_holiday_overtime_is_double_time() {
        let hourly = calculate_hourly_rate(dec("500"), &rates());
        let pay = calculate_overtime_pay(hourly, Decimal::ZERO, dec("4"), &rates());

        // 2.6223776.. × 2 × 4 = 20.979..
        assert_eq!(pay.holiday, dec("20.98"));
    }

    #[test]
    fn test_kinds_rounded_independently() {
        let hourly = dec("1.0016");
        let pay = calculate_overtime_pay(hourly, dec("1"), dec("1"), &rates());

        // 1.5024 -> 1.50 and 2.0032 -> 2.00; pooling first would give 3.51
        assert_eq!(pay.regular, dec("1.50"));
        assert_eq!(pay.holiday, dec("2.00"));
        assert_eq!(pay.total(), dec("3.50"));
    }

    #[test]
    fn test_no_hours_no_pay() {
        let pay = calculate_overtime_pay(dec("5"), Decimal::ZERO, Decimal::ZERO, &rates());
        assert_eq!(pay.total(), Decimal::ZERO);
    }

    #[test]
    fn test_fractional_hours() {
        let pay = calculate_overtime_pay(dec("4"), dec("0.5"), Decimal::ZERO, &rates());
        assert_eq!(pay.regular, dec("3.00"));
    }
}
