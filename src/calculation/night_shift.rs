//! Night work premium calculation.

use rust_decimal::Decimal;

use crate::config::StatutoryRates;

use super::round_to_cents;

/// Returns the premium rate for night work: the multiplier minus the
/// ordinary pay already covered by salary.
pub fn night_shift_premium_rate(rates: &StatutoryRates) -> Decimal {
    rates.night_shift_multiplier - Decimal::ONE
}

/// Calculates the night work premium, rounded to cents.
///
/// Only the portion above ordinary pay is paid: with a 1.25 multiplier the
/// premium is 25% of the hourly rate per night hour.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_night_shift_premium;
/// use payroll_engine::config::StatutoryRates;
/// use rust_decimal::Decimal;
///
/// let rates = StatutoryRates::timor_leste();
/// let premium = calculate_night_shift_premium(Decimal::from(4), Decimal::from(10), &rates);
/// assert_eq!(premium, Decimal::from(10));
/// ```
pub fn calculate_night_shift_premium(
    hourly_rate: Decimal,
    night_hours: Decimal,
    rates: &StatutoryRates,
) -> Decimal {
    round_to_cents(hourly_rate * night_shift_premium_rate(rates) * night_hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_hourly_rate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_premium_rate_is_quarter() {
        assert_eq!(
            night_shift_premium_rate(&StatutoryRates::timor_leste()),
            dec("0.25")
        );
    }

    #[test]
    fn test_premium_on_500_salary() {
        let rates = StatutoryRates::timor_leste();
        let hourly = calculate_hourly_rate(dec("500"), &rates);

        // 2.6223776.. × 0.25 × 20 = 13.1118..
        assert_eq!(calculate_night_shift_premium(hourly, dec("20"), &rates), dec("13.11"));
    }

    #[test]
    fn test_no_night_hours() {
        let rates = StatutoryRates::timor_leste();
        assert_eq!(
            calculate_night_shift_premium(dec("3.5"), Decimal::ZERO, &rates),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_premium_follows_configured_multiplier() {
        let mut rates = StatutoryRates::timor_leste();
        rates.night_shift_multiplier = dec("1.5");
        assert_eq!(
            calculate_night_shift_premium(dec("4"), dec("2"), &rates),
            dec("4.00")
        );
    }
}
