//! Wage income tax withholding.
//!
//! Residents are taxed at the flat rate on earnings above the monthly
//! exemption threshold. Non-residents get no exemption and are taxed on the
//! full amount.

use rust_decimal::Decimal;

use crate::config::StatutoryRates;

use super::round_to_cents;

/// Returns the amount wage income tax is levied on.
///
/// For residents this is `max(0, gross_pay − exemption)`; for non-residents
/// it is the full `gross_pay`.
pub fn calculate_taxable_income(
    gross_pay: Decimal,
    is_resident: bool,
    rates: &StatutoryRates,
) -> Decimal {
    if is_resident {
        (gross_pay - rates.income_tax.resident_exemption_monthly).max(Decimal::ZERO)
    } else {
        gross_pay
    }
}

/// Calculates the wage income tax to withhold, rounded to cents.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_tax;
/// use payroll_engine::config::StatutoryRates;
/// use rust_decimal::Decimal;
///
/// let rates = StatutoryRates::timor_leste();
///
/// // Resident: 10% of the $100 above the $500 exemption
/// assert_eq!(calculate_tax(Decimal::from(600), true, &rates), Decimal::from(10));
///
/// // Non-resident: 10% of the full amount
/// assert_eq!(calculate_tax(Decimal::from(600), false, &rates), Decimal::from(60));
/// ```
pub fn calculate_tax(gross_pay: Decimal, is_resident: bool, rates: &StatutoryRates) -> Decimal {
    round_to_cents(calculate_taxable_income(gross_pay, is_resident, rates) * rates.income_tax.rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rates() -> StatutoryRates {
        StatutoryRates::timor_leste()
    }

    #[test]
    fn test_resident_at_exemption_pays_nothing() {
        assert_eq!(calculate_tax(dec("500"), true, &rates()), Decimal::ZERO);
    }

    #[test]
    fn test_resident_below_exemption_pays_nothing() {
        assert_eq!(calculate_tax(dec("320.50"), true, &rates()), Decimal::ZERO);
        assert_eq!(
            calculate_taxable_income(dec("320.50"), true, &rates()),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_resident_taxed_on_excess() {
        assert_eq!(calculate_tax(dec("600"), true, &rates()), dec("10.00"));
    }

    #[test]
    fn test_non_resident_taxed_on_full_amount() {
        assert_eq!(calculate_tax(dec("600"), false, &rates()), dec("60.00"));
        assert_eq!(calculate_tax(dec("300"), false, &rates()), dec("30.00"));
    }

    #[test]
    fn test_tax_rounded_to_cents() {
        // (589.34 - 500) × 0.10 = 8.934
        assert_eq!(calculate_tax(dec("589.34"), true, &rates()), dec("8.93"));
        // (500.05 - 500) × 0.10 = 0.005 rounds up
        assert_eq!(calculate_tax(dec("500.05"), true, &rates()), dec("0.01"));
    }

    #[test]
    fn test_taxable_income_non_resident_echoes_gross() {
        assert_eq!(
            calculate_taxable_income(dec("412.77"), false, &rates()),
            dec("412.77")
        );
    }

    #[test]
    fn test_zero_gross() {
        assert_eq!(calculate_tax(Decimal::ZERO, true, &rates()), Decimal::ZERO);
        assert_eq!(calculate_tax(Decimal::ZERO, false, &rates()), Decimal::ZERO);
    }
}
