//! Advisory minimum wage check.

use rust_decimal::Decimal;

use crate::config::StatutoryRates;
use crate::models::MinimumWageCheck;

/// Checks a monthly salary against the minimum wage.
///
/// The check is advisory; it never blocks a calculation.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::validate_minimum_wage;
/// use payroll_engine::config::StatutoryRates;
/// use rust_decimal::Decimal;
///
/// let rates = StatutoryRates::timor_leste();
///
/// let check = validate_minimum_wage(Decimal::from(100), &rates);
/// assert!(!check.is_valid);
/// assert_eq!(check.shortfall, Decimal::from(15));
/// ```
pub fn validate_minimum_wage(monthly_salary: Decimal, rates: &StatutoryRates) -> MinimumWageCheck {
    let minimum_wage = rates.minimum_wage_monthly;

    MinimumWageCheck {
        is_valid: monthly_salary >= minimum_wage,
        minimum_wage,
        shortfall: (minimum_wage - monthly_salary).max(Decimal::ZERO),
    }
}
