//! Social security (INSS) contributions.
//!
//! Contributions are levied on base salary, allowances, bonuses and the night
//! premium. Overtime pay is taxable but never enters the contributory base.

use rust_decimal::Decimal;

use crate::config::StatutoryRates;

use super::round_to_cents;

/// Returns the INSS contributory base.
///
/// Overtime pay is excluded by statute.
pub fn calculate_inss_base(
    base_salary: Decimal,
    allowances: Decimal,
    bonuses: Decimal,
    night_shift_premium: Decimal,
) -> Decimal {
    base_salary + allowances + bonuses + night_shift_premium
}

/// Calculates the employee INSS contribution, rounded to cents.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_inss_employee;
/// use payroll_engine::config::StatutoryRates;
/// use rust_decimal::Decimal;
///
/// let rates = StatutoryRates::timor_leste();
/// assert_eq!(calculate_inss_employee(Decimal::from(550), &rates), Decimal::from(22));
/// ```
pub fn calculate_inss_employee(contributory_base: Decimal, rates: &StatutoryRates) -> Decimal {
    round_to_cents(contributory_base * rates.inss.employee_rate)
}

/// Calculates the employer INSS contribution, rounded to cents.
///
/// Small employers qualifying for the reduction pay the reduced rate.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_inss_employer;
/// use payroll_engine::config::StatutoryRates;
/// use rust_decimal::Decimal;
///
/// let rates = StatutoryRates::timor_leste();
/// assert_eq!(calculate_inss_employer(Decimal::from(1000), false, &rates), Decimal::from(60));
/// assert_eq!(calculate_inss_employer(Decimal::from(1000), true, &rates), Decimal::from(54));
/// ```
pub fn calculate_inss_employer(
    contributory_base: Decimal,
    is_small_employer: bool,
    rates: &StatutoryRates,
) -> Decimal {
    round_to_cents(contributory_base * rates.inss_employer_rate(is_small_employer))
}
