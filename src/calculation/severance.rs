//! Severance and notice period calculation.
//!
//! Severance is a day-count schedule keyed on completed months of service,
//! paid at the daily rate (monthly salary / 30). Notice periods switch from
//! the short to the long period at a single tenure threshold.

use rust_decimal::Decimal;

use crate::config::StatutoryRates;
use crate::models::SeveranceResult;

use super::round_to_cents;

/// Returns the daily rate used for termination payments.
pub fn calculate_daily_rate(monthly_salary: Decimal, rates: &StatutoryRates) -> Decimal {
    monthly_salary / rates.days_per_month
}

/// Calculates the severance owed for the given salary and tenure.
///
/// Tenure below the statutory minimum earns nothing. Otherwise the days owed
/// come from the first schedule band containing the tenure, or zero if none
/// does.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_severance;
/// use payroll_engine::config::StatutoryRates;
/// use rust_decimal::Decimal;
///
/// let rates = StatutoryRates::timor_leste();
///
/// let result = calculate_severance(Decimal::from(900), 18, &rates);
/// assert_eq!(result.days, 60);
/// assert_eq!(result.amount, Decimal::from(1800));
///
/// let result = calculate_severance(Decimal::from(1000), 2, &rates);
/// assert_eq!(result.days, 0);
/// assert!(result.amount.is_zero());
/// ```
pub fn calculate_severance(
    monthly_salary: Decimal,
    months_of_service: u32,
    rates: &StatutoryRates,
) -> SeveranceResult {
    if months_of_service < rates.severance.minimum_months {
        return SeveranceResult::NONE;
    }

    let days = rates.severance.days_for(months_of_service);
    let amount = round_to_cents(calculate_daily_rate(monthly_salary, rates) * Decimal::from(days));

    SeveranceResult { days, amount }
}

/// Returns the notice period in days for the given tenure.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_notice_period;
/// use payroll_engine::config::StatutoryRates;
///
/// let rates = StatutoryRates::timor_leste();
/// assert_eq!(calculate_notice_period(23, &rates), 15);
/// assert_eq!(calculate_notice_period(24, &rates), 30);
/// ```
pub fn calculate_notice_period(months_of_service: u32, rates: &StatutoryRates) -> u32 {
    rates.notice_period.days_for(months_of_service)
}
