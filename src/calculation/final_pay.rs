//! Final pay on termination.
//!
//! Combines unused leave, severance and payment in lieu of notice:
//!
//! - Unused leave is always paid at the daily rate.
//! - Severance is forfeited entirely when termination is for cause.
//! - Notice is paid in lieu only when it was not worked.
//!
//! The salary for a partial final month is not computed here.

use rust_decimal::Decimal;

use crate::config::StatutoryRates;
use crate::models::{FinalPayInput, FinalPayResult, SeveranceResult};

use super::{calculate_daily_rate, calculate_notice_period, calculate_severance, round_to_cents};

/// Calculates the amounts owed on termination.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_final_pay;
/// use payroll_engine::config::StatutoryRates;
/// use payroll_engine::models::FinalPayInput;
/// use rust_decimal::Decimal;
///
/// let rates = StatutoryRates::timor_leste();
/// let input = FinalPayInput {
///     monthly_salary: Decimal::from(600),
///     months_of_service: 30,
///     unused_annual_leave_days: Decimal::from(5),
///     is_for_cause: false,
///     notice_period_worked: false,
/// };
///
/// let result = calculate_final_pay(&input, &rates);
/// assert_eq!(result.unused_leave_payment, Decimal::from(100));
/// assert_eq!(result.severance_pay, Decimal::from(1200));
/// assert_eq!(result.notice_payment, Decimal::from(600));
/// assert_eq!(result.total, Decimal::from(1900));
/// ```
pub fn calculate_final_pay(input: &FinalPayInput, rates: &StatutoryRates) -> FinalPayResult {
    let daily_rate = calculate_daily_rate(input.monthly_salary, rates);

    let unused_leave_payment = round_to_cents(daily_rate * input.unused_annual_leave_days);

    let severance = if input.is_for_cause {
        SeveranceResult::NONE
    } else {
        calculate_severance(input.monthly_salary, input.months_of_service, rates)
    };

    let notice_payment = if input.notice_period_worked {
        Decimal::ZERO
    } else {
        let notice_days = calculate_notice_period(input.months_of_service, rates);
        round_to_cents(daily_rate * Decimal::from(notice_days))
    };

    let total = round_to_cents(unused_leave_payment + severance.amount + notice_payment);

    FinalPayResult {
        unused_leave_payment,
        severance_pay: severance.amount,
        notice_payment,
        pro_rated_salary: Decimal::ZERO,
        total,
    }
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

    fn input(months_of_service: u32) -> FinalPayInput {
        FinalPayInput {
            monthly_salary: dec("1000"),
            months_of_service,
            unused_annual_leave_days: dec("10"),
            is_for_cause: false,
            notice_period_worked: false,
        }
    }

    #[test]
    fn test_full_final_pay_short_tenure() {
        let result = calculate_final_pay(&input(6), &rates());

        assert_eq!(result.unused_leave_payment, dec("333.33"));
        assert_eq!(result.severance_pay, dec("1000.00"));
        assert_eq!(result.notice_payment, dec("500.00"));
        assert_eq!(result.total, dec("1833.33"));
    }

    #[test]
    fn test_long_tenure_gets_long_notice() {
        let result = calculate_final_pay(&input(48), &rates());

        assert_eq!(result.severance_pay, dec("3000.00"));
        assert_eq!(result.notice_payment, dec("1000.00"));
        assert_eq!(result.total, dec("4333.33"));
    }

    #[test]
    fn test_for_cause_forfeits_severance() {
        let mut input = input(48);
        input.is_for_cause = true;

        let result = calculate_final_pay(&input, &rates());

        assert_eq!(result.severance_pay, Decimal::ZERO);
        assert_eq!(result.unused_leave_payment, dec("333.33"));
        assert_eq!(result.notice_payment, dec("1000.00"));
    }

    #[test]
    fn test_worked_notice_is_not_paid() {
        let mut input = input(48);
        input.notice_period_worked = true;

        let result = calculate_final_pay(&input, &rates());

        assert_eq!(result.notice_payment, Decimal::ZERO);
        assert_eq!(result.total, dec("3333.33"));
    }

    #[test]
    fn test_no_severance_under_minimum_tenure() {
        let result = calculate_final_pay(&input(2), &rates());

        assert_eq!(result.severance_pay, Decimal::ZERO);
        assert_eq!(result.notice_payment, dec("500.00"));
    }

    #[test]
    fn test_pro_rated_salary_is_always_zero() {
        for months in [0, 6, 48, 240] {
            let result = calculate_final_pay(&input(months), &rates());
            assert_eq!(result.pro_rated_salary, Decimal::ZERO);
        }
    }

    #[test]
    fn test_fractional_leave_days() {
        let mut input = input(6);
        input.unused_annual_leave_days = dec("2.5");

        let result = calculate_final_pay(&input, &rates());
        // 1000 / 30 × 2.5 = 83.333..
        assert_eq!(result.unused_leave_payment, dec("83.33"));
    }
}
