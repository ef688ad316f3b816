//! Calculation logic for the payroll engine.
//!
//! This module contains the pure calculation functions: hourly rate
//! conversion, overtime and night premiums, wage income tax, INSS
//! contributions, the gross-to-net payroll calculation and its audit trace,
//! batch payroll runs, severance, notice periods, final pay on termination,
//! and the advisory minimum wage check.
//!
//! Every function takes the [`StatutoryRates`](crate::config::StatutoryRates)
//! to apply as its last argument.

mod final_pay;
mod hourly_rate;
mod income_tax;
mod inss;
mod minimum_wage;
mod night_shift;
mod overtime;
mod payroll;
mod payroll_audit;
mod payroll_run;
mod rounding;
mod severance;

pub use final_pay::calculate_final_pay;
pub use hourly_rate::{MONTHS_PER_YEAR, WEEKS_PER_YEAR, calculate_hourly_rate};
pub use income_tax::{calculate_tax, calculate_taxable_income};
pub use inss::{calculate_inss_base, calculate_inss_employee, calculate_inss_employer};
pub use minimum_wage::validate_minimum_wage;
pub use night_shift::{calculate_night_shift_premium, night_shift_premium_rate};
pub use overtime::{OvertimePay, calculate_overtime_pay};
pub use payroll::{calculate_payroll, reconciles};
pub use payroll_audit::{
    BELOW_MINIMUM_WAGE_WARNING, INCOME_TAX_LEGAL_REF, INSS_LEGAL_REF, LABOUR_CODE_LEGAL_REF,
    NEGATIVE_INPUT_WARNING, PayrollAudit, explain_payroll,
};
pub use payroll_run::calculate_payroll_run;
pub use rounding::round_to_cents;
pub use severance::{calculate_daily_rate, calculate_notice_period, calculate_severance};
