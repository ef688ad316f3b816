//! Domain models for the payroll engine.
//!
//! This module contains the value records the calculation engine consumes and
//! produces: payroll inputs and results, termination amounts, payroll runs,
//! and the audit trace that explains a calculation.

mod calculation_result;
mod pay_period;
mod payroll;
mod payroll_run;
mod termination;

pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, PayrollCalculation};
pub use pay_period::PayPeriod;
pub use payroll::{MAX_AMOUNT, MAX_HOURS, PayrollInput, PayrollResult, validate_range};
pub use payroll_run::{
    PayrollLineInput, PayrollLineResult, PayrollRunInput, PayrollRunResult, PayrollRunTotals,
};
pub use termination::{FinalPayInput, FinalPayResult, MinimumWageCheck, SeveranceResult};
