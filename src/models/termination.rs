//! Termination and minimum-wage models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Severance owed under the tenure-banded schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceResult {
    /// Days of pay owed.
    pub days: u32,
    /// The amount owed.
    pub amount: Decimal,
}

impl SeveranceResult {
    /// No severance owed.
    pub const NONE: SeveranceResult = SeveranceResult {
        days: 0,
        amount: Decimal::ZERO,
    };
}

/// Inputs for computing the final pay owed on termination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalPayInput {
    /// Monthly salary at termination.
    pub monthly_salary: Decimal,
    /// Completed months of service.
    pub months_of_service: u32,
    /// Annual leave days accrued but not taken.
    #[serde(default)]
    pub unused_annual_leave_days: Decimal,
    /// Whether the termination is for cause, which forfeits severance.
    #[serde(default)]
    pub is_for_cause: bool,
    /// Whether the employee worked out the notice period.
    #[serde(default)]
    pub notice_period_worked: bool,
}

/// The amounts owed on termination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalPayResult {
    /// Payment for unused annual leave.
    pub unused_leave_payment: Decimal,
    /// Severance pay.
    pub severance_pay: Decimal,
    /// Payment in lieu of notice.
    pub notice_payment: Decimal,
    /// Salary for the partial final month.
    ///
    /// Always zero: the engine does not pro-rate the final month and
    /// leaves that amount to the caller. It is not included in `total`.
    pub pro_rated_salary: Decimal,
    /// Sum of the leave, severance and notice payments.
    pub total: Decimal,
}

/// Outcome of an advisory minimum wage check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimumWageCheck {
    /// True when the salary meets the minimum wage.
    pub is_valid: bool,
    /// The monthly minimum wage checked against.
    pub minimum_wage: Decimal,
    /// How far the salary falls short, or zero.
    pub shortfall: Decimal,
}
