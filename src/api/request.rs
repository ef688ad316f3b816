//! Request types for the payroll engine API.
//!
//! The engine itself accepts any input. The HTTP layer is the caller that
//! enforces input hygiene, so every request body implements
//! [`ValidateRequest`] and is checked before it reaches the engine.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{FinalPayInput, MAX_AMOUNT, PayrollInput, PayrollRunInput, validate_range};

/// Ten years of daily accrual.
const MAX_LEAVE_DAYS: Decimal = dec!(3660);

/// Request bodies that can be validated before calculation.
pub trait ValidateRequest {
    /// Returns an [`EngineError::InvalidInput`] for the first invalid field.
    fn validate(&self) -> EngineResult<()>;
}

/// Request body for the `/payroll/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// Optional identifier echoed back in the response.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// The employee's compensation inputs.
    #[serde(flatten)]
    pub input: PayrollInput,
}

/// Request body for the `/termination/severance` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveranceRequest {
    /// Monthly salary at termination.
    pub monthly_salary: Decimal,
    /// Completed months of service.
    pub months_of_service: u32,
}

/// Request body for the `/termination/notice-period` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticePeriodRequest {
    /// Completed months of service.
    pub months_of_service: u32,
}

/// Request body for the `/minimum-wage/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinimumWageRequest {
    /// Monthly salary to check.
    pub monthly_salary: Decimal,
}

impl ValidateRequest for PayrollRequest {
    fn validate(&self) -> EngineResult<()> {
        self.input.validate()
    }
}

impl ValidateRequest for PayrollRunInput {
    fn validate(&self) -> EngineResult<()> {
        if self.pay_period.end_date < self.pay_period.start_date {
            return Err(EngineError::InvalidInput {
                field: "pay_period.end_date".to_string(),
                message: "must not be before pay_period.start_date".to_string(),
            });
        }

        for (index, line) in self.lines.iter().enumerate() {
            line.input.validate().map_err(|err| match err {
                EngineError::InvalidInput { field, message } => EngineError::InvalidInput {
                    field: format!("lines[{}].{}", index, field),
                    message,
                },
                other => other,
            })?;
        }
        Ok(())
    }
}

impl ValidateRequest for SeveranceRequest {
    fn validate(&self) -> EngineResult<()> {
        validate_range("monthly_salary", self.monthly_salary, MAX_AMOUNT)
    }
}

impl ValidateRequest for NoticePeriodRequest {
    fn validate(&self) -> EngineResult<()> {
        Ok(())
    }
}

impl ValidateRequest for FinalPayInput {
    fn validate(&self) -> EngineResult<()> {
        validate_range("monthly_salary", self.monthly_salary, MAX_AMOUNT)?;
        validate_range(
            "unused_annual_leave_days",
            self.unused_annual_leave_days,
            MAX_LEAVE_DAYS,
        )
    }
}

impl ValidateRequest for MinimumWageRequest {
    fn validate(&self) -> EngineResult<()> {
        validate_range("monthly_salary", self.monthly_salary, MAX_AMOUNT)
    }
}
