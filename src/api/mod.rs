//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoints for payroll, termination
//! and minimum wage calculations under the Timor-Leste statutory rates.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    MinimumWageRequest, NoticePeriodRequest, PayrollRequest, SeveranceRequest, ValidateRequest,
};
pub use response::{ApiError, ApiErrorResponse, NoticePeriodResponse, RatesResponse};
pub use state::AppState;
