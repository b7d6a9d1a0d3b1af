//! HTTP API module for the benefits cost engine.
//!
//! This module provides the REST endpoints for employee and dependent
//! records and the per-paycheck benefits calculation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CreateDependentRequest, CreateEmployeeRequest, PaycheckQuery};
pub use response::{ApiErrorResponse, ApiResponse};
pub use state::AppState;
