//! Calculation logic for the benefits cost engine.
//!
//! This module contains the paycheck deduction rules: the base employee
//! cost, the per-dependent cost, the elder dependent surcharge, the
//! high-salary surcharge, and the annual-to-per-paycheck conversion with
//! cent rounding.

mod age;
mod paycheck;

pub use age::calendar_year_age;
pub use paycheck::calculate_paycheck;
