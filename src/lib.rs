//! Benefits cost engine.
//!
//! This crate exposes employee and dependent records over HTTP and computes
//! a per-paycheck benefits deduction from an employee's salary and
//! dependents. The calculation core is pure and deterministic; storage and
//! routing are collaborators around it.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
