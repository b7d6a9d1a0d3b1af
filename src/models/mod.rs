//! Core data models for the benefits cost engine.
//!
//! This module contains all the domain models used throughout the engine.

mod dependent;
mod employee;

pub use dependent::{Dependent, Relationship};
pub use employee::Employee;
