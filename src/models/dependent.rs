//! Dependent model and related types.
//!
//! This module defines the Dependent struct and Relationship enum for
//! representing the people covered by an employee's benefits package.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The relationship of a dependent to the employee.
///
/// The relationship never affects the benefits cost, but it must be one of
/// these enumerated values; anything else is rejected at deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    /// Married partner of the employee.
    Spouse,
    /// Unmarried partner of the employee.
    DomesticPartner,
    /// Child of the employee.
    Child,
}

/// A person covered by an employee's benefits package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dependent {
    /// Unique identifier, assigned by the store on creation.
    pub id: u64,
    /// The dependent's first name.
    pub first_name: String,
    /// The dependent's last name.
    pub last_name: String,
    /// The dependent's date of birth.
    pub date_of_birth: NaiveDate,
    /// The dependent's relationship to the employee.
    pub relationship: Relationship,
}

impl Dependent {
    /// Validates the dependent's fields.
    ///
    /// Names must be non-empty after trimming, and the date of birth must
    /// not be after `as_of`. Returns `InvalidDependent` naming the first
    /// offending field.
    pub fn validate(&self, as_of: NaiveDate) -> EngineResult<()> {
        if self.first_name.trim().is_empty() {
            return Err(EngineError::InvalidDependent {
                field: "first_name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.last_name.trim().is_empty() {
            return Err(EngineError::InvalidDependent {
                field: "last_name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.date_of_birth > as_of {
            return Err(EngineError::InvalidDependent {
                field: "date_of_birth".to_string(),
                message: "cannot be in the future".to_string(),
            });
        }
        Ok(())
    }
}
