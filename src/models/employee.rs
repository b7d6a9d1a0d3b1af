//! Employee model.
//!
//! This module defines the Employee struct, the record the paycheck
//! calculator operates on. An employee exclusively owns its dependents
//! collection; dependents are never shared across employees.

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Dependent;

/// An employee whose benefits cost can be calculated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier, assigned by the store on creation.
    pub id: u64,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// Annual salary in exact decimal dollars.
    pub salary: Decimal,
    /// The employee's date of birth.
    pub date_of_birth: NaiveDate,
    /// The dependents covered by this employee's benefits, in creation order.
    #[serde(default)]
    pub dependents: Vec<Dependent>,
}

impl Employee {
    /// Validates the employee's fields and all of its dependents.
    ///
    /// Checks non-empty names, a non-negative salary, each dependent's own
    /// validity, and that no two dependents with assigned ids share an id.
    /// Returns `InvalidEmployee` naming the first offending field.
    pub fn validate(&self, as_of: NaiveDate) -> EngineResult<()> {
        if self.first_name.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "first_name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.last_name.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "last_name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.salary < Decimal::ZERO {
            return Err(EngineError::InvalidEmployee {
                field: "salary".to_string(),
                message: "must not be negative".to_string(),
            });
        }

        let mut seen_ids = HashSet::new();
        for dependent in &self.dependents {
            dependent.validate(as_of)?;
            // Id 0 marks a dependent not yet assigned an id by the store.
            if dependent.id > 0 && !seen_ids.insert(dependent.id) {
                return Err(EngineError::InvalidEmployee {
                    field: "dependents".to_string(),
                    message: format!("duplicate dependent id: {}", dependent.id),
                });
            }
        }

        Ok(())
    }
}
