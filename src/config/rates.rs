//! The benefit rate table.
//!
//! This module provides the [`BenefitRates`] type: the frozen set of named
//! constants governing the cost calculation. Rates are loaded from a YAML
//! file once at startup and treated as read-only for the lifetime of the
//! process; there is no write path.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Process-wide rate configuration for the paycheck calculator.
///
/// All currency values are exact decimals. These rates are not
/// employee-editable; they are engine configuration.
///
/// # Example
///
/// ```no_run
/// use benefits_engine::config::BenefitRates;
///
/// let rates = BenefitRates::load("./config/benefits/rates.yaml").unwrap();
/// println!("Paychecks per year: {}", rates.paychecks_per_year);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct BenefitRates {
    /// Divisor for annual-to-per-paycheck conversion.
    pub paychecks_per_year: Decimal,
    /// Flat monthly cost per employee.
    pub base_monthly_cost: Decimal,
    /// Flat monthly cost per dependent.
    pub dependent_monthly_cost: Decimal,
    /// Salary above which the high-salary surcharge applies (strict).
    pub high_salary_threshold: Decimal,
    /// Fraction of annual salary added when above the threshold.
    pub high_salary_surcharge_rate: Decimal,
    /// Dependent age above which the elder surcharge applies (strict).
    pub elder_dependent_age: i32,
    /// Extra monthly cost per dependent older than the age threshold.
    pub elder_dependent_monthly_surcharge: Decimal,
}

impl BenefitRates {
    /// Loads the rate table from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the rates file (e.g., "./config/benefits/rates.yaml")
    ///
    /// # Returns
    ///
    /// Returns the rate table on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or is missing a field
    ///   (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

impl Default for BenefitRates {
    fn default() -> Self {
        Self {
            paychecks_per_year: Decimal::from(26),
            base_monthly_cost: Decimal::new(1000_00, 2),
            dependent_monthly_cost: Decimal::new(600_00, 2),
            high_salary_threshold: Decimal::new(80000_00, 2),
            high_salary_surcharge_rate: Decimal::new(2, 2),
            elder_dependent_age: 50,
            elder_dependent_monthly_surcharge: Decimal::new(200_00, 2),
        }
    }
}
