//! Configuration loading for the benefits cost engine.
//!
//! This module provides the benefit rate table, loaded from a YAML file at
//! startup.
//!
//! # Example
//!
//! ```no_run
//! use benefits_engine::config::BenefitRates;
//!
//! let rates = BenefitRates::load("./config/benefits/rates.yaml").unwrap();
//! println!("Base monthly cost: ${}", rates.base_monthly_cost);
//! ```

mod rates;

pub use rates::BenefitRates;
