//! Application state for the benefits API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::BenefitRates;
use crate::store::{DependentStore, EmployeeStore, InMemoryStore};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// read-only rate table and the record stores. Everything is behind an
/// `Arc`, so cloning is cheap (required for axum state).
#[derive(Clone)]
pub struct AppState {
    rates: Arc<BenefitRates>,
    employees: Arc<dyn EmployeeStore>,
    dependents: Arc<dyn DependentStore>,
}

impl AppState {
    /// Creates a new application state from a rate table and stores.
    pub fn new(
        rates: BenefitRates,
        employees: Arc<dyn EmployeeStore>,
        dependents: Arc<dyn DependentStore>,
    ) -> Self {
        Self {
            rates: Arc::new(rates),
            employees,
            dependents,
        }
    }

    /// Creates an application state backed by a single in-memory store.
    pub fn with_store(rates: BenefitRates, store: InMemoryStore) -> Self {
        let store = Arc::new(store);
        Self::new(rates, store.clone(), store)
    }

    /// Returns the benefit rate table.
    pub fn rates(&self) -> &BenefitRates {
        &self.rates
    }

    /// Returns the employee store.
    pub fn employees(&self) -> &dyn EmployeeStore {
        self.employees.as_ref()
    }

    /// Returns the dependent store.
    pub fn dependents(&self) -> &dyn DependentStore {
        self.dependents.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_with_store_shares_one_store() {
        let state = AppState::with_store(BenefitRates::default(), InMemoryStore::seeded());
        assert_eq!(state.employees().list_all().len(), 3);
        assert_eq!(state.dependents().list_all().len(), 4);
    }
}
