//! Record storage for employees and dependents.
//!
//! The calculator and the API layer depend only on the [`EmployeeStore`]
//! and [`DependentStore`] traits, so the in-memory implementation can be
//! swapped for a real persistence layer without touching the core.

mod memory;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Dependent, Employee, Relationship};

pub use memory::InMemoryStore;

/// Input for creating a dependent; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewDependent {
    /// The dependent's first name.
    pub first_name: String,
    /// The dependent's last name.
    pub last_name: String,
    /// The dependent's date of birth.
    pub date_of_birth: NaiveDate,
    /// The dependent's relationship to the employee.
    pub relationship: Relationship,
}

/// Input for creating an employee; the store assigns the employee id and
/// an id for every embedded dependent.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// Annual salary in exact decimal dollars.
    pub salary: Decimal,
    /// The employee's date of birth.
    pub date_of_birth: NaiveDate,
    /// Dependents to create along with the employee.
    pub dependents: Vec<NewDependent>,
}

/// Read and create access to employee records.
///
/// The engine core never mutates store state; it consumes an `Employee`
/// snapshot returned by `find_by_id`. Implementations must be safe to
/// call concurrently.
pub trait EmployeeStore: Send + Sync {
    /// Returns a snapshot of the employee with the given id, if any.
    fn find_by_id(&self, id: u64) -> Option<Employee>;

    /// Returns snapshots of all employees in creation order.
    fn list_all(&self) -> Vec<Employee>;

    /// Stores a new employee and returns it with its assigned ids.
    fn add(&self, new: NewEmployee) -> Employee;
}

/// Read and create access to standalone dependent records.
pub trait DependentStore: Send + Sync {
    /// Returns a snapshot of the dependent with the given id, if any.
    fn find_by_id(&self, id: u64) -> Option<Dependent>;

    /// Returns snapshots of all dependents in creation order.
    fn list_all(&self) -> Vec<Dependent>;

    /// Stores a new dependent and returns it with its assigned id.
    fn add(&self, new: NewDependent) -> Dependent;
}
