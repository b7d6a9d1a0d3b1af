//! In-memory store implementation.
//!
//! Backs the [`EmployeeStore`] and [`DependentStore`] traits with
//! `RwLock`-guarded vectors. Ids come from monotonic atomic counters, never
//! from the current collection size, so they stay collision-free even if a
//! future revision adds deletion.

use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{Dependent, Employee, Relationship};

use super::{DependentStore, EmployeeStore, NewDependent, NewEmployee};

/// Thread-safe in-memory storage for employees and dependents.
pub struct InMemoryStore {
    employees: RwLock<Vec<Employee>>,
    dependents: RwLock<Vec<Dependent>>,
    next_employee_id: AtomicU64,
    next_dependent_id: AtomicU64,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            employees: RwLock::new(Vec::new()),
            dependents: RwLock::new(Vec::new()),
            next_employee_id: AtomicU64::new(1),
            next_dependent_id: AtomicU64::new(1),
        }
    }

    /// Creates a store pre-loaded with the demonstration data set: three
    /// employees (one with three dependents, one with one). The dependents
    /// collection carries copies of the same four records under the same
    /// ids, so both collaborators serve consistent data.
    pub fn seeded() -> Self {
        let store = Self::new();

        EmployeeStore::add(
            &store,
            NewEmployee {
                first_name: "LeBron".to_string(),
                last_name: "James".to_string(),
                salary: dec("75420.99"),
                date_of_birth: date(1984, 12, 30),
                dependents: vec![],
            },
        );
        let morant = EmployeeStore::add(
            &store,
            NewEmployee {
                first_name: "Ja".to_string(),
                last_name: "Morant".to_string(),
                salary: dec("92365.22"),
                date_of_birth: date(1999, 8, 10),
                dependents: vec![
                    NewDependent {
                        first_name: "Spouse".to_string(),
                        last_name: "Morant".to_string(),
                        date_of_birth: date(1998, 3, 3),
                        relationship: Relationship::Spouse,
                    },
                    NewDependent {
                        first_name: "Child1".to_string(),
                        last_name: "Morant".to_string(),
                        date_of_birth: date(2020, 6, 23),
                        relationship: Relationship::Child,
                    },
                    NewDependent {
                        first_name: "Child2".to_string(),
                        last_name: "Morant".to_string(),
                        date_of_birth: date(2021, 5, 18),
                        relationship: Relationship::Child,
                    },
                ],
            },
        );
        let jordan = EmployeeStore::add(
            &store,
            NewEmployee {
                first_name: "Michael".to_string(),
                last_name: "Jordan".to_string(),
                salary: dec("143211.12"),
                date_of_birth: date(1963, 2, 17),
                dependents: vec![NewDependent {
                    first_name: "DP".to_string(),
                    last_name: "Jordan".to_string(),
                    date_of_birth: date(1974, 1, 2),
                    relationship: Relationship::DomesticPartner,
                }],
            },
        );

        {
            let mut dependents = store
                .dependents
                .write()
                .expect("dependent store lock poisoned");
            dependents.extend(morant.dependents.iter().cloned());
            dependents.extend(jordan.dependents.iter().cloned());
        }

        store
    }

    fn assign_dependent(&self, new: NewDependent) -> Dependent {
        let id = self.next_dependent_id.fetch_add(1, Ordering::Relaxed);
        Dependent {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            date_of_birth: new.date_of_birth,
            relationship: new.relationship,
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeStore for InMemoryStore {
    fn find_by_id(&self, id: u64) -> Option<Employee> {
        self.employees
            .read()
            .expect("employee store lock poisoned")
            .iter()
            .find(|e| e.id == id)
            .cloned()
    }

    fn list_all(&self) -> Vec<Employee> {
        self.employees
            .read()
            .expect("employee store lock poisoned")
            .clone()
    }

    fn add(&self, new: NewEmployee) -> Employee {
        let id = self.next_employee_id.fetch_add(1, Ordering::Relaxed);
        let dependents = new
            .dependents
            .into_iter()
            .map(|d| self.assign_dependent(d))
            .collect();

        let employee = Employee {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            salary: new.salary,
            date_of_birth: new.date_of_birth,
            dependents,
        };

        self.employees
            .write()
            .expect("employee store lock poisoned")
            .push(employee.clone());
        employee
    }
}

impl DependentStore for InMemoryStore {
    fn find_by_id(&self, id: u64) -> Option<Dependent> {
        self.dependents
            .read()
            .expect("dependent store lock poisoned")
            .iter()
            .find(|d| d.id == id)
            .cloned()
    }

    fn list_all(&self) -> Vec<Dependent> {
        self.dependents
            .read()
            .expect("dependent store lock poisoned")
            .clone()
    }

    fn add(&self, new: NewDependent) -> Dependent {
        let dependent = self.assign_dependent(new);
        self.dependents
            .write()
            .expect("dependent store lock poisoned")
            .push(dependent.clone());
        dependent
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).expect("valid seed decimal")
}
