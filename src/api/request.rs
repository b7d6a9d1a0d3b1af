//! Request types for the benefits API.
//!
//! This module defines the JSON request structures for the create
//! endpoints and the paycheck query parameters. Ids are never accepted
//! from the client; the store assigns them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Relationship;
use crate::store::{NewDependent, NewEmployee};

/// Request body for `POST /api/v1/employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// Annual salary in exact decimal dollars.
    pub salary: Decimal,
    /// The employee's date of birth.
    pub date_of_birth: NaiveDate,
    /// Dependents to create along with the employee.
    #[serde(default)]
    pub dependents: Vec<CreateDependentRequest>,
}

/// Request body for `POST /api/v1/dependents`, and the embedded dependent
/// shape inside an employee creation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDependentRequest {
    /// The dependent's first name.
    pub first_name: String,
    /// The dependent's last name.
    pub last_name: String,
    /// The dependent's date of birth.
    pub date_of_birth: NaiveDate,
    /// The dependent's relationship to the employee.
    pub relationship: Relationship,
}

/// Query parameters for `GET /api/v1/employees/{id}/paycheck`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaycheckQuery {
    /// Reference date for dependent ages; defaults to today (UTC).
    pub as_of: Option<NaiveDate>,
}

impl From<CreateEmployeeRequest> for NewEmployee {
    fn from(req: CreateEmployeeRequest) -> Self {
        NewEmployee {
            first_name: req.first_name,
            last_name: req.last_name,
            salary: req.salary,
            date_of_birth: req.date_of_birth,
            dependents: req.dependents.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<CreateDependentRequest> for NewDependent {
    fn from(req: CreateDependentRequest) -> Self {
        NewDependent {
            first_name: req.first_name,
            last_name: req.last_name,
            date_of_birth: req.date_of_birth,
            relationship: req.relationship,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_create_employee_request() {
        let json = r#"{
            "first_name": "Ja",
            "last_name": "Morant",
            "salary": "92365.22",
            "date_of_birth": "1999-08-10",
            "dependents": [
                {
                    "first_name": "Spouse",
                    "last_name": "Morant",
                    "date_of_birth": "1998-03-03",
                    "relationship": "spouse"
                }
            ]
        }"#;

        let request: CreateEmployeeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.first_name, "Ja");
        assert_eq!(request.salary, Decimal::from_str("92365.22").unwrap());
        assert_eq!(request.dependents.len(), 1);
        assert_eq!(request.dependents[0].relationship, Relationship::Spouse);
    }

    #[test]
    fn test_dependents_default_to_empty() {
        let json = r#"{
            "first_name": "LeBron",
            "last_name": "James",
            "salary": "75420.99",
            "date_of_birth": "1984-12-30"
        }"#;

        let request: CreateEmployeeRequest = serde_json::from_str(json).unwrap();
        assert!(request.dependents.is_empty());
    }

    #[test]
    fn test_employee_request_conversion() {
        let request = CreateEmployeeRequest {
            first_name: "Ja".to_string(),
            last_name: "Morant".to_string(),
            salary: Decimal::from_str("92365.22").unwrap(),
            date_of_birth: NaiveDate::from_ymd_opt(1999, 8, 10).unwrap(),
            dependents: vec![CreateDependentRequest {
                first_name: "Spouse".to_string(),
                last_name: "Morant".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(1998, 3, 3).unwrap(),
                relationship: Relationship::Spouse,
            }],
        };

        let new_employee: NewEmployee = request.into();
        assert_eq!(new_employee.first_name, "Ja");
        assert_eq!(new_employee.dependents.len(), 1);
        assert_eq!(new_employee.dependents[0].first_name, "Spouse");
    }

    #[test]
    fn test_paycheck_query_parses_as_of() {
        let query: PaycheckQuery = serde_json::from_str(r#"{"as_of": "2024-06-01"}"#).unwrap();
        assert_eq!(query.as_of, NaiveDate::from_ymd_opt(2024, 6, 1));
    }
}
