//! Response types of the external user API.
//!
//! Only the fields the registry uses are modelled; anything else in the
//! payload is ignored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::RegistryResult;
use crate::models::{Employee, Position};

/// The company a user works for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiCompany {
    /// Company name.
    pub name: String,
}

/// One entry of the user listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiUser {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Employer.
    pub company: ApiCompany,
}

impl ApiUser {
    /// Converts the user into an employee holding `position` at its base
    /// salary.
    pub fn into_employee(self, position: Position, hire_date: NaiveDate) -> RegistryResult<Employee> {
        Employee::new(
            self.name,
            self.email,
            self.company.name,
            position,
            position.base_salary(),
            hire_date,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_fields_are_ignored() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "city": "Gwenborough" },
            "company": { "name": "Romaguera-Crona", "bs": "harness real-time e-markets" }
        }"#;

        let user: ApiUser = serde_json::from_str(json).unwrap();

        assert_eq!(user.name, "Leanne Graham");
        assert_eq!(user.email, "Sincere@april.biz");
        assert_eq!(user.company.name, "Romaguera-Crona");
    }

    #[test]
    fn test_missing_company_is_an_error() {
        let json = r#"{ "name": "Leanne Graham", "email": "Sincere@april.biz" }"#;
        assert!(serde_json::from_str::<ApiUser>(json).is_err());
    }

    #[test]
    fn test_into_employee_uses_base_salary() {
        let user = ApiUser {
            name: "Leanne Graham".to_string(),
            email: "Sincere@april.biz".to_string(),
            company: ApiCompany {
                name: "Romaguera-Crona".to_string(),
            },
        };
        let hired = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();

        let employee = user.into_employee(Position::Programmer, hired).unwrap();

        assert_eq!(employee.position(), Position::Programmer);
        assert_eq!(employee.salary(), Position::Programmer.base_salary());
        assert_eq!(employee.company_name(), "Romaguera-Crona");
        assert_eq!(employee.hire_date(), hired);
    }
}
