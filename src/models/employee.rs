//! Employee model.
//!
//! An employee is identified by email. Equality and hashing only look at
//! the email, so two records with the same email are the same person no
//! matter what the other fields say.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::Position;
use crate::error::{RegistryError, RegistryResult};

/// Lowest accepted rating.
pub const MIN_RATING: u8 = 1;
/// Highest accepted rating.
pub const MAX_RATING: u8 = 5;

/// Represents a single employee record.
///
/// Fields are private so that the salary, rating and team invariants can
/// only be changed through the registry's services.
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    name: String,
    email: String,
    company_name: String,
    position: Position,
    salary: Decimal,
    hire_date: NaiveDate,
    ratings: Vec<u8>,
    current_team: Option<String>,
}

impl Employee {
    /// Creates a new employee.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEmployee` if the email is blank or the salary is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_registry::models::{Employee, Position};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new(
    ///     "Jan Kowalski",
    ///     "jan@techcorp.com",
    ///     "TechCorp",
    ///     Position::Programmer,
    ///     Decimal::new(9000, 0),
    ///     NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
    /// )
    /// .unwrap();
    /// assert_eq!(employee.email(), "jan@techcorp.com");
    /// assert!(employee.current_team().is_none());
    /// ```
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        company_name: impl Into<String>,
        position: Position,
        salary: Decimal,
        hire_date: NaiveDate,
    ) -> RegistryResult<Self> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(RegistryError::InvalidEmployee {
                field: "email".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if salary < Decimal::ZERO {
            return Err(RegistryError::InvalidEmployee {
                field: "salary".to_string(),
                message: format!("cannot be negative (got {})", salary),
            });
        }

        Ok(Self {
            name: name.into(),
            email,
            company_name: company_name.into(),
            position,
            salary,
            hire_date,
            ratings: Vec::new(),
            current_team: None,
        })
    }

    /// Full name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unique identifier of the employee.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Name of the employing company.
    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    /// Current position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Current salary.
    pub fn salary(&self) -> Decimal {
        self.salary
    }

    /// Date the employee was hired.
    pub fn hire_date(&self) -> NaiveDate {
        self.hire_date
    }

    /// Ratings in the order they were given.
    pub fn ratings(&self) -> &[u8] {
        &self.ratings
    }

    /// Name of the team the employee belongs to, if any.
    pub fn current_team(&self) -> Option<&str> {
        self.current_team.as_deref()
    }

    /// Appends a rating to the history.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRating` if the rating is outside 1..=5; the history is
    /// left untouched in that case.
    pub fn add_rating(&mut self, rating: u8) -> RegistryResult<()> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(RegistryError::InvalidRating { rating });
        }
        self.ratings.push(rating);
        Ok(())
    }

    pub(crate) fn set_salary(&mut self, salary: Decimal) {
        self.salary = salary;
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub(crate) fn join_team(&mut self, team: &str) {
        self.current_team = Some(team.to_string());
    }

    pub(crate) fn leave_team(&mut self) {
        self.current_team = None;
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.email == other.email
    }
}

impl Eq for Employee {}

impl Hash for Employee {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.email.hash(state);
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {} PLN, {}",
            self.name, self.position, self.salary, self.company_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn create_test_employee(email: &str, salary: i64) -> Employee {
        Employee::new(
            "Anna Nowak",
            email,
            "TechCorp",
            Position::Programmer,
            Decimal::new(salary, 0),
            NaiveDate::from_ymd_opt(2023, 11, 17).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_employee_has_no_ratings_or_team() {
        let employee = create_test_employee("anna@tech.pl", 9000);
        assert!(employee.ratings().is_empty());
        assert_eq!(employee.current_team(), None);
        assert_eq!(employee.salary(), Decimal::new(9000, 0));
        assert_eq!(employee.position(), Position::Programmer);
    }

    #[test]
    fn test_negative_salary_is_rejected() {
        let result = Employee::new(
            "Anna Nowak",
            "anna@tech.pl",
            "TechCorp",
            Position::Programmer,
            Decimal::new(-1, 0),
            NaiveDate::from_ymd_opt(2023, 11, 17).unwrap(),
        );
        match result {
            Err(RegistryError::InvalidEmployee { field, .. }) => assert_eq!(field, "salary"),
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_salary_is_accepted() {
        let employee = create_test_employee("anna@tech.pl", 0);
        assert!(employee.salary().is_zero());
    }

    #[test]
    fn test_blank_email_is_rejected() {
        let result = Employee::new(
            "Anna Nowak",
            "  ",
            "TechCorp",
            Position::Programmer,
            Decimal::new(9000, 0),
            NaiveDate::from_ymd_opt(2023, 11, 17).unwrap(),
        );
        assert!(matches!(
            result,
            Err(RegistryError::InvalidEmployee { ref field, .. }) if field == "email"
        ));
    }

    #[test]
    fn test_equality_uses_email_only() {
        let a = create_test_employee("same@tech.pl", 9000);
        let b = create_test_employee("same@tech.pl", 12000);
        let c = create_test_employee("other@tech.pl", 9000);

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Employee> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_email_comparison_is_case_sensitive() {
        let lower = create_test_employee("anna@tech.pl", 9000);
        let upper = create_test_employee("Anna@tech.pl", 9000);
        assert_ne!(lower, upper);
    }

    #[test]
    fn test_add_rating_keeps_order_and_duplicates() {
        let mut employee = create_test_employee("anna@tech.pl", 9000);
        employee.add_rating(5).unwrap();
        employee.add_rating(3).unwrap();
        employee.add_rating(5).unwrap();
        assert_eq!(employee.ratings(), &[5, 3, 5]);
    }

    #[test]
    fn test_add_rating_rejects_out_of_range() {
        let mut employee = create_test_employee("anna@tech.pl", 9000);
        for rating in [0, 6, 255] {
            match employee.add_rating(rating) {
                Err(RegistryError::InvalidRating { rating: r }) => assert_eq!(r, rating),
                other => panic!("Expected InvalidRating, got {:?}", other),
            }
        }
        assert!(employee.ratings().is_empty());
    }

    #[test]
    fn test_display_format() {
        let employee = create_test_employee("anna@tech.pl", 9000);
        assert_eq!(
            employee.to_string(),
            "Anna Nowak (PROGRAMMER) - 9000 PLN, TechCorp"
        );
    }

    #[test]
    fn test_serialize_employee() {
        let mut employee = create_test_employee("anna@tech.pl", 9000);
        employee.join_team("Phoenix");
        let json = serde_json::to_value(&employee).unwrap();

        assert_eq!(json["email"], "anna@tech.pl");
        assert_eq!(json["position"], "PROGRAMMER");
        assert_eq!(json["salary"], "9000");
        assert_eq!(json["hire_date"], "2023-11-17");
        assert_eq!(json["current_team"], "Phoenix");
    }
}
