//! Performance ratings.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::RegistryResult;
use crate::models::Employee;

use super::EmployeeRegistry;

/// Records a rating for an employee.
///
/// Validation is done by [`Employee::add_rating`]; an out-of-range rating
/// leaves the history untouched.
pub fn add_rating(employee: &mut Employee, rating: u8) -> RegistryResult<()> {
    employee.add_rating(rating)?;
    debug!(email = %employee.email(), rating, "Rating recorded");
    Ok(())
}

/// Mean of the employee's ratings, or zero if there are none.
///
/// # Examples
///
/// ```
/// use employee_registry::models::{Employee, Position};
/// use employee_registry::services::{add_rating, average_rating};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut jan = Employee::new("Jan", "jan@tech.pl", "TechCorp", Position::Programmer,
///     Decimal::new(9000, 0), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()).unwrap();
/// assert_eq!(average_rating(&jan), Decimal::ZERO);
///
/// add_rating(&mut jan, 4).unwrap();
/// add_rating(&mut jan, 5).unwrap();
/// assert_eq!(average_rating(&jan), Decimal::new(45, 1));
/// ```
pub fn average_rating(employee: &Employee) -> Decimal {
    let ratings = employee.ratings();
    if ratings.is_empty() {
        return Decimal::ZERO;
    }
    let total: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
    Decimal::from(total) / Decimal::from(ratings.len())
}

/// Records and summarises ratings for employees held in a registry.
pub struct RatingService<'a> {
    registry: &'a mut EmployeeRegistry,
}

impl<'a> RatingService<'a> {
    /// Creates a service working on `registry`.
    pub fn new(registry: &'a mut EmployeeRegistry) -> Self {
        Self { registry }
    }

    /// Rates the employee with the given email. See [`add_rating`].
    pub fn add_rating(&mut self, email: &str, rating: u8) -> RegistryResult<()> {
        add_rating(self.registry.require_mut(email)?, rating)
    }

    /// Average rating of the employee with the given email.
    pub fn average_rating(&mut self, email: &str) -> RegistryResult<Decimal> {
        Ok(average_rating(self.registry.require_mut(email)?))
    }
}
