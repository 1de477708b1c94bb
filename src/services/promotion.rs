//! Promotion and raise rules.
//!
//! A promotion must move an employee to a strictly more senior position
//! and resets the salary to that position's base salary. A raise is a
//! non-negative percentage, capped at the position's maximum salary.

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::error::{RegistryError, RegistryResult};
use crate::models::{Employee, Position};

use super::EmployeeRegistry;

/// Promotes an employee to a more senior position.
///
/// On success the salary is overwritten with the new position's base
/// salary, even if the employee earned more before.
///
/// # Errors
///
/// Returns `PromotionNotHigher` if `new_position` does not outrank the
/// current position. The employee is left untouched.
///
/// # Examples
///
/// ```
/// use employee_registry::models::{Employee, Position};
/// use employee_registry::services::promote;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut intern = Employee::new("Jan", "jan@tech.pl", "TechCorp", Position::Intern,
///     Decimal::new(3500, 0), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()).unwrap();
///
/// promote(&mut intern, Position::Programmer).unwrap();
/// assert_eq!(intern.position(), Position::Programmer);
/// assert_eq!(intern.salary(), Position::Programmer.base_salary());
///
/// assert!(promote(&mut intern, Position::Intern).is_err());
/// ```
pub fn promote(employee: &mut Employee, new_position: Position) -> RegistryResult<()> {
    let current = employee.position();
    if !new_position.outranks(current) {
        warn!(
            email = %employee.email(),
            current = %current,
            requested = %new_position,
            "Rejected promotion"
        );
        return Err(RegistryError::PromotionNotHigher {
            current,
            target: new_position,
        });
    }

    employee.set_position(new_position);
    employee.set_salary(new_position.base_salary());
    info!(
        email = %employee.email(),
        from = %current,
        to = %new_position,
        salary = %employee.salary(),
        "Employee promoted"
    );
    Ok(())
}

/// Raises an employee's salary by `percentage` percent.
///
/// The new salary is `salary * (1 + percentage / 100)`, lowered to the
/// position's maximum salary if it would exceed it. A zero percentage
/// leaves the salary unchanged.
///
/// # Errors
///
/// Returns `NegativeRaise` for a negative percentage.
pub fn give_raise(employee: &mut Employee, percentage: Decimal) -> RegistryResult<()> {
    if percentage < Decimal::ZERO {
        warn!(email = %employee.email(), percentage = %percentage, "Rejected negative raise");
        return Err(RegistryError::NegativeRaise { percentage });
    }

    let max_salary = employee.position().max_salary();
    // An overflowing product is far above any cap.
    let raised = employee
        .salary()
        .checked_mul(Decimal::ONE + percentage / Decimal::ONE_HUNDRED);
    let new_salary = raised.map_or(max_salary, |r| r.min(max_salary));
    employee.set_salary(new_salary);
    info!(
        email = %employee.email(),
        percentage = %percentage,
        salary = %new_salary,
        capped = raised.is_none_or(|r| r > new_salary),
        "Raise applied"
    );
    Ok(())
}

/// Applies promotions and raises to employees held in a registry.
pub struct PromotionService<'a> {
    registry: &'a mut EmployeeRegistry,
}

impl<'a> PromotionService<'a> {
    /// Creates a service working on `registry`.
    pub fn new(registry: &'a mut EmployeeRegistry) -> Self {
        Self { registry }
    }

    /// Promotes the employee with the given email. See [`promote`].
    pub fn promote(&mut self, email: &str, new_position: Position) -> RegistryResult<()> {
        promote(self.registry.require_mut(email)?, new_position)
    }

    /// Gives the employee with the given email a raise. See [`give_raise`].
    pub fn give_raise(&mut self, email: &str, percentage: Decimal) -> RegistryResult<()> {
        give_raise(self.registry.require_mut(email)?, percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_employee(position: Position, salary: &str) -> Employee {
        Employee::new(
            "Anna Manager",
            "anna@tech.pl",
            "TechCorp",
            position,
            dec(salary),
            NaiveDate::from_ymd_opt(2021, 4, 1).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_promote_sets_position_and_base_salary() {
        let mut intern = create_test_employee(Position::Intern, "3500");

        promote(&mut intern, Position::Programmer).unwrap();

        assert_eq!(intern.position(), Position::Programmer);
        assert_eq!(intern.salary(), dec("8000"));
    }

    #[test]
    fn test_promote_overwrites_higher_salary() {
        let mut programmer = create_test_employee(Position::Programmer, "13900");

        promote(&mut programmer, Position::Manager).unwrap();

        assert_eq!(programmer.salary(), Position::Manager.base_salary());
    }

    #[test]
    fn test_promote_can_skip_levels() {
        let mut intern = create_test_employee(Position::Intern, "3000");

        promote(&mut intern, Position::President).unwrap();

        assert_eq!(intern.position(), Position::President);
        assert_eq!(intern.salary(), dec("25000"));
    }

    #[test]
    fn test_promote_to_same_position_fails() {
        let mut manager = create_test_employee(Position::Manager, "13000");

        let result = promote(&mut manager, Position::Manager);

        match result {
            Err(err @ RegistryError::PromotionNotHigher { .. }) => {
                assert!(err.to_string().contains("promotion must target a higher position"));
            }
            other => panic!("Expected PromotionNotHigher, got {:?}", other),
        }
        assert_eq!(manager.salary(), dec("13000"));
    }

    #[test]
    fn test_promote_to_lower_position_fails() {
        let mut manager = create_test_employee(Position::Manager, "13000");

        let result = promote(&mut manager, Position::Intern);

        assert!(matches!(
            result,
            Err(RegistryError::PromotionNotHigher {
                current: Position::Manager,
                target: Position::Intern
            })
        ));
        assert_eq!(manager.position(), Position::Manager);
    }

    #[test]
    fn test_give_raise_applies_percentage() {
        let cases = [
            ("10000", "10", "11000"),
            ("12000", "5.5", "12660"),
            ("5000", "0", "5000"),
        ];
        for (initial, percentage, expected) in cases {
            let mut manager = create_test_employee(Position::Manager, initial);
            give_raise(&mut manager, dec(percentage)).unwrap();
            assert_eq!(manager.salary(), dec(expected), "{}% of {}", percentage, initial);
        }
    }

    #[test]
    fn test_give_raise_caps_at_max_salary() {
        let mut manager = create_test_employee(Position::Manager, "18000");

        give_raise(&mut manager, dec("20.0")).unwrap();

        assert_eq!(manager.salary(), Position::Manager.max_salary());
    }

    #[test]
    fn test_give_raise_does_not_raise_salary_to_cap() {
        // Already above the band: the cap only ever lowers the result.
        let mut manager = create_test_employee(Position::Manager, "25000");

        give_raise(&mut manager, dec("0")).unwrap();

        assert_eq!(manager.salary(), dec("19000"));
    }

    #[test]
    fn test_huge_raise_caps_instead_of_overflowing() {
        let mut manager = create_test_employee(Position::Manager, "15000");

        give_raise(&mut manager, dec("1000000000000000000000000000")).unwrap();

        assert_eq!(manager.salary(), Position::Manager.max_salary());
    }

    #[test]
    fn test_raise_on_largest_salary_does_not_overflow() {
        let mut president = create_test_employee(Position::President, "1");
        president.set_salary(Decimal::MAX);

        give_raise(&mut president, dec("50")).unwrap();

        assert_eq!(president.salary(), Position::President.max_salary());
    }

    #[test]
    fn test_negative_raise_fails() {
        let mut manager = create_test_employee(Position::Manager, "13000");

        let result = give_raise(&mut manager, dec("-5.0"));

        match result {
            Err(RegistryError::NegativeRaise { percentage }) => {
                assert_eq!(percentage, dec("-5"));
            }
            other => panic!("Expected NegativeRaise, got {:?}", other),
        }
        assert_eq!(manager.salary(), dec("13000"));
    }

    #[test]
    fn test_service_works_through_registry() {
        let mut registry = EmployeeRegistry::new();
        registry.add(create_test_employee(Position::Programmer, "9000"));

        let mut service = PromotionService::new(&mut registry);
        service.promote("anna@tech.pl", Position::Manager).unwrap();
        service.give_raise("anna@tech.pl", dec("10")).unwrap();

        let anna = registry.get("anna@tech.pl").unwrap();
        assert_eq!(anna.position(), Position::Manager);
        assert_eq!(anna.salary(), dec("13200"));
    }

    #[test]
    fn test_service_reports_unknown_employee() {
        let mut registry = EmployeeRegistry::new();
        let mut service = PromotionService::new(&mut registry);

        assert!(matches!(
            service.promote("ghost@tech.pl", Position::Manager),
            Err(RegistryError::EmployeeNotFound { .. })
        ));
    }
}
