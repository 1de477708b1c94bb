//! In-memory employee registry and the reports derived from it.
//!
//! The registry owns every [`Employee`] for the lifetime of the process.
//! Records are kept in insertion order and identified by email.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{RegistryError, RegistryResult};
use crate::models::{CompanyStatistics, Employee, NO_EARNER, Position};

/// The in-memory store of employees.
///
/// # Example
///
/// ```
/// use employee_registry::models::{Employee, Position};
/// use employee_registry::services::EmployeeRegistry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let hired = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let mut registry = EmployeeRegistry::new();
/// let jan = Employee::new("Jan Kowalski", "jan@tech.pl", "TechCorp",
///     Position::Programmer, Decimal::new(9000, 0), hired).unwrap();
///
/// assert!(registry.add(jan.clone()));
/// assert!(!registry.add(jan));
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct EmployeeRegistry {
    employees: Vec<Employee>,
    index: HashMap<String, usize>,
}

impl EmployeeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee unless one with the same email is already registered.
    ///
    /// Returns false, leaving the registry untouched, on a duplicate email.
    /// Other fields are not compared.
    pub fn add(&mut self, employee: Employee) -> bool {
        if self.index.contains_key(employee.email()) {
            debug!(email = %employee.email(), "Rejected duplicate employee");
            return false;
        }
        self.index
            .insert(employee.email().to_string(), self.employees.len());
        self.employees.push(employee);
        true
    }

    /// Adds every employee in turn and returns how many were new.
    pub fn merge<I>(&mut self, employees: I) -> usize
    where
        I: IntoIterator<Item = Employee>,
    {
        let mut added = 0;
        for employee in employees {
            if self.add(employee) {
                added += 1;
            }
        }
        added
    }

    /// Number of registered employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if nobody is registered.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Iterates over employees in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    /// Looks up an employee by email.
    pub fn get(&self, email: &str) -> Option<&Employee> {
        self.index.get(email).map(|&i| &self.employees[i])
    }

    /// Looks up an employee by email for mutation.
    pub fn get_mut(&mut self, email: &str) -> Option<&mut Employee> {
        self.index.get(email).map(|&i| &mut self.employees[i])
    }

    /// Like [`get_mut`](Self::get_mut) but reports a missing email as an error.
    pub fn require_mut(&mut self, email: &str) -> RegistryResult<&mut Employee> {
        self.get_mut(email)
            .ok_or_else(|| RegistryError::EmployeeNotFound {
                email: email.to_string(),
            })
    }

    /// Employees whose company name matches, ignoring case.
    pub fn find_by_company(&self, company_name: &str) -> Vec<&Employee> {
        let wanted = company_name.to_lowercase();
        self.employees
            .iter()
            .filter(|e| e.company_name().to_lowercase() == wanted)
            .collect()
    }

    /// Employees sorted by name, ignoring case.
    ///
    /// Employees with equal names keep their insertion order. The registry
    /// itself is not reordered.
    pub fn sort_by_name(&self) -> Vec<&Employee> {
        let mut sorted: Vec<&Employee> = self.employees.iter().collect();
        sorted.sort_by_cached_key(|e| e.name().to_lowercase());
        sorted
    }

    /// Employees bucketed by position.
    pub fn group_by_position(&self) -> BTreeMap<Position, Vec<&Employee>> {
        let mut grouped: BTreeMap<Position, Vec<&Employee>> = BTreeMap::new();
        for employee in &self.employees {
            grouped.entry(employee.position()).or_default().push(employee);
        }
        grouped
    }

    /// Number of employees per position.
    pub fn count_by_position(&self) -> BTreeMap<Position, usize> {
        let mut counts = BTreeMap::new();
        for employee in &self.employees {
            *counts.entry(employee.position()).or_insert(0) += 1;
        }
        counts
    }

    /// Mean salary over all employees; zero when the registry is empty.
    pub fn average_salary(&self) -> Decimal {
        average_salary(&self.employees)
    }

    /// The best paid employee. The earliest registered wins a tie.
    pub fn find_highest_salary(&self) -> Option<&Employee> {
        highest_earner(self.employees.iter())
    }

    /// Employees paid strictly less than their position's base salary.
    pub fn validate_salary_consistency(&self) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|e| e.salary() < e.position().base_salary())
            .collect()
    }

    /// Headcount, mean salary and top earner for every company.
    ///
    /// Companies are grouped by exact name.
    pub fn company_statistics(&self) -> BTreeMap<String, CompanyStatistics> {
        let mut by_company: BTreeMap<&str, Vec<&Employee>> = BTreeMap::new();
        for employee in &self.employees {
            by_company
                .entry(employee.company_name())
                .or_default()
                .push(employee);
        }

        by_company
            .into_iter()
            .map(|(company, members)| {
                let stats = CompanyStatistics {
                    employee_count: members.len(),
                    average_salary: average_salary(members.iter().copied()),
                    highest_earner: highest_earner(members.iter().copied())
                        .map(|e| e.name().to_string())
                        .unwrap_or_else(|| NO_EARNER.to_string()),
                };
                (company.to_string(), stats)
            })
            .collect()
    }
}

fn average_salary<'a, I>(employees: I) -> Decimal
where
    I: IntoIterator<Item = &'a Employee>,
{
    let salaries: Vec<Decimal> = employees.into_iter().map(Employee::salary).collect();
    if salaries.is_empty() {
        return Decimal::ZERO;
    }

    let total = salaries
        .iter()
        .try_fold(Decimal::ZERO, |total, &salary| total.checked_add(salary));
    match total {
        Some(total) => total / Decimal::from(salaries.len()),
        // Salaries are non-negative, so each step stays within range.
        None => salaries
            .iter()
            .zip(1u64..)
            .fold(Decimal::ZERO, |mean, (&salary, n)| {
                mean + (salary - mean) / Decimal::from(n)
            }),
    }
}

fn highest_earner<'a, I>(employees: I) -> Option<&'a Employee>
where
    I: Iterator<Item = &'a Employee>,
{
    employees.fold(None, |best: Option<&Employee>, e| match best {
        Some(b) if e.salary() <= b.salary() => Some(b),
        _ => Some(e),
    })
}
