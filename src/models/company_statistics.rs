//! Per-company salary statistics.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

/// Placeholder used when a company has no highest earner.
pub const NO_EARNER: &str = "N/A";

/// Aggregated figures for the employees of one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyStatistics {
    /// Number of employees.
    pub employee_count: usize,
    /// Mean salary.
    pub average_salary: Decimal,
    /// Name of the best paid employee.
    pub highest_earner: String,
}

impl fmt::Display for CompanyStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "employees={}, average salary={:.2} PLN, top earner='{}'",
            self.employee_count,
            self.average_salary.round_dp(2),
            self.highest_earner
        )
    }
}
