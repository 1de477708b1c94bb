//! Position catalog.
//!
//! Positions are a closed set of roles. Each one carries a salary band
//! and a hierarchy rank, where a lower rank means a more senior role.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Salary band and seniority attached to a [`Position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionBand {
    /// Starting salary for the role; promotions reset salary to this value.
    pub base_salary: Decimal,
    /// Ceiling that raises are clamped to.
    pub max_salary: Decimal,
    /// Seniority rank, 1 being the most senior.
    pub hierarchy_rank: u8,
}

/// A role an employee can hold.
///
/// Variants are declared from most to least senior, so the derived `Ord`
/// follows the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    /// Top executive.
    President,
    /// Deputy to the top executive.
    VicePresident,
    /// Team manager; teams need one to be compliant.
    Manager,
    /// Software engineer.
    Programmer,
    /// Intern.
    Intern,
}

impl Position {
    /// Every position, most senior first.
    pub const ALL: [Position; 5] = [
        Position::President,
        Position::VicePresident,
        Position::Manager,
        Position::Programmer,
        Position::Intern,
    ];

    /// Returns the salary band for this position.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_registry::models::Position;
    /// use rust_decimal::Decimal;
    ///
    /// let band = Position::Manager.band();
    /// assert_eq!(band.base_salary, Decimal::new(12000, 0));
    /// assert_eq!(band.max_salary, Decimal::new(19000, 0));
    /// assert_eq!(band.hierarchy_rank, 3);
    /// ```
    pub fn band(self) -> PositionBand {
        let (base, max, rank) = match self {
            Position::President => (25_000, 40_000, 1),
            Position::VicePresident => (18_000, 28_000, 2),
            Position::Manager => (12_000, 19_000, 3),
            Position::Programmer => (8_000, 14_000, 4),
            Position::Intern => (3_000, 5_000, 5),
        };
        PositionBand {
            base_salary: Decimal::new(base, 0),
            max_salary: Decimal::new(max, 0),
            hierarchy_rank: rank,
        }
    }

    /// Starting salary for the position.
    pub fn base_salary(self) -> Decimal {
        self.band().base_salary
    }

    /// Salary ceiling for the position.
    pub fn max_salary(self) -> Decimal {
        self.band().max_salary
    }

    /// Seniority rank, lower is more senior.
    pub fn hierarchy_rank(self) -> u8 {
        self.band().hierarchy_rank
    }

    /// Returns true if `self` is strictly more senior than `other`.
    pub fn outranks(self, other: Position) -> bool {
        self.hierarchy_rank() < other.hierarchy_rank()
    }

    /// The catalog key used in CSV files and reports.
    pub fn code(self) -> &'static str {
        match self {
            Position::President => "PRESIDENT",
            Position::VicePresident => "VICE_PRESIDENT",
            Position::Manager => "MANAGER",
            Position::Programmer => "PROGRAMMER",
            Position::Intern => "INTERN",
        }
    }

    /// Looks up a position by catalog key, ignoring case and surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_registry::models::Position;
    ///
    /// assert_eq!(Position::from_code("manager"), Some(Position::Manager));
    /// assert_eq!(Position::from_code("Vice_President"), Some(Position::VicePresident));
    /// assert_eq!(Position::from_code("NINJA"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Position> {
        let code = code.trim().to_uppercase();
        Position::ALL.into_iter().find(|p| p.code() == code)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when parsing an unknown position code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown position: '{0}'")]
pub struct UnknownPosition(pub String);

impl FromStr for Position {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_code(s).ok_or_else(|| UnknownPosition(s.trim().to_string()))
    }
}
