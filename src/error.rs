//! Error types for the employee registry.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every business-rule violation, lookup failure and collaborator
//! failure the registry can report. CSV row failures are not errors in
//! this sense; they are collected in an [`ImportSummary`](crate::models::ImportSummary).

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::Position;

/// The main error type for the employee registry.
///
/// Every fallible operation outside the CSV import pipeline returns this
/// error type, so callers can match on the violated rule.
///
/// # Example
///
/// ```
/// use employee_registry::error::RegistryError;
///
/// let error = RegistryError::TeamNotFound {
///     name: "Phoenix".to_string(),
/// };
/// assert_eq!(error.to_string(), "Team not found: Phoenix");
/// ```
#[derive(Debug, Error)]
pub enum RegistryError {
    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A rating outside the accepted scale was given.
    #[error("rating must be between 1 and 5 (got {rating})")]
    InvalidRating {
        /// The rejected rating.
        rating: u8,
    },

    /// A promotion did not move the employee to a more senior position.
    #[error("promotion must target a higher position (current: {current}, requested: {target})")]
    PromotionNotHigher {
        /// The employee's current position.
        current: Position,
        /// The requested position.
        target: Position,
    },

    /// A raise was requested with a negative percentage.
    #[error("raise percentage cannot be negative (got {percentage}%)")]
    NegativeRaise {
        /// The rejected percentage.
        percentage: Decimal,
    },

    /// The employee already belongs to a team and must be transferred instead.
    #[error("employee is already in another team ({team})")]
    AlreadyInTeam {
        /// The team the employee currently belongs to.
        team: String,
    },

    /// The team has no free seats left.
    #[error("team is full: '{team}' (max: {capacity})")]
    TeamFull {
        /// The name of the full team.
        team: String,
        /// The team's maximum size.
        capacity: usize,
    },

    /// No team with the given name is known.
    #[error("Team not found: {name}")]
    TeamNotFound {
        /// The requested team name.
        name: String,
    },

    /// A team with the given name is already registered.
    #[error("Team '{name}' already exists")]
    DuplicateTeam {
        /// The duplicated team name.
        name: String,
    },

    /// No employee with the given email is registered.
    #[error("Employee not found: {email}")]
    EmployeeNotFound {
        /// The requested email.
        email: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The remote employee directory could not be queried.
    ///
    /// The message tells apart a bad HTTP status, a connection failure and
    /// a malformed payload.
    #[error("API error: {message}")]
    Api {
        /// A description of the failure.
        message: String,
    },

    /// An export could not be written.
    #[error("Failed to write '{path}': {message}")]
    Export {
        /// The destination that could not be written.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },
}

/// A type alias for Results that return RegistryError.
pub type RegistryResult<T> = Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_invalid_employee_displays_field_and_message() {
        let error = RegistryError::InvalidEmployee {
            field: "salary".to_string(),
            message: "cannot be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid employee field 'salary': cannot be negative"
        );
    }

    #[test]
    fn test_promotion_not_higher_names_both_positions() {
        let error = RegistryError::PromotionNotHigher {
            current: Position::Manager,
            target: Position::Intern,
        };
        let message = error.to_string();
        assert!(message.contains("promotion must target a higher position"));
        assert!(message.contains("MANAGER"));
        assert!(message.contains("INTERN"));
    }

    #[test]
    fn test_negative_raise_displays_percentage() {
        let error = RegistryError::NegativeRaise {
            percentage: Decimal::from_str("-5.0").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "raise percentage cannot be negative (got -5.0%)"
        );
    }

    #[test]
    fn test_team_errors_display_team_name() {
        let full = RegistryError::TeamFull {
            team: "Phoenix".to_string(),
            capacity: 5,
        };
        assert_eq!(full.to_string(), "team is full: 'Phoenix' (max: 5)");

        let taken = RegistryError::AlreadyInTeam {
            team: "Gorilla".to_string(),
        };
        assert_eq!(
            taken.to_string(),
            "employee is already in another team (Gorilla)"
        );
    }

    #[test]
    fn test_api_error_displays_message() {
        let error = RegistryError::Api {
            message: "API request failed with status 503".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "API error: API request failed with status 503"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<RegistryError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> RegistryResult<()> {
            Err(RegistryError::EmployeeNotFound {
                email: "ghost@corp.com".to_string(),
            })
        }

        fn propagates_error() -> RegistryResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
