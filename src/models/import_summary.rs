//! Import summary model.
//!
//! Captures the outcome of one CSV import run: how many rows made it into
//! the registry and why every other row was rejected.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// Why a single row (or the whole file) could not be imported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportErrorKind {
    /// The input had no header line.
    #[error("file is empty")]
    EmptyFile,

    /// The input could not be read.
    #[error("critical file read error: {0}")]
    Read(String),

    /// A row did not split into the expected number of fields.
    #[error("wrong column count (expected {expected}, got {actual})")]
    ColumnCount {
        /// Number of fields required.
        expected: usize,
        /// Number of fields found.
        actual: usize,
    },

    /// The position code is not in the catalog.
    #[error("unknown position: '{0}'")]
    UnknownPosition(String),

    /// The salary field is not a number.
    #[error("invalid salary format: '{0}'")]
    SalaryFormat(String),

    /// The salary parsed but is zero or negative.
    #[error("salary must be positive (is {0})")]
    NonPositiveSalary(Decimal),

    /// The employee record itself was rejected.
    #[error("{0}")]
    InvalidRecord(String),

    /// The registry already holds an employee with this email.
    #[error("employee with email '{0}' already exists")]
    Duplicate(String),
}

/// One failed line of an import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportError {
    /// 1-based line number, counting the header as line 1. `None` for
    /// failures that concern the whole input.
    pub line: Option<usize>,
    /// What went wrong.
    pub kind: ImportErrorKind,
}

impl ImportError {
    /// Creates an error for a specific line.
    pub fn at_line(line: usize, kind: ImportErrorKind) -> Self {
        Self {
            line: Some(line),
            kind,
        }
    }

    /// Creates an error that concerns the whole input.
    pub fn whole_file(kind: ImportErrorKind) -> Self {
        Self { line: None, kind }
    }
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.line, &self.kind) {
            (None, kind) => write!(f, "{}", kind),
            (Some(line), kind @ ImportErrorKind::Duplicate(_)) => {
                write!(f, "line {}: {}", line, kind)
            }
            (Some(line), kind) => write!(f, "line {}: invalid data -> {}", line, kind),
        }
    }
}

impl Serialize for ImportError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Result of a CSV import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Number of rows added to the registry.
    pub imported_count: usize,
    /// Rejected rows, in input order.
    pub errors: Vec<ImportError>,
}

impl ImportSummary {
    /// Returns true when every row was imported.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ImportSummary {{ imported: {}, errors: {} }}",
            self.imported_count,
            self.errors.len()
        )
    }
}
