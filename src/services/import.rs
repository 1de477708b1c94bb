//! CSV import pipeline.
//!
//! Reads line-oriented employee records, validates each one against the
//! position catalog and the registry, and reports every rejected line in
//! an [`ImportSummary`]. The pipeline never fails as a whole: a bad row is
//! recorded and skipped, and an unreadable input becomes a single summary
//! entry.
//!
//! # Format
//!
//! ```text
//! FirstName,LastName,Email,CompanyName,POSITION_CODE,Salary
//! Jan,Kowalski,jan@techcorp.com,TechCorp,PROGRAMMER,9000
//! ```
//!
//! The header line is required but not inspected. Fields are separated by
//! plain commas; quoting is not supported.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::Path;
use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::models::{Employee, ImportError, ImportErrorKind, ImportSummary, Position};

use super::EmployeeRegistry;

/// Number of fields every data row must have.
pub const EXPECTED_COLUMNS: usize = 6;

/// Imports CSV employee records into a registry.
///
/// # Example
///
/// ```
/// use employee_registry::services::{EmployeeRegistry, ImportService};
///
/// let csv = "FirstName,LastName,Email,Company,Position,Salary\n\
///            Jan,Kowalski,jan@techcorp.com,TechCorp,programmer,9000\n";
///
/// let mut registry = EmployeeRegistry::new();
/// let summary = ImportService::new(&mut registry).import_from_str(csv);
///
/// assert_eq!(summary.imported_count, 1);
/// assert!(summary.errors.is_empty());
/// assert_eq!(registry.get("jan@techcorp.com").unwrap().name(), "Jan Kowalski");
/// ```
pub struct ImportService<'a> {
    registry: &'a mut EmployeeRegistry,
    hire_date: NaiveDate,
}

impl<'a> ImportService<'a> {
    /// Creates an import service writing into `registry`.
    ///
    /// Imported employees are given today's date (UTC) as their hire date.
    pub fn new(registry: &'a mut EmployeeRegistry) -> Self {
        Self {
            registry,
            hire_date: Utc::now().date_naive(),
        }
    }

    /// Sets the hire date given to imported employees.
    pub fn with_hire_date(mut self, hire_date: NaiveDate) -> Self {
        self.hire_date = hire_date;
        self
    }

    /// Imports the CSV file at `path`.
    ///
    /// A file that cannot be opened yields a summary with zero imports and a
    /// single `critical file read error` entry.
    pub fn import_from_path<P: AsRef<Path>>(&mut self, path: P) -> ImportSummary {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => self.import_from_reader(BufReader::new(file)),
            Err(err) => {
                error!(path = %path.display(), error = %err, "Cannot open import file");
                ImportSummary {
                    imported_count: 0,
                    errors: vec![ImportError::whole_file(ImportErrorKind::Read(
                        err.to_string(),
                    ))],
                }
            }
        }
    }

    /// Imports CSV text held in memory.
    pub fn import_from_str(&mut self, content: &str) -> ImportSummary {
        self.import_from_reader(Cursor::new(content))
    }

    /// Imports CSV lines from any buffered reader.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD and the row
    /// is validated as usual. A read failure stops the import; rows read
    /// before it stay imported and the failure is appended as the last error.
    pub fn import_from_reader<R: BufRead>(&mut self, mut reader: R) -> ImportSummary {
        let import_id = Uuid::new_v4();
        info!(import_id = %import_id, "Starting employee import");

        let mut summary = ImportSummary::default();
        let mut buf = Vec::new();

        match read_line(&mut reader, &mut buf) {
            Ok(Some(header)) if !header.is_empty() => {}
            Err(err) => {
                error!(import_id = %import_id, error = %err, "Failed to read header");
                summary
                    .errors
                    .push(ImportError::whole_file(ImportErrorKind::Read(err.to_string())));
                return summary;
            }
            _ => {
                warn!(import_id = %import_id, "Import file is empty");
                summary
                    .errors
                    .push(ImportError::whole_file(ImportErrorKind::EmptyFile));
                return summary;
            }
        }

        // The header is line 1.
        let mut line_number = 1;
        loop {
            line_number += 1;
            let line = match read_line(&mut reader, &mut buf) {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(err) => {
                    error!(
                        import_id = %import_id,
                        line = line_number,
                        error = %err,
                        "Import aborted by read failure"
                    );
                    summary
                        .errors
                        .push(ImportError::whole_file(ImportErrorKind::Read(err.to_string())));
                    break;
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            match self.import_line(&line) {
                Ok(()) => summary.imported_count += 1,
                Err(kind) => {
                    warn!(
                        import_id = %import_id,
                        line = line_number,
                        reason = %kind,
                        "Rejected import row"
                    );
                    summary.errors.push(ImportError::at_line(line_number, kind));
                }
            }
        }

        info!(
            import_id = %import_id,
            imported = summary.imported_count,
            errors = summary.errors.len(),
            "Employee import finished"
        );
        summary
    }

    fn import_line(&mut self, line: &str) -> Result<(), ImportErrorKind> {
        let employee = parse_record(line, self.hire_date)?;
        let email = employee.email().to_string();
        if self.registry.add(employee) {
            Ok(())
        } else {
            Err(ImportErrorKind::Duplicate(email))
        }
    }
}

/// Reads one line without its terminator, decoding it lossily.
///
/// Returns `None` at end of input.
fn read_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Parses and validates one data row into an employee.
///
/// # Errors
///
/// Returns the first validation failure found, checking column count,
/// then position, then salary.
pub fn parse_record(line: &str, hire_date: NaiveDate) -> Result<Employee, ImportErrorKind> {
    let mut fields: Vec<&str> = line.split(',').collect();
    // Trailing empty fields do not count as columns.
    while fields.last() == Some(&"") {
        fields.pop();
    }
    let fields: Vec<&str> = fields.into_iter().map(str::trim).collect();
    let &[first_name, last_name, email, company, position_code, salary] = fields.as_slice() else {
        return Err(ImportErrorKind::ColumnCount {
            expected: EXPECTED_COLUMNS,
            actual: fields.len(),
        });
    };

    let position = Position::from_code(position_code)
        .ok_or_else(|| ImportErrorKind::UnknownPosition(position_code.to_string()))?;

    let salary = parse_salary(salary)?;

    Employee::new(
        format!("{} {}", first_name, last_name),
        email,
        company,
        position,
        salary,
        hire_date,
    )
    .map_err(|err| ImportErrorKind::InvalidRecord(err.to_string()))
}

fn parse_salary(raw: &str) -> Result<Decimal, ImportErrorKind> {
    // Digit separators are not part of the number format.
    if raw.contains('_') {
        return Err(ImportErrorKind::SalaryFormat(raw.to_string()));
    }
    let salary = Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| ImportErrorKind::SalaryFormat(raw.to_string()))?;

    if salary <= Decimal::ZERO {
        return Err(ImportErrorKind::NonPositiveSalary(salary));
    }
    Ok(salary)
}
