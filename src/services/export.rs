//! Data export.
//!
//! Exports go through the [`FileSystem`] trait so the formatting and
//! error-reporting rules can be exercised without touching a disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{RegistryError, RegistryResult};

use super::EmployeeRegistry;
use super::import::EXPECTED_COLUMNS;

/// File that receives a line for every failed export.
pub const ERROR_LOG: &str = "error.log";

const REGISTRY_HEADER: [&str; EXPECTED_COLUMNS] =
    ["FirstName", "LastName", "Email", "CompanyName", "Position", "Salary"];

/// Destination for exported files.
pub trait FileSystem {
    /// Writes `content` to `path`, replacing any existing file.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// Writes files below a root directory on the local disk.
#[derive(Debug, Clone)]
pub struct LocalFileSystem {
    root: PathBuf,
}

impl LocalFileSystem {
    /// Creates a file system rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FileSystem for LocalFileSystem {
    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        let target = self.root.join(path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(target, content)
    }
}

/// Renders rows as comma-separated lines.
pub struct CsvFormatter;

impl CsvFormatter {
    /// One line per row, each terminated by `\n`.
    pub fn format<R, F>(rows: R) -> String
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = F>,
        F: AsRef<str>,
    {
        let mut out = String::new();
        for row in rows {
            let mut first = true;
            for field in row {
                if !first {
                    out.push(',');
                }
                out.push_str(field.as_ref());
                first = false;
            }
            out.push('\n');
        }
        out
    }
}

/// Writes registry data into an export directory.
pub struct ExportService<F: FileSystem> {
    file_system: F,
    directory: PathBuf,
}

impl<F: FileSystem> ExportService<F> {
    /// Creates a service exporting into `directory` on `file_system`.
    pub fn new(file_system: F, directory: impl Into<PathBuf>) -> Self {
        Self {
            file_system,
            directory: directory.into(),
        }
    }

    /// Writes `rows` as CSV to `<directory>/<filename>`.
    ///
    /// # Errors
    ///
    /// Returns `Export` if the write fails. The failure is also written
    /// to the directory's error log when possible.
    pub fn export_data<R, S>(&self, filename: &str, rows: R) -> RegistryResult<()>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.write(filename, &CsvFormatter::format(rows))
    }

    /// Exports every employee in the import format, header included.
    ///
    /// The first word of the name becomes the first name and the rest the
    /// last name, so the file can be imported again.
    pub fn export_registry(&self, filename: &str, registry: &EmployeeRegistry) -> RegistryResult<()> {
        let header: Vec<String> = REGISTRY_HEADER.iter().map(|s| s.to_string()).collect();
        let rows = registry.iter().map(|employee| {
            let (first_name, last_name) = employee
                .name()
                .split_once(' ')
                .unwrap_or((employee.name(), ""));
            vec![
                first_name.to_string(),
                last_name.to_string(),
                employee.email().to_string(),
                employee.company_name().to_string(),
                employee.position().code().to_string(),
                employee.salary().to_string(),
            ]
        });
        self.export_data(filename, std::iter::once(header).chain(rows))
    }

    /// Exports per-company statistics as pretty-printed JSON.
    pub fn export_statistics(&self, filename: &str, registry: &EmployeeRegistry) -> RegistryResult<()> {
        let json = serde_json::to_string_pretty(&registry.company_statistics()).map_err(|e| {
            RegistryError::Export {
                path: filename.to_string(),
                message: e.to_string(),
            }
        })?;
        self.write(filename, &json)
    }

    fn write(&self, filename: &str, content: &str) -> RegistryResult<()> {
        let path = self.directory.join(filename);
        match self.file_system.write(&path, content) {
            Ok(()) => {
                info!(path = %path.display(), bytes = content.len(), "Export written");
                Ok(())
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Export failed");
                let entry = format!("Failed to write {}: {}\n", filename, e);
                if let Err(log_err) = self.file_system.write(&self.directory.join(ERROR_LOG), &entry) {
                    warn!(error = %log_err, "Could not record export failure");
                }
                Err(RegistryError::Export {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })
            }
        }
    }
}
