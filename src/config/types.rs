//! Configuration types.
//!
//! Every section and field has a default, so a partial YAML file (or no
//! file at all) still produces a complete [`AppConfig`].

use std::path::PathBuf;

use serde::Deserialize;

use crate::models::Position;

/// CSV import settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// File imported at startup.
    pub csv_path: PathBuf,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("data/employees.csv"),
        }
    }
}

/// External user API settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme and host, without a trailing slash.
    pub base_url: String,
    /// Path of the user listing, appended to `base_url`.
    pub users_path: String,
    /// Whole-request timeout.
    pub timeout_secs: u64,
    /// Position given to every fetched employee.
    pub default_position: Position,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://jsonplaceholder.typicode.com".to_string(),
            users_path: "/users".to_string(),
            timeout_secs: 10,
            default_position: Position::Programmer,
        }
    }
}

impl ApiConfig {
    /// Full URL of the user listing.
    pub fn users_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.users_path)
    }
}

/// Export settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory receiving exported files.
    pub directory: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("export"),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. `info` or `employee_registry=debug`.
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// The complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// CSV import settings.
    pub import: ImportConfig,
    /// External API settings.
    pub api: ApiConfig,
    /// Export settings.
    pub export: ExportConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}
