//! Configuration loading for the employee registry.
//!
//! This module loads the application configuration from a YAML file:
//! the CSV to import, the external user API, the export directory and the
//! log level.
//!
//! # Example
//!
//! ```no_run
//! use employee_registry::config::ConfigLoader;
//!
//! let config = ConfigLoader::load_or_default("./config/registry.yaml")
//!     .unwrap()
//!     .into_config();
//! println!("Fetching users from {}", config.api.users_url());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ApiConfig, AppConfig, ExportConfig, ImportConfig, LoggingConfig};
