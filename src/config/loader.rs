//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! application configuration from a YAML file.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::{RegistryError, RegistryResult};

use super::types::AppConfig;

/// Loads the application configuration.
///
/// # Example
///
/// ```no_run
/// use employee_registry::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/registry.yaml")?;
/// println!("Importing from {}", loader.config().import.csv_path.display());
/// # Ok::<(), employee_registry::error::RegistryError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file cannot be read (`ConfigNotFound`)
    /// - The file is not valid YAML or has a field of the wrong type
    ///   (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> RegistryResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|_| RegistryError::ConfigNotFound {
            path: path.display().to_string(),
        })?;
        Self::from_yaml(&content, path)
    }

    /// Like [`load`](Self::load), but falls back to defaults when the file
    /// does not exist. A file that exists but is invalid is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> RegistryResult<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => Self::from_yaml(&content, path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No configuration file, using defaults");
                Ok(Self::default())
            }
            Err(_) => Err(RegistryError::ConfigNotFound {
                path: path.display().to_string(),
            }),
        }
    }

    fn from_yaml(content: &str, path: &Path) -> RegistryResult<Self> {
        // An empty document deserializes to unit, not to an empty map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config = serde_yaml::from_str(content).map_err(|e| RegistryError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), "Configuration loaded");
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AppConfig {
        self.config
    }
}
