//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the dashboard
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{DashboardError, DashboardResult};

use super::types::DashboardConfig;

/// Loads and validates the dashboard configuration.
///
/// # Example
///
/// ```no_run
/// use attendance_dashboard::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/dashboard.yaml").unwrap();
/// println!("Reading sheet: {}", loader.config().source.sheet);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: DashboardConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML
    /// - A value is out of range (e.g. a zero refresh interval)
    pub fn load<P: AsRef<Path>>(path: P) -> DashboardResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| DashboardError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Parses configuration from YAML text.
    ///
    /// `origin` names the source in error messages.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_dashboard::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::parse("refresh:\n  interval_secs: 30\n", "inline").unwrap();
    /// assert_eq!(loader.config().refresh.interval_secs, 30);
    /// ```
    pub fn parse(content: &str, origin: &str) -> DashboardResult<Self> {
        let config: DashboardConfig =
            serde_yaml::from_str(content).map_err(|e| DashboardError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        Self::validate(&config, origin)?;

        Ok(Self { config })
    }

    fn validate(config: &DashboardConfig, origin: &str) -> DashboardResult<()> {
        if config.refresh.interval_secs == 0 {
            return Err(DashboardError::ConfigParseError {
                path: origin.to_string(),
                message: "refresh.interval_secs must be greater than zero".to_string(),
            });
        }
        if config.source.sheet.trim().is_empty() {
            return Err(DashboardError::ConfigParseError {
                path: origin.to_string(),
                message: "source.sheet must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> DashboardConfig {
        self.config
    }
}
