//! Configuration loading and management for the attendance dashboard.
//!
//! This module provides functionality to load the dashboard configuration
//! from a YAML file: the workbook location and column labels, the refresh
//! interval, the server bind address and the page labels.
//!
//! # Example
//!
//! ```no_run
//! use attendance_dashboard::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/dashboard.yaml").unwrap();
//! println!("Workbook: {}", config.config().source.path.display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ColumnLabels, DashboardConfig, DisplayConfig, RefreshConfig, ServerConfig, SourceConfig,
    TextDirection,
};
