//! Error types for the attendance dashboard.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can occur while loading configuration or reading
//! the attendance workbook.

use thiserror::Error;

/// The main error type for the attendance dashboard.
///
/// Source failures never reach the page as errors: the loader folds them into
/// a [`LoadOutcome`](crate::source::LoadOutcome) so the dashboard can still
/// render its empty state. Configuration failures are fatal at startup.
///
/// # Example
///
/// ```
/// use attendance_dashboard::error::DashboardError;
///
/// let error = DashboardError::SheetNotFound {
///     sheet: "raw_data".to_string(),
/// };
/// assert_eq!(error.to_string(), "Worksheet not found: raw_data");
/// ```
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The attendance workbook does not exist.
    #[error("Attendance source not found: {path}")]
    SourceNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The attendance workbook exists but could not be opened or read.
    #[error("Failed to open workbook '{path}': {message}")]
    WorkbookOpen {
        /// The workbook path.
        path: String,
        /// A description of the read failure.
        message: String,
    },

    /// The configured worksheet is not present in the workbook.
    #[error("Worksheet not found: {sheet}")]
    SheetNotFound {
        /// The configured sheet name.
        sheet: String,
    },

    /// A required column label is missing from the header row.
    #[error("Required column not found in header: {column}")]
    MissingColumn {
        /// The column label that was expected.
        column: String,
    },

    /// A chart could not be drawn.
    #[error("Failed to render chart '{title}': {message}")]
    ChartRender {
        /// The chart title.
        title: String,
        /// A description of the drawing failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or holds invalid values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return DashboardError.
pub type DashboardResult<T> = Result<T, DashboardError>;
