//! Load outcomes for the attendance source.

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};
use crate::models::AttendanceTable;

/// The result of one attempt to read the attendance workbook.
///
/// Every failure still yields a usable (empty) table through
/// [`LoadOutcome::into_table`], while [`LoadOutcome::status`] keeps the
/// reason available for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The workbook was read.
    Loaded(AttendanceTable),
    /// The workbook file does not exist.
    NotFound {
        /// The configured workbook path.
        path: String,
    },
    /// The workbook exists but could not be read as an attendance sheet.
    ParseError {
        /// The configured workbook path.
        path: String,
        /// What went wrong.
        detail: String,
    },
}

impl LoadOutcome {
    /// Folds a read result into an outcome.
    pub fn from_result(path: impl Into<String>, result: DashboardResult<AttendanceTable>) -> Self {
        match result {
            Ok(table) => LoadOutcome::Loaded(table),
            Err(DashboardError::SourceNotFound { path }) => LoadOutcome::NotFound { path },
            Err(err) => LoadOutcome::ParseError {
                path: path.into(),
                detail: err.to_string(),
            },
        }
    }

    /// Returns the table if the workbook was read.
    pub fn table(&self) -> Option<&AttendanceTable> {
        match self {
            LoadOutcome::Loaded(table) => Some(table),
            _ => None,
        }
    }

    /// Returns true if the workbook was read.
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }

    /// Returns the table, or an empty table for any failure.
    pub fn into_table(self) -> AttendanceTable {
        match self {
            LoadOutcome::Loaded(table) => table,
            _ => AttendanceTable::empty(),
        }
    }

    /// Summarizes the outcome for display and logging.
    pub fn status(&self) -> SourceStatus {
        match self {
            LoadOutcome::Loaded(table) => SourceStatus {
                state: SourceState::Loaded,
                rows: table.len(),
                detail: None,
            },
            LoadOutcome::NotFound { path } => SourceStatus {
                state: SourceState::NotFound,
                rows: 0,
                detail: Some(format!("Attendance source not found: {}", path)),
            },
            LoadOutcome::ParseError { detail, .. } => SourceStatus {
                state: SourceState::ParseError,
                rows: 0,
                detail: Some(detail.clone()),
            },
        }
    }
}

/// Which branch of [`LoadOutcome`] a cycle ended in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceState {
    /// The workbook was read.
    Loaded,
    /// The workbook file does not exist.
    NotFound,
    /// The workbook could not be read.
    ParseError,
}

impl std::fmt::Display for SourceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceState::Loaded => write!(f, "loaded"),
            SourceState::NotFound => write!(f, "not_found"),
            SourceState::ParseError => write!(f, "parse_error"),
        }
    }
}

/// Serializable summary of a load outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceStatus {
    /// The outcome branch.
    pub state: SourceState,
    /// Number of records read (zero on failure).
    pub rows: usize,
    /// Failure description, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceRecord;
    use chrono::NaiveDate;

    fn one_row_table() -> AttendanceTable {
        AttendanceTable::new(vec![AttendanceRecord::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "G1",
            "A",
            "Ali",
        )])
    }

    #[test]
    fn test_loaded_outcome_keeps_table() {
        let outcome = LoadOutcome::from_result("absences.xlsx", Ok(one_row_table()));
        assert!(outcome.is_loaded());
        assert_eq!(outcome.status().rows, 1);
        assert_eq!(outcome.status().state, SourceState::Loaded);
        assert_eq!(outcome.into_table().len(), 1);
    }

    #[test]
    fn test_source_not_found_maps_to_not_found() {
        let outcome = LoadOutcome::from_result(
            "absences.xlsx",
            Err(DashboardError::SourceNotFound {
                path: "absences.xlsx".to_string(),
            }),
        );
        assert_eq!(
            outcome,
            LoadOutcome::NotFound {
                path: "absences.xlsx".to_string()
            }
        );
        assert!(outcome.table().is_none());
        assert!(outcome.into_table().is_empty());
    }

    #[test]
    fn test_other_errors_map_to_parse_error_with_detail() {
        let outcome = LoadOutcome::from_result(
            "absences.xlsx",
            Err(DashboardError::MissingColumn {
                column: "الاسم".to_string(),
            }),
        );
        let status = outcome.status();
        assert_eq!(status.state, SourceState::ParseError);
        assert_eq!(status.rows, 0);
        assert!(status.detail.unwrap().contains("الاسم"));
        assert!(outcome.into_table().is_empty());
    }

    #[test]
    fn test_status_serialization_skips_missing_detail() {
        let status = LoadOutcome::Loaded(AttendanceTable::empty()).status();
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, r#"{"state":"loaded","rows":0}"#);
    }
}
