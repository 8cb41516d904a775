//! Workbook reading for the attendance source.
//!
//! Reads the configured worksheet of an xlsx workbook with `calamine` and
//! cleans it into an [`AttendanceTable`].

use std::fs::File;
use std::io::BufReader;

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use tracing::{debug, warn};

use crate::config::{ColumnLabels, SourceConfig};
use crate::error::{DashboardError, DashboardResult};
use crate::models::{AttendanceRecord, AttendanceTable};

use super::LoadOutcome;
use super::cells::{cell_date, cell_label, header_label};

static EMPTY_CELL: Data = Data::Empty;

/// Loads the attendance table described by `source`.
///
/// Never fails: a missing workbook becomes [`LoadOutcome::NotFound`] and any
/// other read failure becomes [`LoadOutcome::ParseError`]. Both are logged.
///
/// # Example
///
/// ```
/// use attendance_dashboard::config::SourceConfig;
/// use attendance_dashboard::source::{load_table, LoadOutcome};
///
/// let source = SourceConfig {
///     path: "/nonexistent/absences.xlsx".into(),
///     ..SourceConfig::default()
/// };
/// assert!(matches!(load_table(&source), LoadOutcome::NotFound { .. }));
/// ```
pub fn load_table(source: &SourceConfig) -> LoadOutcome {
    let path = source.path.display().to_string();
    let outcome = LoadOutcome::from_result(path.clone(), read_table(source));

    match &outcome {
        LoadOutcome::Loaded(table) => {
            debug!(path = %path, rows = table.len(), "Attendance source loaded");
        }
        LoadOutcome::NotFound { .. } => {
            warn!(path = %path, "Attendance source not found");
        }
        LoadOutcome::ParseError { detail, .. } => {
            warn!(path = %path, error = %detail, "Failed to read attendance source");
        }
    }

    outcome
}

/// Reads the attendance table, propagating every failure as an error.
pub fn read_table(source: &SourceConfig) -> DashboardResult<AttendanceTable> {
    let path = &source.path;
    let path_str = path.display().to_string();

    if !path.is_file() {
        return Err(DashboardError::SourceNotFound { path: path_str });
    }

    // Format follows the extension: xlsx/xlsm, xls, xlsb or ods.
    let mut workbook: Sheets<BufReader<File>> =
        open_workbook_auto(path).map_err(|e| DashboardError::WorkbookOpen {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

    if !workbook.sheet_names().iter().any(|name| name == &source.sheet) {
        return Err(DashboardError::SheetNotFound {
            sheet: source.sheet.clone(),
        });
    }

    let range = workbook
        .worksheet_range(&source.sheet)
        .map_err(|e| DashboardError::WorkbookOpen {
            path: path_str,
            message: e.to_string(),
        })?;

    table_from_range(&range, &source.columns)
}

/// Positions of the required columns within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnIndex {
    date: usize,
    grade: usize,
    class: usize,
    student_name: usize,
}

impl ColumnIndex {
    fn locate(header: &[Data], labels: &ColumnLabels) -> DashboardResult<Self> {
        let trimmed: Vec<String> = header.iter().map(header_label).collect();
        let find = |label: &str| {
            trimmed
                .iter()
                .position(|h| h == label.trim())
                .ok_or_else(|| DashboardError::MissingColumn {
                    column: label.to_string(),
                })
        };

        Ok(Self {
            date: find(&labels.date)?,
            grade: find(&labels.grade)?,
            class: find(&labels.class)?,
            student_name: find(&labels.student_name)?,
        })
    }
}

/// Builds a table from a worksheet range whose first row is the header.
///
/// A sheet without any rows yields an empty table. Blank rows and rows
/// without a grade, class or student name are skipped.
pub fn table_from_range(
    range: &Range<Data>,
    labels: &ColumnLabels,
) -> DashboardResult<AttendanceTable> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(AttendanceTable::empty());
    };
    let columns = ColumnIndex::locate(header, labels)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for row in rows {
        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }

        let cell = |idx: usize| row.get(idx).unwrap_or(&EMPTY_CELL);
        let (Some(grade), Some(class), Some(student_name)) = (
            cell_label(cell(columns.grade)),
            cell_label(cell(columns.class)),
            cell_label(cell(columns.student_name)),
        ) else {
            skipped += 1;
            continue;
        };

        records.push(AttendanceRecord {
            date: cell_date(cell(columns.date)),
            grade,
            class,
            student_name,
        });
    }

    if skipped > 0 {
        debug!(skipped, "Skipped rows without grade, class or student name");
    }

    Ok(AttendanceTable::new(records))
}
