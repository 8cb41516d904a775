//! Attendance data source.
//!
//! This module reads the attendance workbook into an
//! [`AttendanceTable`](crate::models::AttendanceTable): header labels are
//! trimmed, the required columns are located by label, label cells are
//! cleaned and date cells are coerced to [`RecordDate`](crate::models::RecordDate).
//! Failures are reported as a [`LoadOutcome`] rather than an error.

mod cells;
mod loader;
mod outcome;

pub use loader::{load_table, read_table, table_from_range};
pub use outcome::{LoadOutcome, SourceState, SourceStatus};
