//! Aggregation result models.
//!
//! This module contains the [`AggregationResult`] type and the count pairs it
//! is built from. Results are derived per cycle and never persisted.

use serde::{Deserialize, Serialize};

use super::RecordDate;

/// The number of absences recorded for one student.
///
/// # Example
///
/// ```
/// use attendance_dashboard::models::StudentCount;
///
/// let top = StudentCount::new("Ali", 2);
/// assert_eq!(top.to_string(), "Ali (2)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentCount {
    /// The student's name.
    pub name: String,
    /// The number of absences.
    pub count: usize,
}

impl StudentCount {
    /// Creates a student count.
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

impl std::fmt::Display for StudentCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.count)
    }
}

/// The number of absences recorded on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateCount {
    /// The absence date.
    pub date: RecordDate,
    /// The number of absences on that date.
    pub count: usize,
}

impl DateCount {
    /// Creates a date count.
    pub fn new(date: impl Into<RecordDate>, count: usize) -> Self {
        Self {
            date: date.into(),
            count,
        }
    }
}

/// The metrics and chart series for one grade/class selection.
///
/// # Invariants
///
/// - `total_count` equals the sum of `by_date` counts.
/// - `by_date` is strictly ascending by date.
/// - `by_student_top10` holds at most ten entries, in descending count order.
/// - `top_student` is the first entry of `by_student_top10`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationResult {
    /// Number of absence records matching the selection.
    pub total_count: usize,
    /// The most-absent student, if any record matched.
    pub top_student: Option<StudentCount>,
    /// Absences per date, ascending.
    pub by_date: Vec<DateCount>,
    /// The most-absent students, descending, at most ten.
    pub by_student_top10: Vec<StudentCount>,
}

impl AggregationResult {
    /// The result for a missing selection, empty table or no matching rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if no record contributed to this result.
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}
