//! Attendance record model.
//!
//! This module defines [`AttendanceRecord`], one absence of one student on
//! one date, and [`RecordDate`], the cleaned date of that absence.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire form of [`RecordDate::Unknown`].
pub const UNKNOWN_DATE_LABEL: &str = "unknown";

/// The cleaned date of an absence record.
///
/// Date cells that cannot be parsed are kept as [`RecordDate::Unknown`]
/// instead of dropping the row, so the record still counts towards the
/// total and the per-student tallies. Every known date orders before
/// `Unknown`, which places the unknown bucket last in date series.
///
/// # Example
///
/// ```
/// use attendance_dashboard::models::RecordDate;
/// use chrono::NaiveDate;
///
/// let known = RecordDate::Known(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// assert!(known < RecordDate::Unknown);
/// assert_eq!(known.to_string(), "2024-01-01");
/// assert_eq!(RecordDate::Unknown.to_string(), "unknown");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordDate {
    /// A successfully parsed calendar date.
    Known(NaiveDate),
    /// The date cell was empty or could not be parsed.
    Unknown,
}

impl RecordDate {
    /// Returns the calendar date, if known.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            RecordDate::Known(date) => Some(*date),
            RecordDate::Unknown => None,
        }
    }

    /// Returns true if the date could not be parsed.
    pub fn is_unknown(&self) -> bool {
        matches!(self, RecordDate::Unknown)
    }
}

impl From<NaiveDate> for RecordDate {
    fn from(date: NaiveDate) -> Self {
        RecordDate::Known(date)
    }
}

impl From<Option<NaiveDate>> for RecordDate {
    fn from(date: Option<NaiveDate>) -> Self {
        date.map_or(RecordDate::Unknown, RecordDate::Known)
    }
}

impl fmt::Display for RecordDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordDate::Known(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            RecordDate::Unknown => f.write_str(UNKNOWN_DATE_LABEL),
        }
    }
}

impl FromStr for RecordDate {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == UNKNOWN_DATE_LABEL {
            return Ok(RecordDate::Unknown);
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map(RecordDate::Known)
    }
}

impl Serialize for RecordDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RecordDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One absence: a student missing school on a date.
///
/// # Example
///
/// ```
/// use attendance_dashboard::models::{AttendanceRecord, RecordDate};
/// use chrono::NaiveDate;
///
/// let record = AttendanceRecord::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     "G1",
///     "A",
///     "Ali",
/// );
/// assert_eq!(record.student_name, "Ali");
/// assert!(!record.date.is_unknown());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The date of the absence.
    pub date: RecordDate,
    /// The grade label (cohort).
    pub grade: String,
    /// The class label, scoped to the grade.
    pub class: String,
    /// The absent student's name.
    pub student_name: String,
}

impl AttendanceRecord {
    /// Creates a record from its four fields.
    pub fn new(
        date: impl Into<RecordDate>,
        grade: impl Into<String>,
        class: impl Into<String>,
        student_name: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            grade: grade.into(),
            class: class.into(),
            student_name: student_name.into(),
        }
    }

    /// Returns true if the record belongs to the given grade and class.
    pub fn matches(&self, grade: &str, class: &str) -> bool {
        self.grade == grade && self.class == class
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_known_dates_sort_chronologically_before_unknown() {
        let mut dates = vec![
            RecordDate::Unknown,
            RecordDate::Known(date(2024, 1, 2)),
            RecordDate::Known(date(2024, 1, 1)),
        ];
        dates.sort();
        assert_eq!(
            dates,
            vec![
                RecordDate::Known(date(2024, 1, 1)),
                RecordDate::Known(date(2024, 1, 2)),
                RecordDate::Unknown,
            ]
        );
    }

    #[test]
    fn test_record_date_serializes_as_string() {
        let json = serde_json::to_string(&RecordDate::Known(date(2024, 3, 9))).unwrap();
        assert_eq!(json, "\"2024-03-09\"");
        let json = serde_json::to_string(&RecordDate::Unknown).unwrap();
        assert_eq!(json, "\"unknown\"");
    }

    #[test]
    fn test_record_date_deserializes_from_string() {
        let parsed: RecordDate = serde_json::from_str("\"2024-03-09\"").unwrap();
        assert_eq!(parsed, RecordDate::Known(date(2024, 3, 9)));
        let parsed: RecordDate = serde_json::from_str("\"unknown\"").unwrap();
        assert_eq!(parsed, RecordDate::Unknown);
        assert!(serde_json::from_str::<RecordDate>("\"09/03/2024\"").is_err());
    }

    #[test]
    fn test_from_option_maps_none_to_unknown() {
        assert_eq!(RecordDate::from(None), RecordDate::Unknown);
        assert_eq!(RecordDate::Unknown.date(), None);
        assert_eq!(
            RecordDate::from(Some(date(2024, 1, 1))).date(),
            Some(date(2024, 1, 1))
        );
    }

    #[test]
    fn test_matches_requires_both_grade_and_class() {
        let record = AttendanceRecord::new(date(2024, 1, 1), "G1", "A", "Ali");
        assert!(record.matches("G1", "A"));
        assert!(!record.matches("G1", "B"));
        assert!(!record.matches("G2", "A"));
        assert!(!record.matches("g1", "A"));
    }
}
