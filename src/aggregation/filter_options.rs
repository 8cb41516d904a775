//! Dropdown option resolution.
//!
//! This module computes the grade and class choices offered by the
//! dashboard and the values they default to after a reload.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{AttendanceTable, FilterSelection};

/// The dropdown choices and resolved selection for one cycle.
///
/// `grades` and `classes` are sorted lexically so the default picks are
/// stable across reloads of the same data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Every distinct grade in the table.
    pub grades: Vec<String>,
    /// The resolved grade.
    pub grade: Option<String>,
    /// Every distinct class within the resolved grade.
    pub classes: Vec<String>,
    /// The resolved class.
    pub class: Option<String>,
}

impl FilterOptions {
    /// Returns the resolved grade and class as a selection.
    pub fn selection(&self) -> FilterSelection {
        FilterSelection {
            grade: self.grade.clone(),
            class: self.class.clone(),
        }
    }
}

/// Resolves the dropdown options for a table and the previous selection.
///
/// The previous grade is kept while it is still present in the table;
/// otherwise the first grade in sorted order is chosen. Classes are then
/// limited to that grade and resolved the same way. An empty table resolves
/// to no options and no selection.
///
/// # Example
///
/// ```
/// use attendance_dashboard::aggregation::resolve_filter_options;
/// use attendance_dashboard::models::{AttendanceRecord, AttendanceTable, FilterSelection};
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let table = AttendanceTable::new(vec![
///     AttendanceRecord::new(day, "G2", "B", "Sara"),
///     AttendanceRecord::new(day, "G1", "C", "Ali"),
///     AttendanceRecord::new(day, "G1", "A", "Omar"),
/// ]);
///
/// let options = resolve_filter_options(&table, &FilterSelection::default());
/// assert_eq!(options.grades, vec!["G1", "G2"]);
/// assert_eq!(options.grade.as_deref(), Some("G1"));
/// assert_eq!(options.classes, vec!["A", "C"]);
/// assert_eq!(options.class.as_deref(), Some("A"));
/// ```
pub fn resolve_filter_options(
    table: &AttendanceTable,
    previous: &FilterSelection,
) -> FilterOptions {
    let grades: Vec<String> = table
        .records()
        .iter()
        .map(|r| r.grade.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect();

    let grade = keep_or_first(&grades, previous.grade.as_deref());

    let classes: Vec<String> = match &grade {
        Some(grade) => table
            .records()
            .iter()
            .filter(|r| &r.grade == grade)
            .map(|r| r.class.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    };

    let class = keep_or_first(&classes, previous.class.as_deref());

    FilterOptions {
        grades,
        grade,
        classes,
        class,
    }
}

fn keep_or_first(choices: &[String], previous: Option<&str>) -> Option<String> {
    previous
        .and_then(|p| choices.iter().find(|c| c.as_str() == p))
        .or_else(|| choices.first())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceRecord;
    use chrono::NaiveDate;

    fn table() -> AttendanceTable {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        AttendanceTable::new(vec![
            AttendanceRecord::new(day, "الصف الثاني", "ب", "سارة"),
            AttendanceRecord::new(day, "الصف الأول", "ج", "علي"),
            AttendanceRecord::new(day, "الصف الأول", "أ", "عمر"),
            AttendanceRecord::new(day, "الصف الأول", "ج", "خالد"),
            AttendanceRecord::new(day, "الصف الثاني", "أ", "منى"),
        ])
    }

    fn previous(grade: Option<&str>, class: Option<&str>) -> FilterSelection {
        FilterSelection {
            grade: grade.map(str::to_string),
            class: class.map(str::to_string),
        }
    }

    #[test]
    fn test_empty_table_has_no_options() {
        let options = resolve_filter_options(
            &AttendanceTable::empty(),
            &previous(Some("G1"), Some("A")),
        );
        assert_eq!(options, FilterOptions::default());
    }

    #[test]
    fn test_grades_are_distinct_and_sorted() {
        let options = resolve_filter_options(&table(), &FilterSelection::default());
        assert_eq!(options.grades, vec!["الصف الأول", "الصف الثاني"]);
    }

    #[test]
    fn test_defaults_to_first_grade_and_class() {
        let options = resolve_filter_options(&table(), &FilterSelection::default());
        assert_eq!(options.grade.as_deref(), Some("الصف الأول"));
        assert_eq!(options.classes, vec!["أ", "ج"]);
        assert_eq!(options.class.as_deref(), Some("أ"));
    }

    #[test]
    fn test_keeps_previous_grade_when_present() {
        let options = resolve_filter_options(&table(), &previous(Some("الصف الثاني"), None));
        assert_eq!(options.grade.as_deref(), Some("الصف الثاني"));
        assert_eq!(options.classes, vec!["أ", "ب"]);
        assert_eq!(options.class.as_deref(), Some("أ"));
    }

    #[test]
    fn test_vanished_grade_falls_back_to_first() {
        let options = resolve_filter_options(&table(), &previous(Some("الصف الثالث"), Some("ب")));
        assert_eq!(options.grade.as_deref(), Some("الصف الأول"));
        assert_eq!(options.class.as_deref(), Some("أ"));
    }

    #[test]
    fn test_keeps_previous_class_within_grade() {
        let options = resolve_filter_options(&table(), &previous(Some("الصف الأول"), Some("ج")));
        assert_eq!(options.class.as_deref(), Some("ج"));
    }

    #[test]
    fn test_class_from_another_grade_is_not_kept() {
        let options = resolve_filter_options(&table(), &previous(Some("الصف الأول"), Some("ب")));
        assert_eq!(options.class.as_deref(), Some("أ"));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let first = resolve_filter_options(&table(), &FilterSelection::default());
        let second = resolve_filter_options(&table(), &FilterSelection::default());
        assert_eq!(first, second);
        assert_eq!(first.selection(), previous(Some("الصف الأول"), Some("أ")));
    }
}
