//! Absence aggregation for one grade/class selection.
//!
//! This module filters the attendance table to a selection and computes the
//! total, the most-absent student, the per-date series and the top-ten
//! student ranking.

use std::collections::{BTreeMap, HashMap};

use crate::models::{
    AggregationResult, AttendanceRecord, AttendanceTable, DateCount, FilterSelection,
    RecordDate, StudentCount,
};

/// Maximum number of students in the ranking series.
pub const TOP_STUDENT_LIMIT: usize = 10;

/// Aggregates the absences of one grade/class selection.
///
/// Returns [`AggregationResult::empty`] when the selection is incomplete, the
/// table is empty, or no record matches. The function is pure: the same
/// table and selection always give the same result.
///
/// Students with equal counts keep the order in which they first appear in
/// the table, both for `top_student` and in `by_student_top10`.
///
/// # Example
///
/// ```
/// use attendance_dashboard::aggregation::aggregate;
/// use attendance_dashboard::models::{
///     AttendanceRecord, AttendanceTable, DateCount, FilterSelection, StudentCount,
/// };
/// use chrono::NaiveDate;
///
/// let jan1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let jan2 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
/// let table = AttendanceTable::new(vec![
///     AttendanceRecord::new(jan1, "G1", "A", "Ali"),
///     AttendanceRecord::new(jan1, "G1", "A", "Ali"),
///     AttendanceRecord::new(jan2, "G1", "A", "Omar"),
/// ]);
///
/// let result = aggregate(&table, &FilterSelection::new("G1", "A"));
/// assert_eq!(result.total_count, 3);
/// assert_eq!(result.top_student, Some(StudentCount::new("Ali", 2)));
/// assert_eq!(result.by_date, vec![DateCount::new(jan1, 2), DateCount::new(jan2, 1)]);
/// assert_eq!(
///     result.by_student_top10,
///     vec![StudentCount::new("Ali", 2), StudentCount::new("Omar", 1)]
/// );
/// ```
pub fn aggregate(table: &AttendanceTable, selection: &FilterSelection) -> AggregationResult {
    let Some((grade, class)) = selection.resolved() else {
        return AggregationResult::empty();
    };
    if table.is_empty() {
        return AggregationResult::empty();
    }

    let matching: Vec<&AttendanceRecord> = table.matching(grade, class).collect();
    if matching.is_empty() {
        return AggregationResult::empty();
    }

    let mut ranking = rank_students(matching.iter().copied());
    ranking.truncate(TOP_STUDENT_LIMIT);

    AggregationResult {
        total_count: matching.len(),
        top_student: ranking.first().cloned(),
        by_date: count_by_date(matching.iter().copied()),
        by_student_top10: ranking,
    }
}

/// Counts records per student, most absences first.
///
/// Ties keep first-seen order: the sort is stable over a tally built in
/// encounter order, which is the same as sorting by
/// `(-count, first_seen_index)`.
pub fn rank_students<'a, I>(records: I) -> Vec<StudentCount>
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut tally: Vec<StudentCount> = Vec::new();

    for record in records {
        let name = record.student_name.as_str();
        let slot = *index.entry(name).or_insert_with(|| {
            tally.push(StudentCount::new(name, 0));
            tally.len() - 1
        });
        tally[slot].count += 1;
    }

    tally.sort_by(|a, b| b.count.cmp(&a.count));
    tally
}

/// Counts records per date in ascending date order.
///
/// Unknown dates form a single bucket after every known date.
pub fn count_by_date<'a, I>(records: I) -> Vec<DateCount>
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    let mut counts: BTreeMap<RecordDate, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.date).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(date, count)| DateCount { date, count })
        .collect()
}
