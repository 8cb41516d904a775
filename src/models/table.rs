//! Attendance table model.

use super::AttendanceRecord;

/// The records read from the workbook in one refresh cycle, in sheet order.
///
/// A table is built once per cycle and never mutated afterwards. An empty
/// table is the uniform signal for "no data", whatever the reason.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceTable {
    records: Vec<AttendanceRecord>,
}

impl AttendanceTable {
    /// Creates a table from records in sheet order.
    pub fn new(records: Vec<AttendanceRecord>) -> Self {
        Self { records }
    }

    /// Creates an empty table.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the records in sheet order.
    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the records matching a grade and class.
    pub fn matching<'a>(
        &'a self,
        grade: &'a str,
        class: &'a str,
    ) -> impl Iterator<Item = &'a AttendanceRecord> + 'a {
        self.records.iter().filter(move |r| r.matches(grade, class))
    }
}

impl FromIterator<AttendanceRecord> for AttendanceTable {
    fn from_iter<I: IntoIterator<Item = AttendanceRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
