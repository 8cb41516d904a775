//! Filtering and aggregation for the attendance dashboard.
//!
//! This module contains the pure logic of the dashboard: resolving the grade
//! and class dropdowns from the loaded table, and reducing the records of the
//! selected class to a total, a most-absent student, a per-date series and a
//! top-ten student ranking.

mod aggregate;
mod filter_options;

pub use aggregate::{TOP_STUDENT_LIMIT, aggregate, count_by_date, rank_students};
pub use filter_options::{FilterOptions, resolve_filter_options};
