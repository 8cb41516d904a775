//! Core data models for the attendance dashboard.
//!
//! This module contains the domain models shared by the loader, the
//! aggregator and the presentation layer.

mod aggregation_result;
mod record;
mod selection;
mod table;

pub use aggregation_result::{AggregationResult, DateCount, StudentCount};
pub use record::{AttendanceRecord, RecordDate, UNKNOWN_DATE_LABEL};
pub use selection::FilterSelection;
pub use table::AttendanceTable;
