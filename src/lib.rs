//! Student attendance dashboard.
//!
//! This crate reads a daily absence workbook, lets the viewer pick a grade
//! and class, and serves absence totals, the most-absent student and two
//! charts as an auto-refreshing web page.

#![warn(missing_docs)]

pub mod aggregation;
pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod presentation;
pub mod refresh;
pub mod source;
