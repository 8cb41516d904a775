//! End-to-end tests for the attendance dashboard.
//!
//! Each test writes a real workbook into a temporary directory and drives
//! the loader, the aggregator and the HTTP router against it.

use std::path::{Path, PathBuf};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use attendance_dashboard::aggregation::aggregate;
use attendance_dashboard::api::{AppState, create_router};
use attendance_dashboard::config::{ConfigLoader, DashboardConfig};
use attendance_dashboard::dashboard::{DashboardView, run_cycle};
use attendance_dashboard::models::{
    AggregationResult, DateCount, FilterSelection, RecordDate, StudentCount,
};
use attendance_dashboard::source::{LoadOutcome, SourceState, load_table, read_table};

// =============================================================================
// Test Helpers
// =============================================================================

const SHEET: &str = "البيانات_الخام";
const HEADERS: [&str; 4] = ["التاريخ", "الصف", "الفصل", "الاسم"];

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// One sheet row; `None` leaves the cell blank.
type Row<'a> = [Option<&'a str>; 4];

fn write_sheet(path: &Path, sheet: &str, rows: &[Row]) {
    let mut worksheet = Worksheet::new();
    worksheet.set_name(sheet).unwrap();

    for (c, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(0, c as u16, *header).unwrap();
    }
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            if let Some(value) = cell {
                worksheet
                    .write_string(r as u32 + 1, c as u16, *value)
                    .unwrap();
            }
        }
    }

    let mut workbook = Workbook::new();
    workbook.push_worksheet(worksheet);
    workbook.save(path).unwrap();
}

/// The three-row table used across the aggregation scenarios.
fn scenario_rows() -> Vec<Row<'static>> {
    vec![
        [Some("2024-01-01"), Some("G1"), Some("A"), Some("Ali")],
        [Some("2024-01-01"), Some("G1"), Some("A"), Some("Ali")],
        [Some("2024-01-02"), Some("G1"), Some("A"), Some("Omar")],
    ]
}

fn config_for(path: PathBuf) -> DashboardConfig {
    let mut config = DashboardConfig::default();
    config.source.path = path;
    config
}

fn scenario_config(dir: &TempDir) -> DashboardConfig {
    let path = dir.path().join("الغياب اليومي.xlsx");
    write_sheet(&path, SHEET, &scenario_rows());
    config_for(path)
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

// =============================================================================
// Aggregation scenarios against a real workbook
// =============================================================================

#[test]
fn test_scenario_selected_class_totals() {
    let dir = TempDir::new().unwrap();
    let config = scenario_config(&dir);
    let table = read_table(&config.source).unwrap();

    let result = aggregate(&table, &FilterSelection::new("G1", "A"));

    assert_eq!(result.total_count, 3);
    assert_eq!(result.top_student, Some(StudentCount::new("Ali", 2)));
    assert_eq!(
        result.by_date,
        vec![
            DateCount::new(day(2024, 1, 1), 2),
            DateCount::new(day(2024, 1, 2), 1),
        ]
    );
    assert_eq!(
        result.by_student_top10,
        vec![StudentCount::new("Ali", 2), StudentCount::new("Omar", 1)]
    );
}

#[test]
fn test_scenario_unmatched_class_is_empty() {
    let dir = TempDir::new().unwrap();
    let config = scenario_config(&dir);
    let table = read_table(&config.source).unwrap();

    let result = aggregate(&table, &FilterSelection::new("G1", "B"));
    assert_eq!(result, AggregationResult::empty());
}

#[test]
fn test_scenario_empty_sheet_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.xlsx");
    write_sheet(&path, SHEET, &[]);

    let outcome = load_table(&config_for(path).source);
    assert!(outcome.is_loaded());

    let table = outcome.into_table();
    assert!(table.is_empty());
    assert_eq!(
        aggregate(&table, &FilterSelection::new("G1", "A")),
        AggregationResult::empty()
    );
}

// =============================================================================
// Loader behaviour
// =============================================================================

#[test]
fn test_messy_cells_are_cleaned() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("messy.xlsx");
    write_sheet(
        &path,
        SHEET,
        &[
            [Some("2024-01-03"), Some(" G1 "), Some("A "), Some(" Ali")],
            [Some("not a date"), Some("G1"), Some("A"), Some("Omar")],
            [Some("2024-01-03"), Some("G1"), Some("A"), None],
            [None, None, None, None],
        ],
    );

    let table = read_table(&config_for(path).source).unwrap();
    assert_eq!(table.len(), 2);

    let result = aggregate(&table, &FilterSelection::new("G1", "A"));
    assert_eq!(result.total_count, 2);
    assert_eq!(
        result.by_date,
        vec![
            DateCount::new(day(2024, 1, 3), 1),
            DateCount::new(RecordDate::Unknown, 1),
        ]
    );
}

#[test]
fn test_native_excel_dates_are_read() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("native.xlsx");

    let mut worksheet = Worksheet::new();
    worksheet.set_name(SHEET).unwrap();
    for (c, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(0, c as u16, *header).unwrap();
    }
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    worksheet
        .write_number_with_format(1, 0, 45292.0, &date_format)
        .unwrap();
    worksheet.write_string(1, 1, "G1").unwrap();
    worksheet.write_number(1, 2, 3.0).unwrap();
    worksheet.write_string(1, 3, "Ali").unwrap();
    let mut workbook = Workbook::new();
    workbook.push_worksheet(worksheet);
    workbook.save(&path).unwrap();

    let table = read_table(&config_for(path).source).unwrap();
    let record = &table.records()[0];
    assert_eq!(record.date, RecordDate::Known(day(2024, 1, 1)));
    assert_eq!(record.class, "3");
}

#[test]
fn test_missing_workbook_is_not_found() {
    let dir = TempDir::new().unwrap();
    let outcome = load_table(&config_for(dir.path().join("absent.xlsx")).source);
    assert!(matches!(outcome, LoadOutcome::NotFound { .. }));
}

#[test]
fn test_wrong_sheet_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("other.xlsx");
    write_sheet(&path, "Sheet1", &scenario_rows());

    let view = run_cycle(&config_for(path), &FilterSelection::new("G1", "A"));
    assert_eq!(view.source.state, SourceState::ParseError);
    assert!(view.source.detail.unwrap().contains(SHEET));
    assert_eq!(view.result, AggregationResult::empty());
}

#[test]
fn test_macro_enabled_workbook_is_read() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absences.xlsm");
    write_sheet(&path, SHEET, &scenario_rows());

    let table = read_table(&config_for(path).source).unwrap();
    assert_eq!(table.len(), 3);
}

#[test]
fn test_sample_config_reads_defaults() {
    let loader = ConfigLoader::load("./config/dashboard.yaml").unwrap();
    assert_eq!(loader.config().source.sheet, SHEET);
    assert_eq!(loader.config().refresh.interval_secs, 60);
}

// =============================================================================
// HTTP surface
// =============================================================================

#[tokio::test]
async fn test_dashboard_endpoint_serves_scenario() {
    let dir = TempDir::new().unwrap();
    let router = create_router(AppState::from(scenario_config(&dir)));

    let (status, body) = get_json(router, "/api/dashboard?grade=G1&class=A").await;
    assert_eq!(status, StatusCode::OK);

    let view: DashboardView = serde_json::from_value(body.clone()).unwrap();
    assert_eq!(view.result.total_count, 3);
    assert_eq!(body["result"]["by_date"][0]["date"], "2024-01-01");
    assert_eq!(body["source"]["state"], "loaded");
    assert_eq!(body["cards"][1]["value"], "Ali (2)");
}

#[tokio::test]
async fn test_stale_class_falls_back_to_first_class() {
    let dir = TempDir::new().unwrap();
    let router = create_router(AppState::from(scenario_config(&dir)));

    let (status, body) = get_json(router, "/api/dashboard?grade=G1&class=B").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["options"]["class"], "A");
    assert_eq!(body["result"]["total_count"], 3);
}

#[tokio::test]
async fn test_missing_workbook_serves_empty_view() {
    let dir = TempDir::new().unwrap();
    let router = create_router(AppState::from(config_for(dir.path().join("absent.xlsx"))));

    let (status, body) = get_json(router, "/api/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"]["state"], "not_found");
    assert_eq!(body["result"]["total_count"], 0);
    assert_eq!(body["cards"][1]["value"], "لا يوجد");
    assert_eq!(body["charts"]["by_date"]["placeholder"], true);
}

#[tokio::test]
async fn test_workbook_changes_are_picked_up() {
    let dir = TempDir::new().unwrap();
    let config = scenario_config(&dir);
    let path = config.source.path.clone();
    let state = AppState::from(config);

    let (_, before) = get_json(create_router(state.clone()), "/api/dashboard").await;
    assert_eq!(before["result"]["total_count"], 3);

    let mut rows = scenario_rows();
    rows.push([Some("2024-01-03"), Some("G1"), Some("A"), Some("Omar")]);
    write_sheet(&path, SHEET, &rows);

    let (_, after) = get_json(create_router(state), "/api/dashboard").await;
    assert_eq!(after["result"]["total_count"], 4);
}
