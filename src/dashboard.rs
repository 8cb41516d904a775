//! One reload-and-recompute cycle of the dashboard.
//!
//! Every page request and every refresh tick runs a full cycle: load the
//! workbook, resolve the dropdowns against the requested selection,
//! aggregate the resolved selection and build the cards and charts. Nothing
//! is carried over between cycles.

use serde::{Deserialize, Serialize};

use crate::aggregation::{FilterOptions, aggregate, resolve_filter_options};
use crate::config::{DashboardConfig, DisplayConfig};
use crate::models::{AggregationResult, AttendanceTable, FilterSelection};
use crate::presentation::{DashboardCharts, SummaryCard, build_cards, build_charts};
use crate::source::{LoadOutcome, SourceStatus, load_table};

/// Everything the dashboard shows for one cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardView {
    /// How the workbook load went.
    pub source: SourceStatus,
    /// Dropdown choices and the resolved selection.
    pub options: FilterOptions,
    /// Aggregates for the resolved selection.
    pub result: AggregationResult,
    /// The two summary cards.
    pub cards: Vec<SummaryCard>,
    /// The two charts.
    pub charts: DashboardCharts,
}

/// Builds the view for an already-loaded source.
///
/// The requested selection only seeds option resolution; aggregation uses
/// the resolved grade and class, so a stale or partial request still shows
/// data whenever the table has any.
///
/// # Example
///
/// ```
/// use attendance_dashboard::config::DisplayConfig;
/// use attendance_dashboard::dashboard::build_view;
/// use attendance_dashboard::models::FilterSelection;
/// use attendance_dashboard::source::LoadOutcome;
///
/// let outcome = LoadOutcome::NotFound { path: "absences.xlsx".to_string() };
/// let view = build_view(&outcome, &FilterSelection::default(), &DisplayConfig::default());
/// assert_eq!(view.result.total_count, 0);
/// assert!(view.options.grades.is_empty());
/// assert!(view.charts.by_date.placeholder);
/// ```
pub fn build_view(
    outcome: &LoadOutcome,
    requested: &FilterSelection,
    display: &DisplayConfig,
) -> DashboardView {
    let empty = AttendanceTable::empty();
    let table = outcome.table().unwrap_or(&empty);

    let options = resolve_filter_options(table, requested);
    let selection = options.selection();
    let result = aggregate(table, &selection);
    let cards = build_cards(&result, display);
    let charts = build_charts(&result, &selection, display);

    DashboardView {
        source: outcome.status(),
        options,
        result,
        cards,
        charts,
    }
}

/// Runs one full cycle: loads the workbook and builds the view.
pub fn run_cycle(config: &DashboardConfig, requested: &FilterSelection) -> DashboardView {
    let outcome = load_table(&config.source);
    build_view(&outcome, requested, &config.display)
}

/// Loads the workbook and resolves only the dropdown options.
pub fn resolve_options(config: &DashboardConfig, requested: &FilterSelection) -> FilterOptions {
    let table = load_table(&config.source).into_table();
    resolve_filter_options(&table, requested)
}
