//! Presentation layer for the attendance dashboard.
//!
//! This module maps an [`AggregationResult`](crate::models::AggregationResult)
//! to summary cards and chart models, draws charts as SVG, and
//! renders the complete HTML page.

mod cards;
mod charts;
mod page;
mod svg;

pub use cards::{CardTone, SummaryCard, build_cards};
pub use charts::{
    ChartKind, ChartPoint, ChartSpec, DashboardCharts, absence_by_date_chart,
    absence_by_student_chart, build_charts,
};
pub use page::render_page;
pub use svg::render_svg;

/// Escapes HTML special characters.
pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
