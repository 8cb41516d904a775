//! Chart models built from an aggregation result.
//!
//! A [`ChartSpec`] is a renderer-independent description of one chart: its
//! kind, titles and data points. [`render_svg`](super::render_svg) draws it.

use serde::{Deserialize, Serialize};

use crate::config::DisplayConfig;
use crate::models::{AggregationResult, FilterSelection};

/// The shape of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// A line with a marker per point.
    Line,
    /// One bar per point.
    Bar,
}

/// One labelled value of a chart series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Category label on the x axis.
    pub label: String,
    /// Value on the y axis.
    pub value: usize,
}

/// A chart ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// The chart shape.
    pub kind: ChartKind,
    /// The chart title.
    pub title: String,
    /// X axis title.
    pub x_label: String,
    /// Y axis title.
    pub y_label: String,
    /// The data points, in display order.
    pub points: Vec<ChartPoint>,
    /// True when there is nothing to plot and the chart is a placeholder.
    pub placeholder: bool,
}

impl ChartSpec {
    fn placeholder(kind: ChartKind, display: &DisplayConfig) -> Self {
        Self {
            kind,
            title: display.no_data.clone(),
            x_label: String::new(),
            y_label: String::new(),
            points: Vec::new(),
            placeholder: true,
        }
    }

    /// Returns the largest value in the series, or zero.
    pub fn max_value(&self) -> usize {
        self.points.iter().map(|p| p.value).max().unwrap_or(0)
    }
}

/// The two charts of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardCharts {
    /// Absences per date, as a line.
    pub by_date: ChartSpec,
    /// Top ten students by absences, as bars.
    pub by_student: ChartSpec,
}

/// Builds both dashboard charts for a result.
pub fn build_charts(
    result: &AggregationResult,
    selection: &FilterSelection,
    display: &DisplayConfig,
) -> DashboardCharts {
    DashboardCharts {
        by_date: absence_by_date_chart(result, selection, display),
        by_student: absence_by_student_chart(result, display),
    }
}

/// Builds the absences-by-date line chart.
///
/// The title names the selected grade and class. An empty result or an
/// incomplete selection yields a placeholder.
pub fn absence_by_date_chart(
    result: &AggregationResult,
    selection: &FilterSelection,
    display: &DisplayConfig,
) -> ChartSpec {
    let Some((grade, class)) = selection.resolved() else {
        return ChartSpec::placeholder(ChartKind::Line, display);
    };
    if result.is_empty() {
        return ChartSpec::placeholder(ChartKind::Line, display);
    }

    ChartSpec {
        kind: ChartKind::Line,
        title: format!("{} - {} / {}", display.by_date_title, grade, class),
        x_label: display.date_axis.clone(),
        y_label: display.count_axis.clone(),
        points: result
            .by_date
            .iter()
            .map(|d| ChartPoint {
                label: d.date.to_string(),
                value: d.count,
            })
            .collect(),
        placeholder: false,
    }
}

/// Builds the top-ten students bar chart.
pub fn absence_by_student_chart(result: &AggregationResult, display: &DisplayConfig) -> ChartSpec {
    if result.is_empty() {
        return ChartSpec::placeholder(ChartKind::Bar, display);
    }

    ChartSpec {
        kind: ChartKind::Bar,
        title: display.by_student_title.clone(),
        x_label: display.student_axis.clone(),
        y_label: display.count_axis.clone(),
        points: result
            .by_student_top10
            .iter()
            .map(|s| ChartPoint {
                label: s.name.clone(),
                value: s.count,
            })
            .collect(),
        placeholder: false,
    }
}
