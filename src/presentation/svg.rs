//! SVG rendering of charts.
//!
//! Draws each [`ChartSpec`] with `plotters` into an in-memory SVG document
//! that the page embeds inline. Categories sit on a segmented x axis, one
//! segment per point.

use std::error::Error;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::{DashboardError, DashboardResult};

use super::charts::{ChartKind, ChartSpec};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 380;

/// Lightest and darkest colours of the bar intensity scale.
const REDS_LOW: RGBColor = RGBColor(254, 224, 210);
const REDS_HIGH: RGBColor = RGBColor(165, 15, 21);

const LINE_COLOUR: RGBColor = RGBColor(44, 123, 229);
const GRID_COLOUR: RGBColor = RGBColor(229, 229, 229);

type ChartArea<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// Renders a chart as an inline SVG element.
///
/// Placeholders render only the title.
///
/// # Example
///
/// ```
/// use attendance_dashboard::config::DisplayConfig;
/// use attendance_dashboard::models::AggregationResult;
/// use attendance_dashboard::presentation::{absence_by_student_chart, render_svg};
///
/// let chart = absence_by_student_chart(&AggregationResult::empty(), &DisplayConfig::default());
/// let svg = render_svg(&chart).unwrap();
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains("لا توجد بيانات"));
/// ```
pub fn render_svg(chart: &ChartSpec) -> DashboardResult<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (WIDTH, HEIGHT)).into_drawing_area();

        let drawn = if chart.placeholder || chart.points.is_empty() {
            draw_placeholder(&root, chart)
        } else {
            match chart.kind {
                ChartKind::Line => draw_line(&root, chart),
                ChartKind::Bar => draw_bars(&root, chart),
            }
        };
        drawn
            .and_then(|()| root.present().map_err(Into::into))
            .map_err(|e| DashboardError::ChartRender {
                title: chart.title.clone(),
                message: e.to_string(),
            })?;
    }
    Ok(svg)
}

/// Interpolates the bar colour for `value` on a 0..=`max` scale.
fn reds(value: usize, max: usize) -> RGBColor {
    let t = if max == 0 {
        0.0
    } else {
        value as f64 / max as f64
    };
    let channel = |low: u8, high: u8| (low as f64 + (high as f64 - low as f64) * t).round() as u8;
    RGBColor(
        channel(REDS_LOW.0, REDS_HIGH.0),
        channel(REDS_LOW.1, REDS_HIGH.1),
        channel(REDS_LOW.2, REDS_HIGH.2),
    )
}

/// Top of the y axis, leaving headroom above the tallest point.
fn y_top(chart: &ChartSpec) -> u32 {
    let max = chart.max_value() as u32;
    max + (max / 10).max(1)
}

/// Last category index on the x axis. A lone point still gets a
/// two-segment axis so its segment has a non-zero width.
fn last_segment(chart: &ChartSpec) -> u32 {
    (chart.points.len() as u32).saturating_sub(1).max(1)
}

fn segment_label(labels: &[&str], value: &SegmentValue<u32>) -> String {
    match value {
        SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => labels
            .get(*i as usize)
            .map(|label| label.to_string())
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    }
}

fn draw_placeholder(root: &ChartArea<'_>, chart: &ChartSpec) -> Result<(), Box<dyn Error>> {
    root.titled(&chart.title, ("sans-serif", 20).into_font())?;
    Ok(())
}

fn draw_line(root: &ChartArea<'_>, chart: &ChartSpec) -> Result<(), Box<dyn Error>> {
    let last = last_segment(chart);
    let labels: Vec<&str> = chart.points.iter().map(|p| p.label.as_str()).collect();

    let mut plot = ChartBuilder::on(root)
        .caption(&chart.title, ("sans-serif", 20).into_font())
        .margin(12)
        .x_label_area_size(56)
        .y_label_area_size(48)
        .build_cartesian_2d((0..last).into_segmented(), 0..y_top(chart))?;

    plot.configure_mesh()
        .disable_x_mesh()
        .light_line_style(&GRID_COLOUR)
        .x_labels(labels.len())
        .x_label_formatter(&|v| segment_label(&labels, v))
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .draw()?;

    let coords: Vec<(SegmentValue<u32>, u32)> = chart
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| (SegmentValue::CenterOf(i as u32), p.value as u32))
        .collect();

    plot.draw_series(LineSeries::new(
        coords.iter().cloned(),
        LINE_COLOUR.stroke_width(2),
    ))?;
    plot.draw_series(
        coords
            .iter()
            .map(|coord| Circle::new(coord.clone(), 4, LINE_COLOUR.filled())),
    )?;

    Ok(())
}

fn draw_bars(root: &ChartArea<'_>, chart: &ChartSpec) -> Result<(), Box<dyn Error>> {
    let last = last_segment(chart);
    let max = chart.max_value();
    let labels: Vec<&str> = chart.points.iter().map(|p| p.label.as_str()).collect();

    let mut plot = ChartBuilder::on(root)
        .caption(&chart.title, ("sans-serif", 20).into_font())
        .margin(12)
        .x_label_area_size(56)
        .y_label_area_size(48)
        .build_cartesian_2d((0..last).into_segmented(), 0..y_top(chart))?;

    plot.configure_mesh()
        .disable_x_mesh()
        .light_line_style(&GRID_COLOUR)
        .x_labels(labels.len())
        .x_label_formatter(&|v| segment_label(&labels, v))
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .draw()?;

    plot.draw_series(chart.points.iter().enumerate().map(|(i, p)| {
        let i = i as u32;
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0),
                (SegmentValue::Exact(i + 1), p.value as u32),
            ],
            reds(p.value, max).filled(),
        );
        bar.set_margin(0, 0, 6, 6);
        bar
    }))?;

    let value_style =
        TextStyle::from(("sans-serif", 12).into_font()).pos(Pos::new(HPos::Center, VPos::Bottom));
    plot.draw_series(chart.points.iter().enumerate().map(|(i, p)| {
        Text::new(
            p.value.to_string(),
            (SegmentValue::CenterOf(i as u32), p.value as u32),
            value_style.clone(),
        )
    }))?;

    Ok(())
}
