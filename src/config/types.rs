//! Configuration types for the attendance dashboard.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field carries a
//! serde default matching the stock Arabic-language dashboard, so a partial
//! file only needs to name what it overrides.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration for the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Where the attendance workbook lives and how to read it.
    #[serde(default)]
    pub source: SourceConfig,
    /// Automatic refresh settings.
    #[serde(default)]
    pub refresh: RefreshConfig,
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Labels and layout direction for the rendered page.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Location and layout of the attendance workbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Path to the xlsx workbook.
    #[serde(default = "default_source_path")]
    pub path: PathBuf,
    /// Name of the worksheet holding the raw records.
    #[serde(default = "default_sheet")]
    pub sheet: String,
    /// Header labels of the required columns.
    #[serde(default)]
    pub columns: ColumnLabels,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: default_source_path(),
            sheet: default_sheet(),
            columns: ColumnLabels::default(),
        }
    }
}

fn default_source_path() -> PathBuf {
    PathBuf::from("الغياب اليومي.xlsx")
}

fn default_sheet() -> String {
    "البيانات_الخام".to_string()
}

/// Header labels used to locate the four required columns.
///
/// Labels are compared after trimming surrounding whitespace from the
/// header cells, so they must otherwise match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLabels {
    /// The absence date column.
    #[serde(default = "default_date_column")]
    pub date: String,
    /// The grade column.
    #[serde(default = "default_grade_column")]
    pub grade: String,
    /// The class column.
    #[serde(default = "default_class_column")]
    pub class: String,
    /// The student name column.
    #[serde(default = "default_student_name_column")]
    pub student_name: String,
}

impl Default for ColumnLabels {
    fn default() -> Self {
        Self {
            date: default_date_column(),
            grade: default_grade_column(),
            class: default_class_column(),
            student_name: default_student_name_column(),
        }
    }
}

fn default_date_column() -> String {
    "التاريخ".to_string()
}

fn default_grade_column() -> String {
    "الصف".to_string()
}

fn default_class_column() -> String {
    "الفصل".to_string()
}

fn default_student_name_column() -> String {
    "الاسم".to_string()
}

/// Automatic refresh settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshConfig {
    /// Seconds between automatic reloads. Must be positive.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

fn default_interval_secs() -> u64 {
    60
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. `127.0.0.1:8050`.
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8050".to_string()
}

/// Text direction of the rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextDirection {
    /// Right to left.
    #[default]
    Rtl,
    /// Left to right.
    Ltr,
}

impl TextDirection {
    /// Returns the value used for the HTML `dir` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            TextDirection::Rtl => "rtl",
            TextDirection::Ltr => "ltr",
        }
    }
}

/// User-facing labels for the page, cards and charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Page heading and document title.
    #[serde(default = "default_title")]
    pub title: String,
    /// Text direction of the page.
    #[serde(default)]
    pub direction: TextDirection,
    /// Label of the grade dropdown.
    #[serde(default = "default_grade_label")]
    pub grade_label: String,
    /// Label of the class dropdown.
    #[serde(default = "default_class_label")]
    pub class_label: String,
    /// Header of the total absences card.
    #[serde(default = "default_total_card")]
    pub total_card: String,
    /// Header of the most-absent student card.
    #[serde(default = "default_top_card")]
    pub top_card: String,
    /// Card text when no student has any absence.
    #[serde(default = "default_none_text")]
    pub none_text: String,
    /// Title prefix of the absences-by-date chart.
    #[serde(default = "default_by_date_title")]
    pub by_date_title: String,
    /// Title of the absences-by-student chart.
    #[serde(default = "default_by_student_title")]
    pub by_student_title: String,
    /// X axis label of the date chart.
    #[serde(default = "default_date_axis")]
    pub date_axis: String,
    /// X axis label of the student chart.
    #[serde(default = "default_student_axis")]
    pub student_axis: String,
    /// Y axis label of both charts.
    #[serde(default = "default_count_axis")]
    pub count_axis: String,
    /// Placeholder title for charts with nothing to plot.
    #[serde(default = "default_no_data")]
    pub no_data: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            direction: TextDirection::default(),
            grade_label: default_grade_label(),
            class_label: default_class_label(),
            total_card: default_total_card(),
            top_card: default_top_card(),
            none_text: default_none_text(),
            by_date_title: default_by_date_title(),
            by_student_title: default_by_student_title(),
            date_axis: default_date_axis(),
            student_axis: default_student_axis(),
            count_axis: default_count_axis(),
            no_data: default_no_data(),
        }
    }
}

fn default_title() -> String {
    "لوحة متابعة الغياب اليومية".to_string()
}

fn default_grade_label() -> String {
    "اختر الصف:".to_string()
}

fn default_class_label() -> String {
    "اختر الفصل:".to_string()
}

fn default_total_card() -> String {
    "إجمالي الغياب".to_string()
}

fn default_top_card() -> String {
    "الأكثر غياباً".to_string()
}

fn default_none_text() -> String {
    "لا يوجد".to_string()
}

fn default_by_date_title() -> String {
    "اتجاه الغياب اليومي".to_string()
}

fn default_by_student_title() -> String {
    "أكثر الطلاب غياباً (أعلى 10)".to_string()
}

fn default_date_axis() -> String {
    "التاريخ".to_string()
}

fn default_student_axis() -> String {
    "اسم الطالب".to_string()
}

fn default_count_axis() -> String {
    "العدد".to_string()
}

fn default_no_data() -> String {
    "لا توجد بيانات".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_yields_defaults() {
        let config: DashboardConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.refresh.interval_secs, 60);
        assert_eq!(config.source.sheet, "البيانات_الخام");
        assert_eq!(config.display.direction, TextDirection::Rtl);
    }

    #[test]
    fn test_partial_columns_keep_other_defaults() {
        let yaml = "source:\n  columns:\n    student_name: Name\n";
        let config: DashboardConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.source.columns.student_name, "Name");
        assert_eq!(config.source.columns.grade, "الصف");
    }

    #[test]
    fn test_direction_deserializes_snake_case() {
        let display: DisplayConfig = serde_yaml::from_str("direction: ltr").unwrap();
        assert_eq!(display.direction, TextDirection::Ltr);
        assert_eq!(display.direction.as_attr(), "ltr");
    }
}
