//! Cell cleaning for the attendance sheet.
//!
//! Converts raw calamine cells into the trimmed labels and dates the
//! attendance records are made of.

use calamine::{Data, DataType};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::RecordDate;

const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y"];

const DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
];

/// Returns the trimmed text of a header cell.
pub(crate) fn header_label(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}

/// Returns the label held by a grade, class or name cell.
///
/// Integral numbers lose their fractional part, so a class typed as `3`
/// and read back as `3.0` is labelled `"3"`. Empty, blank and error cells
/// have no label.
pub(crate) fn cell_label(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(format_number(*f)),
        other => {
            let text = other.to_string();
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
    }
}

fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Returns the date held by a date cell, or [`RecordDate::Unknown`].
///
/// Native Excel dates and serial numbers are converted by calamine; text is
/// parsed with [`parse_date_text`].
pub(crate) fn cell_date(cell: &Data) -> RecordDate {
    match cell {
        Data::String(s) => parse_date_text(s),
        Data::Empty | Data::Error(_) | Data::Bool(_) => RecordDate::Unknown,
        other => other.as_date().into(),
    }
}

/// Parses a textual date.
///
/// ISO forms are tried first, then day-first forms, each with or without a
/// time part. Anything else is [`RecordDate::Unknown`].
pub(crate) fn parse_date_text(text: &str) -> RecordDate {
    let text = text.trim();
    if text.is_empty() {
        return RecordDate::Unknown;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return RecordDate::Known(date);
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return RecordDate::Known(datetime.date());
        }
    }

    DateTime::parse_from_rfc3339(text)
        .map(|dt| RecordDate::Known(dt.date_naive()))
        .unwrap_or(RecordDate::Unknown)
}
