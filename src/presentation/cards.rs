//! Summary cards.

use serde::{Deserialize, Serialize};

use crate::config::DisplayConfig;
use crate::models::AggregationResult;

/// Colour accent of a summary card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardTone {
    /// Red accent, used for the absence total.
    Danger,
    /// Blue accent, used for the most-absent student.
    Primary,
}

impl CardTone {
    /// Returns the CSS class suffix for the tone.
    pub fn css_class(self) -> &'static str {
        match self {
            CardTone::Danger => "danger",
            CardTone::Primary => "primary",
        }
    }
}

/// A headline metric shown above the charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCard {
    /// Card header.
    pub title: String,
    /// Card body text.
    pub value: String,
    /// Colour accent.
    pub tone: CardTone,
}

/// Builds the total-absences and most-absent-student cards.
///
/// Both cards are always present; an empty result shows `0` and the
/// configured "none" text.
///
/// # Example
///
/// ```
/// use attendance_dashboard::config::DisplayConfig;
/// use attendance_dashboard::models::AggregationResult;
/// use attendance_dashboard::presentation::build_cards;
///
/// let cards = build_cards(&AggregationResult::empty(), &DisplayConfig::default());
/// assert_eq!(cards.len(), 2);
/// assert_eq!(cards[0].value, "0");
/// assert_eq!(cards[1].value, "لا يوجد");
/// ```
pub fn build_cards(result: &AggregationResult, display: &DisplayConfig) -> Vec<SummaryCard> {
    let top_text = result
        .top_student
        .as_ref()
        .map_or_else(|| display.none_text.clone(), ToString::to_string);

    vec![
        SummaryCard {
            title: display.total_card.clone(),
            value: result.total_count.to_string(),
            tone: CardTone::Danger,
        },
        SummaryCard {
            title: display.top_card.clone(),
            value: top_text,
            tone: CardTone::Primary,
        },
    ]
}
