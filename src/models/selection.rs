//! Filter selection model.

use serde::{Deserialize, Serialize};

/// The grade and class chosen in the dashboard dropdowns.
///
/// Both parts are optional. A class only has meaning together with its
/// grade: class labels are scoped to the grade, not globally unique.
///
/// # Example
///
/// ```
/// use attendance_dashboard::models::FilterSelection;
///
/// let selection = FilterSelection::new("G1", "A");
/// assert_eq!(selection.resolved(), Some(("G1", "A")));
/// assert_eq!(FilterSelection::default().resolved(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterSelection {
    /// The selected grade.
    #[serde(default)]
    pub grade: Option<String>,
    /// The selected class within the grade.
    #[serde(default)]
    pub class: Option<String>,
}

impl FilterSelection {
    /// Creates a selection with both grade and class set.
    pub fn new(grade: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            grade: Some(grade.into()),
            class: Some(class.into()),
        }
    }

    /// Returns `(grade, class)` when both are selected.
    pub fn resolved(&self) -> Option<(&str, &str)> {
        match (&self.grade, &self.class) {
            (Some(grade), Some(class)) => Some((grade.as_str(), class.as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_requires_both_parts() {
        let grade_only = FilterSelection {
            grade: Some("G1".to_string()),
            class: None,
        };
        assert_eq!(grade_only.resolved(), None);

        let class_only = FilterSelection {
            grade: None,
            class: Some("A".to_string()),
        };
        assert_eq!(class_only.resolved(), None);
    }

    #[test]
    fn test_missing_fields_deserialize_to_none() {
        let selection: FilterSelection = serde_json::from_str("{}").unwrap();
        assert_eq!(selection, FilterSelection::default());
    }
}
