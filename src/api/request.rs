//! Query parameters accepted by the dashboard endpoints.

use serde::{Deserialize, Serialize};

use crate::models::FilterSelection;

/// Query string of `GET /`, `GET /api/dashboard` and `GET /api/options`.
///
/// Both parameters are optional; an empty value counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardQuery {
    /// Requested grade.
    #[serde(default)]
    pub grade: Option<String>,
    /// Requested class within the grade.
    #[serde(default)]
    pub class: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<DashboardQuery> for FilterSelection {
    fn from(query: DashboardQuery) -> Self {
        FilterSelection {
            grade: non_empty(query.grade),
            class: non_empty(query.class),
        }
    }
}
