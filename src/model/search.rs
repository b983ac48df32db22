use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{department::DepartmentDto, employee::Employee, project::ProjectDto};

/// Cross-entity search result map.
///
/// Each entity list is present only when the requested scope covered that
/// type; `total_results` always counts across the lists that ran.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employees: Option<Vec<Employee>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<ProjectDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departments: Option<Vec<DepartmentDto>>,
    pub total_results: u64,
}

impl SearchResults {
    pub fn empty() -> Self {
        Self {
            employees: None,
            projects: None,
            departments: None,
            total_results: 0,
        }
    }

    /// Recomputes `total_results` from whichever lists are present.
    pub fn finalize(mut self) -> Self {
        self.total_results = self.employees.as_ref().map_or(0, |e| e.len() as u64)
            + self.projects.as_ref().map_or(0, |p| p.len() as u64)
            + self.departments.as_ref().map_or(0, |d| d.len() as u64);
        self
    }
}
