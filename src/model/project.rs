use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::employee::EmployeeRef;

/// Project lifecycle status. The wire values are the French labels the
/// dataset uses; the variants are what code matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ProjectStatus {
    #[serde(rename = "En planification")]
    Planning,
    #[serde(rename = "En cours")]
    InProgress,
    #[serde(rename = "Terminé")]
    Completed,
    #[serde(rename = "Annulé")]
    Cancelled,
    #[serde(rename = "En pause")]
    OnHold,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planning => "En planification",
            Self::InProgress => "En cours",
            Self::Completed => "Terminé",
            Self::Cancelled => "Annulé",
            Self::OnHold => "En pause",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project record. `team_members` holds employee ids; population resolves
/// them into [`EmployeeRef::Populated`] projections on the way out.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    pub budget: i64,
    pub client_name: String,
    pub team_members: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Completion percentage, 0..=100
    pub progress: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Outbound project shape; identical to [`Project`] except that team members
/// may be populated projections.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    pub budget: i64,
    pub client_name: String,
    pub team_members: Vec<EmployeeRef>,
    pub technologies: Vec<String>,
    pub progress: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Project> for ProjectDto {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            name: project.name,
            description: project.description,
            status: project.status,
            start_date: project.start_date,
            end_date: project.end_date,
            budget: project.budget,
            client_name: project.client_name,
            team_members: project.team_members.into_iter().map(EmployeeRef::Id).collect(),
            technologies: project.technologies,
            progress: project.progress,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

/// Body of `POST /api/company/projects`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    pub description: String,
    /// Defaults to "En planification"
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    pub budget: i64,
    pub client_name: String,
    #[serde(default)]
    pub team_members: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Defaults to 0
    #[serde(default)]
    pub progress: Option<i32>,
}

/// Partial update body for the in-memory backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub budget: Option<i64>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub team_members: Option<Vec<String>>,
    #[serde(default)]
    pub technologies: Option<Vec<String>>,
    #[serde(default)]
    pub progress: Option<i32>,
}

/// Compact project reference attached to single-employee lookups.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectBrief {
    pub id: String,
    pub name: String,
    pub status: ProjectStatus,
    pub budget: i64,
}

impl From<&Project> for ProjectBrief {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            status: project.status,
            budget: project.budget,
        }
    }
}
