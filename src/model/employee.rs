use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::project::ProjectBrief;

/// Employee record as stored and as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    /// Department name; matched informally against known departments
    pub department: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub hire_date: DateTime<Utc>,
    pub salary: i64,
    #[serde(default)]
    pub skills: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/company/employees`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub department: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Defaults to the creation instant when omitted
    #[serde(default)]
    pub hire_date: Option<DateTime<Utc>>,
    pub salary: i64,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Defaults to true
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Partial update body; only set members are merged into the record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub hire_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub salary: Option<i64>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Whitelisted projection embedded when a reference field is populated.
///
/// Deliberately narrow so population can never recurse into referencing
/// entities.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSummary {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub email: String,
}

impl From<&Employee> for EmployeeSummary {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.clone(),
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            position: employee.position.clone(),
            email: employee.email.clone(),
        }
    }
}

/// A reference to an employee: either the raw stored id, or the populated
/// projection after the join step resolved it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum EmployeeRef {
    Populated(EmployeeSummary),
    Id(String),
}

/// Single-employee lookup result: the record plus the projects that
/// reference it.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetail {
    #[serde(flatten)]
    pub employee: Employee,
    pub projects: Vec<ProjectBrief>,
}
