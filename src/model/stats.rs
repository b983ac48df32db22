use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::financial::Financial;

/// Company-wide statistics payload served by `GET /api/company/stats`.
///
/// Both backends produce this same shape: the in-memory store by folding
/// over its arrays, the document store through aggregation pipelines.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyStats {
    pub employees: EmployeeStats,
    pub projects: ProjectOverview,
    pub skills: SkillStats,
    /// Most recent financial record, when one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial: Option<Financial>,
    pub company: CompanyAggregates,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeStats {
    /// Active employees
    pub total: u64,
    pub inactive: u64,
    /// Empty object when there are no active employees
    pub salary: SalaryStats,
    /// Sorted by count, descending
    pub by_department: Vec<DepartmentBreakdown>,
}

/// Salary aggregates over active employees. All members are unset on an
/// empty base set, serializing as `{}` rather than failing on a division
/// by zero.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalaryStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_salary: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_salary: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_salaries: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentBreakdown {
    pub department: String,
    pub count: u64,
    pub avg_salary: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusBreakdown {
    pub status: String,
    pub count: u64,
    pub total_budget: i64,
    pub avg_progress: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOverview {
    pub by_status: Vec<StatusBreakdown>,
    /// Total project count across all statuses
    pub total: u64,
    pub total_budget: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillCount {
    pub skill: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillStats {
    /// Most frequent skills among active employees, descending; truncation
    /// depth is backend-specific (5 in-memory, 10 document)
    pub top: Vec<SkillCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyAggregates {
    /// Company age in years, never negative; 0 when no source data exists
    pub age: i32,
    pub departments: u64,
}
