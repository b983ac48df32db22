use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Revenue split across the four quarters of the record's year.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct QuarterlyRevenue {
    #[serde(rename = "Q1", default)]
    pub q1: i64,
    #[serde(rename = "Q2", default)]
    pub q2: i64,
    #[serde(rename = "Q3", default)]
    pub q3: i64,
    #[serde(rename = "Q4", default)]
    pub q4: i64,
}

/// Yearly financial record; at most one per year.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Financial {
    pub id: String,
    pub year: i32,
    pub revenue: i64,
    pub expenses: i64,
    /// May be negative
    pub profit: i64,
    pub quarterly_revenue: QuarterlyRevenue,
    /// Expense category name to yearly amount
    pub monthly_expenses: BTreeMap<String, i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/company/financial`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewFinancial {
    pub year: i32,
    pub revenue: i64,
    pub expenses: i64,
    pub profit: i64,
    #[serde(default)]
    pub quarterly_revenue: Option<QuarterlyRevenue>,
    #[serde(default)]
    pub monthly_expenses: Option<BTreeMap<String, i64>>,
}
