use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Company profile record.
///
/// Storage permits many rows but the API treats the collection as a
/// singleton: only the first record is ever surfaced. The `employees` count
/// is recomputed from the active employee set on every read rather than
/// trusted from storage.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    /// Founding year, kept as a string on the wire ("2018")
    pub founded: String,
    pub industry: String,
    pub location: String,
    /// Number of active employees
    pub employees: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission: Option<String>,
    #[serde(default)]
    pub values: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload used when seeding the company profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompany {
    pub name: String,
    pub founded: String,
    pub industry: String,
    pub location: String,
    #[serde(default)]
    pub employees: u64,
    pub website: Option<String>,
    pub description: Option<String>,
    pub mission: Option<String>,
    #[serde(default)]
    pub values: Vec<String>,
}
