//! MongoDB document representations.
//!
//! Storage shapes with `ObjectId` ids and BSON timestamps, kept separate
//! from the wire-facing models in `crate::model`. Conversions at the store
//! boundary render ids as 24-hex strings and timestamps as UTC datetimes.

use std::collections::BTreeMap;

use bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::model::{
    company::{Company, NewCompany},
    department::{Department, NewDepartment},
    employee::{Employee, EmployeeSummary, NewEmployee},
    financial::{Financial, NewFinancial, QuarterlyRevenue},
    message::{Message, MessageStatus, NewMessage},
    project::{NewProject, Project, ProjectBrief, ProjectStatus},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDoc {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub founded: String,
    pub industry: String,
    pub location: String,
    #[serde(default)]
    pub employees: i64,
    pub website: Option<String>,
    pub description: Option<String>,
    pub mission: Option<String>,
    #[serde(default)]
    pub values: Vec<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl CompanyDoc {
    pub fn from_new(new: NewCompany) -> Self {
        let now = DateTime::now();
        Self {
            id: ObjectId::new(),
            name: new.name,
            founded: new.founded,
            industry: new.industry,
            location: new.location,
            employees: new.employees as i64,
            website: new.website,
            description: new.description,
            mission: new.mission,
            values: new.values,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<CompanyDoc> for Company {
    fn from(doc: CompanyDoc) -> Self {
        Self {
            id: doc.id.to_hex(),
            name: doc.name,
            founded: doc.founded,
            industry: doc.industry,
            location: doc.location,
            employees: doc.employees.max(0) as u64,
            website: doc.website,
            description: doc.description,
            mission: doc.mission,
            values: doc.values,
            created_at: doc.created_at.to_chrono(),
            updated_at: doc.updated_at.to_chrono(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDoc {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub department: String,
    pub email: String,
    pub phone: Option<String>,
    pub hire_date: DateTime,
    pub salary: i64,
    #[serde(default)]
    pub skills: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl EmployeeDoc {
    pub fn from_new(new: NewEmployee) -> Self {
        let now = DateTime::now();
        Self {
            id: ObjectId::new(),
            first_name: new.first_name,
            last_name: new.last_name,
            position: new.position,
            department: new.department,
            email: new.email.trim().to_lowercase(),
            phone: new.phone,
            hire_date: new
                .hire_date
                .map(DateTime::from_chrono)
                .unwrap_or_else(DateTime::now),
            salary: new.salary,
            skills: new.skills,
            is_active: new.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn summary(&self) -> EmployeeSummary {
        EmployeeSummary {
            id: self.id.to_hex(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            position: self.position.clone(),
            email: self.email.clone(),
        }
    }
}

impl From<EmployeeDoc> for Employee {
    fn from(doc: EmployeeDoc) -> Self {
        Self {
            id: doc.id.to_hex(),
            first_name: doc.first_name,
            last_name: doc.last_name,
            position: doc.position,
            department: doc.department,
            email: doc.email,
            phone: doc.phone,
            hire_date: doc.hire_date.to_chrono(),
            salary: doc.salary,
            skills: doc.skills,
            is_active: doc.is_active,
            created_at: doc.created_at.to_chrono(),
            updated_at: doc.updated_at.to_chrono(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDoc {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub start_date: Option<DateTime>,
    pub end_date: Option<DateTime>,
    pub budget: i64,
    pub client_name: String,
    #[serde(default)]
    pub team_members: Vec<ObjectId>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub progress: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl ProjectDoc {
    pub fn from_new(new: NewProject, team_members: Vec<ObjectId>) -> Self {
        let now = DateTime::now();
        Self {
            id: ObjectId::new(),
            name: new.name,
            description: new.description,
            status: new.status.unwrap_or(ProjectStatus::Planning),
            start_date: new.start_date.map(DateTime::from_chrono),
            end_date: new.end_date.map(DateTime::from_chrono),
            budget: new.budget,
            client_name: new.client_name,
            team_members,
            technologies: new.technologies,
            progress: new.progress.unwrap_or(0),
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<ProjectDoc> for Project {
    fn from(doc: ProjectDoc) -> Self {
        Self {
            id: doc.id.to_hex(),
            name: doc.name,
            description: doc.description,
            status: doc.status,
            start_date: doc.start_date.map(DateTime::to_chrono),
            end_date: doc.end_date.map(DateTime::to_chrono),
            budget: doc.budget,
            client_name: doc.client_name,
            team_members: doc.team_members.iter().map(|oid| oid.to_hex()).collect(),
            technologies: doc.technologies,
            progress: doc.progress,
            created_at: doc.created_at.to_chrono(),
            updated_at: doc.updated_at.to_chrono(),
        }
    }
}

impl From<&ProjectDoc> for ProjectBrief {
    fn from(doc: &ProjectDoc) -> Self {
        Self {
            id: doc.id.to_hex(),
            name: doc.name.clone(),
            status: doc.status,
            budget: doc.budget,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDoc {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub manager: Option<ObjectId>,
    pub budget: i64,
    pub description: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl DepartmentDoc {
    pub fn from_new(new: NewDepartment, manager: Option<ObjectId>) -> Self {
        let now = DateTime::now();
        Self {
            id: ObjectId::new(),
            name: new.name,
            manager,
            budget: new.budget,
            description: new.description,
            location: new.location,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<DepartmentDoc> for Department {
    fn from(doc: DepartmentDoc) -> Self {
        Self {
            id: doc.id.to_hex(),
            name: doc.name,
            manager: doc.manager.map(|oid| oid.to_hex()),
            budget: doc.budget,
            description: doc.description,
            location: doc.location,
            created_at: doc.created_at.to_chrono(),
            updated_at: doc.updated_at.to_chrono(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialDoc {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub year: i32,
    pub revenue: i64,
    pub expenses: i64,
    pub profit: i64,
    #[serde(default)]
    pub quarterly_revenue: QuarterlyRevenue,
    #[serde(default)]
    pub monthly_expenses: BTreeMap<String, i64>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl FinancialDoc {
    pub fn from_new(new: NewFinancial) -> Self {
        let now = DateTime::now();
        Self {
            id: ObjectId::new(),
            year: new.year,
            revenue: new.revenue,
            expenses: new.expenses,
            profit: new.profit,
            quarterly_revenue: new.quarterly_revenue.unwrap_or_default(),
            monthly_expenses: new.monthly_expenses.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<FinancialDoc> for Financial {
    fn from(doc: FinancialDoc) -> Self {
        Self {
            id: doc.id.to_hex(),
            year: doc.year,
            revenue: doc.revenue,
            expenses: doc.expenses,
            profit: doc.profit,
            quarterly_revenue: doc.quarterly_revenue,
            monthly_expenses: doc.monthly_expenses,
            created_at: doc.created_at.to_chrono(),
            updated_at: doc.updated_at.to_chrono(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDoc {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: MessageStatus,
    pub ip: Option<String>,
    pub read_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl MessageDoc {
    pub fn from_new(new: NewMessage, ip: Option<String>) -> Self {
        let now = DateTime::now();
        Self {
            id: ObjectId::new(),
            name: new.name.trim().to_string(),
            email: new.email.trim().to_lowercase(),
            subject: new
                .subject
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "Nouveau message".to_string()),
            message: new.message.trim().to_string(),
            status: MessageStatus::New,
            ip,
            read_at: None,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<MessageDoc> for Message {
    fn from(doc: MessageDoc) -> Self {
        Self {
            id: doc.id.to_hex(),
            name: doc.name,
            email: doc.email,
            subject: doc.subject,
            message: doc.message,
            status: doc.status,
            ip: doc.ip,
            read_at: doc.read_at.map(DateTime::to_chrono),
            created_at: doc.created_at.to_chrono(),
            updated_at: doc.updated_at.to_chrono(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn employee_doc_round_trips_to_the_domain_shape() {
        let new = NewEmployee {
            first_name: "Ana".to_string(),
            last_name: "Lee".to_string(),
            position: "Engineer".to_string(),
            department: "IT".to_string(),
            email: "Ana@X.com".to_string(),
            phone: None,
            hire_date: Some(Utc::now()),
            salary: 60_000,
            skills: vec!["Python".to_string()],
            is_active: None,
        };
        let doc = EmployeeDoc::from_new(new);
        assert_eq!(doc.email, "ana@x.com");
        assert!(doc.is_active);

        let employee: Employee = doc.clone().into();
        assert_eq!(employee.id, doc.id.to_hex());
        assert_eq!(employee.id.len(), 24);
        assert_eq!(employee.salary, 60_000);
    }

    #[test]
    fn project_doc_renders_member_ids_as_hex() {
        let member = ObjectId::new();
        let doc = ProjectDoc::from_new(
            NewProject {
                name: "Portal".to_string(),
                description: "d".to_string(),
                status: None,
                start_date: None,
                end_date: None,
                budget: 10_000,
                client_name: "c".to_string(),
                team_members: vec![],
                technologies: vec![],
                progress: None,
            },
            vec![member],
        );
        assert_eq!(doc.status, ProjectStatus::Planning);
        assert_eq!(doc.progress, 0);

        let project: Project = doc.into();
        assert_eq!(project.team_members, vec![member.to_hex()]);
    }
}
