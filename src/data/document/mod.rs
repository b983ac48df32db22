//! MongoDB storage backend.
//!
//! Same logical operations as the in-memory store, backed by a database
//! connection: schema validation before every insert, unique indexes for
//! the invariant fields (employee email, department name, financial year),
//! `$regex`-based filters built from the shared condition machinery, and
//! server-side aggregation pipelines for statistics. Reference fields are
//! populated by an application-side join projecting only the whitelisted
//! employee fields.

pub mod pipeline;
pub mod schema;
pub mod validate;

use std::collections::HashMap;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{self, doc, oid::ObjectId, Document},
    options::IndexOptions,
    Client, Collection, Database, IndexModel,
};
use serde::Deserialize;

use crate::{
    data::{seed, BackendType, CompanyDataStore, Page},
    error::Error,
    model::{
        company::Company,
        department::{DepartmentDto, NewDepartment},
        employee::{Employee, EmployeeDetail, EmployeeRef, EmployeeSummary, NewEmployee},
        financial::{Financial, NewFinancial},
        message::{Message, MessageStats, NewMessage},
        project::{NewProject, ProjectDto},
        search::SearchResults,
        stats::{
            CompanyAggregates, CompanyStats, DepartmentBreakdown, EmployeeStats, ProjectOverview,
            SalaryStats, SkillCount, SkillStats, StatusBreakdown,
        },
    },
    service::query::{
        self, conditions_to_bson, search_filter_bson, Condition, Pagination, SearchScope,
        DEPARTMENT_SEARCH_FIELDS, EMPLOYEE_SEARCH_FIELDS, PROJECT_SEARCH_FIELDS,
    },
    service::stats,
};

use schema::{
    CompanyDoc, DepartmentDoc, EmployeeDoc, FinancialDoc, MessageDoc, ProjectDoc,
};

/// Per-type cap applied to employee and project search results.
const SEARCH_LIMIT: i64 = 20;

/// The MongoDB-backed [`CompanyDataStore`] variant.
pub struct DocumentStore {
    db: Database,
}

impl DocumentStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, Error> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(database);
        tracing::info!(database, "connected to MongoDB");
        Ok(Self { db })
    }

    fn companies(&self) -> Collection<CompanyDoc> {
        self.db.collection("company")
    }

    fn employees(&self) -> Collection<EmployeeDoc> {
        self.db.collection("employees")
    }

    fn projects(&self) -> Collection<ProjectDoc> {
        self.db.collection("projects")
    }

    fn departments(&self) -> Collection<DepartmentDoc> {
        self.db.collection("departments")
    }

    fn financial(&self) -> Collection<FinancialDoc> {
        self.db.collection("financial")
    }

    fn messages(&self) -> Collection<MessageDoc> {
        self.db.collection("messages")
    }

    /// Creates the unique indexes backing the data-model invariants.
    pub async fn ensure_indexes(&self) -> Result<(), Error> {
        let unique = IndexOptions::builder().unique(true).build();

        self.employees()
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "email": 1 })
                    .options(unique.clone())
                    .build(),
            )
            .await?;
        self.departments()
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "name": 1 })
                    .options(unique.clone())
                    .build(),
            )
            .await?;
        self.financial()
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "year": 1 })
                    .options(unique)
                    .build(),
            )
            .await?;
        self.employees()
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "department": 1, "isActive": 1 })
                    .build(),
            )
            .await?;
        Ok(())
    }

    /// Inserts the demo dataset when the company collection is empty.
    /// Returns whether anything was inserted.
    pub async fn seed_if_empty(&self) -> Result<bool, Error> {
        if self.companies().count_documents(doc! {}).await? > 0 {
            return Ok(false);
        }

        self.companies()
            .insert_one(CompanyDoc::from_new(seed::company()))
            .await?;

        let mut employee_ids = Vec::new();
        for new in seed::employees() {
            let employee = self.create_employee(new).await?;
            employee_ids.push(employee.id);
        }
        for new in seed::departments(&employee_ids) {
            self.create_department(new).await?;
        }
        for new in seed::projects(&employee_ids) {
            self.create_project(new).await?;
        }
        self.create_financial(seed::financial()).await?;

        Ok(true)
    }

    fn parse_id(resource: &'static str, id: &str) -> Result<ObjectId, Error> {
        ObjectId::parse_str(id).map_err(|_| Error::InvalidId {
            resource,
            id: id.to_string(),
        })
    }

    /// One `$in` query resolving member references into whitelisted
    /// projections.
    async fn member_summaries(
        &self,
        ids: &[ObjectId],
    ) -> Result<HashMap<ObjectId, EmployeeSummary>, Error> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let mut cursor = self.employees().find(doc! { "_id": { "$in": ids } }).await?;
        let mut summaries = HashMap::new();
        while let Some(employee) = cursor.try_next().await? {
            summaries.insert(employee.id, employee.summary());
        }
        Ok(summaries)
    }

    /// Populates team members; references that no longer resolve are
    /// dropped from the output rather than failing the request.
    async fn populate_projects(&self, docs: Vec<ProjectDoc>) -> Result<Vec<ProjectDto>, Error> {
        let member_ids: Vec<ObjectId> = docs
            .iter()
            .flat_map(|doc| doc.team_members.iter().copied())
            .collect();
        let summaries = self.member_summaries(&member_ids).await?;

        Ok(docs
            .into_iter()
            .map(|doc| {
                let members = doc
                    .team_members
                    .iter()
                    .filter_map(|id| summaries.get(id).cloned())
                    .map(EmployeeRef::Populated)
                    .collect();
                let mut dto = ProjectDto::from(crate::model::project::Project::from(doc));
                dto.team_members = members;
                dto
            })
            .collect())
    }

    async fn populate_departments(
        &self,
        docs: Vec<DepartmentDoc>,
    ) -> Result<Vec<DepartmentDto>, Error> {
        let manager_ids: Vec<ObjectId> =
            docs.iter().filter_map(|doc| doc.manager).collect();
        let summaries = self.member_summaries(&manager_ids).await?;

        let mut departments = Vec::with_capacity(docs.len());
        for doc in docs {
            let employee_count = self
                .employees()
                .count_documents(doc! { "department": &doc.name, "isActive": true })
                .await?;
            let manager = doc
                .manager
                .and_then(|id| summaries.get(&id).cloned())
                .map(EmployeeRef::Populated);
            departments.push(DepartmentDto {
                id: doc.id.to_hex(),
                name: doc.name,
                manager,
                budget: doc.budget,
                description: doc.description,
                location: doc.location,
                employee_count,
                created_at: doc.created_at.to_chrono(),
                updated_at: doc.updated_at.to_chrono(),
            });
        }
        Ok(departments)
    }

    async fn aggregate_rows<T: for<'de> Deserialize<'de>>(
        &self,
        collection: &str,
        pipeline: Vec<Document>,
    ) -> Result<Vec<T>, Error> {
        let mut cursor = self
            .db
            .collection::<Document>(collection)
            .aggregate(pipeline)
            .await?;
        let mut rows = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            rows.push(
                bson::from_document(document)
                    .map_err(|e| Error::Internal(format!("malformed aggregation row: {e}")))?,
            );
        }
        Ok(rows)
    }
}

/// Maps a unique-index violation onto the duplicate-key error naming the
/// field; anything else stays a database error.
fn map_insert_err(err: mongodb::error::Error, field: &'static str) -> Error {
    use mongodb::error::{ErrorKind, WriteFailure};

    if let ErrorKind::Write(WriteFailure::WriteError(write_error)) = err.kind.as_ref() {
        if write_error.code == 11000 {
            return Error::Duplicate { field };
        }
    }
    Error::Database(err)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SalaryRow {
    avg_salary: f64,
    min_salary: i64,
    max_salary: i64,
    total_salaries: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatusRow {
    #[serde(rename = "_id")]
    status: String,
    count: u64,
    total_budget: i64,
    avg_progress: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DepartmentRow {
    #[serde(rename = "_id")]
    department: String,
    count: u64,
    avg_salary: f64,
}

#[derive(Debug, Deserialize)]
struct SkillRow {
    #[serde(rename = "_id")]
    skill: String,
    count: u64,
}

#[async_trait]
impl CompanyDataStore for DocumentStore {
    fn backend(&self) -> BackendType {
        BackendType::MongoDb
    }

    async fn company(&self) -> Result<Option<Company>, Error> {
        let Some(doc) = self.companies().find_one(doc! {}).await? else {
            return Ok(None);
        };
        let active = self
            .employees()
            .count_documents(doc! { "isActive": true })
            .await?;
        let mut company = Company::from(doc);
        company.employees = active;
        Ok(Some(company))
    }

    async fn list_employees(
        &self,
        conditions: &[Condition],
        pagination: Pagination,
    ) -> Result<Page<Employee>, Error> {
        let filter = conditions_to_bson(conditions);
        let docs: Vec<EmployeeDoc> = self
            .employees()
            .find(filter.clone())
            .sort(doc! { "createdAt": -1 })
            .skip(pagination.skip())
            .limit(i64::from(pagination.limit))
            .await?
            .try_collect()
            .await?;
        let total = self.employees().count_documents(filter).await?;
        Ok(Page {
            items: docs.into_iter().map(Employee::from).collect(),
            total,
        })
    }

    async fn employees_by_department(&self, department: &str) -> Result<Vec<Employee>, Error> {
        let filter = conditions_to_bson(&query::employee_conditions(Some(department), None));
        let docs: Vec<EmployeeDoc> = self
            .employees()
            .find(filter)
            .sort(doc! { "createdAt": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(docs.into_iter().map(Employee::from).collect())
    }

    async fn get_employee(&self, id: &str) -> Result<EmployeeDetail, Error> {
        let oid = Self::parse_id("Employee", id)?;
        let doc = self
            .employees()
            .find_one(doc! { "_id": oid })
            .await?
            .ok_or(Error::not_found("Employee"))?;

        let projects: Vec<ProjectDoc> = self
            .projects()
            .find(doc! { "teamMembers": oid })
            .await?
            .try_collect()
            .await?;

        Ok(EmployeeDetail {
            employee: doc.into(),
            projects: projects.iter().map(Into::into).collect(),
        })
    }

    async fn create_employee(&self, new: NewEmployee) -> Result<Employee, Error> {
        validate::validate_new_employee(&new)?;
        let doc = EmployeeDoc::from_new(new);
        self.employees()
            .insert_one(&doc)
            .await
            .map_err(|e| map_insert_err(e, "email"))?;
        Ok(doc.into())
    }

    async fn list_projects(
        &self,
        conditions: &[Condition],
        pagination: Pagination,
    ) -> Result<Page<ProjectDto>, Error> {
        let filter = conditions_to_bson(conditions);
        let docs: Vec<ProjectDoc> = self
            .projects()
            .find(filter.clone())
            .sort(doc! { "createdAt": -1 })
            .skip(pagination.skip())
            .limit(i64::from(pagination.limit))
            .await?
            .try_collect()
            .await?;
        let total = self.projects().count_documents(filter).await?;
        Ok(Page {
            items: self.populate_projects(docs).await?,
            total,
        })
    }

    async fn projects_by_status(&self, status: &str) -> Result<Vec<ProjectDto>, Error> {
        let filter = conditions_to_bson(&query::project_conditions(Some(status)));
        let docs: Vec<ProjectDoc> = self
            .projects()
            .find(filter)
            .sort(doc! { "createdAt": -1 })
            .await?
            .try_collect()
            .await?;
        self.populate_projects(docs).await
    }

    async fn get_project(&self, id: &str) -> Result<ProjectDto, Error> {
        let oid = Self::parse_id("Project", id)?;
        let doc = self
            .projects()
            .find_one(doc! { "_id": oid })
            .await?
            .ok_or(Error::not_found("Project"))?;
        let mut populated = self.populate_projects(vec![doc]).await?;
        Ok(populated.remove(0))
    }

    async fn create_project(&self, new: NewProject) -> Result<ProjectDto, Error> {
        let members = validate::validate_new_project(&new)?;
        let doc = ProjectDoc::from_new(new, members);
        self.projects().insert_one(&doc).await?;
        let mut populated = self.populate_projects(vec![doc]).await?;
        Ok(populated.remove(0))
    }

    async fn list_departments(&self) -> Result<Vec<DepartmentDto>, Error> {
        let docs: Vec<DepartmentDoc> = self
            .departments()
            .find(doc! {})
            .await?
            .try_collect()
            .await?;
        self.populate_departments(docs).await
    }

    async fn create_department(&self, new: NewDepartment) -> Result<DepartmentDto, Error> {
        let manager = validate::validate_new_department(&new)?;
        let doc = DepartmentDoc::from_new(new, manager);
        self.departments()
            .insert_one(&doc)
            .await
            .map_err(|e| map_insert_err(e, "name"))?;
        let mut populated = self.populate_departments(vec![doc]).await?;
        Ok(populated.remove(0))
    }

    async fn financial_records(&self, year: Option<i32>) -> Result<Vec<Financial>, Error> {
        let filter = conditions_to_bson(&query::financial_conditions(year));
        let docs: Vec<FinancialDoc> = self
            .financial()
            .find(filter)
            .sort(doc! { "year": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(docs.into_iter().map(Financial::from).collect())
    }

    async fn create_financial(&self, new: NewFinancial) -> Result<Financial, Error> {
        validate::validate_new_financial(&new)?;
        let doc = FinancialDoc::from_new(new);
        self.financial()
            .insert_one(&doc)
            .await
            .map_err(|e| map_insert_err(e, "year"))?;
        Ok(doc.into())
    }

    async fn create_message(&self, new: NewMessage, ip: Option<String>) -> Result<Message, Error> {
        let doc = MessageDoc::from_new(new, ip);
        self.messages().insert_one(&doc).await?;
        Ok(doc.into())
    }

    async fn list_messages(
        &self,
        conditions: &[Condition],
        limit: u32,
    ) -> Result<Page<Message>, Error> {
        let filter = conditions_to_bson(conditions);
        let docs: Vec<MessageDoc> = self
            .messages()
            .find(filter)
            .sort(doc! { "createdAt": -1 })
            .limit(i64::from(limit))
            .await?
            .try_collect()
            .await?;
        let total = self.messages().count_documents(doc! {}).await?;
        Ok(Page {
            items: docs.into_iter().map(Message::from).collect(),
            total,
        })
    }

    async fn get_message(&self, id: &str) -> Result<Message, Error> {
        let oid = Self::parse_id("Message", id)?;
        self.messages()
            .find_one(doc! { "_id": oid })
            .await?
            .map(Message::from)
            .ok_or(Error::not_found("Message"))
    }

    async fn message_stats(&self) -> Result<MessageStats, Error> {
        let total = self.messages().count_documents(doc! {}).await?;
        let unread = self
            .messages()
            .count_documents(doc! { "status": "nouveau" })
            .await?;
        let read = self
            .messages()
            .count_documents(doc! { "status": "lu" })
            .await?;
        let last_message = self
            .messages()
            .find_one(doc! {})
            .sort(doc! { "createdAt": -1 })
            .await?
            .map(|doc| doc.created_at.to_chrono());
        Ok(MessageStats {
            total,
            unread,
            read,
            last_message,
        })
    }

    async fn search(&self, term: &str, scope: SearchScope) -> Result<SearchResults, Error> {
        let mut results = SearchResults::empty();

        if scope.covers_employees() {
            let filter = doc! { "$and": [
                { "isActive": true },
                search_filter_bson(&EMPLOYEE_SEARCH_FIELDS, term),
            ] };
            let docs: Vec<EmployeeDoc> = self
                .employees()
                .find(filter)
                .limit(SEARCH_LIMIT)
                .await?
                .try_collect()
                .await?;
            results.employees = Some(docs.into_iter().map(Employee::from).collect());
        }
        if scope.covers_projects() {
            let docs: Vec<ProjectDoc> = self
                .projects()
                .find(search_filter_bson(&PROJECT_SEARCH_FIELDS, term))
                .limit(SEARCH_LIMIT)
                .await?
                .try_collect()
                .await?;
            results.projects = Some(self.populate_projects(docs).await?);
        }
        if scope.covers_departments() {
            let docs: Vec<DepartmentDoc> = self
                .departments()
                .find(search_filter_bson(&DEPARTMENT_SEARCH_FIELDS, term))
                .await?
                .try_collect()
                .await?;
            results.departments = Some(self.populate_departments(docs).await?);
        }

        Ok(results.finalize())
    }

    async fn stats(&self) -> Result<CompanyStats, Error> {
        let total = self
            .employees()
            .count_documents(doc! { "isActive": true })
            .await?;
        let inactive = self
            .employees()
            .count_documents(doc! { "isActive": false })
            .await?;

        let salary = self
            .aggregate_rows::<SalaryRow>("employees", pipeline::salary_stats())
            .await?
            .into_iter()
            .next()
            .map(|row| SalaryStats {
                avg_salary: Some(row.avg_salary),
                min_salary: Some(row.min_salary),
                max_salary: Some(row.max_salary),
                total_salaries: Some(row.total_salaries),
            })
            .unwrap_or_default();

        let by_department = self
            .aggregate_rows::<DepartmentRow>("employees", pipeline::employees_by_department())
            .await?
            .into_iter()
            .map(|row| DepartmentBreakdown {
                department: row.department,
                count: row.count,
                avg_salary: row.avg_salary,
            })
            .collect();

        let by_status: Vec<StatusBreakdown> = self
            .aggregate_rows::<StatusRow>("projects", pipeline::projects_by_status())
            .await?
            .into_iter()
            .map(|row| StatusBreakdown {
                status: row.status,
                count: row.count,
                total_budget: row.total_budget,
                avg_progress: row.avg_progress,
            })
            .collect();

        let top = self
            .aggregate_rows::<SkillRow>("employees", pipeline::top_skills(10))
            .await?
            .into_iter()
            .map(|row| SkillCount {
                skill: row.skill,
                count: row.count,
            })
            .collect();

        let financial = self
            .financial()
            .find_one(doc! {})
            .sort(doc! { "year": -1 })
            .await?
            .map(Financial::from);
        let current_year = chrono::Datelike::year(&chrono::Utc::now());
        let age =
            stats::age_from_financial_year(financial.as_ref().map(|f| f.year), current_year);
        let departments = self.departments().count_documents(doc! {}).await?;

        Ok(CompanyStats {
            employees: EmployeeStats {
                total,
                inactive,
                salary,
                by_department,
            },
            projects: ProjectOverview {
                total: by_status.iter().map(|s| s.count).sum(),
                total_budget: by_status.iter().map(|s| s.total_budget).sum(),
                by_status,
            },
            skills: SkillStats { top },
            financial,
            company: CompanyAggregates { age, departments },
        })
    }
}
