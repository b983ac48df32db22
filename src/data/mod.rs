//! Storage abstraction layer.
//!
//! One [`CompanyDataStore`] trait, two backends: [`memory::MemoryStore`]
//! holds process-lifetime arrays and scans them linearly;
//! [`document::DocumentStore`] wraps MongoDB with schema validation, unique
//! indexes and server-side aggregation. Controllers and the query layer are
//! written once against the trait and exercised against both variants.

use async_trait::async_trait;

pub mod document;
pub mod factory;
pub mod memory;
pub mod seed;

pub use factory::{BackendType, StorageConfig, StorageFactory};

use crate::{
    error::Error,
    model::{
        company::Company,
        department::{DepartmentDto, DepartmentPatch, NewDepartment},
        employee::{Employee, EmployeeDetail, EmployeePatch, NewEmployee},
        financial::{Financial, NewFinancial},
        message::{Message, MessageStats, NewMessage},
        project::{NewProject, ProjectDto, ProjectPatch},
        search::SearchResults,
        stats::CompanyStats,
    },
    service::query::{Condition, Pagination, SearchScope},
};

type Result<T> = std::result::Result<T, Error>;

/// One page of a filtered listing: the requested window plus the total
/// match count before windowing.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

/// The abstract company-data store interface.
///
/// Listing operations take the already-normalized filter conditions and
/// pagination window from the query layer and return records ordered most
/// recently created first. Id semantics are backend-specific (sequential
/// decimal strings in memory, 24-hex ObjectIds in MongoDB) and never
/// compatible across backends.
///
/// Mutation operations default to [`Error::ReadOnlyBackend`]; only the
/// in-memory store overrides them, and the router exposes the corresponding
/// routes only when [`CompanyDataStore::supports_mutation`] says so.
#[async_trait]
pub trait CompanyDataStore: Send + Sync {
    /// The backend behind this store, for diagnostics endpoints.
    fn backend(&self) -> BackendType;

    /// Whether update/delete operations are available.
    fn supports_mutation(&self) -> bool {
        false
    }

    /// The company profile, with `employees` recomputed as the live count
    /// of active employees. `None` when no profile record exists.
    async fn company(&self) -> Result<Option<Company>>;

    async fn list_employees(
        &self,
        conditions: &[Condition],
        pagination: Pagination,
    ) -> Result<Page<Employee>>;

    /// Active employees of one department, matched case-insensitively.
    async fn employees_by_department(&self, department: &str) -> Result<Vec<Employee>>;

    /// The employee plus the projects whose team references them.
    async fn get_employee(&self, id: &str) -> Result<EmployeeDetail>;

    async fn create_employee(&self, new: NewEmployee) -> Result<Employee>;

    async fn update_employee(&self, _id: &str, _patch: EmployeePatch) -> Result<Employee> {
        Err(Error::ReadOnlyBackend)
    }

    async fn delete_employee(&self, _id: &str) -> Result<Employee> {
        Err(Error::ReadOnlyBackend)
    }

    /// Projects with team members populated into whitelisted projections.
    /// References that no longer resolve are omitted.
    async fn list_projects(
        &self,
        conditions: &[Condition],
        pagination: Pagination,
    ) -> Result<Page<ProjectDto>>;

    async fn projects_by_status(&self, status: &str) -> Result<Vec<ProjectDto>>;

    async fn get_project(&self, id: &str) -> Result<ProjectDto>;

    async fn create_project(&self, new: NewProject) -> Result<ProjectDto>;

    async fn update_project(&self, _id: &str, _patch: ProjectPatch) -> Result<ProjectDto> {
        Err(Error::ReadOnlyBackend)
    }

    async fn delete_project(&self, _id: &str) -> Result<ProjectDto> {
        Err(Error::ReadOnlyBackend)
    }

    /// All departments with populated managers and live active-employee
    /// counts.
    async fn list_departments(&self) -> Result<Vec<DepartmentDto>>;

    async fn create_department(&self, new: NewDepartment) -> Result<DepartmentDto>;

    async fn update_department(
        &self,
        _id: &str,
        _patch: DepartmentPatch,
    ) -> Result<DepartmentDto> {
        Err(Error::ReadOnlyBackend)
    }

    async fn delete_department(&self, _id: &str) -> Result<DepartmentDto> {
        Err(Error::ReadOnlyBackend)
    }

    /// Financial records, newest year first, optionally restricted to one
    /// year.
    async fn financial_records(&self, year: Option<i32>) -> Result<Vec<Financial>>;

    async fn create_financial(&self, new: NewFinancial) -> Result<Financial>;

    async fn create_message(&self, new: NewMessage, ip: Option<String>) -> Result<Message>;

    /// Messages newest first, filtered and capped; `total` is the overall
    /// message count regardless of filtering.
    async fn list_messages(&self, conditions: &[Condition], limit: u32) -> Result<Page<Message>>;

    async fn get_message(&self, id: &str) -> Result<Message>;

    async fn mark_message_read(&self, _id: &str) -> Result<Message> {
        Err(Error::ReadOnlyBackend)
    }

    async fn delete_message(&self, _id: &str) -> Result<Message> {
        Err(Error::ReadOnlyBackend)
    }

    async fn message_stats(&self) -> Result<MessageStats>;

    /// Free-text search over active employees, projects and departments.
    /// The document backend caps the employee and project lists at 20
    /// matches; the in-memory backend is uncapped.
    async fn search(&self, term: &str, scope: SearchScope) -> Result<SearchResults>;

    /// Company-wide statistics. Top-skill truncation is 5 entries in the
    /// in-memory backend and 10 in the document backend.
    async fn stats(&self) -> Result<CompanyStats>;
}
