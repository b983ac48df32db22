//! In-memory storage backend.
//!
//! Process-lifetime arrays behind one `RwLock`, linear scans for every
//! lookup, sequential integer ids. Mutations are visible to the very next
//! read; nothing survives a restart. This backend performs no uniqueness
//! checks — duplicate employee emails are knowingly accepted — and answers
//! `NotFound` for any id it has never issued, without validating the id
//! format.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    data::{seed, BackendType, CompanyDataStore, Page},
    error::Error,
    model::{
        company::{Company, NewCompany},
        department::{Department, DepartmentDto, DepartmentPatch, NewDepartment},
        employee::{Employee, EmployeeDetail, EmployeePatch, EmployeeRef, EmployeeSummary, NewEmployee},
        financial::{Financial, NewFinancial},
        message::{Message, MessageStats, MessageStatus, NewMessage},
        project::{NewProject, Project, ProjectDto, ProjectPatch, ProjectStatus},
        search::SearchResults,
        stats::{CompanyAggregates, CompanyStats, SkillStats},
    },
    service::{
        query::{
            self, matches, search_matches, Condition, Pagination, SearchScope,
            DEPARTMENT_SEARCH_FIELDS, EMPLOYEE_SEARCH_FIELDS, PROJECT_SEARCH_FIELDS,
        },
        stats,
    },
};

/// Monotonic id source, one per entity type. Ids are never reused, even
/// after deletion.
#[derive(Debug, Default)]
struct IdGenerator {
    next: u32,
}

impl IdGenerator {
    fn next_id(&mut self) -> String {
        self.next += 1;
        self.next.to_string()
    }
}

#[derive(Default)]
struct MemoryInner {
    company: Option<Company>,
    employees: Vec<Employee>,
    projects: Vec<Project>,
    departments: Vec<Department>,
    financial: Vec<Financial>,
    messages: Vec<Message>,
    employee_ids: IdGenerator,
    project_ids: IdGenerator,
    department_ids: IdGenerator,
    financial_ids: IdGenerator,
    message_ids: IdGenerator,
}

/// The in-memory [`CompanyDataStore`] variant.
pub struct MemoryStore {
    data: Arc<RwLock<MemoryInner>>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(MemoryInner::default())),
        }
    }

    /// A store preloaded with the demo dataset.
    pub fn seeded() -> Self {
        let mut inner = MemoryInner::default();
        inner.insert_company(seed::company());

        let employee_ids: Vec<String> = seed::employees()
            .into_iter()
            .map(|new| inner.insert_employee(new).id)
            .collect();
        for new in seed::departments(&employee_ids) {
            inner.insert_department(new);
        }
        for new in seed::projects(&employee_ids) {
            inner.insert_project(new);
        }
        inner.insert_financial(seed::financial());

        Self {
            data: Arc::new(RwLock::new(inner)),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryInner {
    fn insert_company(&mut self, new: NewCompany) {
        let now = Utc::now();
        self.company = Some(Company {
            id: "1".to_string(),
            name: new.name,
            founded: new.founded,
            industry: new.industry,
            location: new.location,
            employees: new.employees,
            website: new.website,
            description: new.description,
            mission: new.mission,
            values: new.values,
            created_at: now,
            updated_at: now,
        });
    }

    fn insert_employee(&mut self, new: NewEmployee) -> Employee {
        let now = Utc::now();
        let employee = Employee {
            id: self.employee_ids.next_id(),
            first_name: new.first_name,
            last_name: new.last_name,
            position: new.position,
            department: new.department,
            email: new.email,
            phone: new.phone,
            hire_date: new.hire_date.unwrap_or(now),
            salary: new.salary,
            skills: new.skills,
            is_active: new.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };
        self.employees.push(employee.clone());
        employee
    }

    fn insert_project(&mut self, new: NewProject) -> Project {
        let now = Utc::now();
        let project = Project {
            id: self.project_ids.next_id(),
            name: new.name,
            description: new.description,
            status: new.status.unwrap_or(ProjectStatus::Planning),
            start_date: new.start_date,
            end_date: new.end_date,
            budget: new.budget,
            client_name: new.client_name,
            team_members: new.team_members,
            technologies: new.technologies,
            progress: new.progress.unwrap_or(0),
            created_at: now,
            updated_at: now,
        };
        self.projects.push(project.clone());
        project
    }

    fn insert_department(&mut self, new: NewDepartment) -> Department {
        let now = Utc::now();
        let department = Department {
            id: self.department_ids.next_id(),
            name: new.name,
            manager: new.manager,
            budget: new.budget,
            description: new.description,
            location: new.location,
            created_at: now,
            updated_at: now,
        };
        self.departments.push(department.clone());
        department
    }

    fn insert_financial(&mut self, new: NewFinancial) -> Financial {
        let now = Utc::now();
        let record = Financial {
            id: self.financial_ids.next_id(),
            year: new.year,
            revenue: new.revenue,
            expenses: new.expenses,
            profit: new.profit,
            quarterly_revenue: new.quarterly_revenue.unwrap_or_default(),
            monthly_expenses: new.monthly_expenses.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        self.financial.push(record.clone());
        record
    }

    fn employee_summary(&self, id: &str) -> Option<EmployeeSummary> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .map(EmployeeSummary::from)
    }

    /// Resolves team references; dangling ids are dropped from the output.
    fn populate_project(&self, project: &Project) -> ProjectDto {
        let mut dto = ProjectDto::from(project.clone());
        dto.team_members = project
            .team_members
            .iter()
            .filter_map(|id| self.employee_summary(id))
            .map(EmployeeRef::Populated)
            .collect();
        dto
    }

    fn populate_department(&self, department: &Department) -> DepartmentDto {
        let manager = department
            .manager
            .as_deref()
            .and_then(|id| self.employee_summary(id))
            .map(EmployeeRef::Populated);
        let employee_count = self
            .employees
            .iter()
            .filter(|e| e.is_active && e.department == department.name)
            .count() as u64;
        DepartmentDto {
            id: department.id.clone(),
            name: department.name.clone(),
            manager,
            budget: department.budget,
            description: department.description.clone(),
            location: department.location.clone(),
            employee_count,
            created_at: department.created_at,
            updated_at: department.updated_at,
        }
    }

    /// Newest-first view of a filtered collection.
    fn newest_first<'a, T: query::Filterable>(
        collection: &'a [T],
        conditions: &[Condition],
    ) -> Vec<&'a T> {
        collection
            .iter()
            .rev()
            .filter(|record| matches(*record, conditions))
            .collect()
    }
}

#[async_trait]
impl CompanyDataStore for MemoryStore {
    fn backend(&self) -> BackendType {
        BackendType::Memory
    }

    fn supports_mutation(&self) -> bool {
        true
    }

    async fn company(&self) -> Result<Option<Company>, Error> {
        let inner = self.data.read().await;
        Ok(inner.company.clone().map(|mut company| {
            company.employees = inner.employees.iter().filter(|e| e.is_active).count() as u64;
            company
        }))
    }

    async fn list_employees(
        &self,
        conditions: &[Condition],
        pagination: Pagination,
    ) -> Result<Page<Employee>, Error> {
        let inner = self.data.read().await;
        let filtered = MemoryInner::newest_first(&inner.employees, conditions);
        Ok(Page {
            total: filtered.len() as u64,
            items: pagination.slice(&filtered).iter().map(|e| (*e).clone()).collect(),
        })
    }

    async fn employees_by_department(&self, department: &str) -> Result<Vec<Employee>, Error> {
        let conditions = query::employee_conditions(Some(department), None);
        let inner = self.data.read().await;
        Ok(MemoryInner::newest_first(&inner.employees, &conditions)
            .into_iter()
            .cloned()
            .collect())
    }

    async fn get_employee(&self, id: &str) -> Result<EmployeeDetail, Error> {
        let inner = self.data.read().await;
        let employee = inner
            .employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(Error::not_found("Employee"))?;
        let projects = inner
            .projects
            .iter()
            .filter(|p| p.team_members.iter().any(|member| member == id))
            .map(Into::into)
            .collect();
        Ok(EmployeeDetail { employee, projects })
    }

    async fn create_employee(&self, new: NewEmployee) -> Result<Employee, Error> {
        let mut inner = self.data.write().await;
        Ok(inner.insert_employee(new))
    }

    async fn update_employee(&self, id: &str, patch: EmployeePatch) -> Result<Employee, Error> {
        let mut inner = self.data.write().await;
        let employee = inner
            .employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(Error::not_found("Employee"))?;

        if let Some(first_name) = patch.first_name {
            employee.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            employee.last_name = last_name;
        }
        if let Some(position) = patch.position {
            employee.position = position;
        }
        if let Some(department) = patch.department {
            employee.department = department;
        }
        if let Some(email) = patch.email {
            employee.email = email;
        }
        if let Some(phone) = patch.phone {
            employee.phone = Some(phone);
        }
        if let Some(hire_date) = patch.hire_date {
            employee.hire_date = hire_date;
        }
        if let Some(salary) = patch.salary {
            employee.salary = salary;
        }
        if let Some(skills) = patch.skills {
            employee.skills = skills;
        }
        if let Some(is_active) = patch.is_active {
            employee.is_active = is_active;
        }
        employee.updated_at = Utc::now();
        Ok(employee.clone())
    }

    async fn delete_employee(&self, id: &str) -> Result<Employee, Error> {
        let mut inner = self.data.write().await;
        let position = inner
            .employees
            .iter()
            .position(|e| e.id == id)
            .ok_or(Error::not_found("Employee"))?;
        Ok(inner.employees.remove(position))
    }

    async fn list_projects(
        &self,
        conditions: &[Condition],
        pagination: Pagination,
    ) -> Result<Page<ProjectDto>, Error> {
        let inner = self.data.read().await;
        let filtered = MemoryInner::newest_first(&inner.projects, conditions);
        Ok(Page {
            total: filtered.len() as u64,
            items: pagination
                .slice(&filtered)
                .iter()
                .map(|p| inner.populate_project(p))
                .collect(),
        })
    }

    async fn projects_by_status(&self, status: &str) -> Result<Vec<ProjectDto>, Error> {
        let conditions = query::project_conditions(Some(status));
        let inner = self.data.read().await;
        Ok(MemoryInner::newest_first(&inner.projects, &conditions)
            .into_iter()
            .map(|p| inner.populate_project(p))
            .collect())
    }

    async fn get_project(&self, id: &str) -> Result<ProjectDto, Error> {
        let inner = self.data.read().await;
        inner
            .projects
            .iter()
            .find(|p| p.id == id)
            .map(|p| inner.populate_project(p))
            .ok_or(Error::not_found("Project"))
    }

    async fn create_project(&self, new: NewProject) -> Result<ProjectDto, Error> {
        let mut inner = self.data.write().await;
        let project = inner.insert_project(new);
        Ok(inner.populate_project(&project))
    }

    async fn update_project(&self, id: &str, patch: ProjectPatch) -> Result<ProjectDto, Error> {
        let mut inner = self.data.write().await;
        let project = inner
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(Error::not_found("Project"))?;

        if let Some(name) = patch.name {
            project.name = name;
        }
        if let Some(description) = patch.description {
            project.description = description;
        }
        if let Some(status) = patch.status {
            project.status = status;
        }
        if let Some(start_date) = patch.start_date {
            project.start_date = Some(start_date);
        }
        if let Some(end_date) = patch.end_date {
            project.end_date = Some(end_date);
        }
        if let Some(budget) = patch.budget {
            project.budget = budget;
        }
        if let Some(client_name) = patch.client_name {
            project.client_name = client_name;
        }
        if let Some(team_members) = patch.team_members {
            project.team_members = team_members;
        }
        if let Some(technologies) = patch.technologies {
            project.technologies = technologies;
        }
        if let Some(progress) = patch.progress {
            project.progress = progress;
        }
        project.updated_at = Utc::now();
        let project = project.clone();
        Ok(inner.populate_project(&project))
    }

    async fn delete_project(&self, id: &str) -> Result<ProjectDto, Error> {
        let mut inner = self.data.write().await;
        let position = inner
            .projects
            .iter()
            .position(|p| p.id == id)
            .ok_or(Error::not_found("Project"))?;
        let removed = inner.projects.remove(position);
        Ok(removed.into())
    }

    async fn list_departments(&self) -> Result<Vec<DepartmentDto>, Error> {
        let inner = self.data.read().await;
        Ok(inner
            .departments
            .iter()
            .map(|d| inner.populate_department(d))
            .collect())
    }

    async fn create_department(&self, new: NewDepartment) -> Result<DepartmentDto, Error> {
        let mut inner = self.data.write().await;
        let department = inner.insert_department(new);
        Ok(inner.populate_department(&department))
    }

    async fn update_department(
        &self,
        id: &str,
        patch: DepartmentPatch,
    ) -> Result<DepartmentDto, Error> {
        let mut inner = self.data.write().await;
        let department = inner
            .departments
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(Error::not_found("Department"))?;

        if let Some(name) = patch.name {
            department.name = name;
        }
        if let Some(manager) = patch.manager {
            department.manager = Some(manager);
        }
        if let Some(budget) = patch.budget {
            department.budget = budget;
        }
        if let Some(description) = patch.description {
            department.description = Some(description);
        }
        if let Some(location) = patch.location {
            department.location = Some(location);
        }
        department.updated_at = Utc::now();
        let department = department.clone();
        Ok(inner.populate_department(&department))
    }

    async fn delete_department(&self, id: &str) -> Result<DepartmentDto, Error> {
        let mut inner = self.data.write().await;
        let position = inner
            .departments
            .iter()
            .position(|d| d.id == id)
            .ok_or(Error::not_found("Department"))?;
        let removed = inner.departments.remove(position);
        Ok(inner.populate_department(&removed))
    }

    async fn financial_records(&self, year: Option<i32>) -> Result<Vec<Financial>, Error> {
        let conditions = query::financial_conditions(year);
        let inner = self.data.read().await;
        let mut records: Vec<Financial> = inner
            .financial
            .iter()
            .filter(|record| matches(*record, &conditions))
            .cloned()
            .collect();
        records.sort_by(|a, b| b.year.cmp(&a.year));
        Ok(records)
    }

    async fn create_financial(&self, new: NewFinancial) -> Result<Financial, Error> {
        let mut inner = self.data.write().await;
        Ok(inner.insert_financial(new))
    }

    async fn create_message(&self, new: NewMessage, ip: Option<String>) -> Result<Message, Error> {
        let mut inner = self.data.write().await;
        let now = Utc::now();
        let message = Message {
            id: inner.message_ids.next_id(),
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
        };
        inner.messages.push(message.clone());
        Ok(message)
    }

    async fn list_messages(
        &self,
        conditions: &[Condition],
        limit: u32,
    ) -> Result<Page<Message>, Error> {
        let inner = self.data.read().await;
        let filtered = MemoryInner::newest_first(&inner.messages, conditions);
        Ok(Page {
            total: inner.messages.len() as u64,
            items: filtered
                .into_iter()
                .take(limit as usize)
                .cloned()
                .collect(),
        })
    }

    async fn get_message(&self, id: &str) -> Result<Message, Error> {
        let inner = self.data.read().await;
        inner
            .messages
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or(Error::not_found("Message"))
    }

    async fn mark_message_read(&self, id: &str) -> Result<Message, Error> {
        let mut inner = self.data.write().await;
        let message = inner
            .messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(Error::not_found("Message"))?;
        message.status = MessageStatus::Read;
        message.read_at = Some(Utc::now());
        message.updated_at = Utc::now();
        Ok(message.clone())
    }

    async fn delete_message(&self, id: &str) -> Result<Message, Error> {
        let mut inner = self.data.write().await;
        let position = inner
            .messages
            .iter()
            .position(|m| m.id == id)
            .ok_or(Error::not_found("Message"))?;
        Ok(inner.messages.remove(position))
    }

    async fn message_stats(&self) -> Result<MessageStats, Error> {
        let inner = self.data.read().await;
        Ok(MessageStats {
            total: inner.messages.len() as u64,
            unread: inner
                .messages
                .iter()
                .filter(|m| m.status == MessageStatus::New)
                .count() as u64,
            read: inner
                .messages
                .iter()
                .filter(|m| m.status == MessageStatus::Read)
                .count() as u64,
            last_message: inner.messages.iter().map(|m| m.created_at).max(),
        })
    }

    async fn search(&self, term: &str, scope: SearchScope) -> Result<SearchResults, Error> {
        let inner = self.data.read().await;
        let mut results = SearchResults::empty();

        if scope.covers_employees() {
            results.employees = Some(
                inner
                    .employees
                    .iter()
                    .filter(|e| e.is_active && search_matches(*e, &EMPLOYEE_SEARCH_FIELDS, term))
                    .cloned()
                    .collect(),
            );
        }
        if scope.covers_projects() {
            results.projects = Some(
                inner
                    .projects
                    .iter()
                    .filter(|p| search_matches(*p, &PROJECT_SEARCH_FIELDS, term))
                    .map(|p| inner.populate_project(p))
                    .collect(),
            );
        }
        if scope.covers_departments() {
            results.departments = Some(
                inner
                    .departments
                    .iter()
                    .filter(|d| search_matches(*d, &DEPARTMENT_SEARCH_FIELDS, term))
                    .map(|d| inner.populate_department(d))
                    .collect(),
            );
        }

        Ok(results.finalize())
    }

    async fn stats(&self) -> Result<CompanyStats, Error> {
        let inner = self.data.read().await;
        let current_year = chrono::Datelike::year(&Utc::now());

        let financial = inner
            .financial
            .iter()
            .max_by_key(|record| record.year)
            .cloned();
        let age = inner
            .company
            .as_ref()
            .map(|company| stats::age_from_founded(&company.founded, current_year))
            .unwrap_or(0);

        Ok(CompanyStats {
            employees: stats::employee_stats(&inner.employees),
            projects: stats::project_stats(&inner.projects),
            skills: SkillStats {
                top: stats::top_skills(&inner.employees, 5),
            },
            financial,
            company: CompanyAggregates {
                age,
                departments: inner.departments.len() as u64,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_employee(first: &str, email: &str, department: &str, skills: &[&str]) -> NewEmployee {
        NewEmployee {
            first_name: first.to_string(),
            last_name: "Lee".to_string(),
            position: "Engineer".to_string(),
            department: department.to_string(),
            email: email.to_string(),
            phone: None,
            hire_date: None,
            salary: 60_000,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            is_active: None,
        }
    }

    fn new_project(name: &str, members: Vec<String>) -> NewProject {
        NewProject {
            name: name.to_string(),
            description: "A project".to_string(),
            status: Some(ProjectStatus::InProgress),
            start_date: None,
            end_date: None,
            budget: 10_000,
            client_name: "Client".to_string(),
            team_members: members,
            technologies: vec!["Rust".to_string()],
            progress: Some(50),
        }
    }

    #[tokio::test]
    async fn ids_are_sequential_and_never_reused() {
        let store = MemoryStore::new();
        let a = store
            .create_employee(new_employee("Ana", "ana@x.com", "IT", &[]))
            .await
            .unwrap();
        let b = store
            .create_employee(new_employee("Ben", "ben@x.com", "IT", &[]))
            .await
            .unwrap();
        assert_eq!(a.id, "1");
        assert_eq!(b.id, "2");

        store.delete_employee(&b.id).await.unwrap();
        let c = store
            .create_employee(new_employee("Cid", "cid@x.com", "IT", &[]))
            .await
            .unwrap();
        assert_eq!(c.id, "3");
    }

    #[tokio::test]
    async fn duplicate_emails_are_accepted() {
        let store = MemoryStore::new();
        store
            .create_employee(new_employee("Ana", "ana@x.com", "IT", &[]))
            .await
            .unwrap();
        let second = store
            .create_employee(new_employee("Ana2", "ana@x.com", "IT", &[]))
            .await
            .unwrap();
        assert_eq!(second.email, "ana@x.com");
        assert_eq!(second.id, "2");
    }

    #[tokio::test]
    async fn listing_is_newest_first_and_paginated() {
        let store = MemoryStore::new();
        for i in 0..15 {
            store
                .create_employee(new_employee(
                    &format!("E{i}"),
                    &format!("e{i}@x.com"),
                    "IT",
                    &[],
                ))
                .await
                .unwrap();
        }

        let page = store
            .list_employees(&[], Pagination { page: 1, limit: 10 })
            .await
            .unwrap();
        assert_eq!(page.total, 15);
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.items[0].first_name, "E14");

        let page2 = store
            .list_employees(&[], Pagination { page: 2, limit: 10 })
            .await
            .unwrap();
        assert_eq!(page2.items.len(), 5);
        assert_eq!(page2.items[4].first_name, "E0");
    }

    #[tokio::test]
    async fn department_filter_is_case_insensitive() {
        let store = MemoryStore::new();
        store
            .create_employee(new_employee("Ana", "ana@x.com", "Design", &[]))
            .await
            .unwrap();
        store
            .create_employee(new_employee("Ben", "ben@x.com", "IT", &[]))
            .await
            .unwrap();

        let conditions = query::employee_conditions(Some("design"), None);
        let page = store
            .list_employees(&conditions, Pagination { page: 1, limit: 10 })
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].first_name, "Ana");
    }

    #[tokio::test]
    async fn inactive_employees_are_hidden_by_default() {
        let store = MemoryStore::new();
        let employee = store
            .create_employee(new_employee("Ana", "ana@x.com", "IT", &[]))
            .await
            .unwrap();
        store
            .update_employee(
                &employee.id,
                EmployeePatch {
                    is_active: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let default = store
            .list_employees(
                &query::employee_conditions(None, None),
                Pagination { page: 1, limit: 10 },
            )
            .await
            .unwrap();
        assert_eq!(default.total, 0);

        let all = store
            .list_employees(
                &query::employee_conditions(None, Some("all")),
                Pagination { page: 1, limit: 10 },
            )
            .await
            .unwrap();
        assert_eq!(all.total, 1);
    }

    #[tokio::test]
    async fn population_resolves_team_members_and_drops_dangling_ids() {
        let store = MemoryStore::new();
        let ana = store
            .create_employee(new_employee("Ana", "ana@x.com", "IT", &[]))
            .await
            .unwrap();
        let ben = store
            .create_employee(new_employee("Ben", "ben@x.com", "IT", &[]))
            .await
            .unwrap();

        let project = store
            .create_project(new_project(
                "Portal",
                vec![ana.id.clone(), ben.id.clone(), "999".to_string()],
            ))
            .await
            .unwrap();

        let fetched = store.get_project(&project.id).await.unwrap();
        assert_eq!(fetched.team_members.len(), 2);
        for member in &fetched.team_members {
            match member {
                EmployeeRef::Populated(summary) => {
                    assert!(!summary.first_name.is_empty());
                    assert!(!summary.email.is_empty());
                }
                EmployeeRef::Id(id) => panic!("expected populated member, got id {id}"),
            }
        }
    }

    #[tokio::test]
    async fn update_merges_only_set_fields() {
        let store = MemoryStore::new();
        let employee = store
            .create_employee(new_employee("Ana", "ana@x.com", "IT", &["Python"]))
            .await
            .unwrap();

        let updated = store
            .update_employee(
                &employee.id,
                EmployeePatch {
                    salary: Some(70_000),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.salary, 70_000);
        assert_eq!(updated.first_name, "Ana");
        assert_eq!(updated.skills, vec!["Python".to_string()]);
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.get_employee("42").await,
            Err(Error::NotFound { .. })
        ));
        assert!(matches!(
            store.get_project("not-even-a-number").await,
            Err(Error::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn search_finds_employees_by_skill() {
        let store = MemoryStore::new();
        store
            .create_employee(new_employee("Ana", "ana@x.com", "IT", &["Python", "SQL"]))
            .await
            .unwrap();
        store
            .create_employee(new_employee("Ben", "ben@x.com", "IT", &["Go"]))
            .await
            .unwrap();

        let results = store.search("python", SearchScope::All).await.unwrap();
        let employees = results.employees.unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].first_name, "Ana");
    }

    #[tokio::test]
    async fn search_scope_restricts_entity_types() {
        let store = MemoryStore::seeded();
        let results = store
            .search("react", SearchScope::Projects)
            .await
            .unwrap();
        assert!(results.employees.is_none());
        assert!(results.departments.is_none());
        assert!(results.projects.is_some());
        assert_eq!(
            results.total_results,
            results.projects.unwrap().len() as u64
        );
    }

    #[tokio::test]
    async fn stats_on_empty_store_are_zeroed() {
        let store = MemoryStore::new();
        let stats = store.stats().await.unwrap();
        assert_eq!(stats.employees.total, 0);
        assert_eq!(stats.employees.inactive, 0);
        assert!(stats.employees.by_department.is_empty());
        assert_eq!(stats.projects.total, 0);
        assert!(stats.skills.top.is_empty());
        assert!(stats.financial.is_none());
        assert_eq!(stats.company.age, 0);
    }

    #[tokio::test]
    async fn seeded_stats_match_the_dataset() {
        let store = MemoryStore::seeded();
        let stats = store.stats().await.unwrap();
        assert_eq!(stats.employees.total, 5);
        assert_eq!(stats.employees.salary.total_salaries, Some(385_000));
        assert_eq!(stats.employees.salary.avg_salary, Some(77_000.0));
        assert_eq!(stats.projects.total, 3);
        assert_eq!(stats.projects.total_budget, 830_000);
        assert_eq!(stats.skills.top.len(), 5);
        assert_eq!(stats.skills.top[0].skill, "Python");
        assert_eq!(stats.skills.top[0].count, 2);
        assert_eq!(stats.company.departments, 5);
        assert_eq!(stats.financial.unwrap().year, 2023);
    }

    #[tokio::test]
    async fn company_reports_live_active_count() {
        let store = MemoryStore::seeded();
        let company = store.company().await.unwrap().unwrap();
        assert_eq!(company.employees, 5);
        assert_eq!(company.name, "TechCorp Solutions");
    }
}
