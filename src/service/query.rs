//! Filtering, pagination and search semantics shared by both backends.
//!
//! Query parameters are translated into an explicit, enumerated list of
//! [`Condition`]s — a field name, a comparison mode and a value — rather
//! than being forwarded opaquely into a query builder. The in-memory store
//! evaluates conditions through the [`Filterable`] lookup trait; the
//! document store translates the same conditions into a BSON filter via
//! [`conditions_to_bson`], so the two backends cannot drift apart on what a
//! given parameter means.

use mongodb::bson::{doc, Bson, Document};

use crate::model::{
    api::PaginationDto,
    department::Department,
    employee::Employee,
    financial::Financial,
    message::Message,
    project::Project,
};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// Normalized pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Pagination {
    /// Parses raw query-string values. Anything that is not a positive
    /// integer falls back to the defaults (page 1, limit 10) instead of
    /// failing the request.
    pub fn from_params(page: Option<&str>, limit: Option<&str>) -> Self {
        fn positive(value: Option<&str>, default: u32) -> u32 {
            value
                .and_then(|s| s.trim().parse::<u32>().ok())
                .filter(|n| *n >= 1)
                .unwrap_or(default)
        }

        Self {
            page: positive(page, DEFAULT_PAGE),
            limit: positive(limit, DEFAULT_LIMIT),
        }
    }

    /// Number of records preceding the requested page.
    pub fn skip(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }

    /// Slices one page out of an already-filtered, already-ordered list.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = usize::try_from(self.skip())
            .unwrap_or(usize::MAX)
            .min(items.len());
        let end = start.saturating_add(self.limit as usize).min(items.len());
        &items[start..end]
    }

    /// Builds the response pagination block for a known total.
    pub fn to_dto(&self, total: u64) -> PaginationDto {
        PaginationDto {
            page: self.page,
            limit: self.limit,
            total,
            pages: total.div_ceil(u64::from(self.limit)),
        }
    }
}

/// How a condition's value is compared against the record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Exact equality (booleans, numbers)
    Equals,
    /// Case-insensitive full-string equality (department and status fields)
    EqualsIgnoreCase,
    /// Case-insensitive substring containment (search)
    Contains,
    /// Case-insensitive substring containment against any element of a
    /// string-list field (skills, technologies)
    ListContains,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Flag(bool),
    Int(i64),
}

/// One filter predicate: field, comparison mode, expected value.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub field: &'static str,
    pub value: FilterValue,
    pub mode: MatchMode,
}

impl Condition {
    pub fn text(field: &'static str, value: impl Into<String>, mode: MatchMode) -> Self {
        Self {
            field,
            value: FilterValue::Text(value.into()),
            mode,
        }
    }

    pub fn flag(field: &'static str, value: bool) -> Self {
        Self {
            field,
            value: FilterValue::Flag(value),
            mode: MatchMode::Equals,
        }
    }

    pub fn int(field: &'static str, value: i64) -> Self {
        Self {
            field,
            value: FilterValue::Int(value),
            mode: MatchMode::Equals,
        }
    }
}

/// Recognized employee-listing parameters.
///
/// `status` defaults to "active", restricting the listing to active
/// employees; any other explicit value lifts the restriction. `department`
/// filters by case-insensitive name equality. Anything else in the query
/// string is ignored.
pub fn employee_conditions(department: Option<&str>, status: Option<&str>) -> Vec<Condition> {
    let mut conditions = Vec::new();
    if status.unwrap_or("active") == "active" {
        conditions.push(Condition::flag("isActive", true));
    }
    if let Some(department) = department {
        conditions.push(Condition::text(
            "department",
            department,
            MatchMode::EqualsIgnoreCase,
        ));
    }
    conditions
}

/// Recognized project-listing parameters: `status`, case-insensitive.
pub fn project_conditions(status: Option<&str>) -> Vec<Condition> {
    status
        .map(|s| vec![Condition::text("status", s, MatchMode::EqualsIgnoreCase)])
        .unwrap_or_default()
}

/// Recognized message-listing parameters: `status`, case-insensitive.
pub fn message_conditions(status: Option<&str>) -> Vec<Condition> {
    status
        .map(|s| vec![Condition::text("status", s, MatchMode::EqualsIgnoreCase)])
        .unwrap_or_default()
}

/// Financial-listing filter for an already-parsed year.
pub fn financial_conditions(year: Option<i32>) -> Vec<Condition> {
    year.map(|y| vec![Condition::int("year", i64::from(y))])
        .unwrap_or_default()
}

/// A record field as seen by the in-memory condition evaluator.
pub enum FieldValue<'a> {
    Text(&'a str),
    TextList(&'a [String]),
    Flag(bool),
    Number(i64),
    Absent,
}

/// Field lookup by wire name, implemented per entity so conditions and
/// search specs can be evaluated against in-memory records.
pub trait Filterable {
    fn field(&self, name: &str) -> FieldValue<'_>;
}

impl Filterable for Employee {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "firstName" => FieldValue::Text(&self.first_name),
            "lastName" => FieldValue::Text(&self.last_name),
            "position" => FieldValue::Text(&self.position),
            "department" => FieldValue::Text(&self.department),
            "email" => FieldValue::Text(&self.email),
            "skills" => FieldValue::TextList(&self.skills),
            "isActive" => FieldValue::Flag(self.is_active),
            "salary" => FieldValue::Number(self.salary),
            _ => FieldValue::Absent,
        }
    }
}

impl Filterable for Project {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "name" => FieldValue::Text(&self.name),
            "description" => FieldValue::Text(&self.description),
            "status" => FieldValue::Text(self.status.as_str()),
            "clientName" => FieldValue::Text(&self.client_name),
            "technologies" => FieldValue::TextList(&self.technologies),
            "budget" => FieldValue::Number(self.budget),
            _ => FieldValue::Absent,
        }
    }
}

impl Filterable for Department {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "name" => FieldValue::Text(&self.name),
            "description" => self
                .description
                .as_deref()
                .map_or(FieldValue::Absent, FieldValue::Text),
            "location" => self
                .location
                .as_deref()
                .map_or(FieldValue::Absent, FieldValue::Text),
            _ => FieldValue::Absent,
        }
    }
}

impl Filterable for Financial {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "year" => FieldValue::Number(i64::from(self.year)),
            _ => FieldValue::Absent,
        }
    }
}

impl Filterable for Message {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "name" => FieldValue::Text(&self.name),
            "email" => FieldValue::Text(&self.email),
            "subject" => FieldValue::Text(&self.subject),
            "status" => FieldValue::Text(self.status.as_str()),
            _ => FieldValue::Absent,
        }
    }
}

/// True when the record satisfies every condition (AND semantics).
pub fn matches<T: Filterable>(record: &T, conditions: &[Condition]) -> bool {
    conditions
        .iter()
        .all(|condition| condition_matches(&record.field(condition.field), condition))
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn condition_matches(field: &FieldValue<'_>, condition: &Condition) -> bool {
    match (&condition.value, field) {
        (FilterValue::Flag(expected), FieldValue::Flag(actual)) => expected == actual,
        (FilterValue::Int(expected), FieldValue::Number(actual)) => expected == actual,
        (FilterValue::Text(expected), FieldValue::Text(actual)) => match condition.mode {
            MatchMode::Equals => expected == actual,
            MatchMode::EqualsIgnoreCase => expected.eq_ignore_ascii_case(actual),
            MatchMode::Contains | MatchMode::ListContains => contains_ci(actual, expected),
        },
        (FilterValue::Text(expected), FieldValue::TextList(items)) => match condition.mode {
            MatchMode::Equals => items.iter().any(|item| item == expected),
            MatchMode::EqualsIgnoreCase => {
                items.iter().any(|item| item.eq_ignore_ascii_case(expected))
            }
            MatchMode::Contains | MatchMode::ListContains => {
                items.iter().any(|item| contains_ci(item, expected))
            }
        },
        _ => false,
    }
}

fn regex_filter(pattern: String) -> Bson {
    Bson::Document(doc! { "$regex": pattern, "$options": "i" })
}

/// Translates conditions into a MongoDB filter document.
///
/// Case-insensitive equality becomes an anchored `$regex`, containment an
/// unanchored one, and list containment an `$elemMatch` regex; user input is
/// always regex-escaped first.
pub fn conditions_to_bson(conditions: &[Condition]) -> Document {
    let mut filter = Document::new();
    for condition in conditions {
        let value = match &condition.value {
            FilterValue::Flag(b) => Bson::Boolean(*b),
            FilterValue::Int(n) => Bson::Int64(*n),
            FilterValue::Text(text) => match condition.mode {
                MatchMode::Equals => Bson::String(text.clone()),
                MatchMode::EqualsIgnoreCase => {
                    regex_filter(format!("^{}$", regex::escape(text)))
                }
                MatchMode::Contains => regex_filter(regex::escape(text)),
                MatchMode::ListContains => Bson::Document(doc! {
                    "$elemMatch": { "$regex": regex::escape(text), "$options": "i" }
                }),
            },
        };
        filter.insert(condition.field, value);
    }
    filter
}

/// Searchable fields of one entity type: plain text fields and string-list
/// fields, both matched by case-insensitive substring containment.
pub struct SearchFields {
    pub text: &'static [&'static str],
    pub lists: &'static [&'static str],
}

pub const EMPLOYEE_SEARCH_FIELDS: SearchFields = SearchFields {
    text: &["firstName", "lastName", "position", "department", "email"],
    lists: &["skills"],
};

pub const PROJECT_SEARCH_FIELDS: SearchFields = SearchFields {
    text: &["name", "description", "clientName"],
    lists: &["technologies"],
};

pub const DEPARTMENT_SEARCH_FIELDS: SearchFields = SearchFields {
    text: &["name", "description", "location"],
    lists: &[],
};

/// True when any searchable field contains the term (OR semantics).
pub fn search_matches<T: Filterable>(record: &T, fields: &SearchFields, term: &str) -> bool {
    fields
        .text
        .iter()
        .chain(fields.lists.iter())
        .any(|field| {
            let condition = Condition::text(field, term, MatchMode::Contains);
            condition_matches(&record.field(field), &condition)
        })
}

/// `$or` filter over an entity's searchable fields.
pub fn search_filter_bson(fields: &SearchFields, term: &str) -> Document {
    let escaped = regex::escape(term);
    let mut clauses: Vec<Document> = fields
        .text
        .iter()
        .map(|field| doc! { *field: { "$regex": escaped.clone(), "$options": "i" } })
        .collect();
    clauses.extend(fields.lists.iter().map(|field| {
        doc! { *field: { "$elemMatch": { "$regex": escaped.clone(), "$options": "i" } } }
    }));
    doc! { "$or": clauses }
}

/// Which entity types a search request covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    All,
    Employees,
    Projects,
    Departments,
    /// An explicit `type` value that names no known entity; nothing runs
    Unmatched,
}

impl SearchScope {
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            None => Self::All,
            Some("employees") => Self::Employees,
            Some("projects") => Self::Projects,
            Some("departments") => Self::Departments,
            Some(_) => Self::Unmatched,
        }
    }

    pub fn covers_employees(&self) -> bool {
        matches!(self, Self::All | Self::Employees)
    }

    pub fn covers_projects(&self) -> bool {
        matches!(self, Self::All | Self::Projects)
    }

    pub fn covers_departments(&self) -> bool {
        matches!(self, Self::All | Self::Departments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_falls_back_to_defaults() {
        assert_eq!(
            Pagination::from_params(None, None),
            Pagination { page: 1, limit: 10 }
        );
        assert_eq!(
            Pagination::from_params(Some("abc"), Some("-3")),
            Pagination { page: 1, limit: 10 }
        );
        assert_eq!(
            Pagination::from_params(Some("0"), Some("0")),
            Pagination { page: 1, limit: 10 }
        );
        assert_eq!(
            Pagination::from_params(Some("3"), Some("25")),
            Pagination { page: 3, limit: 25 }
        );
    }

    #[test]
    fn pages_is_ceiling_of_total_over_limit() {
        let pagination = Pagination { page: 1, limit: 10 };
        assert_eq!(pagination.to_dto(0).pages, 0);
        assert_eq!(pagination.to_dto(10).pages, 1);
        assert_eq!(pagination.to_dto(11).pages, 2);
        assert_eq!(pagination.to_dto(35).pages, 4);
    }

    #[test]
    fn slice_clamps_past_the_end() {
        let items: Vec<u32> = (0..23).collect();
        let page3 = Pagination { page: 3, limit: 10 };
        assert_eq!(page3.slice(&items), &[20, 21, 22]);
        let page4 = Pagination { page: 4, limit: 10 };
        assert!(page4.slice(&items).is_empty());
    }

    #[test]
    fn returned_page_size_matches_the_spec_formula() {
        let items: Vec<u32> = (0..35).collect();
        for page in 1..=6u32 {
            for limit in [1u32, 7, 10, 40] {
                let pagination = Pagination { page, limit };
                let expected = (items.len() as i64
                    - i64::from(page - 1) * i64::from(limit))
                .clamp(0, i64::from(limit));
                assert_eq!(pagination.slice(&items).len() as i64, expected);
            }
        }
    }

    #[test]
    fn employee_status_parameter_controls_the_active_flag() {
        let default = employee_conditions(None, None);
        assert_eq!(default, vec![Condition::flag("isActive", true)]);

        let all = employee_conditions(None, Some("all"));
        assert!(all.is_empty());

        let filtered = employee_conditions(Some("IT"), Some("active"));
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[1].field, "department");
        assert_eq!(filtered[1].mode, MatchMode::EqualsIgnoreCase);
    }

    #[test]
    fn equals_ignore_case_translates_to_an_anchored_regex() {
        let filter =
            conditions_to_bson(&project_conditions(Some("En cours")));
        assert_eq!(
            filter,
            doc! { "status": { "$regex": "^En cours$", "$options": "i" } }
        );
    }

    #[test]
    fn regex_metacharacters_in_input_are_escaped() {
        let filter = conditions_to_bson(&[Condition::text(
            "name",
            "a.b*",
            MatchMode::Contains,
        )]);
        assert_eq!(
            filter,
            doc! { "name": { "$regex": "a\\.b\\*", "$options": "i" } }
        );
    }

    #[test]
    fn search_filter_ors_text_and_list_fields() {
        let filter = search_filter_bson(&PROJECT_SEARCH_FIELDS, "React");
        let clauses = filter.get_array("$or").unwrap();
        assert_eq!(clauses.len(), 4);
    }

    #[test]
    fn search_scope_parses_known_types() {
        assert_eq!(SearchScope::from_param(None), SearchScope::All);
        assert_eq!(
            SearchScope::from_param(Some("projects")),
            SearchScope::Projects
        );
        assert_eq!(
            SearchScope::from_param(Some("invoices")),
            SearchScope::Unmatched
        );
        assert!(!SearchScope::Unmatched.covers_employees());
    }
}
