//! Schema validation for the document backend.
//!
//! Each payload is checked before insert: required fields, enumerations,
//! numeric bounds and regex formats. A failed check collects one message per
//! offending field into a single [`Error::Validation`], which the error
//! layer joins into one human-readable string.

use std::sync::LazyLock;

use mongodb::bson::oid::ObjectId;
use regex::Regex;

use crate::{
    error::Error,
    model::{
        department::NewDepartment,
        employee::NewEmployee,
        financial::NewFinancial,
        project::NewProject,
    },
};

/// Known department names accepted for employees.
pub const DEPARTMENTS: [&str; 6] = [
    "IT",
    "Développement",
    "Design",
    "Analytics",
    "Management",
    "Marketing",
];

pub const MIN_SALARY: i64 = 30_000;
pub const MAX_SALARY: i64 = 200_000;
pub const MIN_PROJECT_BUDGET: i64 = 1_000;
pub const MIN_DEPARTMENT_BUDGET: i64 = 50_000;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$").unwrap()
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[\d\s()-]+$").unwrap());

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn required(messages: &mut Vec<String>, field: &str, value: &str) {
    if value.trim().is_empty() {
        messages.push(format!("{field} is required"));
    }
}

fn finish(messages: Vec<String>) -> Result<(), Error> {
    if messages.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation(messages))
    }
}

pub fn validate_new_employee(new: &NewEmployee) -> Result<(), Error> {
    let mut messages = Vec::new();

    required(&mut messages, "firstName", &new.first_name);
    required(&mut messages, "lastName", &new.last_name);
    required(&mut messages, "position", &new.position);

    if !DEPARTMENTS.contains(&new.department.as_str()) {
        messages.push(format!(
            "department must be one of: {}",
            DEPARTMENTS.join(", ")
        ));
    }
    if !is_valid_email(new.email.trim()) {
        messages.push("email format is invalid".to_string());
    }
    if let Some(phone) = new.phone.as_deref() {
        if !PHONE_RE.is_match(phone) {
            messages.push("phone format is invalid".to_string());
        }
    }
    if new.salary < MIN_SALARY {
        messages.push(format!("salary must be at least {MIN_SALARY}"));
    } else if new.salary > MAX_SALARY {
        messages.push(format!("salary must be at most {MAX_SALARY}"));
    }

    finish(messages)
}

/// Validates the payload and parses the team member references; any id that
/// is not a well-formed ObjectId fails validation.
pub fn validate_new_project(new: &NewProject) -> Result<Vec<ObjectId>, Error> {
    let mut messages = Vec::new();

    required(&mut messages, "name", &new.name);
    required(&mut messages, "description", &new.description);
    required(&mut messages, "clientName", &new.client_name);

    if new.budget < MIN_PROJECT_BUDGET {
        messages.push(format!("budget must be at least {MIN_PROJECT_BUDGET}"));
    }
    if let Some(progress) = new.progress {
        if !(0..=100).contains(&progress) {
            messages.push("progress must be between 0 and 100".to_string());
        }
    }

    let mut members = Vec::with_capacity(new.team_members.len());
    for id in &new.team_members {
        match ObjectId::parse_str(id) {
            Ok(oid) => members.push(oid),
            Err(_) => messages.push(format!("teamMembers contains an invalid employee id: {id}")),
        }
    }

    finish(messages)?;
    Ok(members)
}

/// Validates the payload and parses the manager reference when present.
pub fn validate_new_department(new: &NewDepartment) -> Result<Option<ObjectId>, Error> {
    let mut messages = Vec::new();

    required(&mut messages, "name", &new.name);
    if new.budget < MIN_DEPARTMENT_BUDGET {
        messages.push(format!("budget must be at least {MIN_DEPARTMENT_BUDGET}"));
    }

    let manager = match new.manager.as_deref() {
        Some(id) => match ObjectId::parse_str(id) {
            Ok(oid) => Some(oid),
            Err(_) => {
                messages.push(format!("manager is not a valid employee id: {id}"));
                None
            }
        },
        None => None,
    };

    finish(messages)?;
    Ok(manager)
}

pub fn validate_new_financial(new: &NewFinancial) -> Result<(), Error> {
    let mut messages = Vec::new();

    if new.revenue < 0 {
        messages.push("revenue must not be negative".to_string());
    }
    if new.expenses < 0 {
        messages.push("expenses must not be negative".to_string());
    }

    finish(messages)
}
