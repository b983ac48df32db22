//! Linear-scan statistics folds.
//!
//! The in-memory backend derives its `GET /stats` payload from these
//! helpers; the document backend runs equivalent aggregation pipelines
//! server-side and must produce numerically identical results over the same
//! record set. Empty inputs always yield zeroed/empty aggregates.

use std::collections::HashMap;

use crate::model::{
    employee::Employee,
    project::Project,
    stats::{
        DepartmentBreakdown, EmployeeStats, ProjectOverview, SalaryStats, SkillCount,
        StatusBreakdown,
    },
};

/// Active/inactive counts, salary aggregates over active employees and the
/// per-department breakdown sorted by headcount descending.
pub fn employee_stats(employees: &[Employee]) -> EmployeeStats {
    let active: Vec<&Employee> = employees.iter().filter(|e| e.is_active).collect();
    let inactive = employees.len() as u64 - active.len() as u64;

    let salary = if active.is_empty() {
        SalaryStats::default()
    } else {
        let total: i64 = active.iter().map(|e| e.salary).sum();
        SalaryStats {
            avg_salary: Some(total as f64 / active.len() as f64),
            min_salary: active.iter().map(|e| e.salary).min(),
            max_salary: active.iter().map(|e| e.salary).max(),
            total_salaries: Some(total),
        }
    };

    let mut by_department_map: HashMap<&str, (u64, i64)> = HashMap::new();
    for employee in &active {
        let entry = by_department_map
            .entry(employee.department.as_str())
            .or_insert((0, 0));
        entry.0 += 1;
        entry.1 += employee.salary;
    }
    let mut by_department: Vec<DepartmentBreakdown> = by_department_map
        .into_iter()
        .map(|(department, (count, total))| DepartmentBreakdown {
            department: department.to_string(),
            count,
            avg_salary: total as f64 / count as f64,
        })
        .collect();
    by_department.sort_by(|a, b| b.count.cmp(&a.count).then(a.department.cmp(&b.department)));

    EmployeeStats {
        total: active.len() as u64,
        inactive,
        salary,
        by_department,
    }
}

/// Per-status project breakdown plus overall totals.
pub fn project_stats(projects: &[Project]) -> ProjectOverview {
    let mut by_status_map: HashMap<&'static str, (u64, i64, i64)> = HashMap::new();
    for project in projects {
        let entry = by_status_map.entry(project.status.as_str()).or_insert((0, 0, 0));
        entry.0 += 1;
        entry.1 += project.budget;
        entry.2 += i64::from(project.progress);
    }
    let mut by_status: Vec<StatusBreakdown> = by_status_map
        .into_iter()
        .map(|(status, (count, budget, progress))| StatusBreakdown {
            status: status.to_string(),
            count,
            total_budget: budget,
            avg_progress: progress as f64 / count as f64,
        })
        .collect();
    by_status.sort_by(|a, b| b.count.cmp(&a.count).then(a.status.cmp(&b.status)));

    ProjectOverview {
        total: by_status.iter().map(|s| s.count).sum(),
        total_budget: by_status.iter().map(|s| s.total_budget).sum(),
        by_status,
    }
}

/// Skill frequency across active employees, descending, truncated to
/// `limit` entries. Ties break alphabetically for determinism.
pub fn top_skills(employees: &[Employee], limit: usize) -> Vec<SkillCount> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for employee in employees.iter().filter(|e| e.is_active) {
        for skill in &employee.skills {
            *counts.entry(skill.as_str()).or_insert(0) += 1;
        }
    }
    let mut skills: Vec<SkillCount> = counts
        .into_iter()
        .map(|(skill, count)| SkillCount {
            skill: skill.to_string(),
            count,
        })
        .collect();
    skills.sort_by(|a, b| b.count.cmp(&a.count).then(a.skill.cmp(&b.skill)));
    skills.truncate(limit);
    skills
}

/// Company age from a founding-year string, clamped to zero.
pub fn age_from_founded(founded: &str, current_year: i32) -> i32 {
    founded
        .trim()
        .parse::<i32>()
        .map(|year| (current_year - year).max(0))
        .unwrap_or(0)
}

/// Company age from the most recent financial year, clamped to zero.
/// Counts the record's year itself, hence the `+ 1`.
pub fn age_from_financial_year(latest_year: Option<i32>, current_year: i32) -> i32 {
    latest_year
        .map(|year| (current_year - year + 1).max(0))
        .unwrap_or(0)
}
