//! Aggregation pipeline builders for `GET /stats`.
//!
//! Pure functions so the stage documents can be asserted in tests without a
//! live server. Each pipeline is the server-side equivalent of one
//! `service::stats` fold and must produce numerically identical results
//! over the same record set.

use mongodb::bson::{doc, Document};

/// Salary aggregates over active employees: one row, or none when no active
/// employee exists.
pub fn salary_stats() -> Vec<Document> {
    vec![
        doc! { "$match": { "isActive": true } },
        doc! { "$group": {
            "_id": null,
            "avgSalary": { "$avg": "$salary" },
            "minSalary": { "$min": "$salary" },
            "maxSalary": { "$max": "$salary" },
            "totalSalaries": { "$sum": "$salary" },
        } },
    ]
}

/// Project breakdown grouped by status, largest group first.
pub fn projects_by_status() -> Vec<Document> {
    vec![
        doc! { "$group": {
            "_id": "$status",
            "count": { "$sum": 1 },
            "totalBudget": { "$sum": "$budget" },
            "avgProgress": { "$avg": "$progress" },
        } },
        doc! { "$sort": { "count": -1, "_id": 1 } },
    ]
}

/// Active-employee headcount and average salary per department, largest
/// department first.
pub fn employees_by_department() -> Vec<Document> {
    vec![
        doc! { "$match": { "isActive": true } },
        doc! { "$group": {
            "_id": "$department",
            "count": { "$sum": 1 },
            "avgSalary": { "$avg": "$salary" },
        } },
        doc! { "$sort": { "count": -1, "_id": 1 } },
    ]
}

/// Skill frequency across active employees, descending, truncated to
/// `limit`.
pub fn top_skills(limit: i64) -> Vec<Document> {
    vec![
        doc! { "$match": { "isActive": true } },
        doc! { "$unwind": "$skills" },
        doc! { "$group": {
            "_id": "$skills",
            "count": { "$sum": 1 },
        } },
        doc! { "$sort": { "count": -1, "_id": 1 } },
        doc! { "$limit": limit },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salary_pipeline_matches_only_active_employees() {
        let pipeline = salary_stats();
        assert_eq!(pipeline[0], doc! { "$match": { "isActive": true } });
        let group = pipeline[1].get_document("$group").unwrap();
        assert_eq!(group.get_document("avgSalary").unwrap(), &doc! { "$avg": "$salary" });
        assert_eq!(group.get_document("totalSalaries").unwrap(), &doc! { "$sum": "$salary" });
    }

    #[test]
    fn status_pipeline_groups_then_sorts_by_count() {
        let pipeline = projects_by_status();
        assert_eq!(pipeline.len(), 2);
        assert_eq!(
            pipeline[0].get_document("$group").unwrap().get_str("_id").unwrap(),
            "$status"
        );
        assert_eq!(pipeline[1], doc! { "$sort": { "count": -1, "_id": 1 } });
    }

    #[test]
    fn skills_pipeline_unwinds_counts_sorts_and_limits() {
        let pipeline = top_skills(10);
        assert_eq!(
            pipeline,
            vec![
                doc! { "$match": { "isActive": true } },
                doc! { "$unwind": "$skills" },
                doc! { "$group": { "_id": "$skills", "count": { "$sum": 1 } } },
                doc! { "$sort": { "count": -1, "_id": 1 } },
                doc! { "$limit": 10i64 },
            ]
        );
    }
}
