//! The demo dataset: TechCorp Solutions and its employees, departments,
//! projects and 2023 financials.
//!
//! Expressed as creation payloads so each backend can insert it through its
//! own id scheme. Departments and projects reference employees by position
//! in [`employees`]; the caller wires the ids it obtained at insert time.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};

use crate::model::{
    company::NewCompany,
    department::NewDepartment,
    employee::NewEmployee,
    financial::{NewFinancial, QuarterlyRevenue},
    project::{NewProject, ProjectStatus},
};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

pub fn company() -> NewCompany {
    NewCompany {
        name: "TechCorp Solutions".to_string(),
        founded: "2018".to_string(),
        industry: "Technologie".to_string(),
        location: "Montreal, Quebec".to_string(),
        employees: 150,
        website: Some("www.techcorp-solutions.com".to_string()),
        description: Some(
            "Entreprise spécialisée dans le développement de solutions logicielles innovantes"
                .to_string(),
        ),
        mission: Some("Transformer les idées en solutions numériques performantes".to_string()),
        values: ["Innovation", "Qualité", "Collaboration", "Excellence"]
            .into_iter()
            .map(String::from)
            .collect(),
    }
}

pub fn employees() -> Vec<NewEmployee> {
    let rows: [(&str, &str, &str, &str, &str, &str, DateTime<Utc>, i64, &[&str]); 5] = [
        (
            "Marie",
            "Dubois",
            "Directrice Technique",
            "IT",
            "marie.dubois@techcorp.com",
            "+1 (514) 123-4567",
            date(2019, 3, 15),
            95_000,
            &["JavaScript", "Python", "Architecture", "Leadership"],
        ),
        (
            "Jean",
            "Martin",
            "Développeur Senior",
            "Développement",
            "jean.martin@techcorp.com",
            "+1 (514) 234-5678",
            date(2020, 1, 10),
            75_000,
            &["React", "Node.js", "MongoDB", "TypeScript"],
        ),
        (
            "Sophie",
            "Tremblay",
            "Designer UX/UI",
            "Design",
            "sophie.tremblay@techcorp.com",
            "+1 (514) 345-6789",
            date(2020, 6, 20),
            65_000,
            &["Figma", "Adobe Creative", "Prototyping", "User Research"],
        ),
        (
            "Pierre",
            "Lavoie",
            "Analyste de Données",
            "Analytics",
            "pierre.lavoie@techcorp.com",
            "+1 (514) 456-7890",
            date(2021, 2, 1),
            70_000,
            &["Python", "SQL", "Power BI", "Machine Learning"],
        ),
        (
            "Catherine",
            "Roy",
            "Chef de Projet",
            "Management",
            "catherine.roy@techcorp.com",
            "+1 (514) 567-8901",
            date(2019, 9, 12),
            80_000,
            &["Agile", "Scrum", "Communication", "Planning"],
        ),
    ];

    rows.into_iter()
        .map(
            |(first, last, position, department, email, phone, hired, salary, skills)| {
                NewEmployee {
                    first_name: first.to_string(),
                    last_name: last.to_string(),
                    position: position.to_string(),
                    department: department.to_string(),
                    email: email.to_string(),
                    phone: Some(phone.to_string()),
                    hire_date: Some(hired),
                    salary,
                    skills: skills.iter().map(|s| s.to_string()).collect(),
                    is_active: Some(true),
                }
            },
        )
        .collect()
}

/// Departments, each managed by the seed employee at the same index.
pub fn departments(manager_ids: &[String]) -> Vec<NewDepartment> {
    let rows: [(&str, i64, &str, &str); 5] = [
        (
            "IT",
            500_000,
            "Gestion de l'infrastructure et architecture technique",
            "Bureau 301",
        ),
        (
            "Développement",
            800_000,
            "Développement des solutions logicielles",
            "Bureau 201-205",
        ),
        (
            "Design",
            300_000,
            "Design d'interface et expérience utilisateur",
            "Bureau 101",
        ),
        (
            "Analytics",
            200_000,
            "Analyse de données et intelligence d'affaires",
            "Bureau 302",
        ),
        (
            "Management",
            400_000,
            "Gestion de projet et coordination",
            "Bureau 401",
        ),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (name, budget, description, location))| NewDepartment {
            name: name.to_string(),
            manager: manager_ids.get(i).cloned(),
            budget,
            description: Some(description.to_string()),
            location: Some(location.to_string()),
        })
        .collect()
}

/// Projects with team members picked from the seed employees by index.
pub fn projects(employee_ids: &[String]) -> Vec<NewProject> {
    let member = |i: usize| employee_ids.get(i).cloned();

    vec![
        NewProject {
            name: "Plateforme E-commerce".to_string(),
            description:
                "Développement d'une plateforme e-commerce complète avec paiement intégré"
                    .to_string(),
            status: Some(ProjectStatus::Completed),
            start_date: Some(date(2023, 1, 15)),
            end_date: Some(date(2023, 6, 30)),
            budget: 250_000,
            client_name: "Retail Plus Inc.".to_string(),
            team_members: [member(0), member(1), member(2)].into_iter().flatten().collect(),
            technologies: ["React", "Node.js", "PostgreSQL", "Stripe API"]
                .into_iter()
                .map(String::from)
                .collect(),
            progress: Some(100),
        },
        NewProject {
            name: "Application Mobile Banking".to_string(),
            description: "Application mobile sécurisée pour services bancaires".to_string(),
            status: Some(ProjectStatus::InProgress),
            start_date: Some(date(2023, 7, 1)),
            end_date: Some(date(2024, 2, 28)),
            budget: 400_000,
            client_name: "Banque Nationale".to_string(),
            team_members: [member(0), member(1), member(3), member(4)]
                .into_iter()
                .flatten()
                .collect(),
            technologies: ["React Native", "Express.js", "MongoDB", "JWT"]
                .into_iter()
                .map(String::from)
                .collect(),
            progress: Some(75),
        },
        NewProject {
            name: "Dashboard Analytics".to_string(),
            description: "Tableau de bord pour visualisation de données temps réel".to_string(),
            status: Some(ProjectStatus::Planning),
            start_date: Some(date(2024, 1, 15)),
            end_date: Some(date(2024, 5, 30)),
            budget: 180_000,
            client_name: "DataViz Corp".to_string(),
            team_members: [member(2), member(3)].into_iter().flatten().collect(),
            technologies: ["Vue.js", "D3.js", "Python", "FastAPI"]
                .into_iter()
                .map(String::from)
                .collect(),
            progress: Some(15),
        },
    ]
}

pub fn financial() -> NewFinancial {
    let monthly_expenses: BTreeMap<String, i64> = [
        ("salaires", 1_200_000),
        ("infrastructure", 300_000),
        ("marketing", 150_000),
        ("operations", 150_000),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    NewFinancial {
        year: 2023,
        revenue: 2_500_000,
        expenses: 1_800_000,
        profit: 700_000,
        quarterly_revenue: Some(QuarterlyRevenue {
            q1: 600_000,
            q2: 650_000,
            q3: 620_000,
            q4: 630_000,
        }),
        monthly_expenses: Some(monthly_expenses),
    }
}
