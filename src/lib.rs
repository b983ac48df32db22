//! TechCorp company-portfolio API.
//!
//! A REST API exposing CRUD, query and aggregation endpoints over the demo
//! company dataset (company info, employees, projects, departments, financial
//! records and contact messages). The same logical operations are served by
//! either of two storage backends selected at startup: a process-lifetime
//! in-memory store or MongoDB. Filtering, pagination, population and
//! statistics semantics are kept behaviorally identical across both.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
