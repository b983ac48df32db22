//! HTTP controllers.
//!
//! Thin translation from HTTP requests to store calls and back into the
//! standard response envelope. One module per resource; each handler is
//! annotated for the OpenAPI document served at `/api/docs`. No controller
//! talks to a concrete backend — everything goes through the
//! [`crate::data::CompanyDataStore`] trait object in the shared state.

pub mod company;
pub mod contact;
pub mod department;
pub mod employee;
pub mod extract;
pub mod financial;
pub mod info;
pub mod project;
pub mod search;
pub mod stats;
