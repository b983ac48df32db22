//! Backend-independent request mediation.
//!
//! Controllers go through these modules for everything that must behave
//! identically regardless of the active store: pagination normalization,
//! filter construction from query parameters, free-text search semantics and
//! the statistics fold helpers.

pub mod query;
pub mod stats;
