//! Tests for the HTTP controller endpoints, one module per resource.

mod contact;
mod departments;
mod employees;
mod financial;
mod projects;
mod search;
mod stats;

use crate::util::{app_empty, app_seeded, send, send_raw};
