use std::sync::Arc;

use crate::data::CompanyDataStore;

/// Shared application state handed to every controller.
///
/// The store is the single injection point for the active backend; handlers
/// never know which implementation is behind the trait object.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CompanyDataStore>,
}
