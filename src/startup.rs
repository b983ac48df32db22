//! Backend construction at process start.

use std::sync::Arc;

use crate::{
    config::Config,
    data::{BackendType, CompanyDataStore, StorageConfig, StorageFactory},
    error::Error,
};

/// Builds the configured storage backend, seeding it when requested.
pub async fn build_store(config: &Config) -> Result<Arc<dyn CompanyDataStore>, Error> {
    let storage = StorageConfig {
        backend: config.backend,
        connection_string: config.mongodb_uri.clone(),
        database: config.mongodb_database.clone(),
        seed: config.seed,
    };

    let store = StorageFactory::create(storage).await?;

    match config.backend {
        BackendType::Memory => {
            tracing::info!("storage backend: in-memory (data is lost on restart)")
        }
        BackendType::MongoDb => {
            tracing::info!(database = %config.mongodb_database, "storage backend: MongoDB")
        }
    }

    Ok(store)
}
