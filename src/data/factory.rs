//! Storage backend selection.
//!
//! Mirrors the configuration surface of the original deployment: one knob
//! choosing between the in-memory arrays and MongoDB, everything else
//! behind the [`CompanyDataStore`] trait.

use std::str::FromStr;
use std::sync::Arc;

use crate::{
    data::{document::DocumentStore, memory::MemoryStore, CompanyDataStore},
    error::{ConfigError, Error},
};

/// Storage backend type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    /// Process-lifetime in-memory arrays
    Memory,
    /// MongoDB document store
    MongoDb,
}

impl BackendType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::MongoDb => "mongodb",
        }
    }
}

impl FromStr for BackendType {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "mem" => Ok(Self::Memory),
            "mongodb" | "mongo" | "document" => Ok(Self::MongoDb),
            _ => Err(ConfigError::InvalidVar {
                name: "STORAGE_BACKEND",
                value: s.to_string(),
            }),
        }
    }
}

/// Configuration for constructing a storage backend.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: BackendType,
    /// Connection string, required for database backends
    pub connection_string: Option<String>,
    /// Database name for the document backend
    pub database: String,
    /// Whether to insert the demo dataset into an empty store
    pub seed: bool,
}

impl StorageConfig {
    pub fn memory() -> Self {
        Self {
            backend: BackendType::Memory,
            connection_string: None,
            database: "techcorp".to_string(),
            seed: true,
        }
    }

    pub fn mongodb(connection_string: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            backend: BackendType::MongoDb,
            connection_string: Some(connection_string.into()),
            database: database.into(),
            seed: true,
        }
    }
}

/// Constructs backend instances without exposing implementation details to
/// consumers.
pub struct StorageFactory;

impl StorageFactory {
    pub async fn create(config: StorageConfig) -> Result<Arc<dyn CompanyDataStore>, Error> {
        match config.backend {
            BackendType::Memory => {
                let store = if config.seed {
                    MemoryStore::seeded()
                } else {
                    MemoryStore::new()
                };
                Ok(Arc::new(store))
            }
            BackendType::MongoDb => {
                let uri = config
                    .connection_string
                    .ok_or(ConfigError::MissingVar("MONGODB_URI"))?;
                let store = DocumentStore::connect(&uri, &config.database).await?;
                store.ensure_indexes().await?;
                if config.seed {
                    let inserted = store.seed_if_empty().await?;
                    if inserted {
                        tracing::info!("seeded empty MongoDB database with the demo dataset");
                    }
                }
                Ok(Arc::new(store))
            }
        }
    }
}
