use crate::{data::BackendType, error::ConfigError};

/// Runtime configuration resolved from the process environment.
///
/// Loaded once at startup via [`Config::from_env`]; a `.env` file is honored
/// when present (loaded by `main` before this runs).
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port the HTTP server binds to. Defaults to 3000.
    pub port: u16,
    /// Active storage backend. Defaults to the in-memory store.
    pub backend: BackendType,
    /// MongoDB connection string, required when `backend` is `MongoDb`.
    pub mongodb_uri: Option<String>,
    /// MongoDB database name. Defaults to `techcorp`.
    pub mongodb_database: String,
    /// Whether to insert the demo dataset into an empty store at startup.
    pub seed: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidVar {
                name: "PORT",
                value,
            })?,
            Err(_) => 3000,
        };

        let backend = match std::env::var("STORAGE_BACKEND") {
            Ok(value) => value.parse::<BackendType>()?,
            Err(_) => BackendType::Memory,
        };

        let mongodb_uri = std::env::var("MONGODB_URI").ok();
        if backend == BackendType::MongoDb && mongodb_uri.is_none() {
            return Err(ConfigError::MissingVar("MONGODB_URI"));
        }

        let mongodb_database =
            std::env::var("MONGODB_DATABASE").unwrap_or_else(|_| "techcorp".to_string());

        let seed = match std::env::var("SEED_ON_START") {
            Ok(value) => !matches!(value.as_str(), "0" | "false" | "no"),
            Err(_) => true,
        };

        Ok(Self {
            port,
            backend,
            mongodb_uri,
            mongodb_database,
            seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_parses_known_names() {
        assert_eq!("memory".parse::<BackendType>().unwrap(), BackendType::Memory);
        assert_eq!("mongodb".parse::<BackendType>().unwrap(), BackendType::MongoDb);
        assert_eq!("Mongo".parse::<BackendType>().unwrap(), BackendType::MongoDb);
        assert!("postgres".parse::<BackendType>().is_err());
    }
}
