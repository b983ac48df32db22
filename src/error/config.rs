use thiserror::Error;

/// Errors raised while resolving [`crate::config::Config`] from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {name}: {value:?}")]
    InvalidVar { name: &'static str, value: String },
}
