//! Common error types for Quill services

use thiserror::Error;

/// Common result type for Quill operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised below the HTTP layer (store, config, startup)
#[derive(Error, Debug)]
pub enum Error {
    /// Record store failure (wraps sqlx::Error)
    #[error("Record store error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O error while reading config or creating the database directory
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed TOML config file
    #[error("Config file {path} is invalid: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Invalid configuration value (bad port, empty URL, ...)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Primary record absent from the local store
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },
}

impl Error {
    /// Shorthand for a missing record
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Error::NotFound { entity, id }
    }
}
