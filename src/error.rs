use std::path::PathBuf;

use thiserror::Error;

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Failures while reading the catalog of an open database.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("failed to list tables: {0}")]
    Catalog(#[source] sqlx::Error),

    #[error("failed to read columns of table '{table}': {source}")]
    Columns {
        table: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("table '{table}' does not exist")]
    TableNotFound { table: String },

    #[error("table '{table}' has no columns")]
    NoColumns { table: String },
}

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("{0}")]
    Usage(String),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("connection error: cannot use database '{}': {source}", .path.display())]
    Connection {
        path: PathBuf,
        #[source]
        source: sqlx::Error,
    },

    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("write error: cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GeneratorError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            GeneratorError::Usage(_) => 1,
            _ => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
