//! Generates rusqlite data-access structs from the schema of a SQLite database.
//!
//! [`generator::generate_crud_file`] connects to the database, reads the
//! catalog, renders one CRUD struct per table and writes a single Rust source
//! file next to the database.

pub mod column_mapping;
pub mod config;
pub mod crud_generator;
pub mod database_schema;
pub mod error;
pub mod file_emitter;
pub mod generator;
pub mod naming;
pub mod types;

pub use config::GeneratorConfig;
pub use error::{ConfigError, GeneratorError, SchemaError};
pub use generator::{generate_crud_file, GenerationReport};
