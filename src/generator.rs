use crate::config::GeneratorConfig;
use crate::crud_generator::{generate_table_crud, struct_name, RenderOptions};
use crate::database_schema::{connect, get_database_schema};
use crate::error::{GeneratorError, Result};
use crate::file_emitter::{format_output, output_path, render_source, write_output};
use crate::types::TableMeta;
use proc_macro2::TokenStream;
use sqlx::Connection;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub database: PathBuf,
    pub output: PathBuf,
    pub tables: Vec<String>,
}

/// Renders every table, warning about tables whose struct names collide.
pub fn render_tables(tables: &[TableMeta], options: &RenderOptions) -> Result<Vec<TokenStream>> {
    let mut owners: HashMap<String, &str> = HashMap::new();

    tables
        .iter()
        .map(|table: &TableMeta| {
            let name = struct_name(table, options);
            if let Some(previous) = owners.insert(name.clone(), &table.table_name) {
                warn!(
                    struct_name = %name,
                    first = %previous,
                    second = %table.table_name,
                    "tables map to the same struct name"
                );
            }

            generate_table_crud(table, options).map_err(GeneratorError::from)
        })
        .collect()
}

/// Connect, enumerate, render, write, close, format.
///
/// Everything is rendered in memory first, so a failure before the write
/// leaves any existing output file untouched.
pub async fn generate_crud_file(
    database: &Path,
    config: &GeneratorConfig,
) -> Result<GenerationReport> {
    let output = output_path(database, config)?;

    let mut connection = connect(database).await?;
    let tables = get_database_schema(&mut connection, config.include_internal_tables).await?;
    info!(database = %database.display(), tables = tables.len(), "schema read");

    let blocks = render_tables(&tables, &config.render_options())?;
    let source = render_source(database, &blocks);

    write_output(&output, &source)?;
    info!(output = %output.display(), bytes = source.len(), "output written");

    connection
        .close()
        .await
        .map_err(|source| GeneratorError::Connection {
            path: database.to_path_buf(),
            source,
        })?;

    if config.rustfmt {
        format_output(&output);
    }

    Ok(GenerationReport {
        database: database.to_path_buf(),
        output,
        tables: tables.into_iter().map(|table| table.table_name).collect(),
    })
}
