use crate::error::{GeneratorError, SchemaError};
use crate::types::{ColumnMeta, TableMeta};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::Connection;
use std::path::Path;
use tracing::debug;

const LIST_TABLES: &str = "SELECT name FROM sqlite_master WHERE type = 'table'";

const LIST_COLUMNS: &str =
    "SELECT cid, name, type, \"notnull\", pk FROM pragma_table_info(?1) ORDER BY cid";

/// Opens `path` read-only and checks that it really is a SQLite database.
///
/// The file is never created; a missing, unreadable or non-database file
/// fails with [`GeneratorError::Connection`].
pub async fn connect(path: &Path) -> Result<SqliteConnection, GeneratorError> {
    let connection_error = |source: sqlx::Error| GeneratorError::Connection {
        path: path.to_path_buf(),
        source,
    };

    let options = SqliteConnectOptions::new()
        .filename(path)
        .read_only(true)
        .create_if_missing(false);

    let mut connection = SqliteConnection::connect_with(&options)
        .await
        .map_err(connection_error)?;

    // SQLite opens lazily, the header is only checked on first read
    sqlx::query("SELECT count(*) FROM sqlite_master")
        .execute(&mut connection)
        .await
        .map_err(connection_error)?;

    debug!(database = %path.display(), "connected");

    Ok(connection)
}

/// Table names in catalog order. Engine-internal `sqlite_*` tables are
/// skipped unless `include_internal` is set.
pub async fn list_tables(
    connection: &mut SqliteConnection,
    include_internal: bool,
) -> Result<Vec<String>, SchemaError> {
    let rows: Vec<(String,)> = sqlx::query_as(LIST_TABLES)
        .fetch_all(&mut *connection)
        .await
        .map_err(SchemaError::Catalog)?;

    Ok(rows
        .into_iter()
        .map(|(name,)| name)
        .filter(|name: &String| include_internal || !name.starts_with("sqlite_"))
        .collect())
}

pub async fn list_columns(
    connection: &mut SqliteConnection,
    table_name: &str,
) -> Result<Vec<ColumnMeta>, SchemaError> {
    let rows: Vec<(i64, String, String, i64, i64)> = sqlx::query_as(LIST_COLUMNS)
        .bind(table_name)
        .fetch_all(&mut *connection)
        .await
        .map_err(|source| SchemaError::Columns {
            table: table_name.to_string(),
            source,
        })?;

    // pragma_table_info yields nothing for an unknown table instead of failing
    if rows.is_empty() {
        return Err(SchemaError::TableNotFound {
            table: table_name.to_string(),
        });
    }

    Ok(rows
        .into_iter()
        .map(|(cid, name, declared_type, not_null, pk)| ColumnMeta {
            column_name: name,
            declared_type,
            ordinal: usize::try_from(cid).unwrap_or_default(),
            not_null: not_null != 0,
            primary_key_index: usize::try_from(pk).ok().filter(|index| *index > 0),
        })
        .collect())
}

/// Reads every table and its columns, preserving catalog order.
pub async fn get_database_schema(
    connection: &mut SqliteConnection,
    include_internal: bool,
) -> Result<Vec<TableMeta>, SchemaError> {
    let table_names = list_tables(connection, include_internal).await?;
    let mut tables = Vec::with_capacity(table_names.len());

    for table_name in table_names {
        let columns = list_columns(connection, &table_name).await?;
        debug!(table = %table_name, columns = columns.len(), "discovered table");

        tables.push(TableMeta {
            table_name,
            columns,
        });
    }

    Ok(tables)
}
