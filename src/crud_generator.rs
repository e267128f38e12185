use crate::column_mapping::{column_mapping, ColumnMapping};
use crate::error::SchemaError;
use crate::naming::{ident, quote_sql_identifier, struct_base_name};
use crate::types::{ColumnMeta, IdentifierStrategy, TableMeta};
use proc_macro2::TokenStream;
use quote::quote;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub struct_suffix: String,
    pub identifier: IdentifierStrategy,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            struct_suffix: "Crud".into(),
            identifier: IdentifierStrategy::default(),
        }
    }
}

pub fn struct_name(table: &TableMeta, options: &RenderOptions) -> String {
    format!("{}{}", struct_base_name(&table.table_name), options.struct_suffix)
}

pub fn column_enum_name(table: &TableMeta) -> String {
    format!("{}Column", struct_base_name(&table.table_name))
}

pub fn insert_statement(table: &TableMeta) -> String {
    let columns: Vec<String> = table
        .columns
        .iter()
        .map(|column: &ColumnMeta| quote_sql_identifier(&column.column_name))
        .collect();
    let placeholders = vec!["?"; columns.len()];

    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote_sql_identifier(&table.table_name),
        columns.join(", "),
        placeholders.join(", ")
    )
}

pub fn select_statement(table: &TableMeta) -> String {
    format!("SELECT * FROM {}", quote_sql_identifier(&table.table_name))
}

/// Head of the update statement; the assignment list follows at runtime.
pub fn update_statement_head(table: &TableMeta) -> String {
    format!("UPDATE {} SET ", quote_sql_identifier(&table.table_name))
}

/// ` WHERE "<identifier>" = ?`, shared by update and delete.
pub fn identifier_predicate(identifier: &ColumnMeta) -> String {
    format!(" WHERE {} = ?", quote_sql_identifier(&identifier.column_name))
}

pub fn delete_statement(table: &TableMeta, identifier: &ColumnMeta) -> String {
    format!(
        "DELETE FROM {}{}",
        quote_sql_identifier(&table.table_name),
        identifier_predicate(identifier)
    )
}

/// Renders the column enum and the CRUD struct for one table.
pub fn generate_table_crud(
    table: &TableMeta,
    options: &RenderOptions,
) -> Result<TokenStream, SchemaError> {
    let identifier = table
        .identifier_column(options.identifier)
        .ok_or_else(|| SchemaError::NoColumns {
            table: table.table_name.clone(),
        })?;

    let struct_ident = ident(&struct_name(table, options));
    let column_enum = ident(&column_enum_name(table));
    let struct_doc = format!(" CRUD operations on table `{}`.", table.table_name);
    let enum_doc = format!(" Columns of table `{}`.", table.table_name);

    let mappings: Vec<ColumnMapping> = column_mapping(&table.columns);
    let variants: Vec<TokenStream> = mappings.iter().map(ColumnMapping::variant_tokens).collect();
    let sql_arms: Vec<TokenStream> = mappings.iter().map(ColumnMapping::as_sql_arm).collect();
    let parameters: Vec<TokenStream> = mappings.iter().map(ColumnMapping::parameter_tokens).collect();
    let arguments: Vec<_> = mappings.iter().map(|mapping| &mapping.parameter).collect();

    let insert_sql = insert_statement(table);
    let select_sql = select_statement(table);
    let update_head = update_statement_head(table);
    let update_predicate = identifier_predicate(identifier);
    let delete_sql = delete_statement(table, identifier);

    Ok(quote! {
        #[doc = #enum_doc]
        #[allow(non_camel_case_types)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum #column_enum {
            #(#variants),*
        }

        impl #column_enum {
            pub const fn as_sql(self) -> &'static str {
                match self {
                    #(#sql_arms),*
                }
            }
        }

        #[doc = #struct_doc]
        #[allow(non_camel_case_types)]
        pub struct #struct_ident<'a> {
            conn: &'a rusqlite::Connection,
        }

        impl<'a> #struct_ident<'a> {
            pub fn new(conn: &'a rusqlite::Connection) -> Self {
                Self { conn }
            }

            pub fn create(&self, #(#parameters),*) -> rusqlite::Result<usize> {
                self.conn.execute(#insert_sql, rusqlite::params![#(#arguments),*])
            }

            pub fn read(
                &self,
                filters: &[(#column_enum, &dyn rusqlite::ToSql)],
            ) -> rusqlite::Result<Vec<Vec<rusqlite::types::Value>>> {
                let mut sql = String::from(#select_sql);
                if !filters.is_empty() {
                    let clauses: Vec<String> = filters
                        .iter()
                        .map(|(column, _)| format!("{} = ?", column.as_sql()))
                        .collect();
                    sql.push_str(" WHERE ");
                    sql.push_str(&clauses.join(" AND "));
                }
                let values: Vec<&dyn rusqlite::ToSql> =
                    filters.iter().map(|(_, value)| *value).collect();

                let mut statement = self.conn.prepare(&sql)?;
                let width = statement.column_count();
                let rows = statement.query_map(values.as_slice(), |row| {
                    (0..width)
                        .map(|index| row.get::<_, rusqlite::types::Value>(index))
                        .collect::<rusqlite::Result<Vec<_>>>()
                })?;
                rows.collect::<rusqlite::Result<Vec<_>>>()
            }

            pub fn update(
                &self,
                id: &dyn rusqlite::ToSql,
                updates: &[(#column_enum, &dyn rusqlite::ToSql)],
            ) -> rusqlite::Result<usize> {
                if updates.is_empty() {
                    return Ok(0);
                }
                let assignments: Vec<String> = updates
                    .iter()
                    .map(|(column, _)| format!("{} = ?", column.as_sql()))
                    .collect();
                let mut sql = String::from(#update_head);
                sql.push_str(&assignments.join(", "));
                sql.push_str(#update_predicate);

                let mut values: Vec<&dyn rusqlite::ToSql> =
                    updates.iter().map(|(_, value)| *value).collect();
                values.push(id);
                self.conn.execute(&sql, values.as_slice())
            }

            pub fn delete(&self, id: &dyn rusqlite::ToSql) -> rusqlite::Result<usize> {
                self.conn.execute(#delete_sql, rusqlite::params![id])
            }
        }
    })
}
