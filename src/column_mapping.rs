use crate::naming::{ident, parameter_name, quote_sql_identifier, variant_name, UniqueNames};
use crate::types::ColumnMeta;
use proc_macro2::{Ident, TokenStream};
use quote::quote;

/// Everything the renderer needs to know about one column.
#[derive(Clone, Debug)]
pub struct ColumnMapping {
    pub variant: Ident,   // CamelCase, unique within the table
    pub parameter: Ident, // snake_case, unique within `create`
    pub sql_name: String, // quoted for SQL text
    pub doc: String,
}

impl ColumnMapping {
    pub fn variant_tokens(&self) -> TokenStream {
        let doc = &self.doc;
        let variant = &self.variant;

        quote! {
            #[doc = #doc]
            #variant
        }
    }

    pub fn as_sql_arm(&self) -> TokenStream {
        let variant = &self.variant;
        let sql_name = &self.sql_name;

        quote! {
            Self::#variant => #sql_name
        }
    }

    pub fn parameter_tokens(&self) -> TokenStream {
        let parameter = &self.parameter;

        quote! {
            #parameter: &dyn rusqlite::ToSql
        }
    }
}

pub fn column_mapping(columns: &[ColumnMeta]) -> Vec<ColumnMapping> {
    let mut variants = UniqueNames::new("");
    let mut parameters = UniqueNames::new("_");

    columns
        .iter()
        .map(|column: &ColumnMeta| {
            let variant = variants.claim(variant_name(&column.column_name));
            let parameter = parameters.claim(parameter_name(&column.column_name));

            ColumnMapping {
                variant: ident(&variant),
                parameter: ident(&parameter),
                sql_name: quote_sql_identifier(&column.column_name),
                doc: format!(" `{}`: {}", column.column_name, column.type_summary()),
            }
        })
        .collect()
}
