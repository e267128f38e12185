use super::column_meta::ColumnMeta;
use serde_derive::Deserialize;

/// How the column targeted by `update` and `delete` is chosen.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum IdentifierStrategy {
    /// First column of the declared primary key, falling back to ordinal zero.
    #[default]
    PrimaryKey,
    /// Always ordinal zero.
    FirstColumn,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableMeta {
    pub table_name: String,
    pub columns: Vec<ColumnMeta>, // ordered by ordinal
}

impl TableMeta {
    pub fn identifier_column(&self, strategy: IdentifierStrategy) -> Option<&ColumnMeta> {
        match strategy {
            IdentifierStrategy::PrimaryKey => self
                .columns
                .iter()
                .find(|column: &&ColumnMeta| column.primary_key_index == Some(1))
                .or_else(|| self.columns.first()),
            IdentifierStrategy::FirstColumn => self.columns.first(),
        }
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(|column: &ColumnMeta| column.column_name.as_str())
            .collect()
    }
}
