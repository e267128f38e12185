#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnMeta {
    pub column_name: String,   // as declared in the catalog
    pub declared_type: String, // may be empty, SQLite types are optional
    pub ordinal: usize,
    pub not_null: bool,
    pub primary_key_index: Option<usize>, // 1-based position inside the primary key
}

impl ColumnMeta {
    pub fn is_primary_key(&self) -> bool {
        self.primary_key_index.is_some()
    }

    /// Human readable summary used in generated docs, e.g. `INTEGER NOT NULL`.
    pub fn type_summary(&self) -> String {
        let mut summary = if self.declared_type.is_empty() {
            "untyped".to_string()
        } else {
            self.declared_type.clone()
        };

        if self.not_null {
            summary.push_str(" NOT NULL");
        }
        if self.is_primary_key() {
            summary.push_str(" PRIMARY KEY");
        }

        summary
    }
}
