pub mod column_meta;
pub mod table_meta;

pub use column_meta::ColumnMeta;
pub use table_meta::{IdentifierStrategy, TableMeta};
