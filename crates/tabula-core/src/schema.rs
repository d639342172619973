mod column_info;
pub use column_info::ColumnInfo;

mod source;
pub use source::SchemaSource;

mod table_schema;
pub use table_schema::{Field, TableSchema};

mod ty;
pub use ty::TypeFamily;

mod verify;
