/// One row of a dialect's column introspection output (`PRAGMA table_info`
/// for SQLite, `DESCRIBE` for MySQL), normalized to a common shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    /// Column name
    pub name: String,

    /// Declared type, as the engine reports it
    pub ty: String,

    /// True when the column rejects nulls
    pub not_null: bool,

    /// True when the column is part of the primary key
    pub primary_key: bool,

    /// Default value expression, if any
    pub default: Option<String>,
}
