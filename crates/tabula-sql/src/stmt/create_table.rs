use super::Statement;

use tabula_core::SchemaSource;

/// A statement to create a SQL table.
#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table
    pub name: String,

    /// Column definitions, either raw dialect text or a structured schema
    pub columns: SchemaSource,
}

impl Statement {
    pub fn create_table(name: impl Into<String>, columns: impl Into<SchemaSource>) -> Self {
        CreateTable {
            name: name.into(),
            columns: columns.into(),
        }
        .into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
