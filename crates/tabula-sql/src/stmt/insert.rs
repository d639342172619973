use super::Statement;

use tabula_core::stmt::Value;

#[derive(Debug, Clone)]
pub struct Insert {
    pub table: String,

    /// Target columns, in the order of the values
    pub columns: Vec<String>,

    pub values: InsertValues,
}

#[derive(Debug, Clone)]
pub enum InsertValues {
    /// One literal per column
    Literals(Vec<Value>),

    /// One placeholder per column, bound at execution time
    Placeholders,
}

impl Statement {
    pub fn insert(table: impl Into<String>, columns: Vec<String>, values: Vec<Value>) -> Self {
        debug_assert_eq!(columns.len(), values.len());

        Insert {
            table: table.into(),
            columns,
            values: InsertValues::Literals(values),
        }
        .into()
    }

    pub fn insert_placeholders(table: impl Into<String>, columns: Vec<String>) -> Self {
        Insert {
            table: table.into(),
            columns,
            values: InsertValues::Placeholders,
        }
        .into()
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
