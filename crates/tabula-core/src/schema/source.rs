use super::TableSchema;

/// A table schema as supplied by a caller.
///
/// `Raw` holds a dialect-specific column-definition string (the part between
/// the parentheses of a `CREATE TABLE`); it is passed to the engine verbatim
/// on creation and parsed with the connection's dialect for comparisons.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaSource {
    Raw(String),
    Structured(TableSchema),
}

impl From<&str> for SchemaSource {
    fn from(src: &str) -> Self {
        Self::Raw(src.to_string())
    }
}

impl From<String> for SchemaSource {
    fn from(src: String) -> Self {
        Self::Raw(src)
    }
}

impl From<TableSchema> for SchemaSource {
    fn from(src: TableSchema) -> Self {
        Self::Structured(src)
    }
}

impl From<&TableSchema> for SchemaSource {
    fn from(src: &TableSchema) -> Self {
        Self::Structured(src.clone())
    }
}
