use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};
use tabula_core::{stmt::Value as CoreValue, Error, Result};

/// A borrowed core value bound as a statement parameter.
#[derive(Debug)]
pub(crate) struct Value<'a>(pub(crate) &'a CoreValue);

impl Value<'_> {
    /// Converts a value read from a result row into a core value.
    pub(crate) fn from_sql(value: SqlValue) -> Result<CoreValue> {
        Ok(match value {
            SqlValue::Null => CoreValue::Null,
            SqlValue::Integer(value) => CoreValue::I64(value),
            SqlValue::Real(value) => CoreValue::F64(value),
            SqlValue::Text(value) => CoreValue::String(value),
            // Text stored with blob affinity still decodes as text
            SqlValue::Blob(value) => match String::from_utf8(value) {
                Ok(value) => CoreValue::String(value),
                Err(_) => return Err(Error::type_conversion("BLOB", "String")),
            },
        })
    }
}

impl ToSql for Value<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self.0 {
            CoreValue::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
            CoreValue::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            CoreValue::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            CoreValue::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
        }
    }
}
