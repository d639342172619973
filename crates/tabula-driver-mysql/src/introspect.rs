//! Decoding of the rows MySQL's introspection statements return.
//!
//! Rows are read untyped and checked here, so an unexpected shape (a view
//! showing up where a table was expected, say) is an error rather than a
//! panic inside the row conversion.

use tabula_core::{err, schema::ColumnInfo, stmt::Value, Result};

/// Lists base tables only; `SHOW TABLES` would include views.
pub(crate) const LIST_TABLES: &str = "SHOW FULL TABLES WHERE Table_type = 'BASE TABLE'";

/// The table name from a `SHOW FULL TABLES` row.
pub(crate) fn table_name(row: Vec<Value>) -> Result<String> {
    text(row, 0)
}

/// One `DESCRIBE` row: Field, Type, Null, Key, Default, Extra.
pub(crate) fn column_info(row: Vec<Value>) -> Result<ColumnInfo> {
    let [name, ty, null, key, default, _extra] = <[Value; 6]>::try_from(row)
        .map_err(|row| err!("DESCRIBE returned {} columns, expected 6", row.len()))?;

    Ok(ColumnInfo {
        name: name.to_string_value()?,
        ty: ty.to_string_value()?,
        not_null: null.to_string_value()?.eq_ignore_ascii_case("NO"),
        primary_key: key.to_string_value()?.eq_ignore_ascii_case("PRI"),
        default: match default {
            Value::Null => None,
            default => Some(default.to_string_value()?),
        },
    })
}

/// The statement from a `SHOW CREATE TABLE` row. Views answer with four
/// columns and are rejected.
pub(crate) fn create_statement(table: &str, row: Vec<Value>) -> Result<String> {
    if row.len() != 2 {
        return Err(err!("`{table}` is not a base table"));
    }

    text(row, 1)
}

fn text(row: Vec<Value>, index: usize) -> Result<String> {
    row.into_iter()
        .nth(index)
        .ok_or_else(|| err!("row has no column {index}"))?
        .to_string_value()
}
