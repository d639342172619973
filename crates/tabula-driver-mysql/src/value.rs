use mysql_async::{consts::ColumnType, prelude::ToValue, Row, Value as MySqlValue};
use tabula_core::{err, stmt::Value as CoreValue, Error, Result};

/// A borrowed core value bound as a statement parameter.
#[derive(Debug)]
pub(crate) struct Value<'a>(pub(crate) &'a CoreValue);

impl ToValue for Value<'_> {
    fn to_value(&self) -> MySqlValue {
        match self.0 {
            CoreValue::Null => MySqlValue::NULL,
            CoreValue::I64(value) => value.to_value(),
            CoreValue::F64(value) => value.to_value(),
            CoreValue::String(value) => value.to_value(),
        }
    }
}

impl Value<'_> {
    /// Takes the value at `index` out of `row`.
    pub(crate) fn take_from(row: &mut Row, index: usize) -> Result<CoreValue> {
        let column_type = row
            .columns_ref()
            .get(index)
            .map(|column| column.column_type())
            .ok_or_else(|| err!("row has no column {index}"))?;

        let value: MySqlValue = row
            .take(index)
            .ok_or_else(|| err!("row has no column {index}"))?;

        Self::from_sql(value, column_type)
    }

    pub(crate) fn from_sql(value: MySqlValue, column_type: ColumnType) -> Result<CoreValue> {
        Ok(match value {
            MySqlValue::NULL => CoreValue::Null,
            MySqlValue::Bytes(bytes) => match String::from_utf8(bytes) {
                Ok(value) => CoreValue::String(value),
                Err(_) => return Err(Error::type_conversion("binary data", "String")),
            },
            MySqlValue::Int(value) => CoreValue::I64(value),
            MySqlValue::UInt(value) => match i64::try_from(value) {
                Ok(value) => CoreValue::I64(value),
                Err(_) => return Err(Error::type_conversion(format!("unsigned {value}"), "i64")),
            },
            MySqlValue::Float(value) => CoreValue::F64(value.into()),
            MySqlValue::Double(value) => CoreValue::F64(value),
            MySqlValue::Date(year, month, day, hour, minute, second, micros) => {
                let mut text = format!("{year:04}-{month:02}-{day:02}");
                if column_type != ColumnType::MYSQL_TYPE_DATE {
                    text.push_str(&format!(" {hour:02}:{minute:02}:{second:02}"));
                    if micros != 0 {
                        text.push_str(&format!(".{micros:06}"));
                    }
                }
                CoreValue::String(text)
            }
            MySqlValue::Time(negative, days, hours, minutes, seconds, micros) => {
                let sign = if negative { "-" } else { "" };
                let hours = u64::from(days) * 24 + u64::from(hours);
                let mut text = format!("{sign}{hours:02}:{minutes:02}:{seconds:02}");
                if micros != 0 {
                    text.push_str(&format!(".{micros:06}"));
                }
                CoreValue::String(text)
            }
        })
    }
}
