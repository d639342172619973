use super::{Flavor, Formatter, ToSql};

use tabula_core::stmt::Value;

impl ToSql for &Value {
    fn to_sql(self, f: &mut Formatter<'_>) {
        use std::fmt::Write;

        match self {
            Value::Null => f.dst.push_str("NULL"),
            Value::I64(v) => {
                let _ = write!(f.dst, "{v}");
            }
            // Neither engine has a literal for NaN or infinity
            Value::F64(v) if !v.is_finite() => f.dst.push_str("NULL"),
            Value::F64(v) => {
                let _ = write!(f.dst, "{v:?}");
            }
            Value::String(v) => {
                // MySQL also treats backslash as an escape character
                let escape_backslash = matches!(f.serializer.flavor, Flavor::Mysql);

                f.dst.push('\'');
                for ch in v.chars() {
                    if ch == '\'' || (escape_backslash && ch == '\\') {
                        f.dst.push(ch);
                    }
                    f.dst.push(ch);
                }
                f.dst.push('\'');
            }
        }
    }
}
