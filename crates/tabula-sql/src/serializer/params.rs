use super::{Flavor, Formatter, ToSql};

/// A positional statement parameter.
pub struct Placeholder;

impl ToSql for Placeholder {
    fn to_sql(self, f: &mut Formatter<'_>) {
        use std::fmt::Write;

        f.placeholders += 1;

        match f.serializer.flavor {
            Flavor::Mysql => f.dst.push('?'),
            Flavor::Sqlite => {
                let _ = write!(f.dst, "?{}", f.placeholders);
            }
        }
    }
}
