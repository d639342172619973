use super::Formatter;

/// Writes each fragment in turn. Fragments are single tokens: literals or
/// local bindings implementing `ToSql`.
macro_rules! fmt {
    ($f:expr, $( $fragments:tt )*) => {{
        $(
            $fragments.to_sql($f);
        )*
    }};
}

pub(super) trait ToSql {
    fn to_sql(self, f: &mut Formatter<'_>);
}

impl ToSql for &str {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}
