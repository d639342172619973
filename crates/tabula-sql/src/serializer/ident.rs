use super::{Formatter, ToSql};

pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> Ident<S> {
    pub(super) fn write(&self, dst: &mut String) {
        let name = self.0.as_ref();

        if name.starts_with('`') || name.ends_with('`') {
            dst.push_str(name);
            return;
        }

        dst.push('`');
        for ch in name.chars() {
            if ch == '`' {
                dst.push('`');
            }
            dst.push(ch);
        }
        dst.push('`');
    }
}

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        self.write(f.dst);
    }
}
