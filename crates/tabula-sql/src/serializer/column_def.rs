use super::{Comma, Formatter, Ident, ToSql};

use tabula_core::schema::{Field, TableSchema};

/// The column-definition list of a `CREATE TABLE`, one column per line.
///
/// SQLite gets its constraints inline. A composite key cannot be declared
/// inline in SQLite, so it falls back to a trailing `PRIMARY KEY (...)`
/// clause, which is what MySQL always uses.
pub(super) struct ColumnDefs<'a>(pub(super) &'a TableSchema);

struct ColumnDef<'a> {
    schema: &'a TableSchema,
    field: &'a Field,
    inline_pk: bool,
}

impl ToSql for ColumnDefs<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let schema = self.0;
        let inline_pk = f.serializer.is_sqlite() && schema.primary_key.len() == 1;

        let mut s = "";
        for field in &schema.fields {
            let column = ColumnDef {
                schema,
                field,
                inline_pk,
            };
            fmt!(f, s column);
            s = ",\n";
        }

        if !inline_pk && !schema.primary_key.is_empty() {
            let pk = Comma(schema.primary_key.iter().map(Ident));
            fmt!(f, ",\nPRIMARY KEY (" pk ")");
        }
    }
}

impl ToSql for ColumnDef<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = Ident(&self.field.name);
        let ty = &self.field.ty[..];

        fmt!(f, name " " ty);

        if self.inline_pk && self.schema.is_primary_key(&self.field.name) {
            fmt!(f, " PRIMARY KEY");
        }

        if self.schema.is_not_null(&self.field.name) {
            fmt!(f, " NOT NULL");
        }
    }
}
