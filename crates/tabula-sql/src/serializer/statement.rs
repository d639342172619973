use super::{column_def::ColumnDefs, Comma, Formatter, Ident, Placeholder, ToSql};

use crate::stmt::{self, InsertValues, Statement};

use tabula_core::SchemaSource;

impl ToSql for &Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::DropTable(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = Ident(&self.name);

        fmt!(f, "CREATE TABLE " name " (");

        match &self.columns {
            SchemaSource::Raw(raw) => {
                let raw = &raw[..];
                fmt!(f, raw);
            }
            SchemaSource::Structured(schema) => {
                let columns = ColumnDefs(schema);
                fmt!(f, columns);
            }
        }

        fmt!(f, ")");
    }
}

impl ToSql for &stmt::DropTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = Ident(&self.name);

        if self.if_exists {
            fmt!(f, "DROP TABLE IF EXISTS " name);
        } else {
            fmt!(f, "DROP TABLE " name);
        }
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = Ident(&self.table);
        let columns = Comma(self.columns.iter().map(Ident));

        fmt!(f, "INSERT INTO " table " (" columns ") VALUES (");

        match &self.values {
            InsertValues::Literals(values) => {
                let values = Comma(values);
                fmt!(f, values);
            }
            InsertValues::Placeholders => {
                let placeholders = Comma(self.columns.iter().map(|_| Placeholder));
                fmt!(f, placeholders);
            }
        }

        fmt!(f, ")");
    }
}

impl ToSql for &stmt::Update {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = Ident(&self.table);
        let assignments = Comma(self.assignments.iter().map(Assignment));
        let condition = Condition(&self.condition);

        fmt!(f, "UPDATE " table " SET " assignments condition);
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = Ident(&self.table);
        let condition = Condition(&self.condition);

        fmt!(f, "DELETE FROM " table condition);
    }
}

impl ToSql for &stmt::Select {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let fields = Comma(self.fields.iter().map(Ident));
        let table = Ident(&self.table);
        let condition = Condition(&self.condition);

        fmt!(f, "SELECT " fields " FROM " table condition);
    }
}

struct Assignment<'a>(&'a (String, tabula_core::stmt::Value));

impl ToSql for Assignment<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let (name, value) = self.0;
        let name = Ident(name);

        fmt!(f, name "=" value);
    }
}

/// A caller-supplied trailing clause, written verbatim after a separating
/// space. Empty conditions write nothing.
struct Condition<'a>(&'a str);

impl ToSql for Condition<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let condition = self.0.trim();

        if !condition.is_empty() {
            fmt!(f, " " condition);
        }
    }
}
