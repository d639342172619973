#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::Placeholder;

// Fragment serializers
mod column_def;
mod statement;
mod value;

use crate::{parse, stmt::Statement};

use tabula_core::{schema::TableSchema, stmt::Value, Dialect, Result};

/// Serialize statements, literals, and DDL for one SQL dialect.
#[derive(Debug)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects.
    flavor: Flavor,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Number of placeholders emitted so far
    placeholders: usize,
}

impl Serializer {
    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            placeholders: 0,
        };

        stmt.to_sql(&mut fmt);
        ret
    }

    pub fn dialect(&self) -> Dialect {
        match self.flavor {
            Flavor::Sqlite => Dialect::Sqlite,
            Flavor::Mysql => Dialect::Mysql,
        }
    }

    /// Wrap a bare name in backticks, doubling any backtick it contains.
    /// Names that already start or end with a backtick are returned as-is.
    pub fn quote_ident(name: &str) -> String {
        let mut ret = String::new();
        Ident(name).write(&mut ret);
        ret
    }

    /// Render `value` as a SQL literal.
    pub fn literal(&self, value: &Value) -> String {
        self.render(|f| value.to_sql(f))
    }

    /// Render the column-definition list of a `CREATE TABLE` for `schema`.
    pub fn render_ddl(&self, schema: &TableSchema) -> String {
        self.render(|f| column_def::ColumnDefs(schema).to_sql(f))
    }

    /// Parse a column-definition list written in this dialect.
    pub fn parse_schema(&self, raw: &str) -> Result<TableSchema> {
        parse::parse_schema(self.dialect(), raw)
    }

    fn render(&self, body: impl FnOnce(&mut Formatter<'_>)) -> String {
        let mut ret = String::new();
        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            placeholders: 0,
        };
        body(&mut fmt);
        ret
    }

    fn is_sqlite(&self) -> bool {
        matches!(self.flavor, Flavor::Sqlite)
    }
}
