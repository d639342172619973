mod builder;
pub use builder::Builder;

mod fields;
pub use fields::Fields;

mod table;
pub use table::Table;

use crate::{
    driver::{Connection, Dialect, Driver},
    Result,
};

use indexmap::IndexMap;
use std::borrow::Cow;
use tabula_core::{err, schema::ColumnInfo, Error, SchemaSource, TableSchema};
use tabula_sql::{Serializer, Statement};
use tracing::debug;

/// A database handle speaking one dialect over at most one connection.
///
/// Every operation takes `&mut self` and runs to completion before the next
/// one starts. The handle remembers the field order of each table bound with
/// [`bind_table`](Db::bind_table); positional inserts rely on it.
#[derive(Debug)]
pub struct Db {
    driver: Box<dyn Driver>,

    /// `None` until opened, and again once closed
    connection: Option<Box<dyn Connection>>,

    serializer: Serializer,

    autocommit: bool,

    /// Table name to live field order
    bindings: IndexMap<String, Vec<String>>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn dialect(&self) -> Dialect {
        self.driver.dialect()
    }

    pub fn url(&self) -> Cow<'_, str> {
        self.driver.url()
    }

    pub fn is_open(&self) -> bool {
        self.connection.is_some()
    }

    pub fn autocommit(&self) -> bool {
        self.autocommit
    }

    pub fn set_autocommit(&mut self, autocommit: bool) {
        self.autocommit = autocommit;
    }

    /// Connect to the database. An already open connection is closed first.
    pub async fn open(&mut self) -> Result<()> {
        self.close().await?;

        debug!(url = %self.driver.url(), "opening connection");
        self.connection = Some(self.driver.connect().await?);
        Ok(())
    }

    /// Release the connection, discarding uncommitted work and forgetting
    /// all bindings. Does nothing when not open.
    pub async fn close(&mut self) -> Result<()> {
        self.bindings.clear();

        let Some(mut connection) = self.connection.take() else {
            return Ok(());
        };

        debug!(url = %self.driver.url(), "closing connection");
        connection.close().await
    }

    pub async fn commit(&mut self) -> Result<()> {
        self.connection()?.commit().await
    }

    pub async fn rollback(&mut self) -> Result<()> {
        self.connection()?.rollback().await
    }

    pub async fn list_tables(&mut self) -> Result<Vec<String>> {
        self.connection()?.list_tables().await
    }

    pub async fn describe_table(&mut self, table: &str) -> Result<Vec<ColumnInfo>> {
        self.connection()?.describe_table(table).await
    }

    /// The live schema of `table`, parsed from its CREATE statement.
    pub async fn table_schema(&mut self, table: &str) -> Result<TableSchema> {
        let source = self.connection()?.table_schema_source(table).await?;
        self.serializer.parse_schema(&source)
    }

    /// Create `table`. A raw schema is passed to the database verbatim; a
    /// structured one is checked and rendered in this dialect.
    pub async fn create_table(&mut self, table: &str, schema: impl Into<SchemaSource>) -> Result<()> {
        let columns = schema.into();

        if let SchemaSource::Structured(schema) = &columns {
            schema.verify()?;
        }

        self.exec(&Statement::create_table(table, columns)).await?;
        Ok(())
    }

    /// Drop `table` if it exists, forgetting its binding.
    pub async fn drop_table(&mut self, table: &str) -> Result<()> {
        self.exec(&Statement::drop_table_if_exists(table)).await?;
        self.bindings.shift_remove(table);
        Ok(())
    }

    /// Make `table` available to positional inserts and to [`Db::bound`].
    ///
    /// A missing table is created from `schema`. An existing table must match
    /// `schema` when one is given; on a mismatch the table is left untouched
    /// and a schema-conflict error is returned. Either way the live field
    /// order is cached, replacing any earlier binding.
    pub async fn bind_table(&mut self, table: &str, schema: Option<SchemaSource>) -> Result<()> {
        // Embedded table names are case-insensitive
        let ignore_case = self.dialect().is_embedded();
        let exists = self.list_tables().await?.iter().any(|name| {
            name == table || (ignore_case && name.eq_ignore_ascii_case(table))
        });

        match (exists, schema) {
            (false, None) => {
                return Err(Error::missing_binding(format!(
                    "table `{table}` does not exist and no schema was given"
                )))
            }
            (false, Some(schema)) => self.create_table(table, schema).await?,
            (true, Some(schema)) => {
                let expected = self.resolve_schema(schema)?;
                let live = self.table_schema(table).await?;

                expected
                    .verify_matches(&live)
                    .map_err(|e| e.context(err!("binding table `{table}`")))?;
            }
            (true, None) => {}
        }

        let fields: Vec<_> = self
            .describe_table(table)
            .await?
            .into_iter()
            .map(|column| column.name)
            .collect();

        debug!(table, fields = fields.len(), "bound table");
        self.bindings.insert(table.to_string(), fields);
        Ok(())
    }

    /// Field order cached for `table` by [`Db::bind_table`].
    pub fn bound_fields(&self, table: &str) -> Option<&[String]> {
        self.bindings.get(table).map(Vec::as_slice)
    }

    pub fn bound_tables(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    /// Target a table by name.
    pub fn table(&mut self, name: impl Into<String>) -> Table<'_> {
        Table::new(self, name.into())
    }

    /// Target the one bound table. Fails with a missing-binding error when
    /// zero or several tables are bound.
    pub fn bound(&mut self) -> Result<Table<'_>> {
        let name = match self.bindings.len() {
            1 => self.bindings.keys().next().cloned(),
            _ => None,
        };

        let Some(name) = name else {
            return Err(Error::missing_binding(format!(
                "{} tables are bound; name the target table",
                self.bindings.len()
            )));
        };

        Ok(self.table(name))
    }

    fn connection(&mut self) -> Result<&mut Box<dyn Connection>> {
        self.connection.as_mut().ok_or_else(Error::connection_closed)
    }

    fn resolve_schema(&self, schema: SchemaSource) -> Result<TableSchema> {
        match schema {
            SchemaSource::Raw(raw) => self.serializer.parse_schema(&raw),
            SchemaSource::Structured(schema) => {
                schema.verify()?;
                Ok(schema)
            }
        }
    }

    /// Run a statement that returns no rows. Data changes are committed right
    /// away when autocommit is on.
    async fn exec(&mut self, stmt: &Statement) -> Result<u64> {
        let sql = self.serializer.serialize(stmt);
        let count = self.connection()?.exec(&sql).await?;

        if self.autocommit && stmt.is_mutation() {
            self.commit().await?;
        }

        Ok(count)
    }
}
