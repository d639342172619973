mod dialect;
pub use dialect::Dialect;

use crate::{async_trait, schema::ColumnInfo, stmt::ValueRecord, Result};

use std::{borrow::Cow, fmt::Debug};

/// Factory for connections to one database.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// The SQL dialect spoken by connections from this driver.
    fn dialect(&self) -> Dialect;

    /// The connection target, for diagnostics.
    fn url(&self) -> Cow<'_, str>;

    /// Open a new connection.
    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// A live handle to one database instance.
///
/// Implementations execute one statement at a time; callers never issue
/// concurrent operations on the same connection.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    fn dialect(&self) -> Dialect;

    /// Names of all tables in the database.
    async fn list_tables(&mut self) -> Result<Vec<String>>;

    /// Column introspection for `table`, in column order.
    async fn describe_table(&mut self, table: &str) -> Result<Vec<ColumnInfo>>;

    /// The column-definition text of `table`'s CREATE statement: everything
    /// between the first `(` and the last `)`.
    async fn table_schema_source(&mut self, table: &str) -> Result<String>;

    /// Execute a statement that returns no rows, returning the number of
    /// affected rows.
    async fn exec(&mut self, sql: &str) -> Result<u64>;

    /// Execute a parameterized statement once per row, as one batch.
    async fn exec_many(&mut self, sql: &str, rows: Vec<ValueRecord>) -> Result<u64>;

    /// Execute a query, returning each row as `width` positional values.
    async fn query(&mut self, sql: &str, width: usize) -> Result<Vec<ValueRecord>>;

    /// Commit the pending transaction, if any.
    async fn commit(&mut self) -> Result<()>;

    /// Roll back the pending transaction, if any.
    async fn rollback(&mut self) -> Result<()>;

    /// Release the connection. Uncommitted work is discarded. Closing an
    /// already closed connection does nothing; any other operation on it
    /// fails with [`Error::connection_closed`](crate::Error::connection_closed).
    async fn close(&mut self) -> Result<()>;
}
