mod retry;
pub use retry::LockRetry;

mod transaction;
use transaction::StatementKind;

mod value;
use value::Value;

use rusqlite::{types::Value as SqlValue, Connection as RusqliteConnection, OptionalExtension};
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
    time::Duration,
};
use tabula_core::{
    async_trait,
    driver::{Dialect, Driver},
    err,
    schema::ColumnInfo,
    stmt::ValueRecord,
    Error, Result,
};
use tabula_sql::{parse, Serializer};
use tracing::{debug, warn};
use url::Url;

#[derive(Debug)]
pub struct Sqlite {
    target: Target,
    lock_retry: LockRetry,
    busy_timeout: Duration,
}

#[derive(Debug, Clone)]
enum Target {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver from a `sqlite:<path>` or `sqlite::memory:`
    /// connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url_str}"))
        })?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        match url.path() {
            "" => Err(Error::invalid_connection_url(format!(
                "connection URL names no database file; url={url_str}"
            ))),
            ":memory:" => Ok(Self::in_memory()),
            path => Ok(Self::open(path)),
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::with_target(Target::InMemory)
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::with_target(Target::File(path.as_ref().to_path_buf()))
    }

    fn with_target(target: Target) -> Self {
        Self {
            target,
            lock_retry: LockRetry::default(),
            busy_timeout: Duration::ZERO,
        }
    }

    /// Set how often a statement is attempted while the database is locked,
    /// and how long to wait between attempts.
    pub fn lock_retry(mut self, attempts: u32, delay: Duration) -> Self {
        self.lock_retry = LockRetry::new(attempts, delay);
        self
    }

    /// Set how long SQLite itself waits on a lock before reporting it. Zero
    /// (the default) reports immediately and leaves waiting to the lock
    /// retry.
    pub fn busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    fn url(&self) -> Cow<'_, str> {
        match &self.target {
            Target::InMemory => Cow::Borrowed("sqlite::memory:"),
            Target::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    async fn connect(&self) -> Result<Box<dyn tabula_core::Connection>> {
        let connection = match &self.target {
            Target::File(path) => RusqliteConnection::open(path),
            Target::InMemory => RusqliteConnection::open_in_memory(),
        }
        .map_err(Error::statement_failed)?;

        connection
            .busy_timeout(self.busy_timeout)
            .map_err(Error::statement_failed)?;

        Ok(Box::new(Connection {
            connection: Some(connection),
            lock_retry: self.lock_retry,
        }))
    }
}

#[derive(Debug)]
pub struct Connection {
    /// `None` once closed
    connection: Option<RusqliteConnection>,
    lock_retry: LockRetry,
}

impl Connection {
    fn connection(&self) -> Result<&RusqliteConnection> {
        self.connection.as_ref().ok_or_else(Error::connection_closed)
    }

    /// Runs `op`, retrying while the database is locked by another
    /// connection. An exhausted retry surfaces as a statement failure.
    async fn retry_locked<T>(
        &mut self,
        sql: &str,
        mut op: impl FnMut(&RusqliteConnection) -> rusqlite::Result<T> + Send,
    ) -> Result<T> {
        let LockRetry { attempts, delay } = self.lock_retry;
        let mut attempt = 1;

        loop {
            let result = op(self.connection()?);

            match result {
                Ok(ret) => return Ok(ret),
                Err(err) if retry::is_locked(&err) && attempt < attempts => {
                    warn!(attempt, attempts, sql, "database is locked; retrying in {delay:?}");
                    drop(err);
                    attempt += 1;
                    tokio::time::sleep(delay).await;
                }
                Err(err) if retry::is_locked(&err) => {
                    return Err(Error::statement_failed(Error::locked_resource(err)))
                }
                Err(err) => return Err(Error::statement_failed(err)),
            }
        }
    }

    async fn execute_batch(&mut self, sql: &'static str) -> Result<()> {
        debug!(sql, "exec");
        self.retry_locked(sql, |conn| conn.execute_batch(sql)).await
    }

    /// Opens or commits the implicit transaction as `sql` requires.
    async fn prepare_transaction(&mut self, sql: &str) -> Result<()> {
        let in_transaction = !self.connection()?.is_autocommit();

        match StatementKind::of(sql).prelude(in_transaction) {
            Some(prelude) => self.execute_batch(prelude).await,
            None => Ok(()),
        }
    }
}

#[async_trait]
impl tabula_core::driver::Connection for Connection {
    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    async fn list_tables(&mut self) -> Result<Vec<String>> {
        let sql = "SELECT name FROM sqlite_master \
                   WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name";
        debug!(sql, "query");

        self.retry_locked(sql, |conn| {
            let mut stmt = conn.prepare(sql)?;
            let rows = stmt.query_map([], |row| row.get(0))?;
            rows.collect()
        })
        .await
    }

    async fn describe_table(&mut self, table: &str) -> Result<Vec<ColumnInfo>> {
        let sql = format!("PRAGMA table_info({})", Serializer::quote_ident(table));
        debug!(%sql, "query");

        let columns = self
            .retry_locked(&sql, |conn| {
                let mut stmt = conn.prepare(&sql)?;
                let rows = stmt.query_map([], |row| {
                    let pk: i64 = row.get("pk")?;
                    let not_null: i64 = row.get("notnull")?;

                    Ok(ColumnInfo {
                        name: row.get("name")?,
                        ty: row.get("type")?,
                        not_null: not_null != 0 || pk > 0,
                        primary_key: pk > 0,
                        default: row.get("dflt_value")?,
                    })
                })?;
                rows.collect::<rusqlite::Result<Vec<_>>>()
            })
            .await?;

        if columns.is_empty() {
            return Err(err!("no such table: {table}"));
        }

        Ok(columns)
    }

    async fn table_schema_source(&mut self, table: &str) -> Result<String> {
        let sql = "SELECT sql FROM sqlite_master WHERE type = 'table' AND name = ?1 COLLATE NOCASE";
        debug!(sql, table, "query");

        let create_sql: Option<String> = self
            .retry_locked(sql, |conn| {
                conn.query_row(sql, [table], |row| row.get(0)).optional()
            })
            .await?;

        let Some(create_sql) = create_sql else {
            return Err(err!("no such table: {table}"));
        };

        parse::column_definitions(&create_sql)
            .map(str::to_string)
            .ok_or_else(|| {
                Error::invalid_schema(format!("cannot find column definitions in `{create_sql}`"))
            })
    }

    async fn exec(&mut self, sql: &str) -> Result<u64> {
        self.prepare_transaction(sql).await?;
        debug!(sql, "exec");

        let count = self
            .retry_locked(sql, |conn| conn.execute(sql, []))
            .await?;

        Ok(count as u64)
    }

    async fn exec_many(&mut self, sql: &str, rows: Vec<ValueRecord>) -> Result<u64> {
        self.prepare_transaction(sql).await?;
        debug!(sql, rows = rows.len(), "exec batch");

        let count = self
            .retry_locked(sql, |conn| {
                let mut stmt = conn.prepare_cached(sql)?;
                let mut count = 0;

                for row in &rows {
                    count += stmt.execute(rusqlite::params_from_iter(row.iter().map(Value)))?;
                }

                Ok(count)
            })
            .await?;

        Ok(count as u64)
    }

    async fn query(&mut self, sql: &str, width: usize) -> Result<Vec<ValueRecord>> {
        debug!(sql, "query");

        let rows = self
            .retry_locked(sql, |conn| {
                let mut stmt = conn.prepare_cached(sql)?;
                let mut rows = stmt.query([])?;
                let mut ret = vec![];

                while let Some(row) = rows.next()? {
                    let items = (0..width)
                        .map(|index| row.get::<_, SqlValue>(index))
                        .collect::<rusqlite::Result<Vec<_>>>()?;
                    ret.push(items);
                }

                Ok(ret)
            })
            .await?;

        rows.into_iter()
            .map(|row| {
                row.into_iter()
                    .map(Value::from_sql)
                    .collect::<Result<Vec<_>>>()
                    .map(ValueRecord::from_vec)
            })
            .collect()
    }

    async fn commit(&mut self) -> Result<()> {
        if self.connection()?.is_autocommit() {
            return Ok(());
        }

        self.execute_batch("COMMIT").await
    }

    async fn rollback(&mut self) -> Result<()> {
        if self.connection()?.is_autocommit() {
            return Ok(());
        }

        self.execute_batch("ROLLBACK").await
    }

    async fn close(&mut self) -> Result<()> {
        let Some(connection) = self.connection.take() else {
            return Ok(());
        };

        connection
            .close()
            .map_err(|(_, err)| Error::statement_failed(err))
    }
}
