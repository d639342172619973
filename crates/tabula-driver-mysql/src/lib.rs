mod introspect;

mod value;
use value::Value;

use mysql_async::{
    prelude::{Queryable, ToValue},
    Conn, Pool, Row,
};
use std::borrow::Cow;
use tabula_core::{
    async_trait,
    driver::{Dialect, Driver},
    err,
    schema::ColumnInfo,
    stmt::{Value as CoreValue, ValueRecord},
    Error, Result,
};
use tabula_sql::{parse, Serializer};
use tracing::debug;
use url::Url;

#[derive(Debug)]
pub struct MySQL {
    url: String,
    pool: Pool,
}

impl MySQL {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url_str}")))?;

        if url.scheme() != "mysql" {
            return Err(Error::invalid_connection_url(format!(
                "connection url does not have a `mysql` scheme; url={url_str}"
            )));
        }

        if url.host_str().is_none() {
            return Err(Error::invalid_connection_url(format!(
                "missing host in connection URL; url={url_str}"
            )));
        }

        if url.path().trim_start_matches('/').is_empty() {
            return Err(Error::invalid_connection_url(format!(
                "no database specified - missing path in connection URL; url={url_str}"
            )));
        }

        let opts = mysql_async::Opts::from_url(url.as_ref())
            .map_err(|err| Error::invalid_connection_url(err.to_string()))?;
        let opts = mysql_async::OptsBuilder::from_opts(opts).client_found_rows(true);

        Ok(Self {
            url: url_str,
            pool: Pool::new(opts),
        })
    }
}

#[async_trait]
impl Driver for MySQL {
    fn dialect(&self) -> Dialect {
        Dialect::Mysql
    }

    fn url(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.url)
    }

    async fn connect(&self) -> Result<Box<dyn tabula_core::Connection>> {
        let mut conn = self
            .pool
            .get_conn()
            .await
            .map_err(Error::statement_failed)?;

        // Make `commit` and `rollback` meaningful
        conn.query_drop("SET autocommit = 0")
            .await
            .map_err(Error::statement_failed)?;

        Ok(Box::new(Connection::from(conn)))
    }
}

#[derive(Debug)]
pub struct Connection {
    /// `None` once closed
    conn: Option<Conn>,
}

impl Connection {
    fn conn(&mut self) -> Result<&mut Conn> {
        self.conn.as_mut().ok_or_else(Error::connection_closed)
    }

    /// Runs a statement over the text protocol, discarding any result set.
    async fn query_drop(&mut self, sql: &str) -> Result<()> {
        debug!(sql, "exec");
        self.conn()?
            .query_drop(sql)
            .await
            .map_err(Error::statement_failed)
    }

    /// Runs a statement over the text protocol and decodes every column of
    /// every row.
    async fn query_text(&mut self, sql: &str) -> Result<Vec<Vec<CoreValue>>> {
        debug!(sql, "query");

        let rows: Vec<Row> = self
            .conn()?
            .query(sql)
            .await
            .map_err(Error::statement_failed)?;

        rows.into_iter()
            .map(|mut row| {
                (0..row.len())
                    .map(|index| Value::take_from(&mut row, index))
                    .collect::<Result<Vec<_>>>()
            })
            .collect()
    }
}

impl From<Conn> for Connection {
    fn from(conn: Conn) -> Self {
        Self { conn: Some(conn) }
    }
}

#[async_trait]
impl tabula_core::driver::Connection for Connection {
    fn dialect(&self) -> Dialect {
        Dialect::Mysql
    }

    async fn list_tables(&mut self) -> Result<Vec<String>> {
        self.query_text(introspect::LIST_TABLES)
            .await?
            .into_iter()
            .map(introspect::table_name)
            .collect()
    }

    async fn describe_table(&mut self, table: &str) -> Result<Vec<ColumnInfo>> {
        let sql = format!("DESCRIBE {}", Serializer::quote_ident(table));

        self.query_text(&sql)
            .await?
            .into_iter()
            .map(introspect::column_info)
            .collect()
    }

    async fn table_schema_source(&mut self, table: &str) -> Result<String> {
        let sql = format!("SHOW CREATE TABLE {}", Serializer::quote_ident(table));

        let Some(row) = self.query_text(&sql).await?.into_iter().next() else {
            return Err(err!("no such table: {table}"));
        };

        let create_sql = introspect::create_statement(table, row)?;

        parse::column_definitions(&create_sql)
            .map(str::to_string)
            .ok_or_else(|| {
                Error::invalid_schema(format!("cannot find column definitions in `{create_sql}`"))
            })
    }

    async fn exec(&mut self, sql: &str) -> Result<u64> {
        self.query_drop(sql).await?;
        Ok(self.conn()?.affected_rows())
    }

    async fn exec_many(&mut self, sql: &str, rows: Vec<ValueRecord>) -> Result<u64> {
        debug!(sql, rows = rows.len(), "exec batch");

        let count = rows.len() as u64;
        let params: Vec<Vec<mysql_async::Value>> = rows
            .iter()
            .map(|row| row.iter().map(|value| Value(value).to_value()).collect())
            .collect();

        self.conn()?
            .exec_batch(sql, params)
            .await
            .map_err(Error::statement_failed)?;

        Ok(count)
    }

    async fn query(&mut self, sql: &str, width: usize) -> Result<Vec<ValueRecord>> {
        debug!(sql, "query");

        // The binary protocol keeps column values typed
        let rows: Vec<Row> = self
            .conn()?
            .exec(sql, ())
            .await
            .map_err(Error::statement_failed)?;

        rows.into_iter()
            .map(|mut row| {
                (0..width)
                    .map(|index| Value::take_from(&mut row, index))
                    .collect::<Result<Vec<_>>>()
                    .map(ValueRecord::from_vec)
            })
            .collect()
    }

    async fn commit(&mut self) -> Result<()> {
        self.query_drop("COMMIT").await
    }

    async fn rollback(&mut self) -> Result<()> {
        self.query_drop("ROLLBACK").await
    }

    async fn close(&mut self) -> Result<()> {
        let Some(conn) = self.conn.take() else {
            return Ok(());
        };

        conn.disconnect().await.map_err(Error::statement_failed)
    }
}
