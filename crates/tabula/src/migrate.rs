//! Copying every table of one database into another, possibly across
//! dialects.

use crate::{driver, Db, Dialect, Fields, Result};

use tabula_core::err;
use tracing::{debug, info};

/// MySQL's own bookkeeping tables, never copied out of a MySQL source.
pub const MYSQL_SYSTEM_TABLES: &[&str] = &[
    "columns_priv",
    "db",
    "event",
    "func",
    "general_log",
    "help_category",
    "help_keyword",
    "help_relation",
    "help_topic",
    "innodb_index_stats",
    "innodb_table_stats",
    "ndb_binlog_index",
    "plugin",
    "proc",
    "procs_priv",
    "proxies_priv",
    "servers",
    "slave_master_info",
    "slave_relay_log_info",
    "slave_worker_info",
    "slow_log",
    "tables_priv",
    "time_zone",
    "time_zone_leap_second",
    "time_zone_name",
    "time_zone_transition",
    "time_zone_transition_type",
    "user",
];

/// What a completed migration copied.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MigrationSummary {
    /// Tables in the order they were copied
    pub tables: Vec<MigratedTable>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigratedTable {
    pub name: String,
    pub rows: u64,
}

impl MigrationSummary {
    pub fn total_rows(&self) -> u64 {
        self.tables.iter().map(|table| table.rows).sum()
    }
}

/// Copy every table of `source` into `destination`.
///
/// Each table is bound on the destination with the source's schema (created
/// when missing, checked for equivalence when present), then its rows are
/// inserted by name and the destination is committed. The first error stops
/// the run; tables committed before it stay in place.
pub async fn migrate(source: &mut Db, destination: &mut Db) -> Result<MigrationSummary> {
    let skip_system_tables = source.dialect() == Dialect::Mysql;
    let mut summary = MigrationSummary::default();

    for table in source.list_tables().await? {
        if skip_system_tables && MYSQL_SYSTEM_TABLES.contains(&table.as_str()) {
            debug!(%table, "skipping system table");
            continue;
        }

        let rows = migrate_table(source, destination, &table)
            .await
            .map_err(|e| e.context(err!("migrating table `{table}`")))?;

        info!(%table, rows, "migrated table");
        summary.tables.push(MigratedTable { name: table, rows });
    }

    Ok(summary)
}

/// Copy one table of `source` into `destination` and commit it, returning
/// the number of rows copied.
pub async fn migrate_table(source: &mut Db, destination: &mut Db, table: &str) -> Result<u64> {
    let schema = source.table_schema(table).await?;
    destination.bind_table(table, Some(schema.into())).await?;

    let records = source.table(table).select(Fields::All, "").await?;
    let mut target = destination.table(table);
    let mut rows = 0;

    for record in records {
        target.insert_record(record).await?;
        rows += 1;
    }

    destination.commit().await?;
    Ok(rows)
}

/// Copy the SQLite database at `path` into the MySQL database at `mysql_url`.
pub async fn sqlite_to_mysql(path: &str, mysql_url: &str) -> Result<MigrationSummary> {
    let source = open("sqlite", path).await?;
    let destination = open("mysql", mysql_url).await?;
    run(source, destination).await
}

/// Copy the MySQL database at `mysql_url` into the SQLite database at `path`.
pub async fn mysql_to_sqlite(path: &str, mysql_url: &str) -> Result<MigrationSummary> {
    let source = open("mysql", mysql_url).await?;
    let destination = open("sqlite", path).await?;
    run(source, destination).await
}

/// Copy the database at URL `from` into the database at URL `to`.
pub async fn between(from: &str, to: &str) -> Result<MigrationSummary> {
    let source = Db::builder().connect(from).await?;
    let destination = Db::builder().connect(to).await?;
    run(source, destination).await
}

async fn open(dialect: &str, target: &str) -> Result<Db> {
    let driver = driver::new_driver(dialect, target)?
        .ok_or_else(|| err!("unknown dialect `{dialect}`"))?;

    let mut db = Db::builder().build(driver);
    db.open().await?;
    Ok(db)
}

/// Migrate, then close both sides whatever the outcome.
async fn run(mut source: Db, mut destination: Db) -> Result<MigrationSummary> {
    let summary = migrate(&mut source, &mut destination).await;

    let destination_closed = destination.close().await;
    let source_closed = source.close().await;

    let summary = summary?;
    destination_closed?;
    source_closed?;

    Ok(summary)
}
