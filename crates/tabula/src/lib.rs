pub mod db;
pub use db::{Db, Fields, Table};

pub mod driver;

pub mod migrate;
pub use migrate::MigrationSummary;

pub use tabula_core::{
    schema::{ColumnInfo, SchemaSource, TableSchema},
    stmt::{Record, Value, ValueRecord},
    Dialect, Error, Result,
};
