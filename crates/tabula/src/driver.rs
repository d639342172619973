use crate::Result;

pub use tabula_core::driver::{Connection, Dialect, Driver};
use tabula_core::Error;

use url::Url;

/// Build the driver for the dialect called `name` (`"sqlite"` or `"mysql"`,
/// any case), connecting to `target`.
///
/// For SQLite the target is a file path, `:memory:`, or a `sqlite:` URL; for
/// MySQL it is a `mysql://` URL. Returns `None` when the name is not a known
/// dialect.
pub fn new_driver(name: &str, target: &str) -> Result<Option<Box<dyn Driver>>> {
    let Some(dialect) = Dialect::from_name(name) else {
        return Ok(None);
    };

    let driver = match dialect {
        Dialect::Sqlite => sqlite(target)?,
        Dialect::Mysql => mysql(target)?,
    };

    Ok(Some(driver))
}

/// Build a driver from a connection URL, dispatching on its scheme.
pub fn from_url(url: &str) -> Result<Box<dyn Driver>> {
    let parsed = Url::parse(url)
        .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

    match parsed.scheme() {
        "mysql" => mysql(url),
        "sqlite" => sqlite(url),
        scheme => Err(Error::invalid_connection_url(format!(
            "unsupported database; scheme={scheme}; url={url}"
        ))),
    }
}

#[cfg(feature = "mysql")]
fn mysql(url: &str) -> Result<Box<dyn Driver>> {
    let driver = tabula_driver_mysql::MySQL::new(url)?;
    Ok(Box::new(driver))
}

#[cfg(not(feature = "mysql"))]
fn mysql(_url: &str) -> Result<Box<dyn Driver>> {
    Err(tabula_core::err!("`mysql` feature not enabled"))
}

#[cfg(feature = "sqlite")]
fn sqlite(target: &str) -> Result<Box<dyn Driver>> {
    use tabula_driver_sqlite::Sqlite;

    let driver = if target.starts_with("sqlite:") {
        Sqlite::new(target)?
    } else if target == ":memory:" {
        Sqlite::in_memory()
    } else {
        Sqlite::open(target)
    };

    Ok(Box::new(driver))
}

#[cfg(not(feature = "sqlite"))]
fn sqlite(_target: &str) -> Result<Box<dyn Driver>> {
    Err(tabula_core::err!("`sqlite` feature not enabled"))
}
