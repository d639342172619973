pub mod driver;
pub use driver::{Connection, Dialect, Driver};

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{SchemaSource, TableSchema};

pub mod stmt;

/// A Result type alias that uses Tabula's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
