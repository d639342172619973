use super::Db;
use crate::{
    driver::{self, Driver},
    Result,
};

use indexmap::IndexMap;
use tabula_sql::Serializer;

#[derive(Debug, Default)]
pub struct Builder {
    /// Commit after every mutating call
    autocommit: bool,
}

impl Builder {
    pub fn autocommit(&mut self, autocommit: bool) -> &mut Self {
        self.autocommit = autocommit;
        self
    }

    /// Build a handle for the database at `url` and open it.
    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        let mut db = self.build(driver::from_url(url)?);
        db.open().await?;
        Ok(db)
    }

    /// Build a handle over `driver`. The handle is not connected until
    /// [`Db::open`] is called.
    pub fn build(&mut self, driver: Box<dyn Driver>) -> Db {
        Db {
            serializer: Serializer::for_dialect(driver.dialect()),
            driver,
            connection: None,
            autocommit: self.autocommit,
            bindings: IndexMap::new(),
        }
    }
}
