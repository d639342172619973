use tabula::{db, Db, Dialect};
use tempfile::TempDir;

use crate::Setup;

/// Each test gets its own database file in a fresh temporary directory.
pub struct SetupSqlite {
    dir: TempDir,
}

impl SetupSqlite {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temporary directory"),
        }
    }

    pub fn url(&self) -> String {
        format!("sqlite:{}", self.dir.path().join("test.db").display())
    }
}

impl Default for SetupSqlite {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Setup for SetupSqlite {
    async fn connect(&self, builder: &mut db::Builder) -> tabula::Result<Db> {
        builder.connect(&self.url()).await
    }

    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    async fn cleanup_my_tables(&self) -> tabula::Result<()> {
        // The database file goes away with the temporary directory
        Ok(())
    }
}
