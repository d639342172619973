use tabula::{db, Db, Dialect};

use crate::{isolation::TestIsolation, Setup};

const DEFAULT_URL: &str = "mysql://localhost:3306/tabula_test";

/// Tests share the database named by `TABULA_TEST_MYSQL_URL`; each one works
/// on tables carrying its own prefix.
pub struct SetupMySQL {
    isolation: TestIsolation,
}

impl SetupMySQL {
    pub fn new() -> Self {
        Self {
            isolation: TestIsolation::new(),
        }
    }

    pub fn url() -> String {
        std::env::var("TABULA_TEST_MYSQL_URL").unwrap_or_else(|_| DEFAULT_URL.to_string())
    }
}

impl Default for SetupMySQL {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Setup for SetupMySQL {
    async fn connect(&self, builder: &mut db::Builder) -> tabula::Result<Db> {
        builder.connect(&Self::url()).await
    }

    fn dialect(&self) -> Dialect {
        Dialect::Mysql
    }

    fn table_name(&self, name: &str) -> String {
        format!("{}{name}", self.isolation.table_prefix())
    }

    async fn cleanup_my_tables(&self) -> tabula::Result<()> {
        let mut db = Db::builder().connect(&Self::url()).await?;

        for table in db.list_tables().await? {
            if self.isolation.owns_table(&table) {
                db.drop_table(&table).await?;
            }
        }

        db.close().await
    }
}
