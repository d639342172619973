use anyhow::Result;
use clap::Parser;
use console::style;
use tabula::Db;

#[derive(Parser, Debug)]
pub struct TablesCommand {
    /// Database URL, e.g. `sqlite:app.db` or `mysql://user@host/app`
    url: String,
}

impl TablesCommand {
    pub(crate) async fn run(self) -> Result<()> {
        let mut db = Db::builder().connect(&self.url).await?;
        let tables = db.list_tables().await;
        db.close().await?;

        let tables = tables?;

        if tables.is_empty() {
            println!("  {}", style("No tables.").magenta().dim());
            return Ok(());
        }

        for table in tables {
            println!("  {table}");
        }

        Ok(())
    }
}

#[derive(Parser, Debug)]
pub struct SchemaCommand {
    /// Database URL, e.g. `sqlite:app.db` or `mysql://user@host/app`
    url: String,

    /// Table to describe
    table: String,
}

impl SchemaCommand {
    pub(crate) async fn run(self) -> Result<()> {
        let mut db = Db::builder().connect(&self.url).await?;
        let columns = db.describe_table(&self.table).await;
        db.close().await?;

        let columns = columns?;
        let width = columns.iter().map(|column| column.name.len()).max().unwrap_or(0);

        println!();
        println!("  {}", style(&self.table).cyan().bold().underlined());
        println!();

        for column in &columns {
            let mut flags = vec![];

            if column.primary_key {
                flags.push("PRIMARY KEY".to_string());
            } else if column.not_null {
                flags.push("NOT NULL".to_string());
            }

            if let Some(default) = &column.default {
                flags.push(format!("DEFAULT {default}"));
            }

            println!(
                "  {:width$}  {} {}",
                style(&column.name).bold(),
                column.ty,
                style(flags.join(" ")).dim(),
            );
        }

        println!();
        Ok(())
    }
}
