use crate::utility::redact_url_password;
use anyhow::Result;
use clap::Parser;
use console::style;

#[derive(Parser, Debug)]
pub struct MigrateCommand {
    /// URL of the database to copy from
    #[arg(long)]
    pub(crate) from: String,

    /// URL of the database to copy into
    #[arg(long)]
    pub(crate) to: String,
}

impl MigrateCommand {
    pub(crate) async fn run(self) -> Result<()> {
        println!();
        println!("  {}", style("Migrate Database").cyan().bold().underlined());
        println!();
        println!(
            "  {} {} {} {}",
            style("→").cyan(),
            style(redact_url_password(&self.from)).bold(),
            style("into").dim(),
            style(redact_url_password(&self.to)).bold()
        );
        println!();

        let summary = tabula::migrate::between(&self.from, &self.to).await?;

        if summary.tables.is_empty() {
            println!(
                "  {}",
                style("No tables found in the source database.").magenta().dim()
            );
            println!();
            return Ok(());
        }

        for table in &summary.tables {
            println!(
                "  {} {}",
                style("✓").green().bold(),
                style(format!("{}: {} row(s)", table.name, table.rows)).dim()
            );
        }

        println!();
        println!(
            "  {}",
            style(format!(
                "Copied {} table(s), {} row(s)",
                summary.tables.len(),
                summary.total_rows()
            ))
            .green()
            .bold()
        );
        println!();

        Ok(())
    }
}
