mod inspect;
mod migrate;
mod utility;

pub use inspect::{SchemaCommand, TablesCommand};
pub use migrate::MigrateCommand;

use anyhow::Result;
use clap::Parser;

/// Tabula CLI library for building custom command-line tools
#[derive(Debug, Default)]
pub struct TabulaCli {}

impl TabulaCli {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and execute CLI commands from command-line arguments
    pub async fn parse_and_run(&self) -> Result<()> {
        let cli = Cli::parse();
        self.run(cli).await
    }

    /// Parse and execute CLI commands from an iterator of arguments
    pub async fn parse_from<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;
        self.run(cli).await
    }

    async fn run(&self, cli: Cli) -> Result<()> {
        match cli.command {
            Command::Migrate(cmd) => cmd.run().await,
            Command::Tables(cmd) => cmd.run().await,
            Command::Schema(cmd) => cmd.run().await,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tabula")]
#[command(about = "Tabula CLI - copy and inspect SQLite and MySQL databases")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Copy every table of one database into another
    Migrate(MigrateCommand),

    /// List the tables of a database
    Tables(TablesCommand),

    /// Show the columns of one table
    Schema(SchemaCommand),
}
