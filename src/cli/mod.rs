// CLI entry points

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::ServerSettings;

/// ESDA backend command line
#[derive(Parser, Debug)]
#[command(name = "esda")]
#[command(about = "ESDA resource backend", long_about = None)]
pub struct Cli {
    /// Defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Apply pending migrations, then start the HTTP server
    Serve,

    /// Apply pending migrations and exit
    Migrate,
}

/// Execute CLI command
///
/// # Arguments
/// * `cli` - Parsed CLI arguments
/// * `settings` - Settings loaded from the environment
pub async fn execute_command(
    cli: Cli,
    settings: ServerSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve::run_server(&settings).await?,
        Commands::Migrate => migrate::run_migrations(&settings).await?,
    }

    Ok(())
}
