use clap::Parser;

use esda_backend::cli::{self, Cli};
use esda_backend::config::{init_logging, ServerSettings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_logging()?;

    let settings = ServerSettings::from_env()?;
    tracing::debug!(?settings, "Loaded server settings");

    cli::execute_command(cli, settings).await
}
