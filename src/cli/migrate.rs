use crate::config::{connect_database, migrate_database, ServerSettings};
use crate::errors::InternalError;

/// Connect to the configured database and apply all pending migrations
pub async fn run_migrations(settings: &ServerSettings) -> Result<(), InternalError> {
    tracing::info!("Running database migrations...");

    let db = connect_database(settings).await?;
    migrate_database(&db).await?;

    tracing::info!("All migrations completed successfully");

    Ok(())
}
