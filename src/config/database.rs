use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use migration::{Migrator, MigratorTrait};

use crate::config::ServerSettings;
use crate::errors::InternalError;

/// Open the connection pool for the configured database
///
/// Does NOT run migrations - call [`migrate_database`] separately.
///
/// # Returns
/// * `Ok(DatabaseConnection)` - Pool established successfully
/// * `Err(InternalError)` - Connection failed
pub async fn connect_database(settings: &ServerSettings) -> Result<DatabaseConnection, InternalError> {
    let mut options = ConnectOptions::new(settings.database_url());
    options.sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .map_err(|e| InternalError::database("connect_database", e))?;

    tracing::debug!("Connected to database");

    Ok(db)
}

/// Apply all pending migrations
///
/// # Arguments
/// * `db` - Database connection to run migrations on
///
/// # Returns
/// * `Ok(())` - Migrations completed successfully
/// * `Err(InternalError)` - Migration failed
pub async fn migrate_database(db: &DatabaseConnection) -> Result<(), InternalError> {
    Migrator::up(db, None)
        .await
        .map_err(|e| InternalError::database("run_migrations", e))?;

    tracing::debug!("Database migrations completed");

    Ok(())
}
