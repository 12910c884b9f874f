use std::sync::Arc;
use std::time::Duration;

use poem::listener::TcpListener;
use poem::Server;

use crate::api::build_app;
use crate::app_data::AppData;
use crate::config::{connect_database, migrate_database, ServerSettings};

/// Grace period for in-flight requests after Ctrl-C
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);

/// Migrate the database and serve HTTP until interrupted
pub async fn run_server(settings: &ServerSettings) -> Result<(), Box<dyn std::error::Error>> {
    let db = connect_database(settings).await?;
    migrate_database(&db).await?;

    let app_data = Arc::new(AppData::init(db));
    let app = build_app(app_data, settings);

    tracing::info!("Starting server on http://{}", settings.server_address());
    tracing::info!("Swagger UI available at {}/swagger", settings.public_url());
    tracing::info!("CORS allowed origin: {}", settings.cors_origin());

    Server::new(TcpListener::bind(settings.server_address()))
        .run_with_graceful_shutdown(
            app,
            async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::error!("Failed to listen for shutdown signal: {}", e);
                }
                tracing::info!("Shutdown signal received");
            },
            Some(SHUTDOWN_TIMEOUT),
        )
        .await?;

    Ok(())
}
