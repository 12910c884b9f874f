// API layer - HTTP endpoints
pub mod clients;
pub mod fallback;
pub mod health;
pub mod items;

use std::sync::Arc;

use poem::endpoint::BoxEndpoint;
use poem::http::Method;
use poem::middleware::{Cors, Tracing};
use poem::{get, EndpointExt, Route};
use poem_openapi::OpenApiService;

pub use clients::ClientsApi;
pub use health::HealthApi;
pub use items::ItemsApi;

use crate::app_data::AppData;
use crate::config::ServerSettings;

/// Assemble the full HTTP application
///
/// ```text
/// /healthz   plain-text liveness probe
/// /api/...   OpenAPI endpoints (health, items, clients)
/// /swagger   Swagger UI
/// /openapi.json  OpenAPI document
/// ```
///
/// Errors escaping any route are rendered by [`fallback::render_error`]
/// before CORS headers are applied. Requests refused by CORS itself go
/// through the same renderer on the way out.
pub fn build_app(app_data: Arc<AppData>, settings: &ServerSettings) -> BoxEndpoint<'static> {
    let api_service = OpenApiService::new(
        (
            HealthApi::new(app_data.db.clone()),
            ItemsApi::new(app_data.clone()),
            ClientsApi::new(app_data),
        ),
        "ESDA API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("{}/api", settings.public_url()));

    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    let cors = Cors::new()
        .allow_origin(settings.cors_origin())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_header("content-type");

    Route::new()
        .at("/healthz", get(health::healthz))
        .nest("/api", api_service)
        .nest("/swagger", ui)
        .at("/openapi.json", spec)
        .catch_all_error(fallback::render_error)
        .with(cors)
        .catch_all_error(fallback::render_error)
        .with(Tracing)
        .boxed()
}
