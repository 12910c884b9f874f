// Common test utilities for integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use esda_backend::api::build_app;
use esda_backend::config::{migrate_database, EnvironmentProvider, ServerSettings};
use esda_backend::AppData;
use poem::endpoint::BoxEndpoint;
use poem::test::{TestClient, TestResponse};
use sea_orm::{Database, DatabaseConnection};
use serde_json::Value;

/// Fixed variables standing in for the process environment
#[derive(Default)]
pub struct TestEnvironment {
    vars: HashMap<String, String>,
}

impl TestEnvironment {
    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

impl EnvironmentProvider for TestEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Creates a test database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    migrate_database(&db)
        .await
        .expect("Failed to run migrations");

    db
}

/// Default settings pointed at the in-memory database
pub fn test_settings() -> ServerSettings {
    let env = TestEnvironment::default().with_var("DATABASE_URL", "sqlite::memory:");
    ServerSettings::from_env_provider(Arc::new(env)).expect("Failed to load test settings")
}

/// Full application on a fresh database
pub async fn setup_test_client() -> TestClient<BoxEndpoint<'static>> {
    let db = setup_test_db().await;
    let app_data = Arc::new(AppData::init(db));
    TestClient::new(build_app(app_data, &test_settings()))
}

/// Status code and JSON body of a response
pub async fn json_response(resp: TestResponse) -> (u16, Value) {
    let status = resp.0.status().as_u16();
    let body = resp
        .0
        .into_body()
        .into_json::<Value>()
        .await
        .expect("Response body is not JSON");
    (status, body)
}
