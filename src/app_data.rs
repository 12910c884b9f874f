use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::services::ResourceService;
use crate::stores::{ClientStore, ItemStore};
use crate::types::dto::clients::ClientValidator;
use crate::types::dto::items::ItemValidator;

pub type ItemService = ResourceService<ItemValidator, ItemStore>;
pub type ClientService = ResourceService<ClientValidator, ClientStore>;

/// Application data shared by every API
///
/// Created once at startup from a migrated connection and handed to each
/// API as `Arc<AppData>`.
///
/// ```text
/// run_server
///   ↓
/// AppData::init(db)
///   ├─ db (DatabaseConnection, pooled)
///   ├─ items   (ResourceService<ItemValidator, ItemStore>)
///   └─ clients (ResourceService<ClientValidator, ClientStore>)
/// ```
pub struct AppData {
    pub db: DatabaseConnection,
    pub items: Arc<ItemService>,
    pub clients: Arc<ClientService>,
}

impl AppData {
    /// The connection should already be migrated.
    pub fn init(db: DatabaseConnection) -> Self {
        tracing::debug!("Creating resource services...");

        let items = Arc::new(ResourceService::new(
            "item",
            ItemValidator::default(),
            ItemStore::new(db.clone()),
        ));

        let clients = Arc::new(ResourceService::new(
            "client",
            ClientValidator::default(),
            ClientStore::new(db.clone()),
        ));

        tracing::info!("AppData initialization complete");

        Self { db, items, clients }
    }
}
