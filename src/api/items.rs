use std::sync::Arc;

use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};

use crate::app_data::{AppData, ItemService};
use crate::errors::ApiFailure;
use crate::types::dto::items::{Item, ItemApiResponse, ItemBody, ListItemsApiResponse};

/// Items API
pub struct ItemsApi {
    items: Arc<ItemService>,
}

impl ItemsApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            items: Arc::clone(&app_data.items),
        }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ApiTags {
    /// Item management endpoints
    Items,
}

#[OpenApi]
impl ItemsApi {
    /// List items
    ///
    /// Returns every item ordered by creation time, newest first
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn list_items(&self) -> ListItemsApiResponse {
        match self.items.list().await {
            Ok(items) => ListItemsApiResponse::Ok(Json(items.into_iter().map(Item::from).collect())),
            Err(err) => ApiFailure::from(err).into(),
        }
    }

    /// Create a new item
    ///
    /// Body: `{"title": string}` with 1-200 characters. Returns the stored
    /// item with its generated id and creation timestamp.
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn create_item(&self, body: Json<ItemBody>) -> ItemApiResponse {
        match self.items.create(body.0.value()).await {
            Ok(item) => ItemApiResponse::Created(Json(item.into())),
            Err(err) => ApiFailure::from(err).into(),
        }
    }

    /// Get one item
    #[oai(path = "/items/:id", method = "get", tag = "ApiTags::Items")]
    async fn get_item(&self, id: Path<String>) -> ItemApiResponse {
        match self.items.get(&id.0).await {
            Ok(item) => ItemApiResponse::Ok(Json(item.into())),
            Err(err) => ApiFailure::from(err).into(),
        }
    }

    /// Replace an item's title
    ///
    /// Same body rules as create; `id` and `createdAt` never change.
    #[oai(path = "/items/:id", method = "put", tag = "ApiTags::Items")]
    async fn update_item(&self, id: Path<String>, body: Json<ItemBody>) -> ItemApiResponse {
        match self.items.update(&id.0, body.0.value()).await {
            Ok(item) => ItemApiResponse::Ok(Json(item.into())),
            Err(err) => ApiFailure::from(err).into(),
        }
    }

    /// Delete an item
    #[oai(path = "/items/:id", method = "delete", tag = "ApiTags::Items")]
    async fn delete_item(&self, id: Path<String>) -> ItemApiResponse {
        match self.items.delete(&id.0).await {
            Ok(()) => ItemApiResponse::Deleted,
            Err(err) => ApiFailure::from(err).into(),
        }
    }
}
