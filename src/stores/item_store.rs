use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};

use crate::errors::InternalError;
use crate::services::ResourceAccessor;
use crate::stores::record_meta::{new_record_id, now_millis};
use crate::types::db::item::{self, ActiveModel, Entity as Items};
use crate::types::dto::items::ItemInput;

/// ItemStore persists items in the `items` table
pub struct ItemStore {
    db: DatabaseConnection,
}

impl ItemStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Write new field values over a row that was read earlier
    ///
    /// `None` when the row was deleted after it was read.
    async fn replace(&self, existing: item::Model, input: ItemInput) -> Result<Option<item::Model>, InternalError> {
        let mut active_model: ActiveModel = existing.into();
        active_model.title = Set(input.title);

        match active_model.update(&self.db).await {
            Ok(updated) => Ok(Some(updated)),
            Err(DbErr::RecordNotUpdated) | Err(DbErr::RecordNotFound(_)) => {
                tracing::debug!("Item removed before update was applied");
                Ok(None)
            }
            Err(e) => Err(InternalError::database("update_item", e)),
        }
    }
}

#[async_trait]
impl ResourceAccessor for ItemStore {
    type Input = ItemInput;
    type Record = item::Model;

    async fn list(&self) -> Result<Vec<item::Model>, InternalError> {
        Items::find()
            .order_by_desc(item::Column::CreatedAt)
            .order_by_desc(item::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_items", e))
    }

    async fn find(&self, id: &str) -> Result<Option<item::Model>, InternalError> {
        Items::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_item", e))
    }

    async fn create(&self, input: ItemInput) -> Result<item::Model, InternalError> {
        let new_item = ActiveModel {
            id: Set(new_record_id()),
            title: Set(input.title),
            created_at: Set(now_millis()),
        };

        let created = new_item
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("create_item", e))?;

        tracing::info!(item_id = %created.id, "Item created");

        Ok(created)
    }

    async fn update(&self, id: &str, input: ItemInput) -> Result<Option<item::Model>, InternalError> {
        match self.find(id).await? {
            Some(existing) => self.replace(existing, input).await,
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, InternalError> {
        let result = Items::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_item", e))?;

        Ok(result.rows_affected > 0)
    }
}

impl std::fmt::Debug for ItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemStore")
            .field("db", &"<connection>")
            .finish()
    }
}
