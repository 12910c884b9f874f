use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};

use crate::errors::InternalError;
use crate::services::ResourceAccessor;
use crate::stores::record_meta::{new_record_id, now_millis};
use crate::types::db::client::{self, ActiveModel, Entity as Clients};
use crate::types::dto::clients::ClientInput;

/// ClientStore persists clients in the `clients` table
///
/// `email` carries a unique index; a duplicate surfaces as
/// `DatabaseError::ConstraintViolation`.
pub struct ClientStore {
    db: DatabaseConnection,
}

impl ClientStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// `None` when the row was deleted after it was read
    async fn replace(&self, existing: client::Model, input: ClientInput) -> Result<Option<client::Model>, InternalError> {
        let mut active_model: ActiveModel = existing.into();
        active_model.name = Set(input.name);
        active_model.email = Set(input.email);

        match active_model.update(&self.db).await {
            Ok(updated) => Ok(Some(updated)),
            Err(DbErr::RecordNotUpdated) | Err(DbErr::RecordNotFound(_)) => {
                tracing::debug!("Client removed before update was applied");
                Ok(None)
            }
            Err(e) => Err(InternalError::database("update_client", e)),
        }
    }
}

#[async_trait]
impl ResourceAccessor for ClientStore {
    type Input = ClientInput;
    type Record = client::Model;

    async fn list(&self) -> Result<Vec<client::Model>, InternalError> {
        Clients::find()
            .order_by_desc(client::Column::CreatedAt)
            .order_by_desc(client::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_clients", e))
    }

    async fn find(&self, id: &str) -> Result<Option<client::Model>, InternalError> {
        Clients::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_client", e))
    }

    async fn create(&self, input: ClientInput) -> Result<client::Model, InternalError> {
        let new_client = ActiveModel {
            id: Set(new_record_id()),
            name: Set(input.name),
            email: Set(input.email),
            created_at: Set(now_millis()),
        };

        let created = new_client
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("create_client", e))?;

        tracing::info!(client_id = %created.id, "Client created");

        Ok(created)
    }

    async fn update(&self, id: &str, input: ClientInput) -> Result<Option<client::Model>, InternalError> {
        match self.find(id).await? {
            Some(existing) => self.replace(existing, input).await,
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, InternalError> {
        let result = Clients::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_client", e))?;

        Ok(result.rows_affected > 0)
    }
}

impl std::fmt::Debug for ClientStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientStore")
            .field("db", &"<connection>")
            .finish()
    }
}
