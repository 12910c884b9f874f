use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::errors::{DatabaseError, InternalError};
use crate::validation::{ValidationErrors, Validator};

/// Persistence operations for one resource table
///
/// Implementations issue a single statement per call (update reads the row
/// first) and never retry.
#[async_trait]
pub trait ResourceAccessor: Send + Sync {
    /// Validated input accepted by `create` and `update`
    type Input: Send + 'static;
    /// Stored record as returned by the database
    type Record: Send + 'static;

    /// All records, newest first
    async fn list(&self) -> Result<Vec<Self::Record>, InternalError>;

    async fn find(&self, id: &str) -> Result<Option<Self::Record>, InternalError>;

    /// Insert a record, generating its id and creation time
    async fn create(&self, input: Self::Input) -> Result<Self::Record, InternalError>;

    /// Replace the mutable fields; `None` when no record has this id
    async fn update(&self, id: &str, input: Self::Input) -> Result<Option<Self::Record>, InternalError>;

    /// `true` when a row was removed
    async fn delete(&self, id: &str) -> Result<bool, InternalError>;
}

/// Outcome of a failed resource operation
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    #[error("{resource} conflicts with an existing record: {detail}")]
    Conflict { resource: &'static str, detail: String },

    #[error(transparent)]
    Internal(#[from] InternalError),
}

/// The validate → persist pipeline shared by every resource
///
/// `V` checks request bodies and `A` stores what `V` produces. Handlers hold
/// one of these per resource and only translate its results to HTTP.
pub struct ResourceService<V, A> {
    resource: &'static str,
    validator: V,
    accessor: A,
}

impl<V, A> ResourceService<V, A>
where
    V: Validator,
    A: ResourceAccessor<Input = V::Output>,
{
    pub fn new(resource: &'static str, validator: V, accessor: A) -> Self {
        Self {
            resource,
            validator,
            accessor,
        }
    }

    pub async fn list(&self) -> Result<Vec<A::Record>, ResourceError> {
        self.accessor.list().await.map_err(|e| self.storage_error(e))
    }

    pub async fn get(&self, id: &str) -> Result<A::Record, ResourceError> {
        self.accessor
            .find(id)
            .await
            .map_err(|e| self.storage_error(e))?
            .ok_or_else(|| self.not_found(id))
    }

    /// Validate `body` and insert it; nothing is written when validation fails
    pub async fn create(&self, body: &Value) -> Result<A::Record, ResourceError> {
        let input = self.validator.validate(body)?;

        let record = self
            .accessor
            .create(input)
            .await
            .map_err(|e| self.storage_error(e))?;

        tracing::debug!(resource = self.resource, "Record created");

        Ok(record)
    }

    /// Validation runs before the lookup, so a bad body is a 400 even for an unknown id
    pub async fn update(&self, id: &str, body: &Value) -> Result<A::Record, ResourceError> {
        let input = self.validator.validate(body)?;

        self.accessor
            .update(id, input)
            .await
            .map_err(|e| self.storage_error(e))?
            .ok_or_else(|| self.not_found(id))
    }

    pub async fn delete(&self, id: &str) -> Result<(), ResourceError> {
        let removed = self
            .accessor
            .delete(id)
            .await
            .map_err(|e| self.storage_error(e))?;

        if !removed {
            return Err(self.not_found(id));
        }

        tracing::debug!(resource = self.resource, id, "Record deleted");

        Ok(())
    }

    fn not_found(&self, id: &str) -> ResourceError {
        ResourceError::NotFound {
            resource: self.resource,
            id: id.to_string(),
        }
    }

    fn storage_error(&self, err: InternalError) -> ResourceError {
        match err {
            InternalError::Database(DatabaseError::ConstraintViolation { detail, .. }) => {
                ResourceError::Conflict {
                    resource: self.resource,
                    detail,
                }
            }
            other => ResourceError::Internal(other),
        }
    }
}
