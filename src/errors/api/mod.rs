// API-facing error bodies
use poem_openapi::payload::Json;

use crate::services::ResourceError;
use crate::types::dto::common::{ErrorResponse, ValidationErrorResponse};

/// A failed resource operation rendered for the wire
///
/// Each endpoint's response enum converts from this, so the mapping from
/// `ResourceError` to status codes lives in one place.
pub enum ApiFailure {
    BadRequest(Json<ValidationErrorResponse>),
    NotFound(Json<ErrorResponse>),
    Conflict(Json<ErrorResponse>),
    InternalError(Json<ErrorResponse>),
}

impl ApiFailure {
    /// Internal error details are logged but not exposed to clients.
    pub fn from_resource_error(err: ResourceError) -> Self {
        match err {
            ResourceError::Validation(errors) => {
                tracing::debug!(fields = errors.fields().len(), "Rejected request body");
                Self::BadRequest(Json(errors.into()))
            }
            ResourceError::NotFound { resource, id } => {
                Self::NotFound(Json(ErrorResponse::not_found(format!("{} not found: {}", resource, id))))
            }
            ResourceError::Conflict { resource, detail } => {
                tracing::warn!("Constraint violation on {}: {}", resource, detail);
                Self::Conflict(Json(ErrorResponse::conflict(format!(
                    "{} conflicts with an existing record",
                    resource
                ))))
            }
            ResourceError::Internal(err) => {
                tracing::error!("Internal error: {}", err);
                Self::InternalError(Json(ErrorResponse::internal_error()))
            }
        }
    }
}

impl From<ResourceError> for ApiFailure {
    fn from(err: ResourceError) -> Self {
        Self::from_resource_error(err)
    }
}
