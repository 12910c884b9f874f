use poem_openapi::{ApiResponse, Object, payload::Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ApiFailure;
use crate::types::db::item;
use crate::types::dto::body::DocumentedBody;
use crate::types::dto::common::{format_timestamp_millis, ErrorResponse, ValidationErrorResponse};
use crate::validation::{object_body, StringField, ValidationErrors, Validator};

pub const TITLE_MAX_LENGTH: usize = 200;

/// Response model representing an item
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier for the item
    pub id: String,

    /// Title of the item (1-200 characters)
    pub title: String,

    /// Timestamp when the item was created (ISO 8601 format)
    pub created_at: String,
}

impl From<item::Model> for Item {
    fn from(model: item::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            created_at: format_timestamp_millis(model.created_at),
        }
    }
}

/// Documented shape of a create or replace request
#[derive(Object, Debug, Clone)]
#[oai(rename_all = "camelCase")]
pub struct ItemRequest {
    /// Title of the item, trimmed, 1-200 characters
    #[oai(validator(min_length = 1, max_length = 200))]
    pub title: String,
}

/// Create/replace body as received by the item endpoints
pub type ItemBody = DocumentedBody<ItemRequest>;

/// Validated body of a create or replace request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemInput {
    pub title: String,
}

/// `{ "title": string }`, title trimmed and 1-200 characters
#[derive(Debug, Clone)]
pub struct ItemValidator {
    title: StringField,
}

impl Default for ItemValidator {
    fn default() -> Self {
        Self {
            title: StringField::new("title")
                .required(true)
                .min_length(1)
                .max_length(TITLE_MAX_LENGTH),
        }
    }
}

impl Validator for ItemValidator {
    type Output = ItemInput;

    fn validate(&self, input: &Value) -> Result<ItemInput, ValidationErrors> {
        let object = object_body(input)?;
        let mut errors = ValidationErrors::new();

        match self.title.extract(object, &mut errors) {
            Some(title) if errors.is_empty() => Ok(ItemInput { title }),
            _ => Err(errors),
        }
    }
}

/// API response for listing items
#[derive(ApiResponse)]
pub enum ListItemsApiResponse {
    /// All items, newest first
    #[oai(status = 200)]
    Ok(Json<Vec<Item>>),

    /// Database failure
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// API response for single-item endpoints
#[derive(ApiResponse)]
pub enum ItemApiResponse {
    /// Item found or replaced
    #[oai(status = 200)]
    Ok(Json<Item>),

    /// Item created
    #[oai(status = 201)]
    Created(Json<Item>),

    /// Item deleted
    #[oai(status = 204)]
    Deleted,

    /// Request body failed validation
    #[oai(status = 400)]
    BadRequest(Json<ValidationErrorResponse>),

    /// No item with this id
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Database failure
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<ApiFailure> for ListItemsApiResponse {
    fn from(failure: ApiFailure) -> Self {
        match failure {
            ApiFailure::InternalError(body) => Self::InternalError(body),
            // listing neither validates nor looks up ids
            _ => Self::InternalError(Json(ErrorResponse::internal_error())),
        }
    }
}

impl From<ApiFailure> for ItemApiResponse {
    fn from(failure: ApiFailure) -> Self {
        match failure {
            ApiFailure::BadRequest(body) => Self::BadRequest(body),
            ApiFailure::NotFound(body) => Self::NotFound(body),
            ApiFailure::InternalError(body) => Self::InternalError(body),
            // items carry no unique columns
            ApiFailure::Conflict(_) => Self::InternalError(Json(ErrorResponse::internal_error())),
        }
    }
}
