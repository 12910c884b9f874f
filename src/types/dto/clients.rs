use poem_openapi::{ApiResponse, Object, payload::Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ApiFailure;
use crate::types::db::client;
use crate::types::dto::body::DocumentedBody;
use crate::types::dto::common::{format_timestamp_millis, ErrorResponse, ValidationErrorResponse};
use crate::validation::{object_body, StringField, ValidationErrors, Validator};

pub const NAME_MAX_LENGTH: usize = 200;
pub const EMAIL_MAX_LENGTH: usize = 254;

/// Response model representing a client
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Unique identifier for the client
    pub id: String,

    /// Display name (1-200 characters)
    pub name: String,

    /// Contact address, unique across clients
    pub email: Option<String>,

    /// Timestamp when the client was created (ISO 8601 format)
    pub created_at: String,
}

impl From<client::Model> for Client {
    fn from(model: client::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            created_at: format_timestamp_millis(model.created_at),
        }
    }
}

/// Documented shape of a create or replace request
#[derive(Object, Debug, Clone)]
#[oai(rename_all = "camelCase")]
pub struct ClientRequest {
    /// Display name, trimmed, 1-200 characters
    #[oai(validator(min_length = 1, max_length = 200))]
    pub name: String,

    /// Contact address, unique across clients; blank means none
    #[oai(validator(max_length = 254))]
    pub email: Option<String>,
}

pub type ClientBody = DocumentedBody<ClientRequest>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientInput {
    pub name: String,
    pub email: Option<String>,
}

/// `{ "name": string, "email"?: string }`
#[derive(Debug, Clone)]
pub struct ClientValidator {
    name: StringField,
    email: StringField,
}

impl Default for ClientValidator {
    fn default() -> Self {
        Self {
            name: StringField::new("name")
                .required(true)
                .min_length(1)
                .max_length(NAME_MAX_LENGTH),
            email: StringField::new("email")
                .max_length(EMAIL_MAX_LENGTH)
                .validator(validate_email),
        }
    }
}

impl Validator for ClientValidator {
    type Output = ClientInput;

    fn validate(&self, input: &Value) -> Result<ClientInput, ValidationErrors> {
        let object = object_body(input)?;
        let mut errors = ValidationErrors::new();

        let name = self.name.extract(object, &mut errors);
        let email = self.email.extract(object, &mut errors);

        match name {
            Some(name) if errors.is_empty() => Ok(ClientInput { name, email }),
            _ => Err(errors),
        }
    }
}

/// Shape check only: one `@`, non-empty local part, dotted domain
fn validate_email(value: &str) -> Result<(), String> {
    let Some((local, domain)) = value.split_once('@') else {
        return Err("email must contain '@'".to_string());
    };

    if local.is_empty() || domain.contains('@') || value.chars().any(char::is_whitespace) {
        return Err(format!("email is not a valid address: '{}'", value));
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(format!("email domain is not valid: '{}'", domain));
    }

    Ok(())
}

/// API response for listing clients
#[derive(ApiResponse)]
pub enum ListClientsApiResponse {
    /// All clients, newest first
    #[oai(status = 200)]
    Ok(Json<Vec<Client>>),

    /// Database failure
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// API response for single-client endpoints
#[derive(ApiResponse)]
pub enum ClientApiResponse {
    /// Client found or replaced
    #[oai(status = 200)]
    Ok(Json<Client>),

    /// Client created
    #[oai(status = 201)]
    Created(Json<Client>),

    /// Client deleted
    #[oai(status = 204)]
    Deleted,

    /// Request body failed validation
    #[oai(status = 400)]
    BadRequest(Json<ValidationErrorResponse>),

    /// No client with this id
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Email already used by another client
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),

    /// Database failure
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<ApiFailure> for ListClientsApiResponse {
    fn from(failure: ApiFailure) -> Self {
        match failure {
            ApiFailure::InternalError(body) => Self::InternalError(body),
            _ => Self::InternalError(Json(ErrorResponse::internal_error())),
        }
    }
}

impl From<ApiFailure> for ClientApiResponse {
    fn from(failure: ApiFailure) -> Self {
        match failure {
            ApiFailure::BadRequest(body) => Self::BadRequest(body),
            ApiFailure::NotFound(body) => Self::NotFound(body),
            ApiFailure::Conflict(body) => Self::Conflict(body),
            ApiFailure::InternalError(body) => Self::InternalError(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldErrorCode;
    use serde_json::json;

    #[test]
    fn test_name_only() {
        let input = ClientValidator::default()
            .validate(&json!({"name": "Acme Ltd"}))
            .unwrap();

        assert_eq!(input, ClientInput { name: "Acme Ltd".to_string(), email: None });
    }

    #[test]
    fn test_email_is_trimmed() {
        let input = ClientValidator::default()
            .validate(&json!({"name": "Acme", "email": " billing@acme.test "}))
            .unwrap();

        assert_eq!(input.email.as_deref(), Some("billing@acme.test"));
    }

    #[test]
    fn test_all_field_errors_are_collected() {
        let errors = ClientValidator::default()
            .validate(&json!({"email": "not-an-address"}))
            .unwrap_err();

        assert_eq!(errors.fields().len(), 2);
        assert_eq!(errors.code_for("name"), Some(FieldErrorCode::Required));
        assert_eq!(errors.code_for("email"), Some(FieldErrorCode::InvalidFormat));
    }

    #[test]
    fn test_email_wrong_type() {
        let errors = ClientValidator::default()
            .validate(&json!({"name": "Acme", "email": ["a@b.c"]}))
            .unwrap_err();

        assert_eq!(errors.code_for("email"), Some(FieldErrorCode::InvalidType));
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("first.last@mail.example.org").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.org").is_err());
        assert!(validate_email("a@@example.org").is_err());
        assert!(validate_email("a@localhost").is_err());
        assert!(validate_email("a@example..org").is_err());
        assert!(validate_email("a b@example.org").is_err());
    }
}
