use chrono::{DateTime, SecondsFormat, Utc};
use poem::http::StatusCode;
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::validation::{FieldError, ValidationErrors};

/// Response model for the JSON health endpoint
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `healthy` when every dependency answers, `degraded` otherwise
    pub status: String,

    /// Database reachability: `up` or `down`
    pub database: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}

/// Standardized error response model
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn new(error: &str, message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            status_code: status.as_u16(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("not_found", message, StatusCode::NOT_FOUND)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new("conflict", message, StatusCode::CONFLICT)
    }

    /// Generic 500 body; the cause is only logged
    pub fn internal_error() -> Self {
        Self::new(
            "internal_error",
            "An internal error occurred",
            StatusCode::INTERNAL_SERVER_ERROR,
        )
    }
}

/// One rejected field
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct FieldErrorResponse {
    /// Name of the offending field
    pub field: String,

    /// One of `required`, `invalid_type`, `too_short`, `too_long`, `invalid_format`
    pub code: String,

    /// Human-readable explanation
    pub message: String,
}

impl From<FieldError> for FieldErrorResponse {
    fn from(error: FieldError) -> Self {
        Self {
            field: error.field,
            code: error.code.as_str().to_string(),
            message: error.message,
        }
    }
}

/// Error response for rejected request bodies
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrorResponse {
    /// Always `validation_failed`
    pub error: String,

    /// Human-readable summary
    pub message: String,

    /// HTTP status code
    pub status_code: u16,

    /// Field-level detail
    pub fields: Vec<FieldErrorResponse>,
}

impl From<ValidationErrors> for ValidationErrorResponse {
    fn from(errors: ValidationErrors) -> Self {
        let fields: Vec<FieldErrorResponse> = errors
            .into_fields()
            .into_iter()
            .map(FieldErrorResponse::from)
            .collect();

        let names: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();

        Self {
            error: "validation_failed".to_string(),
            message: format!("Invalid fields: {}", names.join(", ")),
            status_code: StatusCode::BAD_REQUEST.as_u16(),
            fields,
        }
    }
}

/// Render a stored millisecond timestamp as RFC 3339 UTC
///
/// Values outside chrono's range can only come from rows written by other
/// tools; they are logged and rendered as the Unix epoch.
pub fn format_timestamp_millis(millis: i64) -> String {
    let timestamp = DateTime::from_timestamp_millis(millis).unwrap_or_else(|| {
        tracing::warn!(millis, "Stored timestamp is out of range, rendering as epoch");
        DateTime::<Utc>::UNIX_EPOCH
    });

    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldErrorCode;

    #[test]
    fn test_validation_error_response_lists_fields() {
        let mut errors = ValidationErrors::new();
        errors.push("name", FieldErrorCode::Required, "name is required");
        errors.push("email", FieldErrorCode::InvalidFormat, "email must contain '@'");

        let response = ValidationErrorResponse::from(errors);

        assert_eq!(response.error, "validation_failed");
        assert_eq!(response.status_code, 400);
        assert_eq!(response.message, "Invalid fields: name, email");
        assert_eq!(response.fields.len(), 2);
        assert_eq!(response.fields[0].code, "required");
        assert_eq!(response.fields[1].code, "invalid_format");
    }

    #[test]
    fn test_internal_error_has_no_detail() {
        let response = ErrorResponse::internal_error();

        assert_eq!(response.error, "internal_error");
        assert_eq!(response.status_code, 500);
        assert_eq!(response.message, "An internal error occurred");
    }

    #[test]
    fn test_format_timestamp_millis() {
        assert_eq!(format_timestamp_millis(0), "1970-01-01T00:00:00.000Z");
        assert_eq!(format_timestamp_millis(1_740_787_200_123), "2025-03-01T00:00:00.123Z");
    }

    #[test]
    fn test_out_of_range_timestamp_renders_epoch() {
        assert_eq!(format_timestamp_millis(i64::MAX), "1970-01-01T00:00:00.000Z");
    }
}
