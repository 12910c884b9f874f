use poem::http::StatusCode;
use poem::{Error, IntoResponse, Response};
use poem_openapi::error::ContentTypeError;
use poem_openapi::payload::Json;

use crate::types::dto::common::ErrorResponse;

/// Render any error that escaped the endpoints as the standard JSON body
///
/// Covers unknown routes, wrong methods, unparsable or non-JSON bodies,
/// rejected CORS requests, and anything the framework reports as a server
/// error. Server error details are logged, never returned.
pub async fn render_error(err: Error) -> Response {
    let status = if err.is::<ContentTypeError>() {
        StatusCode::UNSUPPORTED_MEDIA_TYPE
    } else {
        err.status()
    };

    let (status, body) = match status {
        StatusCode::NOT_FOUND => (status, ErrorResponse::not_found("No route matches the request")),
        StatusCode::FORBIDDEN => (
            status,
            ErrorResponse::new("forbidden", "Request is not allowed from this origin", status),
        ),
        StatusCode::METHOD_NOT_ALLOWED => (
            status,
            ErrorResponse::new("method_not_allowed", "Method not allowed for this route", status),
        ),
        StatusCode::UNSUPPORTED_MEDIA_TYPE => (
            status,
            ErrorResponse::new("unsupported_media_type", "Request body must be application/json", status),
        ),
        s if s.is_client_error() => (status, ErrorResponse::new("invalid_request", err.to_string(), status)),
        _ => {
            tracing::error!("Unhandled error ({}): {}", status, err);
            (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal_error())
        }
    };

    Json(body).with_status(status).into_response()
}
