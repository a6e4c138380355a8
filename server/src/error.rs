//! API error type.
//!
//! Handlers return `Result<T, ApiError>`; the [`IntoResponse`] impl turns an
//! error into a JSON body with the matching status code.

use std::collections::BTreeMap;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::debug;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more fields of a write payload failed validation.
    #[error("validation failed")]
    Validation(#[from] ValidationErrors),

    /// The referenced resource does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A path parameter could not be parsed, e.g. a malformed id.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The body was not usable JSON for this endpoint. Keeps the status axum
    /// chose (400 syntax, 415 content type, 422 wrong field types).
    #[error("invalid body: {message}")]
    InvalidBody { status: StatusCode, message: String },
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Validation(errors) => {
                let fields = field_messages(errors);
                debug!(?fields, "rejected write");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "error": self.to_string(), "errors": fields })),
                )
                    .into_response()
            }
            ApiError::NotFound(_) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": self.to_string() }))).into_response()
            }
            ApiError::BadRequest(_) => {
                debug!(error = %self, "rejected request");
                (StatusCode::BAD_REQUEST, Json(json!({ "error": self.to_string() }))).into_response()
            }
            ApiError::InvalidBody { status, .. } => {
                debug!(error = %self, "rejected body");
                (*status, Json(json!({ "error": self.to_string() }))).into_response()
            }
        }
    }
}

/// Flatten validator output into `field -> [message, ...]`, sorted by field.
fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn field_messages_prefers_message_over_code() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "subject",
            ValidationError::new("blank").with_message("can't be blank".into()),
        );
        errors.add("content", ValidationError::new("blank"));

        let fields = field_messages(&errors);
        assert_eq!(fields["subject"], vec!["can't be blank".to_string()]);
        assert_eq!(fields["content"], vec!["blank".to_string()]);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError::NotFound("post").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let response = ApiError::BadRequest("Cannot parse `id`".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_body_keeps_its_status() {
        let response = ApiError::InvalidBody {
            status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
            message: "Expected request with `Content-Type: application/json`".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[test]
    fn validation_maps_to_422() {
        let response = ApiError::Validation(ValidationErrors::new()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
