/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse`, so handlers and extractors can
 * return it directly.
 *
 * # Response Format
 *
 * Every error body has a single `detail` key. For validation errors it
 * holds the list of failed rules, otherwise a message:
 *
 * ```json
 * {"detail": "Incorrect username or password"}
 * ```
 *
 * Authentication errors also carry `WWW-Authenticate: Bearer`.
 */

use axum::{
    http::{header::WWW_AUTHENTICATE, HeaderValue},
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = match &self {
            BackendError::ValidationError(errors) => json!({ "detail": errors }),
            other => json!({ "detail": other.message() }),
        };

        let mut response = (status, Json(body)).into_response();
        if matches!(self, BackendError::AuthenticationError { .. }) {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}
