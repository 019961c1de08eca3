/**
 * Backend Error Types
 *
 * This module defines the error type returned by handlers and extractors.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - `HandlerError` - a request-level failure with an explicit status
 *   (duplicate email, inactive user, unknown route)
 * - `AuthenticationError` - missing or rejected credentials; the response
 *   carries `WWW-Authenticate: Bearer`
 * - `ValidationError` - the request body failed one or more rules
 *
 * ## Internal Errors
 *
 * Failures of bcrypt, jsonwebtoken, the template engine or JSON encoding.
 * They are logged and reported to clients as a bare 500.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::validation::ValidationErrors;

/// Message for a request without any credentials
pub const NOT_AUTHENTICATED: &str = "Not authenticated";

/// Message for a request whose credentials were rejected
pub const INVALID_CREDENTIALS: &str = "Could not validate credentials";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use axum::http::StatusCode;
/// use userhub::backend::error::BackendError;
///
/// let err = BackendError::handler(StatusCode::CONFLICT, "Email already registered");
/// assert_eq!(err.status_code(), StatusCode::CONFLICT);
///
/// let err = BackendError::unauthorized("Incorrect username or password");
/// assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request-level failure with an explicit status code
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Missing or rejected credentials (401)
    #[error("Authentication error: {message}")]
    AuthenticationError {
        /// Human-readable error message
        message: String,
    },

    /// Request body failed validation (422)
    #[error("Validation error: {0}")]
    ValidationError(ValidationErrors),

    /// Password hashing or verification failed
    #[error("Password hashing error: {0}")]
    PasswordError(#[from] bcrypt::BcryptError),

    /// Token encoding failed
    #[error("Token error: {0}")]
    TokenError(#[from] jsonwebtoken::errors::Error),

    /// Template lookup or rendering failed
    #[error("Template error: {0}")]
    TemplateError(#[from] minijinja::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new authentication error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::AuthenticationError {
            message: message.into(),
        }
    }

    /// No credentials were presented
    pub fn not_authenticated() -> Self {
        Self::unauthorized(NOT_AUTHENTICATED)
    }

    /// Credentials were presented but could not be validated
    pub fn invalid_credentials() -> Self {
        Self::unauthorized(INVALID_CREDENTIALS)
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `AuthenticationError` - 401 Unauthorized
    /// - `ValidationError` - 422 Unprocessable Entity
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::AuthenticationError { .. } => StatusCode::UNAUTHORIZED,
            Self::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::PasswordError(_)
            | Self::TokenError(_)
            | Self::TemplateError(_)
            | Self::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    ///
    /// Internal failures are not described to clients.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::AuthenticationError { message } => message.clone(),
            Self::ValidationError(errors) => errors.to_string(),
            _ => "Internal Server Error".to_string(),
        }
    }
}

impl From<ValidationErrors> for BackendError {
    fn from(errors: ValidationErrors) -> Self {
        Self::ValidationError(errors)
    }
}
