//! Backend Error Module
//!
//! This module defines the error type used by HTTP handlers and extractors
//! and its conversion to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::http::StatusCode;
//! use userhub::backend::error::BackendError;
//!
//! async fn handler() -> Result<&'static str, BackendError> {
//!     Err(BackendError::handler(StatusCode::BAD_REQUEST, "Inactive user"))
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, INVALID_CREDENTIALS, NOT_AUTHENTICATED};
