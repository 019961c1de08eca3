//! Shared Module
//!
//! Framework-independent building blocks used by the backend: request body
//! validation and email address checks. Nothing in here touches HTTP types,
//! so these pieces are tested in isolation.

/// Request body validation
pub mod validation;

/// Email address checks
pub mod email;

/// Re-export commonly used types for convenience
pub use validation::{BodyFields, FieldError, FromBody, StrRules, ValidationErrors};
pub use email::{normalize_email, EmailError};
