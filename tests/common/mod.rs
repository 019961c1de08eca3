//! Common test utilities and helpers
//!
//! - Settings and test server construction
//! - Authentication helpers (register, login, headers)
//! - Custom assertion macros
#![allow(dead_code)]

#[macro_use]
pub mod assertions;
pub mod auth_helpers;

// Re-export commonly used utilities
pub use auth_helpers::*;
