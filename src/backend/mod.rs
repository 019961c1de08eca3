//! Backend Module
//!
//! This module contains all server-side code: the Axum HTTP server, the
//! authentication layer and the page handlers.
//!
//! # Architecture
//!
//! - **`server`** - Settings, application state, app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Passwords, JWT tokens, user store, API handlers
//! - **`middleware`** - Credential lookup and authentication
//! - **`extractors`** - Validated JSON and form bodies
//! - **`frontend`** - Page templates and handlers
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Settings, state and initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── extractors/     - Body extractors
//! ├── frontend/       - Pages
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! HTTP request → credential extraction → JWT verification → user lookup →
//! handler → JSON or HTML response.
//!
//! # Thread Safety
//!
//! - The user store is an `Arc<RwLock<..>>` shared by every handler
//! - Settings, keys and templates are immutable after startup and shared
//!   through `Arc`

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Request body extractors
pub mod extractors;

/// Server-rendered pages
pub mod frontend;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState, Settings};
