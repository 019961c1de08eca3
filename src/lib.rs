//! User Hub - Main Library
//!
//! A small web backend offering user registration, credential login and
//! JWT authentication, with server-rendered pages for a thin browser
//! frontend.
//!
//! # Overview
//!
//! - Registration with field-by-field validation
//! - OAuth2 password-grant login issuing JWT access tokens
//! - Authentication by bearer header or session cookie
//! - In-memory user store keyed by email
//! - Jinja-style HTML templates and static assets
//!
//! # Module Structure
//!
//! - **`shared`** - Request validation and email checks
//!   - Validation error format, body field readers
//!   - Email address syntax and normalisation
//!
//! - **`backend`** - Axum HTTP server
//!   - Settings, application state, router
//!   - Authentication, user store, handlers
//!   - Middleware, extractors, error responses
//!   - Page templates
//!
//! # Usage
//!
//! ```rust,no_run
//! use userhub::backend::server::{create_app, Settings};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(Settings::from_env()?)?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations
//! - `BackendError` for request failures, rendered as `{"detail": ...}`
//! - `ConfigError` for settings that are missing or malformed

/// Shared types and validation
pub mod shared;

/// Backend server-side code
pub mod backend;
