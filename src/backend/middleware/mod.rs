//! Middleware Module
//!
//! This module contains the HTTP middleware and request extractors that
//! authenticate callers.
//!
//! # Architecture
//!
//! - **`credentials`** - Locates the bearer header or session cookie and
//!   builds session cookies
//! - **`auth`** - Verifies the token, resolves the user, and exposes it to
//!   handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use userhub::backend::middleware::{auth_middleware, ActiveUser};
//! use userhub::backend::server::config::Settings;
//! use userhub::backend::server::state::AppState;
//!
//! async fn me(ActiveUser(user): ActiveUser) -> String {
//!     user.email
//! }
//!
//! # fn example(settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
//! let state = AppState::new(settings)?;
//! let app: Router = Router::new()
//!     .route("/users/me", get(me))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
//!     .with_state(state);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod credentials;

pub use auth::{
    auth_middleware, resolve_user, ActiveUser, AuthUser, AuthenticatedUser, MaybeUser,
    INACTIVE_USER,
};
pub use credentials::{
    expired_session_cookie, extract_credential, session_cookie, Credential, SESSION_COOKIE,
};
