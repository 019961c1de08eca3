/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct holds:
 * - Settings loaded at startup
 * - The in-memory user store
 * - JWT signing and verification keys
 * - The compiled page templates
 *
 * Every field is cheap to clone: the store and the templates share their
 * contents through `Arc`.
 *
 * # Example
 *
 * ```rust,no_run
 * use axum::extract::State;
 * use userhub::backend::auth::users::UserStore;
 *
 * async fn handler(State(users): State<UserStore>) -> String {
 *     format!("{} users", users.len().await)
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::sessions::TokenKeys;
use crate::backend::auth::users::UserStore;
use crate::backend::error::BackendError;
use crate::backend::frontend::templates::Templates;
use crate::backend::server::config::Settings;

/// Application state shared by all handlers
///
/// # Fields
///
/// * `settings` - Configuration loaded from the environment
/// * `users` - User store keyed by email
/// * `tokens` - JWT keys and token lifetime
/// * `templates` - Page templates
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub users: UserStore,
    pub tokens: Arc<TokenKeys>,
    pub templates: Templates,
}

impl AppState {
    /// Build state with an empty user store
    ///
    /// # Errors
    /// A page template that fails to compile.
    pub fn new(settings: Settings) -> Result<Self, BackendError> {
        Self::with_users(settings, UserStore::new())
    }

    /// Build state around an existing user store
    pub fn with_users(settings: Settings, users: UserStore) -> Result<Self, BackendError> {
        let templates = Templates::load().map_err(|e| {
            tracing::error!("Failed to load templates: {}", e);
            e
        })?;

        Ok(Self {
            tokens: Arc::new(TokenKeys::from_settings(&settings)),
            settings: Arc::new(settings),
            users,
            templates,
        })
    }
}

/// Allows handlers to extract `State<UserStore>`
impl FromRef<AppState> for UserStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

/// Allows handlers to extract `State<Arc<Settings>>`
impl FromRef<AppState> for Arc<Settings> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.settings.clone()
    }
}

/// Allows handlers to extract `State<Arc<TokenKeys>>`
impl FromRef<AppState> for Arc<TokenKeys> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

/// Allows handlers to extract `State<Templates>`
impl FromRef<AppState> for Templates {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.templates.clone()
    }
}
