/**
 * Server Initialization
 *
 * This module builds the Axum application from loaded settings.
 *
 * # Initialization Process
 *
 * 1. Create the application state (empty user store, JWT keys, templates)
 * 2. Create the router with all routes and middleware
 */

use axum::Router;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::Settings;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// A page template that fails to compile.
pub fn create_app(settings: Settings) -> Result<Router<()>, BackendError> {
    tracing::info!(
        "Initializing {} backend v{}",
        settings.project_name,
        settings.app_version
    );

    let app_state = AppState::new(settings)?;
    Ok(create_router(app_state))
}
