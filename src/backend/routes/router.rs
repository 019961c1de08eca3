/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Frontend routes (pages, favicon, static files)
 * 2. API routes (registration, login, users)
 * 3. Fallback handlers (404 and 405)
 */

use axum::{http::StatusCode, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::frontend_routes::configure_frontend_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (settings, users, keys, templates)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// ## Fallback
///
/// Unknown routes and missing static files get `404 {"detail": "Not Found"}`,
/// known routes called with the wrong method get
/// `405 {"detail": "Method Not Allowed"}`.
pub fn create_router(app_state: AppState) -> Router<()> {
    let static_dir = app_state.settings.static_dir.clone();
    tracing::info!("Serving static files from {}", static_dir.display());

    let router = Router::new();

    // Add pages and static files
    let router = configure_frontend_routes(router, &static_dir);

    // Add API routes
    let router = configure_api_routes(router, app_state.clone());

    // Fallback handlers for 404 and 405
    let router = router
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed);

    router
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}

pub(crate) async fn not_found() -> BackendError {
    BackendError::handler(StatusCode::NOT_FOUND, "Not Found")
}

async fn method_not_allowed() -> BackendError {
    BackendError::handler(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
