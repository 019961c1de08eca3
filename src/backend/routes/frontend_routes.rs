/**
 * Frontend Routes
 *
 * HTML pages, the favicon and the static asset directory.
 */

use std::path::Path;

use axum::{handler::HandlerWithoutStateExt, routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};

use crate::backend::frontend::handlers::{index, login_page, register_page};
use crate::backend::routes::router::not_found;
use crate::backend::routes::paths::{FAVICON, PAGE_INDEX, PAGE_LOGIN, PAGE_REGISTER, STATIC_PREFIX};
use crate::backend::server::state::AppState;

/// Configure page and static file routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `static_dir` - Directory served under `/static`; also holds `favicon.ico`
///
/// Missing static files get the same JSON 404 as unknown routes.
pub fn configure_frontend_routes(router: Router<AppState>, static_dir: &Path) -> Router<AppState> {
    router
        .route(PAGE_INDEX, get(index))
        .route(PAGE_LOGIN, get(login_page))
        .route(PAGE_REGISTER, get(register_page))
        .route_service(FAVICON, ServeFile::new(static_dir.join("favicon.ico")))
        .nest_service(
            STATIC_PREFIX,
            ServeDir::new(static_dir).not_found_service(not_found.into_service()),
        )
}
