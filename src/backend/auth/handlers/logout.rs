/**
 * Logout Handler
 *
 * POST /logout expires the session cookie. Tokens are stateless, so a
 * bearer token stays valid until its `exp` claim passes.
 */

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::IntoResponse,
};

use crate::backend::middleware::credentials::expired_session_cookie;
use crate::backend::server::config::Settings;

/// Logout handler
pub async fn logout(State(settings): State<Arc<Settings>>) -> impl IntoResponse {
    tracing::info!("Clearing session cookie");
    (
        StatusCode::NO_CONTENT,
        [(SET_COOKIE, expired_session_cookie(settings.session_cookie_secure))],
    )
}
