/**
 * API Routes
 *
 * # Routes
 *
 * ## Public
 * - `POST /users/register` - User registration
 * - `GET /users` - List users
 * - `POST /token` - User login (OAuth2 password form)
 * - `POST /logout` - Clear the session cookie
 *
 * ## Authenticated
 * - `GET /users/me` - Get current user info
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::{
    list_users, login_for_access_token, logout, read_users_me, register_user,
};
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::routes::paths::{
    API_LOGOUT, API_TOKEN, API_USERS, API_USERS_ME, API_USER_REGISTER,
};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - State handed to the authentication middleware
///
/// # Returns
///
/// Router with API routes configured
///
/// # Authentication
///
/// `/users/me` sits behind `auth_middleware`, which accepts a bearer token
/// or the session cookie. Other routes are public.
pub fn configure_api_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route(API_USERS_ME, get(read_users_me))
        .route_layer(middleware::from_fn_with_state(app_state, auth_middleware));

    router
        .route(API_USER_REGISTER, post(register_user))
        .route(API_USERS, get(list_users))
        .route(API_TOKEN, post(login_for_access_token))
        .route(API_LOGOUT, post(logout))
        .merge(protected)
}
