/**
 * User Listing Handler
 *
 * GET /users returns every registered user in registration order. The
 * listing is public.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::UserOut;
use crate::backend::auth::users::UserStore;

/// List users handler
pub async fn list_users(State(users): State<UserStore>) -> Json<Vec<UserOut>> {
    let users: Vec<UserOut> = users.list().await.iter().map(|u| u.to_public()).collect();
    tracing::debug!("Listing {} users", users.len());
    Json(users)
}
