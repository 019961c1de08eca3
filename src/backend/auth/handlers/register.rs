/**
 * Registration Handler
 *
 * This module implements the user registration handler for POST /users/register.
 *
 * # Registration Process
 *
 * 1. Validate the body (every failed rule is reported)
 * 2. Check if the email is already registered
 * 3. Hash password using bcrypt
 * 4. Store the user
 * 5. Return the public user info
 *
 * No token is issued; the client signs in through `/token` afterwards.
 */

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::{UserOut, UserRegister};
use crate::backend::auth::passwords::hash_password;
use crate::backend::auth::users::{UserInDb, UserStore, EMAIL_ALREADY_REGISTERED};
use crate::backend::error::BackendError;
use crate::backend::extractors::ValidatedJson;
use crate::backend::server::config::Settings;

/// Registration handler
///
/// # Arguments
///
/// * `State(users)` - User store
/// * `State(settings)` - Settings (bcrypt cost)
/// * `ValidatedJson(request)` - Registration form
///
/// # Returns
///
/// The created user without its password hash
///
/// # Errors
///
/// * `422 Unprocessable Entity` - If the body fails validation
/// * `409 Conflict` - If the email is already registered
/// * `500 Internal Server Error` - If password hashing fails
///
/// # Example Request
///
/// ```http
/// POST /users/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "full_name": "John Doe",
///   "email": "john@example.com",
///   "password": "String1",
///   "confirm_password": "String1",
///   "agreement": true
/// }
/// ```
pub async fn register_user(
    State(users): State<UserStore>,
    State(settings): State<Arc<Settings>>,
    ValidatedJson(request): ValidatedJson<UserRegister>,
) -> Result<Json<UserOut>, BackendError> {
    tracing::info!("Registration request for: {}", request.email);

    if users.contains(&request.email).await {
        tracing::warn!("Email already registered: {}", request.email);
        return Err(BackendError::handler(
            StatusCode::CONFLICT,
            EMAIL_ALREADY_REGISTERED,
        ));
    }

    let hashed_password = hash_password(&request.password, settings.bcrypt_cost).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        BackendError::from(e)
    })?;

    let user = users
        .insert(UserInDb::new(request.full_name, request.email, hashed_password))
        .await?;

    tracing::info!("User registered successfully: {}", user.email);

    Ok(Json(user.to_public()))
}
