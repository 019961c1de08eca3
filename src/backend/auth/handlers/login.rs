/**
 * Login Handler
 *
 * This module implements the token endpoint, POST /token, using the OAuth2
 * password grant form.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Generate JWT token
 * 4. Return the token and set it as the session cookie
 *
 * # Security
 *
 * - Unknown users and wrong passwords get the same 401 response
 * - The session cookie is `HttpOnly` and `SameSite=Lax`
 */

use std::sync::Arc;

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Json},
};

use crate::backend::auth::handlers::types::{PasswordForm, Token};
use crate::backend::auth::sessions::TokenKeys;
use crate::backend::auth::users::{authenticate_user, UserStore};
use crate::backend::error::BackendError;
use crate::backend::extractors::ValidatedForm;
use crate::backend::middleware::credentials::session_cookie;
use crate::backend::server::config::Settings;
use crate::shared::email::normalize_email;

/// Message for rejected login attempts
pub const INCORRECT_CREDENTIALS: &str = "Incorrect username or password";

/// Token handler
///
/// # Arguments
///
/// * `State(users)` - User store
/// * `State(tokens)` - JWT keys
/// * `State(settings)` - Settings (cookie flags)
/// * `ValidatedForm(form)` - OAuth2 password form; `username` is the email
///
/// # Returns
///
/// `{"access_token": "...", "token_type": "bearer"}` and a `Set-Cookie`
/// header carrying the same token
///
/// # Errors
///
/// * `401 Unauthorized` - If the user is unknown or the password is wrong
/// * `422 Unprocessable Entity` - If the form is incomplete
/// * `500 Internal Server Error` - If verification or token generation fails
///
/// # Example Request
///
/// ```http
/// POST /token HTTP/1.1
/// Content-Type: application/x-www-form-urlencoded
///
/// username=john%40example.com&password=String1
/// ```
pub async fn login_for_access_token(
    State(users): State<UserStore>,
    State(tokens): State<Arc<TokenKeys>>,
    State(settings): State<Arc<Settings>>,
    ValidatedForm(form): ValidatedForm<PasswordForm>,
) -> Result<impl IntoResponse, BackendError> {
    let username = normalize_email(&form.username).unwrap_or_else(|_| form.username.trim().to_string());
    tracing::info!("Login request for: {}", username);

    let user = authenticate_user(&users, &username, &form.password)
        .await?
        .ok_or_else(|| BackendError::unauthorized(INCORRECT_CREDENTIALS))?;

    let lifetime = tokens.lifetime();
    let access_token = tokens
        .create_access_token(&user.email, Some(lifetime))
        .map_err(|e| {
            tracing::error!("Failed to create token: {:?}", e);
            BackendError::from(e)
        })?;

    tracing::info!("User logged in successfully: {}", user.email);

    let cookie = session_cookie(
        &access_token,
        lifetime.num_seconds(),
        settings.session_cookie_secure,
    );
    Ok(([(SET_COOKIE, cookie)], Json(Token::bearer(access_token))))
}
