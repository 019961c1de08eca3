/**
 * Authentication Middleware
 *
 * This module provides the middleware and extractors for routes that
 * need the requesting user. The token is taken from the Authorization
 * header or the session cookie (see `credentials`), verified, and its
 * subject looked up in the user store.
 */

use std::convert::Infallible;

use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::{request::Parts, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::Claims;
use crate::backend::auth::users::UserInDb;
use crate::backend::error::BackendError;
use crate::backend::middleware::credentials::extract_credential;
use crate::backend::server::state::AppState;

/// Message for a disabled account
pub const INACTIVE_USER: &str = "Inactive user";

/// User resolved from a verified token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user: UserInDb,
    pub claims: Claims,
}

/// Resolve the requesting user from request headers
///
/// # Errors
///
/// * `401 Not authenticated` - no bearer header and no session cookie
/// * `401 Could not validate credentials` - the token is malformed, expired
///   or badly signed, or its subject is not a known user
pub async fn resolve_user(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<AuthenticatedUser, BackendError> {
    let credential = extract_credential(headers).ok_or_else(|| {
        tracing::warn!("Request without credentials");
        BackendError::not_authenticated()
    })?;

    let claims = state
        .tokens
        .decode_access_token(credential.token())
        .map_err(|e| {
            tracing::warn!("Invalid {} token: {:?}", credential.source(), e.kind());
            BackendError::invalid_credentials()
        })?;

    let user = state.users.get(&claims.sub).await.ok_or_else(|| {
        tracing::warn!("Token subject is not a known user: {}", claims.sub);
        BackendError::invalid_credentials()
    })?;

    Ok(AuthenticatedUser { user, claims })
}

/// Authentication middleware
///
/// This middleware:
/// 1. Finds the bearer token or session cookie
/// 2. Verifies the token
/// 3. Looks up the token's subject
/// 4. Attaches the user to request extensions for use in handlers
///
/// Rejects with 401 when any step fails.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    // Request bodies are not Sync, so the headers are not borrowed across the await
    let headers = request.headers().clone();
    let authenticated = resolve_user(&app_state, &headers).await?;
    request.extensions_mut().insert(authenticated);
    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Uses the user attached by `auth_middleware` when present and resolves
/// the request's credentials otherwise.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthenticatedUser>() {
            return Ok(AuthUser(user.clone()));
        }

        let app_state = AppState::from_ref(state);
        let user = resolve_user(&app_state, &parts.headers).await?;
        Ok(AuthUser(user))
    }
}

/// Authenticated user whose account is not disabled
///
/// Rejects disabled accounts with `400 Inactive user`.
#[derive(Clone, Debug)]
pub struct ActiveUser(pub UserInDb);

impl<S> FromRequestParts<S> for ActiveUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthUser(authenticated) = AuthUser::from_request_parts(parts, state).await?;
        if authenticated.user.disabled {
            tracing::warn!("Disabled user attempted access: {}", authenticated.user.email);
            return Err(BackendError::handler(StatusCode::BAD_REQUEST, INACTIVE_USER));
        }
        Ok(ActiveUser(authenticated.user))
    }
}

/// Optionally authenticated user, for pages that render either way
#[derive(Clone, Debug, Default)]
pub struct MaybeUser(pub Option<UserInDb>);

impl<S> FromRequestParts<S> for MaybeUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state)
            .await
            .ok()
            .map(|AuthUser(authenticated)| authenticated.user);
        Ok(MaybeUser(user))
    }
}
