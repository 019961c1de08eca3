/**
 * Request Credentials
 *
 * Locates the access token of a request. Two sources are accepted, in
 * priority order:
 *
 * 1. `Authorization: Bearer <token>` (scheme is case-insensitive)
 * 2. the `access_token` cookie set by the login endpoint
 *
 * This module also builds the `Set-Cookie` values for that cookie.
 */

use axum::http::{
    header::{AUTHORIZATION, COOKIE},
    HeaderMap,
};

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "access_token";

/// A token together with where it was found
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    Bearer(String),
    Session(String),
}

impl Credential {
    pub fn token(&self) -> &str {
        match self {
            Self::Bearer(token) | Self::Session(token) => token,
        }
    }

    /// Short source name for logs
    pub fn source(&self) -> &'static str {
        match self {
            Self::Bearer(_) => "bearer",
            Self::Session(_) => "session",
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Credential::{}(..)", self.source())
    }
}

/// Token from an `Authorization: Bearer` header
///
/// A header with another scheme, or without a token, yields `None`.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token.to_string())
    } else {
        None
    }
}

/// Token from the session cookie
///
/// All `Cookie` headers are searched; an empty value counts as absent.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
        .filter(|token| !token.is_empty())
}

/// The request's credential, bearer header first
pub fn extract_credential(headers: &HeaderMap) -> Option<Credential> {
    bearer_token(headers)
        .map(Credential::Bearer)
        .or_else(|| session_token(headers).map(Credential::Session))
}

/// `Set-Cookie` value storing `token` for `max_age_seconds`
pub fn session_cookie(token: &str, max_age_seconds: i64, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
        SESSION_COOKIE, token, max_age_seconds
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value deleting the session cookie
pub fn expired_session_cookie(secure: bool) -> String {
    let mut cookie = format!(
        "{}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT",
        SESSION_COOKIE
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}
