/**
 * User Model and In-Memory Store
 *
 * Users live in a process-wide map keyed by their normalised email. The
 * store remembers insertion order so listings are stable.
 */

use std::collections::HashMap;
use std::sync::Arc;

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::backend::auth::handlers::types::UserOut;
use crate::backend::auth::passwords::verify_password;
use crate::backend::error::BackendError;

/// Conflict message for a second registration with the same email
pub const EMAIL_ALREADY_REGISTERED: &str = "Email already registered";

/// User record as kept by the store
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInDb {
    /// Unique user ID, equal to the email
    pub id: String,
    pub full_name: String,
    /// Normalised email address
    pub email: String,
    /// Hashed password (bcrypt)
    pub hashed_password: String,
    #[serde(default)]
    pub disabled: bool,
}

impl UserInDb {
    /// Create an enabled user whose ID is its email
    pub fn new(full_name: String, email: String, hashed_password: String) -> Self {
        Self {
            id: email.clone(),
            full_name,
            email,
            hashed_password,
            disabled: false,
        }
    }

    /// Public view of the user, without the hash or the disabled flag
    pub fn to_public(&self) -> UserOut {
        UserOut {
            id: self.id.clone(),
            full_name: self.full_name.clone(),
            email: self.email.clone(),
        }
    }
}

impl std::fmt::Debug for UserInDb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserInDb")
            .field("id", &self.id)
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

#[derive(Default)]
struct UserTable {
    order: Vec<String>,
    by_email: HashMap<String, UserInDb>,
}

/// Shared handle to the user map
///
/// Cloning the handle shares the underlying map.
#[derive(Clone, Default)]
pub struct UserStore {
    inner: Arc<RwLock<UserTable>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user
    ///
    /// # Errors
    /// * `409 Conflict` - a user with the same email already exists
    pub async fn insert(&self, user: UserInDb) -> Result<UserInDb, BackendError> {
        let mut table = self.inner.write().await;
        if table.by_email.contains_key(&user.email) {
            tracing::warn!("Registration rejected, email already taken: {}", user.email);
            return Err(BackendError::handler(
                StatusCode::CONFLICT,
                EMAIL_ALREADY_REGISTERED,
            ));
        }

        table.order.push(user.email.clone());
        table.by_email.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    /// Look up a user by email
    pub async fn get(&self, email: &str) -> Option<UserInDb> {
        self.inner.read().await.by_email.get(email).cloned()
    }

    pub async fn contains(&self, email: &str) -> bool {
        self.inner.read().await.by_email.contains_key(email)
    }

    /// All users in registration order
    pub async fn list(&self) -> Vec<UserInDb> {
        let table = self.inner.read().await;
        table
            .order
            .iter()
            .filter_map(|email| table.by_email.get(email).cloned())
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.order.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Check a username/password pair against the store
///
/// # Arguments
/// * `store` - User store
/// * `username` - Email as typed on the login form
/// * `password` - Plain password
///
/// # Returns
/// The user, or `None` when the user is unknown or the password is wrong.
/// The two cases are indistinguishable to the caller.
///
/// # Errors
/// A stored hash that bcrypt cannot parse.
pub async fn authenticate_user(
    store: &UserStore,
    username: &str,
    password: &str,
) -> Result<Option<UserInDb>, BackendError> {
    let Some(user) = store.get(username).await else {
        tracing::warn!("Login attempt for unknown user: {}", username);
        return Ok(None);
    };

    let valid = verify_password(password, &user.hashed_password).map_err(|e| {
        tracing::error!("Password verification error for {}: {:?}", username, e);
        BackendError::from(e)
    })?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", username);
        return Ok(None);
    }

    Ok(Some(user))
}
