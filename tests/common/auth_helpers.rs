//! Authentication test helpers
//!
//! Builds test servers around a fresh user store and provides shortcuts
//! for registering users, logging in and sending credentials.

use std::collections::HashMap;

use axum::http::{
    header::{AUTHORIZATION, COOKIE},
    HeaderName, HeaderValue, StatusCode,
};
use axum_test::TestServer;
use serde_json::{json, Value};
use userhub::backend::auth::passwords::hash_password;
use userhub::backend::auth::users::UserInDb;
use userhub::backend::routes::create_router;
use userhub::backend::server::{AppState, Settings};
use uuid::Uuid;

/// Password that satisfies every registration rule
pub const TEST_PASSWORD: &str = "String1";

/// Settings for tests: cheap bcrypt, fixed secret, static files from the crate
pub fn test_settings() -> Settings {
    settings_with(&[])
}

/// Test settings with some variables overridden
pub fn settings_with(overrides: &[(&str, &str)]) -> Settings {
    let mut vars: HashMap<String, String> = [
        ("PROJECT_NAME", "User Hub"),
        ("PROJECT_NAME_HTML", "<b>User</b>Hub"),
        ("APP_VERSION", "1.2.3"),
        ("SECRET_KEY", "integration-test-secret"),
        ("BCRYPT_COST", "4"),
        ("STATIC_DIR", concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    for (key, value) in overrides {
        vars.insert(key.to_string(), value.to_string());
    }
    Settings::from_lookup(|key| vars.get(key).cloned()).expect("valid test settings")
}

/// Fresh state with an empty user store
pub fn test_state() -> AppState {
    AppState::new(test_settings()).expect("templates compile")
}

/// Test server over a fresh state
pub fn test_server() -> TestServer {
    test_server_with_state(test_state())
}

/// Test server over an existing state, so tests can seed the store
pub fn test_server_with_state(state: AppState) -> TestServer {
    TestServer::new(create_router(state)).expect("test server starts")
}

/// Unique email for a test user
pub fn unique_email() -> String {
    format!("test_{}@example.com", Uuid::new_v4().simple())
}

/// Valid registration body for `email`
pub fn registration(email: &str) -> Value {
    json!({
        "full_name": "John Doe",
        "email": email,
        "password": TEST_PASSWORD,
        "confirm_password": TEST_PASSWORD,
        "agreement": true
    })
}

/// Register a user through the API and return the response body
pub async fn register(server: &TestServer, email: &str) -> Value {
    let response = server.post("/users/register").json(&registration(email)).await;
    assert_eq!(response.status_code(), StatusCode::OK, "{}", response.text());
    response.json()
}

/// Log in through the token endpoint and return the access token
pub async fn login(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/token")
        .form(&[("username", email), ("password", password)])
        .await;
    assert_eq!(response.status_code(), StatusCode::OK, "{}", response.text());
    let body: Value = response.json();
    body["access_token"]
        .as_str()
        .expect("access_token in response")
        .to_string()
}

/// Put a user straight into the store
pub async fn seed_user(state: &AppState, email: &str, disabled: bool) -> UserInDb {
    let mut user = UserInDb::new(
        "Seeded User".to_string(),
        email.to_string(),
        hash_password(TEST_PASSWORD, 4).expect("hash"),
    );
    user.disabled = disabled;
    state.users.insert(user).await.expect("seed user")
}

/// `Authorization: Bearer <token>`
pub fn bearer(token: &str) -> (HeaderName, HeaderValue) {
    (
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).expect("header value"),
    )
}

/// `Cookie: access_token=<token>`
pub fn session_cookie(token: &str) -> (HeaderName, HeaderValue) {
    (
        COOKIE,
        HeaderValue::from_str(&format!("access_token={}", token)).expect("header value"),
    )
}
