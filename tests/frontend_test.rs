//! Frontend integration tests
//!
//! Pages, static assets and the 404 and 405 fallbacks.

#[macro_use]
mod common;

use axum::http::{header::CONTENT_TYPE, StatusCode};

use common::*;

#[tokio::test]
async fn test_index_page() {
    let server = test_server();
    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let content_type = response.headers()[CONTENT_TYPE].to_str().unwrap().to_string();
    assert_contains!(content_type, "text/html");

    let html = response.text();
    assert_contains!(html, "<title>User Hub</title>");
    assert_contains!(html, "<b>User</b>Hub");
    assert_contains!(html, "v1.2.3");
    assert_contains!(html, "Sign in");
}

#[tokio::test]
async fn test_login_and_register_pages() {
    let server = test_server();

    let login = server.get("/login").await;
    assert_eq!(login.status_code(), StatusCode::OK);
    assert_contains!(login.text(), "js-login-form");

    let register = server.get("/register").await;
    assert_eq!(register.status_code(), StatusCode::OK);
    assert_contains!(register.text(), "name=\"confirm_password\"");
}

#[tokio::test]
async fn test_index_shows_signed_in_user() {
    let server = test_server();
    let email = unique_email();
    register(&server, &email).await;
    let token = login(&server, &email, TEST_PASSWORD).await;

    let (name, value) = session_cookie(&token);
    let response = server.get("/").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert_contains!(html, "Signed in as");
    assert_contains!(html, email.as_str());
}

#[tokio::test]
async fn test_pages_ignore_bad_tokens() {
    let server = test_server();
    let (name, value) = session_cookie("not.a.token");
    let response = server.get("/").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(!response.text().contains("Signed in as"));
}

#[tokio::test]
async fn test_static_assets() {
    let server = test_server();

    let script = server.get("/static/js/app.js").await;
    assert_eq!(script.status_code(), StatusCode::OK);
    assert_contains!(script.text(), "mapErrorsToForm");

    let favicon = server.get("/favicon.ico").await;
    assert_eq!(favicon.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = test_server();
    let response = server.get("/does-not-exist").await;

    assert_detail!(response, StatusCode::NOT_FOUND, "Not Found");
}

#[tokio::test]
async fn test_missing_static_file_is_not_found() {
    let server = test_server();
    let response = server.get("/static/js/missing.js").await;

    assert_detail!(response, StatusCode::NOT_FOUND, "Not Found");
}

#[tokio::test]
async fn test_wrong_method_is_not_allowed() {
    let server = test_server();
    let response = server.get("/token").await;

    assert_detail!(response, StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");
}
