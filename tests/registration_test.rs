//! Registration API integration tests
//!
//! POST /users/register validation, success and duplicates, and the
//! public GET /users listing.

#[macro_use]
mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use common::*;

#[tokio::test]
async fn test_register_missing_data() {
    let server = test_server();
    let response = server.post("/users/register").json(&json!({})).await;

    for field in ["full_name", "email", "password", "confirm_password", "agreement"] {
        assert_has_error!(
            response,
            json!({"type": "missing", "loc": ["body", field], "msg": "Field required", "input": {}})
        );
    }
}

#[tokio::test]
async fn test_register_invalid_full_name() {
    let server = test_server();
    let response = server
        .post("/users/register")
        .json(&json!({"full_name": "a"}))
        .await;

    assert_has_error!(
        response,
        json!({
            "type": "string_too_short",
            "loc": ["body", "full_name"],
            "msg": "String should have at least 5 characters",
            "input": "a",
            "ctx": {"min_length": 5}
        })
    );
}

#[tokio::test]
async fn test_register_invalid_password_length() {
    let server = test_server();

    let response = server
        .post("/users/register")
        .json(&json!({"password": "a"}))
        .await;
    assert_has_error!(
        response,
        json!({
            "type": "string_too_short",
            "loc": ["body", "password"],
            "msg": "String should have at least 5 characters",
            "input": "a",
            "ctx": {"min_length": 5}
        })
    );

    let too_long = "this password is too long - it should be shorter";
    let response = server
        .post("/users/register")
        .json(&json!({"password": too_long}))
        .await;
    assert_has_error!(
        response,
        json!({
            "type": "string_too_long",
            "loc": ["body", "password"],
            "msg": "String should have at most 20 characters",
            "input": too_long,
            "ctx": {"max_length": 20}
        })
    );
}

#[tokio::test]
async fn test_register_password_complexity() {
    let server = test_server();
    let response = server
        .post("/users/register")
        .json(&json!({"password": "string1"}))
        .await;

    assert_has_error!(
        response,
        json!({
            "type": "value_error",
            "loc": ["body", "password"],
            "msg": "Password must contain at least one uppercase letter",
            "input": "string1",
            "ctx": {"error": {}}
        })
    );
}

#[tokio::test]
async fn test_register_terms_not_accepted() {
    let server = test_server();
    let response = server
        .post("/users/register")
        .json(&json!({"agreement": false}))
        .await;

    assert_has_error!(
        response,
        json!({
            "type": "value_error",
            "loc": ["body", "agreement"],
            "msg": "You must accept terms",
            "input": false,
            "ctx": {"error": {}}
        })
    );
}

#[tokio::test]
async fn test_register_invalid_email() {
    let server = test_server();
    let response = server
        .post("/users/register")
        .json(&json!({"email": "john.example.com"}))
        .await;

    assert_has_error!(
        response,
        json!({
            "type": "value_error",
            "loc": ["body", "email"],
            "msg": "Value is not a valid email address: an email address must have an @-sign.",
            "input": "john.example.com"
        })
    );
}

#[tokio::test]
async fn test_register_special_use_domain() {
    let server = test_server();
    let response = server
        .post("/users/register")
        .json(&registration("ann@foo.localhost"))
        .await;

    assert_has_error!(
        response,
        json!({
            "type": "value_error",
            "loc": ["body", "email"],
            "msg": "Value is not a valid email address: the part after the @-sign is a special-use or reserved name that cannot be used with email.",
            "input": "ann@foo.localhost"
        })
    );
}

#[tokio::test]
async fn test_register_password_digit_must_be_decimal() {
    let server = test_server();
    let mut body = registration(&unique_email());
    body["password"] = json!("Abcde½");
    body["confirm_password"] = json!("Abcde½");
    let response = server.post("/users/register").json(&body).await;

    assert_has_error!(
        response,
        json!({
            "type": "value_error",
            "loc": ["body", "password"],
            "msg": "Password must contain at least one digit",
            "input": "Abcde½",
            "ctx": {"error": {}}
        })
    );
}

#[tokio::test]
async fn test_register_passwords_do_not_match() {
    let server = test_server();
    let input = json!({
        "full_name": "John Doe",
        "email": "example@test321.com",
        "password": "String1",
        "confirm_password": "Other_pass1",
        "agreement": true
    });
    let response = server.post("/users/register").json(&input).await;

    assert_has_error!(
        response,
        json!({
            "type": "value_error",
            "loc": ["body"],
            "msg": "Passwords do not match",
            "input": input,
            "ctx": {"error": {}}
        })
    );
}

#[tokio::test]
async fn test_register_malformed_json() {
    let server = test_server();
    let response = server
        .post("/users/register")
        .text(r#"{"full_name": }"#)
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["detail"][0]["type"], "json_invalid");
    assert_eq!(body["detail"][0]["loc"][0], "body");
}

#[tokio::test]
async fn test_register_body_not_an_object() {
    let server = test_server();
    let response = server.post("/users/register").json(&json!([1, 2])).await;

    assert_has_error!(
        response,
        json!({
            "type": "model_attributes_type",
            "loc": ["body"],
            "msg": "Input should be a valid dictionary or object to extract fields from",
            "input": [1, 2]
        })
    );
}

#[tokio::test]
async fn test_register_success() {
    let server = test_server();
    let email = unique_email();

    let body = register(&server, &email).await;
    assert_eq!(
        body,
        json!({"id": email, "full_name": "John Doe", "email": email})
    );
}

#[tokio::test]
async fn test_register_normalizes_email_domain() {
    let server = test_server();
    let response = server
        .post("/users/register")
        .json(&registration("  Ann@Example.COM "))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["email"], "Ann@example.com");
    assert_eq!(body["id"], "Ann@example.com");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let server = test_server();
    let email = unique_email();
    register(&server, &email).await;

    let response = server
        .post("/users/register")
        .json(&registration(&email))
        .await;
    assert_detail!(response, StatusCode::CONFLICT, "Email already registered");
}

#[tokio::test]
async fn test_list_users_in_registration_order() {
    let server = test_server();
    let first = unique_email();
    let second = unique_email();
    register(&server, &first).await;
    register(&server, &second).await;

    let response = server.get("/users").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let users: Vec<Value> = response.json();
    let emails: Vec<&str> = users.iter().filter_map(|u| u["email"].as_str()).collect();
    assert_eq!(emails, [first.as_str(), second.as_str()]);
    assert!(users.iter().all(|u| u.get("hashed_password").is_none()));
}

#[tokio::test]
async fn test_list_users_empty() {
    let server = test_server();
    let response = server.get("/users").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!([]));
}
