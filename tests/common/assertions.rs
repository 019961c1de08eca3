//! Custom assertion macros
//!
//! Error responses share the `{"detail": ...}` shape; these macros check
//! status and detail in one step.

/// Assert a response's status and its `detail` message
#[macro_export]
macro_rules! assert_detail {
    ($response:expr, $status:expr, $detail:expr) => {{
        let response = &$response;
        assert_eq!(response.status_code(), $status, "body: {}", response.text());
        let body: serde_json::Value = response.json();
        assert_eq!(body["detail"], serde_json::json!($detail));
    }};
}

/// Assert that a validation error list contains `expected`
#[macro_export]
macro_rules! assert_has_error {
    ($response:expr, $expected:expr) => {{
        let response = &$response;
        assert_eq!(
            response.status_code(),
            axum::http::StatusCode::UNPROCESSABLE_ENTITY,
            "body: {}",
            response.text()
        );
        let body: serde_json::Value = response.json();
        let expected: serde_json::Value = $expected;
        let errors = body["detail"].as_array().expect("detail should be a list");
        assert!(
            errors.contains(&expected),
            "expected {} in {}",
            expected,
            body["detail"]
        );
    }};
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected {:?} to contain {:?}",
            $haystack,
            $needle
        );
    };
}
