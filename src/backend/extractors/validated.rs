/**
 * Validated Body Extractors
 *
 * Both extractors first turn the body into an untyped JSON value and then
 * hand it to `FromBody`, so JSON and form submissions share one set of
 * validation rules and one error format.
 */

use axum::{
    body::Bytes,
    extract::{Form, FromRequest, Request},
};
use serde_json::{Map, Value};

use crate::backend::error::BackendError;
use crate::shared::validation::{json_invalid, FieldError, FromBody, ValidationErrors};

/// JSON body validated with `T`'s rules
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: FromBody,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::warn!("Failed to read request body: {}", rejection.body_text());
            BackendError::handler(rejection.status(), rejection.body_text())
        })?;

        let body = parse_json_body(&bytes)?;
        let value = T::from_body(&body).map_err(|errors| {
            tracing::warn!("Request body rejected: {}", errors);
            errors
        })?;

        Ok(ValidatedJson(value))
    }
}

/// Parse raw bytes as JSON, mapping an empty body to a missing-body error
fn parse_json_body(bytes: &[u8]) -> Result<Value, ValidationErrors> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(ValidationErrors::single(FieldError::new(
            "missing",
            vec!["body".into()],
            "Field required",
            Value::Null,
        )));
    }

    serde_json::from_slice(bytes).map_err(|e| {
        tracing::warn!("JSON parsing failed at line {}", e.line());
        json_invalid(&e, bytes)
    })
}

/// URL-encoded form body validated with `T`'s rules
///
/// Every form value arrives as a JSON string. When a key repeats, the
/// first value wins.
#[derive(Debug)]
pub struct ValidatedForm<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedForm<T>
where
    T: FromBody,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::warn!("Failed to read form body: {}", rejection.body_text());
                BackendError::handler(rejection.status(), rejection.body_text())
            })?;

        let body = form_to_json(pairs);
        let value = T::from_body(&body).map_err(|errors| {
            tracing::warn!("Form body rejected: {}", errors);
            errors
        })?;

        Ok(ValidatedForm(value))
    }
}

fn form_to_json(pairs: Vec<(String, String)>) -> Value {
    let mut map = Map::new();
    for (key, value) in pairs {
        map.entry(key).or_insert(Value::String(value));
    }
    Value::Object(map)
}
