//! Request Body Validation
//!
//! Request bodies are validated field by field and every failed rule is
//! reported, not just the first one. The error list has the shape the
//! browser frontend maps onto form fields:
//!
//! ```json
//! {
//!   "detail": [
//!     {"type": "missing", "loc": ["body", "email"], "msg": "Field required", "input": {}}
//!   ]
//! }
//! ```
//!
//! A `loc` of length two points at a single field; a `loc` of length one
//! (`["body"]`) is an error about the body as a whole.
//!
//! # Usage
//!
//! ```rust
//! use serde_json::json;
//! use userhub::shared::validation::{BodyFields, StrRules};
//!
//! let body = json!({"full_name": "Ann"});
//! let mut fields = BodyFields::new(&body).unwrap();
//! let name = fields.string("full_name", StrRules::min(5));
//! assert!(name.is_none());
//! assert_eq!(fields.into_errors().len(), 1);
//! ```

use serde::Serialize;
use serde_json::{json, Map, Value};
use std::fmt;

/// One segment of an error location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LocItem {
    /// Object key
    Key(String),
    /// Character offset (used for JSON syntax errors)
    Index(usize),
}

impl From<&str> for LocItem {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<usize> for LocItem {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// A single failed validation rule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// Machine-readable error kind, e.g. `missing` or `string_too_short`
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Where the error occurred, starting with `"body"`
    pub loc: Vec<LocItem>,
    /// Human-readable message, shown next to the form field
    pub msg: String,
    /// The offending input value
    pub input: Value,
    /// Rule parameters, e.g. `{"min_length": 5}`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctx: Option<Value>,
}

impl FieldError {
    pub fn new(kind: &'static str, loc: Vec<LocItem>, msg: impl Into<String>, input: Value) -> Self {
        Self {
            kind,
            loc,
            msg: msg.into(),
            input,
            ctx: None,
        }
    }

    /// Attach rule parameters
    pub fn with_ctx(mut self, ctx: Value) -> Self {
        self.ctx = Some(ctx);
        self
    }

    /// Location of a top-level body field
    pub fn body_loc(field: &str) -> Vec<LocItem> {
        vec!["body".into(), field.into()]
    }

    /// A required field is absent; `input` is the whole body
    pub fn missing(field: &str, body: &Value) -> Self {
        Self::new("missing", Self::body_loc(field), "Field required", body.clone())
    }

    /// A custom rule failed
    pub fn value_error(loc: Vec<LocItem>, msg: impl Into<String>, input: Value) -> Self {
        Self::new("value_error", loc, msg, input).with_ctx(json!({ "error": {} }))
    }

    /// The field this error points at, if it points at a single field
    pub fn field(&self) -> Option<&str> {
        match self.loc.as_slice() {
            [_, LocItem::Key(field)] => Some(field),
            _ => None,
        }
    }
}

/// All failed rules of one request body
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(error: FieldError) -> Self {
        Self(vec![error])
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// First error reported for `field`
    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|error| error.field() == Some(field))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.len() {
            1 => write!(f, "1 validation error"),
            n => write!(f, "{} validation errors", n),
        }
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self::single(error)
    }
}

/// Length bounds for string fields, counted in characters
#[derive(Debug, Clone, Copy, Default)]
pub struct StrRules {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl StrRules {
    pub const fn any() -> Self {
        Self {
            min_length: None,
            max_length: None,
        }
    }

    pub const fn min(min_length: usize) -> Self {
        Self {
            min_length: Some(min_length),
            max_length: None,
        }
    }

    pub const fn bounded(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length: Some(min_length),
            max_length: Some(max_length),
        }
    }
}

/// Typed access to the fields of a request body
///
/// Each accessor returns `None` when the field fails validation and records
/// why. Call [`BodyFields::into_errors`] once all fields are read.
pub struct BodyFields<'a> {
    body: &'a Value,
    fields: &'a Map<String, Value>,
    errors: ValidationErrors,
}

impl<'a> BodyFields<'a> {
    /// Start reading `body`, which must be a JSON object
    pub fn new(body: &'a Value) -> Result<Self, ValidationErrors> {
        match body.as_object() {
            Some(fields) => Ok(Self {
                body,
                fields,
                errors: ValidationErrors::new(),
            }),
            None => Err(ValidationErrors::single(FieldError::new(
                "model_attributes_type",
                vec!["body".into()],
                "Input should be a valid dictionary or object to extract fields from",
                body.clone(),
            ))),
        }
    }

    fn required(&mut self, name: &str) -> Option<&'a Value> {
        let fields = self.fields;
        let value = fields.get(name);
        if value.is_none() {
            self.errors.push(FieldError::missing(name, self.body));
        }
        value
    }

    /// A required string field
    pub fn string(&mut self, name: &str, rules: StrRules) -> Option<String> {
        let value = self.required(name)?;
        self.check_string(name, value, rules)
    }

    /// An optional string field; absent and `null` both read as `None`
    pub fn optional_string(&mut self, name: &str, rules: StrRules) -> Option<String> {
        let fields = self.fields;
        match fields.get(name) {
            None | Some(Value::Null) => None,
            Some(value) => self.check_string(name, value, rules),
        }
    }

    fn check_string(&mut self, name: &str, value: &Value, rules: StrRules) -> Option<String> {
        let Some(text) = value.as_str() else {
            self.errors.push(FieldError::new(
                "string_type",
                FieldError::body_loc(name),
                "Input should be a valid string",
                value.clone(),
            ));
            return None;
        };

        let length = text.chars().count();
        if let Some(min_length) = rules.min_length {
            if length < min_length {
                self.errors.push(
                    FieldError::new(
                        "string_too_short",
                        FieldError::body_loc(name),
                        format!("String should have at least {} {}", min_length, characters(min_length)),
                        value.clone(),
                    )
                    .with_ctx(json!({ "min_length": min_length })),
                );
                return None;
            }
        }
        if let Some(max_length) = rules.max_length {
            if length > max_length {
                self.errors.push(
                    FieldError::new(
                        "string_too_long",
                        FieldError::body_loc(name),
                        format!("String should have at most {} {}", max_length, characters(max_length)),
                        value.clone(),
                    )
                    .with_ctx(json!({ "max_length": max_length })),
                );
                return None;
            }
        }

        Some(text.to_string())
    }

    /// A required boolean field
    ///
    /// Besides JSON booleans, `0`/`1` and the usual form spellings
    /// (`"true"`, `"on"`, `"yes"`, ...) are accepted.
    pub fn boolean(&mut self, name: &str) -> Option<bool> {
        let value = self.required(name)?;
        match value {
            Value::Bool(flag) => Some(*flag),
            Value::Number(number) if number.as_u64() == Some(0) => Some(false),
            Value::Number(number) if number.as_u64() == Some(1) => Some(true),
            Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
                "true" | "t" | "yes" | "y" | "on" | "1" => Some(true),
                "false" | "f" | "no" | "n" | "off" | "0" => Some(false),
                _ => {
                    self.errors.push(FieldError::new(
                        "bool_parsing",
                        FieldError::body_loc(name),
                        "Input should be a valid boolean, unable to interpret input",
                        value.clone(),
                    ));
                    None
                }
            },
            _ => {
                self.errors.push(FieldError::new(
                    "bool_type",
                    FieldError::body_loc(name),
                    "Input should be a valid boolean",
                    value.clone(),
                ));
                None
            }
        }
    }

    /// Record a failed custom rule
    pub fn reject(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }
}

fn characters(count: usize) -> &'static str {
    if count == 1 {
        "character"
    } else {
        "characters"
    }
}

/// Bodies that can be built from an untyped JSON value
pub trait FromBody: Sized {
    fn from_body(body: &Value) -> Result<Self, ValidationErrors>;
}

/// Error list for a body that is not valid JSON
pub fn json_invalid(error: &serde_json::Error, raw: &[u8]) -> ValidationErrors {
    let position = char_offset(raw, error.line(), error.column());
    ValidationErrors::single(
        FieldError::new(
            "json_invalid",
            vec!["body".into(), position.into()],
            "JSON decode error",
            json!({}),
        )
        .with_ctx(json!({ "error": error.to_string() })),
    )
}

/// Convert a 1-based line/column pair from serde_json into a character offset
///
/// serde_json counts columns in bytes.
fn char_offset(raw: &[u8], line: usize, column: usize) -> usize {
    let mut lines = raw.split_inclusive(|b| *b == b'\n');
    let preceding: usize = lines
        .by_ref()
        .take(line.saturating_sub(1))
        .map(|l| String::from_utf8_lossy(l).chars().count())
        .sum();
    let current = lines.next().unwrap_or_default();
    let prefix = &current[..column.saturating_sub(1).min(current.len())];
    preceding + String::from_utf8_lossy(prefix).chars().count()
}
