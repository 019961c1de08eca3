/**
 * Authentication Handler Types
 *
 * Request and response types shared by the registration, login and
 * user handlers. Request types implement `FromBody` so every failed rule
 * is reported in one response.
 */

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::shared::email::normalize_email;
use crate::shared::validation::{BodyFields, FieldError, FromBody, StrRules, ValidationErrors};

/// Minimum length of `full_name`
pub const FULL_NAME_MIN_LENGTH: usize = 5;
/// Minimum length of `password`
pub const PASSWORD_MIN_LENGTH: usize = 5;
/// Maximum length of `password`
pub const PASSWORD_MAX_LENGTH: usize = 20;

/// Registration request
#[derive(Clone, PartialEq, Eq)]
pub struct UserRegister {
    /// Name and surname
    pub full_name: String,
    /// Normalised email
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Terms accepted; always `true` once validated
    pub agreement: bool,
}

impl std::fmt::Debug for UserRegister {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRegister")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("agreement", &self.agreement)
            .finish_non_exhaustive()
    }
}

impl FromBody for UserRegister {
    fn from_body(body: &Value) -> Result<Self, ValidationErrors> {
        let mut fields = BodyFields::new(body)?;

        let full_name = fields.string("full_name", StrRules::min(FULL_NAME_MIN_LENGTH));
        let email = fields
            .string("email", StrRules::any())
            .and_then(|raw| check_email(&mut fields, raw));
        let password = fields
            .string(
                "password",
                StrRules::bounded(PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH),
            )
            .and_then(|raw| check_password_complexity(&mut fields, raw));
        let confirm_password = fields.string("confirm_password", StrRules::any());
        let agreement = fields.boolean("agreement").and_then(|accepted| {
            if accepted {
                Some(accepted)
            } else {
                fields.reject(FieldError::value_error(
                    FieldError::body_loc("agreement"),
                    "You must accept terms",
                    body["agreement"].clone(),
                ));
                None
            }
        });

        match (full_name, email, password, confirm_password, agreement) {
            (Some(full_name), Some(email), Some(password), Some(confirm_password), Some(agreement))
                if !fields.has_errors() =>
            {
                if password != confirm_password {
                    return Err(ValidationErrors::single(FieldError::value_error(
                        vec!["body".into()],
                        "Passwords do not match",
                        body.clone(),
                    )));
                }
                Ok(Self {
                    full_name,
                    email,
                    password,
                    confirm_password,
                    agreement,
                })
            }
            _ => Err(fields.into_errors()),
        }
    }
}

/// Normalise an email field, recording a rejection
fn check_email(fields: &mut BodyFields<'_>, raw: String) -> Option<String> {
    match normalize_email(&raw) {
        Ok(email) => Some(email),
        Err(reason) => {
            fields.reject(FieldError::new(
                "value_error",
                FieldError::body_loc("email"),
                capitalize(&format!("value is not a valid email address: {}", reason)),
                Value::String(raw),
            ));
            None
        }
    }
}

/// Uppercase the first character and lowercase the rest
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Require an uppercase letter, a lowercase letter and a digit
///
/// Only the first missing class is reported.
fn check_password_complexity(fields: &mut BodyFields<'_>, password: String) -> Option<String> {
    let problem = if !password.chars().any(char::is_uppercase) {
        Some("Password must contain at least one uppercase letter")
    } else if !password.chars().any(char::is_lowercase) {
        Some("Password must contain at least one lowercase letter")
    } else if !password.chars().any(|c| c.is_ascii_digit()) {
        Some("Password must contain at least one digit")
    } else {
        None
    };

    match problem {
        Some(msg) => {
            fields.reject(FieldError::value_error(
                FieldError::body_loc("password"),
                msg,
                Value::String(password),
            ));
            None
        }
        None => Some(password),
    }
}

/// OAuth2 password-grant login form
///
/// `username` carries the email.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordForm {
    pub username: String,
    pub password: String,
    pub grant_type: Option<String>,
    /// Space-separated scopes
    pub scopes: Vec<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl std::fmt::Debug for PasswordForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordForm")
            .field("username", &self.username)
            .field("grant_type", &self.grant_type)
            .field("scopes", &self.scopes)
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

impl FromBody for PasswordForm {
    fn from_body(body: &Value) -> Result<Self, ValidationErrors> {
        let mut fields = BodyFields::new(body)?;

        let grant_type = fields.optional_string("grant_type", StrRules::any());
        if let Some(grant) = grant_type.as_deref() {
            if grant != "password" {
                fields.reject(
                    FieldError::new(
                        "string_pattern_mismatch",
                        FieldError::body_loc("grant_type"),
                        "String should match pattern '^password$'",
                        Value::String(grant.to_string()),
                    )
                    .with_ctx(json!({ "pattern": "^password$" })),
                );
            }
        }
        let username = fields.string("username", StrRules::any());
        let password = fields.string("password", StrRules::any());
        let scope = fields.optional_string("scope", StrRules::any());
        let client_id = fields.optional_string("client_id", StrRules::any());
        let client_secret = fields.optional_string("client_secret", StrRules::any());

        match (username, password) {
            (Some(username), Some(password)) if !fields.has_errors() => Ok(Self {
                username,
                password,
                grant_type,
                scopes: scope
                    .map(|s| s.split_whitespace().map(str::to_string).collect())
                    .unwrap_or_default(),
                client_id,
                client_secret,
            }),
            _ => Err(fields.into_errors()),
        }
    }
}

/// Public user info returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserOut {
    /// User ID (the email)
    pub id: String,
    pub full_name: String,
    pub email: String,
}

/// Access token response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Signed JWT
    pub access_token: String,
    /// Always `bearer`
    pub token_type: String,
}

impl Token {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}
