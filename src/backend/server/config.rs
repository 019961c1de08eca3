/**
 * Server Configuration
 *
 * This module loads the application settings from environment variables.
 * The binary loads a `.env` file first (via `dotenv`), so every variable
 * can also be set there.
 *
 * # Variables
 *
 * | Variable | Default |
 * |---|---|
 * | `PROJECT_NAME` | required |
 * | `PROJECT_NAME_HTML` | required |
 * | `APP_VERSION` | `0.1.0` |
 * | `SECRET_KEY` | empty |
 * | `SECURITY_ALGORITHM` | `HS256` |
 * | `SECURITY_ACCESS_TOKEN_EXPIRE_MINUTES` | `30` |
 * | `SERVER_PORT` | `3000` |
 * | `STATIC_DIR` | `static` |
 * | `BCRYPT_COST` | `12` |
 * | `SESSION_COOKIE_SECURE` | `false` |
 *
 * Empty values are treated as unset.
 */

use jsonwebtoken::Algorithm;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Application settings
///
/// Built once at startup and shared with handlers through `AppState`.
#[derive(Clone)]
pub struct Settings {
    /// Plain-text project name (page titles)
    pub project_name: String,
    /// HTML-formatted project name (page headers, rendered unescaped)
    pub project_name_html: String,
    /// Application version shown in the page footer
    pub app_version: String,
    /// HMAC secret used to sign access tokens
    pub secret_key: String,
    /// JWT signing algorithm (HMAC family only)
    pub algorithm: Algorithm,
    /// Access token lifetime in minutes
    pub access_token_expire_minutes: i64,
    /// Port the server listens on
    pub server_port: u16,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
    /// Whether the session cookie carries the `Secure` attribute
    pub session_cookie_secure: bool,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("project_name", &self.project_name)
            .field("app_version", &self.app_version)
            .field("secret_key", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("access_token_expire_minutes", &self.access_token_expire_minutes)
            .field("server_port", &self.server_port)
            .field("static_dir", &self.static_dir)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("session_cookie_secure", &self.session_cookie_secure)
            .finish()
    }
}

impl Settings {
    /// Load settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings from an arbitrary key lookup
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use userhub::backend::server::config::Settings;
    ///
    /// let vars = HashMap::from([
    ///     ("PROJECT_NAME", "Demo"),
    ///     ("PROJECT_NAME_HTML", "<b>Demo</b>"),
    /// ]);
    /// let settings = Settings::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();
    /// assert_eq!(settings.access_token_expire_minutes, 30);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Lookup(lookup);

        let secret_key = vars.optional("SECRET_KEY").unwrap_or_default();
        if secret_key.is_empty() {
            tracing::warn!("SECRET_KEY is not set; access tokens are signed with an empty key");
        }

        let algorithm = match vars.optional("SECURITY_ALGORITHM") {
            None => Algorithm::HS256,
            Some(name) => parse_algorithm(&name)?,
        };

        let access_token_expire_minutes: i64 =
            vars.parsed("SECURITY_ACCESS_TOKEN_EXPIRE_MINUTES", 30)?;
        if access_token_expire_minutes <= 0 {
            return Err(ConfigError::InvalidValue {
                key: "SECURITY_ACCESS_TOKEN_EXPIRE_MINUTES",
                value: access_token_expire_minutes.to_string(),
                reason: "must be positive".to_string(),
            });
        }

        let bcrypt_cost: u32 = vars.parsed("BCRYPT_COST", bcrypt::DEFAULT_COST)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
                reason: "must be between 4 and 31".to_string(),
            });
        }

        Ok(Self {
            project_name: vars.required("PROJECT_NAME")?,
            project_name_html: vars.required("PROJECT_NAME_HTML")?,
            app_version: vars
                .optional("APP_VERSION")
                .unwrap_or_else(|| "0.1.0".to_string()),
            secret_key,
            algorithm,
            access_token_expire_minutes,
            server_port: vars.parsed("SERVER_PORT", 3000)?,
            static_dir: vars
                .optional("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("static")),
            bcrypt_cost,
            session_cookie_secure: vars.parsed("SESSION_COOKIE_SECURE", false)?,
        })
    }

    /// Access token lifetime
    pub fn access_token_lifetime(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.access_token_expire_minutes)
    }
}

struct Lookup<F>(F);

impl<F> Lookup<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn optional(&self, key: &'static str) -> Option<String> {
        (self.0)(key).filter(|value| !value.trim().is_empty())
    }

    fn required(&self, key: &'static str) -> Result<String, ConfigError> {
        self.optional(key).ok_or(ConfigError::MissingValue(key))
    }

    fn parsed<T>(&self, key: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        match self.optional(key) {
            None => Ok(default),
            Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
                key,
                value: raw.clone(),
                reason: e.to_string(),
            }),
        }
    }
}

/// Only the HMAC family works with a shared secret
fn parse_algorithm(name: &str) -> Result<Algorithm, ConfigError> {
    match name.trim() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => Err(ConfigError::InvalidValue {
            key: "SECURITY_ALGORITHM",
            value: other.to_string(),
            reason: "expected one of HS256, HS384, HS512".to_string(),
        }),
    }
}

/// Settings for unit tests: cheap bcrypt cost and a fixed secret
#[cfg(test)]
pub(crate) fn test_settings() -> Settings {
    Settings::from_lookup(|key| {
        let value = match key {
            "PROJECT_NAME" => Some("User Hub"),
            "PROJECT_NAME_HTML" => Some("<b>User</b>Hub"),
            "SECRET_KEY" => Some("unit-test-secret"),
            "BCRYPT_COST" => Some("4"),
            _ => None,
        };
        value.map(str::to_string)
    })
    .expect("test settings are valid")
}
