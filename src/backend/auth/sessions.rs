/**
 * Session Management and JWT Tokens
 *
 * This module issues and validates the access tokens handed out by the
 * login endpoint. Tokens are stateless: the subject and expiry travel in
 * the claims and nothing is recorded server-side.
 */

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::backend::server::config::Settings;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User email
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// Signing keys and token policy
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    algorithm: Algorithm,
    lifetime: Duration,
}

impl TokenKeys {
    pub fn new(secret: &[u8], algorithm: Algorithm, lifetime: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            algorithm,
            lifetime,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.secret_key.as_bytes(),
            settings.algorithm,
            settings.access_token_lifetime(),
        )
    }

    /// Default token lifetime
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Create a signed access token for `subject`
    ///
    /// # Arguments
    /// * `subject` - User email, stored in the `sub` claim
    /// * `expires_delta` - Lifetime; the configured default when `None`
    pub fn create_access_token(
        &self,
        subject: &str,
        expires_delta: Option<Duration>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let expire = now + expires_delta.unwrap_or(self.lifetime);

        let claims = Claims {
            sub: subject.to_string(),
            exp: expire.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding)
    }

    /// Verify and decode an access token
    ///
    /// Fails on a bad signature, a different algorithm, a missing `exp`
    /// claim or an expired token.
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let validation = Validation::new(self.algorithm);
        let token_data = decode::<Claims>(token, &self.decoding, &validation)?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::errors::ErrorKind;

    fn keys() -> TokenKeys {
        TokenKeys::new(b"test-secret", Algorithm::HS256, Duration::minutes(30))
    }

    #[test]
    fn test_create_token() {
        let token = keys().create_access_token("test@example.com", None).unwrap();
        assert!(!token.is_empty());
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_decode_token() {
        let keys = keys();
        let token = keys.create_access_token("test@example.com", None).unwrap();

        let claims = keys.decode_access_token(&token).unwrap();
        assert_eq!(claims.sub, "test@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_default_lifetime_applies() {
        let keys = keys();
        let token = keys.create_access_token("test@example.com", None).unwrap();
        let claims = keys.decode_access_token(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn test_explicit_lifetime_applies() {
        let keys = keys();
        let token = keys
            .create_access_token("test@example.com", Some(Duration::minutes(5)))
            .unwrap();
        let claims = keys.decode_access_token(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, 5 * 60);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let keys = keys();
        let token = keys
            .create_access_token("test@example.com", Some(Duration::minutes(-10)))
            .unwrap();
        let err = keys.decode_access_token(&token).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::ExpiredSignature);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = keys().create_access_token("test@example.com", None).unwrap();
        let other = TokenKeys::new(b"other-secret", Algorithm::HS256, Duration::minutes(30));
        let err = other.decode_access_token(&token).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidSignature);
    }

    #[test]
    fn test_algorithm_mismatch_is_rejected() {
        let token = keys().create_access_token("test@example.com", None).unwrap();
        let other = TokenKeys::new(b"test-secret", Algorithm::HS512, Duration::minutes(30));
        assert!(other.decode_access_token(&token).is_err());
    }

    #[test]
    fn test_verify_invalid_token() {
        assert!(keys().decode_access_token("invalid.token.here").is_err());
    }

    #[test]
    fn test_from_settings_uses_configured_lifetime() {
        let settings = crate::backend::server::config::test_settings();
        let keys = TokenKeys::from_settings(&settings);
        assert_eq!(keys.lifetime(), Duration::minutes(30));
    }
}
