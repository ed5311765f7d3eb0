//! Session token creation and verification.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::config::SessionConfig;
use crate::errors::AppError;

/// Default session lifetime in seconds (24 hours).
pub const SESSION_TOKEN_TTL: u64 = 24 * 60 * 60;

/// Claims embedded in a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user id)
    pub sub: String,
    /// Account email, if the auth provider includes one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Expiration time (unix timestamp)
    pub exp: u64,
    /// Issued at (unix timestamp)
    pub iat: u64,
    /// Token id
    pub jti: String,
}

/// Verifies session tokens issued by the auth provider.
///
/// Tokens are HS256 JWTs signed with the shared `SESSION_SECRET`. Verification
/// is stateless; revocation is the provider's concern and expired tokens are
/// rejected by the `exp` claim.
#[derive(Clone)]
pub struct SessionAuth {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl SessionAuth {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
        }
    }

    /// Mint a session token. Used by tests and local tooling; in production
    /// the auth provider mints tokens with the same secret.
    pub fn create_token(&self, user_id: &str, email: Option<&str>) -> Result<String, AppError> {
        let now = Utc::now().timestamp() as u64;
        let claims = SessionClaims {
            sub: user_id.to_string(),
            email: email.map(String::from),
            exp: now + SESSION_TOKEN_TTL,
            iat: now,
            jti: Uuid::now_v7().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalServerError(format!("Failed to create token: {e}")))
    }

    /// Verify a token's signature and expiry, returning its claims.
    pub fn verify_token(&self, token: &str) -> Result<SessionClaims, AppError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::Unauthorized("Session expired".to_string())
                }
                _ => AppError::Unauthorized("Invalid session token".to_string()),
            })
    }
}
