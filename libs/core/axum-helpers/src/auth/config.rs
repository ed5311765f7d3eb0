//! Configuration for session-token verification.

use core_config::{env_required, ConfigError, FromEnv};

/// Session authentication configuration.
///
/// Loaded from environment variables:
/// - `SESSION_SECRET` (required) - must be at least 32 characters
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// HMAC signing secret shared with the auth provider (minimum 32 characters)
    pub secret: String,
}

impl SessionConfig {
    /// Create a new SessionConfig with the given secret.
    ///
    /// # Panics
    /// Panics if the secret is less than 32 characters.
    pub fn new(secret: impl Into<String>) -> Self {
        let secret = secret.into();
        assert!(
            secret.len() >= 32,
            "Session secret must be at least 32 characters"
        );
        Self { secret }
    }
}

impl FromEnv for SessionConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("SESSION_SECRET")?;

        if secret.len() < 32 {
            return Err(ConfigError::ParseError {
                key: "SESSION_SECRET".to_string(),
                details: format!(
                    "must be at least 32 characters for security (got {}). Generate one with: openssl rand -base64 32",
                    secret.len()
                ),
            });
        }

        Ok(Self { secret })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_config_new_valid() {
        let secret = "this-is-a-valid-secret-with-32-chars!";
        let config = SessionConfig::new(secret);
        assert_eq!(config.secret, secret);
    }

    #[test]
    #[should_panic(expected = "Session secret must be at least 32 characters")]
    fn test_session_config_new_too_short() {
        SessionConfig::new("short");
    }

    #[test]
    fn test_session_config_from_env_missing() {
        temp_env::with_var_unset("SESSION_SECRET", || {
            let config = SessionConfig::from_env();
            assert!(config.is_err());
        });
    }

    #[test]
    fn test_session_config_from_env_too_short() {
        temp_env::with_var("SESSION_SECRET", Some("short"), || {
            let config = SessionConfig::from_env();
            assert!(config.is_err());
            assert!(config.unwrap_err().to_string().contains("32 characters"));
        });
    }
}
