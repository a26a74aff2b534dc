//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Auth application configuration
///
/// The signing secret is loaded once at process startup and passed into the
/// token service by reference - nothing reads it from the environment at
/// verification time. Rotating it invalidates every outstanding token.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Token signing secret for HMAC-SHA256 (32 bytes)
    pub token_secret: [u8; 32],
    /// Token lifetime (1 week)
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
            token_ttl: Duration::from_secs(7 * 24 * 3600), // 1 week
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development and tests)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Get token TTL in whole seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttl_is_one_week() {
        let config = AuthConfig::default();
        assert_eq!(config.token_ttl_secs(), 7 * 24 * 3600);
    }

    #[test]
    fn test_random_secret_differs() {
        let a = AuthConfig::with_random_secret();
        let b = AuthConfig::with_random_secret();
        assert_ne!(a.token_secret, b.token_secret);
    }
}
