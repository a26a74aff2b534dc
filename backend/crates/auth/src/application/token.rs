//! Token Service
//!
//! Issues and verifies signed, time-limited bearer tokens. A token is a
//! self-contained assertion of identity: validity is fully determined by its
//! HMAC-SHA256 signature and expiry, never by a server-side lookup.
//!
//! Wire format is the standard three-segment form,
//! `base64url(header).base64url(payload).base64url(signature)` (unpadded),
//! so any JWT-aware client can read the claims. Verification always
//! recomputes the signature with this service's own secret and algorithm;
//! the header embedded in the token is never consulted, which closes the
//! algorithm-substitution hole.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;
use uuid::Uuid;

use platform::crypto::{from_b64url, to_b64url};

use crate::application::config::AuthConfig;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Token verification failure kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not three base64url segments, or payload not valid claims JSON
    #[error("token is malformed")]
    Malformed,

    /// Signature does not match the configured secret
    #[error("token signature mismatch")]
    BadSignature,

    /// Signature valid but the token is past its expiry
    #[error("token has expired")]
    Expired,
}

/// Claims carried in a token payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's internal UUID
    pub sub: Uuid,
    /// Issued-at, unix seconds
    pub iat: i64,
    /// Expiry, unix seconds
    pub exp: i64,
}

#[derive(Serialize)]
struct Header {
    alg: &'static str,
    typ: &'static str,
}

const TOKEN_HEADER: Header = Header {
    alg: "HS256",
    typ: "JWT",
};

/// Token issuance and verification
pub struct TokenService {
    config: Arc<AuthConfig>,
}

impl TokenService {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Issue a signed token for the given subject, expiring after the
    /// configured TTL
    pub fn issue(&self, subject: &UserId) -> AuthResult<String> {
        self.issue_at(subject, Utc::now())
    }

    pub(crate) fn issue_at(&self, subject: &UserId, now: DateTime<Utc>) -> AuthResult<String> {
        let iat = now.timestamp();
        let claims = Claims {
            sub: *subject.as_uuid(),
            iat,
            exp: iat + self.config.token_ttl_secs(),
        };

        let header = serde_json::to_vec(&TOKEN_HEADER)
            .map_err(|e| AuthError::Internal(format!("Token header serialization: {e}")))?;
        let payload = serde_json::to_vec(&claims)
            .map_err(|e| AuthError::Internal(format!("Token claims serialization: {e}")))?;

        let signing_input = format!("{}.{}", to_b64url(&header), to_b64url(&payload));

        let mut mac = HmacSha256::new_from_slice(&self.config.token_secret)
            .expect("HMAC can take key of any size");
        mac.update(signing_input.as_bytes());
        let signature = mac.finalize().into_bytes();

        Ok(format!("{}.{}", signing_input, to_b64url(&signature)))
    }

    /// Verify a token and recover its claims
    ///
    /// Checks run in a fixed order: structure, then signature, then payload
    /// shape, then expiry. The signature is recomputed over the received
    /// segments with the configured secret - a token signed with any other
    /// secret, or altered after signing, fails with `BadSignature`.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, Utc::now())
    }

    pub(crate) fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let mut segments = token.split('.');
        let (Some(header_b64), Some(payload_b64), Some(signature_b64), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(TokenError::Malformed);
        };

        // Every segment must decode, including the header we otherwise ignore
        from_b64url(header_b64).map_err(|_| TokenError::Malformed)?;
        let payload = from_b64url(payload_b64).map_err(|_| TokenError::Malformed)?;
        let signature = from_b64url(signature_b64).map_err(|_| TokenError::Malformed)?;

        let mut mac = HmacSha256::new_from_slice(&self.config.token_secret)
            .expect("HMAC can take key of any size");
        mac.update(header_b64.as_bytes());
        mac.update(b".");
        mac.update(payload_b64.as_bytes());

        // Constant-time comparison
        mac.verify_slice(&signature)
            .map_err(|_| TokenError::BadSignature)?;

        let claims: Claims =
            serde_json::from_slice(&payload).map_err(|_| TokenError::Malformed)?;

        if now.timestamp() > claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;

    fn service() -> TokenService {
        TokenService::new(Arc::new(AuthConfig::with_random_secret()))
    }

    #[test]
    fn test_roundtrip_recovers_subject() {
        let service = service();
        let subject = UserId::new();

        let token = service.issue(&subject).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, *subject.as_uuid());
        assert_eq!(claims.exp, claims.iat + 7 * 24 * 3600);
    }

    #[test]
    fn test_token_has_three_segments() {
        let service = service();
        let token = service.issue(&UserId::new()).unwrap();
        assert_eq!(token.split('.').count(), 3);
        assert!(!token.contains('='));
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = service();
        let issued_at = Utc::now() - ChronoDuration::days(8);

        let token = service.issue_at(&UserId::new(), issued_at).unwrap();
        assert_eq!(service.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_token_valid_until_expiry_instant() {
        let service = service();
        let now = Utc::now();
        let token = service.issue_at(&UserId::new(), now).unwrap();

        // Exactly at expiry is still valid; one second past is not
        let expiry = now + ChronoDuration::seconds(7 * 24 * 3600);
        assert!(service.verify_at(&token, expiry).is_ok());
        assert_eq!(
            service.verify_at(&token, expiry + ChronoDuration::seconds(1)),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        let service = service();

        for garbage in ["", "abc", "a.b", "a.b.c.d", "!!!.###.$$$"] {
            assert_eq!(
                service.verify(garbage),
                Err(TokenError::Malformed),
                "expected Malformed for {garbage:?}"
            );
        }
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let service = service();
        let token = service.issue(&UserId::new()).unwrap();

        let mut segments: Vec<String> = token.split('.').map(String::from).collect();
        let mut payload = from_b64url(&segments[1]).unwrap();
        payload[0] ^= 0x01; // flip one bit
        segments[1] = to_b64url(&payload);
        let tampered = segments.join(".");

        assert_eq!(service.verify(&tampered), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = service();
        let verifier = service(); // different random secret

        let token = issuer.issue(&UserId::new()).unwrap();
        assert_eq!(verifier.verify(&token), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_unsigned_alg_none_token_rejected() {
        // A token that names its own algorithm gets no say: the signature is
        // recomputed as HMAC-SHA256 regardless of the embedded header.
        let service = service();
        let subject = UserId::new();
        let now = Utc::now().timestamp();

        let header = to_b64url(br#"{"alg":"none","typ":"JWT"}"#);
        let claims = serde_json::to_vec(&Claims {
            sub: *subject.as_uuid(),
            iat: now,
            exp: now + 3600,
        })
        .unwrap();
        let forged = format!("{}.{}.{}", header, to_b64url(&claims), to_b64url(b""));

        assert_eq!(service.verify(&forged), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_signature_swap_between_tokens_rejected() {
        let service = service();
        let token_a = service.issue(&UserId::new()).unwrap();
        let token_b = service.issue(&UserId::new()).unwrap();

        let a: Vec<&str> = token_a.split('.').collect();
        let b: Vec<&str> = token_b.split('.').collect();
        let franken = format!("{}.{}.{}", a[0], a[1], b[2]);

        // Same secret, but the signature covers different claims
        if a[1] != b[1] {
            assert_eq!(service.verify(&franken), Err(TokenError::BadSignature));
        }
    }
}
