//! Authenticate Use Case
//!
//! The request-gating decision: Authorization header in, resolved user out.
//! Evaluated in a fixed order, first failure wins:
//!
//! 1. header absent           -> MissingAuthHeader
//! 2. not a Bearer scheme     -> MalformedAuthHeader
//! 3. empty token             -> EmptyToken
//! 4. undecodable / bad sig   -> InvalidToken
//! 5. past expiry             -> TokenExpired
//! 6. subject no longer exists-> UserNotFound
//! 7. otherwise               -> the user
//!
//! This is the only place that decides whether a request proceeds;
//! downstream handlers never re-check tokens.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::{TokenError, TokenService};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Required Authorization scheme prefix
pub const BEARER_PREFIX: &str = "Bearer ";

/// Pull the bearer token out of an Authorization header value
pub fn extract_bearer(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::MissingAuthHeader)?;
    let token = header
        .strip_prefix(BEARER_PREFIX)
        .ok_or(AuthError::MalformedAuthHeader)?;
    if token.is_empty() {
        return Err(AuthError::EmptyToken);
    }
    Ok(token)
}

/// Authenticate use case
pub struct AuthenticateUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> AuthenticateUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Resolve an Authorization header value into an authenticated user
    pub async fn execute(&self, authorization: Option<&str>) -> AuthResult<User> {
        let token = extract_bearer(authorization)?;

        let claims = TokenService::new(self.config.clone())
            .verify(token)
            .map_err(|e| match e {
                TokenError::Expired => AuthError::TokenExpired,
                TokenError::Malformed | TokenError::BadSignature => AuthError::InvalidToken,
            })?;

        let user_id = UserId::from_uuid(claims.sub);

        self.user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_header() {
        assert!(matches!(
            extract_bearer(None),
            Err(AuthError::MissingAuthHeader)
        ));
    }

    #[test]
    fn test_non_bearer_scheme() {
        for header in ["Basic dXNlcjpwYXNz", "bearer abc", "Token abc", "Bearer"] {
            assert!(
                matches!(
                    extract_bearer(Some(header)),
                    Err(AuthError::MalformedAuthHeader)
                ),
                "expected MalformedAuthHeader for {header:?}"
            );
        }
    }

    #[test]
    fn test_empty_token() {
        assert!(matches!(
            extract_bearer(Some("Bearer ")),
            Err(AuthError::EmptyToken)
        ));
    }

    #[test]
    fn test_valid_bearer() {
        assert_eq!(extract_bearer(Some("Bearer abc.def.ghi")).unwrap(), "abc.def.ghi");
    }
}
