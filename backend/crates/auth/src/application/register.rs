//! Register Use Case
//!
//! Creates a new user account and issues its first token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::entity::{credential::Credential, user::User};
use crate::domain::repository::{CredentialRepository, UserRepository};
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    /// Optional display name; defaults to the email local part
    pub user_name: Option<String>,
}

/// Register output
pub struct RegisterOutput {
    pub token: String,
    pub user: User,
}

/// Register use case
pub struct RegisterUseCase<U, C>
where
    U: UserRepository,
    C: CredentialRepository,
{
    user_repo: Arc<U>,
    credential_repo: Arc<C>,
    config: Arc<AuthConfig>,
}

impl<U, C> RegisterUseCase<U, C>
where
    U: UserRepository,
    C: CredentialRepository,
{
    pub fn new(user_repo: Arc<U>, credential_repo: Arc<C>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            credential_repo,
            config,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let email = Email::new(input.email)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;

        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.message().to_string()))?;

        // Blank or absent display name falls back to the email local part
        let user_name = match input.user_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => email.local_part().to_string(),
        };
        let user_name = UserName::new(user_name)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;

        let user = User::new(email, user_name);
        let credential = Credential::new(user.user_id, password_hash);

        self.user_repo.create(&user).await?;
        self.credential_repo.create(&credential).await?;

        let token = TokenService::new(self.config.clone()).issue(&user.user_id)?;

        tracing::info!(user_id = %user.user_id, "User registered");

        Ok(RegisterOutput { token, user })
    }
}
