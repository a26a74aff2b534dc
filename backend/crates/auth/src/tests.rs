//! Unit tests for the auth crate
//!
//! Use-case level tests run against an in-memory directory so the full
//! register -> login -> gate flow is exercised without a database.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{Duration as ChronoDuration, Utc};
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::application::{
    AuthenticateUseCase, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::entity::{credential::Credential, user::User};
use crate::domain::repository::{CredentialRepository, UserRepository};
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::{AuthError, AuthResult};

// ============================================================================
// In-memory directory
// ============================================================================

#[derive(Clone, Default)]
struct MemoryDirectory {
    users: Arc<Mutex<HashMap<Uuid, User>>>,
    credentials: Arc<Mutex<HashMap<Uuid, Credential>>>,
}

impl MemoryDirectory {
    fn remove_user(&self, user_id: &UserId) {
        self.users.lock().unwrap().remove(user_id.as_uuid());
    }
}

impl UserRepository for MemoryDirectory {
    async fn create(&self, user: &User) -> AuthResult<()> {
        self.users
            .lock()
            .unwrap()
            .insert(*user.user_id.as_uuid(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(user_id.as_uuid()).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == *email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .any(|u| u.email == *email))
    }
}

impl CredentialRepository for MemoryDirectory {
    async fn create(&self, credential: &Credential) -> AuthResult<()> {
        self.credentials
            .lock()
            .unwrap()
            .insert(*credential.user_id.as_uuid(), credential.clone());
        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> AuthResult<Option<Credential>> {
        Ok(self
            .credentials
            .lock()
            .unwrap()
            .get(user_id.as_uuid())
            .cloned())
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn setup() -> (Arc<MemoryDirectory>, Arc<AuthConfig>) {
    (
        Arc::new(MemoryDirectory::default()),
        Arc::new(AuthConfig::with_random_secret()),
    )
}

async fn register(
    repo: &Arc<MemoryDirectory>,
    config: &Arc<AuthConfig>,
    email: &str,
    password: &str,
) -> AuthResult<crate::application::RegisterOutput> {
    RegisterUseCase::new(repo.clone(), repo.clone(), config.clone())
        .execute(RegisterInput {
            email: email.to_string(),
            password: password.to_string(),
            user_name: None,
        })
        .await
}

// ============================================================================
// Register
// ============================================================================

#[tokio::test]
async fn register_issues_verifiable_token() {
    let (repo, config) = setup();

    let output = register(&repo, &config, "a@x.com", "secret1").await.unwrap();

    let claims = TokenService::new(config.clone())
        .verify(&output.token)
        .unwrap();
    assert_eq!(claims.sub, *output.user.user_id.as_uuid());
}

#[tokio::test]
async fn register_defaults_user_name_to_email_local_part() {
    let (repo, config) = setup();

    let output = register(&repo, &config, "alice@example.com", "secret1")
        .await
        .unwrap();
    assert_eq!(output.user.user_name.as_str(), "alice");
}

#[tokio::test]
async fn register_keeps_explicit_user_name() {
    let (repo, config) = setup();

    let output = RegisterUseCase::new(repo.clone(), repo.clone(), config.clone())
        .execute(RegisterInput {
            email: "alice@example.com".to_string(),
            password: "secret1".to_string(),
            user_name: Some("Alice Writes".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(output.user.user_name.as_str(), "Alice Writes");
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let (repo, config) = setup();

    register(&repo, &config, "a@x.com", "secret1").await.unwrap();
    let err = register(&repo, &config, "a@x.com", "other-pass").await;
    assert!(matches!(err, Err(AuthError::EmailTaken)));
}

#[tokio::test]
async fn register_rejects_empty_password() {
    let (repo, config) = setup();

    let err = register(&repo, &config, "a@x.com", "").await;
    assert!(matches!(err, Err(AuthError::Validation(_))));
}

#[tokio::test]
async fn register_rejects_invalid_email() {
    let (repo, config) = setup();

    let err = register(&repo, &config, "not-an-email", "secret1").await;
    assert!(matches!(err, Err(AuthError::Validation(_))));
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn login_succeeds_with_correct_credentials() {
    let (repo, config) = setup();
    register(&repo, &config, "a@x.com", "secret1").await.unwrap();

    let output = LoginUseCase::new(repo.clone(), repo.clone(), config.clone())
        .execute(LoginInput {
            email: "a@x.com".to_string(),
            password: "secret1".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(output.user.email.as_str(), "a@x.com");
    assert!(
        TokenService::new(config.clone())
            .verify(&output.token)
            .is_ok()
    );
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let (repo, config) = setup();
    register(&repo, &config, "known@x.com", "secret1")
        .await
        .unwrap();

    let use_case = LoginUseCase::new(repo.clone(), repo.clone(), config.clone());

    let unknown_email = use_case
        .execute(LoginInput {
            email: "unknown@x.com".to_string(),
            password: "whatever".to_string(),
        })
        .await
        .unwrap_err();

    let wrong_password = use_case
        .execute(LoginInput {
            email: "known@x.com".to_string(),
            password: "wrong-password".to_string(),
        })
        .await
        .unwrap_err();

    // Same variant, same message, same status - no account probing
    assert!(matches!(unknown_email, AuthError::InvalidCredentials));
    assert!(matches!(wrong_password, AuthError::InvalidCredentials));
    assert_eq!(unknown_email.to_string(), wrong_password.to_string());
    assert_eq!(unknown_email.status_code(), wrong_password.status_code());
}

// ============================================================================
// Request gating
// ============================================================================

#[tokio::test]
async fn gate_allows_valid_token() {
    let (repo, config) = setup();
    let output = register(&repo, &config, "a@x.com", "secret1").await.unwrap();

    let gate = AuthenticateUseCase::new(repo.clone(), config.clone());
    let header = format!("Bearer {}", output.token);
    let user = gate.execute(Some(&header)).await.unwrap();

    assert_eq!(user.user_id, output.user.user_id);
    assert_eq!(user.email.as_str(), "a@x.com");
}

#[tokio::test]
async fn gate_rejects_missing_and_malformed_headers() {
    let (repo, config) = setup();
    let gate = AuthenticateUseCase::new(repo.clone(), config.clone());

    assert!(matches!(
        gate.execute(None).await,
        Err(AuthError::MissingAuthHeader)
    ));
    assert!(matches!(
        gate.execute(Some("Basic dXNlcjpwYXNz")).await,
        Err(AuthError::MalformedAuthHeader)
    ));
    assert!(matches!(
        gate.execute(Some("Bearer ")).await,
        Err(AuthError::EmptyToken)
    ));
}

#[tokio::test]
async fn gate_rejects_garbage_token() {
    let (repo, config) = setup();
    let gate = AuthenticateUseCase::new(repo.clone(), config.clone());

    let result = gate.execute(Some("Bearer not-a-real-token")).await;
    assert!(matches!(result, Err(AuthError::InvalidToken)));
}

#[tokio::test]
async fn gate_rejects_token_signed_with_other_secret() {
    let (repo, config) = setup();
    let output = register(&repo, &config, "a@x.com", "secret1").await.unwrap();

    let other_config = Arc::new(AuthConfig::with_random_secret());
    let gate = AuthenticateUseCase::new(repo.clone(), other_config);

    let header = format!("Bearer {}", output.token);
    assert!(matches!(
        gate.execute(Some(&header)).await,
        Err(AuthError::InvalidToken)
    ));
}

#[tokio::test]
async fn gate_rejects_expired_token() {
    let (repo, config) = setup();
    let output = register(&repo, &config, "a@x.com", "secret1").await.unwrap();

    let stale = TokenService::new(config.clone())
        .issue_at(&output.user.user_id, Utc::now() - ChronoDuration::days(8))
        .unwrap();

    let gate = AuthenticateUseCase::new(repo.clone(), config.clone());
    let header = format!("Bearer {}", stale);
    assert!(matches!(
        gate.execute(Some(&header)).await,
        Err(AuthError::TokenExpired)
    ));
}

#[tokio::test]
async fn gate_rejects_token_for_deleted_user() {
    let (repo, config) = setup();
    let output = register(&repo, &config, "a@x.com", "secret1").await.unwrap();

    repo.remove_user(&output.user.user_id);

    let gate = AuthenticateUseCase::new(repo.clone(), config.clone());
    let header = format!("Bearer {}", output.token);
    assert!(matches!(
        gate.execute(Some(&header)).await,
        Err(AuthError::UserNotFound)
    ));
}
