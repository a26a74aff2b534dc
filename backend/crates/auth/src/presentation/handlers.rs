//! HTTP Handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::domain::repository::{CredentialRepository, UserRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{
    AuthResponse, LoginRequest, MeResponse, RegisterRequest, UserView,
};
use crate::presentation::middleware::CurrentUser;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<(StatusCode, Json<AuthResponse>)>
where
    R: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        email: req.email,
        password: req.password,
        user_name: req.user_name,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token: output.token,
            user: UserView::from(&output.user),
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<AuthResponse>>
where
    R: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = LoginInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(AuthResponse {
        token: output.token,
        user: UserView::from(&output.user),
    }))
}

// ============================================================================
// Who Am I
// ============================================================================

/// GET /auth/me
///
/// Runs behind the auth middleware; the gate already resolved the user.
pub async fn me(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Json<MeResponse> {
    Json(MeResponse {
        user: UserView::from(&user),
    })
}
