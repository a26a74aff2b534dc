//! Auth Middleware
//!
//! Middleware for requiring a valid bearer token on protected routes.

use axum::body::Body;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::AuthenticateUseCase;
use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub user_repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// The authenticated principal for the current request
///
/// Inserted into request extensions on a successful gate pass; handlers
/// take it as `Extension<CurrentUser>`. Carries no credential material.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Middleware that requires a valid bearer token
///
/// On success the resolved user is attached to the request and the inner
/// handler runs; any rejection short-circuits into a 401 response and
/// nothing downstream executes.
pub async fn require_auth<R>(
    state: AuthMiddlewareState<R>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let authorization = match req.headers().get(header::AUTHORIZATION) {
        None => None,
        Some(value) => match value.to_str() {
            Ok(s) => Some(s),
            // Present but not valid UTF-8 cannot be a Bearer header
            Err(_) => return Err(AuthError::MalformedAuthHeader.into_response()),
        },
    };

    let use_case = AuthenticateUseCase::new(state.user_repo.clone(), state.config.clone());

    match use_case.execute(authorization).await {
        Ok(user) => {
            req.extensions_mut().insert(CurrentUser(user));
            Ok(next.run(req).await)
        }
        Err(e) => Err(e.into_response()),
    }
}
