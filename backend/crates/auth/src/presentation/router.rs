//! Auth Router

use axum::extract::Request;
use axum::handler::Handler;
use axum::middleware::Next;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{CredentialRepository, UserRepository};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthMiddlewareState, require_auth};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    let gate = AuthMiddlewareState {
        user_repo: state.repo.clone(),
        config: state.config.clone(),
    };
    let auth_gate = middleware::from_fn(move |req: Request, next: Next| {
        let gate = gate.clone();
        async move { require_auth(gate, req, next).await }
    });

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/me", get(handlers::me.layer(auth_gate)))
        .with_state(state)
}
