//! Article Router

use axum::extract::Request;
use axum::handler::Handler;
use axum::middleware::Next;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::presentation::middleware::{AuthMiddlewareState, require_auth};

use crate::domain::repository::{ArticleRepository, CommentRepository};
use crate::infra::postgres::PgContentRepository;
use crate::presentation::handlers::{self, ContentAppState};

/// Create the article router with PostgreSQL repository
pub fn article_router<A>(repo: PgContentRepository, auth_state: AuthMiddlewareState<A>) -> Router
where
    A: UserRepository + Clone + Send + Sync + 'static,
{
    article_router_generic(repo, auth_state)
}

/// Create a generic article router for any repository implementation
///
/// Write routes sit behind the auth gate; listings are public.
pub fn article_router_generic<R, A>(repo: R, auth_state: AuthMiddlewareState<A>) -> Router
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
    A: UserRepository + Clone + Send + Sync + 'static,
{
    let state = ContentAppState {
        repo: Arc::new(repo),
    };

    let auth_gate = middleware::from_fn(move |req: Request, next: Next| {
        let auth_state = auth_state.clone();
        async move { require_auth(auth_state, req, next).await }
    });

    Router::new()
        .route(
            "/",
            get(handlers::list_articles::<R>)
                .post(handlers::create_article::<R>.layer(auth_gate.clone())),
        )
        .route("/published", get(handlers::list_published::<R>))
        .route(
            "/draft",
            get(handlers::list_drafts::<R>.layer(auth_gate.clone())),
        )
        .route(
            "/{id}/clap",
            post(handlers::clap_article::<R>.layer(auth_gate.clone())),
        )
        .route(
            "/{id}/comments",
            post(handlers::comment_article::<R>.layer(auth_gate)),
        )
        .with_state(state)
}
