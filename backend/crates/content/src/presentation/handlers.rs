//! HTTP Handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;
use uuid::Uuid;

use auth::presentation::middleware::CurrentUser;

use crate::application::{
    ClapArticleUseCase, CommentArticleUseCase, CreateArticleInput, CreateArticleUseCase,
    ListArticlesUseCase,
};
use crate::domain::entities::{ArticleId, AuthorRef};
use crate::domain::repository::{ArticleRepository, CommentRepository};
use crate::domain::value_objects::{ArticleFilter, ArticleListing, SortField};
use crate::error::ContentResult;
use crate::presentation::dto::{
    ArticleListResponse, ArticleResponse, ClapResponse, CommentRequest, CommentResponse,
    CreateArticleRequest, DraftListResponse, ListArticlesQuery, PageQuery, PaginationInfo,
};

/// Shared state for content handlers
#[derive(Clone)]
pub struct ContentAppState<R>
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Create
// ============================================================================

/// POST /articles
pub async fn create_article<R>(
    State(state): State<ContentAppState<R>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<CreateArticleRequest>,
) -> ContentResult<(StatusCode, Json<ArticleResponse>)>
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateArticleUseCase::new(state.repo.clone());

    let input = CreateArticleInput {
        title: req.title,
        content: req.content,
        tags: req.tags,
        cover_image: req.cover_image,
        is_published: req.is_published,
    };

    let article = use_case.execute(user.user_id, input).await?;

    // A fresh article has its creator as author and no comments yet
    let listing = ArticleListing {
        article,
        author: AuthorRef::from(&user),
        comment_count: 0,
    };

    Ok((StatusCode::CREATED, Json(ArticleResponse::from(&listing))))
}

// ============================================================================
// Listings
// ============================================================================

/// GET /articles
pub async fn list_articles<R>(
    State(state): State<ContentAppState<R>>,
    Query(query): Query<ListArticlesQuery>,
) -> ContentResult<Json<ArticleListResponse>>
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let (filter, page) = query.into_filter();

    let use_case = ListArticlesUseCase::new(state.repo.clone());
    let (listings, info) = use_case.execute(filter, page).await?;

    Ok(Json(ArticleListResponse {
        data: listings.iter().map(ArticleResponse::from).collect(),
        pagination: PaginationInfo::from(info),
    }))
}

/// GET /articles/published
pub async fn list_published<R>(
    State(state): State<ContentAppState<R>>,
    Query(query): Query<PageQuery>,
) -> ContentResult<Json<ArticleListResponse>>
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let page = query.into_page();
    let filter = ArticleFilter {
        sort_by: SortField::PublishedAt,
        ..ArticleFilter::default()
    };

    let use_case = ListArticlesUseCase::new(state.repo.clone());
    let (listings, info) = use_case.execute(filter, page).await?;

    Ok(Json(ArticleListResponse {
        data: listings.iter().map(ArticleResponse::from).collect(),
        pagination: PaginationInfo::from(info),
    }))
}

/// GET /articles/draft
pub async fn list_drafts<R>(
    State(state): State<ContentAppState<R>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ContentResult<Json<DraftListResponse>>
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListArticlesUseCase::new(state.repo.clone());
    let listings = use_case.drafts(&user.user_id).await?;

    Ok(Json(DraftListResponse {
        data: listings.iter().map(ArticleResponse::from).collect(),
    }))
}

// ============================================================================
// Engagement
// ============================================================================

/// POST /articles/{id}/clap
pub async fn clap_article<R>(
    State(state): State<ContentAppState<R>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(article_id): Path<Uuid>,
) -> ContentResult<Json<ClapResponse>>
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = ClapArticleUseCase::new(state.repo.clone());
    let article = use_case
        .execute(&ArticleId::from_uuid(article_id), user.user_id)
        .await?;

    Ok(Json(ClapResponse {
        claps: article.claps,
    }))
}

/// POST /articles/{id}/comments
pub async fn comment_article<R>(
    State(state): State<ContentAppState<R>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(article_id): Path<Uuid>,
    Json(req): Json<CommentRequest>,
) -> ContentResult<(StatusCode, Json<CommentResponse>)>
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = CommentArticleUseCase::new(state.repo.clone(), state.repo.clone());
    let comment = use_case
        .execute(&ArticleId::from_uuid(article_id), user.user_id, req.content)
        .await?;

    Ok((StatusCode::CREATED, Json(CommentResponse::from(&comment))))
}
