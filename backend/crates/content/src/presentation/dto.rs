//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use auth::domain::value_object::user_id::UserId;

use crate::domain::entities::{AuthorRef, Comment};
use crate::domain::value_objects::{
    ArticleFilter, ArticleListing, DEFAULT_PAGE_SIZE, Page, PageInfo, SortField, SortOrder,
};

// ============================================================================
// Requests
// ============================================================================

/// Create article request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub is_published: bool,
}

/// Article listing query parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListArticlesQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub tag: Option<String>,
    /// Author's user id
    pub author: Option<Uuid>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub published_only: Option<bool>,
}

impl ListArticlesQuery {
    /// Resolve query parameters into a filter and page, applying defaults
    pub fn into_filter(self) -> (ArticleFilter, Page) {
        let filter = ArticleFilter {
            published_only: self.published_only.unwrap_or(true),
            tag: self.tag,
            author_id: self.author.map(UserId::from_uuid),
            search: self.search,
            sort_by: self
                .sort_by
                .as_deref()
                .map(SortField::parse)
                .unwrap_or(SortField::CreatedAt),
            sort_order: self
                .sort_order
                .as_deref()
                .map(SortOrder::parse)
                .unwrap_or(SortOrder::Desc),
        };

        let page = Page::new(
            self.page.unwrap_or(1),
            self.limit.unwrap_or(DEFAULT_PAGE_SIZE),
        );

        (filter, page)
    }
}

/// Plain pagination query (published listing)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl PageQuery {
    pub fn into_page(self) -> Page {
        Page::new(
            self.page.unwrap_or(1),
            self.limit.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

/// Comment request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    pub content: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Public author fields on an article
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorView {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
}

impl From<&AuthorRef> for AuthorView {
    fn from(author: &AuthorRef) -> Self {
        Self {
            id: *author.user_id.as_uuid(),
            user_name: author.user_name.clone(),
            email: author.email.clone(),
        }
    }
}

/// Full article view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub cover_image: String,
    pub read_time_minutes: u32,
    pub claps: i64,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: AuthorView,
    pub comment_count: i64,
}

impl From<&ArticleListing> for ArticleResponse {
    fn from(listing: &ArticleListing) -> Self {
        let article = &listing.article;
        Self {
            id: *article.article_id.as_uuid(),
            title: article.title.clone(),
            content: article.content.clone(),
            excerpt: article.excerpt.clone(),
            tags: article.tags.clone(),
            cover_image: article.cover_image.clone(),
            read_time_minutes: article.read_time_minutes,
            claps: article.claps,
            is_published: article.is_published,
            published_at: article.published_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
            author: AuthorView::from(&listing.author),
            comment_count: listing.comment_count,
        }
    }
}

/// Pagination facts
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_articles: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl From<PageInfo> for PaginationInfo {
    fn from(info: PageInfo) -> Self {
        Self {
            current_page: info.current_page,
            total_pages: info.total_pages,
            total_articles: info.total_articles,
            has_next: info.has_next,
            has_prev: info.has_prev,
        }
    }
}

/// Paginated article listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListResponse {
    pub data: Vec<ArticleResponse>,
    pub pagination: PaginationInfo,
}

/// Draft listing (no pagination)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftListResponse {
    pub data: Vec<ArticleResponse>,
}

/// Clap response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClapResponse {
    pub claps: i64,
}

/// Comment view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: Uuid,
    pub article_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: *comment.comment_id.as_uuid(),
            article_id: *comment.article_id.as_uuid(),
            content: comment.content.clone(),
            created_at: comment.created_at,
        }
    }
}
