//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use auth::domain::value_object::user_id::UserId;

use crate::domain::entities::{Article, ArticleId, Comment};
use crate::domain::value_objects::{ArticleFilter, ArticleListing, Page};
use crate::error::ContentResult;

/// Article repository trait
#[trait_variant::make(ArticleRepository: Send)]
pub trait LocalArticleRepository {
    /// Create a new article
    async fn create(&self, article: &Article) -> ContentResult<()>;

    /// Find article by ID
    async fn find_by_id(&self, article_id: &ArticleId) -> ContentResult<Option<Article>>;

    /// Update an article (claps, publication state)
    async fn update(&self, article: &Article) -> ContentResult<()>;

    /// List articles matching a filter, one page at a time, with author
    /// and comment count attached
    async fn search(&self, filter: &ArticleFilter, page: &Page)
    -> ContentResult<Vec<ArticleListing>>;

    /// Count articles matching a filter
    async fn count(&self, filter: &ArticleFilter) -> ContentResult<u64>;

    /// All unpublished articles by one author, newest first
    async fn drafts_by_author(&self, author_id: &UserId) -> ContentResult<Vec<ArticleListing>>;
}

/// Comment repository trait
#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    /// Append a comment
    async fn create(&self, comment: &Comment) -> ContentResult<()>;
}
