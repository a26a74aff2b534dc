//! List Articles Use Case
//!
//! Filtered, sorted, paginated listings plus the caller's draft list.

use std::sync::Arc;

use auth::domain::value_object::user_id::UserId;

use crate::domain::repository::ArticleRepository;
use crate::domain::value_objects::{ArticleFilter, ArticleListing, Page, PageInfo};
use crate::error::ContentResult;

/// List articles use case
pub struct ListArticlesUseCase<A>
where
    A: ArticleRepository,
{
    article_repo: Arc<A>,
}

impl<A> ListArticlesUseCase<A>
where
    A: ArticleRepository,
{
    pub fn new(article_repo: Arc<A>) -> Self {
        Self { article_repo }
    }

    /// One page of articles matching the filter, with pagination facts
    pub async fn execute(
        &self,
        filter: ArticleFilter,
        page: Page,
    ) -> ContentResult<(Vec<ArticleListing>, PageInfo)> {
        let listings = self.article_repo.search(&filter, &page).await?;
        let total = self.article_repo.count(&filter).await?;

        Ok((listings, PageInfo::compute(&page, total)))
    }

    /// The caller's unpublished articles, newest first
    pub async fn drafts(&self, author_id: &UserId) -> ContentResult<Vec<ArticleListing>> {
        self.article_repo.drafts_by_author(author_id).await
    }
}
