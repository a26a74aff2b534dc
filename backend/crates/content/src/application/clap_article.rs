//! Clap Article Use Case

use std::sync::Arc;

use auth::domain::value_object::user_id::UserId;

use crate::domain::entities::{Article, ArticleId};
use crate::domain::repository::ArticleRepository;
use crate::error::{ContentError, ContentResult};

/// Clap article use case
pub struct ClapArticleUseCase<A>
where
    A: ArticleRepository,
{
    article_repo: Arc<A>,
}

impl<A> ClapArticleUseCase<A>
where
    A: ArticleRepository,
{
    pub fn new(article_repo: Arc<A>) -> Self {
        Self { article_repo }
    }

    pub async fn execute(
        &self,
        article_id: &ArticleId,
        reader_id: UserId,
    ) -> ContentResult<Article> {
        let mut article = self
            .article_repo
            .find_by_id(article_id)
            .await?
            .ok_or(ContentError::ArticleNotFound)?;

        article.add_clap(reader_id);
        self.article_repo.update(&article).await?;

        Ok(article)
    }
}
