//! Create Article Use Case

use std::sync::Arc;

use auth::domain::value_object::user_id::UserId;

use crate::domain::entities::Article;
use crate::domain::repository::ArticleRepository;
use crate::error::ContentResult;

/// Create article input
pub struct CreateArticleInput {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub cover_image: String,
    pub is_published: bool,
}

/// Create article use case
pub struct CreateArticleUseCase<A>
where
    A: ArticleRepository,
{
    article_repo: Arc<A>,
}

impl<A> CreateArticleUseCase<A>
where
    A: ArticleRepository,
{
    pub fn new(article_repo: Arc<A>) -> Self {
        Self { article_repo }
    }

    pub async fn execute(
        &self,
        author_id: UserId,
        input: CreateArticleInput,
    ) -> ContentResult<Article> {
        let article = Article::new(
            author_id,
            input.title,
            input.content,
            input.tags,
            input.cover_image,
            input.is_published,
        )?;

        self.article_repo.create(&article).await?;

        tracing::info!(
            article_id = %article.article_id,
            author_id = %article.author_id,
            published = article.is_published,
            "Article created"
        );

        Ok(article)
    }
}
