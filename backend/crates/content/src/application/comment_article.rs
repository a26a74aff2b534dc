//! Comment Article Use Case

use std::sync::Arc;

use auth::domain::value_object::user_id::UserId;

use crate::domain::entities::{ArticleId, Comment};
use crate::domain::repository::{ArticleRepository, CommentRepository};
use crate::error::{ContentError, ContentResult};

/// Comment article use case
pub struct CommentArticleUseCase<A, C>
where
    A: ArticleRepository,
    C: CommentRepository,
{
    article_repo: Arc<A>,
    comment_repo: Arc<C>,
}

impl<A, C> CommentArticleUseCase<A, C>
where
    A: ArticleRepository,
    C: CommentRepository,
{
    pub fn new(article_repo: Arc<A>, comment_repo: Arc<C>) -> Self {
        Self {
            article_repo,
            comment_repo,
        }
    }

    pub async fn execute(
        &self,
        article_id: &ArticleId,
        author_id: UserId,
        content: String,
    ) -> ContentResult<Comment> {
        // Commenting on a ghost article is a 404, not a dangling row
        if self.article_repo.find_by_id(article_id).await?.is_none() {
            return Err(ContentError::ArticleNotFound);
        }

        let comment = Comment::new(*article_id, author_id, content)?;
        self.comment_repo.create(&comment).await?;

        Ok(comment)
    }
}
