//! Domain Entities

use auth::domain::entity::user::User;
use auth::domain::value_object::user_id::UserId;
use chrono::{DateTime, Utc};
use kernel::id::Id;

use crate::error::{ContentError, ContentResult};

pub struct ArticleMarker;
pub type ArticleId = Id<ArticleMarker>;

pub struct CommentMarker;
pub type CommentId = Id<CommentMarker>;

/// Maximum article title length in Unicode code points
pub const TITLE_MAX_LENGTH: usize = 200;

/// Excerpt length taken from the start of the content
const EXCERPT_LENGTH: usize = 150;

/// Assumed reading speed, words per minute
const WORDS_PER_MINUTE: usize = 200;

// ============================================================================
// Article
// ============================================================================

/// Article entity
///
/// `excerpt` and `read_time_minutes` are derived from the content at
/// creation, not supplied by the caller.
#[derive(Debug, Clone)]
pub struct Article {
    pub article_id: ArticleId,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author_id: UserId,
    pub tags: Vec<String>,
    pub cover_image: String,
    pub read_time_minutes: u32,
    pub claps: i64,
    /// Users who clapped at least once
    pub clapped_by: Vec<UserId>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Create a new article with derived fields
    pub fn new(
        author_id: UserId,
        title: String,
        content: String,
        tags: Vec<String>,
        cover_image: String,
        is_published: bool,
    ) -> ContentResult<Self> {
        let title = title.trim().to_string();
        if title.is_empty() || content.is_empty() {
            return Err(ContentError::Validation(
                "Title and content are required".to_string(),
            ));
        }
        if title.chars().count() > TITLE_MAX_LENGTH {
            return Err(ContentError::Validation(format!(
                "Title must be at most {} characters",
                TITLE_MAX_LENGTH
            )));
        }

        let tags = tags
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        let now = Utc::now();

        Ok(Self {
            article_id: ArticleId::new(),
            excerpt: derive_excerpt(&content),
            read_time_minutes: estimate_read_time(&content),
            title,
            content,
            author_id,
            tags,
            cover_image,
            claps: 0,
            clapped_by: Vec::new(),
            is_published,
            published_at: is_published.then_some(now),
            created_at: now,
            updated_at: now,
        })
    }

    /// Record a clap from a user
    ///
    /// Claps are unbounded (a reader can clap repeatedly); the clapper list
    /// records distinct users only.
    pub fn add_clap(&mut self, user_id: UserId) {
        self.claps += 1;
        if !self.clapped_by.contains(&user_id) {
            self.clapped_by.push(user_id);
        }
        self.updated_at = Utc::now();
    }
}

/// First chunk of the content, for listings
fn derive_excerpt(content: &str) -> String {
    let mut excerpt: String = content.chars().take(EXCERPT_LENGTH).collect();
    excerpt.push_str("...");
    excerpt
}

/// Estimated reading time, rounded up to whole minutes
fn estimate_read_time(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE) as u32
}

// ============================================================================
// Comment
// ============================================================================

/// Comment entity
#[derive(Debug, Clone)]
pub struct Comment {
    pub comment_id: CommentId,
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment
    pub fn new(article_id: ArticleId, author_id: UserId, content: String) -> ContentResult<Self> {
        let content = content.trim().to_string();
        if content.is_empty() {
            return Err(ContentError::Validation(
                "Comment content is required".to_string(),
            ));
        }

        Ok(Self {
            comment_id: CommentId::new(),
            article_id,
            author_id,
            content,
            created_at: Utc::now(),
        })
    }
}

// ============================================================================
// Author reference
// ============================================================================

/// Public author fields embedded in article responses
#[derive(Debug, Clone)]
pub struct AuthorRef {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
}

impl From<&User> for AuthorRef {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id,
            user_name: user.user_name.as_str().to_string(),
            email: user.email.as_str().to_string(),
        }
    }
}
