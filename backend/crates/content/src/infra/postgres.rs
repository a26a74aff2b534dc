//! PostgreSQL Repository Implementations

use auth::domain::value_object::user_id::UserId;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::domain::entities::{Article, ArticleId, AuthorRef, Comment};
use crate::domain::repository::{ArticleRepository, CommentRepository};
use crate::domain::value_objects::{ArticleFilter, ArticleListing, Page};
use crate::error::ContentResult;

/// Columns selected for a listing row, including the joined author and a
/// comment count
const LISTING_SELECT: &str = r#"
SELECT
    a.article_id, a.title, a.content, a.excerpt, a.author_id, a.tags,
    a.cover_image, a.read_time_minutes, a.claps, a.clapped_by,
    a.is_published, a.published_at, a.created_at, a.updated_at,
    u.user_name AS author_user_name,
    u.email AS author_email,
    (SELECT COUNT(*) FROM comments c WHERE c.article_id = a.article_id) AS comment_count
FROM articles a
JOIN users u ON u.user_id = a.author_id
WHERE TRUE"#;

/// PostgreSQL-backed content repository
#[derive(Clone)]
pub struct PgContentRepository {
    pool: PgPool,
}

impl PgContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Append the filter conditions to a query. Sort and pagination are appended
/// separately; only bind parameters carry caller-supplied values.
fn push_filter(qb: &mut QueryBuilder<'_, Postgres>, filter: &ArticleFilter) {
    if filter.published_only {
        qb.push(" AND a.is_published = TRUE");
    }
    if let Some(tag) = &filter.tag {
        qb.push(" AND ");
        qb.push_bind(tag.clone());
        qb.push(" = ANY(a.tags)");
    }
    if let Some(author_id) = &filter.author_id {
        qb.push(" AND a.author_id = ");
        qb.push_bind(*author_id.as_uuid());
    }
    if let Some(term) = &filter.search {
        let pattern = format!("%{}%", term);
        qb.push(" AND (a.title ILIKE ");
        qb.push_bind(pattern.clone());
        qb.push(" OR a.content ILIKE ");
        qb.push_bind(pattern.clone());
        qb.push(" OR EXISTS (SELECT 1 FROM unnest(a.tags) AS t WHERE t ILIKE ");
        qb.push_bind(pattern);
        qb.push("))");
    }
}

// ============================================================================
// Article Repository Implementation
// ============================================================================

impl ArticleRepository for PgContentRepository {
    async fn create(&self, article: &Article) -> ContentResult<()> {
        sqlx::query(
            r#"
            INSERT INTO articles (
                article_id, title, content, excerpt, author_id, tags,
                cover_image, read_time_minutes, claps, clapped_by,
                is_published, published_at, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(article.article_id.as_uuid())
        .bind(&article.title)
        .bind(&article.content)
        .bind(&article.excerpt)
        .bind(article.author_id.as_uuid())
        .bind(&article.tags)
        .bind(&article.cover_image)
        .bind(article.read_time_minutes as i32)
        .bind(article.claps)
        .bind(clapper_uuids(article))
        .bind(article.is_published)
        .bind(article.published_at)
        .bind(article.created_at)
        .bind(article.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, article_id: &ArticleId) -> ContentResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            r#"
            SELECT
                article_id, title, content, excerpt, author_id, tags,
                cover_image, read_time_minutes, claps, clapped_by,
                is_published, published_at, created_at, updated_at
            FROM articles
            WHERE article_id = $1
            "#,
        )
        .bind(article_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ArticleRow::into_article))
    }

    async fn update(&self, article: &Article) -> ContentResult<()> {
        sqlx::query(
            r#"
            UPDATE articles SET
                title = $2,
                content = $3,
                excerpt = $4,
                tags = $5,
                cover_image = $6,
                read_time_minutes = $7,
                claps = $8,
                clapped_by = $9,
                is_published = $10,
                published_at = $11,
                updated_at = $12
            WHERE article_id = $1
            "#,
        )
        .bind(article.article_id.as_uuid())
        .bind(&article.title)
        .bind(&article.content)
        .bind(&article.excerpt)
        .bind(&article.tags)
        .bind(&article.cover_image)
        .bind(article.read_time_minutes as i32)
        .bind(article.claps)
        .bind(clapper_uuids(article))
        .bind(article.is_published)
        .bind(article.published_at)
        .bind(article.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn search(
        &self,
        filter: &ArticleFilter,
        page: &Page,
    ) -> ContentResult<Vec<ArticleListing>> {
        let mut qb = QueryBuilder::new(LISTING_SELECT);
        push_filter(&mut qb, filter);

        // Sort column and direction come from closed enums, created_at as
        // a stable tiebreak
        qb.push(" ORDER BY a.");
        qb.push(filter.sort_by.column());
        qb.push(" ");
        qb.push(filter.sort_order.sql());
        qb.push(" NULLS LAST, a.created_at DESC");

        qb.push(" LIMIT ");
        qb.push_bind(page.limit());
        qb.push(" OFFSET ");
        qb.push_bind(page.offset());

        let rows = qb
            .build_query_as::<ListingRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(ListingRow::into_listing).collect())
    }

    async fn count(&self, filter: &ArticleFilter) -> ContentResult<u64> {
        let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM articles a WHERE TRUE");
        push_filter(&mut qb, filter);

        let total: i64 = qb.build_query_scalar().fetch_one(&self.pool).await?;

        Ok(total.max(0) as u64)
    }

    async fn drafts_by_author(&self, author_id: &UserId) -> ContentResult<Vec<ArticleListing>> {
        let mut qb = QueryBuilder::new(LISTING_SELECT);
        qb.push(" AND a.author_id = ");
        qb.push_bind(*author_id.as_uuid());
        qb.push(" AND a.is_published = FALSE ORDER BY a.created_at DESC");

        let rows = qb
            .build_query_as::<ListingRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(ListingRow::into_listing).collect())
    }
}

// ============================================================================
// Comment Repository Implementation
// ============================================================================

impl CommentRepository for PgContentRepository {
    async fn create(&self, comment: &Comment) -> ContentResult<()> {
        sqlx::query(
            r#"
            INSERT INTO comments (comment_id, article_id, author_id, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(comment.comment_id.as_uuid())
        .bind(comment.article_id.as_uuid())
        .bind(comment.author_id.as_uuid())
        .bind(&comment.content)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types
// ============================================================================

fn clapper_uuids(article: &Article) -> Vec<Uuid> {
    article.clapped_by.iter().map(|id| *id.as_uuid()).collect()
}

#[derive(sqlx::FromRow)]
struct ArticleRow {
    article_id: Uuid,
    title: String,
    content: String,
    excerpt: String,
    author_id: Uuid,
    tags: Vec<String>,
    cover_image: String,
    read_time_minutes: i32,
    claps: i64,
    clapped_by: Vec<Uuid>,
    is_published: bool,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ArticleRow {
    fn into_article(self) -> Article {
        Article {
            article_id: ArticleId::from_uuid(self.article_id),
            title: self.title,
            content: self.content,
            excerpt: self.excerpt,
            author_id: UserId::from_uuid(self.author_id),
            tags: self.tags,
            cover_image: self.cover_image,
            read_time_minutes: self.read_time_minutes.max(0) as u32,
            claps: self.claps,
            clapped_by: self
                .clapped_by
                .into_iter()
                .map(UserId::from_uuid)
                .collect(),
            is_published: self.is_published,
            published_at: self.published_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ListingRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    author_user_name: String,
    author_email: String,
    comment_count: i64,
}

impl ListingRow {
    fn into_listing(self) -> ArticleListing {
        let author = AuthorRef {
            user_id: UserId::from_uuid(self.article.author_id),
            user_name: self.author_user_name,
            email: self.author_email,
        };

        ArticleListing {
            article: self.article.into_article(),
            author,
            comment_count: self.comment_count,
        }
    }
}
