//! Query Value Objects
//!
//! Filtering, sorting and pagination for article listings. Sort fields are a
//! closed enum mapped to column names, so nothing caller-supplied ever
//! reaches the ORDER BY clause.

use auth::domain::value_object::user_id::UserId;

use crate::domain::entities::{Article, AuthorRef};

/// Default page size
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Upper bound on page size
pub const MAX_PAGE_SIZE: u32 = 100;

// ============================================================================
// Filter
// ============================================================================

/// Article listing filter
#[derive(Debug, Clone)]
pub struct ArticleFilter {
    /// Restrict to published articles
    pub published_only: bool,
    /// Exact tag match
    pub tag: Option<String>,
    /// Restrict to one author
    pub author_id: Option<UserId>,
    /// Case-insensitive substring over title, content and tags
    pub search: Option<String>,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
}

impl Default for ArticleFilter {
    fn default() -> Self {
        Self {
            published_only: true,
            tag: None,
            author_id: None,
            search: None,
            sort_by: SortField::CreatedAt,
            sort_order: SortOrder::Desc,
        }
    }
}

/// Whitelisted sort columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    PublishedAt,
    Title,
    Claps,
}

impl SortField {
    /// Parse a query-string value; unknown values fall back to `CreatedAt`
    pub fn parse(s: &str) -> Self {
        match s {
            "publishedAt" => SortField::PublishedAt,
            "title" => SortField::Title,
            "claps" => SortField::Claps,
            _ => SortField::CreatedAt,
        }
    }

    /// Column name for the ORDER BY clause
    pub fn column(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "created_at",
            SortField::PublishedAt => "published_at",
            SortField::Title => "title",
            SortField::Claps => "claps",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse a query-string value; anything but "asc" sorts descending
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("asc") {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        }
    }

    pub fn sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

// ============================================================================
// Pagination
// ============================================================================

/// A page request (1-based)
#[derive(Debug, Clone, Copy)]
pub struct Page {
    page: u32,
    per_page: u32,
}

impl Page {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn number(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.per_page as i64
    }

    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.per_page as i64
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// Pagination facts for a listing response
#[derive(Debug, Clone, Copy)]
pub struct PageInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_articles: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageInfo {
    pub fn compute(page: &Page, total: u64) -> Self {
        let per_page = page.limit() as u64;
        let total_pages = total.div_ceil(per_page) as u32;
        Self {
            current_page: page.number(),
            total_pages,
            total_articles: total,
            has_next: (page.number() as u64) * per_page < total,
            has_prev: page.number() > 1,
        }
    }
}

// ============================================================================
// Listing row
// ============================================================================

/// One article in a listing, with its author and comment count
#[derive(Debug, Clone)]
pub struct ArticleListing {
    pub article: Article,
    pub author: AuthorRef,
    pub comment_count: i64,
}
