//! Application Layer
//!
//! Use cases.

pub mod clap_article;
pub mod comment_article;
pub mod create_article;
pub mod list_articles;

// Re-exports
pub use clap_article::ClapArticleUseCase;
pub use comment_article::CommentArticleUseCase;
pub use create_article::{CreateArticleInput, CreateArticleUseCase};
pub use list_articles::ListArticlesUseCase;
