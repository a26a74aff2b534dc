//! Content Backend Module
//!
//! Articles, comments and claps for the publishing API.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, query value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Write routes are gated by the `auth` crate's middleware; this crate never
//! inspects tokens itself.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{ContentError, ContentResult};
pub use infra::postgres::PgContentRepository;
pub use presentation::router::article_router;

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgContentRepository as ContentStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
