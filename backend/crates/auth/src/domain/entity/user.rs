//! User Entity
//!
//! Core user profile entity containing non-sensitive user data.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{email::Email, user_id::UserId, user_name::UserName};

/// User entity
///
/// Contains public user profile information. The credential hash lives in
/// the Credential entity, so a User is always safe to hand to downstream
/// handlers and serializers.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier, stable for the account's lifetime
    pub user_id: UserId,
    /// Login identifier (unique)
    pub email: Email,
    /// Display name
    pub user_name: UserName,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(email: Email, user_name: UserName) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            email,
            user_name,
            created_at: now,
            updated_at: now,
        }
    }
}
