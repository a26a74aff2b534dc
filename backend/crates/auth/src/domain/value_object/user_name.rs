//! UserName Value Object
//!
//! Display name shown next to published content. Not a login identifier
//! and not unique - login goes through the email address.

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};

/// Maximum display name length in Unicode code points
const USER_NAME_MAX_LENGTH: usize = 64;

/// User display name
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{_0}")]
pub struct UserName(String);

impl UserName {
    /// Create a new user name with validation
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into().trim().to_string();

        if name.is_empty() {
            return Err(AppError::bad_request("User name cannot be empty"));
        }

        if name.chars().count() > USER_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "User name must be at most {} characters",
                USER_NAME_MAX_LENGTH
            )));
        }

        Ok(Self(name))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
