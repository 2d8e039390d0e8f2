//! Registered account

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// A registered account.
///
/// Deliberately hash-free: password material stays behind the user
/// repository and is fetched on its own for verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// A freshly registered account, created now
    pub fn new(id: Snowflake, username: String, email: String) -> Self {
        Self {
            id,
            username,
            email,
            created_at: Utc::now(),
        }
    }
}
