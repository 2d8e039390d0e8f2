//! Row type for the users table

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// One `users` row, password hash included.
///
/// Never crosses the crate boundary; the mapper strips the hash when
/// producing the domain entity.
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
