//! users row to entity

use blog_core::entities::User;
use blog_core::value_objects::Snowflake;

use crate::models::UserModel;

// Destructured so the discarded hash is explicit. Callers that need it
// go through `UserRepository::get_password_hash`.
impl From<UserModel> for User {
    fn from(row: UserModel) -> Self {
        let UserModel {
            id,
            username,
            email,
            password_hash: _,
            created_at,
        } = row;

        User {
            id: Snowflake::new(id),
            username,
            email,
            created_at,
        }
    }
}
