mod get_user;
mod get_users;

pub use get_user::get_user_handler;
pub use get_users::get_users_handler;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::user::application::domain::entities::User;

/// Public view of a user. Email is not exposed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into_inner(),
            name: user.name,
            image: user.image,
            created_at: user.created_at,
        }
    }
}
