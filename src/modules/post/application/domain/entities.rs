use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::UserId;

/// A short text update.
///
/// `likes_count` and `comments_count` are denormalized. The like and comment
/// services never touch them; the counter use cases do.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: String,
    pub content: String,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_published: bool,
    pub likes_count: i32,
    pub comments_count: i32,
}

impl Post {
    pub fn is_authored_by(&self, user_id: &UserId) -> bool {
        &self.author_id == user_id
    }
}
