use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct PostLike {
    pub id: String,
    pub post_id: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Like state of one `(post, user)` pair. Toggling is the only transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeState {
    NotLiked,
    Liked,
}

impl LikeState {
    pub fn is_liked(self) -> bool {
        matches!(self, Self::Liked)
    }
}
