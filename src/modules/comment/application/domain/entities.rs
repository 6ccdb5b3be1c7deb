use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::UserId;

/// A single stored comment. `parent_id` is `None` for thread roots.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub author_id: UserId,
    pub content: String,
    pub parent_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
