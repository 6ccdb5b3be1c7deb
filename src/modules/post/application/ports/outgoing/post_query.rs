use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::entities::Post;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PostQuery: Send + Sync {
    /// Published posts, newest first.
    async fn list_published(&self) -> Result<Vec<Post>, PostQueryError>;

    /// Published posts of one author, newest first.
    async fn list_published_by_author(&self, author_id: &UserId)
        -> Result<Vec<Post>, PostQueryError>;

    /// Any post regardless of visibility.
    async fn find_by_id(&self, post_id: &str) -> Result<Option<Post>, PostQueryError>;
}
