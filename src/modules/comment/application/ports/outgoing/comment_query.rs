use async_trait::async_trait;

use crate::comment::application::domain::entities::Comment;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommentQuery: Send + Sync {
    /// Every comment of the post, ascending by `created_at`.
    async fn comments_for_post(&self, post_id: &str) -> Result<Vec<Comment>, CommentQueryError>;
}
