use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::comment::application::domain::entities::Comment;

#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: String,
    pub author_id: UserId,
    pub content: String,
    pub parent_id: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert_comment(&self, data: NewComment) -> Result<Comment, CommentRepositoryError>;
}
