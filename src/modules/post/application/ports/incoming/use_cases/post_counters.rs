use async_trait::async_trait;

use crate::post::application::domain::entities::Post;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PostCounterError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// In-place `likes_count` adjustment.
#[async_trait]
pub trait AdjustLikesCountUseCase: Send + Sync {
    async fn increment(&self, post_id: &str) -> Result<Post, PostCounterError>;

    async fn decrement(&self, post_id: &str) -> Result<Post, PostCounterError>;
}

#[async_trait]
pub trait ReconcilePostCountersUseCase: Send + Sync {
    async fn execute(&self, post_id: &str) -> Result<Post, PostCounterError>;
}
