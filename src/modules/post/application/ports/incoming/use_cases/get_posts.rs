use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId, post::application::domain::entities::Post,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPostsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetPostsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Post>, GetPostsError>;
}

#[async_trait]
pub trait GetPostsByUserUseCase: Send + Sync {
    async fn execute(&self, author_id: &UserId) -> Result<Vec<Post>, GetPostsError>;
}

#[async_trait]
pub trait GetPostByIdUseCase: Send + Sync {
    async fn execute(&self, post_id: &str) -> Result<Option<Post>, GetPostsError>;
}
