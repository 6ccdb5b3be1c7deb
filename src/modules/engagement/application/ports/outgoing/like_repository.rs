use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::engagement::application::domain::entities::{LikeState, PostLike};

#[derive(Debug, Clone, thiserror::Error)]
pub enum LikeRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn count_likes(&self, post_id: &str) -> Result<u64, LikeRepositoryError>;

    async fn find_like(
        &self,
        post_id: &str,
        user_id: &UserId,
    ) -> Result<Option<PostLike>, LikeRepositoryError>;

    /// Flip the pair's state and return the state after the flip.
    async fn toggle_like(
        &self,
        post_id: &str,
        user_id: &UserId,
    ) -> Result<LikeState, LikeRepositoryError>;
}
