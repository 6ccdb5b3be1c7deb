use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::engagement::application::domain::entities::LikeState;

// Storage failures are logged by the services and collapse to the benign value.

#[async_trait]
pub trait GetLikeCountUseCase: Send + Sync {
    async fn execute(&self, post_id: &str) -> u64;
}

#[async_trait]
pub trait HasUserLikedUseCase: Send + Sync {
    async fn execute(&self, post_id: &str, user_id: &UserId) -> bool;
}

/// Returns the caller's state after the toggle, `None` when it was not stored.
#[async_trait]
pub trait ToggleLikeUseCase: Send + Sync {
    async fn execute(&self, post_id: &str, user_id: &UserId) -> Option<LikeState>;
}
