use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::engagement::application::ports::{
    incoming::use_cases::HasUserLikedUseCase, outgoing::LikeRepository,
};

#[derive(Debug, Clone)]
pub struct HasUserLikedService<R>
where
    R: LikeRepository + Send + Sync,
{
    repository: R,
}

impl<R> HasUserLikedService<R>
where
    R: LikeRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> HasUserLikedUseCase for HasUserLikedService<R>
where
    R: LikeRepository + Send + Sync,
{
    async fn execute(&self, post_id: &str, user_id: &UserId) -> bool {
        match self.repository.find_like(post_id, user_id).await {
            Ok(like) => like.is_some(),
            Err(e) => {
                tracing::error!(post_id, user_id = %user_id, error = %e, "Failed to check like");
                false
            }
        }
    }
}
