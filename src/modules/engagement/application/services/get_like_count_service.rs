use async_trait::async_trait;

use crate::engagement::application::ports::{
    incoming::use_cases::GetLikeCountUseCase, outgoing::LikeRepository,
};

#[derive(Debug, Clone)]
pub struct GetLikeCountService<R>
where
    R: LikeRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetLikeCountService<R>
where
    R: LikeRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetLikeCountUseCase for GetLikeCountService<R>
where
    R: LikeRepository + Send + Sync,
{
    async fn execute(&self, post_id: &str) -> u64 {
        self.repository.count_likes(post_id).await.unwrap_or_else(|e| {
            tracing::error!(post_id, error = %e, "Failed to count likes");
            0
        })
    }
}
