use async_trait::async_trait;
use std::sync::Arc;

use crate::post::application::{
    domain::entities::Post,
    ports::{
        incoming::use_cases::{
            AdjustLikesCountUseCase, PostCounterError, ReconcilePostCountersUseCase,
        },
        outgoing::{PostRepository, PostRepositoryError},
    },
};
use crate::revalidation::application::ports::outgoing::{
    notify_view_refresh, ViewRefresher, DASHBOARD_PATH,
};

#[derive(Clone)]
pub struct PostCountersService<R>
where
    R: PostRepository + Send + Sync,
{
    repository: R,
    refresher: Arc<dyn ViewRefresher + Send + Sync>,
}

impl<R> PostCountersService<R>
where
    R: PostRepository + Send + Sync,
{
    pub fn new(repository: R, refresher: Arc<dyn ViewRefresher + Send + Sync>) -> Self {
        Self {
            repository,
            refresher,
        }
    }

    async fn finish(
        &self,
        post_id: &str,
        action: &'static str,
        result: Result<Post, PostRepositoryError>,
    ) -> Result<Post, PostCounterError> {
        match result {
            Ok(post) => {
                notify_view_refresh(self.refresher.as_ref(), DASHBOARD_PATH).await;
                Ok(post)
            }
            Err(PostRepositoryError::NotFound) => Err(PostCounterError::PostNotFound),
            Err(PostRepositoryError::DatabaseError(msg)) => {
                tracing::error!(post_id, action, error = %msg, "Counter update failed");
                Err(PostCounterError::RepositoryError(msg))
            }
        }
    }
}

#[async_trait]
impl<R> AdjustLikesCountUseCase for PostCountersService<R>
where
    R: PostRepository + Send + Sync,
{
    async fn increment(&self, post_id: &str) -> Result<Post, PostCounterError> {
        let result = self.repository.increment_likes(post_id).await;
        self.finish(post_id, "increment_likes", result).await
    }

    async fn decrement(&self, post_id: &str) -> Result<Post, PostCounterError> {
        let result = self.repository.decrement_likes(post_id).await;
        self.finish(post_id, "decrement_likes", result).await
    }
}

#[async_trait]
impl<R> ReconcilePostCountersUseCase for PostCountersService<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(&self, post_id: &str) -> Result<Post, PostCounterError> {
        let result = self.repository.reconcile_counters(post_id).await;
        self.finish(post_id, "reconcile_counters", result).await
    }
}
