use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::engagement::application::domain::entities::LikeState;
use crate::engagement::application::ports::{
    incoming::use_cases::ToggleLikeUseCase, outgoing::LikeRepository,
};
use crate::revalidation::application::ports::outgoing::{
    notify_view_refresh, ViewRefresher, DASHBOARD_PATH,
};

#[derive(Clone)]
pub struct ToggleLikeService<R>
where
    R: LikeRepository + Send + Sync,
{
    repository: R,
    refresher: Arc<dyn ViewRefresher + Send + Sync>,
}

impl<R> ToggleLikeService<R>
where
    R: LikeRepository + Send + Sync,
{
    pub fn new(repository: R, refresher: Arc<dyn ViewRefresher + Send + Sync>) -> Self {
        Self {
            repository,
            refresher,
        }
    }
}

#[async_trait]
impl<R> ToggleLikeUseCase for ToggleLikeService<R>
where
    R: LikeRepository + Send + Sync,
{
    async fn execute(&self, post_id: &str, user_id: &UserId) -> Option<LikeState> {
        match self.repository.toggle_like(post_id, user_id).await {
            Ok(state) => {
                tracing::debug!(post_id, user_id = %user_id, ?state, "Like toggled");
                notify_view_refresh(self.refresher.as_ref(), DASHBOARD_PATH).await;
                Some(state)
            }
            Err(e) => {
                tracing::error!(post_id, user_id = %user_id, error = %e, "Failed to toggle like");
                None
            }
        }
    }
}
