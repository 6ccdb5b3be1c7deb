use async_trait::async_trait;
use std::sync::Arc;

use crate::post::application::{
    domain::entities::Post,
    ports::{
        incoming::use_cases::{CreatePostCommand, CreatePostError, CreatePostUseCase},
        outgoing::{NewPost, PostRepository},
    },
};
use crate::revalidation::application::ports::outgoing::{
    notify_view_refresh, ViewRefresher, DASHBOARD_PATH,
};

#[derive(Clone)]
pub struct CreatePostService<R>
where
    R: PostRepository + Send + Sync,
{
    repository: R,
    refresher: Arc<dyn ViewRefresher + Send + Sync>,
}

impl<R> CreatePostService<R>
where
    R: PostRepository + Send + Sync,
{
    pub fn new(repository: R, refresher: Arc<dyn ViewRefresher + Send + Sync>) -> Self {
        Self {
            repository,
            refresher,
        }
    }
}

#[async_trait]
impl<R> CreatePostUseCase for CreatePostService<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(&self, command: CreatePostCommand) -> Result<Post, CreatePostError> {
        let data = NewPost {
            content: command.content().to_string(),
            author_id: command.author_id().clone(),
            is_published: command.is_published(),
        };

        let post = self.repository.create(data).await.map_err(|e| {
            tracing::error!(author_id = %command.author_id(), error = %e, "Failed to create post");
            CreatePostError::RepositoryError(e.to_string())
        })?;

        notify_view_refresh(self.refresher.as_ref(), DASHBOARD_PATH).await;

        Ok(post)
    }
}
